//! Recording earned hours and time off taken against employee balances.

mod add;
mod hours;
mod state;
mod subtract;

pub use add::{AddForm, add_hours_endpoint, get_add_page};
pub use state::TimeOffState;
pub use subtract::{SubtractForm, get_subtract_page, subtract_hours_endpoint};
