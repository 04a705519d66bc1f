//! The policy for paid time off that exceeds an employee's PTO balance.

use std::fmt::Display;

use clap::ValueEnum;

use crate::Error;

/// Controls whether a paid subtraction may take `pto_left` below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum NegativeBalancePolicy {
    /// Record the time off and let the balance go negative.
    #[default]
    Allow,
    /// Refuse time off that would leave the balance negative.
    Reject,
}

impl NegativeBalancePolicy {
    /// Check that subtracting `hours` from `pto_left` is permitted.
    ///
    /// # Errors
    /// Returns [Error::InsufficientPto] if the policy is [NegativeBalancePolicy::Reject]
    /// and `hours` is greater than `pto_left`.
    pub fn check(self, pto_left: i64, hours: i64) -> Result<(), Error> {
        match self {
            NegativeBalancePolicy::Allow => Ok(()),
            NegativeBalancePolicy::Reject => match pto_left.checked_sub(hours) {
                Some(remaining) if remaining >= 0 => Ok(()),
                _ => Err(Error::InsufficientPto {
                    requested: hours,
                    available: pto_left,
                }),
            },
        }
    }
}

impl Display for NegativeBalancePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegativeBalancePolicy::Allow => write!(f, "allow"),
            NegativeBalancePolicy::Reject => write!(f, "reject"),
        }
    }
}
