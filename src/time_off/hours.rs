use crate::Error;

/// Parse a number of hours from a form field.
///
/// # Errors
/// Returns [Error::InvalidHours] if `raw` is not a whole number greater than zero.
pub(super) fn parse_hours(raw: &str) -> Result<i64, Error> {
    match raw.parse::<i64>() {
        Ok(hours) if hours > 0 => Ok(hours),
        _ => Err(Error::InvalidHours(raw.to_owned())),
    }
}

/// Check that adding `hours` to each of `increased` and taking it from each of
/// `decreased` keeps every counter within range.
///
/// # Errors
/// Returns [Error::HoursOutOfRange] if any counter would overflow.
pub(super) fn check_counters(
    increased: &[i64],
    decreased: &[i64],
    hours: i64,
) -> Result<(), Error> {
    let fits = increased
        .iter()
        .all(|counter| counter.checked_add(hours).is_some())
        && decreased
            .iter()
            .all(|counter| counter.checked_sub(hours).is_some());

    if fits {
        Ok(())
    } else {
        Err(Error::HoursOutOfRange(hours))
    }
}
