use chrono::{DateTime, Utc};

/// Checks that a start date falls strictly before an end date.
///
/// This is the sole domain invariant of the system: every mutation path that
/// touches an announcement's dates must reconfirm it holds afterwards. Equal
/// timestamps are invalid.
///
/// # Arguments
/// - `start_date` - The starting date to compare with
/// - `end_date` - The ending date to compare to
///
/// # Returns
/// - `true` - The starting date is strictly before the ending date
pub fn is_date_before(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> bool {
    start_date < end_date
}
