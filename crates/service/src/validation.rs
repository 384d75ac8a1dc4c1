//! Input checks shared by the movie and actor services.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::ActorInput;
use crate::errors::ServiceError;

/// Column width of titles and actor names.
pub const MAX_TEXT_LEN: usize = 255;

/// `true` iff `s` is a real calendar date written as `YYYY-MM-DD`.
pub fn is_date_in_format(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return false;
    }
    let digits_ok = b
        .iter()
        .enumerate()
        .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    digits_ok && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Letters only, lowercased: `"John Doe"` and `"john-doe"` both become `"johndoe"`.
pub fn normalize_actor_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `true` when two submitted actors share a normalized name.
pub fn has_duplicate_actors(actors: &[ActorInput]) -> bool {
    let distinct: HashSet<String> = actors.iter().map(|a| normalize_actor_name(&a.name)).collect();
    distinct.len() < actors.len()
}

/// A required text field as submitted, `None` when absent or blank.
pub(crate) fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject text wider than its column.
pub(crate) fn check_length(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ServiceError::Validation(format!("{field} longer than {MAX_TEXT_LEN} characters")));
    }
    Ok(())
}
