//! Reusable field validators for request DTOs.

use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty or whitespace-only text.
///
/// `validator`'s `length(min = 1)` accepts `"   "`, which the API treats as
/// missing.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text() {
        assert!(not_blank("Salvador").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
    }
}
