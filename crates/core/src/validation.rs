//! Presence checks for create/update payloads.
//!
//! The only validation this system performs. Database NOT NULL constraints
//! back these up; the explicit checks exist to return a field-level message
//! instead of a raw constraint violation.

/// Require a field to contain at least one non-whitespace character.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_blank_value() {
        assert!(require_non_blank("year", "1969").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(
            require_non_blank("figure", "").unwrap_err(),
            "figure is required"
        );
        assert!(require_non_blank("period", "   ").is_err());
    }
}
