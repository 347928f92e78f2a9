//! Length section - checks password minimum length.

use super::SectionResult;

/// Passwords shorter than this are flagged and penalized.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// `length` is counted in characters, not bytes.
pub fn length_section(length: usize) -> SectionResult {
    if length < MIN_LENGTH {
        return Some("Password is too short. Use at least 8 characters.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            length_section(7),
            Some("Password is too short. Use at least 8 characters.")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(MIN_LENGTH), None);
    }

    #[test]
    fn test_length_section_empty() {
        assert!(length_section(0).is_some());
    }
}
