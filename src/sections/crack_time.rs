//! Entropy and brute-force crack time estimates.

/// Hypothetical offline attack rate, in guesses per second.
const GUESSES_PER_SECOND: f64 = 1e10;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// `length * log2(char_set_size)`, or zero when no class is present.
pub fn entropy_bits(length: usize, char_set_size: u32) -> f64 {
    if char_set_size == 0 {
        return 0.0;
    }
    length as f64 * f64::from(char_set_size).log2()
}

/// Time to exhaust `char_set_size^length` combinations at the fixed rate,
/// formatted for display.
pub fn estimate_crack_time(length: usize, char_set_size: u32) -> String {
    format_crack_time(combinations(length, char_set_size) / GUESSES_PER_SECOND)
}

// Exact integer power rounded to f64 once; pow() past u128.
// An empty password still has one combination: 0^0 == 1.
fn combinations(length: usize, char_set_size: u32) -> f64 {
    u32::try_from(length)
        .ok()
        .and_then(|exp| u128::from(char_set_size).checked_pow(exp))
        .map(|exact| exact as f64)
        .unwrap_or_else(|| f64::from(char_set_size).powf(length as f64))
}

/// Renders `seconds` in the largest unit whose threshold it reaches.
pub fn format_crack_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "centuries".to_string();
    }
    if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else {
        format!("{:.2} years", seconds / YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_zero_charset() {
        assert_eq!(entropy_bits(0, 0), 0.0);
        assert_eq!(entropy_bits(12, 0), 0.0);
    }

    #[test]
    fn test_entropy_bits() {
        // 8 lowercase letters: 8 * log2(26)
        let bits = entropy_bits(8, 26);
        assert!((bits - 8.0 * 26f64.log2()).abs() < 1e-9);
        // 64 symbols: exactly 6 bits each
        assert_eq!(entropy_bits(10, 64), 60.0);
    }

    #[test]
    fn test_format_boundaries() {
        assert_eq!(format_crack_time(59.0), "59.00 seconds");
        assert_eq!(format_crack_time(60.0), "1.00 minutes");
        assert_eq!(format_crack_time(3_599.0), "59.98 minutes");
        assert_eq!(format_crack_time(3_600.0), "1.00 hours");
        assert_eq!(format_crack_time(86_399.0), "24.00 hours");
        assert_eq!(format_crack_time(86_400.0), "1.00 days");
        assert_eq!(format_crack_time(31_535_999.0), "365.00 days");
        assert_eq!(format_crack_time(31_536_000.0), "1.00 years");
    }

    #[test]
    fn test_estimate_empty_password() {
        // 0^0 combinations = 1, a tenth of a nanosecond
        assert_eq!(estimate_crack_time(0, 0), "0.00 seconds");
    }

    #[test]
    fn test_estimate_digits_only() {
        // 10^12 / 1e10 = 100 seconds
        assert_eq!(estimate_crack_time(12, 10), "1.67 minutes");
    }

    #[test]
    fn test_estimate_long_password_exact_power() {
        // 26^24 rounded to f64 once, not by repeated multiplication
        assert_eq!(estimate_crack_time(24, 26), "28877111141353420.00 years");
    }

    #[test]
    fn test_combinations_exact_within_u128() {
        assert_eq!(combinations(33, 10), 1e33);
        assert_eq!(combinations(0, 0), 1.0);
        assert_eq!(combinations(3, 0), 0.0);
    }

    #[test]
    fn test_combinations_past_u128() {
        // 94^20 does not fit in u128
        let c = combinations(20, 94);
        assert!(c.is_finite());
        assert!((c / 94f64.powf(20.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_overflow() {
        assert_eq!(estimate_crack_time(400, 94), "centuries");
    }
}
