//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

const LOWER_SIZE: u32 = 26;
const UPPER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
// Approximation, independent of which symbols are actually used.
const SPECIAL_SIZE: u32 = 32;

/// Which of the four character classes occur in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharClasses {
    /// Classifies every character of `password`. Anything that is not an
    /// ASCII letter or digit counts as special, including non-ASCII decimal
    /// digits.
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut classes, c| {
            match c {
                'A'..='Z' => classes.upper = true,
                'a'..='z' => classes.lower = true,
                '0'..='9' => classes.digit = true,
                _ => classes.special = true,
            }
            classes
        })
    }

    pub fn count(&self) -> usize {
        [self.upper, self.lower, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Fraction of the four classes present, in `[0, 1]`.
    pub fn complexity(&self) -> f64 {
        self.count() as f64 / 4.0
    }

    /// Size of the alphabet an attacker would have to search.
    pub fn char_set_size(&self) -> u32 {
        let mut size = 0;
        if self.lower {
            size += LOWER_SIZE;
        }
        if self.upper {
            size += UPPER_SIZE;
        }
        if self.digit {
            size += DIGIT_SIZE;
        }
        if self.special {
            size += SPECIAL_SIZE;
        }
        size
    }
}

/// Returns one advisory per missing class group, in a fixed order.
pub fn character_variety_section(classes: &CharClasses) -> Vec<&'static str> {
    [
        (!(classes.upper && classes.lower))
            .then_some("Include both uppercase and lowercase letters."),
        (!classes.digit).then_some("Add numbers for better strength."),
        (!classes.special).then_some("Include special characters like !@#$%."),
    ]
    .into_iter()
    .flatten()
    .collect()
}
