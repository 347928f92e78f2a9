//! Generation rules and rule sets.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unknown generation rule: {0}")]
    UnknownRule(String),
}

/// A named transformation applied to candidate passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GenerationRule {
    AppendNumbers,
    PrependNumbers,
    Leetspeak,
    SpecialChars,
}

impl GenerationRule {
    pub const ALL: [GenerationRule; 4] = [
        GenerationRule::AppendNumbers,
        GenerationRule::PrependNumbers,
        GenerationRule::Leetspeak,
        GenerationRule::SpecialChars,
    ];

    /// Wire name, as submitted by forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationRule::AppendNumbers => "append_numbers",
            GenerationRule::PrependNumbers => "prepend_numbers",
            GenerationRule::Leetspeak => "leetspeak",
            GenerationRule::SpecialChars => "special_chars",
        }
    }

    fn bit(self) -> u8 {
        match self {
            GenerationRule::AppendNumbers => 1,
            GenerationRule::PrependNumbers => 1 << 1,
            GenerationRule::Leetspeak => 1 << 2,
            GenerationRule::SpecialChars => 1 << 3,
        }
    }
}

impl fmt::Display for GenerationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenerationRule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| RuleError::UnknownRule(s.to_string()))
    }
}

/// The rules requested for one generation. Only membership matters; the
/// generator applies rules in its own fixed order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet(u8);

impl RuleSet {
    /// No rule requested. The generator treats it as [`RuleSet::default`].
    pub const fn empty() -> Self {
        RuleSet(0)
    }

    /// Maps raw rule names, skipping names that are not recognized.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| match name.as_ref().parse::<GenerationRule>() {
                Ok(rule) => Some(rule),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Ignoring rule: {}", _e);
                    None
                }
            })
            .collect()
    }

    pub fn insert(&mut self, rule: GenerationRule) {
        self.0 |= rule.bit();
    }

    pub fn contains(&self, rule: GenerationRule) -> bool {
        self.0 & rule.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = GenerationRule> + '_ {
        GenerationRule::ALL
            .into_iter()
            .filter(|rule| self.contains(*rule))
    }
}

/// Appending numbers is the default when no rule is requested.
impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::from(GenerationRule::AppendNumbers)
    }
}

impl From<GenerationRule> for RuleSet {
    fn from(rule: GenerationRule) -> Self {
        RuleSet(rule.bit())
    }
}

impl FromIterator<GenerationRule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = GenerationRule>>(iter: T) -> Self {
        let mut set = RuleSet::empty();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl<const N: usize> From<[GenerationRule; N]> for RuleSet {
    fn from(rules: [GenerationRule; N]) -> Self {
        rules.into_iter().collect()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
