//! Password strength analyzer - main evaluation logic.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::common::CommonPasswords;
use crate::sections::{
    character_variety_section, entropy_bits, estimate_crack_time, length_section,
    pattern_section, predictability_section, CharClasses,
};

static DEFAULT_ANALYZER: LazyLock<PasswordAnalyzer> = LazyLock::new(PasswordAnalyzer::new);

const ENTROPY_WEIGHT: f64 = 0.4;
const COMPLEXITY_WEIGHT: f64 = 0.3;
const PREDICTABILITY_WEIGHT: f64 = 0.3;
// Entropy is scaled so that 100 bits contributes the full weight.
const ENTROPY_SCALE: f64 = 100.0;

/// Coarse bucket for a report score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Outcome of analyzing one password.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrengthReport {
    /// Overall score, always within `[0, 1]`.
    pub score: f64,
    /// Length in characters.
    pub length: usize,
    /// Fraction of character classes present.
    pub complexity: f64,
    /// Sum of pattern penalties. Unbounded.
    pub predictability: f64,
    #[cfg_attr(feature = "serde", serde(rename = "entropy"))]
    pub entropy_bits: f64,
    pub feedback: Vec<String>,
    pub crack_time: String,
}

impl StrengthReport {
    pub fn strength(&self) -> StrengthLevel {
        match self.score {
            s if s < 0.4 => StrengthLevel::Weak,
            s if s < 0.6 => StrengthLevel::Medium,
            s if s < 0.8 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

/// Scores passwords against a fixed common-password list.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PasswordAnalyzer {
    common: CommonPasswords,
}

impl PasswordAnalyzer {
    /// Analyzer backed by the built-in common-password list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_common_passwords(common: CommonPasswords) -> Self {
        Self { common }
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Analyzes `password` and returns a detailed report.
    ///
    /// Never fails: an empty password yields a zero-entropy report.
    pub fn analyze(&self, password: &SecretString) -> StrengthReport {
        let pwd = password.expose_secret();
        let length = pwd.chars().count();

        let classes = CharClasses::of(pwd);
        let complexity = classes.complexity();
        let predictability = predictability_section(pwd, length, &self.common);

        let char_set_size = classes.char_set_size();
        let entropy = entropy_bits(length, char_set_size);

        let score = (entropy / ENTROPY_SCALE * ENTROPY_WEIGHT)
            + (complexity * COMPLEXITY_WEIGHT)
            + ((1.0 - predictability) * PREDICTABILITY_WEIGHT);
        let score = score.clamp(0.0, 1.0);

        // Orchestrator: advisories in fixed order
        let mut feedback = Vec::new();
        feedback.extend(length_section(length));
        feedback.extend(character_variety_section(&classes));
        feedback.extend(pattern_section(predictability));

        StrengthReport {
            score,
            length,
            complexity,
            predictability,
            entropy_bits: entropy,
            feedback: feedback.into_iter().map(str::to_string).collect(),
            crack_time: estimate_crack_time(length, char_set_size),
        }
    }
}

/// Analyzes `password` with the built-in common-password list.
pub fn analyze_strength(password: &SecretString) -> StrengthReport {
    DEFAULT_ANALYZER.analyze(password)
}

/// Async version that sends the report via channel.
///
/// Waits a short debounce first; if `token` is cancelled by then, nothing is
/// sent.
#[cfg(feature = "async")]
pub async fn analyze_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::debug!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled before start");
        return;
    }

    let report = analyze_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", _e);
    }
}
