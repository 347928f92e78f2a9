//! Password strength analysis and wordlist generation library
//!
//! Two independent engines:
//!
//! - [`PasswordAnalyzer`] scores a password from its character classes,
//!   predictable patterns, an entropy estimate and a rough crack time.
//! - [`WordlistGenerator`] expands base words into candidate passwords with
//!   leetspeak, numeric affixes and special-character affixes.
//!
//! Both hold only immutable tables after construction and can be shared
//! freely between threads.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery and cancellable generation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serialization of reports, rules and previews
//!
//! # Environment Variables
//!
//! - `PWD_AUDIT_COMMON_PASSWORDS`: Custom common-password file, read by
//!   [`CommonPasswords::from_env`] (default: built-in list)
//!
//! # Example
//!
//! ```rust
//! use pwd_audit::{analyze_strength, generate_wordlist, GenerationRule, RuleSet};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze_strength(&password);
//! println!("Score: {:.2}", report.score);
//! println!("Crack time: {}", report.crack_time);
//!
//! let rules = RuleSet::from([GenerationRule::Leetspeak, GenerationRule::AppendNumbers]);
//! let wordlist = generate_wordlist(["password", "admin"], &rules);
//! assert_eq!(wordlist.len(), 2 * 1024);
//! ```

// Internal modules
mod analyzer;
mod common;
mod sections;

pub mod boundary;
pub mod generator;

// Public API
pub use analyzer::{analyze_strength, PasswordAnalyzer, StrengthLevel, StrengthReport};
pub use common::{CommonPasswords, CommonPasswordsError, COMMON_PASSWORDS_ENV};
pub use generator::{generate_wordlist, GenerationRule, RuleError, RuleSet, Wordlist, WordlistGenerator};
pub use sections::format_crack_time;

#[cfg(feature = "async")]
pub use analyzer::analyze_strength_tx;

#[cfg(feature = "async")]
pub use generator::{generate_wordlist_cancellable, generate_wordlist_tx};
