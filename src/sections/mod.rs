//! Password analysis sections
//!
//! Each section measures one aspect of a password. The analyzer combines
//! their outputs into a single report.

mod crack_time;
mod length;
mod pattern;
mod variety;

pub use crack_time::{entropy_bits, estimate_crack_time, format_crack_time};
pub use length::{length_section, MIN_LENGTH};
pub use pattern::{pattern_section, predictability_section};
pub use variety::{character_variety_section, CharClasses};

/// Result type for advisory sections.
/// - `Some(advice)` - section produced an advisory
/// - `None` - section passed
pub type SectionResult = Option<&'static str>;
