//! Transformation stages applied to a word's working variations.
//!
//! Every stage maps the whole collection produced by the previous stage, so
//! stages compose rather than branch from the original word.

use std::ops::Range;

use super::rules::GenerationRule;

/// A stage of the generation pipeline.
pub type Stage = fn(Vec<String>) -> Vec<String>;

/// Stages in application order. Input rule order never changes this.
pub const PIPELINE: [(GenerationRule, Stage); 4] = [
    (GenerationRule::Leetspeak, apply_leetspeak),
    (GenerationRule::AppendNumbers, append_numbers),
    (GenerationRule::PrependNumbers, prepend_numbers),
    (GenerationRule::SpecialChars, add_special_chars),
];

/// Letter substitutions, applied in table order.
pub const LEETSPEAK: [(char, &[&str]); 7] = [
    ('a', &["4", "@"]),
    ('e', &["3"]),
    ('i', &["1", "!"]),
    ('o', &["0"]),
    ('s', &["5", "$"]),
    ('t', &["7"]),
    ('l', &["1"]),
];

/// Numbers used as affixes (years and other common four-digit numbers).
pub const NUMBER_AFFIXES: Range<u32> = 1000..2024;

pub const SPECIAL_CHARS: [char; 7] = ['!', '@', '#', '$', '%', '&', '*'];

/// Lowercases `word` and replaces every table letter in sequence.
///
/// Each substitute is a full replace-all on the working string. Once the
/// first substitute has replaced a letter there is nothing left for the
/// later ones to match, so a letter always ends up as its first substitute.
pub fn leetspeak(word: &str) -> String {
    let mut leet = word.to_lowercase();
    for (letter, substitutes) in LEETSPEAK {
        for substitute in substitutes {
            leet = leet.replace(letter, substitute);
        }
    }
    leet
}

pub fn apply_leetspeak(words: Vec<String>) -> Vec<String> {
    words.iter().map(|w| leetspeak(w)).collect()
}

pub fn append_numbers(words: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(words.len() * NUMBER_AFFIXES.len());
    for word in &words {
        out.extend(NUMBER_AFFIXES.map(|n| format!("{word}{n}")));
    }
    out
}

pub fn prepend_numbers(words: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(words.len() * NUMBER_AFFIXES.len());
    for word in &words {
        out.extend(NUMBER_AFFIXES.map(|n| format!("{n}{word}")));
    }
    out
}

pub fn add_special_chars(words: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(words.len() * SPECIAL_CHARS.len() * 2);
    for word in &words {
        for special in SPECIAL_CHARS {
            out.push(format!("{word}{special}"));
            out.push(format!("{special}{word}"));
        }
    }
    out
}
