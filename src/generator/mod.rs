//! Wordlist generation from base words and transformation rules.

mod rules;
mod transforms;

use std::collections::BTreeSet;
use std::sync::LazyLock;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

pub use rules::{GenerationRule, RuleError, RuleSet};
pub use transforms::{leetspeak, Stage, LEETSPEAK, NUMBER_AFFIXES, PIPELINE, SPECIAL_CHARS};

static DEFAULT_GENERATOR: LazyLock<WordlistGenerator> = LazyLock::new(WordlistGenerator::new);

/// Deduplicated candidate passwords, enumerated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: BTreeSet<String>,
}

impl Wordlist {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The first `limit` words, for size-limited display.
    pub fn preview(&self, limit: usize) -> Vec<String> {
        self.words.iter().take(limit).cloned().collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.words.into_iter().collect()
    }

    fn extend(&mut self, variations: Vec<String>) {
        self.words.extend(variations);
    }
}

impl IntoIterator for Wordlist {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Expands base words through the fixed rule pipeline.
///
/// Stages run in the order Leetspeak, AppendNumbers, PrependNumbers,
/// SpecialChars; each requested stage transforms the output of the previous
/// one. No cap is applied: two numeric rules multiply the output by 1024
/// twice.
#[derive(Debug, Clone)]
pub struct WordlistGenerator {
    pipeline: &'static [(GenerationRule, Stage)],
}

impl Default for WordlistGenerator {
    fn default() -> Self {
        Self { pipeline: &PIPELINE }
    }
}

impl WordlistGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variations of a single base word. An empty rule set falls back to
    /// [`RuleSet::default`].
    pub fn variations(&self, word: &str, rules: &RuleSet) -> Vec<String> {
        let rules = if rules.is_empty() { RuleSet::default() } else { *rules };
        self.pipeline
            .iter()
            .filter(|(rule, _)| rules.contains(*rule))
            .fold(vec![word.to_string()], |variations, (_, stage)| stage(variations))
    }

    /// Generates the merged wordlist for all `base_words`.
    pub fn generate<I, S>(&self, base_words: I, rules: &RuleSet) -> Wordlist
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wordlist = Wordlist::default();
        for word in base_words {
            wordlist.extend(self.variations(word.as_ref(), rules));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Generated {} candidates with rules {:?}", wordlist.len(), rules);

        wordlist
    }

    /// Like [`generate`](Self::generate), but stops between base words once
    /// `token` is cancelled and returns `None`.
    #[cfg(feature = "async")]
    pub fn generate_cancellable<I, S>(
        &self,
        base_words: I,
        rules: &RuleSet,
        token: &CancellationToken,
    ) -> Option<Wordlist>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wordlist = Wordlist::default();
        for word in base_words {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Generation cancelled after {} candidates", wordlist.len());
                return None;
            }
            wordlist.extend(self.variations(word.as_ref(), rules));
        }
        Some(wordlist)
    }
}

/// Generates a wordlist with the default generator.
pub fn generate_wordlist<I, S>(base_words: I, rules: &RuleSet) -> Wordlist
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_GENERATOR.generate(base_words, rules)
}

/// Cancellable generation with the default generator.
#[cfg(feature = "async")]
pub fn generate_wordlist_cancellable<I, S>(
    base_words: I,
    rules: &RuleSet,
    token: &CancellationToken,
) -> Option<Wordlist>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_GENERATOR.generate_cancellable(base_words, rules, token)
}

/// Async version that generates on the blocking pool and sends the wordlist
/// via channel. Nothing is sent if `token` is cancelled first.
#[cfg(feature = "async")]
pub async fn generate_wordlist_tx(
    base_words: Vec<String>,
    rules: RuleSet,
    token: CancellationToken,
    tx: mpsc::Sender<Wordlist>,
) {
    let task = tokio::task::spawn_blocking(move || {
        generate_wordlist_cancellable(&base_words, &rules, &token)
    });

    let wordlist = match task.await {
        Ok(Some(wordlist)) => wordlist,
        Ok(None) => return,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist generation task failed: {}", _e);
            return;
        }
    };

    if let Err(_e) = tx.send(wordlist).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send wordlist: {}", _e);
    }
}
