// src/domain/article/word_frequency.rs
//! Word-frequency ranking over article content.
//!
//! Content is lowercased and cut into maximal runs of word characters
//! (letters, numbers and `_`). A run is a token only when it consists solely
//! of ASCII letters `a`-`z` and is at most `max_word_len` long. Longer runs
//! are dropped rather than truncated, and a run glued to digits, underscores
//! or non-ASCII letters never counts. Combining marks are not word
//! characters, so they split runs.
//!
//! The ranking orders words by count, highest first. Equal counts are ordered
//! by where each word first shows up in the text, as selected by [`TieBreak`].

use crate::config::AnalysisConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_MAX_WORD_LEN: usize = 100;

/// Maximal run of word characters.
static WORD_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("Invalid word run regex"));

static DEFAULT_ANALYZER: LazyLock<WordFrequencyAnalyzer> =
    LazyLock::new(|| WordFrequencyAnalyzer::new(&AnalysisConfig::default()));

/// Position used to order words whose counts are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First full-word match of the token in the lowercased content.
    #[default]
    FirstWordPosition,
    /// First substring match of the token in the raw content. A word that
    /// never occurs verbatim (for example only capitalised) sorts ahead of
    /// every word that does. Kept for output compatibility with older
    /// digests.
    RawSubstring,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Words in rank order, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordRanking(Vec<WordCount>);

impl WordRanking {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.0.iter()
    }

    /// Count recorded for `word`, if it made the ranking.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.iter().find(|entry| entry.word == word).map(|entry| entry.count)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.word.as_str())
    }

    pub fn as_slice(&self) -> &[WordCount] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<WordCount> {
        self.0
    }
}

impl<'a> IntoIterator for &'a WordRanking {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for WordRanking {
    type Item = WordCount;
    type IntoIter = std::vec::IntoIter<WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

struct Tally<'a> {
    word: &'a str,
    count: usize,
    first_match: usize,
}

#[derive(Debug, Clone)]
pub struct WordFrequencyAnalyzer {
    max_word_len: usize,
    tie_break: TieBreak,
}

impl WordFrequencyAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_word_len: config.max_word_len(),
            tie_break: config.tie_break(),
        }
    }

    /// Analyzer built from `AnalysisConfig::default()`.
    pub fn shared() -> &'static WordFrequencyAnalyzer {
        &DEFAULT_ANALYZER
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    fn is_token(&self, run: &str) -> bool {
        run.len() <= self.max_word_len && run.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Rank every word of `content` and keep the first `n_words`.
    pub fn most_common_words(&self, content: &str, n_words: usize) -> WordRanking {
        if n_words == 0 {
            return WordRanking::default();
        }

        let lowered = content.to_lowercase();
        let tallies = self.tally(&lowered);
        let ranked = match self.tie_break {
            TieBreak::FirstWordPosition => rank_by_first_match(tallies),
            TieBreak::RawSubstring => rank_by_raw_substring(tallies, content),
        };

        tracing::trace!(
            distinct = ranked.len(),
            requested = n_words,
            tie_break = ?self.tie_break,
            "ranked article words"
        );

        WordRanking(
            ranked
                .into_iter()
                .take(n_words)
                .map(|tally| WordCount {
                    word: tally.word.to_owned(),
                    count: tally.count,
                })
                .collect(),
        )
    }

    /// Per-word counts in first-encounter order.
    fn tally<'a>(&self, lowered: &'a str) -> Vec<Tally<'a>> {
        let mut slots: HashMap<&'a str, usize> = HashMap::new();
        let mut tallies: Vec<Tally<'a>> = Vec::new();

        for found in WORD_RUN_REGEX.find_iter(lowered) {
            let word = found.as_str();
            if !self.is_token(word) {
                continue;
            }
            match slots.get(word) {
                Some(&slot) => tallies[slot].count += 1,
                None => {
                    slots.insert(word, tallies.len());
                    tallies.push(Tally {
                        word,
                        count: 1,
                        first_match: found.start(),
                    });
                }
            }
        }

        tallies
    }
}

fn rank_by_first_match(mut tallies: Vec<Tally<'_>>) -> Vec<Tally<'_>> {
    tallies.sort_by_key(|tally| (Reverse(tally.count), tally.first_match));
    tallies
}

// Equal counts start out in reverse first-encounter order; the stable sort
// keeps that order between words sharing a raw position (or both missing).
fn rank_by_raw_substring<'a>(mut tallies: Vec<Tally<'a>>, raw: &str) -> Vec<Tally<'a>> {
    tallies.reverse();
    let mut keyed: Vec<(Option<usize>, Tally<'a>)> = tallies
        .into_iter()
        .map(|tally| (raw.find(tally.word), tally))
        .collect();
    keyed.sort_by_key(|(position, tally)| (Reverse(tally.count), *position));
    keyed.into_iter().map(|(_, tally)| tally).collect()
}
