// src/config.rs
use crate::domain::article::word_frequency::{DEFAULT_MAX_WORD_LEN, TieBreak};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    max_word_len: usize,
    tie_break: TieBreak,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_max_word_len() -> usize {
    DEFAULT_MAX_WORD_LEN
}

fn default_tie_break() -> TieBreak {
    TieBreak::FirstWordPosition
}

impl AnalysisConfig {
    /// Build a validated configuration. `max_word_len` must be at least 1.
    pub fn new(max_word_len: usize, tie_break: TieBreak) -> Result<Self, ConfigError> {
        if max_word_len == 0 {
            return Err(ConfigError::Invalid(
                "max_word_len must be at least 1".into(),
            ));
        }
        Ok(Self {
            max_word_len,
            tie_break,
        })
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Longest run of letters still counted as a word.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_word_len: default_max_word_len(),
            tie_break: default_tie_break(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_word_len(), 100);
        assert_eq!(config.tie_break(), TieBreak::FirstWordPosition);
    }

    #[test]
    fn rejects_zero_word_length() {
        assert!(matches!(
            AnalysisConfig::new(0, TieBreak::default()),
            Err(ConfigError::Invalid(_))
        ));
        assert!(AnalysisConfig::new(1, TieBreak::RawSubstring).is_ok());
        assert!(AnalysisConfig::new(1000, TieBreak::default()).is_ok());
    }
}
