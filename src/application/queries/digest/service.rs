use crate::config::AnalysisConfig;
use crate::domain::article::WordFrequencyAnalyzer;

/// Builds digests of articles with a configured word analyzer.
#[derive(Debug, Clone)]
pub struct ArticleDigestService {
    pub(super) analyzer: WordFrequencyAnalyzer,
}

impl ArticleDigestService {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            analyzer: WordFrequencyAnalyzer::new(config),
        }
    }
}
