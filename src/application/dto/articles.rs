use crate::domain::article::{Article, WordCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-model snapshot of an article with its derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDigestDto {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub publication_date: DateTime<Utc>,
    #[serde(default)]
    pub last_edited: Option<DateTime<Utc>>,
    pub length: usize,
    pub introduction: String,
    pub top_words: Vec<WordCount>,
}

impl ArticleDigestDto {
    pub(crate) fn from_parts(
        article: &Article,
        introduction: &str,
        top_words: Vec<WordCount>,
    ) -> Self {
        Self {
            id: article.id().into(),
            title: article.title().as_str().to_owned(),
            author: article.author().as_str().to_owned(),
            publication_date: article.publication_date(),
            last_edited: article.last_edited(),
            length: article.len(),
            introduction: introduction.to_owned(),
            top_words,
        }
    }
}
