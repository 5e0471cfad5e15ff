// src/domain/article/entity.rs
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::application::ports::time::Clock;
use crate::domain::article::attribute::{AttributeKind, AttributeValue, TypedAttribute};
use crate::domain::article::factory::ArticleFactory;
use crate::domain::article::preview;
use crate::domain::article::value_objects::{ArticleAuthor, ArticleId, ArticleTitle};
use crate::domain::article::word_frequency::{WordFrequencyAnalyzer, WordRanking};
use crate::domain::errors::DomainResult;

/// Name of the integer attribute carried by every article.
pub const ATTR_NAME: &str = "attr";

/// A single text document.
///
/// Articles compare and order by publication date only: two articles
/// published at the same instant are equal under `==`, whatever their
/// content.
#[derive(Clone)]
pub struct Article {
    id: ArticleId,
    title: ArticleTitle,
    author: ArticleAuthor,
    publication_date: DateTime<Utc>,
    content: String,
    last_edited: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    attr: TypedAttribute,
    clock: Arc<dyn Clock>,
}

impl Article {
    /// Create an article with an id from the process-wide sequence, stamped
    /// by the system clock.
    pub fn new(
        title: impl Into<ArticleTitle>,
        author: impl Into<ArticleAuthor>,
        publication_date: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        ArticleFactory::system().create(title, author, publication_date, content)
    }

    pub(crate) fn assemble(
        id: ArticleId,
        title: ArticleTitle,
        author: ArticleAuthor,
        publication_date: DateTime<Utc>,
        content: String,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let created_at = clock.now();
        let mut article = Self {
            id,
            title,
            author,
            publication_date,
            content: String::new(),
            last_edited: None,
            created_at,
            attr: TypedAttribute::new(ATTR_NAME, AttributeKind::Integer),
            clock,
        };
        article.set_content(content);
        article
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn author(&self) -> &ArticleAuthor {
        &self.author
    }

    pub fn publication_date(&self) -> DateTime<Utc> {
        self.publication_date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_edited(&self) -> Option<DateTime<Utc>> {
        self.last_edited
    }

    /// Replace the content and restamp `last_edited`.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        // last_edited never moves backwards, even if the clock does.
        let floor = self.last_edited.unwrap_or(self.created_at);
        let stamp = self.clock.now().max(floor);
        self.last_edited = Some(stamp);
        tracing::trace!(article_id = %self.id, last_edited = %stamp, "article content stamped");
    }

    pub fn attr(&self) -> &TypedAttribute {
        &self.attr
    }

    pub fn set_attr(&mut self, value: impl Into<AttributeValue>) -> DomainResult<()> {
        self.attr.set(value)
    }

    /// See [`preview::short_introduction`].
    pub fn short_introduction(&self, n_characters: usize) -> &str {
        preview::short_introduction(&self.content, n_characters)
    }

    pub fn most_common_words(&self, n_words: usize) -> WordRanking {
        self.most_common_words_with(WordFrequencyAnalyzer::shared(), n_words)
    }

    pub fn most_common_words_with(
        &self,
        analyzer: &WordFrequencyAnalyzer,
        n_words: usize,
    ) -> WordRanking {
        analyzer.most_common_words(&self.content, n_words)
    }

    /// Number of characters in the content.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn compare_to(&self, other: &Article) -> Ordering {
        self.publication_date.cmp(&other.publication_date)
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.publication_date == other.publication_date
    }
}

impl Eq for Article {}

impl PartialOrd for Article {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Article {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Article title=\"{}\" author='{}' publication_date='{}'>",
            self.title,
            self.author,
            self.publication_date
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("author", &self.author)
            .field("publication_date", &self.publication_date)
            .field("content", &self.content)
            .field("last_edited", &self.last_edited)
            .field("created_at", &self.created_at)
            .field("attr", &self.attr)
            .finish_non_exhaustive()
    }
}
