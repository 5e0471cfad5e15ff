// tests/support/builders.rs
use std::sync::Arc;

use article_digest::domain::article::{Article, ArticleFactory};
use article_digest::infrastructure::AtomicSequence;
use chrono::{DateTime, Utc};

use super::mocks::{ManualClock, fixed_now};

pub struct ArticleBuilder {
    title: String,
    author: String,
    publication_date: DateTime<Utc>,
    content: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            author: "Test Author".into(),
            publication_date: fixed_now(),
            content: "Test body".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.publication_date = at;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Build through `Article::new`, drawing from the process-wide sequence.
    pub fn build(self) -> Article {
        Article::new(self.title, self.author, self.publication_date, self.content)
    }

    pub fn build_with(self, factory: &ArticleFactory) -> Article {
        factory.create(self.title, self.author, self.publication_date, self.content)
    }
}

/// Factory with a fresh sequence starting at zero and a manual clock.
pub fn test_factory() -> (ArticleFactory, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let factory = ArticleFactory::new(Arc::new(AtomicSequence::new()), clock.clone());
    (factory, clock)
}
