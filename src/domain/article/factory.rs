// src/domain/article/factory.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::{sequence::SequenceGenerator, time::Clock};
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleAuthor, ArticleTitle};
use crate::infrastructure::{sequence::ProcessSequence, time::SystemClock};

/// Builds articles from an id sequence and a clock.
///
/// `ArticleFactory::system()` is what `Article::new` uses; tests inject a
/// seeded sequence and a manual clock instead.
#[derive(Clone)]
pub struct ArticleFactory {
    sequence: Arc<dyn SequenceGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleFactory {
    pub fn new(sequence: Arc<dyn SequenceGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { sequence, clock }
    }

    pub fn system() -> Self {
        Self::new(Arc::new(ProcessSequence), Arc::new(SystemClock))
    }

    pub fn create(
        &self,
        title: impl Into<ArticleTitle>,
        author: impl Into<ArticleAuthor>,
        publication_date: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Article {
        let id = self.sequence.next_id();
        let article = Article::assemble(
            id,
            title.into(),
            author.into(),
            publication_date,
            content.into(),
            Arc::clone(&self.clock),
        );
        tracing::debug!(
            article_id = %id,
            title = %article.title(),
            length = article.len(),
            "article created"
        );
        article
    }
}
