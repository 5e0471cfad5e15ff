// src/application/ports/sequence.rs
use crate::domain::article::ArticleId;

/// Source of article identifiers. Every call must return a value strictly
/// greater than the previous one issued by the same generator.
pub trait SequenceGenerator: Send + Sync {
    fn next_id(&self) -> ArticleId;
}
