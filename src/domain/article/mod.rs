pub mod attribute;
pub mod entity;
pub mod factory;
pub mod preview;
pub mod value_objects;
pub mod word_frequency;

pub use attribute::{AttributeKind, AttributeValue, TypedAttribute};
pub use entity::{ATTR_NAME, Article};
pub use factory::ArticleFactory;
pub use value_objects::{ArticleAuthor, ArticleId, ArticleTitle};
pub use word_frequency::{TieBreak, WordCount, WordFrequencyAnalyzer, WordRanking};
