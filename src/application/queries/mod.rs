pub mod digest;

pub use digest::{ArticleDigestService, DigestArticleQuery, ListDigestsQuery};
