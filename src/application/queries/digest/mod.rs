pub mod list;
pub mod service;
pub mod summarize;

pub use service::ArticleDigestService;
pub use list::ListDigestsQuery;
pub use summarize::DigestArticleQuery;
