use super::{ArticleDigestService, DigestArticleQuery};
use crate::application::{
    dto::ArticleDigestDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::Article;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListDigestsQuery {
    /// Maximum number of digests; `None` returns all of them.
    pub limit: Option<usize>,
    pub digest: DigestArticleQuery,
}

impl ArticleDigestService {
    /// Digests of `articles`, most recently published first.
    pub fn list_digests(
        &self,
        articles: &[Article],
        query: ListDigestsQuery,
    ) -> ApplicationResult<Vec<ArticleDigestDto>> {
        if query.limit == Some(0) {
            return Err(ApplicationError::validation("limit must be positive"));
        }

        let mut ordered: Vec<&Article> = articles.iter().collect();
        ordered.sort_by(|a, b| b.cmp(a));

        Ok(ordered
            .into_iter()
            .take(query.limit.unwrap_or(usize::MAX))
            .map(|article| self.digest_article(article, query.digest))
            .collect())
    }
}
