use super::ArticleDigestService;
use crate::application::dto::ArticleDigestDto;
use crate::domain::article::Article;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestArticleQuery {
    pub intro_chars: usize,
    pub top_words: usize,
}

impl Default for DigestArticleQuery {
    fn default() -> Self {
        Self {
            intro_chars: 200,
            top_words: 5,
        }
    }
}

impl ArticleDigestService {
    pub fn digest_article(&self, article: &Article, query: DigestArticleQuery) -> ArticleDigestDto {
        let introduction = article.short_introduction(query.intro_chars);
        let top_words = article
            .most_common_words_with(&self.analyzer, query.top_words)
            .into_vec();
        ArticleDigestDto::from_parts(article, introduction, top_words)
    }
}
