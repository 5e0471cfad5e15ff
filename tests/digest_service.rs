mod support;

use article_digest::application::error::{ApplicationError, ApplicationResult};
use article_digest::application::queries::{
    ArticleDigestService, DigestArticleQuery, ListDigestsQuery,
};
use article_digest::config::AnalysisConfig;
use article_digest::domain::article::TieBreak;
use chrono::Duration;
use serde_json::Value;
use support::{ArticleBuilder, fixed_now, test_factory};

fn service() -> ArticleDigestService {
    ArticleDigestService::new(&AnalysisConfig::default())
}

fn service_with_word_len(max_word_len: usize) -> ApplicationResult<ArticleDigestService> {
    let config = AnalysisConfig::new(max_word_len, TieBreak::FirstWordPosition)?;
    Ok(ArticleDigestService::new(&config))
}

#[test]
fn digest_combines_preview_and_ranking() {
    let (factory, _clock) = test_factory();
    let article = ArticleBuilder::new()
        .title("Weather")
        .author("Ana")
        .content("rain rain sun\nsun fog")
        .build_with(&factory);

    let digest = service().digest_article(
        &article,
        DigestArticleQuery {
            intro_chars: 9,
            top_words: 2,
        },
    );

    assert_eq!(digest.id, 0);
    assert_eq!(digest.title, "Weather");
    assert_eq!(digest.author, "Ana");
    assert_eq!(digest.introduction, "rain rain");
    assert_eq!(digest.length, 21);
    assert_eq!(digest.last_edited, Some(fixed_now()));
    let words: Vec<_> = digest.top_words.iter().map(|wc| wc.word.as_str()).collect();
    assert_eq!(words, vec!["rain", "sun"]);
}

#[test]
fn digest_serializes_to_json() {
    let (factory, _clock) = test_factory();
    let article = ArticleBuilder::new().content("b a b a c").build_with(&factory);

    let digest = service().digest_article(&article, DigestArticleQuery::default());
    let json: Value = serde_json::to_value(&digest).unwrap();

    assert_eq!(json["id"], 0);
    assert_eq!(json["publication_date"], "2024-01-01T00:00:00Z");
    assert_eq!(json["introduction"], "b a b a");
    assert_eq!(json["top_words"][0]["word"], "b");
    assert_eq!(json["top_words"][0]["count"], 2);
    assert_eq!(json["top_words"].as_array().map(Vec::len), Some(3));
}

#[test]
fn list_orders_newest_first_and_limits() {
    let (factory, _clock) = test_factory();
    let articles = vec![
        ArticleBuilder::new().title("old").published(fixed_now()).build_with(&factory),
        ArticleBuilder::new()
            .title("new")
            .published(fixed_now() + Duration::days(2))
            .build_with(&factory),
        ArticleBuilder::new()
            .title("mid")
            .published(fixed_now() + Duration::days(1))
            .build_with(&factory),
    ];

    let digests = service()
        .list_digests(
            &articles,
            ListDigestsQuery {
                limit: Some(2),
                ..Default::default()
            },
        )
        .unwrap();

    let titles: Vec<_> = digests.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["new", "mid"]);
}

#[test]
fn list_rejects_zero_limit() {
    let err = service()
        .list_digests(
            &[],
            ListDigestsQuery {
                limit: Some(0),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[test]
fn invalid_config_surfaces_as_application_error() {
    let err = service_with_word_len(0).unwrap_err();
    assert!(matches!(err, ApplicationError::Config(_)));
    assert!(service_with_word_len(4).is_ok());
}

#[test]
fn combining_marks_do_not_hide_words() {
    let (factory, _clock) = test_factory();
    let article = ArticleBuilder::new()
        .content("Cafe\u{301} in \u{130}stanbul, cafe\u{301} again")
        .build_with(&factory);

    let digest = service().digest_article(
        &article,
        DigestArticleQuery {
            intro_chars: 0,
            top_words: 10,
        },
    );
    let pairs: Vec<(&str, usize)> = digest
        .top_words
        .iter()
        .map(|wc| (wc.word.as_str(), wc.count))
        .collect();
    assert_eq!(
        pairs,
        vec![("cafe", 2), ("in", 1), ("i", 1), ("stanbul", 1), ("again", 1)]
    );
}
