//! Article entity with a boundary-aware preview and a ranked word-frequency
//! table.
//!
//! ```
//! use article_digest::domain::article::Article;
//! use chrono::{TimeZone, Utc};
//!
//! let date = Utc.with_ymd_and_hms(2020, 3, 1, 9, 30, 0).unwrap();
//! let article = Article::new("Notes", "Sam", date, "b a b a c");
//!
//! assert_eq!(article.short_introduction(4), "b a");
//! let top: Vec<_> = article.most_common_words(2).words().map(str::to_owned).collect();
//! assert_eq!(top, ["b", "a"]);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
