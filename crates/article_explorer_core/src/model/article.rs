//! Article domain model.
//!
//! # Responsibility
//! - Define the catalog record for one hand-entered or imported article.
//! - Keep reading-progress status as a closed enumeration.
//!
//! # Invariants
//! - `id` is stable and never reused for another article.
//! - New records start in status `not-started`.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// Stable identifier for an article.
///
/// Kept as an opaque string so seeded and imported records can carry
/// externally assigned ids; freshly created records use uuid v4.
pub type ArticleId = String;

/// Reading-progress state for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleStatus {
    /// Catalogued but not read yet.
    NotStarted,
    /// Currently being read/annotated.
    Processing,
    /// Fully processed.
    Finished,
}

/// Catalog record for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Free-text author list, kept unparsed.
    pub authors: String,
    pub year: i32,
    pub status: ArticleStatus,
    /// Serialized as `abstract` to match the external document shape.
    #[serde(
        rename = "abstract",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Article {
    /// Creates a new article with a generated id and default status.
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        year: i32,
        abstract_text: Option<String>,
    ) -> Self {
        Self {
            id: fresh_id(),
            title: title.into(),
            authors: authors.into(),
            year,
            status: ArticleStatus::NotStarted,
            abstract_text,
            doi: None,
            url: None,
        }
    }
}
