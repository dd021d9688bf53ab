//! Observation domain model.
//!
//! # Responsibility
//! - Define the textual note linking one article to one concept.
//!
//! # Invariants
//! - `article_id` and `concept_id` are not validated against the
//!   collections; dangling references degrade gracefully in queries.
//! - `created_at` is assigned once at creation and never changes.

use serde::{Deserialize, Serialize};

use super::{ArticleId, ConceptId};

/// Stable identifier for an observation.
pub type ObservationId = String;

/// Textual note linking one article to one concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: ObservationId,
    pub article_id: ArticleId,
    pub concept_id: ConceptId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// 0.0..=1.0 by convention; not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Input shape for creating an observation.
///
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewObservation {
    pub article_id: ArticleId,
    pub concept_id: ConceptId,
    pub text: String,
    pub page: Option<u32>,
    pub confidence: Option<f64>,
}
