//! Domain model for articles, concepts and observations.
//!
//! # Responsibility
//! - Define the canonical records owned by the domain store.
//! - Keep identifier and timestamp conventions in one place.
//!
//! # Invariants
//! - Identifiers are opaque strings, stable for a record's lifetime.
//! - Record timestamps are unix epoch milliseconds.

use chrono::Utc;
use uuid::Uuid;

pub mod article;
pub mod concept;
pub mod observation;

pub use article::{Article, ArticleId, ArticleStatus};
pub use concept::{Concept, ConceptId, Dimension};
pub use observation::{NewObservation, Observation, ObservationId};

/// Generates a fresh opaque identifier.
pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall-clock time as unix epoch milliseconds.
pub(crate) fn epoch_ms_now() -> i64 {
    Utc::now().timestamp_millis()
}
