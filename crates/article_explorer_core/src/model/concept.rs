//! Concept domain model.
//!
//! # Responsibility
//! - Define the tagged category record and its four analytical dimensions.
//! - Represent the optional parent link that forms the concept forest.
//!
//! # Invariants
//! - A concept has at most one parent.
//! - The data model does not prevent cycles; callers treat the parent links
//!   as a forest and degrade gracefully on dangling parents.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// Stable identifier for a concept.
pub type ConceptId = String;

/// One of the four fixed classification axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Purpose,
    Sector,
    Decision,
    Knowledge,
}

impl Dimension {
    /// All dimensions in display order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Purpose,
        Dimension::Sector,
        Dimension::Decision,
        Dimension::Knowledge,
    ];

    /// Wire/display name of this dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purpose => "purpose",
            Self::Sector => "sector",
            Self::Decision => "decision",
            Self::Knowledge => "knowledge",
        }
    }

    /// Parses a dimension from tolerant user/file input.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "purpose" => Some(Self::Purpose),
            "sector" => Some(Self::Sector),
            "decision" => Some(Self::Decision),
            "knowledge" => Some(Self::Knowledge),
            _ => None,
        }
    }
}

/// Tagged category along one analytical dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: ConceptId,
    pub label: String,
    pub dimension: Dimension,
    /// Parent concept id. `None` marks a root of the concept forest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ConceptId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Concept {
    /// Creates a new root concept with a generated id.
    pub fn new(label: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            id: fresh_id(),
            label: label.into(),
            dimension,
            parent_id: None,
            description: None,
        }
    }

    /// Returns whether this concept is a root of the forest.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
