//! Concept graph derivation.
//!
//! # Responsibility
//! - Compute the renderable node/edge set from concepts and observations.
//! - Keep derivation pure; callers recompute whenever inputs change.
//!
//! # Invariants
//! - One node per concept, one hierarchy edge per parented concept.
//! - Co-occurrence weights accumulate raw observation pairs per article,
//!   not deduplicated concept pairs; repeated references inflate weights.
//! - Output order is deterministic for identical input order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Article, Concept, ConceptId, Dimension, Observation};

const MIN_NODE_SIZE: u32 = 5;
const MAX_NODE_SIZE: u32 = 20;
const SIZE_PER_OBSERVATION: u32 = 2;

/// Neutral node color used when a dimension cannot be resolved.
pub const NEUTRAL_NODE_COLOR: &str = "#6B7280";

/// Fixed render palette keyed by dimension.
pub fn dimension_color(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Purpose => "#3B82F6",
        Dimension::Sector => "#10B981",
        Dimension::Decision => "#F59E0B",
        Dimension::Knowledge => "#EF4444",
    }
}

/// One renderable concept node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: ConceptId,
    pub label: String,
    pub dimension: Dimension,
    pub is_root: bool,
    /// Visual radius: 5 plus 2 per referencing observation, clamped to
    /// `[5, 20]`.
    pub size: u32,
    pub color: &'static str,
}

/// Edge provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Hierarchy,
    Cooccurrence,
}

/// One renderable edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: ConceptId,
    pub target: ConceptId,
    pub kind: EdgeKind,
    /// Accumulated pair count; `None` for hierarchy edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Visual stroke width: `max(1, 2 * weight)` when weighted, else 1.
    pub width: u32,
}

/// Full render graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConceptGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Derives the render graph from the current collections.
///
/// Hierarchy edges are emitted from the child record alone, whether or not
/// the parent id resolves; dangling parents degrade at render time.
pub fn derive_graph(
    concepts: &[Concept],
    articles: &[Article],
    observations: &[Observation],
) -> ConceptGraph {
    let nodes = concepts
        .iter()
        .map(|concept| {
            let count = observations
                .iter()
                .filter(|obs| obs.concept_id == concept.id)
                .count() as u32;
            GraphNode {
                id: concept.id.clone(),
                label: concept.label.clone(),
                dimension: concept.dimension,
                is_root: concept.is_root(),
                size: node_size(count),
                color: dimension_color(concept.dimension),
            }
        })
        .collect();

    let mut edges: Vec<GraphEdge> = concepts
        .iter()
        .filter_map(|concept| {
            concept.parent_id.as_ref().map(|parent_id| GraphEdge {
                source: parent_id.clone(),
                target: concept.id.clone(),
                kind: EdgeKind::Hierarchy,
                weight: None,
                width: 1,
            })
        })
        .collect();

    for ((source, target), weight) in cooccurrence_weights(articles, observations) {
        edges.push(GraphEdge {
            source,
            target,
            kind: EdgeKind::Cooccurrence,
            weight: Some(weight),
            width: (weight * 2).max(1),
        });
    }

    ConceptGraph { nodes, edges }
}

/// Accumulates co-occurrence weights per unordered concept pair.
///
/// Pairs are taken over the raw observation list of one article: a concept
/// referenced twice in the same article pairs twice, including with itself.
/// O(k^2) in one article's observation count; fine at personal-corpus
/// scale.
fn cooccurrence_weights(
    articles: &[Article],
    observations: &[Observation],
) -> BTreeMap<(ConceptId, ConceptId), u32> {
    let mut weights = BTreeMap::new();
    for article in articles {
        let concept_ids: Vec<&ConceptId> = observations
            .iter()
            .filter(|obs| obs.article_id == article.id)
            .map(|obs| &obs.concept_id)
            .collect();
        for i in 0..concept_ids.len() {
            for j in (i + 1)..concept_ids.len() {
                *weights
                    .entry(pair_key(concept_ids[i], concept_ids[j]))
                    .or_insert(0) += 1;
            }
        }
    }
    weights
}

/// Unordered pair key: ids sorted lexicographically so (a, b) == (b, a).
fn pair_key(a: &ConceptId, b: &ConceptId) -> (ConceptId, ConceptId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

fn node_size(observation_count: u32) -> u32 {
    (MIN_NODE_SIZE + SIZE_PER_OBSERVATION * observation_count).clamp(MIN_NODE_SIZE, MAX_NODE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::{node_size, pair_key};

    #[test]
    fn pair_key_is_order_insensitive() {
        let a = "alpha".to_string();
        let b = "beta".to_string();
        assert_eq!(pair_key(&a, &b), pair_key(&b, &a));
        assert_eq!(pair_key(&a, &b), ("alpha".to_string(), "beta".to_string()));
    }

    #[test]
    fn node_size_grows_by_two_within_bounds() {
        assert_eq!(node_size(0), 5);
        assert_eq!(node_size(2), 9);
        assert_eq!(node_size(7), 19);
        assert_eq!(node_size(8), 20);
        assert_eq!(node_size(100), 20);
    }
}
