//! Core domain logic for Article Explorer.
//! This crate is the single source of truth for catalog state and the
//! derived concept graph.

pub mod backup;
pub mod db;
pub mod graph;
pub mod import;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use backup::{backup_file_name, parse_backup, BackupData, BackupError, BackupResult};
pub use graph::{
    derive_graph, dimension_color, ConceptGraph, EdgeKind, GraphEdge, GraphNode,
    NEUTRAL_NODE_COLOR,
};
pub use import::{parse_import_file, rows_to_articles, ImportError, ImportResult, ImportedRow};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Article, ArticleId, ArticleStatus, Concept, ConceptId, Dimension, NewObservation, Observation,
    ObservationId,
};
pub use repo::snapshot_repo::{SnapshotRepository, SnapshotResult, SqliteSnapshotRepository};
pub use store::{ExplorerStore, StoreError, StoreResult, STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
