//! Domain store: the single source of truth for catalog state.
//!
//! # Responsibility
//! - Own the article/concept/observation collections and UI selection state.
//! - Mediate every mutation and persist a full snapshot after each one.
//!
//! # Invariants
//! - Removing an article removes every observation referencing it.
//! - Collections keep insertion order; queries preserve it.
//! - Snapshot writes are whole-document under one fixed key.
//! - Concepts are never deleted; the taxonomy only grows or is reset.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::backup::{self, BackupError};
use crate::db::DbError;
use crate::graph::{self, ConceptGraph};
use crate::model::{
    epoch_ms_now, fresh_id, Article, ArticleId, Concept, ConceptId, Dimension, NewObservation,
    Observation, ObservationId,
};
use crate::repo::snapshot_repo::SnapshotRepository;

pub mod seed;

/// Fixed key the full store snapshot is persisted under.
pub const STORAGE_KEY: &str = "article-explorer-state";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Snapshot persistence failed; in-memory state may be ahead of disk.
    Snapshot(DbError),
    /// The snapshot could not be encoded to JSON.
    Encode(serde_json::Error),
    /// Backup import failed; state was left untouched.
    Backup(BackupError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(err) => write!(f, "failed to persist store snapshot: {err}"),
            Self::Encode(err) => write!(f, "failed to encode store snapshot: {err}"),
            Self::Backup(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Backup(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<BackupError> for StoreError {
    fn from(value: BackupError) -> Self {
        Self::Backup(value)
    }
}

/// Persisted snapshot shape.
///
/// Field names match the external JSON blob; UI flags are excluded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreSnapshot {
    articles: Vec<Article>,
    concepts: Vec<Concept>,
    observations: Vec<Observation>,
    selected_article_id: Option<ArticleId>,
    selected_concept_id: Option<ConceptId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreSnapshotRef<'a> {
    articles: &'a [Article],
    concepts: &'a [Concept],
    observations: &'a [Observation],
    selected_article_id: &'a Option<ArticleId>,
    selected_concept_id: &'a Option<ConceptId>,
}

/// Dependency-injected state container owned by the composition root.
///
/// All reads and writes to the three collections go through this type; no
/// other component mutates them.
pub struct ExplorerStore<S: SnapshotRepository> {
    articles: Vec<Article>,
    concepts: Vec<Concept>,
    observations: Vec<Observation>,
    selected_article_id: Option<ArticleId>,
    selected_concept_id: Option<ConceptId>,
    snapshots: S,
}

impl<S: SnapshotRepository> ExplorerStore<S> {
    /// Creates a store with the default seeded concepts and no articles.
    pub fn new(snapshots: S) -> Self {
        Self {
            articles: Vec::new(),
            concepts: seed::default_concepts(),
            observations: Vec::new(),
            selected_article_id: None,
            selected_concept_id: None,
            snapshots,
        }
    }

    /// Restores the last persisted snapshot, or falls back to the default
    /// state when no snapshot exists or the stored blob cannot be decoded.
    pub fn load_or_default(snapshots: S) -> StoreResult<Self> {
        let stored = snapshots.load(STORAGE_KEY)?;
        let mut store = Self::new(snapshots);

        if let Some(blob) = stored {
            match serde_json::from_str::<StoreSnapshot>(&blob) {
                Ok(snapshot) => {
                    store.articles = snapshot.articles;
                    store.concepts = snapshot.concepts;
                    store.observations = snapshot.observations;
                    store.selected_article_id = snapshot.selected_article_id;
                    store.selected_concept_id = snapshot.selected_concept_id;
                    info!(
                        "event=store_restore module=store status=ok articles={} concepts={} observations={}",
                        store.articles.len(),
                        store.concepts.len(),
                        store.observations.len()
                    );
                }
                Err(err) => {
                    warn!(
                        "event=store_restore module=store status=error error_code=corrupt_snapshot error={err}"
                    );
                }
            }
        }

        Ok(store)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn selected_article_id(&self) -> Option<&str> {
        self.selected_article_id.as_deref()
    }

    pub fn selected_concept_id(&self) -> Option<&str> {
        self.selected_concept_id.as_deref()
    }

    /// Currently selected article record, if the selection resolves.
    pub fn selected_article(&self) -> Option<&Article> {
        let id = self.selected_article_id.as_deref()?;
        self.articles.iter().find(|article| article.id == id)
    }

    /// Creates an article from form input and returns its id.
    ///
    /// Field validation (non-empty title/authors) is a caller concern.
    pub fn create_article(
        &mut self,
        title: impl Into<String>,
        authors: impl Into<String>,
        year: i32,
        abstract_text: Option<String>,
    ) -> StoreResult<ArticleId> {
        let article = Article::new(title, authors, year, abstract_text);
        let id = article.id.clone();
        self.articles.push(article);
        self.persist()?;
        Ok(id)
    }

    /// Appends a fully-formed article record (bulk-import commit path).
    pub fn add_article(&mut self, article: Article) -> StoreResult<()> {
        self.articles.push(article);
        self.persist()
    }

    /// Removes an article and every observation referencing it.
    ///
    /// Clears the article selection when it pointed at the removed record.
    /// Silently does nothing for an unknown id.
    pub fn remove_article(&mut self, id: &str) -> StoreResult<()> {
        self.articles.retain(|article| article.id != id);
        self.observations.retain(|obs| obs.article_id != id);
        if self.selected_article_id.as_deref() == Some(id) {
            self.selected_article_id = None;
        }
        self.persist()
    }

    /// Creates a root concept and returns its id.
    pub fn create_concept(
        &mut self,
        label: impl Into<String>,
        dimension: Dimension,
    ) -> StoreResult<ConceptId> {
        let concept = Concept::new(label, dimension);
        let id = concept.id.clone();
        self.concepts.push(concept);
        self.persist()?;
        Ok(id)
    }

    /// Appends a fully-formed concept record (seed/import path).
    pub fn add_concept(&mut self, concept: Concept) -> StoreResult<()> {
        self.concepts.push(concept);
        self.persist()
    }

    /// Creates an observation with a fresh id and creation timestamp.
    ///
    /// Cross-references are not validated; dangling ids degrade gracefully
    /// in queries and rendering.
    pub fn add_observation(&mut self, input: NewObservation) -> StoreResult<ObservationId> {
        let observation = Observation {
            id: fresh_id(),
            article_id: input.article_id,
            concept_id: input.concept_id,
            text: input.text,
            page: input.page,
            confidence: input.confidence,
            created_at: epoch_ms_now(),
        };
        let id = observation.id.clone();
        self.observations.push(observation);
        self.persist()?;
        Ok(id)
    }

    /// Removes an observation; silently does nothing for an unknown id.
    pub fn remove_observation(&mut self, id: &str) -> StoreResult<()> {
        self.observations.retain(|obs| obs.id != id);
        self.persist()
    }

    pub fn select_article(&mut self, id: Option<ArticleId>) -> StoreResult<()> {
        self.selected_article_id = id;
        self.persist()
    }

    pub fn select_concept(&mut self, id: Option<ConceptId>) -> StoreResult<()> {
        self.selected_concept_id = id;
        self.persist()
    }

    /// Observations for one article, in storage order.
    pub fn observations_for_article(&self, article_id: &str) -> Vec<Observation> {
        self.observations
            .iter()
            .filter(|obs| obs.article_id == article_id)
            .cloned()
            .collect()
    }

    /// Observations for one concept across all articles, in storage order.
    pub fn observations_for_concept(&self, concept_id: &str) -> Vec<Observation> {
        self.observations
            .iter()
            .filter(|obs| obs.concept_id == concept_id)
            .cloned()
            .collect()
    }

    /// Observations for the current selection.
    ///
    /// A concept selection takes priority over an article selection; with
    /// neither set the listing is empty.
    pub fn visible_observations(&self) -> Vec<Observation> {
        if let Some(concept_id) = self.selected_concept_id.as_deref() {
            return self.observations_for_concept(concept_id);
        }
        if let Some(article_id) = self.selected_article_id.as_deref() {
            return self.observations_for_article(article_id);
        }
        Vec::new()
    }

    /// Derives the render graph from the current collections.
    pub fn derive_graph(&self) -> ConceptGraph {
        graph::derive_graph(&self.concepts, &self.articles, &self.observations)
    }

    /// Serializes the full store to a pretty-printed backup document.
    pub fn export(&self) -> StoreResult<String> {
        let document = backup::export_store(&self.articles, &self.concepts, &self.observations)?;
        info!(
            "event=store_export module=store status=ok articles={} concepts={} observations={}",
            self.articles.len(),
            self.concepts.len(),
            self.observations.len()
        );
        Ok(document)
    }

    /// Replaces the whole store from a backup document.
    ///
    /// All-or-nothing: a malformed or invalid document leaves the store
    /// untouched. Both selections are cleared on success.
    pub fn import(&mut self, json: &str) -> StoreResult<()> {
        let data = backup::parse_backup(json)?;
        self.articles = data.articles;
        self.concepts = data.concepts;
        self.observations = data.observations;
        self.selected_article_id = None;
        self.selected_concept_id = None;
        info!(
            "event=store_import module=store status=ok articles={} concepts={} observations={}",
            self.articles.len(),
            self.concepts.len(),
            self.observations.len()
        );
        self.persist()
    }

    /// Empties articles and observations and reseeds the default concepts.
    ///
    /// Destructive; confirmation is the caller's policy, not a store rule.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.articles.clear();
        self.observations.clear();
        self.concepts = seed::default_concepts();
        self.selected_article_id = None;
        self.selected_concept_id = None;
        info!("event=store_clear module=store status=ok");
        self.persist()
    }

    /// Replaces articles and observations with the demonstration dataset.
    ///
    /// Concepts are left untouched; the first sample article is selected.
    pub fn load_sample_data(&mut self) -> StoreResult<()> {
        self.articles = seed::sample_articles();
        self.observations = seed::sample_observations();
        self.selected_article_id = self.articles.first().map(|article| article.id.clone());
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        let snapshot = StoreSnapshotRef {
            articles: &self.articles,
            concepts: &self.concepts,
            observations: &self.observations,
            selected_article_id: &self.selected_article_id,
            selected_concept_id: &self.selected_concept_id,
        };
        let blob = serde_json::to_string(&snapshot).map_err(StoreError::Encode)?;
        self.snapshots.save(STORAGE_KEY, &blob)?;
        Ok(())
    }
}
