//! Fixed seed and demonstration datasets.
//!
//! # Responsibility
//! - Provide the default concept taxonomy for fresh and cleared stores.
//! - Provide the demonstration article/observation dataset.
//!
//! # Invariants
//! - Ids in these sets are fixed so reseeding is deterministic.
//! - The default taxonomy always contains exactly eight concepts.

use crate::model::{
    epoch_ms_now, Article, ArticleStatus, Concept, Dimension, Observation,
};

/// Default concept taxonomy seeded into fresh and cleared stores.
pub fn default_concepts() -> Vec<Concept> {
    vec![
        concept("c1", "Artificial Intelligence", Dimension::Knowledge, None),
        concept("c2", "Machine Learning", Dimension::Knowledge, Some("c1")),
        concept("c3", "Healthcare", Dimension::Sector, None),
        concept("c4", "Climate Science", Dimension::Sector, None),
        concept("c5", "Quantum Computing", Dimension::Knowledge, None),
        concept("c6", "Cryptography", Dimension::Knowledge, Some("c5")),
        concept("c7", "Research Purpose", Dimension::Purpose, None),
        concept("c8", "Decision Making", Dimension::Decision, None),
    ]
}

/// Demonstration articles loaded by `load_sample_data`.
pub fn sample_articles() -> Vec<Article> {
    vec![
        article(
            "1",
            "The Future of Artificial Intelligence in Healthcare",
            "Dr. Sarah Johnson, Prof. Michael Chen",
            2024,
            ArticleStatus::Finished,
            "This paper explores the potential applications of AI in healthcare...",
            "10.1000/example1",
        ),
        article(
            "2",
            "Machine Learning Approaches to Climate Change Prediction",
            "Dr. Emily Rodriguez, Dr. James Wilson",
            2023,
            ArticleStatus::Processing,
            "We present novel ML techniques for climate modeling...",
            "10.1000/example2",
        ),
        article(
            "3",
            "Quantum Computing Applications in Cryptography",
            "Prof. David Kim, Dr. Lisa Zhang",
            2024,
            ArticleStatus::NotStarted,
            "This research investigates quantum algorithms for encryption...",
            "10.1000/example3",
        ),
    ]
}

/// Demonstration observations matching [`sample_articles`].
pub fn sample_observations() -> Vec<Observation> {
    vec![
        observation("o1", "1", "c1", "AI shows promise in medical diagnosis", 1, 0.9),
        observation(
            "o2",
            "1",
            "c2",
            "Deep learning models outperform traditional methods",
            3,
            0.85,
        ),
        observation(
            "o3",
            "1",
            "c3",
            "Healthcare industry adoption is increasing",
            5,
            0.8,
        ),
        observation(
            "o4",
            "2",
            "c2",
            "Neural networks improve climate predictions",
            2,
            0.88,
        ),
        observation("o5", "2", "c4", "Climate models need better accuracy", 4, 0.75),
        observation(
            "o6",
            "3",
            "c5",
            "Quantum computers threaten current encryption",
            1,
            0.95,
        ),
        observation(
            "o7",
            "3",
            "c6",
            "New quantum-resistant algorithms needed",
            3,
            0.9,
        ),
    ]
}

fn concept(id: &str, label: &str, dimension: Dimension, parent_id: Option<&str>) -> Concept {
    Concept {
        id: id.to_string(),
        label: label.to_string(),
        dimension,
        parent_id: parent_id.map(str::to_string),
        description: None,
    }
}

fn article(
    id: &str,
    title: &str,
    authors: &str,
    year: i32,
    status: ArticleStatus,
    abstract_text: &str,
    doi: &str,
) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        authors: authors.to_string(),
        year,
        status,
        abstract_text: Some(abstract_text.to_string()),
        doi: Some(doi.to_string()),
        url: None,
    }
}

fn observation(
    id: &str,
    article_id: &str,
    concept_id: &str,
    text: &str,
    page: u32,
    confidence: f64,
) -> Observation {
    Observation {
        id: id.to_string(),
        article_id: article_id.to_string(),
        concept_id: concept_id.to_string(),
        text: text.to_string(),
        page: Some(page),
        confidence: Some(confidence),
        created_at: epoch_ms_now(),
    }
}
