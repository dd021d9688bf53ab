//! Whole-store JSON backup adapter.
//!
//! # Responsibility
//! - Serialize the full store to a pretty-printed backup document.
//! - Parse backup documents with all-or-nothing validation.
//!
//! # Invariants
//! - A backup is valid only when all three collections are present.
//! - Parse failures never yield partial data.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::model::{Article, Concept, Observation};

pub type BackupResult<T> = Result<T, BackupError>;

/// Errors surfaced while reading or writing backup documents.
#[derive(Debug)]
pub enum BackupError {
    /// Input is not valid JSON, or a collection fails to decode.
    Malformed(serde_json::Error),
    /// Valid JSON missing one of `articles`, `concepts`, `observations`.
    InvalidFormat,
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed backup input: {err}"),
            Self::InvalidFormat => write!(
                f,
                "invalid backup format: expected articles, concepts and observations"
            ),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::InvalidFormat => None,
        }
    }
}

impl From<serde_json::Error> for BackupError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupDocument<'a> {
    articles: &'a [Article],
    concepts: &'a [Concept],
    observations: &'a [Observation],
    exported_at: String,
}

/// Parsed backup payload; replaces the store wholesale on import.
#[derive(Debug, Clone, PartialEq)]
pub struct BackupData {
    pub articles: Vec<Article>,
    pub concepts: Vec<Concept>,
    pub observations: Vec<Observation>,
}

/// Serializes collections to the pretty-printed backup document.
pub fn export_store(
    articles: &[Article],
    concepts: &[Concept],
    observations: &[Observation],
) -> BackupResult<String> {
    let document = BackupDocument {
        articles,
        concepts,
        observations,
        exported_at: Utc::now().to_rfc3339(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// File name for a backup captured on `date`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("article-explorer-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Parses a backup document.
///
/// `exportedAt` is ignored on import; the three collections must all be
/// present and decodable.
pub fn parse_backup(json: &str) -> BackupResult<BackupData> {
    let value: Value = serde_json::from_str(json)?;
    let (Some(articles), Some(concepts), Some(observations)) = (
        value.get("articles"),
        value.get("concepts"),
        value.get("observations"),
    ) else {
        return Err(BackupError::InvalidFormat);
    };

    Ok(BackupData {
        articles: serde_json::from_value(articles.clone())?,
        concepts: serde_json::from_value(concepts.clone())?,
        observations: serde_json::from_value(observations.clone())?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::backup_file_name;

    #[test]
    fn backup_file_name_embeds_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(
            backup_file_name(date),
            "article-explorer-backup-2026-08-06.json"
        );
    }
}
