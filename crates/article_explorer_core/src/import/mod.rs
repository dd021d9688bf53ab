//! Bulk-import adapter for CSV and Excel article lists.
//!
//! # Responsibility
//! - Parse uploaded spreadsheet bytes into normalized candidate rows.
//! - Convert candidate rows into article records with defaults applied.
//!
//! # Invariants
//! - Dispatch is by file extension; unsupported extensions fail up front.
//! - Every parsed row yields exactly one article candidate; missing fields
//!   are defaulted, never rejected.
//! - Rows whose cells are all blank are skipped.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use chrono::{Datelike, Local};
use log::info;

use crate::model::{fresh_id, Article, ArticleStatus};

pub type ImportResult<T> = Result<T, ImportError>;

/// Errors surfaced while parsing an import file.
#[derive(Debug)]
pub enum ImportError {
    /// File extension is not one of `.csv`, `.xlsx`, `.xls`.
    UnsupportedFormat(String),
    /// CSV payload could not be parsed.
    Csv(csv::Error),
    /// Excel payload could not be parsed.
    Spreadsheet(calamine::Error),
    /// Workbook contains no worksheet.
    EmptyWorkbook,
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(file_name) => {
                write!(f, "unsupported import file format: `{file_name}`")
            }
            Self::Csv(err) => write!(f, "failed to parse CSV import: {err}"),
            Self::Spreadsheet(err) => write!(f, "failed to parse spreadsheet import: {err}"),
            Self::EmptyWorkbook => write!(f, "workbook contains no worksheet"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Spreadsheet(err) => Some(err),
            Self::UnsupportedFormat(_) | Self::EmptyWorkbook => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<calamine::Error> for ImportError {
    fn from(value: calamine::Error) -> Self {
        Self::Spreadsheet(value)
    }
}

/// Normalized row shape shared by CSV and Excel parsing.
///
/// Blank cells are `None`; defaulting happens in [`rows_to_articles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedRow {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub year: Option<i32>,
    pub abstract_text: Option<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Authors,
    Year,
    Abstract,
    Doi,
    Url,
}

/// Parses uploaded bytes into candidate rows, dispatching on extension.
pub fn parse_import_file(file_name: &str, bytes: &[u8]) -> ImportResult<Vec<ImportedRow>> {
    let lower = file_name.to_ascii_lowercase();
    let rows = if lower.ends_with(".csv") {
        parse_csv(bytes)?
    } else if lower.ends_with(".xlsx") {
        parse_xlsx(bytes)?
    } else if lower.ends_with(".xls") {
        parse_xls(bytes)?
    } else {
        return Err(ImportError::UnsupportedFormat(file_name.to_string()));
    };

    info!(
        "event=import_parse module=import status=ok file={file_name} rows={}",
        rows.len()
    );
    Ok(rows)
}

/// Converts parsed rows to article candidates, applying defaults.
///
/// Row position feeds the synthesized title, so "Untitled Article 1" is the
/// first row of the file, not the first untitled row.
pub fn rows_to_articles(rows: &[ImportedRow]) -> Vec<Article> {
    let current_year = Local::now().year();
    rows.iter()
        .enumerate()
        .map(|(index, row)| Article {
            id: fresh_id(),
            title: row
                .title
                .clone()
                .unwrap_or_else(|| format!("Untitled Article {}", index + 1)),
            authors: row
                .authors
                .clone()
                .unwrap_or_else(|| "Unknown Author".to_string()),
            year: row.year.unwrap_or(current_year),
            status: ArticleStatus::NotStarted,
            abstract_text: row.abstract_text.clone(),
            doi: row.doi.clone(),
            url: row.url.clone(),
        })
        .collect()
}

fn parse_csv(bytes: &[u8]) -> ImportResult<Vec<ImportedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<Option<Field>> = reader
        .headers()?
        .iter()
        .map(field_for_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = ImportedRow::default();
        for (value, field) in record.iter().zip(&columns) {
            if let Some(field) = field {
                assign(&mut row, *field, value);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn parse_xlsx(bytes: &[u8]) -> ImportResult<Vec<ImportedRow>> {
    let mut workbook = Xlsx::new(Cursor::new(bytes)).map_err(calamine::Error::from)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptyWorkbook)?
        .map_err(calamine::Error::from)?;
    Ok(rows_from_range(&range))
}

fn parse_xls(bytes: &[u8]) -> ImportResult<Vec<ImportedRow>> {
    let mut workbook = Xls::new(Cursor::new(bytes)).map_err(calamine::Error::from)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptyWorkbook)?
        .map_err(calamine::Error::from)?;
    Ok(rows_from_range(&range))
}

fn rows_from_range(range: &Range<Data>) -> Vec<ImportedRow> {
    let mut cells_rows = range.rows();
    let Some(header) = cells_rows.next() else {
        return Vec::new();
    };
    let columns: Vec<Option<Field>> = header
        .iter()
        .map(|cell| field_for_header(&cell_text(cell)))
        .collect();

    cells_rows
        .filter_map(|cells| {
            if cells
                .iter()
                .all(|cell| cell_text(cell).trim().is_empty())
            {
                return None;
            }
            let mut row = ImportedRow::default();
            for (cell, field) in cells.iter().zip(&columns) {
                if let Some(field) = field {
                    assign(&mut row, *field, &cell_text(cell));
                }
            }
            Some(row)
        })
        .collect()
}

fn field_for_header(header: &str) -> Option<Field> {
    match header.trim().to_ascii_lowercase().as_str() {
        "title" => Some(Field::Title),
        "authors" => Some(Field::Authors),
        "year" => Some(Field::Year),
        "abstract" => Some(Field::Abstract),
        "doi" => Some(Field::Doi),
        "url" => Some(Field::Url),
        _ => None,
    }
}

fn assign(row: &mut ImportedRow, field: Field, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    match field {
        Field::Title => row.title = Some(value.to_string()),
        Field::Authors => row.authors = Some(value.to_string()),
        // Non-numeric year cells fall through to the current-year default.
        Field::Year => row.year = value.parse().ok(),
        Field::Abstract => row.abstract_text = Some(value.to_string()),
        Field::Doi => row.doi = Some(value.to_string()),
        Field::Url => row.url = Some(value.to_string()),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(value) => value.clone(),
        Data::Float(value) => {
            if value.fract() == 0.0 {
                format!("{}", *value as i64)
            } else {
                value.to_string()
            }
        }
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
