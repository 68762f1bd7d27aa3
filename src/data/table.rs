use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::PersonalizationTable,
};

/// A table the loader knows how to parse and cache
pub trait Dataset: Default + Send + Sync + 'static {
    /// Parses CSV text; `path` is only used to label errors
    fn parse(text: &str, path: &Path) -> AppResult<Self>;

    fn row_count(&self) -> usize;
}

/// Rows of one typed CSV file, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new().trim(Trim::All).from_reader(text.as_bytes())
}

impl<R> Dataset for Table<R>
where
    R: DeserializeOwned + Send + Sync + 'static,
{
    fn parse(text: &str, path: &Path) -> AppResult<Self> {
        let rows = reader(text)
            .deserialize()
            .collect::<Result<Vec<R>, _>>()
            .map_err(|e| AppError::malformed(path, e))?;
        Ok(Self::new(rows))
    }

    fn row_count(&self) -> usize {
        self.len()
    }
}

impl Dataset for PersonalizationTable {
    fn parse(text: &str, path: &Path) -> AppResult<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let header = reader
            .headers()
            .map_err(|e| AppError::malformed(path, e))?
            .clone();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::malformed(path, e))?;

        PersonalizationTable::from_records(header.iter(), records.iter().map(|r| r.iter()))
            .map_err(|reason| AppError::malformed(path, reason))
    }

    fn row_count(&self) -> usize {
        self.len()
    }
}
