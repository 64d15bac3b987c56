//! Where catalog text comes from.

use std::{fs, path::PathBuf};

use crate::catalog::CatalogError;

/// A provider of raw catalog text.
///
/// [`Catalog`](crate::Catalog) calls [`CatalogSource::load`] at most once
/// successfully and caches the parsed result, so implementations do not need
/// to cache themselves.
pub trait CatalogSource {
    /// Reads the whole catalog text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] (or another [`CatalogError`]) if the text
    /// cannot be obtained.
    fn load(&self) -> Result<String, CatalogError>;

    /// Describes the source for log messages.
    fn describe(&self) -> String;
}

/// Catalog text read from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<String, CatalogError> {
        fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog text held in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    /// Creates a source that yields `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CatalogSource for TextSource {
    fn load(&self) -> Result<String, CatalogError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("<memory, {} bytes>", self.text.len())
    }
}
