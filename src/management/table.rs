use std::{fmt, io::Error, path::Path, path::PathBuf};

use crate::{config, types::FeatureRow};

#[derive(Debug)]
pub enum TableError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for TableError {
    fn from(err: Error) -> Self {
        TableError::IoError(err)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::SerdeError(err)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::IoError(e) => write!(f, "io error: {}", e),
            TableError::SerdeError(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for TableError {}

/// Holds the joined feature table of the last `collect` run.
pub struct FeatureTableManager {
    rows: Vec<FeatureRow>,
}

impl FeatureTableManager {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    pub async fn load() -> Result<Self, TableError> {
        Self::load_from(&Self::cache_path()).await
    }

    pub async fn load_from(path: &Path) -> Result<Self, TableError> {
        let content = async_fs::read_to_string(path).await?;
        let rows: Vec<FeatureRow> = serde_json::from_str(&content)?;
        Ok(Self { rows })
    }

    /// Replaces the cached table. An empty table leaves the cache untouched.
    ///
    /// Returns whether the cache was written.
    pub async fn persist(&self) -> Result<bool, TableError> {
        self.persist_to(&Self::cache_path()).await
    }

    pub async fn persist_to(&self, path: &Path) -> Result<bool, TableError> {
        if self.rows.is_empty() {
            return Ok(false);
        }

        self.export(path).await?;
        Ok(true)
    }

    /// Writes the table as pretty JSON to `path`, creating parent directories.
    pub async fn export(&self, path: &Path) -> Result<(), TableError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&self.rows)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    pub fn rows(&self) -> Vec<FeatureRow> {
        self.rows.clone()
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    fn cache_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/features.json");
        path
    }
}
