use std::{
    any::Any,
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::RwLock;

use super::{source::FsSource, Dataset, TableSource};
use crate::error::{AppError, AppResult};

type CachedTable = Arc<dyn Any + Send + Sync>;

/// A table that may have fallen back to empty because its file was absent
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub table: Arc<T>,
    pub warning: Option<String>,
}

/// Memoizing table loader
///
/// Each path is read and parsed at most once per process; later calls hand
/// out the same `Arc`. Files are treated as immutable, so nothing is ever
/// evicted. Failed reads are not cached.
pub struct TableLoader {
    source: Arc<dyn TableSource>,
    cache: RwLock<HashMap<PathBuf, CachedTable>>,
}

impl TableLoader {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Loader reading from the local filesystem
    pub fn from_fs() -> Self {
        Self::new(Arc::new(FsSource))
    }

    /// Returns the parsed table at `path`, reading it on first use
    pub async fn load<T: Dataset>(&self, path: &Path) -> AppResult<Arc<T>> {
        if let Some(cached) = self.cache.read().await.get(path).cloned() {
            tracing::debug!(path = %path.display(), "Table cache hit");
            return downcast(path, cached);
        }

        let mut cache = self.cache.write().await;
        // Another request may have loaded it while we waited for the lock
        if let Some(cached) = cache.get(path).cloned() {
            return downcast(path, cached);
        }

        tracing::debug!(path = %path.display(), "Table cache miss");
        let text = self.source.read(path).await?;
        let table = Arc::new(T::parse(&text, path)?);
        tracing::info!(path = %path.display(), rows = table.row_count(), "Loaded table");

        cache.insert(path.to_path_buf(), table.clone() as CachedTable);
        Ok(table)
    }

    /// Like [`load`](Self::load), but an absent file yields an empty table
    /// and a warning for the page instead of an error
    pub async fn load_or_empty<T: Dataset>(&self, path: &Path) -> AppResult<Loaded<T>> {
        match self.load(path).await {
            Ok(table) => Ok(Loaded {
                table,
                warning: None,
            }),
            Err(AppError::NotFound(missing)) => {
                let warning = format!(
                    "{} not found. Please ensure data files are in the project directory.",
                    file_label(&missing)
                );
                tracing::warn!(path = %missing.display(), "Data file missing, using empty table");
                Ok(Loaded {
                    table: Arc::new(T::default()),
                    warning: Some(warning),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Loads a table whose absence is expected; `None` when the file is missing
    pub async fn load_optional<T: Dataset>(&self, path: &Path) -> AppResult<Option<Arc<T>>> {
        match self.load(path).await {
            Ok(table) => Ok(Some(table)),
            Err(AppError::NotFound(missing)) => {
                tracing::debug!(path = %missing.display(), "Optional data file missing");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn downcast<T: Dataset>(path: &Path, cached: CachedTable) -> AppResult<Arc<T>> {
    cached.downcast::<T>().map_err(|_| {
        AppError::Internal(format!(
            "{} was already loaded as a different table type",
            path.display()
        ))
    })
}

/// File name for user-facing messages
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
