use std::path::Path;

use crate::error::{AppError, AppResult};

/// Where raw table text comes from
///
/// The dashboard only ever reads local files, but the loader goes through
/// this trait so the memoization can be tested without touching disk.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TableSource: Send + Sync {
    /// Reads the whole file at `path`
    ///
    /// An absent file must come back as `AppError::NotFound`; callers rely on
    /// that variant to fall back to an empty table.
    async fn read(&self, path: &Path) -> AppResult<String>;
}

/// Reads tables from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

#[async_trait::async_trait]
impl TableSource for FsSource {
    async fn read(&self, path: &Path) -> AppResult<String> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(path.to_path_buf()))
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
