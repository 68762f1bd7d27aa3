use std::path::{Path, PathBuf};

use super::html::{escape, Markup};

/// URL prefix the images directory is served under
pub const IMAGES_ROUTE: &str = "/images";

/// A local image and whether it was found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub file_name: String,
    pub path: PathBuf,
    pub found: bool,
}

impl ImageAsset {
    /// Looks `file_name` up in `images_dir`
    pub async fn resolve(images_dir: &Path, file_name: &str) -> Self {
        let path = images_dir.join(file_name);
        let found = tokio::fs::try_exists(&path).await.unwrap_or(false);
        if !found {
            tracing::warn!(path = %path.display(), "Image asset missing");
        }
        Self {
            file_name: file_name.to_string(),
            path,
            found,
        }
    }

    /// `<img>` tag, or an inline error marker when the file is missing
    pub fn render(&self) -> Markup {
        if self.found {
            Markup::raw(format!(
                r#"<img class="banner" src="{}/{}" alt="">"#,
                IMAGES_ROUTE,
                escape(&self.file_name)
            ))
        } else {
            Markup::raw(format!(
                r#"<div class="notice notice-error">🔍 Image not found: {}</div>"#,
                escape(&self.path.display().to_string())
            ))
        }
    }
}
