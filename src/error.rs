use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::views::html::escape;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Attaches the source path to a CSV parse failure
    pub fn malformed(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        AppError::Malformed {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Malformed { .. } | AppError::Io(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = %status, error = %self, "Request failed");

        let body = Html(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>{code}</title></head>
<body>
    <div class="notice notice-error"><strong>{code}</strong> {message}</div>
    <p><a href="/">Back to the dashboard</a></p>
</body>
</html>"#,
            code = status.as_u16(),
            message = escape(&self.to_string()),
        ));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound(PathBuf::from("rules.csv"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "File not found: rules.csv");
    }

    #[test]
    fn test_malformed_keeps_path_and_reason() {
        let err = AppError::malformed("cleaned_data.csv", "missing field `profile_id`");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Malformed file cleaned_data.csv: missing field `profile_id`"
        );
    }

    #[test]
    fn test_error_response_uses_status() {
        let err = AppError::Internal("<script>".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
