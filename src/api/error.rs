//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::assets::AssetError;
use crate::lookup::LookupError;

/// Errors surfaced by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Lookup(LookupError::NotFound(_)) => StatusCode::NOT_FOUND,
            // Rejected paths look exactly like missing files to the client
            ApiError::Asset(AssetError::NotFound(_) | AssetError::InvalidPath(_)) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Asset(AssetError::Io { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Lookup(e) => e.to_string(),
            ApiError::Asset(AssetError::NotFound(_) | AssetError::InvalidPath(_)) => {
                "preview image not found".to_string()
            }
            ApiError::Asset(AssetError::Io { .. }) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request failed: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(LookupError::NotFound("9".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(AssetError::NotFound("1/x.jpg".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(AssetError::InvalidPath("1/..".into())).status(),
            StatusCode::NOT_FOUND
        );
        let io = AssetError::Io {
            path: PathBuf::from("/srv/charts/1/1.jpg"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            ApiError::from(io).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_paths() {
        let err = ApiError::from(AssetError::Io {
            path: PathBuf::from("/srv/charts/1/1.jpg"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        });
        assert!(!err.public_message().contains("/srv"));

        let err = ApiError::from(AssetError::InvalidPath("../etc/passwd".into()));
        assert!(!err.public_message().contains("passwd"));
    }
}
