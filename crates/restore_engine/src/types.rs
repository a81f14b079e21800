use restore_core::{FailureKind, Generation, ImageAsset, RestoreFailure};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RestorationCompleted {
        generation: Generation,
        result: Result<ImageAsset, RestoreError>,
    },
}

/// Why a single restoration attempt produced no image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The call failed: network, auth, quota, or a request the service refused.
    #[error("restoration request failed: {message}")]
    Remote { message: String },
    /// The service answered but none of the parts carried image data.
    #[error("the service did not return an image")]
    NoImageReturned,
}

impl RestoreError {
    pub(crate) fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            RestoreError::Remote { .. } => FailureKind::RemoteError,
            RestoreError::NoImageReturned => FailureKind::NoImageReturned,
        }
    }

    /// The form the workflow state machine stores in `Failed`.
    pub fn to_failure(&self) -> RestoreFailure {
        RestoreFailure::new(self.kind(), self.to_string())
    }
}

/// Failure reported by an [`crate::ImageService`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub status: Option<u16>,
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}
