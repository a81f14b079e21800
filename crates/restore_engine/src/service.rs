use restore_core::ImageAsset;

use crate::ServiceError;

/// One call to the remote image model: the image first, then the instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    pub model: String,
    pub image: ImageAsset,
    pub instruction: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Text(String),
    /// Base64 payload exactly as received; only the part that gets used is decoded.
    InlineImage { data: String, media_type: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    pub parts: Vec<ResponsePart>,
}

/// Remote image-generation collaborator.
#[async_trait::async_trait]
pub trait ImageService: Send + Sync {
    async fn generate(&self, request: &ServiceRequest) -> Result<Vec<Candidate>, ServiceError>;
}
