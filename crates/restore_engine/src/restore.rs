use std::sync::Arc;

use restore_core::{ImageAsset, RESTORED_MEDIA_TYPE};
use restore_logging::{restore_info, restore_warn};

use crate::{Candidate, ImageService, ResponsePart, RestoreError, ServiceRequest};

/// Turns one image plus instruction into one restored image. Single attempt,
/// no retry, no caching.
#[derive(Clone)]
pub struct Restorer {
    service: Arc<dyn ImageService>,
    model: String,
}

impl Restorer {
    pub fn new(service: Arc<dyn ImageService>, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn restore(
        &self,
        image: &ImageAsset,
        instruction: &str,
    ) -> Result<ImageAsset, RestoreError> {
        if image.is_empty() {
            return Err(RestoreError::remote("malformed request: image payload is empty"));
        }
        if !image.has_image_media_type() {
            return Err(RestoreError::remote(format!(
                "malformed request: unsupported media type {:?}",
                image.media_type()
            )));
        }

        let request = ServiceRequest {
            model: self.model.clone(),
            image: image.clone(),
            instruction: instruction.to_string(),
        };
        let candidates = self.service.generate(&request).await.map_err(|err| {
            restore_warn!("restoration call failed: {}", err);
            RestoreError::remote(err.message)
        })?;

        let restored = first_inline_image(&candidates)?;
        restore_info!(
            "restoration returned {} bytes ({} candidates)",
            restored.byte_len(),
            candidates.len()
        );
        Ok(restored)
    }
}

/// Decodes the first part of the first candidate that carries image data;
/// everything else in the reply is ignored, corrupt or not. The result is
/// always labelled PNG.
pub fn first_inline_image(candidates: &[Candidate]) -> Result<ImageAsset, RestoreError> {
    let payload = candidates
        .first()
        .and_then(|candidate| {
            candidate.parts.iter().find_map(|part| match part {
                ResponsePart::InlineImage { data, .. } if !data.trim().is_empty() => {
                    Some(data.trim())
                }
                _ => None,
            })
        })
        .ok_or(RestoreError::NoImageReturned)?;

    let data_uri = format!("data:{RESTORED_MEDIA_TYPE};base64,{payload}");
    let restored = ImageAsset::from_data_uri(&data_uri)
        .map_err(|err| RestoreError::remote(format!("malformed inline image data: {err}")))?;
    if restored.is_empty() {
        return Err(RestoreError::NoImageReturned);
    }
    Ok(restored)
}
