use std::sync::{Arc, Mutex};

use restore_core::ImageAsset;
use restore_engine::{Candidate, ImageService, ResponsePart, ServiceError, ServiceRequest};

/// Replays a canned reply and records every request it sees.
pub struct StubService {
    reply: Result<Vec<Candidate>, ServiceError>,
    calls: Arc<Mutex<Vec<ServiceRequest>>>,
}

#[allow(dead_code)]
impl StubService {
    pub fn replying(reply: Result<Vec<Candidate>, ServiceError>) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_parts(parts: Vec<ResponsePart>) -> Self {
        Self::replying(Ok(vec![Candidate { parts }]))
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<ServiceRequest>>> {
        self.calls.clone()
    }
}

#[async_trait::async_trait]
impl ImageService for StubService {
    async fn generate(&self, request: &ServiceRequest) -> Result<Vec<Candidate>, ServiceError> {
        self.calls.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

#[allow(dead_code)]
pub fn image_part(data: &[u8], media_type: &str) -> ResponsePart {
    let data_uri = ImageAsset::new(data.to_vec(), media_type).to_data_uri();
    let payload = data_uri.split_once(',').map_or("", |(_, payload)| payload);
    raw_image_part(payload, media_type)
}

/// Inline part with an arbitrary, possibly invalid, base64 payload.
#[allow(dead_code)]
pub fn raw_image_part(data: &str, media_type: &str) -> ResponsePart {
    ResponsePart::InlineImage {
        data: data.to_string(),
        media_type: media_type.to_string(),
    }
}

#[allow(dead_code)]
pub fn text_part(text: &str) -> ResponsePart {
    ResponsePart::Text(text.to_string())
}
