use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use restore_logging::{restore_debug, restore_warn};

use crate::wire::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, RequestContent,
    RequestInlineData, RequestPart,
};
use crate::{Candidate, ImageService, ResponsePart, ServiceError, ServiceRequest, ServiceSettings};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// [`ImageService`] backed by the Gemini `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiService {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl GeminiService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::new(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, model: &str) -> Result<reqwest::Url, ServiceError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let raw = format!("{base}/v1beta/models/{model}:generateContent");
        reqwest::Url::parse(&raw)
            .map_err(|err| ServiceError::new(format!("invalid endpoint {raw}: {err}")))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ServiceError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ServiceError::new(format!(
                    "response too large ({content_len} bytes, max {max_bytes})"
                )));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ServiceError::new(format!(
                    "response too large (more than {max_bytes} bytes)"
                )));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl ImageService for GeminiService {
    async fn generate(&self, request: &ServiceRequest) -> Result<Vec<Candidate>, ServiceError> {
        let url = self.endpoint(&request.model)?;
        let payload = encode_request(request)?;
        restore_debug!(
            "generateContent model={} image_bytes={} body_bytes={}",
            request.model,
            request.image.byte_len(),
            payload.len()
        );

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.settings.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = self.read_body(response).await?;
        if !status.is_success() {
            let message = error_message(status, &body);
            restore_warn!("generateContent failed: {}", message);
            return Err(ServiceError::with_status(status.as_u16(), message));
        }

        decode_response(&body)
    }
}

fn encode_request(request: &ServiceRequest) -> Result<Vec<u8>, ServiceError> {
    // The wire format wants the bare base64 payload of the image's data URI.
    let data_uri = request.image.to_data_uri();
    let data = data_uri.split_once(',').map_or("", |(_, payload)| payload);
    let body = GenerateContentRequest {
        contents: vec![RequestContent {
            parts: vec![
                RequestPart {
                    inline_data: Some(RequestInlineData {
                        mime_type: request.image.media_type(),
                        data,
                    }),
                    text: None,
                },
                RequestPart {
                    inline_data: None,
                    text: Some(request.instruction.as_str()),
                },
            ],
        }],
    };
    serde_json::to_vec(&body).map_err(|err| ServiceError::new(err.to_string()))
}

fn decode_response(body: &[u8]) -> Result<Vec<Candidate>, ServiceError> {
    let response: GenerateContentResponse = serde_json::from_slice(body)
        .map_err(|err| ServiceError::new(format!("malformed response: {err}")))?;

    let candidates = response
        .candidates
        .into_iter()
        .map(|candidate| Candidate {
            parts: candidate
                .content
                .map(|content| content.parts)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|part| match (part.inline_data, part.text) {
                    (Some(inline), _) => Some(ResponsePart::InlineImage {
                        data: inline.data,
                        media_type: inline.mime_type,
                    }),
                    (None, Some(text)) => Some(ResponsePart::Text(text)),
                    (None, None) => None,
                })
                .collect(),
        })
        .collect();
    Ok(candidates)
}

fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => match envelope.error.status {
            Some(code) => format!("{status}: {} ({code})", envelope.error.message),
            None => format!("{status}: {}", envelope.error.message),
        },
        _ => status.to_string(),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(format!("request timed out: {err}"));
    }
    if err.is_connect() {
        return ServiceError::new(format!("could not reach the service: {err}"));
    }
    ServiceError::new(format!("network error: {err}"))
}
