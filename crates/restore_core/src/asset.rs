use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Largest upload accepted by the workflow (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Media type every restored image is labelled with, whatever the service declared.
pub const RESTORED_MEDIA_TYPE: &str = "image/png";

/// File name used when the restored image is saved locally.
pub const DOWNLOAD_FILENAME: &str = "IMGRestore-Result.png";

/// An encoded image: raw bytes plus the media type they were declared with.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAsset {
    bytes: Vec<u8>,
    media_type: String,
}

impl ImageAsset {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn byte_len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` for a `type/subtype` media type whose top-level type is `image`.
    pub fn has_image_media_type(&self) -> bool {
        is_image_media_type(&self.media_type)
    }

    /// Renders the asset as a `data:` URI with a base64 payload.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, STANDARD.encode(&self.bytes))
    }

    /// Parses a base64 `data:` URI back into an asset.
    pub fn from_data_uri(uri: &str) -> Result<Self, DataUriError> {
        let rest = uri.strip_prefix("data:").ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;
        let media_type = header
            .strip_suffix(";base64")
            .ok_or(DataUriError::NotBase64)?;
        if media_type.is_empty() {
            return Err(DataUriError::MissingMediaType);
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|err| DataUriError::InvalidPayload(err.to_string()))?;
        Ok(Self::new(bytes, media_type))
    }
}

// Payloads are megabytes; keep them out of debug output.
impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("media_type", &self.media_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

pub fn is_image_media_type(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or(media_type).trim();
    match essence.split_once('/') {
        Some((top, sub)) => top.eq_ignore_ascii_case("image") && !sub.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataUriError {
    MissingScheme,
    MissingPayload,
    MissingMediaType,
    NotBase64,
    InvalidPayload(String),
}

impl fmt::Display for DataUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUriError::MissingScheme => write!(f, "not a data uri"),
            DataUriError::MissingPayload => write!(f, "data uri has no payload"),
            DataUriError::MissingMediaType => write!(f, "data uri has no media type"),
            DataUriError::NotBase64 => write!(f, "data uri is not base64 encoded"),
            DataUriError::InvalidPayload(reason) => write!(f, "invalid base64 payload: {reason}"),
        }
    }
}

impl std::error::Error for DataUriError {}
