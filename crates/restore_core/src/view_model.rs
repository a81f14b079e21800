use crate::{ImageAsset, Phase, RestorationOptions};

/// Size and type of an image, for display without touching the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    pub media_type: String,
    pub byte_len: u64,
}

impl ImageSummary {
    pub(crate) fn of(asset: &ImageAsset) -> Self {
        Self {
            media_type: asset.media_type().to_string(),
            byte_len: asset.byte_len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub options: RestorationOptions,
    pub slider_position: f64,
    pub dragging: bool,
    pub original: Option<ImageSummary>,
    pub restored: Option<ImageSummary>,
    pub error: Option<String>,
    pub restore_enabled: bool,
    pub download_enabled: bool,
    pub dirty: bool,
}
