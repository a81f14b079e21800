//! Restoration core: pure workflow state machine, prompt builder and
//! comparison slider. Nothing in here performs IO.
mod asset;
mod effect;
mod msg;
mod options;
mod prompt;
mod slider;
mod state;
mod update;
mod view_model;

pub use asset::{
    is_image_media_type, DataUriError, ImageAsset, DOWNLOAD_FILENAME, MAX_UPLOAD_BYTES,
    RESTORED_MEDIA_TYPE,
};
pub use effect::{Effect, Notice};
pub use msg::Msg;
pub use options::{Quality, RestorationOptions, Style};
pub use prompt::{build_prompt, color_fragment, identity_fragment, quality_fragment, style_fragment};
pub use slider::{
    split_position, ComparisonSlider, ContainerBounds, DragPhase, ListenerChange, PointerInput,
    DEFAULT_SLIDER_POSITION,
};
pub use state::{AppState, FailureKind, Generation, Phase, RestoreFailure, WorkflowState};
pub use update::update;
pub use view_model::{AppViewModel, ImageSummary};
