//! Restoration engine: remote service client, effect execution and local file IO.
mod config;
mod engine;
mod gemini;
mod load;
mod persist;
mod restore;
mod service;
mod types;
mod wire;

pub use config::{
    ConfigError, ServiceSettings, API_KEY_ENV, API_KEY_FALLBACK_ENV, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use gemini::GeminiService;
pub use load::{load_image_file, LoadError};
pub use persist::{ensure_output_dir, save_download, AtomicFileWriter, PersistError};
pub use restore::{first_inline_image, Restorer};
pub use service::{Candidate, ImageService, ResponsePart, ServiceRequest};
pub use types::{EngineEvent, RestoreError, ServiceError};
