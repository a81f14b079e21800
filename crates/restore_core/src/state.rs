use std::fmt;

use crate::slider::ComparisonSlider;
use crate::view_model::{AppViewModel, ImageSummary};
use crate::{ImageAsset, RestorationOptions};

/// Stamp identifying one `RestoreClicked` dispatch.
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service call itself failed: network, auth, quota or a malformed request.
    RemoteError,
    /// The service answered without any inline image.
    NoImageReturned,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::RemoteError => write!(f, "remote error"),
            FailureKind::NoImageReturned => write!(f, "no image returned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl RestoreFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Image lifecycle. Every variant past `Empty` owns the uploaded original.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Empty,
    Loaded {
        original: ImageAsset,
    },
    Processing {
        original: ImageAsset,
        options: RestorationOptions,
        generation: Generation,
    },
    Restored {
        original: ImageAsset,
        restored: ImageAsset,
    },
    Failed {
        original: ImageAsset,
        error: RestoreFailure,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Loaded,
    Processing,
    Restored,
    Failed,
}

impl WorkflowState {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowState::Empty => Phase::Empty,
            WorkflowState::Loaded { .. } => Phase::Loaded,
            WorkflowState::Processing { .. } => Phase::Processing,
            WorkflowState::Restored { .. } => Phase::Restored,
            WorkflowState::Failed { .. } => Phase::Failed,
        }
    }

    pub fn original(&self) -> Option<&ImageAsset> {
        match self {
            WorkflowState::Empty => None,
            WorkflowState::Loaded { original }
            | WorkflowState::Processing { original, .. }
            | WorkflowState::Restored { original, .. }
            | WorkflowState::Failed { original, .. } => Some(original),
        }
    }

    pub fn restored(&self) -> Option<&ImageAsset> {
        match self {
            WorkflowState::Restored { restored, .. } => Some(restored),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RestoreFailure> {
        match self {
            WorkflowState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Generation of the outstanding request, if any.
    pub fn pending_generation(&self) -> Option<Generation> {
        match self {
            WorkflowState::Processing { generation, .. } => Some(*generation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    workflow: WorkflowState,
    options: RestorationOptions,
    slider: ComparisonSlider,
    generation: Generation,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn options(&self) -> RestorationOptions {
        self.options
    }

    pub fn slider(&self) -> &ComparisonSlider {
        &self.slider
    }

    /// Stamp handed out by the most recent dispatch; 0 before the first one.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn view(&self) -> AppViewModel {
        let phase = self.workflow.phase();
        AppViewModel {
            phase,
            options: self.options,
            slider_position: self.slider.position(),
            dragging: self.slider.is_dragging(),
            original: self.workflow.original().map(ImageSummary::of),
            restored: self.workflow.restored().map(ImageSummary::of),
            error: self.workflow.error().map(|err| err.message.clone()),
            restore_enabled: matches!(phase, Phase::Loaded | Phase::Restored | Phase::Failed),
            download_enabled: phase == Phase::Restored,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_workflow(&mut self, workflow: WorkflowState) {
        self.workflow = workflow;
        self.mark_dirty();
    }

    pub(crate) fn take_workflow(&mut self) -> WorkflowState {
        std::mem::take(&mut self.workflow)
    }

    pub(crate) fn options_mut(&mut self) -> &mut RestorationOptions {
        self.mark_dirty();
        &mut self.options
    }

    pub(crate) fn slider_mut(&mut self) -> &mut ComparisonSlider {
        &mut self.slider
    }

    pub(crate) fn next_generation(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }
}
