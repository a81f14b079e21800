use crate::slider::ListenerChange;
use crate::{
    build_prompt, AppState, Effect, Msg, Notice, WorkflowState, DOWNLOAD_FILENAME,
    MAX_UPLOAD_BYTES,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ImageUploaded(asset) => {
            let actual = asset.byte_len();
            if actual > MAX_UPLOAD_BYTES {
                return (
                    state,
                    vec![Effect::ShowNotice(Notice::PayloadTooLarge {
                        actual,
                        max: MAX_UPLOAD_BYTES,
                    })],
                );
            }
            // Any outstanding request is orphaned here; its completion no longer
            // matches a Processing state and is dropped.
            state.set_workflow(WorkflowState::Loaded { original: asset });
            Vec::new()
        }
        Msg::QualityChanged(quality) => {
            state.options_mut().quality = quality;
            Vec::new()
        }
        Msg::ColorizeChanged(colorize) => {
            state.options_mut().colorize = colorize;
            Vec::new()
        }
        Msg::StyleChanged(style) => {
            state.options_mut().style = style;
            Vec::new()
        }
        Msg::RestoreClicked => start_restoration(&mut state),
        Msg::RestorationFinished { generation, result } => {
            if state.workflow().pending_generation() != Some(generation) {
                return (state, Vec::new());
            }
            if let WorkflowState::Processing { original, .. } = state.take_workflow() {
                let next = match result {
                    Ok(restored) => WorkflowState::Restored { original, restored },
                    Err(error) => WorkflowState::Failed { original, error },
                };
                state.set_workflow(next);
            }
            Vec::new()
        }
        Msg::ResetClicked => {
            state.set_workflow(WorkflowState::Empty);
            listener_effects(state.slider_mut().reset())
        }
        Msg::DownloadClicked => match state.workflow().restored() {
            Some(restored) => vec![Effect::SaveDownload {
                image: restored.clone(),
                filename: DOWNLOAD_FILENAME.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::SliderPressed => {
            let change = state.slider_mut().begin_drag();
            if change.is_some() {
                state.mark_dirty();
            }
            listener_effects(change)
        }
        Msg::PointerMoved { input, bounds } => {
            if state.slider_mut().drag_to(&input, bounds) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PointerReleased | Msg::ViewTornDown => {
            let change = state.slider_mut().end_drag();
            if change.is_some() {
                state.mark_dirty();
            }
            listener_effects(change)
        }
    };

    (state, effects)
}

fn start_restoration(state: &mut AppState) -> Vec<Effect> {
    let original = match state.workflow() {
        WorkflowState::Loaded { original }
        | WorkflowState::Restored { original, .. }
        | WorkflowState::Failed { original, .. } => original.clone(),
        WorkflowState::Empty | WorkflowState::Processing { .. } => return Vec::new(),
    };

    let options = state.options();
    let generation = state.next_generation();
    let instruction = build_prompt(&options);
    state.set_workflow(WorkflowState::Processing {
        original: original.clone(),
        options,
        generation,
    });

    vec![Effect::RequestRestoration {
        generation,
        image: original,
        instruction,
        options,
    }]
}

fn listener_effects(change: Option<ListenerChange>) -> Vec<Effect> {
    match change {
        Some(ListenerChange::Attach) => vec![Effect::AttachDragListeners],
        Some(ListenerChange::Detach) => vec![Effect::DetachDragListeners],
        None => Vec::new(),
    }
}
