use crate::{Generation, ImageAsset, RestorationOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `image` and `instruction` to the remote service and report back
    /// with `Msg::RestorationFinished` carrying the same `generation`.
    RequestRestoration {
        generation: Generation,
        image: ImageAsset,
        instruction: String,
        options: RestorationOptions,
    },
    /// Save the restored image locally under `filename`.
    SaveDownload { image: ImageAsset, filename: String },
    /// Start observing move/release events globally for the drag session.
    AttachDragListeners,
    /// Stop observing them. Always paired with an earlier `AttachDragListeners`.
    DetachDragListeners,
    ShowNotice(Notice),
}

/// Something the user should be told about that does not change the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PayloadTooLarge { actual: u64, max: u64 },
}
