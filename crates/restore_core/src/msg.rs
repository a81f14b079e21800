use crate::slider::{ContainerBounds, PointerInput};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A file was picked or dropped and read into memory.
    ImageUploaded(crate::ImageAsset),
    QualityChanged(crate::Quality),
    ColorizeChanged(bool),
    StyleChanged(crate::Style),
    /// User clicked Restore.
    RestoreClicked,
    /// The engine settled a request.
    RestorationFinished {
        generation: crate::Generation,
        result: Result<crate::ImageAsset, crate::RestoreFailure>,
    },
    /// User clicked Reset / New photo.
    ResetClicked,
    /// User clicked Download.
    DownloadClicked,
    /// Mouse-down or touch-start on the comparison handle.
    SliderPressed,
    /// Mouse-move or touch-move, observed globally.
    PointerMoved {
        input: PointerInput,
        bounds: ContainerBounds,
    },
    /// Mouse-up or touch-end, observed globally.
    PointerReleased,
    /// The comparison view is going away.
    ViewTornDown,
}
