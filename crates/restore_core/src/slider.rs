//! Before/after comparison slider.
//!
//! Mouse and touch input are folded into one drag session. While a session is
//! active the shell must observe move and release events globally (outside the
//! comparison element too); the slider tells it when to attach and detach those
//! listeners through [`ListenerChange`].

/// Split position used on startup and after a workflow reset.
pub const DEFAULT_SLIDER_POSITION: f64 = 50.0;

/// Horizontal geometry of the comparison container, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

/// A move event from either input source.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse { client_x: f64 },
    /// Client x of every active touch point, in the order the platform reports them.
    Touch { touches: Vec<f64> },
}

impl PointerInput {
    /// The x coordinate driving the slider: the mouse position, or the first touch point.
    pub fn client_x(&self) -> Option<f64> {
        match self {
            PointerInput::Mouse { client_x } => Some(*client_x),
            PointerInput::Touch { touches } => touches.first().copied(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Acquire/release request for the global move and release listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Attach,
    Detach,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSlider {
    phase: DragPhase,
    position: f64,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonSlider {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            position: DEFAULT_SLIDER_POSITION,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Press on the handle. Returns `Attach` only on the Idle -> Dragging edge.
    pub fn begin_drag(&mut self) -> Option<ListenerChange> {
        match self.phase {
            DragPhase::Idle => {
                self.phase = DragPhase::Dragging;
                Some(ListenerChange::Attach)
            }
            DragPhase::Dragging => None,
        }
    }

    /// Applies a move event. Returns whether the position changed.
    pub fn drag_to(&mut self, input: &PointerInput, bounds: ContainerBounds) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        let Some(client_x) = input.client_x() else {
            return false;
        };
        match split_position(client_x, bounds) {
            Some(position) if position != self.position => {
                self.position = position;
                true
            }
            _ => false,
        }
    }

    /// Release anywhere. Returns `Detach` only on the Dragging -> Idle edge.
    pub fn end_drag(&mut self) -> Option<ListenerChange> {
        match self.phase {
            DragPhase::Dragging => {
                self.phase = DragPhase::Idle;
                Some(ListenerChange::Detach)
            }
            DragPhase::Idle => None,
        }
    }

    /// Ends any session and recentres the split.
    pub fn reset(&mut self) -> Option<ListenerChange> {
        let change = self.end_drag();
        self.position = DEFAULT_SLIDER_POSITION;
        change
    }
}

/// Maps a client x coordinate to a split percentage in `[0, 100]`.
///
/// Returns `None` for degenerate geometry (zero, negative or non-finite width)
/// or a non-finite coordinate.
pub fn split_position(client_x: f64, bounds: ContainerBounds) -> Option<f64> {
    if !bounds.width.is_finite() || bounds.width <= 0.0 || !bounds.left.is_finite() {
        return None;
    }
    if !client_x.is_finite() {
        return None;
    }
    let percent = (client_x - bounds.left) / bounds.width * 100.0;
    Some(percent.clamp(0.0, 100.0))
}
