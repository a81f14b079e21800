/// How hard the model is pushed to remove damage and rebuild detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    Standard,
    High,
    Ultra,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Standard, Quality::High, Quality::Ultra];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Realistic,
    OilPainting,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Realistic, Style::OilPainting];
}

/// User-selected parameters for one restoration request.
///
/// The live selection in [`crate::AppState`] can change at any time; a request
/// works from the copy taken when it was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RestorationOptions {
    pub quality: Quality,
    pub colorize: bool,
    pub style: Style,
}

impl Default for RestorationOptions {
    fn default() -> Self {
        Self {
            quality: Quality::Standard,
            colorize: true,
            style: Style::Realistic,
        }
    }
}
