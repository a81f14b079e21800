use crate::{Quality, RestorationOptions, Style};

const QUALITY_STANDARD: &str = "Restore this old photograph. Remove visible dust, \
small scratches and minor stains, and gently improve contrast and sharpness while \
keeping the original grain and character of the photo.";

const QUALITY_HIGH: &str = "Carefully restore this damaged old photograph. Remove \
scratches, creases, tears, stains, dust and fading, repair missing or damaged \
regions, and recover fine detail in faces, clothing and background with natural \
sharpness and balanced contrast.";

const QUALITY_ULTRA: &str = "Perform a complete, professional-grade restoration of \
this heavily damaged old photograph. Eliminate every scratch, crease, tear, stain, \
spot, blotch and trace of fading or noise, reconstruct all missing or destroyed \
areas, and rebuild the finest textures and details in skin, eyes, hair, fabric and \
background so the result looks like a pristine high-resolution photograph.";

const COLORIZE: &str = "Colorize the photograph with natural, historically plausible \
colors, using realistic multi-tone skin, subtle variation in clothing and \
surroundings, and soft, believable lighting.";

const KEEP_GRAYSCALE: &str = "Do not add any new color. Keep the photograph in its \
original black-and-white or grayscale tones.";

const OIL_PAINTING: &str = "Render the final image in the style of a classical oil \
painting with visible brush strokes, rich texture and painterly lighting.";

const PRESERVE_IDENTITY: &str = "Preserve the identity of every person exactly: do \
not change facial structure, head shape, hair or the line of the shoulders.";

/// Builds the instruction sent alongside the image.
///
/// Fragments are always emitted in the order quality, color, style, identity;
/// an empty style fragment adds no whitespace.
pub fn build_prompt(options: &RestorationOptions) -> String {
    let fragments = [
        quality_fragment(options.quality),
        color_fragment(options.colorize),
        style_fragment(options.style),
        PRESERVE_IDENTITY,
    ];

    fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn quality_fragment(quality: Quality) -> &'static str {
    match quality {
        Quality::Standard => QUALITY_STANDARD,
        Quality::High => QUALITY_HIGH,
        Quality::Ultra => QUALITY_ULTRA,
    }
}

pub fn color_fragment(colorize: bool) -> &'static str {
    if colorize {
        COLORIZE
    } else {
        KEEP_GRAYSCALE
    }
}

pub fn style_fragment(style: Style) -> &'static str {
    match style {
        Style::Realistic => "",
        Style::OilPainting => OIL_PAINTING,
    }
}

pub fn identity_fragment() -> &'static str {
    PRESERVE_IDENTITY
}
