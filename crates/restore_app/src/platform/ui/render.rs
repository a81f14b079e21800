use restore_core::{AppViewModel, ImageSummary, Notice, Phase, Quality, RestorationOptions, Style};

/// Status lines for the current view, top to bottom.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("[{}] {}", phase_label(view.phase), options_line(&view.options)));

    if let Some(original) = &view.original {
        lines.push(format!("  original: {}", summary(original)));
    }
    if let Some(restored) = &view.restored {
        lines.push(format!("  restored: {}", summary(restored)));
        lines.push(format!("  {}", split_bar(view.slider_position)));
    }
    if let Some(error) = &view.error {
        lines.push(format!("  error: {error}"));
    }

    let mut actions = Vec::new();
    if view.restore_enabled {
        actions.push("restore");
    }
    if view.download_enabled {
        actions.push("download");
    }
    if view.phase == Phase::Empty {
        actions.push("open");
    } else {
        actions.push("reset");
    }
    lines.push(format!("  next: {}", actions.join(", ")));

    lines
}

pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::PayloadTooLarge { actual, max } => format!(
            "File is too large ({}); the limit is {}.",
            human_bytes(*actual),
            human_bytes(*max)
        ),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Empty => "No photo",
        Phase::Loaded => "Ready",
        Phase::Processing => "Restoring...",
        Phase::Restored => "Restored",
        Phase::Failed => "Failed",
    }
}

fn options_line(options: &RestorationOptions) -> String {
    let quality = match options.quality {
        Quality::Standard => "standard",
        Quality::High => "high",
        Quality::Ultra => "ultra",
    };
    let style = match options.style {
        Style::Realistic => "realistic",
        Style::OilPainting => "oil painting",
    };
    let color = if options.colorize { "colorize" } else { "keep b/w" };
    format!("quality {quality} | {color} | {style}")
}

fn summary(image: &ImageSummary) -> String {
    format!(
        "{} ({})",
        image.media_type,
        human_bytes(image.byte_len)
    )
}

/// Byte count with a binary unit, e.g. `2.0 MiB` or `512 B`.
pub fn human_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MiB", value / MIB)
    } else if value >= KIB {
        format!("{:.1} KiB", value / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// `before |#####.....| after` with the divider at the split position.
fn split_bar(position: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((position / 100.0) * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!(
        "before |{}{}| after  ({position:.0}%)",
        "#".repeat(filled),
        ".".repeat(WIDTH - filled)
    )
}
