use std::path::PathBuf;

use restore_core::{ContainerBounds, Msg, PointerInput, Quality, Style};

/// The comparison view in the console is a virtual 0..100 wide strip.
pub const CONSOLE_COMPARE_BOUNDS: ContainerBounds = ContainerBounds {
    left: 0.0,
    width: 100.0,
};

pub const HELP: &str = "\
commands:
  open <path>                      load a photo
  quality <standard|high|ultra>    restoration strength
  colorize <on|off>                add natural colors
  style <realistic|oil>            output style
  restore                          send the photo for restoration
  compare <0-100>                  move the before/after split
  download                         save the result as IMGRestore-Result.png
  reset                            start over
  help                             show this text
  quit                             exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Read a file and upload it.
    Open(PathBuf),
    /// Forward these messages to the state machine, in order.
    Dispatch(Vec<Msg>),
    Help,
    Quit,
}

/// Parses one input line. `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "open" | "upload" => {
            if arg.is_empty() {
                return Err("usage: open <path>".to_string());
            }
            Command::Open(PathBuf::from(arg))
        }
        "quality" => Command::Dispatch(vec![Msg::QualityChanged(parse_quality(arg)?)]),
        "colorize" => Command::Dispatch(vec![Msg::ColorizeChanged(parse_switch(arg)?)]),
        "style" => Command::Dispatch(vec![Msg::StyleChanged(parse_style(arg)?)]),
        "restore" => Command::Dispatch(vec![Msg::RestoreClicked]),
        "compare" => {
            let percent: f64 = arg
                .parse()
                .map_err(|_| format!("not a number: {arg:?}"))?;
            Command::Dispatch(drag_to(percent))
        }
        "download" => Command::Dispatch(vec![Msg::DownloadClicked]),
        "reset" => Command::Dispatch(vec![Msg::ResetClicked]),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}, try help")),
    };
    Ok(Some(command))
}

/// A full press-move-release session ending at `percent`.
fn drag_to(percent: f64) -> Vec<Msg> {
    vec![
        Msg::SliderPressed,
        Msg::PointerMoved {
            input: PointerInput::Mouse { client_x: percent },
            bounds: CONSOLE_COMPARE_BOUNDS,
        },
        Msg::PointerReleased,
    ]
}

fn parse_quality(arg: &str) -> Result<Quality, String> {
    match arg.to_ascii_lowercase().as_str() {
        "standard" => Ok(Quality::Standard),
        "high" => Ok(Quality::High),
        "ultra" => Ok(Quality::Ultra),
        _ => Err("usage: quality <standard|high|ultra>".to_string()),
    }
}

fn parse_style(arg: &str) -> Result<Style, String> {
    match arg.to_ascii_lowercase().as_str() {
        "realistic" => Ok(Style::Realistic),
        "oil" | "oil-painting" => Ok(Style::OilPainting),
        _ => Err("usage: style <realistic|oil>".to_string()),
    }
}

fn parse_switch(arg: &str) -> Result<bool, String> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err("usage: colorize <on|off>".to_string()),
    }
}
