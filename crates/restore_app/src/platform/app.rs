use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{mpsc, Arc};
use std::thread;

use log::LevelFilter;
use restore_core::{update, AppState, Msg, Notice};
use restore_engine::{load_image_file, GeminiService, LoadError, Restorer, ServiceSettings};
use restore_logging::{restore_error, restore_info, restore_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render;

/// Everything the main loop reacts to.
pub enum Inbox {
    Msg(Msg),
    Print(String),
    Quit,
}

pub fn run_app() -> ExitCode {
    let destination = match LogDestination::from_args(std::env::args().skip(1)) {
        Ok(destination) => destination,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: restore_app [--log file|terminal|both]");
            return ExitCode::FAILURE;
        }
    };
    logging::initialize(destination, LevelFilter::Info);

    let settings = match ServiceSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let model = settings.model.clone();
    let service = match GeminiService::new(settings) {
        Ok(service) => service,
        Err(err) => {
            restore_error!("failed to build service client: {}", err);
            eprintln!("Could not start: {err}");
            return ExitCode::FAILURE;
        }
    };
    let output_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let (tx, rx) = mpsc::channel::<Inbox>();
    let mut runner = EffectRunner::new(
        Restorer::new(Arc::new(service), model),
        output_dir,
        tx.clone(),
    );
    spawn_input_reader(tx);

    println!("{HELP}");
    let mut app = App::new();
    app.render();

    while let Ok(item) = rx.recv() {
        match item {
            Inbox::Msg(msg) => app.dispatch(msg, &mut runner),
            Inbox::Print(line) => println!("{line}"),
            Inbox::Quit => break,
        }
    }

    // Leaving the loop tears the view down; release anything a drag still holds.
    app.dispatch(Msg::ViewTornDown, &mut runner);
    if runner.has_drag_listeners() {
        restore_warn!("drag listeners still attached at shutdown");
    }
    restore_info!("exiting");
    ExitCode::SUCCESS
}

struct App {
    state: AppState,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    fn dispatch(&mut self, msg: Msg, runner: &mut EffectRunner) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        runner.run(effects);
        if self.state.consume_dirty() {
            self.render();
        }
    }

    fn render(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in render::render(&self.state.view()) {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

/// Reads commands from stdin on its own thread so engine results keep flowing.
fn spawn_input_reader(tx: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let items = match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => command_to_inbox(command),
                Err(message) => vec![Inbox::Print(message)],
            };
            for item in items {
                let quit = matches!(item, Inbox::Quit);
                if tx.send(item).is_err() || quit {
                    return;
                }
            }
        }
        let _ = tx.send(Inbox::Quit);
    });
}

fn command_to_inbox(command: Command) -> Vec<Inbox> {
    match command {
        Command::Open(path) => match load_image_file(&path) {
            Ok(asset) => {
                restore_info!(
                    "upload {:?} type={} size={}",
                    path,
                    asset.media_type(),
                    render::human_bytes(asset.byte_len())
                );
                vec![Inbox::Msg(Msg::ImageUploaded(asset))]
            }
            Err(LoadError::TooLarge { size, max, .. }) => {
                restore_warn!("refusing {:?}: {} bytes, limit {}", path, size, max);
                vec![Inbox::Print(render::notice_text(&Notice::PayloadTooLarge {
                    actual: size,
                    max,
                }))]
            }
            Err(err) => {
                restore_warn!("could not load {:?}: {}", path, err);
                vec![Inbox::Print(format!("Could not open {}: {err}", path.display()))]
            }
        },
        Command::Dispatch(msgs) => msgs.into_iter().map(Inbox::Msg).collect(),
        Command::Help => vec![Inbox::Print(HELP.to_string())],
        Command::Quit => vec![Inbox::Quit],
    }
}
