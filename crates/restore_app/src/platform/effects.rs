use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use restore_core::{Effect, Msg};
use restore_engine::{save_download, EngineEvent, EngineHandle, EventSink, Restorer};
use restore_logging::{restore_debug, restore_error, restore_info, restore_warn};

use super::app::Inbox;
use super::ui::render::notice_text;

/// Executes effects produced by `update` and feeds engine results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    output_dir: PathBuf,
    inbox: mpsc::Sender<Inbox>,
    drag_listeners: usize,
}

impl EffectRunner {
    pub fn new(restorer: Restorer, output_dir: PathBuf, inbox: mpsc::Sender<Inbox>) -> Self {
        let sink = Arc::new(InboxSink { tx: inbox.clone() });
        let engine = EngineHandle::new(restorer, sink);
        Self {
            engine,
            output_dir,
            inbox,
            drag_listeners: 0,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestRestoration {
                    generation,
                    image,
                    instruction,
                    options,
                } => {
                    restore_info!(
                        "RequestRestoration generation={} options={:?} instruction_len={}",
                        generation,
                        options,
                        instruction.len()
                    );
                    self.engine.restore(generation, image, instruction);
                }
                Effect::SaveDownload { image, filename } => {
                    match save_download(&self.output_dir, &filename, &image) {
                        Ok(path) => self.print(format!("Saved {}", path.display())),
                        Err(err) => {
                            restore_error!("download failed: {}", err);
                            self.print(format!("Could not save {filename}: {err}"));
                        }
                    }
                }
                Effect::AttachDragListeners => {
                    self.drag_listeners += 1;
                    restore_debug!("drag listeners attached ({})", self.drag_listeners);
                }
                Effect::DetachDragListeners => {
                    if self.drag_listeners == 0 {
                        restore_warn!("detach without matching attach");
                    }
                    self.drag_listeners = self.drag_listeners.saturating_sub(1);
                    restore_debug!("drag listeners detached ({})", self.drag_listeners);
                }
                Effect::ShowNotice(notice) => {
                    restore_warn!("notice: {:?}", notice);
                    self.print(notice_text(&notice));
                }
            }
        }
    }

    pub fn has_drag_listeners(&self) -> bool {
        self.drag_listeners > 0
    }

    fn print(&self, line: String) {
        let _ = self.inbox.send(Inbox::Print(line));
    }
}

struct InboxSink {
    tx: mpsc::Sender<Inbox>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::RestorationCompleted { generation, result } => {
                if let Err(err) = &result {
                    restore_warn!("generation {} failed: {}", generation, err);
                }
                Msg::RestorationFinished {
                    generation,
                    result: result.map_err(|err| err.to_failure()),
                }
            }
        };
        let _ = self.tx.send(Inbox::Msg(msg));
    }
}
