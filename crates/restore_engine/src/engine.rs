use std::sync::{mpsc, Arc};
use std::thread;

use restore_core::{Generation, ImageAsset};
use restore_logging::{restore_error, restore_info, restore_warn};

use crate::{EngineEvent, RestoreError, Restorer};

/// Receives engine events on the engine thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Restore {
        generation: Generation,
        image: ImageAsset,
        instruction: String,
    },
}

/// Runs restoration requests on a background tokio runtime.
///
/// Every submitted request produces exactly one `RestorationCompleted` event
/// with the generation it was submitted under.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    sink: Arc<dyn EventSink>,
}

impl EngineHandle {
    pub fn new(restorer: Restorer, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let engine_sink = sink.clone();

        thread::spawn(move || {
            let sink = engine_sink;
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    restore_error!("failed to start engine runtime: {}", err);
                    fail_all(cmd_rx, sink.as_ref(), &err.to_string());
                    return;
                }
            };
            let restorer = Arc::new(restorer);
            while let Ok(command) = cmd_rx.recv() {
                let restorer = restorer.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(&restorer, command, sink.as_ref()).await;
                });
            }
            restore_info!("engine command channel closed");
        });

        Self { cmd_tx, sink }
    }

    pub fn restore(&self, generation: Generation, image: ImageAsset, instruction: impl Into<String>) {
        let sent = self.cmd_tx.send(EngineCommand::Restore {
            generation,
            image,
            instruction: instruction.into(),
        });
        if sent.is_err() {
            restore_warn!("engine is gone; failing request generation={}", generation);
            self.sink.emit(EngineEvent::RestorationCompleted {
                generation,
                result: Err(RestoreError::remote("engine unavailable")),
            });
        }
    }
}

async fn handle_command(restorer: &Restorer, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Restore {
            generation,
            image,
            instruction,
        } => {
            restore_info!(
                "restoring generation={} bytes={} model={}",
                generation,
                image.byte_len(),
                restorer.model()
            );
            let result = restorer.restore(&image, &instruction).await;
            sink.emit(EngineEvent::RestorationCompleted { generation, result });
        }
    }
}

fn fail_all(cmd_rx: mpsc::Receiver<EngineCommand>, sink: &dyn EventSink, reason: &str) {
    while let Ok(EngineCommand::Restore { generation, .. }) = cmd_rx.recv() {
        sink.emit(EngineEvent::RestorationCompleted {
            generation,
            result: Err(RestoreError::remote(format!("engine unavailable: {reason}"))),
        });
    }
}
