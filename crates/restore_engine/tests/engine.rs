mod common;

use std::sync::{mpsc, Arc};
use std::time::Duration;

use common::{image_part, StubService};
use restore_core::ImageAsset;
use restore_engine::{ChannelEventSink, EngineEvent, EngineHandle, RestoreError, Restorer};

#[test]
fn engine_reports_completion_with_generation() {
    let stub = StubService::with_parts(vec![image_part(b"out", "image/png")]);
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        Restorer::new(Arc::new(stub), "m"),
        Arc::new(ChannelEventSink::new(tx)),
    );

    engine.restore(7, ImageAsset::new(vec![1, 2], "image/jpeg"), "restore");

    let event = rx.recv_timeout(Duration::from_secs(5)).expect("engine event");
    assert_eq!(
        event,
        EngineEvent::RestorationCompleted {
            generation: 7,
            result: Ok(ImageAsset::new(b"out".to_vec(), "image/png")),
        }
    );
}

#[test]
fn engine_reports_failures_too() {
    let stub = StubService::with_parts(Vec::new());
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        Restorer::new(Arc::new(stub), "m"),
        Arc::new(ChannelEventSink::new(tx)),
    );

    engine.restore(1, ImageAsset::new(vec![1], "image/png"), "a");
    engine.restore(2, ImageAsset::new(vec![2], "image/png"), "b");

    let mut generations = Vec::new();
    for _ in 0..2 {
        match rx.recv_timeout(Duration::from_secs(5)).expect("engine event") {
            EngineEvent::RestorationCompleted { generation, result } => {
                assert_eq!(result, Err(RestoreError::NoImageReturned));
                generations.push(generation);
            }
        }
    }
    generations.sort_unstable();
    assert_eq!(generations, vec![1, 2]);
}
