//! The dedicated computation loop
//!
//! Runs on its own thread: drain host events, advance the engine one frame,
//! publish the finished snapshot, repeat. Frame pacing is left to the host.

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use crate::simulation::engine::Engine;
use crate::simulation::spawner::SpawnPattern;
use crate::simulation::states::NVec2;
use crate::visualization::snapshot::SnapshotSlot;

/// Input forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    MoveAttractor(NVec2),                              // pointer moved
    PointerLeft,                                       // park the attractor at home
    Spawn { pattern: SpawnPattern, at: NVec2 },        // sandbox brush stroke
    Inject { position: NVec2, momentum: NVec2 },       // single explicit particle
    Shutdown,
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    FrameLimit,
    Shutdown,
    HostGone,
}

/// Start the loop on a thread named `physics-loop`.
///
/// The loop ends on `Shutdown`, when every sender is dropped, or after
/// `frame_limit` frames. The engine is handed back through the join handle.
pub fn spawn_loop(
    engine: Engine,
    slot: Arc<SnapshotSlot>,
    events: Receiver<HostEvent>,
    frame_limit: Option<u64>,
) -> io::Result<JoinHandle<(Engine, StopReason)>> {
    thread::Builder::new()
        .name("physics-loop".into())
        .spawn(move || {
            let mut engine = engine;
            let reason = run_loop(&mut engine, &slot, &events, frame_limit);
            info!("physics loop stopped after {} frames: {:?}", engine.frame(), reason);
            (engine, reason)
        })
}

/// The loop body, usable without a thread
pub fn run_loop(
    engine: &mut Engine,
    slot: &SnapshotSlot,
    events: &Receiver<HostEvent>,
    frame_limit: Option<u64>,
) -> StopReason {
    let mut spare = None;
    let mut frames = 0u64;

    loop {
        if let Some(limit) = frame_limit {
            if frames >= limit {
                return StopReason::FrameLimit;
            }
        }

        if let Some(reason) = drain_events(engine, events) {
            return reason;
        }

        let target = engine.attractor().position;
        let snapshot = engine.advance_frame_into(target, spare.take().unwrap_or_default());
        spare = slot.publish(snapshot);
        frames += 1;
    }
}

/// Apply every pending event. Returns a stop reason if the loop should end.
fn drain_events(engine: &mut Engine, events: &Receiver<HostEvent>) -> Option<StopReason> {
    loop {
        match events.try_recv() {
            Ok(HostEvent::MoveAttractor(position)) => engine.move_attractor(position),
            Ok(HostEvent::PointerLeft) => engine.park_attractor(),
            Ok(HostEvent::Spawn { pattern, at }) => match engine.inject_pattern(pattern, at) {
                Ok(n) => debug!("spawned {} particles", n),
                Err(e) => warn!("spawn ignored: {}", e),
            },
            Ok(HostEvent::Inject { position, momentum }) => {
                if let Err(e) = engine.inject_particle(position, momentum) {
                    warn!("inject ignored: {}", e);
                }
            }
            Ok(HostEvent::Shutdown) => return Some(StopReason::Shutdown),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => return Some(StopReason::HostGone),
        }
    }
}
