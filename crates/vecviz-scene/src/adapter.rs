//! Render adapter seam
//!
//! The scene never draws anything itself. It hands entity payloads to a
//! [`RenderAdapter`] and keeps the opaque [`RenderHandle`]s it gets back.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

use crate::entity::Entity;
use crate::matrix::MatrixEntity;
use crate::vector::VectorEntity;

/// Opaque handle to a materialized representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderHandle(pub u64);

/// Entity data handed to the adapter when materializing
#[derive(Debug, Clone, Copy)]
pub enum RenderPayload<'a> {
    Vector(&'a VectorEntity),
    Matrix(&'a MatrixEntity),
}

impl RenderPayload<'_> {
    /// Name of the entity behind the payload
    pub fn name(&self) -> &str {
        match self {
            RenderPayload::Vector(v) => v.name(),
            RenderPayload::Matrix(m) => m.name(),
        }
    }
}

/// Trait implemented by whatever turns entities into something visible
///
/// These three calls are the only interaction the core has with rendering.
pub trait RenderAdapter {
    /// Create a visual representation and return a handle to it
    fn materialize(&mut self, payload: RenderPayload<'_>) -> RenderHandle;

    /// Tear down a representation
    fn dematerialize(&mut self, handle: RenderHandle);

    /// Show or hide a representation
    fn set_visible(&mut self, handle: RenderHandle, visible: bool);
}

/// A representation tracked by [`RecordingAdapter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRepresentation {
    /// Name of the entity that was materialized
    pub label: String,
    /// Current visibility
    pub visible: bool,
}

#[derive(Debug, Default)]
struct Recording {
    live: AHashMap<RenderHandle, LiveRepresentation>,
    next_handle: u64,
    materialized: usize,
    dematerialized: usize,
}

/// Headless adapter that only records what it was asked to do
///
/// Used when no renderer is attached (terminal sessions, tests). Clones
/// share the same recording, so a caller can keep one clone to inspect
/// after handing another to a [`SceneContext`](crate::SceneContext).
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    recording: Rc<RefCell<Recording>>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of representations currently alive
    pub fn live_count(&self) -> usize {
        self.recording.borrow().live.len()
    }

    /// Total number of materialize calls
    pub fn materialized(&self) -> usize {
        self.recording.borrow().materialized
    }

    /// Total number of dematerialize calls that hit a live handle
    pub fn dematerialized(&self) -> usize {
        self.recording.borrow().dematerialized
    }

    /// Look up a live representation
    pub fn get(&self, handle: RenderHandle) -> Option<LiveRepresentation> {
        self.recording.borrow().live.get(&handle).cloned()
    }

    /// Labels of all live representations, sorted
    pub fn live_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .recording
            .borrow()
            .live
            .values()
            .map(|r| r.label.clone())
            .collect();
        labels.sort_unstable();
        labels
    }
}

impl RenderAdapter for RecordingAdapter {
    fn materialize(&mut self, payload: RenderPayload<'_>) -> RenderHandle {
        let visible = match payload {
            RenderPayload::Vector(v) => v.visible,
            RenderPayload::Matrix(m) => m.visible,
        };
        let mut recording = self.recording.borrow_mut();
        let handle = RenderHandle(recording.next_handle);
        recording.next_handle += 1;
        recording.materialized += 1;
        recording.live.insert(
            handle,
            LiveRepresentation {
                label: payload.name().to_string(),
                visible,
            },
        );
        handle
    }

    fn dematerialize(&mut self, handle: RenderHandle) {
        let mut recording = self.recording.borrow_mut();
        if recording.live.remove(&handle).is_some() {
            recording.dematerialized += 1;
        } else {
            log::warn!("dematerialize called with unknown handle {:?}", handle);
        }
    }

    fn set_visible(&mut self, handle: RenderHandle, visible: bool) {
        if let Some(rep) = self.recording.borrow_mut().live.get_mut(&handle) {
            rep.visible = visible;
        }
    }
}
