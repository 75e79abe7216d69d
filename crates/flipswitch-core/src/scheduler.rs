//! Animation scheduling capability.
//!
//! Widgets never own a clock. They hand an [`AnimationRequest`] to an
//! [`AnimationScheduler`] and get back an [`AnimationId`]; the host then
//! advances the scheduler and the widget applies the resulting [`Frame`]s.
//! Tests substitute a scripted scheduler to observe every intermediate step.

use crate::animation::{Easing, Timeline};
use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled animation.
pub type AnimationId = u64;

/// Parameters of an interpolation to run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    /// Duration in seconds
    pub duration: f64,
    /// Easing curve applied to progress
    pub easing: Easing,
}

impl AnimationRequest {
    /// Create a request.
    #[must_use]
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// One step of a running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Animation this frame belongs to
    pub id: AnimationId,
    /// Eased progress; `1.0` on the finishing frame
    pub progress: f64,
    /// Whether this is the last frame for `id`
    pub finished: bool,
}

/// A host-driven interpolation scheduler.
///
/// Implementations must emit exactly one `finished` frame, with
/// `progress == 1.0`, for every scheduled animation that is not cancelled.
pub trait AnimationScheduler {
    /// Start an interpolation, returning its id.
    fn schedule(&mut self, request: AnimationRequest) -> AnimationId;

    /// Stop an animation without emitting its finishing frame.
    ///
    /// Unknown or already finished ids are ignored.
    fn cancel(&mut self, id: AnimationId);

    /// Advance time by `dt` seconds and collect the frames produced.
    fn advance(&mut self, dt: f64) -> Vec<Frame>;

    /// Whether nothing is running.
    fn is_idle(&self) -> bool;
}

#[derive(Debug, Clone)]
struct Running {
    id: AnimationId,
    timeline: Timeline,
}

/// Default real-time scheduler, advanced by the host's frame delta.
#[derive(Debug, Default)]
pub struct FrameClock {
    running: Vec<Running>,
    next_id: AnimationId,
}

impl FrameClock {
    /// Create an idle clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of animations in flight.
    #[must_use]
    pub fn len(&self) -> usize {
        self.running.len()
    }

    /// Check if no animations are in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}

impl AnimationScheduler for FrameClock {
    fn schedule(&mut self, request: AnimationRequest) -> AnimationId {
        let id = self.next_id;
        self.next_id += 1;
        self.running.push(Running {
            id,
            timeline: Timeline::new(request.duration, request.easing),
        });
        log::trace!("frame clock: scheduled #{id} for {:.3}s", request.duration);
        id
    }

    fn cancel(&mut self, id: AnimationId) {
        self.running.retain(|r| r.id != id);
    }

    fn advance(&mut self, dt: f64) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(self.running.len());
        for running in &mut self.running {
            running.timeline.advance(dt);
            let finished = running.timeline.is_complete();
            frames.push(Frame {
                id: running.id,
                progress: if finished { 1.0 } else { running.timeline.eased() },
                finished,
            });
        }
        self.running.retain(|r| !r.timeline.is_complete());
        frames
    }

    fn is_idle(&self) -> bool {
        self.running.is_empty()
    }
}
