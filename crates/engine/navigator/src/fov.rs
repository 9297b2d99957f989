//! Field-of-view zoom from scroll and pinch

use devices::PointerSample;

use crate::config::FovConfig;
use crate::rig::CameraRig;
use crate::session::ControlState;

/// Applies zoom input to the rig's field of view
#[derive(Debug, Clone, Copy)]
pub struct FovController<'a> {
    config: &'a FovConfig,
}

impl<'a> FovController<'a> {
    pub fn new(config: &'a FovConfig) -> Self {
        Self { config }
    }

    /// Candidate field of view for this tick's input
    ///
    /// Pinching out (positive delta) narrows the view; scrolling up widens it.
    pub fn candidate(&self, sample: &PointerSample, fov: f32) -> f32 {
        if sample.is_multi() {
            fov - sample.pinch_delta * self.config.pinch_rate
        } else {
            fov + sample.scroll * self.config.rate
        }
    }

    /// Zoom the rig; returns `true` if the field of view changed
    ///
    /// Does nothing during event-exclusive states. A candidate outside
    /// `[min, max]` is rejected outright rather than clamped, so the zoom
    /// stops short of the bound when a large step would overshoot it.
    pub fn apply(&self, sample: &PointerSample, state: ControlState, rig: &mut CameraRig) -> bool {
        if state.is_event_exclusive() {
            return false;
        }

        let candidate = self.candidate(sample, rig.fov);
        if candidate == rig.fov {
            return false;
        }
        if !(self.config.min..=self.config.max).contains(&candidate) {
            tracing::trace!(candidate, "fov out of range, ignored");
            return false;
        }

        tracing::trace!(from = rig.fov, to = candidate, "fov");
        rig.fov = candidate;
        true
    }
}
