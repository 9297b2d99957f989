//! Touch input support
//!
//! This module provides types for handling touch input on mobile devices
//! and touch-enabled displays. Touches that end during a frame stay visible
//! until [`TouchState::end_frame`] so the frame's consumers can observe the
//! `Ended` / `Cancelled` phase.

use glam::Vec2;

/// Touch event phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger touched the screen
    Started,
    /// A finger moved on the screen
    Moved,
    /// A finger is resting on the screen without moving
    Stationary,
    /// A finger was lifted from the screen
    Ended,
    /// The touch was cancelled (e.g., by a phone call)
    Cancelled,
}

impl TouchPhase {
    /// Whether this phase terminates the touch
    pub fn is_finished(self) -> bool {
        matches!(self, TouchPhase::Ended | TouchPhase::Cancelled)
    }
}

/// A single touch point
#[derive(Debug, Clone, Copy)]
pub struct TouchPoint {
    /// Unique identifier for this touch (for multi-touch tracking)
    pub id: u64,
    /// Current position of the touch in window pixels, origin bottom-left
    pub position: Vec2,
    /// Position at the end of the previous frame
    pub previous_position: Vec2,
    /// The phase of this touch during the current frame
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// Create a new touch point
    pub fn new(id: u64, position: Vec2, phase: TouchPhase) -> Self {
        Self {
            id,
            position,
            previous_position: position,
            phase,
        }
    }

    /// Get the delta movement since the last frame
    pub fn delta(&self) -> Vec2 {
        self.position - self.previous_position
    }
}

/// Touch state tracker for multi-touch input
///
/// Touch order is arrival order: the first active touch is the primary one.
#[derive(Debug, Clone, Default)]
pub struct TouchState {
    touches: Vec<TouchPoint>,
}

impl TouchState {
    /// Create a new empty touch state
    pub fn new() -> Self {
        Self::default()
    }

    /// Update touch state with a new touch event
    ///
    /// A touch that started this frame stays `Started` through later
    /// `Moved`/`Stationary` events until [`end_frame`](Self::end_frame).
    pub fn update_touch(&mut self, touch: TouchPoint) {
        match touch.phase {
            TouchPhase::Started => {
                self.touches.retain(|t| t.id != touch.id);
                self.touches.push(touch);
            }
            _ => {
                if let Some(existing) = self.touches.iter_mut().find(|t| t.id == touch.id) {
                    existing.position = touch.position;
                    let keep_start = existing.phase == TouchPhase::Started
                        && matches!(touch.phase, TouchPhase::Moved | TouchPhase::Stationary);
                    if !keep_start {
                        existing.phase = touch.phase;
                    }
                }
            }
        }
    }

    /// Close the frame: drop finished touches, mark the rest stationary
    pub fn end_frame(&mut self) {
        self.touches.retain(|t| !t.phase.is_finished());
        for touch in &mut self.touches {
            touch.previous_position = touch.position;
            touch.phase = TouchPhase::Stationary;
        }
    }

    /// Touches seen this frame, including ones that ended this frame
    pub fn touches(&self) -> &[TouchPoint] {
        &self.touches
    }

    /// Get the number of touches seen this frame
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Check if there are any touches this frame
    pub fn is_touching(&self) -> bool {
        !self.touches.is_empty()
    }

    /// Get the first touch point (the one pointer classification follows)
    pub fn primary_touch(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }

    /// Distance between the first two touches, if there are two
    pub fn spread(&self) -> Option<f32> {
        match self.touches.as_slice() {
            [first, second, ..] => Some(first.position.distance(second.position)),
            _ => None,
        }
    }

    /// Clear all touch state
    pub fn clear(&mut self) {
        self.touches.clear();
    }
}
