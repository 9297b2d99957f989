//! Pointer classification
//!
//! Folds one frame of raw pointer sources (touches, mouse) into a single
//! [`PointerSample`]: one cursor, one phase, a touch arity, and the pinch
//! delta for two-finger gestures.
//!
//! Touch wins over the mouse whenever at least one touch is present.

use glam::Vec2;

use crate::mouse::MouseState;
use crate::touch::{TouchPhase, TouchState};

/// Phase of the classified pointer this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerPhase {
    /// No pointer activity
    #[default]
    None,
    /// Pointer went down
    Began,
    /// Pointer is down and moved
    Moved,
    /// Pointer is down and did not move
    Stationary,
    /// Pointer went up
    Ended,
    /// Pointer was cancelled by the platform
    Canceled,
}

impl From<TouchPhase> for PointerPhase {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Started => PointerPhase::Began,
            TouchPhase::Moved => PointerPhase::Moved,
            TouchPhase::Stationary => PointerPhase::Stationary,
            TouchPhase::Ended => PointerPhase::Ended,
            TouchPhase::Cancelled => PointerPhase::Canceled,
        }
    }
}

/// How many fingers are on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchArity {
    /// No touch (mouse or nothing)
    #[default]
    None,
    /// Exactly one touch
    Single,
    /// Two or more touches
    Multi,
}

/// Classified pointer input for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Cursor position in window pixels, origin bottom-left
    pub cursor: Vec2,
    /// Phase of the primary pointer
    pub phase: PointerPhase,
    /// Touch arity
    pub arity: TouchArity,
    /// Change in distance between the first two touches since last frame
    /// (zero unless `arity` is `Multi`)
    pub pinch_delta: f32,
    /// Mouse wheel delta this frame
    pub scroll: f32,
}

impl PointerSample {
    /// Single pointer went down (multi-touch never begins an interaction)
    pub fn is_begin(&self) -> bool {
        self.arity != TouchArity::Multi && self.phase == PointerPhase::Began
    }

    /// Single pointer is held
    pub fn is_drag(&self) -> bool {
        self.arity != TouchArity::Multi
            && matches!(self.phase, PointerPhase::Moved | PointerPhase::Stationary)
    }

    /// Single pointer was released or cancelled
    pub fn is_end(&self) -> bool {
        self.arity != TouchArity::Multi
            && matches!(self.phase, PointerPhase::Ended | PointerPhase::Canceled)
    }

    /// Two or more touches are active
    pub fn is_multi(&self) -> bool {
        self.arity == TouchArity::Multi
    }
}

/// Stateful classifier (remembers the pinch baseline across frames)
#[derive(Debug, Clone, Default)]
pub struct PointerClassifier {
    multi_touch_engaged: bool,
    last_spread: f32,
}

impl PointerClassifier {
    /// Create a classifier with no pinch baseline
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify this frame's raw pointer sources
    pub fn classify(&mut self, touches: &TouchState, mouse: &MouseState) -> PointerSample {
        let Some(primary) = touches.primary_touch() else {
            self.multi_touch_engaged = false;
            return Self::classify_mouse(mouse);
        };

        let mut sample = PointerSample {
            cursor: primary.position,
            phase: primary.phase.into(),
            arity: TouchArity::Single,
            pinch_delta: 0.0,
            scroll: mouse.scroll,
        };

        match touches.spread() {
            Some(spread) => {
                sample.arity = TouchArity::Multi;
                if !self.multi_touch_engaged {
                    // Fresh pinch: the first frame is the baseline
                    self.multi_touch_engaged = true;
                    self.last_spread = spread;
                }
                sample.pinch_delta = spread - self.last_spread;
                self.last_spread = spread;
            }
            None => self.multi_touch_engaged = false,
        }

        sample
    }

    fn classify_mouse(mouse: &MouseState) -> PointerSample {
        let phase = if mouse.left.just_pressed {
            PointerPhase::Began
        } else if mouse.left.pressed {
            PointerPhase::Moved
        } else if mouse.left.just_released {
            PointerPhase::Ended
        } else {
            PointerPhase::None
        };

        PointerSample {
            cursor: mouse.position,
            phase,
            arity: TouchArity::None,
            pinch_delta: 0.0,
            scroll: mouse.scroll,
        }
    }
}
