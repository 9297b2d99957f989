//! Mouse and cursor input types
//!
//! Button state is tracked with per-frame edges so a consumer polling once
//! per tick sees the press and the release exactly once.

use glam::Vec2;

/// State of a single button with per-frame edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Whether the button is currently held
    pub pressed: bool,
    /// Whether the button went down this frame
    pub just_pressed: bool,
    /// Whether the button went up this frame
    pub just_released: bool,
}

impl ButtonState {
    /// Create a new released button state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press event
    pub fn press(&mut self) {
        if !self.pressed {
            self.just_pressed = true;
        }
        self.pressed = true;
    }

    /// Record a release event
    pub fn release(&mut self) {
        if self.pressed {
            self.just_released = true;
        }
        self.pressed = false;
    }

    /// Clear the edge flags for the next frame
    pub fn end_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Mouse button type for event handling and injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButtonType {
    /// Left mouse button (primary)
    Left,
    /// Right mouse button (secondary/context)
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
}

/// Mouse state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    /// Cursor position in window pixels, origin bottom-left
    pub position: Vec2,
    /// Primary button
    pub left: ButtonState,
    /// Secondary button
    pub right: ButtonState,
    /// Middle button
    pub middle: ButtonState,
    /// Scroll wheel delta accumulated this frame (positive = away from user)
    pub scroll: f32,
}

impl MouseState {
    /// Create a new mouse state at the origin with all buttons released
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Get a button's state
    pub fn button(&self, button: MouseButtonType) -> &ButtonState {
        match button {
            MouseButtonType::Left => &self.left,
            MouseButtonType::Right => &self.right,
            MouseButtonType::Middle => &self.middle,
        }
    }

    /// Get a button's state mutably
    pub fn button_mut(&mut self, button: MouseButtonType) -> &mut ButtonState {
        match button {
            MouseButtonType::Left => &mut self.left,
            MouseButtonType::Right => &mut self.right,
            MouseButtonType::Middle => &mut self.middle,
        }
    }

    /// Accumulate a scroll wheel delta
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Check if any button is held
    pub fn any_pressed(&self) -> bool {
        self.left.pressed || self.right.pressed || self.middle.pressed
    }

    /// Clear per-frame edges and scroll
    pub fn end_frame(&mut self) {
        self.left.end_frame();
        self.right.end_frame();
        self.middle.end_frame();
        self.scroll = 0.0;
    }
}
