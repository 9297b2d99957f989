//! Pointer input devices for the navigator
//!
//! This crate provides platform-agnostic pointer input types and the
//! classifier that folds them into one cursor per frame.
//!
//! # Modules
//!
//! - [`mouse`]: Mouse buttons with per-frame edges, cursor, scroll wheel
//! - [`touch`]: Touch points and multi-touch tracking
//! - [`pointer`]: Classification of touch/mouse into a [`PointerSample`]
//!
//! # Frame protocol
//!
//! The host feeds platform events into [`TouchState`] and [`MouseState`],
//! calls [`PointerClassifier::classify`] once per tick, then calls
//! `end_frame` on both states before the next batch of events.

pub mod mouse;
pub mod pointer;
pub mod touch;

// Re-export commonly used types at crate root
pub use mouse::{ButtonState, MouseButtonType, MouseState};
pub use pointer::{PointerClassifier, PointerPhase, PointerSample, TouchArity};
pub use touch::{TouchPhase, TouchPoint, TouchState};
