//! Touch input handling system
//!
//! Converts raw per-finger platform input into semantic gestures that a
//! game loop polls once per frame:
//! - Collects raw touches from the platform source (winit, or anything
//!   implementing [`TouchSource`])
//! - Tracks up to 8 fingers in a fixed slot arena and classifies
//!   Pressed/Moved/Released transitions by diffing frames
//! - Runs a single-active-finger state machine recognizing taps, double
//!   taps, holds, directional drags, drag completion, and flicks
//! - Buffers recognized gestures in a FIFO until the consumer reads them
//!
//! # Architecture
//!
//! ```text
//! Platform (TouchSource) → FingerTracker → GestureRecognizer
//!                               ↓                 ↓
//!                        TouchCollection    GestureQueue
//!                               ↓                 ↓
//!                            consumer poll (per frame)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut panel = TouchPanel::new(WinitTouchSource::new());
//! panel.set_enabled_gestures(GestureMask::TAP | GestureMask::FREE_DRAG);
//!
//! // In window_event()
//! panel.source_mut().handle_window_event(&event);
//!
//! // Each frame
//! panel.update();
//! while panel.is_gesture_available() {
//!     let gesture = panel.read_gesture()?;
//!     // react to gesture.kind / gesture.position / gesture.delta
//! }
//! ```

mod clock;
mod panel;
mod queue;
mod recognizer;
mod record;
mod sample;
mod source;
mod tracker;
mod winit_source;

// Re-export public API
pub use clock::{Clock, MonotonicClock};
pub use panel::TouchPanel;
pub use queue::{GestureQueue, TouchError};
pub use recognizer::{GestureRecognizer, GestureState};
pub use record::{FingerId, TouchCollection, TouchRecord, TouchState};
pub use sample::{GestureKind, GestureMask, GestureSample};
pub use source::{SlotReading, TouchCapabilities, TouchSource};
pub use tracker::{FingerTracker, MAX_TOUCH_SLOTS};
pub use winit_source::WinitTouchSource;
