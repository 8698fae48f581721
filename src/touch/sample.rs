//! Gesture vocabulary and recognized samples

use std::time::Duration;

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::record::FingerId;

/// A recognized gesture type
///
/// Discriminants are single bits so a kind maps directly into a
/// [`GestureMask`]; the values are wire-stable. `Pinch` and `PinchComplete`
/// are reserved for future two-finger support and are never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum GestureKind {
    /// Short press and release without movement
    Tap = 0x001,
    /// Second press shortly after a tap, near the same spot
    DoubleTap = 0x002,
    /// Press held in place for the hold duration
    Hold = 0x004,
    /// Drag locked to the horizontal axis
    HorizontalDrag = 0x008,
    /// Drag locked to the vertical axis
    VerticalDrag = 0x010,
    /// Drag with no axis lock
    FreeDrag = 0x020,
    /// Reserved, never produced
    Pinch = 0x040,
    /// Release with sustained velocity after moving past the drag threshold
    Flick = 0x080,
    /// Release that ends any drag
    DragComplete = 0x100,
    /// Reserved, never produced
    PinchComplete = 0x200,
}

impl GestureKind {
    /// The mask flag enabling this gesture kind
    pub fn mask(self) -> GestureMask {
        GestureMask::from_bits_truncate(self as u16)
    }
}

/// Bitset of gesture kinds the recognizer is permitted to emit
///
/// Configured by the consumer; consulted by the recognizer at every decision
/// point, so changes take effect on the next event, never retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureMask(u16);

bitflags! {
    impl GestureMask: u16 {
        const NONE = 0x000;
        const TAP = 0x001;
        const DOUBLE_TAP = 0x002;
        const HOLD = 0x004;
        const HORIZONTAL_DRAG = 0x008;
        const VERTICAL_DRAG = 0x010;
        const FREE_DRAG = 0x020;
        const PINCH = 0x040;
        const FLICK = 0x080;
        const DRAG_COMPLETE = 0x100;
        const PINCH_COMPLETE = 0x200;
    }
}

/// An immutable recognized gesture
///
/// Created the instant a gesture is recognized and owned by the queue until
/// the consumer dequeues it. Secondary position/delta and the finger tags
/// stay zeroed/`NONE` unless a two-finger gesture populates them (reserved).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    /// Which gesture was recognized
    pub kind: GestureKind,
    /// Monotonic time the gesture was recognized at
    pub timestamp: Duration,
    /// Primary position
    pub position: Vec2,
    /// Secondary position, zero unless a two-finger gesture
    pub position2: Vec2,
    /// Primary delta (per-move drag delta, or smoothed velocity for flicks)
    pub delta: Vec2,
    /// Secondary delta, zero unless a two-finger gesture
    pub delta2: Vec2,
    /// Primary finger tag, `FingerId::NONE` unless populated
    pub finger: FingerId,
    /// Secondary finger tag, `FingerId::NONE` unless populated
    pub finger2: FingerId,
}

impl GestureSample {
    /// Creates a single-finger sample; secondary fields stay zeroed
    pub fn new(kind: GestureKind, timestamp: Duration, position: Vec2, delta: Vec2) -> Self {
        Self {
            kind,
            timestamp,
            position,
            position2: Vec2::ZERO,
            delta,
            delta2: Vec2::ZERO,
            finger: FingerId::NONE,
            finger2: FingerId::NONE,
        }
    }
}
