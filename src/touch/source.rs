//! Platform touch input collaborator

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::record::FingerId;

/// One slot's worth of platform input for the current frame
///
/// `finger_id` is `FingerId::NONE` when the slot holds no finger; the
/// position is then ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlotReading {
    /// Finger occupying this slot, or the "no finger" sentinel
    pub finger_id: FingerId,
    /// Device-normalized, scaled position of the finger
    pub position: Vec2,
}

impl SlotReading {
    /// A slot reading holding no finger
    pub fn empty() -> Self {
        Self::default()
    }

    /// A slot reading holding the given finger
    pub fn finger(finger_id: FingerId, position: Vec2) -> Self {
        Self {
            finger_id,
            position,
        }
    }
}

/// Touch device capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchCapabilities {
    /// Whether a touch device is present
    pub connected: bool,
    /// Maximum number of simultaneous touches the device reports
    pub max_touch_count: usize,
}

/// Platform input layer the panel pulls from once per frame
///
/// Implementations fill the slot table with the fingers currently down.
/// Fingers beyond the slice's length are silently dropped; that is the
/// tracker's capacity cap, not an error.
pub trait TouchSource {
    /// Populates `slots` with the fingers currently down
    fn fill_slots(&mut self, slots: &mut [SlotReading]);

    /// Queries device capabilities
    fn capabilities(&self) -> TouchCapabilities;
}
