//! Per-finger touch records and the per-frame touch collection

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform finger identifier
///
/// Wraps the integer id the platform layer assigns to a finger for the
/// duration of its contact. `FingerId::NONE` is the "no finger" sentinel;
/// every real finger has an id >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerId(pub i64);

impl FingerId {
    /// Sentinel meaning "no finger"
    pub const NONE: FingerId = FingerId(-1);

    /// Returns true if this id refers to an actual finger
    pub fn is_some(self) -> bool {
        self.0 >= 0
    }

    /// Returns true if this is the "no finger" sentinel
    pub fn is_none(self) -> bool {
        self.0 < 0
    }
}

impl Default for FingerId {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::fmt::Display for FingerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Touch state of a finger slot for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchState {
    /// Slot holds no finger
    #[default]
    Invalid,
    /// Finger lifted this frame
    Released,
    /// Finger made contact this frame (edge)
    Pressed,
    /// Finger is down and may have moved since last frame
    Moved,
}

impl TouchState {
    /// Returns true if the finger is on the panel (pressed or moved)
    pub fn is_down(self) -> bool {
        matches!(self, Self::Pressed | Self::Moved)
    }
}

/// One finger's state for the current frame
///
/// Carries a single-frame look-back (previous state and position), not a
/// full history. Rewritten every frame by the finger tracker; never
/// individually destroyed, only overwritten or invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchRecord {
    /// Platform finger identifier, or `FingerId::NONE` when invalid
    pub id: FingerId,
    /// Device-normalized, scaled screen position
    pub position: Vec2,
    /// Transition classified for this frame
    pub state: TouchState,
    /// State in the immediately preceding frame
    pub previous_state: TouchState,
    /// Position in the immediately preceding frame
    pub previous_position: Vec2,
}

impl TouchRecord {
    /// An empty slot record
    pub fn invalid() -> Self {
        Self {
            id: FingerId::NONE,
            position: Vec2::ZERO,
            state: TouchState::Invalid,
            previous_state: TouchState::Invalid,
            previous_position: Vec2::ZERO,
        }
    }

    /// Returns true if this record holds an actual finger
    pub fn is_valid(&self) -> bool {
        self.state != TouchState::Invalid
    }

    /// Movement since the previous frame
    pub fn delta(&self) -> Vec2 {
        self.position - self.previous_position
    }
}

impl Default for TouchRecord {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Ordered, read-only view of the current frame's active touches
///
/// Rebuilt from the slot table on every query; order is slot index order,
/// not press order. Bounded by the tracker's slot capacity.
#[derive(Debug, Clone, Default)]
pub struct TouchCollection {
    records: Vec<TouchRecord>,
}

impl TouchCollection {
    pub(crate) fn from_records(records: Vec<TouchRecord>) -> Self {
        Self { records }
    }

    /// Number of active touches this frame
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no fingers are touching
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at the given index, in slot order
    pub fn get(&self, index: usize) -> Option<&TouchRecord> {
        self.records.get(index)
    }

    /// Finds the record for a specific finger
    pub fn find(&self, id: FingerId) -> Option<&TouchRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Iterates records in slot order
    pub fn iter(&self) -> std::slice::Iter<'_, TouchRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a TouchCollection {
    type Item = &'a TouchRecord;
    type IntoIter = std::slice::Iter<'a, TouchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
