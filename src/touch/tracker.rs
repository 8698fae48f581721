//! Finger slot tracking and per-frame transition classification

use glam::Vec2;
use tracing::trace;

use super::record::{FingerId, TouchCollection, TouchRecord, TouchState};
use super::source::{SlotReading, TouchSource};

/// Fixed number of finger slots in the arena
pub const MAX_TOUCH_SLOTS: usize = 8;

/// Maps platform finger identifiers to stable slot indices and classifies
/// each slot's Pressed/Moved/Released transition for the current frame by
/// diffing against the previous frame's snapshot.
///
/// The arena is a fixed array; capacity can be lowered at construction to
/// ease testing with smaller slot counts, never raised past
/// [`MAX_TOUCH_SLOTS`].
pub struct FingerTracker {
    current: [TouchRecord; MAX_TOUCH_SLOTS],
    previous: [TouchRecord; MAX_TOUCH_SLOTS],
    capacity: usize,
}

impl FingerTracker {
    /// Creates a tracker with the full slot capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_TOUCH_SLOTS)
    }

    /// Creates a tracker with a reduced slot capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: [TouchRecord::invalid(); MAX_TOUCH_SLOTS],
            previous: [TouchRecord::invalid(); MAX_TOUCH_SLOTS],
            capacity: capacity.min(MAX_TOUCH_SLOTS),
        }
    }

    /// Number of slots this tracker maintains
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rewrites one slot's record for the current frame
    ///
    /// Classification against the previous frame's record:
    /// - empty reading over a finger that was down: `Released`, carrying the
    ///   last known position so a one-frame-delayed consumer still sees
    ///   where the release occurred
    /// - empty reading otherwise: `Invalid`
    /// - finger over a previously `Invalid` slot: `Pressed`
    /// - finger with a different id than the slot's previous finger: the
    ///   old finger's `Released` surfaces this frame (if it was down) and
    ///   the new contact lands as `Pressed` the next, so a same-frame slot
    ///   reuse never masquerades as a move of the old finger
    /// - finger otherwise: `Moved`, with the previous position/state snapshot
    pub fn set_finger(&mut self, slot: usize, reading: SlotReading) {
        if slot >= self.capacity {
            return;
        }
        let prev = self.previous[slot];

        self.current[slot] = if reading.finger_id.is_none() {
            if prev.state.is_down() {
                trace!(slot, finger = %prev.id, "finger released");
                TouchRecord {
                    id: prev.id,
                    position: prev.position,
                    state: TouchState::Released,
                    previous_state: prev.state,
                    previous_position: prev.position,
                }
            } else {
                TouchRecord::invalid()
            }
        } else if prev.state == TouchState::Invalid {
            trace!(slot, finger = %reading.finger_id, "finger pressed");
            TouchRecord {
                id: reading.finger_id,
                position: reading.position,
                state: TouchState::Pressed,
                previous_state: TouchState::Invalid,
                previous_position: reading.position,
            }
        } else if prev.id != reading.finger_id {
            if prev.state.is_down() {
                // The slot was freed and reclaimed between frames; the old
                // finger's release must reach the recognizer before the new
                // contact does.
                trace!(slot, finger = %prev.id, "finger released (slot reused)");
                TouchRecord {
                    id: prev.id,
                    position: prev.position,
                    state: TouchState::Released,
                    previous_state: prev.state,
                    previous_position: prev.position,
                }
            } else {
                trace!(slot, finger = %reading.finger_id, "finger pressed");
                TouchRecord {
                    id: reading.finger_id,
                    position: reading.position,
                    state: TouchState::Pressed,
                    previous_state: TouchState::Invalid,
                    previous_position: reading.position,
                }
            }
        } else {
            TouchRecord {
                id: reading.finger_id,
                position: reading.position,
                state: TouchState::Moved,
                previous_state: prev.state,
                previous_position: prev.position,
            }
        };
    }

    /// Advances the tracker by one frame
    ///
    /// Copies the current slot table into the previous-frame table, then
    /// pulls fresh readings from the platform source. Must run exactly once
    /// per frame, before any touch-collection query.
    pub fn update<S: TouchSource + ?Sized>(&mut self, source: &mut S) {
        self.previous = self.current;

        let mut readings = [SlotReading::empty(); MAX_TOUCH_SLOTS];
        source.fill_slots(&mut readings[..self.capacity]);

        for slot in 0..self.capacity {
            self.set_finger(slot, readings[slot]);
        }
    }

    /// Record for a specific slot
    pub fn record(&self, slot: usize) -> &TouchRecord {
        &self.current[slot]
    }

    /// Current-frame records, in slot order
    pub fn records(&self) -> &[TouchRecord] {
        &self.current[..self.capacity]
    }

    /// Rebuilds the current frame's touch collection (non-invalid records,
    /// slot order)
    pub fn touches(&self) -> TouchCollection {
        TouchCollection::from_records(
            self.records()
                .iter()
                .filter(|record| record.is_valid())
                .copied()
                .collect(),
        )
    }

    /// Number of fingers currently down
    pub fn fingers_down(&self) -> usize {
        self.records()
            .iter()
            .filter(|record| record.state.is_down())
            .count()
    }

    /// Current position of a finger, if it is down
    pub fn position_of(&self, id: FingerId) -> Option<Vec2> {
        if id.is_none() {
            return None;
        }
        self.records()
            .iter()
            .find(|record| record.state.is_down() && record.id == id)
            .map(|record| record.position)
    }
}

impl Default for FingerTracker {
    fn default() -> Self {
        Self::new()
    }
}
