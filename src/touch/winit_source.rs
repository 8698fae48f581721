//! Touch input collection from winit events

use glam::Vec2;
use winit::event::{TouchPhase, WindowEvent};

use super::record::FingerId;
use super::source::{SlotReading, TouchCapabilities, TouchSource};
use super::tracker::MAX_TOUCH_SLOTS;

/// Collects raw touch input from winit window events and exposes it as a
/// [`TouchSource`]
///
/// Each platform finger keeps its slot for the duration of its contact;
/// fingers beyond the slot count are silently dropped.
pub struct WinitTouchSource {
    slots: [SlotReading; MAX_TOUCH_SLOTS],
    scale_factor: f32,
}

impl WinitTouchSource {
    /// Creates an empty source
    pub fn new() -> Self {
        Self {
            slots: [SlotReading::empty(); MAX_TOUCH_SLOTS],
            scale_factor: 1.0,
        }
    }

    /// Updates the DPI scale factor applied to incoming positions
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Handles a winit window event
    ///
    /// Only touch events are consumed; everything else is ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        let WindowEvent::Touch(touch) = event else {
            return;
        };

        let id = FingerId(touch.id as i64);
        let position = Vec2::new(
            touch.location.x as f32 / self.scale_factor,
            touch.location.y as f32 / self.scale_factor,
        );

        match touch.phase {
            TouchPhase::Started => self.place(id, position),
            TouchPhase::Moved => self.track(id, position),
            TouchPhase::Ended | TouchPhase::Cancelled => self.lift(id),
        }
    }

    fn slot_of(&mut self, id: FingerId) -> Option<&mut SlotReading> {
        self.slots.iter_mut().find(|slot| slot.finger_id == id)
    }

    fn place(&mut self, id: FingerId, position: Vec2) {
        // Re-use the finger's slot if the platform repeats a Started phase
        if let Some(slot) = self.slot_of(id) {
            slot.position = position;
            return;
        }
        if let Some(slot) = self.slot_of(FingerId::NONE) {
            *slot = SlotReading::finger(id, position);
        }
        // No free slot: capacity cap, drop the finger
    }

    fn track(&mut self, id: FingerId, position: Vec2) {
        if let Some(slot) = self.slot_of(id) {
            slot.position = position;
        } else {
            // Move without a tracked start (listener attached late, or the
            // finger was dropped by the cap and a slot freed up since)
            self.place(id, position);
        }
    }

    fn lift(&mut self, id: FingerId) {
        if let Some(slot) = self.slot_of(id) {
            *slot = SlotReading::empty();
        }
    }
}

impl TouchSource for WinitTouchSource {
    fn fill_slots(&mut self, slots: &mut [SlotReading]) {
        for (out, slot) in slots.iter_mut().zip(self.slots.iter()) {
            *out = *slot;
        }
    }

    fn capabilities(&self) -> TouchCapabilities {
        // winit exposes no device query; report the slot arena's bound
        TouchCapabilities {
            connected: true,
            max_touch_count: MAX_TOUCH_SLOTS,
        }
    }
}

impl Default for WinitTouchSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(source: &mut WinitTouchSource) -> [SlotReading; MAX_TOUCH_SLOTS] {
        let mut slots = [SlotReading::empty(); MAX_TOUCH_SLOTS];
        source.fill_slots(&mut slots);
        slots
    }

    #[test]
    fn place_assigns_first_free_slot() {
        let mut source = WinitTouchSource::new();

        source.place(FingerId(7), Vec2::new(1.0, 2.0));
        source.place(FingerId(9), Vec2::new(3.0, 4.0));

        let slots = readings(&mut source);
        assert_eq!(slots[0].finger_id, FingerId(7));
        assert_eq!(slots[0].position, Vec2::new(1.0, 2.0));
        assert_eq!(slots[1].finger_id, FingerId(9));
        assert!(slots[2].finger_id.is_none());
    }

    #[test]
    fn repeated_place_updates_position_in_place() {
        let mut source = WinitTouchSource::new();

        source.place(FingerId(7), Vec2::new(1.0, 2.0));
        source.place(FingerId(7), Vec2::new(5.0, 6.0));

        let slots = readings(&mut source);
        assert_eq!(slots[0].position, Vec2::new(5.0, 6.0));
        assert!(
            slots[1].finger_id.is_none(),
            "a repeated start must not consume a second slot"
        );
    }

    #[test]
    fn place_beyond_capacity_drops_fingers() {
        let mut source = WinitTouchSource::new();

        for id in 0..MAX_TOUCH_SLOTS as i64 {
            source.place(FingerId(id), Vec2::new(id as f32, 0.0));
        }
        source.place(FingerId(99), Vec2::new(99.0, 0.0));

        let slots = readings(&mut source);
        assert!(
            slots.iter().all(|slot| slot.finger_id != FingerId(99)),
            "the ninth finger is silently dropped"
        );
    }

    #[test]
    fn track_moves_and_adopts_unknown_fingers() {
        let mut source = WinitTouchSource::new();

        source.place(FingerId(1), Vec2::new(0.0, 0.0));
        source.track(FingerId(1), Vec2::new(10.0, 20.0));

        let slots = readings(&mut source);
        assert_eq!(slots[0].position, Vec2::new(10.0, 20.0));

        // A move for a finger without a tracked start claims a free slot
        source.track(FingerId(2), Vec2::new(30.0, 40.0));
        let slots = readings(&mut source);
        assert_eq!(slots[1].finger_id, FingerId(2));
        assert_eq!(slots[1].position, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn lift_frees_the_slot_for_reuse() {
        let mut source = WinitTouchSource::new();

        source.place(FingerId(1), Vec2::new(0.0, 0.0));
        source.place(FingerId(2), Vec2::new(1.0, 1.0));
        source.lift(FingerId(1));

        let slots = readings(&mut source);
        assert!(slots[0].finger_id.is_none());
        assert_eq!(slots[1].finger_id, FingerId(2));

        source.place(FingerId(3), Vec2::new(2.0, 2.0));
        let slots = readings(&mut source);
        assert_eq!(
            slots[0].finger_id,
            FingerId(3),
            "a new finger takes the freed slot"
        );
    }

    #[test]
    fn lift_of_unknown_finger_is_ignored() {
        let mut source = WinitTouchSource::new();

        source.place(FingerId(1), Vec2::new(0.0, 0.0));
        source.lift(FingerId(42));

        let slots = readings(&mut source);
        assert_eq!(slots[0].finger_id, FingerId(1));
    }
}
