//! Touch panel facade

use crate::config::GestureSettings;

use super::clock::{Clock, MonotonicClock};
use super::queue::{GestureQueue, TouchError};
use super::recognizer::{GestureRecognizer, GestureState};
use super::record::{TouchCollection, TouchState};
use super::sample::{GestureMask, GestureSample};
use super::source::{TouchCapabilities, TouchSource};
use super::tracker::FingerTracker;

/// Orchestrates finger tracking, gesture recognition, and the gesture queue
///
/// Owns the platform source and the clock; everything runs synchronously
/// inside the consumer's per-frame [`update`](TouchPanel::update) call.
/// There is no background thread and no locking - one execution path per
/// frame, single producer, single consumer.
pub struct TouchPanel<S: TouchSource, C: Clock = MonotonicClock> {
    source: S,
    clock: C,
    tracker: FingerTracker,
    recognizer: GestureRecognizer,
    queue: GestureQueue,
}

impl<S: TouchSource> TouchPanel<S, MonotonicClock> {
    /// Creates a panel over the given source with default settings and the
    /// production clock
    pub fn new(source: S) -> Self {
        Self::with_clock(source, MonotonicClock::new())
    }
}

impl<S: TouchSource, C: Clock> TouchPanel<S, C> {
    /// Creates a panel with an injected clock
    pub fn with_clock(source: S, clock: C) -> Self {
        Self::with_settings(source, clock, GestureSettings::default())
    }

    /// Creates a panel with an injected clock and explicit settings
    pub fn with_settings(source: S, clock: C, settings: GestureSettings) -> Self {
        Self {
            tracker: FingerTracker::with_capacity(settings.slot_capacity),
            recognizer: GestureRecognizer::new(settings),
            queue: GestureQueue::new(),
            source,
            clock,
        }
    }

    /// Advances the panel by one frame
    ///
    /// Refreshes the slot table from the platform source, forwards this
    /// frame's transitions to the recognizer in slot order, then ticks the
    /// recognizer. Call exactly once per frame, before any
    /// [`touches`](TouchPanel::touches) query for that frame.
    pub fn update(&mut self) {
        let now = self.clock.now();
        self.tracker.update(&mut self.source);

        for slot in 0..self.tracker.capacity() {
            let record = *self.tracker.record(slot);
            match record.state {
                TouchState::Pressed => {
                    self.recognizer
                        .on_press(record.id, record.position, now, &mut self.queue);
                }
                TouchState::Moved => {
                    self.recognizer.on_move(
                        record.id,
                        record.position,
                        record.delta(),
                        now,
                        &mut self.queue,
                    );
                }
                TouchState::Released => {
                    // Post-refresh count: emission is gated on zero fingers
                    // remaining down.
                    let remaining = self.tracker.fingers_down();
                    self.recognizer.on_release(
                        record.id,
                        record.position,
                        remaining,
                        now,
                        &mut self.queue,
                    );
                }
                TouchState::Invalid => {}
            }
        }

        let finger_position = self.tracker.position_of(self.recognizer.active_finger());
        self.recognizer.on_tick(finger_position, now, &mut self.queue);
    }

    /// The current frame's touch collection
    pub fn touches(&self) -> TouchCollection {
        self.tracker.touches()
    }

    /// Returns true if a recognized gesture is waiting to be read
    pub fn is_gesture_available(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of gestures waiting to be read
    pub fn pending_gestures(&self) -> usize {
        self.queue.len()
    }

    /// Dequeues the oldest pending gesture
    ///
    /// Fails with [`TouchError::EmptyQueue`] when none is pending; check
    /// [`is_gesture_available`](TouchPanel::is_gesture_available) first.
    pub fn read_gesture(&mut self) -> Result<GestureSample, TouchError> {
        self.queue.pop()
    }

    /// The mask of gestures the recognizer may emit
    pub fn enabled_gestures(&self) -> GestureMask {
        self.recognizer.enabled_gestures()
    }

    /// Replaces the enabled-gesture mask; takes effect on the next event
    pub fn set_enabled_gestures(&mut self, mask: GestureMask) {
        self.recognizer.set_enabled_gestures(mask);
    }

    /// Touch device capabilities, delegated to the platform source
    pub fn capabilities(&self) -> TouchCapabilities {
        self.source.capabilities()
    }

    /// Current recognizer state (debug introspection)
    pub fn gesture_state(&self) -> GestureState {
        self.recognizer.state()
    }

    /// Mutable access to the platform source, for feeding it events
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The platform source
    pub fn source(&self) -> &S {
        &self.source
    }
}
