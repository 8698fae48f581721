//! Single-active-finger gesture state machine

use std::time::Duration;

use glam::Vec2;
use tracing::{debug, trace};

use crate::config::GestureSettings;

use super::queue::GestureQueue;
use super::record::FingerId;
use super::sample::{GestureKind, GestureMask, GestureSample};

/// Recognizer state carried across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    None,
    /// Finger down, not yet past the drag threshold
    Holding,
    /// Hold already fired; waiting for release or drag
    Held,
    /// Finger released after a short press; double-tap window open
    JustTapped,
    /// Drag locked to the horizontal axis
    DraggingH,
    /// Drag locked to the vertical axis
    DraggingV,
    /// Drag with no axis lock
    DraggingFree,
    /// Reserved for two-finger support, never entered
    Pinching,
}

impl GestureState {
    /// Returns true while any drag is in progress
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::DraggingH | Self::DraggingV | Self::DraggingFree)
    }
}

/// Single-active-finger gesture recognizer
///
/// Consumes Pressed/Moved/Released transitions plus a per-frame tick and
/// appends recognized samples to a [`GestureQueue`]. Only one finger drives
/// the machine at a time; a second finger touching while one is active is
/// ignored for gesture purposes.
///
/// Each recognizer is an independent, constructible context, so tests or
/// split-screen consumers can run several without cross-contamination.
pub struct GestureRecognizer {
    settings: GestureSettings,
    enabled: GestureMask,
    state: GestureState,
    /// Finger currently driving the machine; `NONE` when unowned
    active_finger: FingerId,
    press_position: Vec2,
    /// Time of the last press or release
    event_timestamp: Duration,
    /// Set when a double tap fires; suppresses the tap check at the
    /// following release
    just_double_tapped: bool,
    /// Exponentially smoothed finger velocity, units per second
    velocity: Vec2,
    last_update_position: Vec2,
    update_timestamp: Option<Duration>,
}

impl GestureRecognizer {
    /// Creates a recognizer with an empty enabled-gesture mask
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            enabled: GestureMask::empty(),
            state: GestureState::None,
            active_finger: FingerId::NONE,
            press_position: Vec2::ZERO,
            event_timestamp: Duration::ZERO,
            just_double_tapped: false,
            velocity: Vec2::ZERO,
            last_update_position: Vec2::ZERO,
            update_timestamp: None,
        }
    }

    /// The mask of gestures this recognizer may emit
    pub fn enabled_gestures(&self) -> GestureMask {
        self.enabled
    }

    /// Replaces the enabled-gesture mask
    ///
    /// Takes effect on the next event, not retroactively.
    pub fn set_enabled_gestures(&mut self, mask: GestureMask) {
        self.enabled = mask;
    }

    /// Current machine state
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Finger currently driving the machine
    pub fn active_finger(&self) -> FingerId {
        self.active_finger
    }

    /// Current smoothed velocity estimate, units per second
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn is_enabled(&self, kind: GestureKind) -> bool {
        self.enabled.contains(kind.mask())
    }

    /// A finger made contact
    ///
    /// The finger becomes active if no finger owns the machine; otherwise
    /// the press is ignored. Checks the double-tap window against the prior
    /// tap before transitioning to `Holding`.
    pub fn on_press(
        &mut self,
        finger: FingerId,
        position: Vec2,
        now: Duration,
        queue: &mut GestureQueue,
    ) {
        if self.active_finger.is_some() && self.active_finger != finger {
            return;
        }
        self.active_finger = finger;

        // Double-tap lookback: press_position still holds the prior tap's
        // press point at this moment.
        if self.state == GestureState::JustTapped
            && self.is_enabled(GestureKind::DoubleTap)
            && now.saturating_sub(self.event_timestamp) <= self.settings.double_tap_window()
            && position.distance(self.press_position) <= self.settings.move_threshold
        {
            debug!(finger = %finger, "double tap recognized");
            queue.push(GestureSample::new(
                GestureKind::DoubleTap,
                now,
                position,
                Vec2::ZERO,
            ));
            self.just_double_tapped = true;
        }

        self.state = GestureState::Holding;
        self.press_position = position;
        self.last_update_position = position;
        self.update_timestamp = None;
        self.event_timestamp = now;
    }

    /// The active finger moved
    ///
    /// Adopts the finger if no finger is active (recovers from a missed
    /// press); moves from any other finger are ignored. Drag-axis selection
    /// happens once, on the move that crosses the drag threshold; afterwards
    /// each move in a drag state emits one sample with the orthogonal axis
    /// zeroed for axis-locked drags.
    pub fn on_move(
        &mut self,
        finger: FingerId,
        position: Vec2,
        delta: Vec2,
        now: Duration,
        queue: &mut GestureQueue,
    ) {
        if self.active_finger.is_none() {
            self.active_finger = finger;
        } else if self.active_finger != finger {
            return;
        }

        if matches!(self.state, GestureState::Holding | GestureState::Held)
            && position.distance(self.press_position) > self.settings.move_threshold
        {
            self.state = if self.is_enabled(GestureKind::HorizontalDrag)
                && delta.x.abs() > delta.y.abs()
            {
                GestureState::DraggingH
            } else if self.is_enabled(GestureKind::VerticalDrag) && delta.y.abs() > delta.x.abs() {
                GestureState::DraggingV
            } else if self.is_enabled(GestureKind::FreeDrag) {
                GestureState::DraggingFree
            } else {
                // Past the threshold but no applicable drag gesture enabled
                GestureState::None
            };
            debug!(finger = %finger, state = ?self.state, "drag classified");
        }

        let drag = match self.state {
            GestureState::DraggingH if self.is_enabled(GestureKind::HorizontalDrag) => {
                Some((GestureKind::HorizontalDrag, Vec2::new(delta.x, 0.0)))
            }
            GestureState::DraggingV if self.is_enabled(GestureKind::VerticalDrag) => {
                Some((GestureKind::VerticalDrag, Vec2::new(0.0, delta.y)))
            }
            GestureState::DraggingFree if self.is_enabled(GestureKind::FreeDrag) => {
                Some((GestureKind::FreeDrag, delta))
            }
            _ => None,
        };
        if let Some((kind, delta)) = drag {
            queue.push(GestureSample::new(kind, now, position, delta));
        }
    }

    /// A finger lifted
    ///
    /// Releasing the active finger clears machine ownership. Gesture
    /// emission only proceeds once zero fingers remain down (single-finger
    /// model): tap resolution, drag completion, flick qualification, then
    /// the timestamp/velocity reset.
    pub fn on_release(
        &mut self,
        finger: FingerId,
        position: Vec2,
        fingers_down: usize,
        now: Duration,
        queue: &mut GestureQueue,
    ) {
        if self.active_finger == finger {
            self.active_finger = FingerId::NONE;
        }
        if fingers_down > 0 {
            return;
        }

        if self.state == GestureState::Holding
            && (self.is_enabled(GestureKind::Tap) || self.is_enabled(GestureKind::DoubleTap))
            && now.saturating_sub(self.event_timestamp) < self.settings.tap_resolve_window()
            && !self.just_double_tapped
        {
            if self.is_enabled(GestureKind::Tap) {
                debug!(finger = %finger, "tap recognized");
                queue.push(GestureSample::new(
                    GestureKind::Tap,
                    now,
                    position,
                    Vec2::ZERO,
                ));
            }
            // Entered even when only DoubleTap is enabled: the double-tap
            // lookback needs it.
            self.state = GestureState::JustTapped;
        }
        self.just_double_tapped = false;

        if self.is_enabled(GestureKind::DragComplete) && self.state.is_dragging() {
            debug!(finger = %finger, "drag complete");
            queue.push(GestureSample::new(
                GestureKind::DragComplete,
                now,
                Vec2::ZERO,
                Vec2::ZERO,
            ));
        }

        if self.state != GestureState::JustTapped {
            self.state = GestureState::None;
        }

        if self.is_enabled(GestureKind::Flick)
            && position.distance(self.press_position) > self.settings.move_threshold
            && self.velocity.length() >= self.settings.flick_min_speed
        {
            debug!(finger = %finger, velocity = ?self.velocity, "flick recognized");
            queue.push(GestureSample::new(
                GestureKind::Flick,
                now,
                Vec2::ZERO,
                self.velocity,
            ));
        }

        self.event_timestamp = now;
        self.velocity = Vec2::ZERO;
        self.last_update_position = Vec2::ZERO;
        self.update_timestamp = None;
    }

    /// Per-frame tick
    ///
    /// `finger_position` is the active finger's current position, if one is
    /// down. Updates the smoothed velocity estimate between consecutive
    /// ticks, then runs the one-shot hold check.
    pub fn on_tick(
        &mut self,
        finger_position: Option<Vec2>,
        now: Duration,
        queue: &mut GestureQueue,
    ) {
        if let Some(position) = finger_position {
            if let Some(previous) = self.update_timestamp {
                // Epsilon keeps duplicate-timestamp ticks from dividing by
                // zero; the EMA damps sensor jitter.
                let dt = now.saturating_sub(previous).as_secs_f32()
                    + self.settings.velocity_epsilon;
                let instantaneous = (position - self.last_update_position) / dt;
                self.velocity += (instantaneous - self.velocity) * self.settings.velocity_smoothing;
                trace!(velocity = ?self.velocity, "velocity updated");
            }
            self.last_update_position = position;
            self.update_timestamp = Some(now);
        }

        if self.state == GestureState::Holding
            && self.is_enabled(GestureKind::Hold)
            && now.saturating_sub(self.event_timestamp) >= self.settings.hold_duration()
        {
            let position = finger_position.unwrap_or(self.press_position);
            debug!(finger = %self.active_finger, "hold recognized");
            queue.push(GestureSample::new(
                GestureKind::Hold,
                now,
                position,
                Vec2::ZERO,
            ));
            // Held blocks the check from re-firing every subsequent tick
            self.state = GestureState::Held;
        }
    }
}
