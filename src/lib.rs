//! Touchdeck
//!
//! Poll-driven touch gesture recognition for game loops. Converts raw
//! per-finger touch input into semantic gestures (tap, double tap, hold,
//! drags, flick) consumed once per frame.

/// Gesture tuning parameters and profile-based loading
pub mod config;

/// Touch input - finger slot tracking, gesture recognition, and the panel facade
pub mod touch;
