//! Gesture tuning configuration
//!
//! Supports multiple profiles (debug, release) with different thresholds.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::touch::MAX_TOUCH_SLOTS;

/// Gesture recognition tuning parameters
///
/// Distances are in the same units as incoming touch coordinates; times are
/// in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureSettings {
    /// Distance a finger must travel from the press point before movement
    /// counts as a drag; doubles as the flick minimum distance and the
    /// double-tap position tolerance
    pub move_threshold: f32,
    /// A second press within this window of the prior tap's release counts
    /// as a double tap
    pub double_tap_window_ms: u64,
    /// A press must release within this window to count as a tap
    pub tap_resolve_window_ms: u64,
    /// Time a stationary press must last before a hold fires
    pub hold_duration_ms: u64,
    /// Minimum smoothed speed (units/second) for a release to qualify as a
    /// flick
    pub flick_min_speed: f32,
    /// Exponential moving average factor for velocity smoothing
    pub velocity_smoothing: f32,
    /// Seconds added to the measured tick interval to avoid division by
    /// zero on duplicate-timestamp ticks
    pub velocity_epsilon: f32,
    /// Number of finger slots the tracker maintains (at most 8)
    pub slot_capacity: usize,
}

impl GestureSettings {
    /// Double-tap window as a duration
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }

    /// Tap resolve window as a duration
    pub fn tap_resolve_window(&self) -> Duration {
        Duration::from_millis(self.tap_resolve_window_ms)
    }

    /// Hold duration as a duration
    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_duration_ms)
    }

    /// Loads settings for the specified profile
    ///
    /// Profiles are loaded in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix TOUCH_ (e.g.
    ///    TOUCH_MOVE_THRESHOLD=40)
    ///
    /// Config files are searched for next to the executable first, then in
    /// the current directory. Missing files are fine; defaults fill the
    /// gaps.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config_dir = Self::find_config_dir();

        let mut builder = Config::builder()
            .set_default("move_threshold", defaults.move_threshold as f64)?
            .set_default("double_tap_window_ms", defaults.double_tap_window_ms)?
            .set_default("tap_resolve_window_ms", defaults.tap_resolve_window_ms)?
            .set_default("hold_duration_ms", defaults.hold_duration_ms)?
            .set_default("flick_min_speed", defaults.flick_min_speed as f64)?
            .set_default("velocity_smoothing", defaults.velocity_smoothing as f64)?
            .set_default("velocity_epsilon", defaults.velocity_epsilon as f64)?
            .set_default("slot_capacity", defaults.slot_capacity as u64)?;

        if let Some(ref dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("TOUCH")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<std::path::PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = std::path::PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads settings using the TOUCH_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("TOUCH_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            move_threshold: 35.0,
            double_tap_window_ms: 300,
            tap_resolve_window_ms: 1000,
            hold_duration_ms: 1000,
            flick_min_speed: 100.0,
            velocity_smoothing: 0.45,
            velocity_epsilon: 0.001,
            slot_capacity: MAX_TOUCH_SLOTS,
        }
    }
}
