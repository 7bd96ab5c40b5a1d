//! Shared simulation types and constants.

use bevy::prelude::*;

/// System set for ordering the per-frame orbit pipeline.
///
/// Advance must run before sync so that render transforms reflect the
/// current tick before the frame is drawn.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrbitSystemSet {
    /// Orbital phase advancement (runs first)
    Advance,
    /// Copy of model positions onto scene transforms (runs after advance)
    Sync,
}

/// Lowest speed multiplier the control allows.
pub const MIN_SPEED: f64 = 0.0;

/// Highest speed multiplier the control allows.
pub const MAX_SPEED: f64 = 5.0;

/// Increment of the speed slider.
pub const SPEED_STEP: f64 = 0.1;

/// Speed multiplier at startup.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Global speed multiplier applied to every orbit.
///
/// Written by the control widget, read once per tick
/// by the orbit advance system.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationSpeed {
    multiplier: f64,
    /// Allowed range for user-controlled changes.
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_SPEED,
            min: MIN_SPEED,
            max: MAX_SPEED,
            step: SPEED_STEP,
        }
    }
}

impl SimulationSpeed {
    /// Current multiplier.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Set the multiplier, clamped to `[min, max]`. Non-finite values are ignored.
    pub fn set(&mut self, value: f64) {
        if value.is_finite() {
            self.multiplier = value.clamp(self.min, self.max);
        }
    }

    /// Whether the simulation is currently frozen.
    pub fn is_frozen(&self) -> bool {
        self.multiplier == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed() {
        let speed = SimulationSpeed::default();
        assert_eq!(speed.multiplier(), 1.0);
        assert_eq!((speed.min, speed.max), (0.0, 5.0));
        assert!(!speed.is_frozen());
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut speed = SimulationSpeed::default();
        speed.set(12.0);
        assert_eq!(speed.multiplier(), 5.0);
        speed.set(-3.0);
        assert_eq!(speed.multiplier(), 0.0);
        assert!(speed.is_frozen());
    }

    #[test]
    fn test_set_ignores_nan() {
        let mut speed = SimulationSpeed::default();
        speed.set(2.5);
        speed.set(f64::NAN);
        assert_eq!(speed.multiplier(), 2.5);
    }

    #[test]
    fn test_slider_values_kept_exactly() {
        // The slider is the only writer; its values are stored as given
        let mut speed = SimulationSpeed::default();
        let steps = ((speed.max - speed.min) / speed.step).round() as u32;
        assert_eq!(steps, 50);
        for i in 0..=steps {
            let value = speed.min + i as f64 * speed.step;
            speed.set(value);
            assert_eq!(speed.multiplier(), value.min(speed.max));
        }
    }

    #[test]
    fn test_negative_range_allowed_when_configured() {
        let mut speed = SimulationSpeed {
            min: -5.0,
            ..default()
        };
        speed.set(-2.0);
        assert_eq!(speed.multiplier(), -2.0);
    }
}
