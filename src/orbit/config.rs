//! Static body table for the solar system model.
//!
//! Render scales and orbital distances are in scene units; base speeds are
//! radians per simulation tick at a speed multiplier of 1.

/// Texture used by every moon.
pub const MOON_TEXTURE: &str = "planets/moon.jpg";

/// Configuration of the central, non-orbiting sun.
#[derive(Clone, Debug, PartialEq)]
pub struct SunConfig {
    pub name: &'static str,
    /// Render scale of the sun sphere.
    pub radius: f64,
    pub texture: Option<&'static str>,
}

/// Configuration of an orbiting body (planet or moon).
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig {
    pub name: &'static str,
    /// Render scale of the body sphere.
    pub radius: f64,
    /// Orbital radius around the parent's center.
    pub distance: f64,
    /// Angular increment per tick at speed multiplier 1.
    pub base_speed: f64,
    /// Starting orbital phase in radians.
    pub initial_angle: f64,
    pub texture: Option<&'static str>,
    /// Moons of this body. Only planets may have moons.
    pub moons: Vec<BodyConfig>,
}

impl BodyConfig {
    /// Create a body config with no texture, no moons and a zero starting phase.
    pub fn new(name: &'static str, radius: f64, distance: f64, base_speed: f64) -> Self {
        Self {
            name,
            radius,
            distance,
            base_speed,
            initial_angle: 0.0,
            texture: None,
            moons: Vec::new(),
        }
    }

    pub fn with_texture(mut self, texture: &'static str) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_moons(mut self, moons: Vec<BodyConfig>) -> Self {
        self.moons = moons;
        self
    }

    pub fn with_initial_angle(mut self, angle: f64) -> Self {
        self.initial_angle = angle;
        self
    }
}

/// Full configuration table: one sun and its planets.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemConfig {
    pub sun: SunConfig,
    pub planets: Vec<BodyConfig>,
}

/// Errors raised while validating a [`SystemConfig`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitConfigError {
    #[error("sun radius must be positive (got {0})")]
    NonPositiveSunRadius(f64),

    #[error("{body}: radius must be positive (got {value})")]
    NonPositiveRadius { body: String, value: f64 },

    #[error("{body}: orbital distance must be positive (got {value})")]
    NonPositiveDistance { body: String, value: f64 },

    #[error("{body}: {field} must be finite (got {value})")]
    NonFinite {
        body: String,
        field: &'static str,
        value: f64,
    },

    #[error("{body}: moons cannot carry moons of their own")]
    NestedMoons { body: String },
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl BodyConfig {
    /// Check this body's own parameters (not its moons).
    pub(crate) fn validate_self(&self) -> Result<(), OrbitConfigError> {
        if !is_positive(self.radius) {
            return Err(OrbitConfigError::NonPositiveRadius {
                body: self.name.to_string(),
                value: self.radius,
            });
        }
        if !is_positive(self.distance) {
            return Err(OrbitConfigError::NonPositiveDistance {
                body: self.name.to_string(),
                value: self.distance,
            });
        }
        for (field, value) in [
            ("base speed", self.base_speed),
            ("initial angle", self.initial_angle),
        ] {
            if !value.is_finite() {
                return Err(OrbitConfigError::NonFinite {
                    body: self.name.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl SystemConfig {
    /// Validate the whole table.
    ///
    /// The hierarchy must stay exactly two levels deep under the sun.
    pub fn validate(&self) -> Result<(), OrbitConfigError> {
        if !is_positive(self.sun.radius) {
            return Err(OrbitConfigError::NonPositiveSunRadius(self.sun.radius));
        }

        for planet in &self.planets {
            planet.validate_self()?;
            for moon in &planet.moons {
                moon.validate_self()?;
                if !moon.moons.is_empty() {
                    return Err(OrbitConfigError::NestedMoons {
                        body: moon.name.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// The default solar system: the sun, four inner planets, the Moon, Phobos and Deimos.
pub fn solar_system() -> SystemConfig {
    SystemConfig {
        sun: SunConfig {
            name: "Sun",
            radius: 5.0,
            texture: Some("planets/sun.jpg"),
        },
        planets: vec![
            BodyConfig::new("Mercury", 0.5, 10.0, 0.01).with_texture("planets/mercury.jpg"),
            BodyConfig::new("Venus", 0.8, 15.0, 0.007).with_texture("planets/venus_surface.jpg"),
            BodyConfig::new("Earth", 1.0, 20.0, 0.005)
                .with_texture("planets/earth_daymap.jpg")
                .with_moons(vec![
                    BodyConfig::new("Moon", 0.3, 3.0, 0.015).with_texture(MOON_TEXTURE),
                ]),
            BodyConfig::new("Mars", 0.7, 25.0, 0.003)
                .with_texture("planets/mars.jpg")
                .with_moons(vec![
                    BodyConfig::new("Phobos", 0.1, 2.0, 0.02).with_texture(MOON_TEXTURE),
                    BodyConfig::new("Deimos", 0.2, 3.0, 0.015).with_texture(MOON_TEXTURE),
                ]),
        ],
    }
}
