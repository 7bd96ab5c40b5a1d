//! Hierarchical orbital animation model.
//!
//! Every orbiting body carries a phase that advances by `base_speed * multiplier`
//! each tick. Positions are derived lazily from the phase:
//! - planets sit on a circle of radius `distance` around the sun (origin),
//! - moons sit on a circle of radius `distance` around their planet's *current* position.
//!
//! All orbits lie in the horizontal (XZ) plane.

pub mod config;

#[cfg(test)]
mod proptest_orbit;

pub use config::{BodyConfig, OrbitConfigError, SunConfig, SystemConfig, solar_system};

use bevy::math::DVec3;
use bevy::prelude::*;
use std::f64::consts::TAU;

/// Stable identity of a body in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    /// Planet by index in the configuration table.
    Planet(usize),
    /// Moon by planet index and moon index within that planet.
    Moon { planet: usize, moon: usize },
}

impl BodyId {
    /// Parent body. The sun has none.
    pub fn parent(&self) -> Option<BodyId> {
        match *self {
            BodyId::Sun => None,
            BodyId::Planet(_) => Some(BodyId::Sun),
            BodyId::Moon { planet, .. } => Some(BodyId::Planet(planet)),
        }
    }
}

/// Accumulated orbital angle.
///
/// Stored as whole turns plus a phase in `[0, 2π)` so positions stay precise
/// no matter how long the simulation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitalPhase {
    turns: i64,
    phase: f64,
}

impl OrbitalPhase {
    pub fn from_angle(angle: f64) -> Self {
        let mut phase = Self::default();
        phase.advance(angle);
        phase
    }

    /// Add `delta` radians (may be negative).
    pub fn advance(&mut self, delta: f64) {
        let next = self.phase + delta;
        let wraps = (next / TAU).floor();
        self.turns += wraps as i64;
        self.phase = next - wraps * TAU;

        // Rounding can land exactly on either boundary.
        if self.phase >= TAU {
            self.phase -= TAU;
            self.turns += 1;
        } else if self.phase < 0.0 {
            self.phase += TAU;
            self.turns -= 1;
        }
    }

    /// Total unwrapped angle in radians.
    pub fn angle(&self) -> f64 {
        self.turns as f64 * TAU + self.phase
    }

    /// Angle wrapped to `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Number of completed revolutions (negative when running backwards).
    pub fn turns(&self) -> i64 {
        self.turns
    }
}

/// A planet or moon: configuration plus current orbital phase.
#[derive(Clone, Debug)]
pub struct OrbitalBody {
    pub name: &'static str,
    /// Render scale.
    pub radius: f64,
    /// Orbital radius around the parent's center.
    pub distance: f64,
    /// Angular increment per tick at speed multiplier 1.
    pub base_speed: f64,
    pub texture: Option<&'static str>,
    phase: OrbitalPhase,
    moons: Vec<OrbitalBody>,
}

impl OrbitalBody {
    fn from_config(config: &BodyConfig) -> Self {
        Self {
            name: config.name,
            radius: config.radius,
            distance: config.distance,
            base_speed: config.base_speed,
            texture: config.texture,
            phase: OrbitalPhase::from_angle(config.initial_angle),
            moons: config.moons.iter().map(OrbitalBody::from_config).collect(),
        }
    }

    /// Current unwrapped orbital angle in radians.
    pub fn angle(&self) -> f64 {
        self.phase.angle()
    }

    pub fn phase(&self) -> &OrbitalPhase {
        &self.phase
    }

    pub fn moons(&self) -> &[OrbitalBody] {
        &self.moons
    }

    /// Offset from the parent's center: `(sin θ·d, 0, cos θ·d)`.
    pub fn local_position(&self) -> DVec3 {
        let (sin, cos) = self.phase.phase().sin_cos();
        DVec3::new(sin * self.distance, 0.0, cos * self.distance)
    }

    fn advance(&mut self, speed_multiplier: f64) {
        self.phase.advance(self.base_speed * speed_multiplier);
        for moon in &mut self.moons {
            moon.advance(speed_multiplier);
        }
    }
}

/// The central, non-orbiting body.
#[derive(Clone, Debug)]
pub struct Sun {
    pub name: &'static str,
    pub radius: f64,
    pub texture: Option<&'static str>,
}

/// Simulation state: the sun, its planets and their moons.
#[derive(Resource, Clone, Debug)]
pub struct SolarSystem {
    sun: Sun,
    planets: Vec<OrbitalBody>,
    ticks: u64,
}

impl SolarSystem {
    /// Build the body hierarchy from a configuration table.
    pub fn from_config(config: &SystemConfig) -> Result<Self, OrbitConfigError> {
        config.validate()?;

        Ok(Self {
            sun: Sun {
                name: config.sun.name,
                radius: config.sun.radius,
                texture: config.sun.texture,
            },
            planets: config.planets.iter().map(OrbitalBody::from_config).collect(),
            ticks: 0,
        })
    }

    /// Advance every orbit by one tick.
    ///
    /// A zero multiplier freezes the system; a negative one runs it backwards.
    pub fn advance(&mut self, speed_multiplier: f64) {
        for planet in &mut self.planets {
            planet.advance(speed_multiplier);
        }
        self.ticks += 1;
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn planets(&self) -> &[OrbitalBody] {
        &self.planets
    }

    /// Number of `advance` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Look up an orbiting body. Returns `None` for the sun and unknown ids.
    pub fn body(&self, id: BodyId) -> Option<&OrbitalBody> {
        match id {
            BodyId::Sun => None,
            BodyId::Planet(planet) => self.planets.get(planet),
            BodyId::Moon { planet, moon } => self.planets.get(planet)?.moons.get(moon),
        }
    }

    /// All orbiting bodies, each planet followed by its moons.
    pub fn iter_bodies(&self) -> impl Iterator<Item = (BodyId, &OrbitalBody)> {
        self.planets
            .iter()
            .enumerate()
            .flat_map(|(planet_index, planet)| {
                std::iter::once((BodyId::Planet(planet_index), planet)).chain(
                    planet.moons.iter().enumerate().map(move |(moon_index, moon)| {
                        (
                            BodyId::Moon {
                                planet: planet_index,
                                moon: moon_index,
                            },
                            moon,
                        )
                    }),
                )
            })
    }

    /// Offset of `id` from its parent's center. The sun sits at the origin.
    pub fn local_position(&self, id: BodyId) -> Option<DVec3> {
        match id {
            BodyId::Sun => Some(DVec3::ZERO),
            _ => self.body(id).map(OrbitalBody::local_position),
        }
    }

    /// Position of `id` relative to the sun, composed through the hierarchy.
    pub fn world_position(&self, id: BodyId) -> Option<DVec3> {
        let local = self.local_position(id)?;
        match id.parent() {
            Some(parent) => Some(self.world_position(parent)? + local),
            None => Some(local),
        }
    }
}
