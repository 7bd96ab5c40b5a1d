//! Orbit advancement for the solar system model.
//!
//! One simulation tick per rendered frame, scaled by the global speed multiplier.

use bevy::prelude::*;

use crate::orbit::SolarSystem;
use crate::types::{OrbitSystemSet, SimulationSpeed};

/// Plugin providing orbit advancement and the advance → sync ordering.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationSpeed>()
            .configure_sets(
                Update,
                (OrbitSystemSet::Advance, OrbitSystemSet::Sync).chain(),
            )
            .add_systems(Update, advance_orbits.in_set(OrbitSystemSet::Advance));
    }
}

/// Advance every orbit by one tick.
///
/// The speed multiplier is read once at the start of the tick.
pub fn advance_orbits(mut system: ResMut<SolarSystem>, speed: Res<SimulationSpeed>) {
    system.advance(speed.multiplier());
}
