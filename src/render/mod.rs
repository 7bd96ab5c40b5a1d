//! Rendering systems for the solar system viewer.
//!
//! This module maps the orbital model onto Bevy's scene graph: body nodes,
//! skybox, lighting and orbit paths.

mod background;
pub mod bodies;
pub mod cubemap;
pub mod orbits;
mod sync;

use bevy::prelude::*;

use self::orbits::{OrbitPathPlugin, draw_orbit_paths};
use crate::types::OrbitSystemSet;

// Re-export for use in other modules
pub use self::background::{BackgroundPlugin, SkyboxFaces};
pub use self::bodies::{
    BodyMesh, BodyNodes, CelestialBodyPlugin, OrbitalNode, PendingTexture, SunBody,
    UNTEXTURED_COLOR, spawn_orbital_nodes,
};
pub use self::orbits::OrbitPathSettings;
pub use self::sync::sync_orbital_nodes;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CelestialBodyPlugin, BackgroundPlugin, OrbitPathPlugin))
            // 1. sync_orbital_nodes - copies model offsets onto node transforms
            // 2. draw_orbit_paths - circles around the synced parent positions
            .add_systems(
                Update,
                (sync_orbital_nodes, draw_orbit_paths)
                    .chain()
                    .in_set(OrbitSystemSet::Sync),
            );
    }
}
