//! Orbit path rendering using Bevy Gizmos.
//!
//! Planet orbits are circles around the sun. Moon orbits are circles around
//! their planet's current position, so they travel with the planet.

use bevy::prelude::*;

use crate::orbit::{BodyId, SolarSystem};

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>();
    }
}

/// Settings for orbit path rendering. Paths are hidden unless enabled.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Number of segments per circle (higher = smoother).
    pub segments: u32,
    /// Alpha value for orbit path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: false,
            segments: 128,
            alpha: 0.25,
        }
    }
}

/// Draw one circle per planet and moon orbit.
///
/// Reads the model directly so it runs with the synced transforms of the same tick.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    system: Res<SolarSystem>,
) {
    if !settings.visible {
        return;
    }

    let segments = settings.segments.max(16);
    let planet_color = Color::srgba(0.7, 0.7, 0.8, settings.alpha);
    let moon_color = Color::srgba(0.5, 0.5, 0.5, settings.alpha);

    for (id, body) in system.iter_bodies() {
        let Some(center) = id.parent().and_then(|parent| system.world_position(parent)) else {
            continue;
        };
        let color = match id {
            BodyId::Moon { .. } => moon_color,
            _ => planet_color,
        };

        // Gizmo circles lie in the XY plane; rotate onto the XZ orbital plane
        let isometry = Isometry3d::new(
            center.as_vec3(),
            Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        );
        gizmos
            .circle(isometry, body.distance as f32, color)
            .resolution(segments);
    }
}
