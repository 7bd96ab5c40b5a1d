//! Common test utilities for integration tests.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use orrery::orbit::{BodyConfig, SolarSystem, SunConfig, SystemConfig};
use orrery::render::{BodyNodes, spawn_orbital_nodes, sync_orbital_nodes};
use orrery::time::TimePlugin;
use orrery::types::OrbitSystemSet;

/// Sun with a single planet (distance 10) carrying a single moon (distance 3).
pub fn one_planet_one_moon(planet_speed: f64, moon_speed: f64) -> SystemConfig {
    SystemConfig {
        sun: SunConfig {
            name: "Sun",
            radius: 5.0,
            texture: None,
        },
        planets: vec![
            BodyConfig::new("Planet", 2.0, 10.0, planet_speed)
                .with_moons(vec![BodyConfig::new("Moon", 0.5, 3.0, moon_speed)]),
        ],
    }
}

/// Headless app running the advance → sync pipeline with transform propagation.
///
/// Orbital nodes are spawned without meshes on the first update.
pub fn headless_app(config: &SystemConfig) -> App {
    let system = SolarSystem::from_config(config).expect("test config is valid");

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin, TimePlugin))
        .insert_resource(system)
        .add_systems(Startup, spawn_bare_nodes)
        .add_systems(Update, sync_orbital_nodes.in_set(OrbitSystemSet::Sync));
    app
}

fn spawn_bare_nodes(mut commands: Commands, system: Res<SolarSystem>) {
    let nodes = spawn_orbital_nodes(&mut commands, &system, |_, _, _| {});
    commands.insert_resource(nodes);
}

/// World-space translation of a body's orbital node.
pub fn node_world_position(app: &App, id: orrery::orbit::BodyId) -> Vec3 {
    let entity = app
        .world()
        .resource::<BodyNodes>()
        .get(id)
        .expect("body has a node");
    app.world()
        .get::<GlobalTransform>(entity)
        .expect("node has a global transform")
        .translation()
}
