//! Orrery - animated solar system viewer
//!
//! A desktop application showing a sun, its planets and their moons on
//! circular orbits, with orbit camera navigation and a speed control.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::orbit::{SolarSystem, solar_system};
use orrery::render::RenderPlugin;
use orrery::time::TimePlugin;
use orrery::ui::UiPlugin;
use orrery::viewport::ViewportPlugin;

fn main() -> AppExit {
    // Validate the body table before any window or scene exists
    let system = match SolarSystem::from_config(&solar_system()) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("invalid solar system configuration: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Insert resources before plugins that depend on them
        .insert_resource(system)
        // Add simulation plugins
        .add_plugins((
            CameraPlugin,
            TimePlugin,
            RenderPlugin,
            UiPlugin,
            ViewportPlugin,
        ))
        .run()
}
