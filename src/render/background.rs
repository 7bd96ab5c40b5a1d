//! Background rendering for the solar system visualization.
//!
//! Provides the cubemap skybox and the sun's point light.

use bevy::asset::LoadState;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::render::cubemap::{assemble_cubemap, face_paths};

/// Skybox brightness in cd/m².
const SKYBOX_BRIGHTNESS: f32 = 1000.0;

/// Luminous power of the sun's point light.
const SUN_LIGHT_INTENSITY: f32 = 5_000_000.0;

/// Reach of the sun's point light; covers the outermost orbit.
const SUN_LIGHT_RANGE: f32 = 150.0;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_skybox_faces, spawn_lighting))
            .add_systems(Update, assemble_skybox);
    }
}

/// Cubemap faces being loaded for the skybox.
#[derive(Resource)]
pub struct SkyboxFaces {
    pub faces: [Handle<Image>; 6],
    /// Set once the skybox is attached or given up on.
    pub done: bool,
}

fn load_skybox_faces(mut commands: Commands, asset_server: Res<AssetServer>) {
    let faces = face_paths().map(|path| asset_server.load::<Image>(path));
    commands.insert_resource(SkyboxFaces { faces, done: false });
}

/// Stitch the six faces into a cubemap and attach it to the main camera once loaded.
///
/// A missing or malformed face leaves the plain clear-color background.
fn assemble_skybox(
    mut commands: Commands,
    faces: Option<ResMut<SkyboxFaces>>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    camera_query: Query<Entity, With<MainCamera>>,
) {
    let Some(mut faces) = faces else {
        return;
    };
    if faces.done {
        return;
    }

    for handle in &faces.faces {
        match asset_server.load_state(handle.id()) {
            LoadState::Loaded => {}
            LoadState::Failed(err) => {
                warn!("Skybox face failed to load ({err}); keeping plain background");
                faces.done = true;
                return;
            }
            _ => return,
        }
    }

    let Ok(camera) = camera_query.single() else {
        return;
    };

    let [px, nx, py, ny, pz, nz] = &faces.faces;
    let loaded = [px, nx, py, ny, pz, nz].map(|handle| images.get(handle));
    let [Some(px), Some(nx), Some(py), Some(ny), Some(pz), Some(nz)] = loaded else {
        return;
    };

    match assemble_cubemap([px, nx, py, ny, pz, nz]) {
        Ok(cubemap) => {
            let size = cubemap.texture_descriptor.size.width;
            let image = images.add(cubemap);
            commands.entity(camera).insert(Skybox {
                image,
                brightness: SKYBOX_BRIGHTNESS,
                ..default()
            });
            info!("Skybox assembled ({size}x{size} per face)");
        }
        Err(err) => warn!("Skybox not assembled: {err}"),
    }
    faces.done = true;
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Point light at the sun's center
    commands.spawn((
        Name::new("Sunlight"),
        PointLight {
            intensity: SUN_LIGHT_INTENSITY,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    info!("Scene lighting initialized");
}
