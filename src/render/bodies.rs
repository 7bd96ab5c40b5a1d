//! Scene nodes for the sun, planets and moons.
//!
//! Each orbiting body gets an *orbital node*: an unscaled entity whose local
//! translation is the body's offset from its parent. The visible sphere is a
//! scaled child of that node. Moon nodes are children of their planet's
//! node, so the scene graph composes moon positions onto the moving planet
//! without inheriting the planet's render scale.

use bevy::asset::LoadState;
use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::orbit::{BodyId, OrbitalBody, SolarSystem};

/// Latitude/longitude subdivisions of the shared sphere mesh.
const SPHERE_SEGMENTS: u32 = 32;

/// Base color of a body whose texture failed to load.
pub const UNTEXTURED_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);

/// Component marking the orbital node of a planet or moon.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitalNode {
    pub id: BodyId,
}

/// Component marking the scaled sphere child of an orbital node.
#[derive(Component)]
pub struct BodyMesh;

/// Component marking the sun.
#[derive(Component)]
pub struct SunBody;

/// Texture still loading for a body material.
///
/// Removed once the texture resolves; on failure the material drops the
/// texture and renders untextured.
#[derive(Component)]
pub struct PendingTexture(pub Handle<Image>);

/// Mapping from body to its orbital node entity.
#[derive(Resource, Default, Debug)]
pub struct BodyNodes {
    nodes: HashMap<BodyId, Entity>,
}

impl BodyNodes {
    pub fn get(&self, id: BodyId) -> Option<Entity> {
        self.nodes.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Plugin providing body spawning and texture fallback.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyNodes>()
            .add_systems(Startup, spawn_solar_system)
            .add_systems(Update, resolve_pending_textures);
    }
}

/// Spawn orbital nodes for every planet and moon.
///
/// `dress` is called with each body's sphere child and adds whatever makes it
/// visible (mesh and material). The sphere child is already scaled to the
/// body's radius.
pub fn spawn_orbital_nodes(
    commands: &mut Commands,
    system: &SolarSystem,
    mut dress: impl FnMut(&mut EntityCommands, BodyId, &OrbitalBody),
) -> BodyNodes {
    let mut nodes = HashMap::new();

    for (id, body) in system.iter_bodies() {
        let mut node = commands.spawn((
            Name::new(body.name),
            OrbitalNode { id },
            Transform::from_translation(body.local_position().as_vec3()),
            Visibility::default(),
        ));

        // Planets are iterated before their moons
        if let Some(parent) = id.parent().and_then(|parent| nodes.get(&parent)) {
            node.insert(ChildOf(*parent));
        }
        let node = node.id();

        let mut sphere = commands.spawn((
            Name::new(format!("{} sphere", body.name)),
            BodyMesh,
            Transform::from_scale(Vec3::splat(body.radius as f32)),
            Visibility::default(),
            ChildOf(node),
        ));
        dress(&mut sphere, id, body);

        nodes.insert(id, node);
    }

    BodyNodes { nodes }
}

/// Spawn the sun, planets and moons with their materials.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    system: Res<SolarSystem>,
) {
    let sphere = meshes.add(Sphere::new(1.0).mesh().uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS));

    // Sun: unlit so it reads as the light source
    let sun = system.sun();
    let sun_texture = sun.texture.map(|path| asset_server.load::<Image>(path));
    let sun_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: sun_texture.clone(),
        unlit: true,
        ..default()
    });
    let mut sun_entity = commands.spawn((
        Name::new(sun.name),
        SunBody,
        Mesh3d(sphere.clone()),
        MeshMaterial3d(sun_material),
        Transform::from_scale(Vec3::splat(sun.radius as f32)),
    ));
    if let Some(texture) = sun_texture {
        sun_entity.insert(PendingTexture(texture));
    }

    let nodes = spawn_orbital_nodes(&mut commands, &system, |sphere_child, _id, body| {
        let texture = body.texture.map(|path| asset_server.load::<Image>(path));
        let material = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: texture.clone(),
            perceptual_roughness: 0.9,
            ..default()
        });
        sphere_child.insert((Mesh3d(sphere.clone()), MeshMaterial3d(material)));
        if let Some(texture) = texture {
            sphere_child.insert(PendingTexture(texture));
        }
    });

    info!(
        "Spawned sun and {} orbiting bodies ({} planets)",
        nodes.len(),
        system.planets().len()
    );
    commands.insert_resource(nodes);
}

/// Drop textures that failed to load so the body still renders.
fn resolve_pending_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &PendingTexture, &MeshMaterial3d<StandardMaterial>, Option<&Name>)>,
) {
    for (entity, texture, material, name) in pending.iter() {
        match asset_server.load_state(texture.0.id()) {
            LoadState::Loaded => {
                commands.entity(entity).remove::<PendingTexture>();
            }
            LoadState::Failed(err) => {
                warn!(
                    "Texture for {} failed to load ({}); rendering untextured",
                    name.map(Name::as_str).unwrap_or("body"),
                    err
                );
                if let Some(material) = materials.get_mut(&material.0) {
                    material.base_color_texture = None;
                    material.base_color = UNTEXTURED_COLOR;
                }
                commands.entity(entity).remove::<PendingTexture>();
            }
            _ => {}
        }
    }
}
