use diamond_square_terrain::TerrainSettings;

use bevy::prelude::*;
use bevy_atmosphere::prelude::*;
use bevy_fly_camera::{FlyCamera, FlyCameraPlugin};

const SETTINGS_PATH: &str = "assets/terrain.ron";

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugin(AtmospherePlugin)
        .add_plugin(FlyCameraPlugin)
        .add_startup_system(setup_terrain)
        .run();
}

fn setup_terrain(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let settings = TerrainSettings::load(SETTINGS_PATH).unwrap_or_else(|e| {
        error!("{e}, using default terrain settings");
        TerrainSettings::default()
    });

    let terrain = match settings.build_mesh() {
        Ok(terrain) => terrain,
        Err(e) => {
            error!("terrain generation failed: {e}");
            return;
        }
    };

    info!(
        "terrain mesh: {} vertices, {} triangles",
        terrain.vertices.len(),
        terrain.triangle_count
    );

    // The grid is built with z up
    let transform = Transform::from_rotation(Quat::from_rotation_x(-0.5 * std::f32::consts::PI))
        .with_scale(Vec3::new(1., 1., settings.height_scale));

    let (min, max) = terrain.bounds();
    let center = transform.transform_point((min + max) / 2.);
    let span = (max - min).truncate().max_element();

    add_camera(&mut commands, center + Vec3::new(0., span * 0.5, span * 0.75));
    add_lights(&mut commands);

    if settings.wireframe {
        commands.spawn(PbrBundle {
            mesh: meshes.add(terrain.wireframe_mesh()),
            material: materials.add(StandardMaterial {
                base_color: Color::WHITE,
                unlit: true,
                ..default()
            }),
            // Lifted slightly to avoid z-fighting with the surface
            transform: transform.with_translation(Vec3::Y * 0.01),
            ..default()
        });
    }

    commands.spawn(PbrBundle {
        mesh: meshes.add(terrain.into_render_mesh()),
        material: materials.add(StandardMaterial {
            // Vertex colours carry the height bands
            base_color: Color::WHITE,
            perceptual_roughness: 0.8,
            ..default()
        }),
        transform,
        ..default()
    });
}

fn add_camera(commands: &mut Commands, position: Vec3) {
    commands
        .spawn(Camera3dBundle {
            transform: Transform::from_translation(position),
            ..default()
        })
        .insert(FlyCamera::default())
        .insert(AtmosphereCamera::default());
}

fn add_lights(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.1,
    });

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10000.,
            shadows_enabled: false,
            ..default()
        },
        transform: Transform::from_rotation(Quat::from_rotation_x(-0.25 * std::f32::consts::PI)),
        ..default()
    });
}
