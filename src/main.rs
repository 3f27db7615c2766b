use bevy::prelude::*;
use pic2d::{
    ColorMode, GRID_RESOLUTION, PicPlugin, RenderFeed, RenderVertex, Simulator, setup_simulation,
};

/// Side length of the quad drawn for each particle, in grid cells.
const PARTICLE_SIZE: f32 = 1.0;

#[derive(Component)]
struct ParticleVisual {
    index: usize,
    color: [f32; 3],
}

fn vertex_color(vertex: &RenderVertex) -> Color {
    let [r, g, b] = vertex.color;
    Color::srgb(r, g, b)
}

fn sim_to_world(position: [f32; 2]) -> Vec3 {
    let half = GRID_RESOLUTION as f32 / 2.0;
    Vec3::new(position[0] - half, position[1] - half, 0.0)
}

fn init(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// One quad per particle. Each quad owns its material so per-vertex colours
/// from the feed can be shown.
fn spawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim: Res<Simulator>,
) {
    let mesh = meshes.add(Rectangle::new(PARTICLE_SIZE, PARTICLE_SIZE));
    let vertices = sim.vertices();
    if vertices.is_empty() {
        warn!("no particles to draw");
        return;
    }

    for (index, vertex) in vertices.iter().enumerate() {
        commands.spawn((
            ParticleVisual {
                index,
                color: vertex.color,
            },
            Mesh2d(mesh.clone()),
            MeshMaterial2d(materials.add(vertex_color(vertex))),
            Transform::from_translation(sim_to_world(vertex.position)),
        ));
    }
    info!("spawned {} particle quads", vertices.len());
}

/// `C` switches between solid and speed colouring.
fn toggle_color_mode(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Simulator>) {
    if !keys.just_pressed(KeyCode::KeyC) {
        return;
    }
    let next = match sim.color_mode() {
        ColorMode::Solid(_) => ColorMode::Speed,
        ColorMode::Speed => ColorMode::default(),
    };
    info!("color mode {next:?}");
    sim.set_color_mode(next);
}

fn update_particle_visuals(
    feed: Res<RenderFeed>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(
        &mut ParticleVisual,
        &mut Transform,
        &MeshMaterial2d<ColorMaterial>,
    )>,
) {
    if !feed.is_changed() {
        return;
    }
    for (mut visual, mut transform, material) in query.iter_mut() {
        let Some(vertex) = feed.vertices.get(visual.index) else {
            continue;
        };
        transform.translation = sim_to_world(vertex.position);
        if visual.color != vertex.color {
            if let Some(material) = materials.get_mut(&material.0) {
                material.color = vertex_color(vertex);
            }
            visual.color = vertex.color;
        }
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "MPM".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(PicPlugin)
        .add_systems(
            Startup,
            (init, spawn_particle_visuals.after(setup_simulation)),
        )
        .add_systems(Update, (toggle_color_mode, update_particle_visuals))
        .run();
}
