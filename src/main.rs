use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use platformer_core::SimulationPlugin;
use platformer_core::collision::{Solid, SolidKind};
use platformer_core::content::ContentPlugin;
use platformer_core::core::{SimulationPaused, SimulationSet};
use platformer_core::movement::{Actor, ActorBounds, read_keyboard_input};
use platformer_core::rooms::RespawnEvent;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((SimulationPlugin, ContentPlugin))
        .add_systems(Startup, setup_camera)
        .add_systems(
            Update,
            (read_keyboard_input, respawn_on_key, toggle_pause).before(SimulationSet::Input),
        )
        .add_systems(Update, (attach_solid_sprites, attach_actor_sprites))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn respawn_on_key(keyboard: Res<ButtonInput<KeyCode>>, mut respawn: MessageWriter<RespawnEvent>) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        respawn.write(RespawnEvent);
    }
}

fn toggle_pause(keyboard: Res<ButtonInput<KeyCode>>, mut paused: ResMut<SimulationPaused>) {
    if !keyboard.just_pressed(KeyCode::KeyP) {
        return;
    }
    if paused.sources.contains("menu") {
        paused.unpause("menu");
    } else {
        paused.pause("menu");
    }
    info!("Simulation paused: {}", paused.is_paused());
}

fn solid_color(kind: SolidKind) -> Color {
    match kind {
        SolidKind::Floor => Color::srgb(0.4, 0.5, 0.4),
        SolidKind::Ceiling => Color::srgb(0.35, 0.35, 0.45),
        SolidKind::Wall => Color::srgb(0.3, 0.3, 0.4),
        SolidKind::Platform => Color::srgb(0.5, 0.4, 0.3),
        SolidKind::Block => Color::srgb(0.55, 0.35, 0.25),
    }
}

fn attach_solid_sprites(mut commands: Commands, solids: Query<(Entity, &Solid), Added<Solid>>) {
    for (entity, solid) in &solids {
        commands.entity(entity).insert(Sprite {
            color: solid_color(solid.kind),
            custom_size: Some(solid.half_extents * 2.0),
            ..default()
        });
    }
}

fn attach_actor_sprites(
    mut commands: Commands,
    actors: Query<(Entity, &ActorBounds), Added<Actor>>,
) {
    for (entity, bounds) in &actors {
        commands.entity(entity).insert(Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(bounds.size),
            ..default()
        });
    }
}
