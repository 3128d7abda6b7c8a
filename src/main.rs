mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod gravity;
mod movement;
mod shooting;
mod sprites;
mod ui;
mod world;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Emberfall".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        gravity::GravityPlugin,
        shooting::ShootingPlugin,
        world::WorldPlugin,
        sprites::SpritesPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
