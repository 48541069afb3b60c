use bevy::prelude::*;

mod camera;
mod chamber;
mod input;
mod sparks;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use chamber::material::ChamberMaterialPlugin;
use chamber::plugin::ChamberPlugin;
use input::InputPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "The Spark Chamber".into(),
            resolution: WindowResolution::new(1280, 720),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(ChamberMaterialPlugin)
    .add_plugins(ChamberPlugin);

    app.run();
}
