use bevy::prelude::*;

use crate::{
    camera::GameCamera,
    chamber::material::{ChamberMaterial, ChamberMaterialHandle},
};

/// Orb radius before breathing, world units
pub const ORB_RADIUS: f32 = 1.1;

/// How much larger the chamber plane is than the visible region
const PLANE_SIZE_SCALE: f32 = 1.5;

/// Spawn the full-screen chamber plane. Everything visible — gradient, grid,
/// orb, rings, motes — is drawn by its material in one pass.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ChamberMaterial>>,
    game_camera: Res<GameCamera>,
) {
    let bounds = &game_camera.bounds;
    let plane_size = bounds.width().max(bounds.height()) * PLANE_SIZE_SCALE;
    let plane_mesh = meshes.add(Plane3d::default().mesh().size(plane_size, plane_size));

    let material_handle = materials.add(ChamberMaterial::default());
    commands.insert_resource(ChamberMaterialHandle(material_handle.clone()));

    // The plane already lies in XZ with +Y normal, facing the camera
    commands.spawn((
        Mesh3d(plane_mesh),
        MeshMaterial3d(material_handle),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Chamber Plane"),
    ));

    info!("Chamber plane spawned, {plane_size:.1} world units square");
}
