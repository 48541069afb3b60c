use bevy::camera::ScalingMode;
use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_camera_resource);
    }
}

/// Vertical world extent shown by the orthographic camera
const VIEW_HEIGHT: f32 = 10.0;

#[derive(Resource)]
pub struct GameCamera {
    pub view_height: f32,
    pub aspect_ratio: f32,
    pub bounds: CameraBounds,
}

/// Visible extents of the chamber plane, in world units
#[derive(Debug, Clone)]
pub struct CameraBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for GameCamera {
    fn default() -> Self {
        let view_height = VIEW_HEIGHT;
        let aspect_ratio = 16.0 / 9.0;

        Self {
            view_height,
            aspect_ratio,
            bounds: CameraBounds::from_height_and_aspect(view_height, aspect_ratio),
        }
    }
}

impl CameraBounds {
    pub fn from_height_and_aspect(view_height: f32, aspect_ratio: f32) -> Self {
        let half_height = view_height * 0.5;
        let half_width = half_height * aspect_ratio;

        Self {
            left: -half_width,
            right: half_width,
            bottom: -half_height,
            top: half_height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Half extents, handy for shader uniforms
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width() * 0.5, self.height() * 0.5)
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Setup a top-down orthographic camera looking at the chamber plane (y = 0)
///
/// Camera looks down from +Y, with +Z pointing up on screen. All chamber
/// geometry lives in the XZ plane.
fn setup_camera(mut commands: Commands, game_camera: Res<GameCamera>) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::FixedVertical {
            viewport_height: game_camera.view_height,
        },
        near: 0.0,
        far: 1000.0,
        ..OrthographicProjection::default_3d()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
        MainCamera,
    ));
}

/// Update camera resource when the window aspect ratio changes
fn update_camera_resource(mut game_camera: ResMut<GameCamera>, windows: Query<&Window>) {
    if let Ok(window) = windows.single() {
        let new_aspect = window.width() / window.height();

        if (new_aspect - game_camera.aspect_ratio).abs() > 0.01 {
            game_camera.aspect_ratio = new_aspect;

            game_camera.bounds = CameraBounds::from_height_and_aspect(
                game_camera.view_height,
                game_camera.aspect_ratio,
            );

            info!("Camera bounds updated: {:?}", game_camera.bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_centered() {
        let bounds = CameraBounds::from_height_and_aspect(10.0, 2.0);

        assert_eq!(bounds.height(), 10.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.left, -bounds.right);
        assert_eq!(bounds.bottom, -bounds.top);
    }

    #[test]
    fn test_half_extents() {
        let bounds = CameraBounds::from_height_and_aspect(10.0, 16.0 / 9.0);
        let half = bounds.half_extents();

        assert!((half.y - 5.0).abs() < 1e-6);
        assert!((half.x - 5.0 * 16.0 / 9.0).abs() < 1e-5);
    }
}
