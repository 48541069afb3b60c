use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerEvent>()
            .add_systems(Update, (track_cursor_pos, collect_pointer_events));
    }
}

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates: pixels from bottom-left
    pub position: Vec2,
    pub event_type: PointerEventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    /// A click or a touch landing — the ignition trigger
    Press,
    /// The pointer wandering over the chamber, button or no button
    Move,
}

impl PointerEvent {
    /// Convert window coords to a point on the chamber plane (y = 0)
    pub fn to_world_position(
        &self,
        camera: &Camera,
        camera_transform: &GlobalTransform,
    ) -> Option<Vec3> {
        camera
            .viewport_to_world(camera_transform, self.position)
            .ok()
            .map(|ray| {
                let t = -ray.origin.y / ray.direction.y;
                ray.origin + ray.direction * t
            })
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

/// Every cursor motion is a Move event; the chamber reacts to hover, not drag
fn track_cursor_pos(
    mut ev_cursor: MessageReader<CursorMoved>,
    mut pos: ResMut<CursorPos>,
    mut out: MessageWriter<PointerEvent>,
) {
    for e in ev_cursor.read() {
        pos.0 = Some(e.position);
        out.write(PointerEvent {
            position: e.position,
            event_type: PointerEventType::Move,
        });
    }
}

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    if let Some(p) = cursor.0 {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Press,
            });
        }
    }

    for ev in touch_events.read() {
        let event_type = match ev.phase {
            TouchPhase::Started => PointerEventType::Press,
            TouchPhase::Moved => PointerEventType::Move,
            // No drag semantics: a lifted finger means nothing here
            TouchPhase::Ended | TouchPhase::Canceled => continue,
        };
        out.write(PointerEvent {
            position: ev.position,
            event_type,
        });
    }
}
