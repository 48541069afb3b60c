use bevy::prelude::*;
use rand::prelude::*;
use rand::rng;

use crate::{
    camera::MainCamera,
    chamber::{aura::Aura, particles::ParticleField, rings::RingWave},
    input::{PointerEvent, PointerEventType},
    sparks::SparkLibrary,
};

/// Seconds between a press and the spark reveal
const REVEAL_DELAY: f32 = 0.4;

/// Chance that a pointer move sheds a trail mote
const TRAIL_CHANCE: f32 = 0.3;

/// Ignition state: a busy flag plus the countdown to the pending reveal.
/// While the countdown runs, further presses are ignored.
#[derive(Resource, Default)]
pub struct Ignition {
    igniting: bool,
    countdown: f32,
    pending: Option<String>,
}

impl Ignition {
    /// Begin an ignition with the spark to reveal. Returns false (and leaves
    /// the pending spark alone) if one is already underway.
    pub fn try_ignite(&mut self, spark: String) -> bool {
        if self.igniting {
            return false;
        }

        self.igniting = true;
        self.countdown = REVEAL_DELAY;
        self.pending = Some(spark);
        true
    }

    pub fn is_igniting(&self) -> bool {
        self.igniting
    }

    /// Advance the countdown; yields the pending spark exactly once, when the
    /// reveal delay has fully elapsed.
    pub fn tick(&mut self, dt: f32) -> Option<String> {
        if !self.igniting {
            return None;
        }

        self.countdown -= dt;
        if self.countdown > 0.0 {
            return None;
        }

        self.igniting = false;
        self.pending.take()
    }
}

/// The revealed spark text, plus how long ago it landed (drives the fade-in)
#[derive(Resource, Default)]
pub struct CurrentSpark {
    pub text: Option<String>,
    pub age: f32,
}

/// Last known pointer position on the chamber plane; the background gradient
/// follows it. Starts at the chamber center until the pointer first moves.
#[derive(Resource, Default)]
pub struct CursorField {
    pub world_pos: Option<Vec3>,
}

/// System: turn pointer input into ignitions and trail motes
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    library: Res<SparkLibrary>,
    mut aura: ResMut<Aura>,
    mut ignition: ResMut<Ignition>,
    mut field: ResMut<ParticleField>,
    mut wave: ResMut<RingWave>,
    mut cursor: ResMut<CursorField>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for event in pointer_events.read() {
        let Some(world_pos) = event.to_world_position(camera, camera_transform) else {
            continue;
        };

        match event.event_type {
            PointerEventType::Press => {
                if ignition.is_igniting() {
                    continue;
                }
                ignition.try_ignite(library.random_spark().to_string());

                // Burst and salvo carry the pre-rotation hue
                aura.surge();
                field.spawn_burst(Vec3::ZERO, aura.hue);
                wave.queue_salvo(aura.hue);
                aura.advance_hue();

                info!("Chamber ignited, hue now {:.0}", aura.hue);
            }

            PointerEventType::Move => {
                cursor.world_pos = Some(world_pos);

                if rng().random::<f32>() < TRAIL_CHANCE {
                    field.spawn_trail(world_pos, aura.hue);
                }
            }
        }
    }
}

/// System: count the reveal down and publish the spark when it lands
pub fn reveal_spark(
    time: Res<Time>,
    mut ignition: ResMut<Ignition>,
    mut current: ResMut<CurrentSpark>,
) {
    let dt = time.delta_secs();

    if let Some(text) = ignition.tick(dt) {
        info!("Spark revealed: {}", text);
        current.text = Some(text);
        current.age = 0.0;
    } else if current.text.is_some() {
        current.age += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_flag_blocks_reentry() {
        let mut ignition = Ignition::default();

        assert!(ignition.try_ignite("first".to_string()));
        assert!(ignition.is_igniting());

        // A second press during the window neither re-triggers nor swaps the spark
        assert!(!ignition.try_ignite("second".to_string()));

        let revealed = ignition.tick(REVEAL_DELAY + 0.01);
        assert_eq!(revealed.as_deref(), Some("first"));
    }

    #[test]
    fn test_reveal_waits_full_delay() {
        let mut ignition = Ignition::default();
        ignition.try_ignite("spark".to_string());

        // Three frames short of the delay
        assert!(ignition.tick(0.1).is_none());
        assert!(ignition.tick(0.1).is_none());
        assert!(ignition.tick(0.1).is_none());
        assert!(ignition.is_igniting());

        let revealed = ignition.tick(0.11);
        assert_eq!(revealed.as_deref(), Some("spark"));
        assert!(!ignition.is_igniting());
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut ignition = Ignition::default();
        ignition.try_ignite("spark".to_string());

        assert!(ignition.tick(1.0).is_some());
        assert!(ignition.tick(1.0).is_none());
    }

    #[test]
    fn test_reignition_after_reveal() {
        let mut ignition = Ignition::default();

        ignition.try_ignite("first".to_string());
        ignition.tick(1.0);

        // The guard only covers the reveal window
        assert!(ignition.try_ignite("second".to_string()));
        assert_eq!(ignition.tick(1.0).as_deref(), Some("second"));
    }
}
