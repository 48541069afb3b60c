use bevy::prelude::*;

use crate::chamber::aura::{Aura, update_aura};
use crate::chamber::ignite::{
    CurrentSpark, CursorField, Ignition, handle_pointer_input, reveal_spark,
};
use crate::chamber::overlay::{spawn_overlay, update_overlay};
use crate::chamber::particles::{ParticleField, update_particles};
use crate::chamber::rings::{RingWave, activate_pending_rings, update_rings};
use crate::chamber::setup::setup_scene;
use crate::chamber::sync::update_chamber_scene;
use crate::sparks::setup_spark_library;

pub struct ChamberPlugin;

impl Plugin for ChamberPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Aura>()
            .init_resource::<Ignition>()
            .init_resource::<CurrentSpark>()
            .init_resource::<CursorField>()
            .init_resource::<ParticleField>()
            .init_resource::<RingWave>()
            // Spark data first, then the scene and overlay that present it
            .add_systems(
                Startup,
                (setup_spark_library, setup_scene, spawn_overlay).chain(),
            )
            .add_systems(
                Update,
                (
                    handle_pointer_input,
                    reveal_spark,
                    // Idle animation
                    update_aura,
                    // Effect lifecycles
                    update_particles,
                    activate_pending_rings,
                    update_rings,
                    // Push the frame's state to the GPU and the overlay
                    update_chamber_scene,
                    update_overlay,
                )
                    .chain(),
            );
    }
}
