use bevy::prelude::*;

use crate::{
    camera::GameCamera,
    chamber::{
        aura::Aura,
        ignite::CursorField,
        material::{
            ChamberMaterial, ChamberMaterialHandle, MAX_PARTICLES, MAX_RINGS, ParticleInstance,
            RingInstance,
        },
        particles::ParticleField,
        rings::RingWave,
        setup::ORB_RADIUS,
    },
};

/// System: sync the chamber state into the material uniform.
///
/// All aging math happens CPU-side; the shader only ever sees current
/// positions, sizes and opacities.
pub fn update_chamber_scene(
    time: Res<Time>,
    aura: Res<Aura>,
    field: Res<ParticleField>,
    wave: Res<RingWave>,
    cursor: Res<CursorField>,
    game_camera: Res<GameCamera>,
    handle: Res<ChamberMaterialHandle>,
    mut materials: ResMut<Assets<ChamberMaterial>>,
) {
    let Some(material) = materials.get_mut(&handle.0) else {
        return;
    };

    material.data.cursor = cursor
        .world_pos
        .map(|p| Vec2::new(p.x, p.z))
        .unwrap_or(Vec2::ZERO);
    material.data.bounds_half = game_camera.bounds.half_extents();
    material.data.hue = aura.hue;
    material.data.time = time.elapsed_secs();
    material.data.breath_phase = aura.breath_phase;
    material.data.glow = aura.glow_intensity();
    material.data.orb_radius = ORB_RADIUS * aura.breath_scale();

    // Newest motes keep their uniform slots when the field overflows the cap
    let particle_skip = field.particles.len().saturating_sub(MAX_PARTICLES);
    let mut particle_count = 0;
    for (i, p) in field
        .particles
        .iter()
        .skip(particle_skip)
        .take(MAX_PARTICLES)
        .enumerate()
    {
        let pos = p.position();
        material.data.particles[i] = ParticleInstance {
            center: Vec2::new(pos.x, pos.z),
            radius: p.rendered_size() * 0.5,
            hue: p.hue,
            opacity: p.opacity(),
            softness: p.softness(),
            _padding1: 0.0,
            _padding2: 0.0,
        };
        particle_count = i + 1;
    }
    material.data.num_particles = particle_count as u32;

    let ring_skip = wave.rings.len().saturating_sub(MAX_RINGS);
    let mut ring_count = 0;
    for (i, ring) in wave.rings.iter().skip(ring_skip).take(MAX_RINGS).enumerate() {
        material.data.rings[i] = RingInstance {
            radius: ring.radius,
            rotation: ring.rotation,
            opacity: ring.opacity,
            hue: ring.hue,
        };
        ring_count = i + 1;
    }
    material.data.num_rings = ring_count as u32;
}
