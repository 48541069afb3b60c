use bevy::prelude::*;
use rand::prelude::*;
use rand::rng;
use std::f32::consts::TAU;

/// Motes in one ignition burst
pub const BURST_COUNT: usize = 60;

/// Burst drift speed range, world units per second
const BURST_SPEED_MIN: f32 = 4.0;
const BURST_SPEED_SPAN: f32 = 8.0;

/// Burst lifetime range, seconds
const BURST_LIFE_MIN: f32 = 1.0;
const BURST_LIFE_SPAN: f32 = 2.0 / 3.0;

/// Burst mote size range (diameter at birth), world units
const BURST_SIZE_MIN: f32 = 0.11;
const BURST_SIZE_SPAN: f32 = 0.22;

/// Angular jitter added to the even burst fan, radians
const BURST_JITTER: f32 = 0.5;

/// Hue spread around the chamber hue for burst motes, degrees
const BURST_HUE_SPREAD: f32 = 60.0;

/// Trail motes live exactly this long, seconds
const TRAIL_LIFE: f32 = 0.5;

const TRAIL_SPEED_MIN: f32 = 1.0;
const TRAIL_SPEED_SPAN: f32 = 2.0;
const TRAIL_SIZE_MIN: f32 = 0.07;
const TRAIL_SIZE_SPAN: f32 = 0.09;
const TRAIL_HUE_SPREAD: f32 = 30.0;

/// A short-lived glowing mote. Position is derived from age rather than
/// integrated: the mote drifts outward from its origin at constant speed.
#[derive(Debug, Clone)]
pub struct Particle {
    pub origin: Vec3,
    pub angle: f32,
    pub speed: f32,
    /// Remaining lifetime, seconds
    pub life: f32,
    /// Lifetime at birth, seconds
    pub max_life: f32,
    /// Diameter at birth, world units
    pub size: f32,
    pub hue: f32,
}

impl Particle {
    /// Fraction of life remaining, 1.0 at birth down to 0.0
    pub fn progress(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    /// Current position on the chamber plane
    pub fn position(&self) -> Vec3 {
        let age = self.max_life - self.life;
        let dir = Vec3::new(self.angle.cos(), 0.0, self.angle.sin());
        self.origin + dir * self.speed * age
    }

    /// Current opacity; motes are born at 0.9 and fade with their life
    pub fn opacity(&self) -> f32 {
        self.progress() * 0.9
    }

    /// Current diameter; motes shrink as they fade
    pub fn rendered_size(&self) -> f32 {
        self.size * self.progress()
    }

    /// How blurred the mote is: 0.0 sharp at birth, 1.0 fully diffuse
    pub fn softness(&self) -> f32 {
        1.0 - self.progress()
    }
}

/// Resource holding every live mote in the chamber
#[derive(Resource, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn one ignition burst: an even fan around the full circle with
    /// jittered angles, speeds, sizes and hues
    pub fn spawn_burst(&mut self, center: Vec3, base_hue: f32) {
        let mut rng = rng();

        for i in 0..BURST_COUNT {
            let life = BURST_LIFE_MIN + rng.random::<f32>() * BURST_LIFE_SPAN;
            self.particles.push(Particle {
                origin: center,
                angle: TAU * i as f32 / BURST_COUNT as f32 + rng.random::<f32>() * BURST_JITTER,
                speed: BURST_SPEED_MIN + rng.random::<f32>() * BURST_SPEED_SPAN,
                life,
                max_life: life,
                size: BURST_SIZE_MIN + rng.random::<f32>() * BURST_SIZE_SPAN,
                hue: base_hue - BURST_HUE_SPREAD * 0.5 + rng.random::<f32>() * BURST_HUE_SPREAD,
            });
        }
    }

    /// Spawn one slow mote where the pointer wandered
    pub fn spawn_trail(&mut self, position: Vec3, base_hue: f32) {
        let mut rng = rng();

        self.particles.push(Particle {
            origin: position,
            angle: rng.random::<f32>() * TAU,
            speed: TRAIL_SPEED_MIN + rng.random::<f32>() * TRAIL_SPEED_SPAN,
            life: TRAIL_LIFE,
            max_life: TRAIL_LIFE,
            size: TRAIL_SIZE_MIN + rng.random::<f32>() * TRAIL_SIZE_SPAN,
            hue: base_hue + rng.random::<f32>() * TRAIL_HUE_SPREAD,
        });
    }

    /// Age every mote and drop the expired ones
    pub fn advance(&mut self, dt: f32) {
        self.particles.retain_mut(|p| {
            p.life -= dt;
            p.life > 0.0
        });
    }
}

/// System: age every mote and drop the expired ones
pub fn update_particles(time: Res<Time>, mut field: ResMut<ParticleField>) {
    field.advance(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_spawns_full_fan() {
        let mut field = ParticleField::default();
        field.spawn_burst(Vec3::ZERO, 280.0);

        assert_eq!(field.particles.len(), BURST_COUNT);
        for p in &field.particles {
            assert_eq!(p.life, p.max_life);
            assert!(p.life >= BURST_LIFE_MIN);
            assert!(p.hue >= 280.0 - 30.0 && p.hue <= 280.0 + 30.0);
        }
    }

    #[test]
    fn test_expired_motes_are_dropped() {
        let mut field = ParticleField::default();
        field.spawn_trail(Vec3::ZERO, 0.0);
        field.spawn_burst(Vec3::ZERO, 0.0);

        // Trail motes live 0.5s; the burst outlives them
        field.advance(0.6);
        assert_eq!(field.particles.len(), BURST_COUNT);
        assert!(field.particles.iter().all(|p| p.life > 0.0));

        // Nothing survives two full seconds
        field.advance(2.0);
        assert!(field.particles.is_empty());
    }

    #[test]
    fn test_position_drifts_outward() {
        let mote = Particle {
            origin: Vec3::new(1.0, 0.0, 2.0),
            angle: 0.0,
            speed: 4.0,
            life: 0.5,
            max_life: 1.0,
            size: 0.2,
            hue: 0.0,
        };

        // Half a second old, drifting along +X at 4 units/s
        let pos = mote.position();
        assert!((pos.x - 3.0).abs() < 1e-5);
        assert!((pos.z - 2.0).abs() < 1e-5);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_fade_follows_life() {
        let mut mote = Particle {
            origin: Vec3::ZERO,
            angle: 0.0,
            speed: 1.0,
            life: 1.0,
            max_life: 1.0,
            size: 0.3,
            hue: 0.0,
        };

        assert!((mote.opacity() - 0.9).abs() < 1e-5);
        assert!((mote.rendered_size() - 0.3).abs() < 1e-5);
        assert_eq!(mote.softness(), 0.0);

        mote.life = 0.25;
        assert!((mote.opacity() - 0.225).abs() < 1e-5);
        assert!((mote.rendered_size() - 0.075).abs() < 1e-5);
        assert!((mote.softness() - 0.75).abs() < 1e-5);
    }
}
