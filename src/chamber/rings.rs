use bevy::prelude::*;
use rand::prelude::*;
use rand::rng;

/// Rings per ignition salvo
pub const SALVO_SIZE: usize = 5;

/// Delay between successive rings in a salvo, seconds
const STAGGER_INTERVAL: f32 = 0.1;

/// Hue offset between successive rings in a salvo, degrees
const SALVO_HUE_STEP: f32 = 20.0;

/// Radius growth, world units per second
const GROWTH_RATE: f32 = 2.0;

/// Opacity lost per second; rings are born at 0.8
const FADE_RATE: f32 = 0.48;

const BIRTH_OPACITY: f32 = 0.8;

/// Rotation advance, degrees per second
const SPIN_RATE: f32 = 30.0;

/// An expanding circle rippling out from the orb
#[derive(Debug, Clone)]
pub struct Ring {
    pub radius: f32,
    /// Degrees; drives the angular shimmer in the shader
    pub rotation: f32,
    pub opacity: f32,
    pub hue: f32,
}

/// A ring waiting out its stagger delay
#[derive(Debug, Clone)]
struct PendingRing {
    delay: f32,
    hue: f32,
}

/// Resource tracking live rings and the stagger queue feeding them
#[derive(Resource, Default)]
pub struct RingWave {
    pub rings: Vec<Ring>,
    pending: Vec<PendingRing>,
}

impl RingWave {
    /// Queue one ignition salvo: five rings, fanned out in time and hue
    pub fn queue_salvo(&mut self, base_hue: f32) {
        for i in 0..SALVO_SIZE {
            self.pending.push(PendingRing {
                delay: i as f32 * STAGGER_INTERVAL,
                hue: base_hue + i as f32 * SALVO_HUE_STEP,
            });
        }
    }

    /// Count stagger delays down; rings whose time has come go live with the
    /// rotation the caller hands them
    pub fn activate_pending(&mut self, dt: f32, mut rotation: impl FnMut() -> f32) {
        let mut activated = Vec::new();
        self.pending.retain_mut(|pending| {
            pending.delay -= dt;
            if pending.delay <= 0.0 {
                activated.push(Ring {
                    radius: 0.0,
                    rotation: rotation(),
                    opacity: BIRTH_OPACITY,
                    hue: pending.hue,
                });
                false
            } else {
                true
            }
        });

        self.rings.extend(activated);
    }

    /// Grow, spin and fade every live ring, dropping the spent ones
    pub fn advance(&mut self, dt: f32) {
        self.rings.retain_mut(|ring| {
            ring.radius += GROWTH_RATE * dt;
            ring.rotation += SPIN_RATE * dt;
            ring.opacity -= FADE_RATE * dt;
            ring.opacity > 0.0
        });
    }
}

/// System: activate staggered rings with a random starting rotation
pub fn activate_pending_rings(time: Res<Time>, mut wave: ResMut<RingWave>) {
    let mut rng = rng();
    wave.activate_pending(time.delta_secs(), || rng.random::<f32>() * 360.0);
}

/// System: advance every live ring
pub fn update_rings(time: Res<Time>, mut wave: ResMut<RingWave>) {
    wave.advance(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salvo_staggers_out() {
        let mut wave = RingWave::default();
        wave.queue_salvo(280.0);
        assert_eq!(wave.pending.len(), SALVO_SIZE);

        // First ring fires on the first tick, the rest wait their turn
        wave.activate_pending(0.01, || 0.0);
        assert_eq!(wave.rings.len(), 1);

        wave.activate_pending(0.25, || 0.0);
        assert_eq!(wave.rings.len(), 4);

        wave.activate_pending(0.25, || 0.0);
        assert_eq!(wave.rings.len(), SALVO_SIZE);
        assert_eq!(wave.pending.len(), 0);
    }

    #[test]
    fn test_salvo_hues_fan_out() {
        let mut wave = RingWave::default();
        wave.queue_salvo(100.0);
        wave.activate_pending(1.0, || 0.0);

        let hues: Vec<f32> = wave.rings.iter().map(|r| r.hue).collect();
        assert_eq!(hues, vec![100.0, 120.0, 140.0, 160.0, 180.0]);
    }

    #[test]
    fn test_rings_grow_and_fade() {
        let mut wave = RingWave::default();
        wave.queue_salvo(0.0);
        wave.activate_pending(0.01, || 0.0);

        wave.advance(0.5);
        let ring = &wave.rings[0];
        assert!((ring.radius - 1.0).abs() < 1e-5);
        assert!((ring.rotation - 15.0).abs() < 1e-4);
        assert!((ring.opacity - 0.56).abs() < 1e-5);
    }

    #[test]
    fn test_spent_rings_are_dropped() {
        let mut wave = RingWave::default();
        wave.queue_salvo(0.0);
        wave.activate_pending(1.0, || 0.0);
        assert_eq!(wave.rings.len(), SALVO_SIZE);

        // 0.8 opacity at 0.48/s is gone within two seconds
        wave.advance(2.0);
        assert!(wave.rings.is_empty());
    }
}
