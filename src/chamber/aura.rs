use bevy::prelude::*;
use std::f32::consts::TAU;

/// Hue the chamber wakes up with
const INITIAL_HUE: f32 = 280.0;

/// Hue rotation per ignition, degrees
const HUE_STEP: f32 = 40.0;

/// Breathing phase advance, radians per second
const BREATH_RATE: f32 = 1.2;

/// Energy drained per second after a surge
const ENERGY_DECAY: f32 = 30.0;

/// The chamber's mood: a rotating hue, a breathing phase, and a decaying
/// energy scalar that surges to 100 on ignition.
#[derive(Resource, Debug)]
pub struct Aura {
    /// Current hue in degrees, always within [0, 360)
    pub hue: f32,
    /// Breathing phase in radians, always within [0, 2π)
    pub breath_phase: f32,
    /// Ignition energy, 0 to 100
    pub energy: f32,
}

impl Default for Aura {
    fn default() -> Self {
        Aura {
            hue: INITIAL_HUE,
            breath_phase: 0.0,
            energy: 0.0,
        }
    }
}

impl Aura {
    /// Rotate the hue one ignition step around the wheel
    pub fn advance_hue(&mut self) {
        self.hue = (self.hue + HUE_STEP).rem_euclid(360.0);
    }

    /// Surge to full energy (ignition)
    pub fn surge(&mut self) {
        self.energy = 100.0;
    }

    /// Orb scale multiplier from the breathing cycle
    pub fn breath_scale(&self) -> f32 {
        1.0 + self.breath_phase.sin() * 0.05
    }

    /// Orb glow strength: a slow shimmer plus the energy surge
    pub fn glow_intensity(&self) -> f32 {
        0.3 + (self.breath_phase * 2.0).sin() * 0.2 + (self.energy / 100.0) * 0.5
    }
}

/// System: advance the breathing cycle and drain surge energy
pub fn update_aura(time: Res<Time>, mut aura: ResMut<Aura>) {
    let dt = time.delta_secs();

    aura.breath_phase = (aura.breath_phase + BREATH_RATE * dt).rem_euclid(TAU);
    aura.energy = (aura.energy - ENERGY_DECAY * dt).max(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_wraps() {
        let mut aura = Aura {
            hue: 340.0,
            ..default()
        };

        aura.advance_hue();
        assert_eq!(aura.hue, 20.0);

        for _ in 0..100 {
            aura.advance_hue();
            assert!(aura.hue >= 0.0 && aura.hue < 360.0);
        }
    }

    #[test]
    fn test_energy_clamps_at_zero() {
        let mut aura = Aura::default();
        aura.surge();
        assert_eq!(aura.energy, 100.0);

        // Hand-roll the decay: 4 seconds drains well past zero
        aura.energy = (aura.energy - ENERGY_DECAY * 4.0).max(0.0);
        assert_eq!(aura.energy, 0.0);
    }

    #[test]
    fn test_glow_stays_in_range() {
        let mut aura = Aura::default();

        for step in 0..628 {
            aura.breath_phase = step as f32 * 0.01;
            for energy in [0.0, 50.0, 100.0] {
                aura.energy = energy;
                let glow = aura.glow_intensity();
                assert!(glow >= 0.1 - 1e-5 && glow <= 1.0 + 1e-5);
            }
        }
    }

    #[test]
    fn test_breath_scale_bounds() {
        let mut aura = Aura::default();

        for step in 0..628 {
            aura.breath_phase = step as f32 * 0.01;
            let scale = aura.breath_scale();
            assert!(scale >= 0.95 - 1e-5 && scale <= 1.05 + 1e-5);
        }
    }
}
