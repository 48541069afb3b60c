use bevy::pbr::{Material, MaterialPlugin};
use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderType};
use bevy::shader::ShaderRef;

pub struct ChamberMaterialPlugin;

impl Plugin for ChamberMaterialPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<ChamberMaterial>::default());
    }
}

/// Uniform array capacities. The sync system truncates past these;
/// lifetimes keep the live collections well under them in practice.
pub const MAX_PARTICLES: usize = 320;
pub const MAX_RINGS: usize = 24;

/// A mote as the shader sees it: position and presentation only,
/// all aging already applied on the CPU
#[derive(ShaderType, Debug, Clone, Copy)]
pub struct ParticleInstance {
    /// Position on the chamber plane (world x, z)
    pub center: Vec2,
    /// Current radius, world units
    pub radius: f32,
    /// Hue in degrees
    pub hue: f32,
    pub opacity: f32,
    /// 0.0 sharp, 1.0 fully diffuse
    pub softness: f32,
    pub _padding1: f32,
    pub _padding2: f32,
}

impl Default for ParticleInstance {
    fn default() -> Self {
        ParticleInstance {
            center: Vec2::ZERO,
            radius: 0.0,
            hue: 0.0,
            opacity: 0.0,
            softness: 0.0,
            _padding1: 0.0,
            _padding2: 0.0,
        }
    }
}

/// A ring as the shader sees it; rings are always centered on the orb
#[derive(ShaderType, Debug, Clone, Copy)]
pub struct RingInstance {
    pub radius: f32,
    /// Degrees; phase for the angular shimmer
    pub rotation: f32,
    pub opacity: f32,
    pub hue: f32,
}

impl Default for RingInstance {
    fn default() -> Self {
        RingInstance {
            radius: 0.0,
            rotation: 0.0,
            opacity: 0.0,
            hue: 0.0,
        }
    }
}

/// The whole chamber in one uniform (with proper alignment)
#[derive(ShaderType, Debug, Clone)]
pub struct ChamberUniform {
    /// Gradient focus on the chamber plane (world x, z)
    pub cursor: Vec2,
    /// Visible half extents of the plane
    pub bounds_half: Vec2,
    /// Chamber hue in degrees
    pub hue: f32,
    /// Elapsed seconds, for the subtle drift effects
    pub time: f32,
    /// Breathing phase in radians
    pub breath_phase: f32,
    /// Orb glow strength
    pub glow: f32,
    /// Orb radius with the breath already applied, world units
    pub orb_radius: f32,
    pub num_particles: u32,
    pub num_rings: u32,
    pub _padding: u32,
    pub particles: [ParticleInstance; MAX_PARTICLES],
    pub rings: [RingInstance; MAX_RINGS],
}

impl Default for ChamberUniform {
    fn default() -> Self {
        ChamberUniform {
            cursor: Vec2::ZERO,
            bounds_half: Vec2::new(5.0, 5.0),
            hue: 280.0,
            time: 0.0,
            breath_phase: 0.0,
            glow: 0.3,
            orb_radius: 1.1,
            num_particles: 0,
            num_rings: 0,
            _padding: 0,
            particles: [ParticleInstance::default(); MAX_PARTICLES],
            rings: [RingInstance::default(); MAX_RINGS],
        }
    }
}

/// Material for the full-screen chamber plane
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct ChamberMaterial {
    #[uniform(0)]
    pub data: ChamberUniform,
}

impl Material for ChamberMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/chamber.wgsl".into()
    }
}

/// Resource to store the handle to the chamber material
#[derive(Resource)]
pub struct ChamberMaterialHandle(pub Handle<ChamberMaterial>);
