//! Simulation state and the per-frame tick.

use glam::Vec2;
use rand::Rng;

use crate::connect::connect;
use crate::field::PointerField;
use crate::particle::{self, Particle};
use crate::surface::{Color, Surface};

/// Disc fill for every particle.
pub const PARTICLE_COLOR: Color = Color::from_srgba(255, 255, 255, 255);

/// Link color before distance fading is applied.
pub const LINK_COLOR: Color = Color::from_srgba(255, 170, 255, 255);

/// Tunable constants of the field.
///
/// `connect_threshold` and `connect_fade` are coupled: the fade denominator
/// decides the opacity at the threshold (defaults give 1 - 20/50 = 0.6 at the
/// cut-off). Retune them together.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Text whose silhouette seeds the particle set.
    pub text: String,
    /// Rasterization size of the off-screen glyph mask, in pixels.
    pub font_px: f32,
    /// Spread factor from mask cells to on-screen rest positions.
    pub scale: f32,
    /// Draw radius of every particle.
    pub particle_radius: f32,
    /// Damping divisor of the return-to-rest decay.
    pub relaxation_rate: f32,
    /// Pointer influence radius.
    pub influence_radius: f32,
    /// Pairs closer than this get a link.
    pub connect_threshold: f32,
    /// Denominator of the link opacity fade.
    pub connect_fade: f32,
    /// Stroke width of links.
    pub link_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            text: "ABOBA".to_owned(),
            font_px: 30.0,
            scale: 10.0,
            particle_radius: 3.0,
            relaxation_rate: 10.0,
            influence_radius: 120.0,
            connect_threshold: 20.0,
            connect_fade: 50.0,
            link_width: 2.0,
        }
    }
}

/// The running field: particle set, pointer field, and tunables.
///
/// Construction is the only state transition; from then on the host drives
/// [`Simulation::tick`] once per frame and mutates [`Simulation::field`]
/// between ticks from pointer notifications.
pub struct Simulation {
    pub config: FieldConfig,
    pub field: PointerField,
    particles: Vec<Particle>,
}

impl Simulation {
    /// Build the particle set from glyph-sampled rest positions.
    ///
    /// An empty seed list is valid: the simulation runs visibly empty rather
    /// than failing, which is the recovery path for a surface or font that
    /// could not be rasterized.
    pub fn new(config: FieldConfig, rest_positions: Vec<Vec2>) -> Self {
        let field = PointerField::new(config.influence_radius);
        let particles = seed_particles(rest_positions);

        log::info!("✓ Seeded {} particles", particles.len());

        Self {
            config,
            field,
            particles,
        }
    }

    /// Rebuild the particle set, e.g. after the surface was resized and the
    /// glyph re-sampled. Pointer state and tunables carry over.
    pub fn reseed(&mut self, rest_positions: Vec<Vec2>) {
        self.particles = seed_particles(rest_positions);
        log::info!("✓ Reseeded {} particles", self.particles.len());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One frame: clear, draw + update every particle in set order, then the
    /// connector pass over the final positions. Synchronous and infallible;
    /// scheduling the next tick is the host's job.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        surface.clear();

        for p in &mut self.particles {
            particle::draw(p, surface, &self.config);
            particle::update(p, &self.field, &self.config);
        }

        connect(&self.particles, surface, &self.config);
    }
}

fn seed_particles(rest_positions: Vec<Vec2>) -> Vec<Particle> {
    let mut rng = rand::rng();
    rest_positions
        .into_iter()
        .map(|rest| Particle::at_rest(rest, rng.random::<f32>() * 10.0 + 1.0))
        .collect()
}
