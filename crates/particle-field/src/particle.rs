//! Particle data and per-tick motion.

use glam::Vec2;

use crate::field::PointerField;
use crate::simulation::{FieldConfig, PARTICLE_COLOR};
use crate::surface::Surface;

/// Once the remaining offset to rest is below this on an axis, snap to rest.
/// The relaxation formula alone decays forever without reaching zero.
pub const SNAP_EPSILON: f32 = 1e-3;

/// One point mass of the field.
///
/// Plain data processed by the free functions below; draw size and
/// relaxation rate are shared tunables in [`FieldConfig`] rather than
/// per-particle state, since they are constant across the whole set.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Current position, mutated every tick.
    pub position: Vec2,
    /// Glyph-derived anchor, fixed at creation.
    pub rest: Vec2,
    /// Random scalar in [1, 11) scaling how hard the pointer pushes this
    /// particle, fixed at creation.
    pub responsiveness: f32,
}

impl Particle {
    /// Create a particle sitting exactly at its rest position.
    pub fn at_rest(rest: Vec2, responsiveness: f32) -> Self {
        Self {
            position: rest,
            rest,
            responsiveness,
        }
    }
}

/// Paint the particle as a filled disc.
pub fn draw(particle: &Particle, surface: &mut dyn Surface, config: &FieldConfig) {
    surface.fill_disc(particle.position, config.particle_radius, PARTICLE_COLOR);
}

/// Advance the particle by one tick.
///
/// Inside the influence radius the particle is pushed directly away from the
/// pointer, scaled by how close the pointer is and by the particle's own
/// responsiveness. Outside it (or with no pointer at all) each axis decays
/// toward rest by `offset / relaxation_rate` per tick.
pub fn update(particle: &mut Particle, field: &PointerField, config: &FieldConfig) {
    if let Some(pointer) = field.pointer() {
        let delta = pointer - particle.position;
        let distance = delta.length();

        if distance < field.radius {
            // distance == 0 leaves the direction undefined; skip the push
            // rather than divide by zero and poison the position with NaN.
            if distance > 0.0 {
                let motion_force = (field.radius - distance) / field.radius;
                particle.position -= delta / distance * motion_force * particle.responsiveness;
            }
            return;
        }
    }

    relax(particle, config.relaxation_rate);
}

fn relax(particle: &mut Particle, relaxation_rate: f32) {
    let mut offset = particle.position - particle.rest;
    offset -= offset / relaxation_rate;

    if offset.x.abs() < SNAP_EPSILON {
        offset.x = 0.0;
    }
    if offset.y.abs() < SNAP_EPSILON {
        offset.y = 0.0;
    }

    particle.position = particle.rest + offset;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::FieldConfig;

    fn config() -> FieldConfig {
        FieldConfig::default()
    }

    fn field_at(x: f32, y: f32) -> PointerField {
        let mut field = PointerField::new(config().influence_radius);
        field.set(Vec2::new(x, y));
        field
    }

    #[test]
    fn starts_at_rest() {
        let p = Particle::at_rest(Vec2::new(40.0, 60.0), 5.0);
        assert_eq!(p.position, p.rest);
    }

    #[test]
    fn pointer_inside_radius_pushes_away() {
        let cfg = config();
        // Pointer 50 units to the right of the particle.
        let mut p = Particle::at_rest(Vec2::new(100.0, 100.0), 4.0);
        let field = field_at(150.0, 100.0);

        update(&mut p, &field, &cfg);

        // Pushed left, never toward the pointer, y untouched.
        assert!(p.position.x < 100.0);
        assert_eq!(p.position.y, 100.0);

        // motion_force = (120 - 50) / 120, displacement = force * responsiveness.
        let expected = 100.0 - (120.0 - 50.0) / 120.0 * 4.0;
        assert!((p.position.x - expected).abs() < 1e-4);
    }

    #[test]
    fn zero_distance_is_a_no_op() {
        let cfg = config();
        let mut p = Particle::at_rest(Vec2::new(100.0, 100.0), 7.0);
        let field = field_at(100.0, 100.0);

        update(&mut p, &field, &cfg);

        assert_eq!(p.position, Vec2::new(100.0, 100.0));
        assert!(p.position.x.is_finite() && p.position.y.is_finite());
    }

    #[test]
    fn relaxes_by_offset_over_rate() {
        let cfg = config();
        let mut p = Particle::at_rest(Vec2::new(0.0, 0.0), 3.0);
        p.position = Vec2::new(100.0, 0.0);

        // Pointer just outside the influence radius.
        let field = field_at(p.position.x + cfg.influence_radius + 1.0, 0.0);
        update(&mut p, &field, &cfg);

        // offset 100, relaxation_rate 10 -> moves exactly 10 units this tick.
        assert!((p.position.x - 90.0).abs() < 1e-4);
    }

    #[test]
    fn no_pointer_means_pure_relaxation() {
        let cfg = config();
        let field = PointerField::new(cfg.influence_radius);
        let mut p = Particle::at_rest(Vec2::new(10.0, 20.0), 3.0);
        p.position = Vec2::new(30.0, 20.0);

        update(&mut p, &field, &cfg);
        assert!((p.position.x - 28.0).abs() < 1e-4);
        assert_eq!(p.position.y, 20.0);
    }

    #[test]
    fn relaxation_strictly_converges_to_rest() {
        let cfg = config();
        let field = PointerField::new(cfg.influence_radius);
        let mut p = Particle::at_rest(Vec2::new(0.0, 0.0), 3.0);
        p.position = Vec2::new(57.3, -12.9);

        let mut last = p.position.distance(p.rest);
        for _ in 0..500 {
            update(&mut p, &field, &cfg);
            let now = p.position.distance(p.rest);
            if now == 0.0 {
                break;
            }
            assert!(now < last, "distance to rest must strictly decrease");
            last = now;
        }

        assert_eq!(p.position, p.rest, "snap epsilon must finish the decay");
    }

    #[test]
    fn decay_factor_matches_relaxation_rate() {
        let cfg = config();
        let field = PointerField::new(cfg.influence_radius);
        let mut p = Particle::at_rest(Vec2::ZERO, 3.0);
        p.position = Vec2::new(64.0, 0.0);

        let factor = 1.0 - 1.0 / cfg.relaxation_rate;
        let mut expected = 64.0;
        for _ in 0..5 {
            update(&mut p, &field, &cfg);
            expected *= factor;
            assert!((p.position.x - expected).abs() < 1e-3);
        }
    }
}
