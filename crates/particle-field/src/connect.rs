//! Distance-faded links between near particles.

use crate::particle::Particle;
use crate::simulation::{FieldConfig, LINK_COLOR};
use crate::surface::Surface;

/// Stroke a line for every unordered pair `(i, j)` with `i <= j` whose
/// distance is under `connect_threshold`, fading opacity with distance.
///
/// O(n²) over the set. Deliberate: the field holds low hundreds of particles
/// and the exact pairwise opacity `1 - d / connect_fade` is part of the look.
/// Self-pairs come out as zero-length strokes, which the [`Surface`] contract
/// turns into no-ops.
pub fn connect(particles: &[Particle], surface: &mut dyn Surface, config: &FieldConfig) {
    for i in 0..particles.len() {
        for j in i..particles.len() {
            let a = particles[i].position;
            let b = particles[j].position;
            let distance = a.distance(b);

            if distance < config.connect_threshold {
                // Threshold and fade denominator are coupled: with the
                // defaults (20 / 50) the opacity never leaves [0, 1], but
                // clamp anyway so retuning one constant cannot overshoot.
                let opacity = (1.0 - distance / config.connect_fade).clamp(0.0, 1.0);
                surface.stroke_line(a, b, config.link_width, LINK_COLOR.with_alpha(opacity));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;
    use glam::Vec2;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::at_rest(Vec2::new(x, y), 1.0)
    }

    #[test]
    fn strokes_only_pairs_under_threshold() {
        let cfg = FieldConfig::default();
        // Distances: a-b = 10 (linked), a-c = 30, b-c = 20 (not < 20).
        let particles = [
            particle_at(0.0, 0.0),
            particle_at(10.0, 0.0),
            particle_at(30.0, 0.0),
        ];

        let mut surface = RecordingSurface::default();
        connect(&particles, &mut surface, &cfg);

        // 3 self-pairs plus the single close pair.
        assert_eq!(surface.lines.len(), 4);
        let cross: Vec<_> = surface
            .lines
            .iter()
            .filter(|(a, b, _, _)| a != b)
            .collect();
        assert_eq!(cross.len(), 1);
        assert_eq!(cross[0].0, Vec2::new(0.0, 0.0));
        assert_eq!(cross[0].1, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn opacity_is_one_minus_distance_over_fade() {
        let cfg = FieldConfig::default();
        let particles = [particle_at(0.0, 0.0), particle_at(15.0, 0.0)];

        let mut surface = RecordingSurface::default();
        connect(&particles, &mut surface, &cfg);

        let (_, _, _, color) = surface
            .lines
            .iter()
            .find(|(a, b, _, _)| a != b)
            .expect("close pair must be stroked");
        assert!((color.a - (1.0 - 15.0 / 50.0)).abs() < 1e-6);
    }

    #[test]
    fn grid_stroke_count_matches_brute_force() {
        let cfg = FieldConfig::default();

        // Regular grid wide enough to hold ~500 particles at 14 unit pitch:
        // orthogonal neighbours are linked (14 < 20), diagonals are not
        // (19.79... < 20 is also true, so count them in the oracle too).
        let mut particles = Vec::new();
        for row in 0..20 {
            for col in 0..25 {
                particles.push(particle_at(col as f32 * 14.0, row as f32 * 14.0));
            }
        }
        assert_eq!(particles.len(), 500);

        let mut expected = 0usize;
        for i in 0..particles.len() {
            for j in i..particles.len() {
                if particles[i].position.distance(particles[j].position) < cfg.connect_threshold {
                    expected += 1;
                }
            }
        }

        let mut surface = RecordingSurface::default();
        connect(&particles, &mut surface, &cfg);
        assert_eq!(surface.lines.len(), expected);
    }

    #[test]
    fn coincident_pair_does_not_panic() {
        let cfg = FieldConfig::default();
        let particles = [particle_at(5.0, 5.0), particle_at(5.0, 5.0)];

        let mut surface = RecordingSurface::default();
        connect(&particles, &mut surface, &cfg);

        // Two self-pairs plus the coincident cross pair, all full opacity.
        assert_eq!(surface.lines.len(), 3);
        for (_, _, _, color) in &surface.lines {
            assert_eq!(color.a, 1.0);
        }
    }
}
