use crate::mesh::{Mesh, Vertex};
use glam::Vec2;
use particle_field::{Color, Surface};
use std::f32::consts::TAU;

/// Tessellating [`Surface`] implementation.
///
/// Collects every draw call of a tick into one triangle [`Mesh`] that the
/// renderer uploads in a single vertex/index buffer pair. Coordinates stay in
/// screen pixels; the shader does the NDC conversion.
pub struct MeshPainter {
    mesh: Mesh,
}

impl MeshPainter {
    pub fn new() -> Self {
        Self { mesh: Mesh::new() }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Segment count for a disc of the given radius. More segments for
    /// bigger discs, clamped so tiny particles stay cheap and huge ones stay
    /// bounded.
    fn disc_segments(radius: f32) -> u32 {
        ((radius * 4.0).ceil() as u32).clamp(12, 48)
    }
}

impl Default for MeshPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MeshPainter {
    fn clear(&mut self) {
        self.mesh.clear();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }

        let segments = Self::disc_segments(radius);
        let base = self.mesh.vertices.len() as u32;

        // Triangle fan around the center vertex.
        self.mesh.vertices.push(Vertex::new(center.into(), color));

        for i in 0..segments {
            let angle = i as f32 / segments as f32 * TAU;
            let pos = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            self.mesh.vertices.push(Vertex::new(pos.into(), color));
        }

        for i in 0..segments {
            let next = (i + 1) % segments;
            self.mesh
                .indices
                .extend_from_slice(&[base, base + 1 + i, base + 1 + next]);
        }
    }

    fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        if width <= 0.0 || color.a <= 0.0 {
            return;
        }

        let delta = b - a;
        let length = delta.length();

        // Zero-length strokes (self-pairs, coincident particles) are no-ops;
        // normalizing the zero vector would smear NaNs across the mesh.
        if length <= f32::EPSILON {
            return;
        }

        let normal = delta.perp() / length * (width / 2.0);

        let base = self.mesh.vertices.len() as u32;
        self.mesh.vertices.push(Vertex::new((a - normal).into(), color));
        self.mesh.vertices.push(Vertex::new((a + normal).into(), color));
        self.mesh.vertices.push(Vertex::new((b + normal).into(), color));
        self.mesh.vertices.push(Vertex::new((b - normal).into(), color));

        self.mesh
            .indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}
