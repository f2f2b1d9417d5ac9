//! Drawing seam between the simulation and its rendering backend.

use glam::Vec2;

/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Convert sRGB color (0-255) to linear space
    /// Uses proper sRGB gamma correction (ITU-R BT.709)
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Approximate ((x + 0.055) / 1.055)^2.4 with a polynomial
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

/// 2D drawing target the simulation paints into every tick.
///
/// Contract notes:
/// - `stroke_line` with coincident endpoints must be a no-op. The caller may
///   legitimately emit zero-length strokes (self-pairs in the connector pass)
///   and the implementation must not normalize a zero vector.
/// - None of these operations may fail; a backend that loses its target
///   reports that on present, not here.
pub trait Surface {
    /// Reset the surface for a fresh frame.
    fn clear(&mut self);

    /// Paint a filled disc centered at `center`.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color);

    /// Stroke a straight segment from `a` to `b`.
    fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_white_is_linear_one() {
        let white = Color::from_srgba(255, 255, 255, 255);
        assert!((white.r - 1.0).abs() < 1e-2);
        assert!((white.g - 1.0).abs() < 1e-2);
        assert!((white.b - 1.0).abs() < 1e-2);
        assert_eq!(white.a, 1.0);
    }

    #[test]
    fn with_alpha_only_touches_alpha() {
        let c = Color::rgb(0.2, 0.4, 0.6).with_alpha(0.5);
        assert_eq!(c.r, 0.2);
        assert_eq!(c.g, 0.4);
        assert_eq!(c.b, 0.6);
        assert_eq!(c.a, 0.5);
    }
}
