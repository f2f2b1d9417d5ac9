//! Turns a line of text into particle rest positions.
//!
//! The pipeline has two halves:
//! 1. [`TextRaster::rasterize_text_coverage`] shapes the line with
//!    `cosmic-text` and composites the swash coverage bitmaps of every
//!    glyph into a single [`GlyphMask`].
//! 2. [`sample_mask`] raster-scans the mask and emits one rest position per
//!    cell whose coverage clears [`COVERAGE_THRESHOLD`], scaled out to
//!    surface space.
//!
//! [`seed_rest_positions`] wires the two together and centers the scaled
//! silhouette in the surface. Every failure mode (no fonts, empty text,
//! zero-size surface) degrades to an empty seed list with a warning; the
//! caller keeps running with zero particles.

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache, SwashContent};
use glam::Vec2;

/// Minimum glyph coverage for a mask cell to produce a particle.
///
/// Strictly greater-than: a cell at exactly this value does not fire. Hard
/// thresholding means anti-aliased edge pixels mostly drop out, so very thin
/// strokes can under-sample at small font sizes.
pub const COVERAGE_THRESHOLD: u8 = 128;

/// A row-major glyph coverage bitmap, tightly cropped to the inked bounds of
/// the shaped text. One byte per cell, 0 = blank, 255 = fully covered.
#[derive(Clone, Debug)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    /// Row-major coverage bytes, length = `width * height`.
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    /// Build a mask from raw coverage bytes.
    ///
    /// Panics if `coverage.len() != width * height`; masks are always
    /// constructed internally or by tests with matching dimensions.
    pub fn new(width: u32, height: u32, coverage: Vec<u8>) -> Self {
        assert_eq!(coverage.len(), (width * height) as usize);
        Self {
            width,
            height,
            coverage,
        }
    }

    fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; (width * height) as usize],
        }
    }

    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        self.coverage[(y * self.width + x) as usize]
    }
}

/// Text shaping + rasterization state.
///
/// Owns the `cosmic-text` font system (system fonts via `fontdb`; nothing is
/// bundled) and the swash raster cache. Construct once and reuse; reseeding
/// on resize hits the cache.
pub struct TextRaster {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRaster {
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        log::info!(
            "✓ Font system loaded ({} faces)",
            font_system.db().faces().count()
        );

        Self {
            font_system,
            swash_cache: SwashCache::new(),
        }
    }

    /// Shape `text` as a single unwrapped line at `font_px` and composite the
    /// glyph coverage bitmaps into one mask cropped to the inked bounds.
    ///
    /// Returns `None` when nothing gets inked: empty text, no usable font
    /// face, or glyphs that rasterize to color bitmaps instead of coverage
    /// masks.
    pub fn rasterize_text_coverage(&mut self, text: &str, font_px: f32) -> Option<GlyphMask> {
        let metrics = Metrics::new(font_px, font_px * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        // Prevent wrapping: one line, effectively unbounded width.
        buffer.set_size(
            &mut self.font_system,
            Some(f32::MAX),
            Some(metrics.line_height),
        );
        buffer.set_text(
            &mut self.font_system,
            text,
            &Attrs::new(),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        // Collect each glyph's coverage bitmap together with its top-left
        // position. `LayoutGlyph::physical` gives the exact swash cache key
        // plus integer placement offsets; the swash placement then supplies
        // the bearing (left positive right, top positive up from baseline).
        let mut images = Vec::new();
        if let Some(run) = buffer.layout_runs().next() {
            let baseline_y = run.line_y as i32;

            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, 0.0), 1.0);

                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                    .clone()
                else {
                    continue;
                };

                if image.content != SwashContent::Mask {
                    continue;
                }
                if image.placement.width == 0 || image.placement.height == 0 {
                    continue;
                }

                let left = physical.x + image.placement.left;
                let top = baseline_y + physical.y - image.placement.top;
                images.push((image, left, top));
            }
        }

        if images.is_empty() {
            return None;
        }

        // Crop the mask to the union of the glyph boxes so the caller can
        // center the silhouette without measuring ink itself.
        let min_x = images.iter().map(|(_, x, _)| *x).min()?;
        let min_y = images.iter().map(|(_, _, y)| *y).min()?;
        let max_x = images
            .iter()
            .map(|(image, x, _)| x + image.placement.width as i32)
            .max()?;
        let max_y = images
            .iter()
            .map(|(image, _, y)| y + image.placement.height as i32)
            .max()?;

        let mut mask = GlyphMask::blank((max_x - min_x) as u32, (max_y - min_y) as u32);

        for (image, left, top) in &images {
            let w = image.placement.width as usize;

            for row in 0..image.placement.height as usize {
                let src = &image.data[row * w..(row + 1) * w];
                let dst_y = (top - min_y) as usize + row;
                let dst_x = (left - min_x) as usize;
                let dst_row = dst_y * mask.width as usize + dst_x;

                // Max-blend where adjacent glyph boxes overlap.
                for (dst, &src) in mask.coverage[dst_row..dst_row + w].iter_mut().zip(src) {
                    *dst = (*dst).max(src);
                }
            }
        }

        Some(mask)
    }
}

impl Default for TextRaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Raster-scan `mask` (row major, y outer) and emit one surface-space
/// position per cell with coverage strictly above [`COVERAGE_THRESHOLD`].
///
/// Cell `(x, y)` maps to `(x * scale, y * scale) + offset`. The output order
/// is deterministic for a fixed mask.
pub fn sample_mask(mask: &GlyphMask, scale: f32, offset: Vec2) -> Vec<Vec2> {
    let mut positions = Vec::new();

    for y in 0..mask.height {
        for x in 0..mask.width {
            if mask.coverage_at(x, y) > COVERAGE_THRESHOLD {
                positions.push(Vec2::new(x as f32 * scale, y as f32 * scale) + offset);
            }
        }
    }

    positions
}

/// Offset that centers the scaled mask in a `surface_w` x `surface_h`
/// surface.
pub fn centering_offset(mask: &GlyphMask, scale: f32, surface_w: f32, surface_h: f32) -> Vec2 {
    Vec2::new(
        (surface_w - mask.width as f32 * scale) / 2.0,
        (surface_h - mask.height as f32 * scale) / 2.0,
    )
}

/// Rasterize `text` and sample it into rest positions centered in the
/// surface.
///
/// Returns an empty list (with a warning) when the surface has no area or
/// the text produces no coverage; the simulation simply runs with zero
/// particles.
pub fn seed_rest_positions(
    raster: &mut TextRaster,
    text: &str,
    font_px: f32,
    scale: f32,
    surface_w: f32,
    surface_h: f32,
) -> Vec<Vec2> {
    if surface_w <= 0.0 || surface_h <= 0.0 {
        log::warn!("Zero-size surface, seeding no particles");
        return Vec::new();
    }

    let Some(mask) = raster.rasterize_text_coverage(text, font_px) else {
        log::warn!("No glyph coverage for {text:?}, seeding no particles");
        return Vec::new();
    };

    let offset = centering_offset(&mask, scale, surface_w, surface_h);
    sample_mask(&mask, scale, offset)
}
