//! Particle field construction.
//!
//! Samples a decoded logo bitmap into a set of particles, one per
//! sufficiently opaque pixel. The bitmap is uniformly scaled so its larger
//! side spans 90% of the smaller canvas dimension, centered on the canvas,
//! and resampled at that size; every scaled pixel whose alpha exceeds half
//! of full opacity becomes one particle anchored at that pixel's canvas
//! coordinate.
//!
//! The builder runs once, after the bitmap is decoded. Its output is handed
//! off to the animation loop and never retained here. A fully transparent
//! bitmap yields an empty field; the simulation and draw become no-ops.

use glam::{Vec2, Vec4};
use image::imageops::FilterType;
use image::RgbaImage;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::Particle;

/// Fraction of the smaller canvas dimension the scaled logo spans.
pub const LOGO_FILL: f32 = 0.9;

/// Pixels with alpha at or below this produce no particle (strictly more
/// than 50% of full opacity is required).
pub const ALPHA_THRESHOLD: u8 = 127;

/// Initial depth offsets are drawn uniformly from `[-DEPTH_JITTER, DEPTH_JITTER]`.
pub const DEPTH_JITTER: f32 = 20.0;

/// Particle radius hints are drawn uniformly from `[SIZE_MIN, SIZE_MAX)`.
pub const SIZE_MIN: f32 = 0.9;
pub const SIZE_MAX: f32 = 2.4;

/// Placement of the scaled bitmap on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    /// Uniform scale factor applied to the bitmap.
    pub scale: f32,
    /// Bitmap dimensions after scaling, in canvas pixels (at least 1x1).
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Top-left corner of the scaled bitmap, centering it on the canvas.
    pub offset_x: f32,
    pub offset_y: f32,
}

impl FieldLayout {
    /// Compute the layout for a `bitmap_width` x `bitmap_height` bitmap on a
    /// `canvas_width` x `canvas_height` canvas.
    pub fn new(
        bitmap_width: u32,
        bitmap_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        let longest = bitmap_width.max(bitmap_height).max(1) as f32;
        let scale = LOGO_FILL * canvas_width.min(canvas_height) as f32 / longest;

        let scaled_width = ((bitmap_width as f32 * scale).round() as u32).max(1);
        let scaled_height = ((bitmap_height as f32 * scale).round() as u32).max(1);

        Self {
            scale,
            scaled_width,
            scaled_height,
            offset_x: (canvas_width as f32 - scaled_width as f32) / 2.0,
            offset_y: (canvas_height as f32 - scaled_height as f32) / 2.0,
        }
    }

    /// Canvas-space anchor for the scaled pixel at `(px, py)`.
    pub fn anchor(&self, px: u32, py: u32) -> Vec2 {
        Vec2::new(self.offset_x + px as f32, self.offset_y + py as f32)
    }
}

/// Sample `bitmap` into particles for a canvas of the given dimensions.
pub fn build_field(bitmap: &RgbaImage, canvas_width: u32, canvas_height: u32) -> Vec<Particle> {
    build_field_with_rng(
        bitmap,
        canvas_width,
        canvas_height,
        &mut SmallRng::from_entropy(),
    )
}

/// [`build_field`] with a caller-supplied RNG, for deterministic tests and
/// benches.
pub fn build_field_with_rng<R: Rng>(
    bitmap: &RgbaImage,
    canvas_width: u32,
    canvas_height: u32,
    rng: &mut R,
) -> Vec<Particle> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Vec::new();
    }

    let layout = FieldLayout::new(bitmap.width(), bitmap.height(), canvas_width, canvas_height);
    let scaled = image::imageops::resize(
        bitmap,
        layout.scaled_width,
        layout.scaled_height,
        FilterType::Triangle,
    );

    let mut particles = Vec::new();
    for (px, py, pixel) in scaled.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a <= ALPHA_THRESHOLD {
            continue;
        }

        let color = Vec4::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        );
        let depth = rng.gen_range(-DEPTH_JITTER..=DEPTH_JITTER);
        let size = rng.gen_range(SIZE_MIN..SIZE_MAX);

        particles.push(Particle::at_rest(layout.anchor(px, py), depth, color, size));
    }

    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn seeded_rng() -> SmallRng {
        SmallRng::seed_from_u64(0x10_60)
    }

    #[test]
    fn test_layout_scales_to_smaller_canvas_dimension() {
        // 10x10 logo on a 100x200 canvas: the smaller canvas side is 100, so
        // the logo's longer side scales to 90 pixels.
        let layout = FieldLayout::new(10, 10, 100, 200);
        assert!((layout.scale - 9.0).abs() < f32::EPSILON);
        assert_eq!(layout.scaled_width, 90);
        assert_eq!(layout.scaled_height, 90);
    }

    #[test]
    fn test_layout_centers_the_bitmap() {
        let layout = FieldLayout::new(10, 10, 100, 200);
        assert!((layout.offset_x - 5.0).abs() < f32::EPSILON);
        assert!((layout.offset_y - 55.0).abs() < f32::EPSILON);

        let anchor = layout.anchor(0, 0);
        assert_eq!(anchor, Vec2::new(5.0, 55.0));
        let anchor = layout.anchor(89, 89);
        assert_eq!(anchor, Vec2::new(94.0, 144.0));
    }

    #[test]
    fn test_layout_preserves_aspect_ratio() {
        // Wide logo: the longer side (width) maps to 90% of the smaller
        // canvas side, the height follows proportionally.
        let layout = FieldLayout::new(200, 50, 400, 100);
        assert!((layout.scale - 0.45).abs() < 1e-6);
        assert_eq!(layout.scaled_width, 90);
        assert_eq!(layout.scaled_height, 23); // 22.5 rounded
    }

    #[test]
    fn test_layout_never_collapses_to_zero() {
        let layout = FieldLayout::new(4000, 2, 10, 10);
        assert_eq!(layout.scaled_height, 1);
    }

    #[test]
    fn test_opaque_bitmap_yields_one_particle_per_scaled_pixel() {
        let bitmap = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let particles = build_field_with_rng(&bitmap, 100, 100, &mut seeded_rng());
        // Scale 9.0: the scaled bitmap is 90x90.
        assert_eq!(particles.len(), 90 * 90);
    }

    #[test]
    fn test_transparent_bitmap_yields_empty_field() {
        let bitmap = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 0]));
        let particles = build_field_with_rng(&bitmap, 100, 100, &mut seeded_rng());
        assert!(particles.is_empty());
    }

    #[test]
    fn test_alpha_threshold_is_half_opacity() {
        // 127 is at the threshold and must not produce particles; 128 is
        // strictly above it and must.
        let below = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 127]));
        let above = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 128]));
        assert!(build_field_with_rng(&below, 20, 20, &mut seeded_rng()).is_empty());
        assert!(!build_field_with_rng(&above, 20, 20, &mut seeded_rng()).is_empty());
    }

    #[test]
    fn test_color_round_trip() {
        let bitmap = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        let particles = build_field_with_rng(&bitmap, 40, 40, &mut seeded_rng());
        for p in &particles {
            assert_eq!(p.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_particles_start_at_rest_in_a_flat_plane() {
        let bitmap = RgbaImage::from_pixel(8, 8, Rgba([0, 128, 255, 255]));
        let particles = build_field_with_rng(&bitmap, 80, 80, &mut seeded_rng());
        assert!(!particles.is_empty());
        for p in &particles {
            assert_eq!(p.origin.z, 0.0);
            assert_eq!(p.position.x, p.origin.x);
            assert_eq!(p.position.y, p.origin.y);
            assert!(p.position.z.abs() <= DEPTH_JITTER);
            assert_eq!(p.velocity.length_squared(), 0.0);
            assert!(p.size >= SIZE_MIN && p.size < SIZE_MAX);
        }
    }

    #[test]
    fn test_empty_bitmap_is_not_an_error() {
        let bitmap = RgbaImage::new(0, 0);
        let particles = build_field_with_rng(&bitmap, 100, 100, &mut seeded_rng());
        assert!(particles.is_empty());
    }
}
