//! Projection for the particle canvas.
//!
//! The view is a flat orthographic mapping onto exact canvas pixel
//! dimensions, y-down to match surface coordinates. The near/far range is
//! deliberately huge so the small per-particle depth jitter can never clip.
//! A near-identity skew transform adds a slight depth-proportional drift of
//! screen position, which is all the "perspective" this effect needs.

use glam::Mat4;

/// Depth range of the orthographic volume. Particle depth stays within
/// +/-20, so +/-1000 leaves generous headroom.
pub const DEPTH_RANGE: f32 = 1000.0;

/// Skew applied by the widget's model transform.
pub const DEFAULT_SKEW: f32 = 0.0015;

/// Orthographic projection mapping canvas pixels to clip space: (0, 0) is
/// the top-left corner, (width, height) the bottom-right.
pub fn pixel_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, height, 0.0, -DEPTH_RANGE, DEPTH_RANGE)
}

/// Near-identity model transform shifting x slightly with depth, so the
/// depth jitter reads as parallax rather than pure size noise. `amount = 0`
/// is exactly the identity.
pub fn skew_model(amount: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.z_axis.x = amount;
    m.z_axis.y = amount * 0.5;
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_projection_maps_canvas_corners_to_clip_corners() {
        let proj = pixel_projection(350.0, 150.0);

        let top_left = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((top_left.x - -1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = proj * Vec4::new(350.0, 150.0, 0.0, 1.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - -1.0).abs() < 1e-6);

        let center = proj * Vec4::new(175.0, 75.0, 0.0, 1.0);
        assert!(center.x.abs() < 1e-6 && center.y.abs() < 1e-6);
    }

    #[test]
    fn test_depth_jitter_never_clips() {
        let proj = pixel_projection(350.0, 150.0);
        for z in [-20.0, 0.0, 20.0, -999.0, 999.0] {
            let clip = proj * Vec4::new(10.0, 10.0, z, 1.0);
            let ndc_z = clip.z / clip.w;
            assert!(
                (0.0..=1.0).contains(&ndc_z),
                "z={} landed outside the clip volume (ndc z={})",
                z,
                ndc_z
            );
        }
    }

    #[test]
    fn test_zero_skew_is_identity() {
        assert_eq!(skew_model(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_skew_is_depth_proportional() {
        let m = skew_model(0.002);

        // Points in the rest plane are untouched.
        let flat = m.transform_point3(Vec3::new(100.0, 40.0, 0.0));
        assert_eq!(flat, Vec3::new(100.0, 40.0, 0.0));

        // Jittered points drift in proportion to their depth.
        let deep = m.transform_point3(Vec3::new(100.0, 40.0, 20.0));
        assert!((deep.x - 100.04).abs() < 1e-4);
        assert!((deep.y - 40.02).abs() < 1e-4);
        assert_eq!(deep.z, 20.0);
    }
}
