//! Projected screen-size metric for bounding spheres.

use glam::{Mat4, Vec3};

/// Squared projected screen radius of a bounding sphere, as seen from
/// `view_origin` through `proj`.
///
/// The multiplier is half the larger of the projection's two focal
/// terms, so the result is expressed in normalized screen units and is
/// independent of which axis the field of view was specified on. The
/// squared distance is clamped to 1 to keep the metric finite when the
/// camera sits inside the sphere.
pub fn screen_radius_sq(radius: f32, center: Vec3, view_origin: Vec3, proj: &Mat4) -> f32 {
    let dist_sq = center.distance_squared(view_origin);
    let screen_multiple = 0.5 * proj.x_axis.x.max(proj.y_axis.y);
    let screen_radius = screen_multiple * radius;
    (screen_radius * screen_radius) / dist_sq.max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proj() -> Mat4 {
        Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 1000.0)
    }

    #[test]
    fn test_shrinks_with_distance() {
        let p = proj();
        let center = Vec3::new(0.0, 0.0, -10.0);
        let near = screen_radius_sq(5.0, center, Vec3::ZERO, &p);
        let far = screen_radius_sq(5.0, center, Vec3::new(0.0, 0.0, 100.0), &p);
        assert!(
            near > far,
            "screen size must shrink with distance: near={near}, far={far}"
        );
    }

    #[test]
    fn test_grows_with_radius() {
        let p = proj();
        let center = Vec3::new(0.0, 0.0, -50.0);
        let small = screen_radius_sq(1.0, center, Vec3::ZERO, &p);
        let big = screen_radius_sq(10.0, center, Vec3::ZERO, &p);
        assert!(big > small);
    }

    #[test]
    fn test_distance_clamped_inside_sphere() {
        let p = proj();
        let at_center = screen_radius_sq(5.0, Vec3::ZERO, Vec3::ZERO, &p);
        let just_off = screen_radius_sq(5.0, Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), &p);
        // Both distances clamp to 1, so the metric is identical.
        assert_eq!(at_center, just_off);
        assert!(at_center.is_finite());
    }

    #[test]
    fn test_uses_larger_focal_term() {
        // With aspect > 1 the vertical focal term is the larger one; a
        // square projection with the same fov must not exceed the wide one.
        let wide = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 1000.0);
        let square = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 1000.0);
        let center = Vec3::new(0.0, 0.0, -20.0);
        let s_wide = screen_radius_sq(2.0, center, Vec3::ZERO, &wide);
        let s_square = screen_radius_sq(2.0, center, Vec3::ZERO, &square);
        assert!((s_wide - s_square).abs() < 1e-6);
    }
}
