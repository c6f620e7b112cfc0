//! View-frustum culling with AABB tests against planes extracted from a
//! view-projection matrix.

use glam::{Mat4, Vec3, Vec4};

use crate::Aabb;

/// Plane indices into the frustum planes array.
const LEFT: usize = 0;
const RIGHT: usize = 1;
const BOTTOM: usize = 2;
const TOP: usize = 3;
const NEAR: usize = 4;
const FAR: usize = 5;

/// A view frustum defined by six inward-pointing planes.
///
/// Each `Vec4(a, b, c, d)` holds the normalized inward normal `(a,b,c)`
/// and the signed distance term `d`.
#[derive(Clone, Debug)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a combined view-projection matrix
    /// using the Gribb-Hartmann row method. Works for perspective and
    /// orthographic projections with a standard depth range.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];

        let mut planes = [Vec4::ZERO; 6];
        planes[LEFT] = rows[3] + rows[0];
        planes[RIGHT] = rows[3] - rows[0];
        planes[BOTTOM] = rows[3] + rows[1];
        planes[TOP] = rows[3] - rows[1];
        planes[NEAR] = rows[3] + rows[2];
        planes[FAR] = rows[3] - rows[2];

        for plane in &mut planes {
            let len = plane.truncate().length();
            if len > 0.0 {
                *plane /= len;
            }
        }

        Self { planes }
    }

    /// Test whether an AABB is at least partially inside the frustum.
    ///
    /// Uses the p-vertex method: for each plane, take the box corner
    /// furthest along the plane normal; if that corner is behind the
    /// plane, the whole box is outside. Conservative: it may report a
    /// box near a frustum corner as visible, never the reverse.
    pub fn is_visible(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();

            let p = Vec3::new(
                if normal.x >= 0.0 {
                    aabb.max.x
                } else {
                    aabb.min.x
                },
                if normal.y >= 0.0 {
                    aabb.max.y
                } else {
                    aabb.min.y
                },
                if normal.z >= 0.0 {
                    aabb.max.z
                } else {
                    aabb.min.z
                },
            );

            if normal.dot(p) + plane.w < 0.0 {
                return false;
            }
        }
        true
    }
}

/// Per-frame frustum culler, built once from the camera's
/// view-projection matrix and applied to each sector before draws are
/// emitted.
pub struct FrustumCuller {
    frustum: Frustum,
}

impl FrustumCuller {
    /// Create a new culler from the camera's view-projection matrix.
    pub fn new(view_projection: &Mat4) -> Self {
        Self {
            frustum: Frustum::from_view_projection(view_projection),
        }
    }

    /// Returns `true` if the AABB is at least partially inside the frustum.
    pub fn is_visible(&self, aabb: &Aabb) -> bool {
        self.frustum.is_visible(aabb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_vp() -> Mat4 {
        let view = Mat4::look_to_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 1000.0);
        proj * view
    }

    #[test]
    fn test_box_in_front_is_visible() {
        let culler = FrustumCuller::new(&camera_vp());
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -5.0), Vec3::new(1.0, 1.0, -3.0));
        assert!(culler.is_visible(&aabb));
    }

    #[test]
    fn test_box_behind_camera_is_culled() {
        let culler = FrustumCuller::new(&camera_vp());
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 10.0));
        assert!(!culler.is_visible(&aabb));
    }

    #[test]
    fn test_box_far_to_the_side_is_culled() {
        let culler = FrustumCuller::new(&camera_vp());
        let aabb = Aabb::new(Vec3::new(1000.0, -1.0, -6.0), Vec3::new(1002.0, 1.0, -4.0));
        assert!(!culler.is_visible(&aabb));
    }

    #[test]
    fn test_box_straddling_a_plane_is_visible() {
        let culler = FrustumCuller::new(&camera_vp());
        let aabb = Aabb::new(Vec3::new(-100.0, -1.0, -10.0), Vec3::new(1.0, 1.0, -5.0));
        assert!(culler.is_visible(&aabb));
    }

    #[test]
    fn test_box_beyond_far_plane_is_culled() {
        let culler = FrustumCuller::new(&camera_vp());
        let aabb = Aabb::new(
            Vec3::new(0.0, 0.0, -3000.0),
            Vec3::new(1.0, 1.0, -2000.0),
        );
        assert!(!culler.is_visible(&aabb));
    }

    #[test]
    fn test_planes_are_normalized() {
        let frustum = Frustum::from_view_projection(&camera_vp());
        for plane in &frustum.planes {
            let len = plane.truncate().length();
            assert!(
                (len - 1.0).abs() < 1e-4,
                "plane normal not normalized: {len}"
            );
        }
    }
}
