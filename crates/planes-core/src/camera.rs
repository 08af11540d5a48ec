use crate::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_Z};
use crate::raycast::Ray;
use crate::viewport::ViewportState;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Vertical field of view (degrees) that makes one world unit equal one CSS
/// pixel on the z = 0 plane for a camera at `camera_z`.
#[inline]
pub fn fov_for_height(height: f32, camera_z: f32) -> f32 {
    2.0 * (height / 2.0 / camera_z).atan().to_degrees()
}

/// Perspective camera looking down -z at the origin from `(0, 0, z)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub z: f32,
}

impl CameraState {
    pub fn new(viewport: &ViewportState) -> Self {
        let mut camera = Self {
            fov_degrees: 0.0,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            z: CAMERA_Z,
        };
        camera.update(viewport);
        camera
    }

    /// Re-derives field of view and aspect ratio from the viewport.
    pub fn update(&mut self, viewport: &ViewportState) {
        self.fov_degrees = fov_for_height(viewport.height_f32(), self.z);
        self.aspect = viewport.aspect();
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.z)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let origin = self.eye();
        Ray {
            origin,
            direction: (p1 - origin).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_height_projects_to_top_edge() {
        let viewport = ViewportState::new(1000.0, 800.0, 1.0);
        let cam = CameraState::new(&viewport);
        let clip = cam.view_projection() * Vec4::new(500.0, 400.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!((ndc.x - 1.0).abs() < 1e-4, "ndc.x = {}", ndc.x);
        assert!((ndc.y - 1.0).abs() < 1e-4, "ndc.y = {}", ndc.y);
    }

    #[test]
    fn center_ray_points_straight_down_the_axis() {
        let cam = CameraState::new(&ViewportState::new(640.0, 480.0, 1.0));
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, CAMERA_Z));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }
}
