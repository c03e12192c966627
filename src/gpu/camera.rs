//! Perspective camera for the offscreen scene passes.

use glam::{Mat4, Vec3};

/// Simple look-at perspective camera.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Default framing: pulled back on +Z, looking at the origin.
    pub fn framing(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 50.0_f32.to_radians(),
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 200.0,
        }
    }

    /// Same framing rotated around the Y axis, for a slow orbit.
    pub fn orbited(&self, angle: f32) -> Self {
        let offset = self.eye - self.target;
        let rotated = Mat4::from_rotation_y(angle).transform_vector3(offset);
        Self {
            eye: self.target + rotated,
            ..*self
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        proj * view
    }
}
