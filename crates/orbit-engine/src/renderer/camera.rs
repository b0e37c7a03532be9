use glam::Vec3;

/// Perspective camera mirrored to the host's graphics engine.
///
/// The host owns orbit-control input; this struct holds the pose the app
/// wants while it is driving the camera, plus the projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            fov_deg: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl PerspectiveCamera {
    /// Re-target the camera.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Place the camera on a horizontal circle around the target:
    /// `x = cos(angle) * distance`, `z = sin(angle) * distance`.
    pub fn set_orbit(&mut self, angle: f32, distance: f32, height: f32) {
        self.position = Vec3::new(
            self.target.x + angle.cos() * distance,
            self.target.y + height,
            self.target.z + angle.sin() * distance,
        );
    }

    /// Recompute aspect ratio on viewport resize. Degenerate sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }
}
