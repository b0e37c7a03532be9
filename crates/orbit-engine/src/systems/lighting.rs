//! Directional light (the sun).
//!
//! The host treats `position` as the light's source point aimed at the
//! origin, which is how most web engines model directional lights.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    /// 0xRRGGBB
    pub color: u32,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(-2.0, 0.5, 1.5),
            color: 0xffffff,
            intensity: 1.0,
        }
    }
}

impl DirectionalLight {
    pub fn new(color: u32, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Unit vector from the light toward the origin.
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}
