//! Camera state
//!
//! Only the parameters commands can change are tracked here; orbit controls
//! and projection live with the renderer.

use vecviz_math::Vec3;

/// Vertical field of view used until a command changes it
pub const DEFAULT_FOV_DEGREES: f64 = 90.0;

/// Orbit speed applied when auto-rotation is switched on
pub const AUTO_ROTATE_SPEED: f64 = -2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Vertical field of view in degrees
    pub fov_degrees: f64,
    /// Point the orbit controls look at
    pub target: Vec3,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            target: Vec3::zeros(),
            auto_rotate: false,
            auto_rotate_speed: 0.0,
        }
    }
}

impl CameraState {
    pub fn set_fov(&mut self, degrees: f64) {
        self.fov_degrees = degrees;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
        self.auto_rotate_speed = AUTO_ROTATE_SPEED;
    }
}
