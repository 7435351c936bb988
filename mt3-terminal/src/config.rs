/// Fixed scene constants supplied to the core every frame
use std::time::Duration;

use mt3_core::{Camera, Triangle, Vector3, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Logical screen size in pixels; the terminal grid is scaled from this.
    pub screen_width: u32,
    pub screen_height: u32,
    pub camera_position: Vector3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Local-space vertices of the drawn triangle.
    pub triangle: Triangle,
    /// Radians added to the Y rotation every frame.
    pub rotation_speed: f32,
    /// Translation applied per movement key.
    pub move_step: f32,
    /// Operands of the cross product shown in the readout.
    pub readout: (Vector3, Vector3),
    pub target_fps: u32,
}

impl SceneConfig {
    pub fn camera(&self) -> Camera {
        let mut camera = Camera::new(self.screen_width, self.screen_height)
            .with_position(self.camera_position);
        camera.fov_y = self.fov_y;
        camera.near = self.near;
        camera.far = self.far;
        camera
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.screen_width, self.screen_height)
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.target_fps.max(1)))
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            camera_position: Vector3::new(0.0, 0.0, -1.0),
            fov_y: 0.45,
            near: 0.1,
            far: 100.0,
            triangle: Triangle::new(
                Vector3::new(0.0, 0.05, 0.0),
                Vector3::new(0.1, -0.05, 0.0),
                Vector3::new(-0.1, -0.05, 0.0),
            ),
            rotation_speed: 0.01,
            move_step: 0.01,
            readout: (Vector3::new(1.2, -3.9, 2.5), Vector3::new(2.8, 0.4, -1.3)),
            target_fps: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = SceneConfig::default().camera();
        assert_eq!(camera.position, Vector3::new(0.0, 0.0, -1.0));
        assert!((camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
        assert_eq!(camera.fov_y, 0.45);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 100.0);
    }

    #[test]
    fn test_default_viewport() {
        let viewport = SceneConfig::default().viewport();
        assert_eq!(viewport.width, 1280.0);
        assert_eq!(viewport.height, 720.0);
        assert_eq!((viewport.min_depth, viewport.max_depth), (0.0, 1.0));
    }

    #[test]
    fn test_frame_time() {
        let mut config = SceneConfig::default();
        assert_eq!(config.frame_time(), Duration::from_millis(16));
        config.target_fps = 0;
        assert_eq!(config.frame_time(), Duration::from_millis(1000));
    }
}
