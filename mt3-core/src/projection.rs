/// Camera, projection and viewport utilities
use crate::error::Result;
use crate::matrix::Matrix4x4;
use crate::transform::Pose;
use crate::vector::Vector3;

impl Matrix4x4 {
    /// Perspective projection with a finite far plane, depth mapped to `[0, 1]`.
    ///
    /// Degenerate parameters (zero aspect, `fov_y` a multiple of π,
    /// `near == far`) are not rejected and produce infinities or NaNs.
    pub fn perspective_fov(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let cot = 1.0 / (fov_y / 2.0).tan();
        let depth = far - near;
        Self::from_rows([
            [cot / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, cot, 0.0, 0.0],
            [0.0, 0.0, far / depth, 1.0],
            [0.0, 0.0, -near * far / depth, 0.0],
        ])
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x [near, far]`
    /// onto x, y in `[-1, 1]` and z in `[0, 1]`.
    pub fn orthographic(left: f32, top: f32, right: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self::from_rows([
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far - near), 0.0],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                near / (near - far),
                1.0,
            ],
        ])
    }

    /// Maps normalized device coordinates to pixels. Screen Y grows downward.
    pub fn viewport(left: f32, top: f32, width: f32, height: f32, min_depth: f32, max_depth: f32) -> Self {
        Self::from_rows([
            [width / 2.0, 0.0, 0.0, 0.0],
            [0.0, -(height / 2.0), 0.0, 0.0],
            [0.0, 0.0, max_depth - min_depth, 0.0],
            [left + width / 2.0, top + height / 2.0, min_depth, 1.0],
        ])
    }
}

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Perspective,
    /// View-space box edges; depth comes from the camera's clip planes.
    Orthographic {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
}

/// Camera configuration for 3D rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    pub rotation: Vector3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -1.0),
            rotation: Vector3::ZERO,
            fov_y: 0.45,
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
        }
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    /// The camera's own placement in world space.
    pub fn camera_matrix(&self) -> Matrix4x4 {
        Pose::new(Vector3::ONE, self.rotation, self.position).matrix()
    }

    /// Create the view matrix (inverse of the camera placement)
    pub fn view_matrix(&self) -> Result<Matrix4x4> {
        self.camera_matrix().try_inverse()
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4x4 {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4x4::perspective_fov(self.fov_y, self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic {
                left,
                top,
                right,
                bottom,
            } => Matrix4x4::orthographic(left, top, right, bottom, self.near, self.far),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Target screen rectangle and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-screen viewport with depth in `[0, 1]`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    pub fn matrix(&self) -> Matrix4x4 {
        Matrix4x4::viewport(
            self.left,
            self.top,
            self.width,
            self.height,
            self.min_depth,
            self.max_depth,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}
