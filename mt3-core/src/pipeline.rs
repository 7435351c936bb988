/// Per-frame transform chain from local model space to screen space
use crate::error::Result;
use crate::geometry::Triangle;
use crate::matrix::Matrix4x4;
use crate::projection::{Camera, Viewport};
use crate::transform::{try_transform_point, Pose};
use crate::vector::Vector3;

/// Every matrix involved in drawing one frame, rebuilt from scratch each time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub world: Matrix4x4,
    pub camera: Matrix4x4,
    pub view: Matrix4x4,
    pub projection: Matrix4x4,
    pub world_view_projection: Matrix4x4,
    pub viewport: Matrix4x4,
}

impl FrameTransforms {
    /// Fails only if the camera placement is singular.
    pub fn new(object: &Pose, camera: &Camera, viewport: &Viewport) -> Result<Self> {
        let world = object.matrix();
        let camera_matrix = camera.camera_matrix();
        let view = camera_matrix.try_inverse()?;
        let projection = camera.projection_matrix();
        let world_view_projection = world.multiply(&view.multiply(&projection));

        Ok(Self {
            world,
            camera: camera_matrix,
            view,
            projection,
            world_view_projection,
            viewport: viewport.matrix(),
        })
    }

    /// Local vertex to normalized device coordinates.
    pub fn to_ndc(&self, local: Vector3) -> Result<Vector3> {
        try_transform_point(local, &self.world_view_projection)
    }

    /// Local vertex to screen pixels: one divide into NDC, one through the viewport.
    pub fn project_vertex(&self, local: Vector3) -> Result<Vector3> {
        let ndc = self.to_ndc(local)?;
        try_transform_point(ndc, &self.viewport)
    }

    pub fn project_triangle(&self, triangle: &Triangle) -> Result<Triangle> {
        triangle.map(|v| self.project_vertex(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_right_associated() {
        let object = Pose::new(
            Vector3::new(1.0, 2.0, 1.0),
            Vector3::new(0.1, 0.7, -0.2),
            Vector3::new(0.3, 0.0, 2.0),
        );
        let camera = Camera::default().with_position(Vector3::new(0.5, 0.5, -3.0));
        let frame = FrameTransforms::new(&object, &camera, &Viewport::default())
            .expect("camera is invertible");

        let expected = frame.world * (frame.view * frame.projection);
        assert_eq!(frame.world_view_projection, expected);
        assert!(frame
            .camera
            .multiply(&frame.view)
            .abs_diff_eq(&Matrix4x4::identity(), 1e-5));
    }
}
