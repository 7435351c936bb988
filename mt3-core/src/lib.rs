/// MT3 Core Library - homogeneous transformation and projection math
///
/// Row-major 4x4 matrices acting on row vectors (`v' = v · M`), the
/// constructors needed to move a mesh from model space to the screen,
/// and the per-frame chain that ties them together.

pub mod error;
pub mod geometry;
pub mod matrix;
pub mod pipeline;
pub mod projection;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use error::MathError;
pub use geometry::Triangle;
pub use matrix::Matrix4x4;
pub use pipeline::FrameTransforms;
pub use projection::{Camera, ProjectionMode, Viewport};
pub use transform::{transform_point, try_transform_point, Pose};
pub use vector::Vector3;
