/// Geometry primitives for 3D rendering
use crate::vector::Vector3;

/// A triangle face defined by three local-space vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector3; 3],
}

impl Triangle {
    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Unnormalized face normal `(v1 - v0) × (v2 - v0)`; its length is twice the area.
    pub fn face_normal(&self) -> Vector3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0)
    }

    /// Map every vertex through `f`, keeping winding order.
    pub fn map<E>(&self, mut f: impl FnMut(Vector3) -> Result<Vector3, E>) -> Result<Self, E> {
        let [v0, v1, v2] = self.vertices;
        Ok(Self::new(f(v0)?, f(v1)?, f(v2)?))
    }
}
