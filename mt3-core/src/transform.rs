/// Affine transformation matrices, point transforms and pose state
use crate::error::{MathError, Result};
use crate::matrix::Matrix4x4;
use crate::vector::Vector3;

impl Matrix4x4 {
    /// Identity with the diagonal replaced by `(s.x, s.y, s.z, 1)`.
    pub fn scale(s: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        result.m[0][0] = s.x;
        result.m[1][1] = s.y;
        result.m[2][2] = s.z;
        result
    }

    /// Rotation about the X axis (Y/Z plane).
    pub fn rotate_x(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        let mut result = Self::IDENTITY;
        result.m[1][1] = cos;
        result.m[1][2] = sin;
        result.m[2][1] = -sin;
        result.m[2][2] = cos;
        result
    }

    /// Rotation about the Y axis (Z/X plane).
    pub fn rotate_y(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        let mut result = Self::IDENTITY;
        result.m[0][0] = cos;
        result.m[0][2] = -sin;
        result.m[2][0] = sin;
        result.m[2][2] = cos;
        result
    }

    /// Rotation about the Z axis (X/Y plane).
    pub fn rotate_z(radian: f32) -> Self {
        let (sin, cos) = radian.sin_cos();
        let mut result = Self::IDENTITY;
        result.m[0][0] = cos;
        result.m[0][1] = sin;
        result.m[1][0] = -sin;
        result.m[1][1] = cos;
        result
    }

    /// Combined rotation `X · (Y · Z)`.
    pub fn rotate(r: Vector3) -> Self {
        let x = Self::rotate_x(r.x);
        let y = Self::rotate_y(r.y);
        let z = Self::rotate_z(r.z);
        x.multiply(&y.multiply(&z))
    }

    /// Identity with row 3 set to `(t.x, t.y, t.z, 1)`.
    pub fn translate(t: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        result.m[3][0] = t.x;
        result.m[3][1] = t.y;
        result.m[3][2] = t.z;
        result
    }

    /// `Scale · (Rotate · Translate)`: scale first, then rotate, then move.
    pub fn affine(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        let s = Self::scale(scale);
        let r = Self::rotate(rotate);
        let t = Self::translate(translate);
        s.multiply(&r.multiply(&t))
    }
}

/// Homogeneous product `(v, 1) · M`, returned with its `w` undivided.
fn homogeneous(v: Vector3, m: &Matrix4x4) -> (Vector3, f32) {
    let m = &m.m;
    let column = |j: usize| v.x * m[0][j] + v.y * m[1][j] + v.z * m[2][j] + m[3][j];
    (Vector3::new(column(0), column(1), column(2)), column(3))
}

/// Transform a point and apply the perspective divide.
///
/// The divide is unguarded: `w == 0` yields infinite or NaN components.
pub fn transform_point(v: Vector3, m: &Matrix4x4) -> Vector3 {
    let (p, w) = homogeneous(v, m);
    if w == 0.0 {
        tracing::trace!(?v, "perspective divide by zero w");
    }
    Vector3::new(p.x / w, p.y / w, p.z / w)
}

/// Like [`transform_point`], but rejects `w == 0` and non-finite results.
pub fn try_transform_point(v: Vector3, m: &Matrix4x4) -> Result<Vector3> {
    let (p, w) = homogeneous(v, m);
    if w == 0.0 {
        return Err(MathError::DegenerateW { w });
    }

    let result = Vector3::new(p.x / w, p.y / w, p.z / w);
    if !result.is_finite() {
        return Err(MathError::NonFinite);
    }
    Ok(result)
}

impl Vector3 {
    /// Method form of [`transform_point`].
    pub fn transform(self, m: &Matrix4x4) -> Vector3 {
        transform_point(self, m)
    }

    /// Method form of [`try_transform_point`].
    pub fn try_transform(self, m: &Matrix4x4) -> Result<Vector3> {
        try_transform_point(self, m)
    }
}

/// Scale, rotation (radians per axis) and translation of an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: Vector3,
    pub rotate: Vector3,
    pub translate: Vector3,
}

impl Pose {
    pub fn new(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        Self {
            scale,
            rotate,
            translate,
        }
    }

    /// Unit scale, no rotation, at the origin.
    pub fn identity() -> Self {
        Self::new(Vector3::ONE, Vector3::ZERO, Vector3::ZERO)
    }

    /// Unit scale and no rotation, placed at `position`.
    pub fn at(position: Vector3) -> Self {
        Self::new(Vector3::ONE, Vector3::ZERO, position)
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate_by(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotate += Vector3::new(dx, dy, dz);
    }

    pub fn translate_by(&mut self, dx: f32, dy: f32, dz: f32) {
        self.translate += Vector3::new(dx, dy, dz);
    }

    pub fn matrix(&self) -> Matrix4x4 {
        Matrix4x4::affine(self.scale, self.rotate, self.translate)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_scale_diagonal() {
        let m = Matrix4x4::scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.m[0][0], 2.0);
        assert_eq!(m.m[1][1], 3.0);
        assert_eq!(m.m[2][2], 4.0);
        assert_eq!(m.m[3][3], 1.0);
        assert_eq!(m.m[0][1], 0.0);
    }

    #[test]
    fn test_scale_determinant_is_product() {
        let cases = [(2.0, 3.0, 4.0), (-1.5, 0.25, 8.0), (0.1, -0.2, -3.0)];
        for (sx, sy, sz) in cases {
            let det = Matrix4x4::scale(Vector3::new(sx, sy, sz)).determinant();
            let expected: f32 = sx * sy * sz;
            assert!((det - expected).abs() <= expected.abs() * 1e-6);
        }
    }

    #[test]
    fn test_rotation_sign_patterns() {
        let angle = 0.3_f32;
        let (sin, cos) = angle.sin_cos();

        let x = Matrix4x4::rotate_x(angle);
        assert_eq!(x.m[1], [0.0, cos, sin, 0.0]);
        assert_eq!(x.m[2], [0.0, -sin, cos, 0.0]);

        let y = Matrix4x4::rotate_y(angle);
        assert_eq!(y.m[0], [cos, 0.0, -sin, 0.0]);
        assert_eq!(y.m[2], [sin, 0.0, cos, 0.0]);

        let z = Matrix4x4::rotate_z(angle);
        assert_eq!(z.m[0], [cos, sin, 0.0, 0.0]);
        assert_eq!(z.m[1], [-sin, cos, 0.0, 0.0]);
    }

    #[test]
    fn test_quarter_turns_follow_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert!(y.transform(&Matrix4x4::rotate_x(FRAC_PI_2)).abs_diff_eq(z, 1e-6));
        assert!(z.transform(&Matrix4x4::rotate_y(FRAC_PI_2)).abs_diff_eq(x, 1e-6));
        assert!(x.transform(&Matrix4x4::rotate_z(FRAC_PI_2)).abs_diff_eq(y, 1e-6));
    }

    #[test]
    fn test_rotate_composition_order() {
        let r = Vector3::new(0.4, 1.3, -0.7);
        let expected = Matrix4x4::rotate_x(r.x)
            .multiply(&Matrix4x4::rotate_y(r.y).multiply(&Matrix4x4::rotate_z(r.z)));
        assert_eq!(Matrix4x4::rotate(r), expected);

        let reversed = Matrix4x4::rotate_z(r.z) * Matrix4x4::rotate_y(r.y) * Matrix4x4::rotate_x(r.x);
        assert!(!Matrix4x4::rotate(r).abs_diff_eq(&reversed, 1e-3));
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Matrix4x4::rotate(Vector3::ZERO);
        assert!(matrix.abs_diff_eq(&Matrix4x4::identity(), 1e-6));
    }

    #[test]
    fn test_translate_row() {
        let m = Matrix4x4::translate(Vector3::new(4.1, 2.6, 0.8));
        assert_eq!(m.m[3], [4.1, 2.6, 0.8, 1.0]);
    }

    #[test]
    fn test_affine_matches_components() {
        let scale = Vector3::new(1.2, 0.79, -2.1);
        let rotate = Vector3::new(0.4, 1.43, -0.8);
        let translate = Vector3::new(2.7, -4.15, 1.57);

        let affine = Matrix4x4::affine(scale, rotate, translate);
        let expected = Matrix4x4::scale(scale)
            * (Matrix4x4::rotate(rotate) * Matrix4x4::translate(translate));
        assert_eq!(affine, expected);

        // translation is applied last, so it lands in row 3 untouched
        assert!((affine.m[3][0] - 2.7).abs() < 1e-6);
        assert!((affine.m[3][1] + 4.15).abs() < 1e-6);
        assert!((affine.m[3][2] - 1.57).abs() < 1e-6);
    }

    #[test]
    fn test_transform_origin_by_identity() {
        let origin = Vector3::ZERO;
        assert_eq!(origin.transform(&Matrix4x4::identity()), origin);
    }

    #[test]
    fn test_transform_by_translation() {
        let v = Vector3::new(1.5, -2.0, 3.25);
        let t = Vector3::new(0.5, 4.0, -1.25);
        let moved = v.transform(&Matrix4x4::translate(t));
        assert_eq!(moved, Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_transform_divides_by_w() {
        let mut m = Matrix4x4::identity();
        m.m[3][3] = 2.0;
        let v = Vector3::new(2.0, 4.0, 6.0).transform(&m);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_zero_w_is_unguarded() {
        let mut m = Matrix4x4::identity();
        m.m[3][3] = 0.0;

        let v = Vector3::new(1.0, -1.0, 0.0).transform(&m);
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_try_transform_rejects_zero_w() {
        let mut m = Matrix4x4::identity();
        m.m[3][3] = 0.0;

        let result = Vector3::new(1.0, 2.0, 3.0).try_transform(&m);
        assert_eq!(result, Err(MathError::DegenerateW { w: 0.0 }));

        let ok = Vector3::new(1.0, 2.0, 3.0).try_transform(&Matrix4x4::identity());
        assert_eq!(ok, Ok(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_try_transform_rejects_non_finite() {
        let v = Vector3::new(f32::NAN, 0.0, 0.0);
        assert_eq!(
            v.try_transform(&Matrix4x4::identity()),
            Err(MathError::NonFinite)
        );
    }

    #[test]
    fn test_pose_state() {
        let mut pose = Pose::identity();
        assert_eq!(pose.rotate, Vector3::ZERO);

        pose.rotate_by(0.1, 0.2, 0.3);
        assert!((pose.rotate.x - 0.1).abs() < 1e-6);
        assert!((pose.rotate.y - 0.2).abs() < 1e-6);
        assert!((pose.rotate.z - 0.3).abs() < 1e-6);

        pose.translate_by(1.0, 0.0, -1.0);
        assert_eq!(pose.translate, Vector3::new(1.0, 0.0, -1.0));
        assert_eq!(
            pose.matrix(),
            Matrix4x4::affine(pose.scale, pose.rotate, pose.translate)
        );
    }

    #[test]
    fn test_pose_at_is_translation() {
        let pose = Pose::at(Vector3::new(0.0, 0.0, -1.0));
        assert!(pose
            .matrix()
            .abs_diff_eq(&Matrix4x4::translate(Vector3::new(0.0, 0.0, -1.0)), 1e-6));
    }
}
