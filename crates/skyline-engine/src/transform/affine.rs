use core::ops::{Mul, MulAssign};

use crate::coords::Vec2;

/// 2D affine transform as a 3x3 homogeneous matrix.
///
/// Layout:
/// - stored row-major as `m[row][col]`
/// - acts on column vectors `[x, y, 1]`
/// - translation lives in the last column (`m[0][2]`, `m[1][2]`)
///
/// Every constructor produces a bottom row of `[0, 0, 1]`, and the in-place
/// `translate` / `scale` helpers keep it that way.
///
/// Composition follows matrix multiplication: applying `a * b` to a point is the
/// same as applying `b` first, then `a`. When chaining a hierarchy this reads as
/// `parent * local`.
///
/// No operation validates its inputs. Non-finite values propagate per IEEE-754.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    m: [[f32; 3]; 3],
}

impl Transform2D {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a transform from row-major rows.
    ///
    /// The caller is responsible for the bottom row; nothing is normalized.
    #[inline]
    pub const fn from_rows(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    /// Rotation by `theta` radians about the pivot `(px, py)`.
    ///
    /// Equivalent to translate(-pivot), rotate, translate(+pivot), written in
    /// closed form. Positive `theta` rotates counter-clockwise with +Y up.
    pub fn rotation(px: f32, py: f32, theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            m: [
                [c, -s, -c * px + s * py + px],
                [s, c, -s * px - c * py + py],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Pure translation by `(dx, dy)`.
    #[inline]
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self {
            m: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }

    /// Simplified orthographic projection into clip space.
    ///
    /// Only the diagonal is set: `2 / (right - left)` and `2 / (top - bottom)`.
    /// The region is *not* recentered, so bounds that are not symmetric around
    /// the origin are scaled but stay offset. Zero-span bounds divide by zero
    /// and yield non-finite entries.
    pub fn ortho_clip(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            m: [
                [2.0 / (right - left), 0.0, 0.0],
                [0.0, 2.0 / (top - bottom), 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    #[inline]
    pub fn set_rotation(&mut self, px: f32, py: f32, theta: f32) {
        *self = Self::rotation(px, py, theta);
    }

    #[inline]
    pub fn set_translation(&mut self, dx: f32, dy: f32) {
        *self = Self::translation(dx, dy);
    }

    /// Adds `(dx, dy)` to the translation column only.
    ///
    /// This is a shortcut, not a composition: the linear part is untouched, so
    /// the offset is applied in the parent frame (after the existing transform).
    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.m[0][2] += dx;
        self.m[1][2] += dy;
    }

    /// Multiplies the x row by `sx` and the y row by `sy`.
    ///
    /// Equivalent to left-multiplying by `diag(sx, sy, 1)`: the scale is applied
    /// after the existing transform, translation included.
    #[inline]
    pub fn scale(&mut self, sx: f32, sy: f32) {
        for v in &mut self.m[0] {
            *v *= sx;
        }
        for v in &mut self.m[1] {
            *v *= sy;
        }
    }

    /// Returns `self * other`.
    pub fn compose(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [[0.0f32; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, v) in out_row.iter_mut().enumerate() {
                *v = a[row][0] * b[0][col] + a[row][1] * b[1][col] + a[row][2] * b[2][col];
            }
        }
        Self { m: out }
    }

    /// Replaces `self` with `self * other`.
    #[inline]
    pub fn compose_in_place(&mut self, other: &Self) {
        *self = self.compose(other);
    }

    /// Applies the transform to a point (`w = 1`).
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let m = &self.m;
        Vec2::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2],
        )
    }

    #[inline]
    pub fn transposed(&self) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    #[inline]
    pub fn rows(&self) -> &[[f32; 3]; 3] {
        &self.m
    }

    /// Column-major flattening, the layout GPU matrix uniforms expect.
    pub fn to_cols_array(&self) -> [f32; 9] {
        let m = &self.m;
        [
            m[0][0], m[1][0], m[2][0],
            m[0][1], m[1][1], m[2][1],
            m[0][2], m[1][2], m[2][2],
        ]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform2D {
    type Output = Transform2D;
    #[inline]
    fn mul(self, rhs: Transform2D) -> Transform2D {
        self.compose(&rhs)
    }
}

impl Mul<&Transform2D> for &Transform2D {
    type Output = Transform2D;
    #[inline]
    fn mul(self, rhs: &Transform2D) -> Transform2D {
        self.compose(rhs)
    }
}

impl MulAssign for Transform2D {
    #[inline]
    fn mul_assign(&mut self, rhs: Transform2D) {
        self.compose_in_place(&rhs);
    }
}

impl Mul<Vec2> for Transform2D {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform_point(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: Transform2D, b: Transform2D) {
        assert!(a.approx_eq(&b, EPS), "expected {b:?}, got {a:?}");
    }

    fn assert_point(p: Vec2, x: f32, y: f32) {
        assert!((p.x - x).abs() <= EPS && (p.y - y).abs() <= EPS, "expected ({x}, {y}), got {p:?}");
    }

    fn sample() -> [Transform2D; 3] {
        let mut a = Transform2D::rotation(0.3, -1.2, 0.7);
        a.scale(2.0, 0.5);
        let b = Transform2D::translation(-4.0, 2.5);
        let mut c = Transform2D::rotation(1.0, 1.0, -2.1);
        c.translate(0.25, 0.0);
        [a, b, c]
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn compose_is_associative() {
        let [a, b, c] = sample();
        assert_close(a.compose(&b).compose(&c), a.compose(&b.compose(&c)));
    }

    #[test]
    fn identity_is_two_sided() {
        for a in sample() {
            assert_close(a.compose(&Transform2D::identity()), a);
            assert_close(Transform2D::identity().compose(&a), a);
        }
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let r = Transform2D::rotation(0.0, 0.0, FRAC_PI_2);
        let t = Transform2D::translation(1.0, 0.0);
        // Translate to (1, 0), then rotate a quarter turn.
        assert_point((r * t).transform_point(Vec2::zero()), 0.0, 1.0);
        // Rotate the origin (no-op), then translate.
        assert_point((t * r).transform_point(Vec2::zero()), 1.0, 0.0);
    }

    #[test]
    fn compose_in_place_matches_compose() {
        let [a, b, _] = sample();
        let mut m = a;
        m.compose_in_place(&b);
        assert_eq!(m, a.compose(&b));

        let mut n = a;
        n *= b;
        assert_eq!(n, m);
    }

    #[test]
    fn compose_keeps_bottom_row() {
        let [a, b, c] = sample();
        let m = a * b * c;
        assert_eq!(m.rows()[2], [0.0, 0.0, 1.0]);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn zero_rotation_is_identity() {
        assert_close(Transform2D::rotation(0.0, 0.0, 0.0), Transform2D::identity());
    }

    #[test]
    fn rotation_fixes_pivot() {
        for &(px, py, theta) in &[(0.0, 0.0, 1.0), (3.0, -2.0, 0.4), (-7.5, 11.0, PI), (0.5, 0.5, -5.0)] {
            let r = Transform2D::rotation(px, py, theta);
            assert_point(r.transform_point(Vec2::new(px, py)), px, py);
        }
    }

    #[test]
    fn positive_rotation_is_counter_clockwise() {
        let r = Transform2D::rotation(0.0, 0.0, FRAC_PI_2);
        assert_point(r.transform_point(Vec2::new(1.0, 0.0)), 0.0, 1.0);
    }

    #[test]
    fn rotation_about_pivot_matches_translate_rotate_translate() {
        let (px, py, theta) = (2.0, -1.0, 0.9);
        let expected = Transform2D::translation(px, py)
            * Transform2D::rotation(0.0, 0.0, theta)
            * Transform2D::translation(-px, -py);
        assert_close(Transform2D::rotation(px, py, theta), expected);
    }

    // ── translation / in-place helpers ────────────────────────────────────

    #[test]
    fn translation_offsets_points() {
        let t = Transform2D::translation(3.0, -4.0);
        assert_point(t.transform_point(Vec2::new(1.5, 2.0)), 4.5, -2.0);
    }

    #[test]
    fn translate_in_place_touches_translation_column_only() {
        let mut m = Transform2D::rotation(0.0, 0.0, 0.5);
        let before = m;
        m.translate(2.0, 3.0);
        assert_eq!(m.rows()[0][..2], before.rows()[0][..2]);
        assert_eq!(m.rows()[1][..2], before.rows()[1][..2]);
        assert!((m.rows()[0][2] - 2.0).abs() <= EPS);
        assert!((m.rows()[1][2] - 3.0).abs() <= EPS);
        assert_eq!(m.rows()[2], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn scale_in_place_is_left_multiplication() {
        let mut m = Transform2D::translation(1.0, 2.0);
        m.scale(3.0, 0.5);
        let expected = Transform2D::from_rows([[3.0, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 1.0]])
            * Transform2D::translation(1.0, 2.0);
        assert_close(m, expected);
        assert_eq!(m.rows()[2], [0.0, 0.0, 1.0]);
    }

    // ── ortho clip ────────────────────────────────────────────────────────

    #[test]
    fn ortho_clip_sets_diagonal_only() {
        let o = Transform2D::ortho_clip(-10.0, 10.0, 5.0, -5.0);
        assert_point(o.transform_point(Vec2::new(10.0, 5.0)), 1.0, 1.0);
        assert_point(o.transform_point(Vec2::new(-10.0, -5.0)), -1.0, -1.0);
    }

    #[test]
    fn ortho_clip_does_not_recenter() {
        let o = Transform2D::ortho_clip(0.0, 4.0, 4.0, 0.0);
        // Center of the region maps to (1, 1), not the origin.
        assert_point(o.transform_point(Vec2::new(2.0, 2.0)), 1.0, 1.0);
    }

    #[test]
    fn ortho_clip_zero_span_is_non_finite() {
        let o = Transform2D::ortho_clip(1.0, 1.0, 0.0, -1.0);
        assert!(!o.is_finite());
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn cols_array_is_column_major() {
        let t = Transform2D::translation(7.0, 8.0);
        assert_eq!(t.to_cols_array(), [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 7.0, 8.0, 1.0]);
        assert_eq!(t.transposed().to_cols_array()[2], 7.0);
    }
}
