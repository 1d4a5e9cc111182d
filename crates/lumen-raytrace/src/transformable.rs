//! Uniform repositioning of primitives.

use lumen_math::{Matrix4, Vector3};

/// Any primitive that can be moved and turned in 3D space.
///
/// Lets a scene manager reposition heterogeneous primitives without knowing
/// their geometric representation. The trait is object safe.
pub trait Transformable {
    /// Translate by `(x, y, z)`.
    fn translate(&mut self, x: f64, y: f64, z: f64);

    /// Translate by `v`.
    fn translate_vec(&mut self, v: Vector3) {
        self.translate(v.x, v.y, v.z);
    }

    /// Rotate about the X axis by `theta` radians, either about the world
    /// origin (`around_origin`) or about the primitive's own position.
    fn rot_x(&mut self, theta: f64, around_origin: bool);

    /// Rotate about the Y axis. See [`Transformable::rot_x`].
    fn rot_y(&mut self, theta: f64, around_origin: bool);

    /// Rotate about the Z axis. See [`Transformable::rot_x`].
    fn rot_z(&mut self, theta: f64, around_origin: bool);

    /// Apply an arbitrary transform.
    fn transform(&mut self, m: &Matrix4);
}
