//! Ray representation.

use lumen_math::{Result, Vector3};

/// A ray `r(t) = o + t * d`.
///
/// `d` is normalized when the ray is built through [`Ray3::new`] or
/// [`Ray3::try_new`]. The fields are public; assigning a non-unit `d`
/// directly is allowed and intersection routines account for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    /// Origin.
    pub o: Vector3,
    /// Direction.
    pub d: Vector3,
}

impl Ray3 {
    /// Create a ray, normalizing a copy of `direction`.
    ///
    /// `direction` must have nonzero length; a zero direction leaves NaN
    /// components in `d`. Use [`Ray3::try_new`] to reject it instead.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self {
            o: origin,
            d: direction.normalized(),
        }
    }

    /// Create a ray, failing on a zero-length or non-finite direction.
    pub fn try_new(origin: Vector3, direction: Vector3) -> Result<Self> {
        let mut d = direction;
        d.try_norm()?;
        Ok(Self { o: origin, d })
    }

    /// Point at parameter `t`. Any `t` is accepted, including negative values.
    #[inline]
    pub fn get_point(&self, t: f64) -> Vector3 {
        self.o + self.d * t
    }
}

impl Default for Ray3 {
    fn default() -> Self {
        Self {
            o: Vector3::ZERO,
            d: Vector3::I,
        }
    }
}
