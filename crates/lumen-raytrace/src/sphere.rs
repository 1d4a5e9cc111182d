//! Sphere primitive.

use lumen_math::{Matrix4, Tolerance, Vector3};
use serde::{Deserialize, Serialize};

use crate::intersect::{self, HitPair};
use crate::{Ray3, Transformable};

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub c: Vector3,
    /// Radius of the sphere. Never changed by a transform.
    pub r: f64,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self {
            c: center,
            r: radius,
        }
    }

    /// Intersect `ray` with this sphere.
    ///
    /// Always returns two slots; a slot equal to [`intersect::NO_HIT`] holds
    /// no valid intersection. See [`intersect::intersect_sphere`] for the
    /// root order.
    pub fn intersects(&self, ray: &Ray3) -> HitPair {
        intersect::intersect_sphere(ray, self.c, self.r)
    }

    /// Closest intersection in front of the ray origin, if any.
    pub fn nearest_hit(&self, ray: &Ray3) -> Option<f64> {
        intersect::nearest_hit(self.intersects(ray))
    }

    /// Number of valid intersection slots (0, 1 or 2).
    pub fn hit_count(&self, ray: &Ray3) -> usize {
        intersect::hit_count(self.intersects(ray))
    }

    /// Whether `point` lies inside or on the sphere.
    pub fn contains(&self, point: Vector3) -> bool {
        let d = point.dist(self.c);
        d <= self.r || Tolerance::DEFAULT.is_zero(d - self.r)
    }

    /// Outward unit normal at a surface `point`.
    ///
    /// `point` must differ from the center.
    pub fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.c).normalized()
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            c: Vector3::ZERO,
            r: 1.0,
        }
    }
}

impl Transformable for Sphere {
    fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.c.x += x;
        self.c.y += y;
        self.c.z += z;
    }

    fn translate_vec(&mut self, v: Vector3) {
        self.c += v;
    }

    // Rotating a sphere does not change its geometry.
    fn rot_x(&mut self, _theta: f64, _around_origin: bool) {}

    fn rot_y(&mut self, _theta: f64, _around_origin: bool) {}

    fn rot_z(&mut self, _theta: f64, _around_origin: bool) {}

    /// Moves the center by the translation column of `m`.
    ///
    /// The rotation and scale block of `m` is ignored, so a scaling transform
    /// leaves the radius as it was.
    fn transform(&mut self, m: &Matrix4) {
        self.translate_vec(m.translation_part());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersect::NO_HIT;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default_sphere() {
        let s = Sphere::default();
        assert_eq!(s.c, Vector3::ZERO);
        assert_eq!(s.r, 1.0);
    }

    #[test]
    fn test_intersects() {
        let s = Sphere::default();
        let ray = Ray3::new(Vector3::new(0.0, 0.0, -5.0), Vector3::K);
        assert_eq!(s.intersects(&ray), [6.0, 4.0]);
        assert_eq!(s.nearest_hit(&ray), Some(4.0));
        assert_eq!(s.hit_count(&ray), 2);

        let miss = Ray3::new(Vector3::new(0.0, 0.0, -5.0), Vector3::I);
        assert_eq!(s.intersects(&miss), [NO_HIT, NO_HIT]);
        assert_eq!(s.nearest_hit(&miss), None);
        assert_eq!(s.hit_count(&miss), 0);

        let inside = Ray3::new(Vector3::ZERO, Vector3::K);
        assert_eq!(s.intersects(&inside), [1.0, NO_HIT]);
        assert_eq!(s.nearest_hit(&inside), Some(1.0));
        assert_eq!(s.hit_count(&inside), 1);
    }

    #[test]
    fn test_hit_point_on_surface() {
        let s = Sphere::new(Vector3::new(1.0, 2.0, 3.0), 2.0);
        let ray = Ray3::new(Vector3::new(1.0, 2.0, -10.0), Vector3::K);
        let t = s.nearest_hit(&ray).unwrap();
        let p = ray.get_point(t);
        assert_eq!(p, Vector3::new(1.0, 2.0, 1.0));
        assert!(s.contains(p));
        assert_eq!(s.normal_at(p), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_contains_boundary() {
        let s = Sphere::new(Vector3::new(1.0, 0.0, 0.0), 2.0);
        assert!(s.contains(Vector3::new(1.0, 0.0, 0.0)));
        assert!(s.contains(Vector3::new(3.0, 0.0, 0.0)));
        assert!(s.contains(Vector3::new(3.0 + 1e-12, 0.0, 0.0)));
        assert!(!s.contains(Vector3::new(3.0 + 1e-6, 0.0, 0.0)));
    }

    #[test]
    fn test_translate() {
        let mut s = Sphere::default();
        s.translate(1.0, 2.0, 3.0);
        s.translate_vec(Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(s.c, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(s.r, 1.0);
    }

    #[test]
    fn test_rotation_is_noop() {
        let mut s = Sphere::new(Vector3::new(5.0, 0.0, 0.0), 2.0);
        let before = s;
        s.rot_x(1.0, true);
        s.rot_y(FRAC_PI_2, true);
        s.rot_z(-0.3, false);
        assert_eq!(s, before);
    }

    #[test]
    fn test_transform_uses_translation_only() {
        let mut s = Sphere::new(Vector3::new(1.0, 1.0, 1.0), 1.5);
        let mut m = Matrix4::translation(2.0, 0.0, -1.0);
        m.rot_y(0.7, false);
        s.transform(&m);
        assert_eq!(s.c, Vector3::new(3.0, 1.0, 0.0));
        assert_eq!(s.r, 1.5);

        // uniform scale by 2 in the raw array sense
        let scale = Matrix4::IDENTITY + Matrix4::IDENTITY;
        s.transform(&scale);
        assert_eq!(s.c, Vector3::new(3.0, 1.0, 0.0));
        assert_eq!(s.r, 1.5);
    }

    #[test]
    fn test_transform_then_intersect() {
        let mut s = Sphere::default();
        s.transform(&Matrix4::translation(0.0, 0.0, 10.0));
        let ray = Ray3::new(Vector3::ZERO, Vector3::K);
        assert_eq!(s.intersects(&ray), [11.0, 9.0]);
    }

    #[test]
    fn test_dyn_transformable() {
        let mut spheres = [Sphere::default(), Sphere::new(Vector3::I, 0.5)];
        for s in spheres.iter_mut() {
            let item: &mut dyn Transformable = s;
            item.translate_vec(Vector3::J);
            item.rot_z(FRAC_PI_2, true);
        }
        assert_eq!(spheres[0].c, Vector3::J);
        assert_eq!(spheres[1].c, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(spheres[1].r, 0.5);
    }
}
