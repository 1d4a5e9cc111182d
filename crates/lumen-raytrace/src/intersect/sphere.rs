//! Ray-sphere intersection (quadratic equation).

use lumen_math::Vector3;

use super::{HitPair, NO_HIT};
use crate::Ray3;

/// Intersect a ray with the sphere of `center` and `radius`.
///
/// Returns `[t1, t2]` with `t1 = -b + sqrt(disc)` and `t2 = -b - sqrt(disc)`,
/// so for a ray starting outside the sphere `t1` is the exit and `t2` the
/// entry. Each root behind the ray origin is replaced by [`NO_HIT`]
/// independently; a miss gives `[NO_HIT, NO_HIT]`.
///
/// The discriminant keeps the `d·d` factor. The roots are not divided by it,
/// so for a non-unit direction both slots come out scaled by `d·d`.
pub fn intersect_sphere(ray: &Ray3, center: Vector3, radius: f64) -> HitPair {
    let p = ray.o - center;
    let b = ray.d * p;
    let discriminant = b * b - ray.d.sqr() * (p.sqr() - radius * radius);
    if discriminant < 0.0 {
        log::trace!("ray misses sphere at {center} (discriminant {discriminant})");
        return [NO_HIT, NO_HIT];
    }

    let root = discriminant.sqrt();
    let t1 = -b + root;
    let t2 = -b - root;
    [in_front(t1), in_front(t2)]
}

#[inline]
fn in_front(t: f64) -> f64 {
    if t < 0.0 {
        NO_HIT
    } else {
        // -0.0 becomes 0.0
        t + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(o: (f64, f64, f64), d: (f64, f64, f64)) -> Ray3 {
        Ray3::new(Vector3::new(o.0, o.1, o.2), Vector3::new(d.0, d.1, d.2))
    }

    #[test]
    fn test_ray_sphere_through_center() {
        let hits = intersect_sphere(&ray((0.0, 0.0, -5.0), (0.0, 0.0, 1.0)), Vector3::ZERO, 1.0);
        assert_eq!(hits, [6.0, 4.0]);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let hits = intersect_sphere(&ray((0.0, 0.0, -5.0), (1.0, 0.0, 0.0)), Vector3::ZERO, 1.0);
        assert_eq!(hits, [NO_HIT, NO_HIT]);
    }

    #[test]
    fn test_ray_sphere_from_inside() {
        let hits = intersect_sphere(&ray((0.0, 0.0, 0.0), (0.0, 0.0, 1.0)), Vector3::ZERO, 1.0);
        // t1 = -b + sqrt(disc) is the exit in front; t2 lies behind
        assert_eq!(hits, [1.0, NO_HIT]);
    }

    #[test]
    fn test_ray_sphere_tangent() {
        // grazes the sphere at (0, 0, 0) on its -X side
        let hits = intersect_sphere(
            &ray((0.0, 0.0, -5.0), (0.0, 0.0, 1.0)),
            Vector3::new(1.0, 0.0, 0.0),
            1.0,
        );
        assert_eq!(hits[0], hits[1]);
        assert_eq!(hits[0], 5.0);
    }

    #[test]
    fn test_ray_sphere_zero_radius() {
        let hits = intersect_sphere(&ray((0.0, 0.0, -5.0), (0.0, 0.0, 1.0)), Vector3::ZERO, 0.0);
        assert_eq!(hits, [5.0, 5.0]);
    }

    #[test]
    fn test_ray_sphere_zero_radius_from_center() {
        let hits = intersect_sphere(&ray((0.0, 0.0, 0.0), (0.0, 0.0, 1.0)), Vector3::ZERO, 0.0);
        assert_eq!(hits, [0.0, 0.0]);
        assert!(hits[0].is_sign_positive());
        assert!(hits[1].is_sign_positive());
    }

    #[test]
    fn test_ray_sphere_behind() {
        // both roots are real but behind the origin
        let hits = intersect_sphere(&ray((0.0, 0.0, 5.0), (0.0, 0.0, 1.0)), Vector3::ZERO, 1.0);
        assert_eq!(hits, [NO_HIT, NO_HIT]);
    }

    #[test]
    fn test_ray_sphere_non_unit_direction() {
        let r = Ray3 {
            o: Vector3::new(0.0, 0.0, -5.0),
            d: Vector3::new(0.0, 0.0, 2.0),
        };
        // true parameters are 3 and 2; the slots carry them scaled by d·d = 4
        let hits = intersect_sphere(&r, Vector3::ZERO, 1.0);
        assert_eq!(hits, [12.0, 8.0]);
    }
}
