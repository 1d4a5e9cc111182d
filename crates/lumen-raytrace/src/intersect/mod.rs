//! Ray-primitive intersection algorithms.
//!
//! Intersectors report a fixed pair of ray parameters. A slot holding
//! [`NO_HIT`] has no valid intersection; callers check both slots.

mod sphere;

pub use sphere::intersect_sphere;

/// Slot value meaning "no intersection here".
pub const NO_HIT: f64 = -1.0;

/// Both slots of an intersection result.
pub type HitPair = [f64; 2];

/// The closest valid parameter in `hits`, if any.
pub fn nearest_hit(hits: HitPair) -> Option<f64> {
    hits.into_iter().filter(|t| *t >= 0.0).reduce(f64::min)
}

/// Number of slots holding a valid parameter.
pub fn hit_count(hits: HitPair) -> usize {
    hits.iter().filter(|t| **t >= 0.0).count()
}
