#![warn(missing_docs)]

//! Rays and transformable primitives for the lumen ray tracer.
//!
//! # Architecture
//!
//! - [`Ray3`] - origin and normalized direction
//! - [`Transformable`] - capability trait for repositioning primitives
//! - [`Sphere`] - sphere primitive with ray intersection
//! - [`intersect`] - intersection algorithms and their two-slot results
//!
//! # Example
//!
//! ```
//! use lumen_math::{Matrix4, Vector3};
//! use lumen_raytrace::{Ray3, Sphere, Transformable};
//!
//! let mut sphere = Sphere::default();
//! sphere.transform(&Matrix4::translation(0.0, 0.0, 10.0));
//!
//! let ray = Ray3::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(sphere.intersects(&ray), [11.0, 9.0]);
//! ```

mod ray;
mod sphere;
mod transformable;
pub mod intersect;

pub use intersect::{HitPair, NO_HIT};
pub use ray::Ray3;
pub use sphere::Sphere;
pub use transformable::Transformable;
