//! The `demo` and `probe` subcommands.

use anyhow::{Context, Result};
use lumen_math::{Matrix4, Vector3};
use lumen_raytrace::{HitPair, Ray3, Sphere, Transformable, NO_HIT};
use serde::Serialize;

use crate::config::{Axis, DemoConfig, ProbeConfig};

/// Result of the demo transform.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    /// Column-major elements.
    pub matrix: Matrix4,
    pub translation: Vector3,
}

/// Result of shooting the probe ray at the sphere.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub sphere: Sphere,
    pub ray_origin: Vector3,
    pub ray_direction: Vector3,
    pub hits: HitPair,
    pub nearest: Option<f64>,
}

/// Build the demo transform: translate, rotate, translate again.
pub fn build_demo(config: &DemoConfig) -> Matrix4 {
    let mut m = Matrix4::translation_vec(config.translation);
    match config.axis {
        Axis::X => m.rot_x(config.angle, config.around_origin),
        Axis::Y => m.rot_y(config.angle, config.around_origin),
        Axis::Z => m.rot_z(config.angle, config.around_origin),
    };
    m.translate_vec(config.offset);
    m
}

pub fn run_demo(config: &DemoConfig) -> DemoReport {
    log::info!(
        "demo: translate {}, rotate {:?} by {} rad (around_origin={}), translate {}",
        config.translation,
        config.axis,
        config.angle,
        config.around_origin,
        config.offset
    );
    let matrix = build_demo(config);
    DemoReport {
        translation: matrix.translation_part(),
        matrix,
    }
}

pub fn run_probe(config: &ProbeConfig) -> Result<ProbeReport> {
    let mut sphere = config.sphere;
    sphere.translate_vec(config.move_sphere);

    let ray = Ray3::try_new(config.origin, config.direction)
        .context("probe ray needs a finite nonzero direction")?;
    let hits = sphere.intersects(&ray);
    log::info!(
        "probe: sphere at {} r={}, ray from {} along {}",
        sphere.c,
        sphere.r,
        ray.o,
        ray.d
    );
    log::debug!("probe hits: {hits:?}");

    Ok(ProbeReport {
        sphere,
        ray_origin: ray.o,
        ray_direction: ray.d,
        nearest: sphere.nearest_hit(&ray),
        hits,
    })
}

pub fn format_demo(report: &DemoReport) -> String {
    report.matrix.to_string()
}

pub fn format_probe(report: &ProbeReport) -> String {
    let slot = |t: f64| {
        if t == NO_HIT {
            "none".to_string()
        } else {
            format!("{t:.6}")
        }
    };
    let mut out = format!(
        "t1 = {}\nt2 = {}",
        slot(report.hits[0]),
        slot(report.hits[1])
    );
    match report.nearest {
        Some(t) => out.push_str(&format!("\nnearest = {t:.6}")),
        None => out.push_str("\nmiss"),
    }
    out
}
