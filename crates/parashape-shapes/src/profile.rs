//! Circle and arc profile helpers for the shape builders.

use std::f64::consts::PI;

use parashape_math::{perpendicular_basis, Axis, Point3};

/// `segments` evenly spaced points on a circle of `radius` around `axis`,
/// in a plane `offset` along it. Open: the first point is not repeated.
pub fn ring(axis: &Axis, radius: f64, offset: f64, segments: u32) -> Vec<Point3> {
    let (u, v) = perpendicular_basis(&axis.direction);
    let center = axis.origin + axis.direction.into_inner() * offset;
    (0..segments)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / segments as f64;
            center + (u * a.cos() + v * a.sin()) * radius
        })
        .collect()
}

/// `steps + 1` points along an arc in the XZ half-plane,
/// `(r cos a, 0, r sin a)` for angles from `start` to `end` inclusive.
pub fn arc_xz(radius: f64, start: f64, end: f64, steps: u32) -> Vec<Point3> {
    (0..=steps)
        .map(|i| {
            let a = start + (end - start) * i as f64 / steps as f64;
            Point3::new(radius * a.cos(), 0.0, radius * a.sin())
        })
        .collect()
}

/// A closed circle in the XZ plane centered at `(center_x, 0, 0)`:
/// `segments + 1` points with the first repeated at the end.
pub fn circle_xz(center_x: f64, radius: f64, segments: u32) -> Vec<Point3> {
    (0..=segments)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / segments as f64;
            Point3::new(center_x + radius * a.cos(), 0.0, radius * a.sin())
        })
        .collect()
}
