#![warn(missing_docs)]

//! Math types for the parashape geometry kernel.
//!
//! Thin wrappers around nalgebra providing the domain types the sweep
//! generators work in: points, vectors, rotation axes, rigid transforms,
//! and tolerance constants.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A line in space given by an origin point and a unit direction.
///
/// Used as the axis of revolution and as the screw axis for twisted
/// extrusions. Construction rejects a zero-length direction, so code
/// holding an `Axis` never has to re-check for degeneracy.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// A point on the line.
    pub origin: Point3,
    /// Unit direction of the line.
    pub direction: Dir3,
}

impl Axis {
    /// Create an axis through `origin` along `direction`.
    ///
    /// Returns `None` if `direction` is (numerically) zero.
    pub fn new(origin: Point3, direction: Vec3) -> Option<Self> {
        if direction.norm() < 1e-12 {
            return None;
        }
        Some(Self {
            origin,
            direction: Dir3::new_normalize(direction),
        })
    }

    /// The Z axis through the origin.
    pub fn z() -> Self {
        Self {
            origin: Point3::origin(),
            direction: Dir3::new_unchecked(Vec3::z()),
        }
    }

    /// Perpendicular distance from `point` to this line.
    pub fn distance_to(&self, point: &Point3) -> f64 {
        let v = point - self.origin;
        let proj = v.dot(self.direction.as_ref()) * self.direction.as_ref();
        (v - proj).norm()
    }

    /// Whether `point` lies on this line within `tol.linear`.
    pub fn contains(&self, point: &Point3, tol: &Tolerance) -> bool {
        tol.is_zero(self.distance_to(point))
    }
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = offset.x;
        m[(1, 3)] = offset.y;
        m[(2, 3)] = offset.z;
        Self { matrix: m }
    }

    /// Rotation about an axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula.
    pub fn rotation(axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Rotation about an arbitrary line by `angle` radians.
    ///
    /// Conjugates the origin-axis rotation with translations so the line
    /// through `axis.origin` is the fixed set of the transform.
    pub fn rotation_about_line(axis: &Axis, angle: f64) -> Self {
        let to_origin = Transform::translation(-axis.origin.coords);
        let rotate = Transform::rotation(&axis.direction, angle);
        let back = Transform::translation(axis.origin.coords);
        back.then(&rotate).then(&to_origin)
    }

    /// Compose: the resulting transform applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 mm linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An orthonormal basis `(x, y)` perpendicular to `normal`.
///
/// Matches the convention hosts use for "circle in a plane": a normal
/// close to ±Z yields the world X/Y axes, anything else derives x from
/// `z × normal`.
pub fn perpendicular_basis(normal: &Dir3) -> (Vec3, Vec3) {
    let n = normal.as_ref();
    let x = if n.x.abs() < 1e-12 && n.y.abs() < 1e-12 {
        Vec3::x()
    } else {
        Vec3::z().cross(n).normalize()
    };
    let y = n.cross(&x);
    (x, y)
}
