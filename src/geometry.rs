//! Nodal coordinates and displacements, in millimetres.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Undeformed position of an FEA node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (Vector3::new(other.x, other.y, other.z) - Vector3::new(self.x, self.y, self.z)).norm()
    }
}

/// Nodal displacement exported by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    /// Displacement along X.
    pub x: f64,
    /// Displacement along Y.
    pub y: f64,
    /// Displacement along Z.
    pub z: f64,
}

impl Displacement {
    /// Create a displacement from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm of the displacement.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        Vector3::new(self.x, self.y, self.z).norm()
    }
}

/// Shorthand for [`Point::new`].
///
/// # Examples
/// ```
/// use fatiguex::point;
///
/// let fillet = point(25.0, 8.0, 0.0);
/// assert_eq!(fillet.distance_to(point(25.0, 8.0, 0.0)), 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// Shorthand for [`Displacement::new`].
///
/// # Examples
/// ```
/// use fatiguex::displacement;
///
/// let tip = displacement(0.0, 0.3, -0.4);
/// assert!((tip.magnitude() - 0.5).abs() < 1.0e-12);
/// ```
#[must_use]
pub const fn displacement(x: f64, y: f64, z: f64) -> Displacement {
    Displacement::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn distance_between_points() {
        assert_relative_eq!(
            point(0.0, 0.0, 0.0).distance_to(point(3.0, 4.0, 12.0)),
            13.0,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn magnitude_of_planar_displacement() {
        assert_relative_eq!(displacement(0.3, -0.4, 0.0).magnitude(), 0.5, epsilon = 1.0e-12);
        assert_eq!(Displacement::default().magnitude(), 0.0);
    }
}
