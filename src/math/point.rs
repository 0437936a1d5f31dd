use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Sub},
};

use super::{Axis, Vector3};

/// A position in world space.
///
/// Kept apart from [`Vector3`] so that translating a point and taking the
/// difference of two points are the only ways to move between the two.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Instantiate a new Point3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// Distance to another point.
    pub fn distance(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    /// Squared distance to another point.
    pub fn distance_squared(self, other: Self) -> f64 {
        (other - self).magnitude_squared()
    }

    /// Get the coordinate along an axis.
    pub fn axis(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl Display for Point3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Vector3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// The vector pointing from `rhs` to `self`.
impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point3::new(1., 2., 3.);
        let b = Point3::new(4., 6., 3.);
        assert_eq!(a.distance(b), 5.);
        assert_eq!(a.distance_squared(b), 25.);
        assert_eq!(b - a, Vector3::new(3., 4., 0.));
    }

    #[test]
    fn translation() {
        let p = Point3::origin() + Vector3::new(1., -1., 2.);
        assert_eq!(p, Point3::new(1., -1., 2.));
        assert_eq!(p - Vector3::new(1., -1., 2.), Point3::origin());
    }
}
