use std::fmt::{self, Display, Formatter};

use crate::math::{Axis, Point3, Ray, Vector3, EPSILON, INFINITY};

use super::{Hit, Intersect};

/// An axis-aligned box, stored by its minimum and maximum corners.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAlignedBox {
    min: Point3,
    max: Point3,
}

impl AxisAlignedBox {
    /// Create a box spanning two opposite corners. The corners may be given in
    /// any order; they are sorted per axis.
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn min(&self) -> Point3 {
        self.min
    }

    pub fn max(&self) -> Point3 {
        self.max
    }

    /// The outward normal of the face a point lies on, if it lies on one.
    fn face_normal(&self, p: Point3) -> Option<Vector3> {
        if (p.z - self.min.z).abs() <= EPSILON {
            Some(Vector3::new(0., 0., -1.))
        } else if (p.z - self.max.z).abs() <= EPSILON {
            Some(Vector3::new(0., 0., 1.))
        } else if (p.y - self.min.y).abs() <= EPSILON {
            Some(Vector3::new(0., -1., 0.))
        } else if (p.y - self.max.y).abs() <= EPSILON {
            Some(Vector3::new(0., 1., 0.))
        } else if (p.x - self.min.x).abs() <= EPSILON {
            Some(Vector3::new(-1., 0., 0.))
        } else if (p.x - self.max.x).abs() <= EPSILON {
            Some(Vector3::new(1., 0., 0.))
        } else {
            None
        }
    }
}

impl Default for AxisAlignedBox {
    fn default() -> Self {
        Self::new(Point3::new(-1., -1., -1.), Point3::new(1., 1., 1.))
    }
}

impl Display for AxisAlignedBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Box from {} to {}", self.min, self.max)
    }
}

impl Intersect for AxisAlignedBox {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut t_near = -INFINITY;
        let mut t_far = INFINITY;

        for axis in Axis::ALL {
            let origin = ray.origin.axis(axis);
            let direction = ray.direction.axis(axis);
            let (min, max) = (self.min.axis(axis), self.max.axis(axis));

            if direction.abs() <= EPSILON {
                // parallel to this slab, so the origin has to be between its planes
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let t1 = (min - origin) / direction;
            let t2 = (max - origin) / direction;
            if t1.is_nan() || t2.is_nan() {
                return None;
            }

            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
            if t_near > t_far || t_far < EPSILON {
                return None;
            }
        }

        if t_near < EPSILON {
            let normal = self.face_normal(ray.along(t_far))?;
            Some(Hit::new(t_far, -normal).within())
        } else {
            let normal = self.face_normal(ray.along(t_near))?;
            Some(Hit::new(t_near, normal))
        }
    }
}
