use super::{reflect, Point3, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray. The direction is expected to be already normalized.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Instantiate a Ray that starts at `origin` and passes through `target`.
    ///
    /// # Panics
    ///
    /// Panics if the two points coincide, since the ray would have no direction.
    pub fn towards(origin: Point3, target: Point3) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Like [`Ray::towards`], but `None` when the two points coincide.
    pub fn try_towards(origin: Point3, target: Point3) -> Option<Self> {
        (target - origin)
            .try_normalize()
            .map(|direction| Self::new(origin, direction))
    }

    pub fn along(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Reflect this ray off of a position and a normal.
    pub fn reflect(&self, pos: Point3, normal: Vector3) -> Ray {
        Ray::new(pos, reflect(self.direction, normal))
    }
}
