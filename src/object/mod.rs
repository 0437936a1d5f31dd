mod aabb;
mod sphere;

use std::fmt::{self, Debug, Display, Formatter};

use crate::{
    material::Material,
    math::{Point3, Ray, Vector3},
};

pub use aabb::*;
pub use sphere::*;

/// The result of a ray intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Distance along the ray. Always greater than [`EPSILON`](crate::math::EPSILON).
    pub t: f64,

    /// Unit normal at the hit point. It points outward, unless the ray started
    /// inside the shape, in which case it points back toward the ray origin.
    pub normal: Vector3,

    /// Whether the ray origin lies inside the shape.
    pub within: bool,
}

impl Hit {
    pub fn new(t: f64, normal: Vector3) -> Self {
        Self {
            t,
            normal,
            within: false,
        }
    }

    /// Mark this hit as seen from inside the shape.
    pub fn within(mut self) -> Self {
        self.within = true;
        self
    }

    pub fn pos(&self, ray: &Ray) -> Point3 {
        ray.along(self.t)
    }
}

/// A trait that represents any shape that can be intersected by a Ray.
pub trait Intersect: Debug + Display + Send + Sync {
    /// Find the nearest valid intersection, if any, between the ray provided and this shape.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

/// A shape paired with the material it is rendered with.
#[derive(Debug)]
pub struct Surface {
    pub shape: Box<dyn Intersect>,
    pub material: Material,
}

impl Surface {
    pub fn new<S: Intersect + 'static>(shape: S, material: Material) -> Self {
        Self {
            shape: Box::new(shape),
            material,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.shape.intersect(ray)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Display for Surface {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.shape, self.material)
    }
}
