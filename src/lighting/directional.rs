use std::fmt::{self, Display, Formatter};

use crate::{
    error::{RenderError, Result},
    math::{Point3, Ray, Vector3},
    object::Surface,
};

use super::Light;

/// A directional light, which has no position, just a vector direction that is
/// true for all points in the world. It is never attenuated by distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Directional {
    /// The color of this light, per channel.
    pub color: Vector3,

    /// The direction the light travels in. Always normalized.
    direction: Vector3,
}

impl Directional {
    pub fn new(direction: Vector3, color: Vector3) -> Result<Self> {
        let direction = direction
            .try_normalize()
            .ok_or(RenderError::DegenerateVector("directional light direction"))?;
        Ok(Self { color, direction })
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }
}

impl Default for Directional {
    fn default() -> Self {
        Self {
            color: Vector3::one(),
            direction: Vector3::new(0., -1., -1.).normalize(),
        }
    }
}

impl Display for Directional {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Directional light with color {} along {}",
            self.color, self.direction
        )
    }
}

impl Light for Directional {
    fn ray_to_light(&self, point: Point3) -> Option<Ray> {
        Some(Ray::new(point, -self.direction))
    }

    fn is_occluded_by(&self, surface: &Surface, shadow_ray: &Ray) -> bool {
        // the light is infinitely far away, so anything in the way blocks it
        surface.intersect(shadow_ray).is_some()
    }

    fn intensity(&self, _: Point3, _: &Ray) -> Vector3 {
        self.color
    }
}
