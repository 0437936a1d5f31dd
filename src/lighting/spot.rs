use std::fmt::{self, Display, Formatter};

use crate::{
    error::{RenderError, Result},
    math::{Point3, Ray, Vector3},
    object::Surface,
};

use super::{Light, Point};

/// A spot light: a point light that shines along a cone direction, fading with
/// the cosine of the angle away from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Spot {
    /// Position, color and attenuation, shared with point lights.
    pub point: Point,

    /// The direction the cone points in. Always normalized.
    direction: Vector3,
}

impl Spot {
    pub fn new(position: Point3, direction: Vector3, color: Vector3) -> Result<Self> {
        let direction = direction
            .try_normalize()
            .ok_or(RenderError::DegenerateVector("spot light direction"))?;
        Ok(Self {
            point: Point::new(position, color),
            direction,
        })
    }

    /// Set the quadratic, linear and constant attenuation coefficients.
    pub fn with_attenuation(mut self, kq: f64, kl: f64, kc: f64) -> Self {
        self.point = self.point.with_attenuation(kq, kl, kc);
        self
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }
}

impl Display for Spot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Spot light with ")?;
        self.point.describe(f)?;
        write!(f, ", pointing along {}", self.direction)
    }
}

impl Light for Spot {
    fn ray_to_light(&self, point: Point3) -> Option<Ray> {
        self.point.ray_to_light(point)
    }

    fn is_occluded_by(&self, surface: &Surface, shadow_ray: &Ray) -> bool {
        self.point.is_occluded_by(surface, shadow_ray)
    }

    fn intensity(&self, point: Point3, shadow_ray: &Ray) -> Vector3 {
        // points outside the cone's hemisphere get nothing
        let cos = self.direction.dot(-shadow_ray.direction).max(0.);
        self.point.intensity(point, shadow_ray) * cos
    }
}
