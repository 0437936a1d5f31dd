use std::fmt::{self, Display, Formatter};

use crate::{
    math::{Point3, Ray, Vector3},
    object::Surface,
};

use super::Light;

/// A point light, which is a light that emits in all directions from a specified position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// The color of this light, per channel, before attenuation.
    pub color: Vector3,

    /// The position in space of this light.
    pub position: Point3,

    /// Quadratic attenuation coefficient.
    pub kq: f64,

    /// Linear attenuation coefficient.
    pub kl: f64,

    /// Constant attenuation coefficient.
    pub kc: f64,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            color: Vector3::one(),
            position: Point3::origin(),
            kq: 0.01,
            kl: 0.1,
            kc: 1.,
        }
    }
}

impl Point {
    pub fn new(position: Point3, color: Vector3) -> Self {
        Self {
            position,
            color,
            ..Default::default()
        }
    }

    /// Set the quadratic, linear and constant attenuation coefficients.
    pub fn with_attenuation(mut self, kq: f64, kl: f64, kc: f64) -> Self {
        self.kq = kq;
        self.kl = kl;
        self.kc = kc;
        self
    }

    /// The attenuation factor at a given distance from the light.
    pub fn attenuation(&self, distance: f64) -> f64 {
        self.kq * distance * distance + self.kl * distance + self.kc
    }

    pub(super) fn describe(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color {} at {}, decay kq = {}, kl = {}, kc = {}",
            self.color, self.position, self.kq, self.kl, self.kc
        )
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point light with ")?;
        self.describe(f)
    }
}

impl Light for Point {
    fn ray_to_light(&self, point: Point3) -> Option<Ray> {
        Ray::try_towards(point, self.position)
    }

    fn is_occluded_by(&self, surface: &Surface, shadow_ray: &Ray) -> bool {
        // only things between the point and the light cast a shadow
        match surface.intersect(shadow_ray) {
            Some(hit) => hit.t < self.position.distance(shadow_ray.origin),
            None => false,
        }
    }

    fn intensity(&self, _: Point3, shadow_ray: &Ray) -> Vector3 {
        let distance = self.position.distance(shadow_ray.origin);
        self.color / self.attenuation(distance)
    }
}
