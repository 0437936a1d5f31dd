mod directional;
mod point;
mod spot;

use std::fmt::{Debug, Display};

use crate::{
    math::{Point3, Ray, Vector3},
    object::Surface,
};

pub use directional::*;
pub use point::*;
pub use spot::*;

/// This trait represents any object that is a light.
///
/// Shading works from a shadow ray aimed at the light. Every surface in the
/// scene is asked whether it blocks that ray before the light's intensity at
/// the point is used.
pub trait Light: Debug + Display + Send + Sync {
    /// A ray from `point` toward this light, or `None` if the light sits
    /// exactly on `point` and there is no direction to it.
    fn ray_to_light(&self, point: Point3) -> Option<Ray>;

    /// Whether `surface` blocks the shadow ray before it reaches this light.
    fn is_occluded_by(&self, surface: &Surface, shadow_ray: &Ray) -> bool;

    /// The light arriving at `point`, per channel, after attenuation.
    fn intensity(&self, point: Point3, shadow_ray: &Ray) -> Vector3;
}
