use std::fmt::{self, Display, Formatter};

use crate::math::{Point3, Ray, EPSILON, INFINITY};

use super::{Hit, Intersect};

/// A sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub origin: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(origin: Point3, radius: f64) -> Self {
        Self { origin, radius }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Point3::new(0., -0.5, -6.), 0.5)
    }
}

impl Display for Sphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Sphere at {} with radius {}", self.origin, self.radius)
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        // |o + td - c|^2 = r^2  =>  a t^2 + b t + c = 0
        let l = ray.origin - self.origin;
        let a = ray.direction.magnitude_squared();
        let b = 2. * ray.direction.dot(l);
        let c = l.magnitude_squared() - self.radius.powi(2);

        let discriminant = b * b - 4. * a * c;
        if !discriminant.is_finite() || discriminant < 0. {
            return None;
        }

        if discriminant == 0. {
            // tangent ray, one root
            let t = -b / (2. * a);
            if !(EPSILON..=INFINITY).contains(&t) {
                return None;
            }
            let normal = (ray.along(t) - self.origin).try_normalize()?;
            return Some(Hit::new(t, normal));
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / (2. * a);
        let far = (-b + root) / (2. * a);
        if far.is_nan() || far < EPSILON {
            // the whole sphere is behind the ray
            return None;
        }

        let hit = if near < EPSILON {
            // the ray starts inside, so it leaves through the far side
            let normal = (ray.along(far) - self.origin).try_normalize()?;
            Hit::new(far, -normal).within()
        } else {
            let normal = (ray.along(near) - self.origin).try_normalize()?;
            Hit::new(near, normal)
        };

        if hit.t > INFINITY {
            None
        } else {
            Some(hit)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Vector3;

    #[test]
    fn hit_from_outside() {
        let sphere = Sphere::new(Point3::new(0., 0., -10.), 2.);
        let ray = Ray::new(Point3::origin(), Vector3::new(0., 0., -1.));
        let hit = sphere.intersect(&ray).unwrap();

        assert_abs_diff_eq!(hit.t, 8., epsilon = 1e-9);
        assert_abs_diff_eq!(hit.normal.z, 1., epsilon = 1e-9);
        assert!(!hit.within);
    }

    #[test]
    fn hit_from_inside() {
        let sphere = Sphere::new(Point3::origin(), 1.);
        let ray = Ray::new(Point3::origin(), Vector3::new(1., 0., 0.));
        let hit = sphere.intersect(&ray).unwrap();

        assert_abs_diff_eq!(hit.t, 1., epsilon = 1e-9);
        assert!(hit.within);
        // faces back toward the ray origin
        assert_abs_diff_eq!(hit.normal.x, -1., epsilon = 1e-9);
    }

    #[test]
    fn miss() {
        let sphere = Sphere::new(Point3::new(0., 0., -5.), 1.);
        let ray = Ray::new(Point3::origin(), Vector3::new(0., 1., 0.));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn behind_the_origin() {
        let sphere = Sphere::new(Point3::new(0., 0., 5.), 1.);
        let ray = Ray::new(Point3::origin(), Vector3::new(0., 0., -1.));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn starting_on_the_surface_looking_out() {
        let sphere = Sphere::new(Point3::origin(), 1.);
        let ray = Ray::new(Point3::new(0., 1., 0.), Vector3::new(0., 1., 0.));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn tangent_ray() {
        let sphere = Sphere::new(Point3::origin(), 1.);
        let ray = Ray::new(Point3::new(0., 1., 5.), Vector3::new(0., 0., -1.));
        let hit = sphere.intersect(&ray).unwrap();

        assert_eq!(hit.t, 5.);
        assert_eq!(hit.normal, Vector3::new(0., 1., 0.));
        assert!(!hit.within);

        // the same graze from behind the sphere is never seen
        let away = Ray::new(Point3::new(0., 1., 5.), Vector3::new(0., 0., 1.));
        assert_eq!(sphere.intersect(&away), None);
    }

    #[test]
    fn nan_direction_is_a_miss() {
        let sphere = Sphere::new(Point3::new(0., 0., -5.), 1.);
        let ray = Ray::new(Point3::origin(), Vector3::new(f64::NAN, 0., -1.));
        assert_eq!(sphere.intersect(&ray), None);
    }
}
