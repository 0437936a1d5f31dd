mod point;
mod ray;
mod vector;

pub use point::*;
pub use ray::*;
pub use vector::*;

/// A very small value, close to zero. Intersections closer than this are treated
/// as lying on the ray origin, and direction components smaller than this are
/// treated as zero.
pub const EPSILON: f64 = 1e-5;

/// The farthest distance along a ray that still counts as an intersection.
pub const INFINITY: f64 = 1e8;

/// An axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Reflect a direction about a normal.
pub fn reflect(direction: Vector3, normal: Vector3) -> Vector3 {
    direction - normal * (2. * direction.dot(normal))
}

/// Calculate the refraction vector of a direction crossing from a medium of index
/// `from_ior` into one of index `to_ior`. The normal must face against the
/// direction. Returns `None` on total internal reflection.
pub fn refract(direction: Vector3, normal: Vector3, from_ior: f64, to_ior: f64) -> Option<Vector3> {
    let n = from_ior / to_ior;
    let cos_i = -normal.dot(direction);
    let sin_t2 = n * n * (1. - cos_i * cos_i);
    if sin_t2 > 1. {
        return None;
    }

    let cos_t = (1. - sin_t2).sqrt();
    let refracted = direction * n + normal * (n * cos_i - cos_t);
    refracted.try_normalize()
}
