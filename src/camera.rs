use std::fmt::{self, Display, Formatter};

use crate::{
    error::{RenderError, Result},
    math::{Point3, Ray, Vector3},
};

/// How many primary rays are shot per pixel, and where.
///
/// The pattern is fixed per factor rather than an NxN grid:
/// * `X1`: the pixel center.
/// * `X2`: the four quadrant corners, a quarter pixel away from the center.
/// * `X3`: the `X2` corners, the center, and four samples a third of a pixel
///   away along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntiAliasing {
    X1,
    X2,
    X3,
}

impl AntiAliasing {
    pub fn factor(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X3 => 3,
        }
    }

    /// Number of samples per pixel.
    pub fn samples(self) -> usize {
        (self.factor() * self.factor()) as usize
    }
}

impl Default for AntiAliasing {
    fn default() -> Self {
        Self::X1
    }
}

impl TryFrom<u32> for AntiAliasing {
    type Error = RenderError;

    fn try_from(factor: u32) -> Result<Self> {
        match factor {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            3 => Ok(Self::X3),
            n => Err(RenderError::InvalidAntiAliasing(n)),
        }
    }
}

/// A pinhole camera. Projects a view plane in front of a single focal point.
#[derive(Clone, Debug, PartialEq)]
pub struct PinholeCamera {
    position: Point3,
    forward: Vector3,
    right: Vector3,
    up: Vector3,
    distance: f64,
    view_plane_width: f64,
    width: u32,
    height: u32,
}

impl PinholeCamera {
    /// Create a camera at `position` looking along `towards`. `up` only needs to
    /// roughly point up; the basis is re-orthogonalized from it.
    ///
    /// The resolution defaults to 200x200 with a view plane width of 2 until
    /// [`PinholeCamera::init_resolution`] is called. `distance` must be positive
    /// and finite, or the view plane would pass through the focal point.
    pub fn new(position: Point3, towards: Vector3, up: Vector3, distance: f64) -> Result<Self> {
        if !distance.is_finite() || distance <= 0. {
            return Err(RenderError::InvalidPlaneDistance(distance));
        }

        let forward = towards
            .try_normalize()
            .ok_or(RenderError::DegenerateVector("camera towards"))?;
        // an up vector parallel to towards gives no right vector
        let right = forward
            .cross(up)
            .try_normalize()
            .ok_or(RenderError::DegenerateVector("camera up"))?;
        let up = right.cross(forward).normalize();

        Ok(Self {
            position,
            forward,
            right,
            up,
            distance,
            view_plane_width: 2.,
            width: 200,
            height: 200,
        })
    }

    /// Set the resolution of the image and the width of the view plane in world units.
    pub fn init_resolution(&mut self, width: u32, height: u32, view_plane_width: f64) {
        self.width = width;
        self.height = height;
        self.view_plane_width = view_plane_width;
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// The width of one pixel in world units.
    pub fn ratio(&self) -> f64 {
        self.view_plane_width / self.width as f64
    }

    /// The center of the view plane.
    pub fn center(&self) -> Point3 {
        self.position + self.forward * self.distance
    }

    /// Calculate the world-space center of a pixel, where the top-left of the image is (0, 0).
    pub fn transform(&self, x: u32, y: u32) -> Point3 {
        let ratio = self.ratio();
        let dx = (x as f64 - (self.width / 2) as f64) * ratio;
        // image rows grow downward, world up does not
        let dy = -(y as f64 - (self.height / 2) as f64) * ratio;

        self.center() + self.right * dx + self.up * dy
    }

    /// Calculate the world-space sample points of a pixel for an anti-aliasing pattern.
    pub fn samples(&self, x: u32, y: u32, aa: AntiAliasing) -> Vec<Point3> {
        let center = self.transform(x, y);
        if aa == AntiAliasing::X1 {
            return vec![center];
        }

        let mut points = Vec::with_capacity(aa.samples());

        let quarter = self.ratio() / 4.;
        let (up, right) = (self.up * quarter, self.right * quarter);
        points.push(center + up + right);
        points.push(center + up - right);
        points.push(center - up + right);
        points.push(center - up - right);

        if aa == AntiAliasing::X3 {
            let third = self.ratio() / 3.;
            let (up, right) = (self.up * third, self.right * third);
            points.push(center);
            points.push(center + up);
            points.push(center - up);
            points.push(center + right);
            points.push(center - right);
        }

        points
    }

    /// The primary ray passing through a point on the view plane.
    pub fn primary_ray(&self, through: Point3) -> Ray {
        Ray::towards(self.position, through)
    }
}

impl Display for PinholeCamera {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pinhole camera at {} looking along {} (up {}), {} from a {} wide view plane",
            self.position, self.forward, self.up, self.distance, self.view_plane_width
        )
    }
}
