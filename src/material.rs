use std::fmt::{self, Display, Formatter};

use crate::math::Vector3;

/// A 24-bit color, RGB. This is what ends up in the rendered pixel buffer;
/// shading itself happens on unclamped [`Vector3`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Instantiate a new Color from 3 f64s, clamped to the range 0-1.
    pub fn newf(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r.clamp(0., 1.) * 255.0) as u8,
            g: (g.clamp(0., 1.) * 255.0) as u8,
            b: (b.clamp(0., 1.) * 255.0) as u8,
        }
    }
}

impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self::newf(v.x, v.y, v.z)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

/// The material of a surface: Phong coefficients plus the reflective and
/// refractive behavior used by the recursive tracer.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Ambient reflectance, per channel.
    pub ka: Vector3,

    /// Diffuse reflectance, per channel.
    pub kd: Vector3,

    /// Specular reflectance, per channel.
    pub ks: Vector3,

    /// The power the specular term is raised to. Higher values give smaller,
    /// sharper highlights.
    pub shininess: f64,

    /// How much of the mirror-reflected color is added (kr).
    pub reflection: f64,

    /// Whether rays refract through this surface.
    pub transparent: bool,

    /// How much of the refracted color is added (kt). Only used when `transparent` is set.
    pub refraction: f64,

    /// The index of refraction outside the surface.
    pub n1: f64,

    /// The index of refraction inside the surface.
    pub n2: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ka: Vector3::splat(0.1),
            kd: Vector3::splat(1.),
            ks: Vector3::splat(0.7),
            shininess: 10.,
            reflection: 0.,
            transparent: false,
            refraction: 0.,
            n1: 1.,
            n2: 1.5,
        }
    }
}

impl Material {
    /// The `(from, to)` refractive indices for a ray crossing this surface.
    /// A ray that starts inside the surface is leaving it, so the order flips.
    pub fn indices(&self, within: bool) -> (f64, f64) {
        if within {
            (self.n2, self.n1)
        } else {
            (self.n1, self.n2)
        }
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ka: {}, Kd: {}, Ks: {}, shininess: {}, kr: {}",
            self.ka, self.kd, self.ks, self.shininess, self.reflection
        )?;
        if self.transparent {
            write!(f, ", kt: {}, n1: {}, n2: {}", self.refraction, self.n1, self.n2)?;
        }
        Ok(())
    }
}
