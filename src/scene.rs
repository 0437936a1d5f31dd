use std::{
    any::Any,
    fmt::{self, Display, Formatter},
    panic::{self, AssertUnwindSafe},
    time::Instant,
};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{
    buffer::PixelBuffer,
    camera::{AntiAliasing, PinholeCamera},
    error::{RenderError, Result},
    lighting::Light,
    material::Color,
    math::{refract, Ray, Vector3, EPSILON},
    object::{Hit, Surface},
};

/// Scene options. Defaults are provided.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    /// The name of the scene, used when logging.
    pub name: String,

    /// The ambient light color of the scene.
    pub ambient: Vector3,

    /// The color of rays that hit nothing.
    pub background: Vector3,

    /// The maximum number of recursive traces (reflections, refractions) a primary
    /// ray can spawn, counting the primary ray itself. Zero renders black.
    pub max_recursion_level: u32,

    /// How many primary rays are shot per pixel.
    pub anti_aliasing: AntiAliasing,

    /// Whether mirror reflections are traced.
    pub reflections: bool,

    /// Whether refraction through transparent surfaces is traced.
    pub refractions: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            name: "scene".to_owned(),
            ambient: Vector3::one(),
            background: Vector3::new(0., 0.5, 1.),
            max_recursion_level: 1,
            anti_aliasing: AntiAliasing::X1,
            reflections: false,
            refractions: false,
        }
    }
}

/// The size of the image to render and of the worker pool rendering it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// The width of the camera's view plane in world units.
    pub view_plane_width: f64,

    /// Number of worker threads. `None` or zero uses every available core, but
    /// never fewer than two.
    pub threads: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            view_plane_width: 2.,
            threads: None,
        }
    }
}

impl RenderSettings {
    pub fn new(width: u32, height: u32, view_plane_width: f64) -> Self {
        Self {
            width,
            height,
            view_plane_width,
            threads: None,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// The number of workers a render with these settings uses.
    pub fn worker_count(&self) -> usize {
        self.threads.filter(|&n| n > 0).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .max(2)
        })
    }
}

/// A scene, which contains a list of surfaces, lights, and a camera to render from.
///
/// A scene is assembled with a [`SceneBuilder`](crate::builder::SceneBuilder) and is
/// immutable once built, so it can be shared between render workers freely.
pub struct Scene {
    camera: PinholeCamera,
    lights: Vec<Box<dyn Light>>,
    surfaces: Vec<Surface>,
    options: SceneOptions,
}

impl Scene {
    pub(crate) fn new(
        camera: PinholeCamera,
        lights: Vec<Box<dyn Light>>,
        surfaces: Vec<Surface>,
        options: SceneOptions,
    ) -> Self {
        Self {
            camera,
            lights,
            surfaces,
            options,
        }
    }

    pub fn camera(&self) -> &PinholeCamera {
        &self.camera
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    /// Find the nearest surface struck by a ray, along with the hit.
    ///
    /// Surfaces are tested in the order they were added; when two hits are
    /// exactly as near, the earlier surface wins.
    pub fn min_hit(&self, ray: &Ray) -> Option<(&Surface, Hit)> {
        let mut nearest: Option<(&Surface, Hit)> = None;

        // brute force: every surface, every ray
        for surface in self.surfaces.iter() {
            let hit = match surface.intersect(ray) {
                Some(hit) if hit.t > EPSILON => hit,
                _ => continue,
            };

            if nearest.map_or(true, |(_, best)| hit.t < best.t) {
                nearest = Some((surface, hit));
            }
        }

        nearest
    }

    /// Whether a shadow ray reaches its light without any surface in the way.
    pub fn is_lit(&self, light: &dyn Light, shadow_ray: &Ray) -> bool {
        !self
            .surfaces
            .iter()
            .any(|surface| light.is_occluded_by(surface, shadow_ray))
    }

    /// Trace out a ray, getting its unclamped color. `depth` is the number of
    /// recursion levels left; at zero the ray carries no light.
    pub fn trace_ray(&self, ray: &Ray, depth: u32) -> Vector3 {
        if depth == 0 {
            return Vector3::zero();
        }

        let (surface, hit) = match self.min_hit(ray) {
            Some(r) => r,
            None => return self.options.background,
        };

        let material = surface.material();
        let point = hit.pos(ray);
        let normal = hit.normal;

        let mut color = material.ka * self.options.ambient;

        // Phong contribution of every light that can see the point
        let view = -ray.direction;
        for light in self.lights.iter() {
            // a light sitting on the point has no direction to shine from
            let shadow_ray = match light.ray_to_light(point) {
                Some(ray) if self.is_lit(light.as_ref(), &ray) => ray,
                _ => continue,
            };

            let to_light = shadow_ray.direction;
            let n_dot_l = normal.dot(to_light);
            let mirrored = normal * (2. * n_dot_l) - to_light;

            let diffuse = material.kd * n_dot_l.max(0.);
            let specular = material.ks * view.dot(mirrored).max(0.).powf(material.shininess);

            color += (diffuse + specular) * light.intensity(point, &shadow_ray);
        }

        if self.options.reflections && material.reflection > 0. {
            let reflected = ray.reflect(point, normal);
            color += self.trace_ray(&reflected, depth - 1) * material.reflection;
        }

        if self.options.refractions && material.transparent {
            let (from, to) = material.indices(hit.within);

            // total internal reflection leaves nothing to refract
            if let Some(direction) = refract(ray.direction, normal, from, to) {
                let refracted = Ray::new(point, direction);
                color += self.trace_ray(&refracted, depth - 1) * material.refraction;
            }
        }

        color
    }

    /// Trace out a pixel, where top-left of the image is (0, 0), averaging every
    /// anti-aliasing sample. The camera must already have its resolution set.
    pub fn trace_pixel(&self, camera: &PinholeCamera, x: u32, y: u32) -> Vector3 {
        let samples = camera.samples(x, y, self.options.anti_aliasing);
        let count = samples.len() as f64;

        samples
            .into_iter()
            .map(|point| self.trace_ray(&camera.primary_ray(point), self.options.max_recursion_level))
            .sum::<Vector3>()
            / count
    }

    /// Render one pixel as an isolated task. A panic while tracing, or a color
    /// that is not finite, fails the pixel instead of the whole process.
    fn render_pixel(&self, camera: &PinholeCamera, x: u32, y: u32) -> Result<Color> {
        let color = panic::catch_unwind(AssertUnwindSafe(|| self.trace_pixel(camera, x, y)))
            .map_err(|payload| RenderError::WorkerPanicked {
                x,
                y,
                message: panic_message(payload),
            })?;

        if !color.is_finite() {
            return Err(RenderError::NonFiniteColor { x, y });
        }

        Ok(color.into())
    }

    /// Render the image out as a buffer of colors.
    ///
    /// Every pixel is an independent task on a dedicated pool of
    /// [`RenderSettings::worker_count`] threads. Results are placed by pixel
    /// index, so the image does not depend on the number of workers. If any
    /// pixel fails, the error of the first failing pixel in row-major order is
    /// returned and the rest of the image is discarded.
    pub fn render(&self, settings: &RenderSettings) -> Result<PixelBuffer> {
        let (width, height) = (settings.width, settings.height);
        if width == 0
            || height == 0
            || !settings.view_plane_width.is_finite()
            || settings.view_plane_width <= 0.
        {
            return Err(RenderError::InvalidResolution {
                width,
                height,
                view_plane_width: settings.view_plane_width,
            });
        }

        let start = Instant::now();

        let mut camera = self.camera.clone();
        camera.init_resolution(width, height, settings.view_plane_width);

        let threads = settings.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("render-worker-{}", i))
            .build()?;
        info!("Using {} threads to render {}", threads, self.name());

        let pixel_count = width as usize * height as usize;
        info!(
            "Shooting {} rays over {}",
            pixel_count * self.options.anti_aliasing.samples(),
            self.name()
        );

        let results = pool.install(|| {
            (0..pixel_count)
                .into_par_iter()
                .map(|i| {
                    let (x, y) = ((i % width as usize) as u32, (i / width as usize) as u32);
                    self.render_pixel(&camera, x, y)
                })
                .collect::<Vec<_>>()
        });
        debug!("All {} pixel tasks resolved", pixel_count);

        let pixels = results
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                warn!("Rendering {} failed: {}", self.name(), e);
                e
            })?;

        info!(
            "Ray tracing of {} completed in {:.3}s",
            self.name(),
            start.elapsed().as_secs_f32()
        );

        Ok(PixelBuffer::new(width, height, pixels))
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

impl Display for Scene {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scene: {}", self.options.name)?;
        writeln!(f, "Camera: {}", self.camera)?;
        writeln!(f, "Ambient: {}", self.options.ambient)?;
        writeln!(f, "Background color: {}", self.options.background)?;
        writeln!(f, "Max recursion level: {}", self.options.max_recursion_level)?;
        writeln!(
            f,
            "Anti aliasing factor: {}",
            self.options.anti_aliasing.factor()
        )?;
        writeln!(
            f,
            "Reflections: {}, refractions: {}",
            self.options.reflections, self.options.refractions
        )?;

        writeln!(f, "Light sources:")?;
        for light in self.lights.iter() {
            writeln!(f, "  {}", light)?;
        }

        writeln!(f, "Surfaces:")?;
        for surface in self.surfaces.iter() {
            writeln!(f, "  {}", surface)?;
        }

        Ok(())
    }
}
