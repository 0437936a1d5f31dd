use log::debug;

use crate::{
    camera::{AntiAliasing, PinholeCamera},
    error::{RenderError, Result},
    lighting::Light,
    math::{Point3, Vector3},
    object::Surface,
    scene::{Scene, SceneOptions},
};

/// Assembles a [`Scene`]. Every setting has a default except the camera.
///
/// ```
/// use whitted::{
///     builder::SceneBuilder,
///     lighting::Point,
///     material::Material,
///     math::{Point3, Vector3},
///     object::{Sphere, Surface},
/// };
///
/// let scene = SceneBuilder::new()
///     .init_camera(
///         Point3::origin(),
///         Vector3::new(0., 0., -1.),
///         Vector3::new(0., 1., 0.),
///         1.,
///     )?
///     .add_light_source(Point::new(Point3::new(0., 4., 0.), Vector3::one()))
///     .add_surface(Surface::new(Sphere::default(), Material::default()))
///     .build()?;
/// assert_eq!(scene.surfaces().len(), 1);
/// # Ok::<(), whitted::error::RenderError>(())
/// ```
#[derive(Default)]
pub struct SceneBuilder {
    camera: Option<PinholeCamera>,
    lights: Vec<Box<dyn Light>>,
    surfaces: Vec<Surface>,
    options: SceneOptions,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_name<S: Into<String>>(mut self, name: S) -> Self {
        self.options.name = name.into();
        self
    }

    /// Place the camera at `position`, looking along `towards`, with the view
    /// plane `plane_distance` in front of it.
    pub fn init_camera(
        mut self,
        position: Point3,
        towards: Vector3,
        up: Vector3,
        plane_distance: f64,
    ) -> Result<Self> {
        self.camera = Some(PinholeCamera::new(position, towards, up, plane_distance)?);
        Ok(self)
    }

    pub fn init_ambient(mut self, ambient: Vector3) -> Self {
        self.options.ambient = ambient;
        self
    }

    pub fn init_background_color(mut self, background: Vector3) -> Self {
        self.options.background = background;
        self
    }

    pub fn add_light_source<L: Light + 'static>(mut self, light: L) -> Self {
        self.lights.push(Box::new(light));
        self
    }

    pub fn add_surface(mut self, surface: Surface) -> Self {
        self.surfaces.push(surface);
        self
    }

    pub fn init_max_recursion_level(mut self, level: u32) -> Self {
        self.options.max_recursion_level = level;
        self
    }

    /// Set the anti-aliasing factor. Only 1, 2 and 3 are supported.
    pub fn init_anti_aliasing_factor(mut self, factor: u32) -> Result<Self> {
        self.options.anti_aliasing = AntiAliasing::try_from(factor)?;
        Ok(self)
    }

    pub fn init_render_reflections(mut self, enabled: bool) -> Self {
        self.options.reflections = enabled;
        self
    }

    pub fn init_render_refractions(mut self, enabled: bool) -> Self {
        self.options.refractions = enabled;
        self
    }

    /// Replace every option at once, keeping the camera, lights and surfaces.
    pub fn with_options(mut self, options: SceneOptions) -> Self {
        self.options = options;
        self
    }

    /// Freeze the scene. Fails if no camera was set.
    pub fn build(self) -> Result<Scene> {
        let camera = self.camera.ok_or(RenderError::MissingCamera)?;
        debug!(
            "Built scene {} with {} surfaces and {} lights",
            self.options.name,
            self.surfaces.len(),
            self.lights.len()
        );
        Ok(Scene::new(camera, self.lights, self.surfaces, self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lighting::{Directional, Spot},
        material::Material,
        object::{AxisAlignedBox, Sphere},
    };

    fn with_camera() -> SceneBuilder {
        SceneBuilder::new()
            .init_camera(
                Point3::new(0., 0., 5.),
                Vector3::new(0., 0., -1.),
                Vector3::new(0., 1., 0.),
                1.,
            )
            .unwrap()
    }

    #[test]
    fn defaults() {
        let scene = with_camera().build().unwrap();
        let options = scene.options();

        assert_eq!(options.name, "scene");
        assert_eq!(options.ambient, Vector3::one());
        assert_eq!(options.background, Vector3::new(0., 0.5, 1.));
        assert_eq!(options.max_recursion_level, 1);
        assert_eq!(options.anti_aliasing, AntiAliasing::X1);
        assert!(!options.reflections);
        assert!(!options.refractions);
        assert!(scene.lights().is_empty());
        assert!(scene.surfaces().is_empty());
    }

    #[test]
    fn camera_is_required() {
        assert!(matches!(
            SceneBuilder::new().build(),
            Err(RenderError::MissingCamera)
        ));
    }

    #[test]
    fn degenerate_camera_is_rejected() {
        let result = SceneBuilder::new().init_camera(
            Point3::origin(),
            Vector3::zero(),
            Vector3::new(0., 1., 0.),
            1.,
        );
        assert!(matches!(result, Err(RenderError::DegenerateVector(_))));
    }

    #[test]
    fn camera_on_its_own_view_plane_is_rejected() {
        let result = SceneBuilder::new().init_camera(
            Point3::origin(),
            Vector3::new(0., 0., -1.),
            Vector3::new(0., 1., 0.),
            0.,
        );
        assert!(matches!(result, Err(RenderError::InvalidPlaneDistance(d)) if d == 0.));
    }

    #[test]
    fn settings_are_kept_in_order() {
        let scene = with_camera()
            .init_name("two boxes")
            .init_ambient(Vector3::splat(0.2))
            .init_background_color(Vector3::zero())
            .init_max_recursion_level(5)
            .init_anti_aliasing_factor(2)
            .unwrap()
            .init_render_reflections(true)
            .init_render_refractions(true)
            .add_light_source(Directional::default())
            .add_light_source(
                Spot::new(Point3::origin(), Vector3::new(0., -1., 0.), Vector3::one()).unwrap(),
            )
            .add_surface(Surface::new(Sphere::default(), Material::default()))
            .add_surface(Surface::new(AxisAlignedBox::default(), Material::default()))
            .build()
            .unwrap();

        assert_eq!(scene.name(), "two boxes");
        assert_eq!(scene.options().max_recursion_level, 5);
        assert_eq!(scene.options().anti_aliasing, AntiAliasing::X2);
        assert!(scene.options().reflections && scene.options().refractions);
        assert_eq!(scene.lights().len(), 2);
        assert!(scene.surfaces()[1].to_string().starts_with("Box from"));
    }

    #[test]
    fn anti_aliasing_factor_is_validated() {
        for factor in [0, 4, 16] {
            assert!(matches!(
                with_camera().init_anti_aliasing_factor(factor),
                Err(RenderError::InvalidAntiAliasing(f)) if f == factor
            ));
        }
    }
}
