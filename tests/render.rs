use std::fmt::{self, Display, Formatter};

use whitted::{
    lighting::{Point, Spot},
    material::{Color, Material},
    math::{Point3, Ray, Vector3},
    object::{AxisAlignedBox, Hit, Intersect, Sphere, Surface},
    RenderError, RenderSettings, SceneBuilder,
};

fn builder() -> SceneBuilder {
    SceneBuilder::new()
        .init_camera(
            Point3::new(0., 0., 5.),
            Vector3::new(0., 0., -1.),
            Vector3::new(0., 1., 0.),
            1.,
        )
        .unwrap()
}

fn busy_builder() -> SceneBuilder {
    builder()
        .init_max_recursion_level(4)
        .init_render_reflections(true)
        .init_render_refractions(true)
        .add_light_source(Point::new(Point3::new(2., 4., 3.), Vector3::one()))
        .add_light_source(
            Spot::new(Point3::new(-3., 3., 2.), Vector3::new(1., -1., -1.), Vector3::splat(0.7)).unwrap(),
        )
        .add_surface(Surface::new(
            Sphere::new(Point3::new(-0.8, 0., 0.), 0.7),
            Material {
                reflection: 0.5,
                ..Default::default()
            },
        ))
        .add_surface(Surface::new(
            Sphere::new(Point3::new(0.8, 0., 0.5), 0.6),
            Material {
                transparent: true,
                refraction: 0.8,
                ..Default::default()
            },
        ))
        .add_surface(Surface::new(
            AxisAlignedBox::new(Point3::new(-5., -2., -5.), Point3::new(5., -1., 5.)),
            Material::default(),
        ))
}

#[test]
fn output_does_not_depend_on_worker_count() {
    let scene = busy_builder().init_anti_aliasing_factor(2).unwrap().build().unwrap();
    let settings = RenderSettings::new(24, 16, 2.);

    let single = scene.render(&settings.clone().with_threads(1)).unwrap();
    let many = scene.render(&settings.clone().with_threads(8)).unwrap();
    let default = scene.render(&settings).unwrap();

    assert_eq!(single, many);
    assert_eq!(single, default);
}

#[test]
fn buffer_matches_the_requested_size() {
    let scene = busy_builder().build().unwrap();
    let buffer = scene.render(&RenderSettings::new(7, 3, 1.5)).unwrap();

    assert_eq!((buffer.width(), buffer.height()), (7, 3));
    assert_eq!(buffer.pixels().len(), 21);
    assert_eq!(buffer.to_rgb_image().dimensions(), (7, 3));
}

#[test]
fn every_factor_of_a_flat_scene_gives_the_same_image() {
    // channels chosen so averaging noise cannot cross an 8-bit boundary
    let background = Vector3::new(0.5, 0.25, 0.75);
    let expected = Color::from(background);

    for factor in 1..=3 {
        let scene = builder()
            .init_background_color(background)
            .init_anti_aliasing_factor(factor)
            .unwrap()
            .build()
            .unwrap();
        let buffer = scene.render(&RenderSettings::new(5, 4, 2.)).unwrap();
        assert!(buffer.pixels().iter().all(|c| *c == expected));
    }
}

#[test]
fn centered_sphere_covers_the_center_pixel() {
    let background = Vector3::zero();
    let scene = builder()
        .init_background_color(background)
        .add_light_source(Point::new(Point3::new(0., 0., 5.), Vector3::one()))
        .add_surface(Surface::new(Sphere::new(Point3::origin(), 1.), Material::default()))
        .build()
        .unwrap();
    let buffer = scene.render(&RenderSettings::new(21, 21, 2.)).unwrap();

    assert_ne!(buffer.get(10, 10), Some(Color::black()));
    assert_eq!(buffer.get(0, 0), Some(Color::black()));
    assert_eq!(buffer.get(20, 20), Some(Color::black()));
}

#[test]
fn colors_are_clamped() {
    let scene = builder()
        .init_ambient(Vector3::splat(10.))
        .add_surface(Surface::new(
            AxisAlignedBox::new(Point3::new(-10., -10., -2.), Point3::new(10., 10., -1.)),
            Material::default(),
        ))
        .build()
        .unwrap();
    let buffer = scene.render(&RenderSettings::new(4, 4, 2.)).unwrap();

    assert!(buffer.pixels().iter().all(|c| *c == Color::white()));
}

#[test]
fn light_resting_on_a_surface_renders() {
    let scene = SceneBuilder::new()
        .init_camera(
            Point3::new(0., 3., 0.),
            Vector3::new(0., -1., 0.),
            Vector3::new(0., 0., -1.),
            1.,
        )
        .unwrap()
        .add_light_source(Point::new(Point3::new(0., -1., 0.), Vector3::one()))
        .add_surface(Surface::new(
            AxisAlignedBox::new(Point3::new(-5., -2., -5.), Point3::new(5., -1., 5.)),
            Material::default(),
        ))
        .build()
        .unwrap();

    // the center ray strikes the floor right where the light sits
    let buffer = scene.render(&RenderSettings::new(4, 4, 2.)).unwrap();
    assert!(buffer.get(2, 2).is_some());
}

#[test]
fn bad_resolution_is_rejected() {
    let scene = builder().build().unwrap();

    for settings in [
        RenderSettings::new(0, 10, 2.),
        RenderSettings::new(10, 0, 2.),
        RenderSettings::new(10, 10, 0.),
        RenderSettings::new(10, 10, f64::NAN),
    ] {
        assert!(matches!(
            scene.render(&settings),
            Err(RenderError::InvalidResolution { .. })
        ));
    }
}

/// A shape that panics for any ray heading right.
#[derive(Debug)]
struct Exploding;

impl Display for Exploding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Exploding shape")
    }
}

impl Intersect for Exploding {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        if ray.direction.x > 0. {
            panic!("exploded on {:?}", ray.direction);
        }
        None
    }
}

#[test]
fn first_failing_pixel_is_reported() {
    let scene = builder()
        .add_surface(Surface::new(Exploding, Material::default()))
        .build()
        .unwrap();

    for threads in [1, 2, 8] {
        let result = scene.render(&RenderSettings::new(8, 4, 2.).with_threads(threads));

        // column 4 is the center; the first ray heading right is column 5 of row 0
        match result {
            Err(RenderError::WorkerPanicked { x, y, message }) => {
                assert_eq!((x, y), (5, 0));
                assert!(message.starts_with("exploded on"));
            }
            other => panic!("expected a worker panic, got {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn non_finite_colors_fail_the_render() {
    let scene = builder()
        .add_surface(Surface::new(
            Sphere::new(Point3::origin(), 1.),
            Material {
                ka: Vector3::splat(f64::INFINITY),
                ..Default::default()
            },
        ))
        .build()
        .unwrap();

    // only the center ray is close enough to the axis to strike the sphere
    let result = scene.render(&RenderSettings::new(9, 9, 2.));
    assert!(matches!(result, Err(RenderError::NonFiniteColor { x: 4, y: 4 })));
}

#[test]
fn render_can_be_saved() {
    let scene = busy_builder().build().unwrap();
    let buffer = scene.render(&RenderSettings::new(6, 6, 2.)).unwrap();

    let path = std::env::temp_dir().join(format!("whitted-render-{}.png", std::process::id()));
    buffer.save(&path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgb8();
    std::fs::remove_file(&path).ok();
    assert_eq!(reloaded, buffer.to_rgb_image());
}
