use std::{f64::consts::PI, process, time::Instant};

use clap::{value_t, App, Arg};
use log::{error, info, LevelFilter};

use whitted::{
    lighting::{Directional, Point, Spot},
    material::Material,
    math::{Point3, Vector3},
    object::{AxisAlignedBox, Sphere, Surface},
    RenderSettings, Result, Scene, SceneBuilder,
};

/// A glass sphere in front of a ring of colored mirrors, over a matte floor.
fn demo_scene(max_recursion: u32, anti_aliasing: u32) -> Result<Scene> {
    let mut builder = SceneBuilder::new()
        .init_name("mirror ring")
        .init_camera(
            Point3::new(0., 2., 9.),
            Vector3::new(0., -0.25, -1.),
            Vector3::new(0., 1., 0.),
            2.,
        )?
        .init_ambient(Vector3::splat(0.2))
        .init_background_color(Vector3::new(0.05, 0.1, 0.2))
        .init_max_recursion_level(max_recursion)
        .init_anti_aliasing_factor(anti_aliasing)?
        .init_render_reflections(true)
        .init_render_refractions(true)
        .add_light_source(Directional::new(
            Vector3::new(-0.3, -1., -0.5),
            Vector3::splat(0.5),
        )?)
        .add_light_source(Spot::new(
            Point3::new(0., 6., 2.),
            Vector3::new(0., -1., -0.2),
            Vector3::new(1., 0.9, 0.8),
        )?);

    // add the floor
    builder = builder.add_surface(Surface::new(
        AxisAlignedBox::new(Point3::new(-20., -2., -20.), Point3::new(20., -1., 20.)),
        Material {
            ka: Vector3::splat(0.15),
            kd: Vector3::splat(0.6),
            ks: Vector3::splat(0.1),
            ..Default::default()
        },
    ));

    // add the glass sphere in the middle
    builder = builder.add_surface(Surface::new(
        Sphere::new(Point3::new(0., 0., 2.), 1.),
        Material {
            ka: Vector3::zero(),
            kd: Vector3::splat(0.05),
            ks: Vector3::one(),
            shininess: 80.,
            reflection: 0.1,
            transparent: true,
            refraction: 0.9,
            ..Default::default()
        },
    ));

    // add some colored mirrors and lights around the center
    for n in 0..8 {
        let angle = n as f64 / 8. * PI * 2.;
        let (sin, cos) = angle.sin_cos();
        let tint = Vector3::new(0.5 + cos * 0.5, 0.5 + sin * 0.5, 0.5 - cos * 0.5);

        builder = builder
            .add_light_source(
                Point::new(Point3::new(cos * 4., 3., sin * 4.), tint * 0.4)
                    .with_attenuation(0.02, 0.05, 1.),
            )
            .add_surface(Surface::new(
                Sphere::new(Point3::new(cos * 6., 0.5, sin * 6.), 1.5),
                Material {
                    ka: tint * 0.2,
                    kd: tint * 0.5,
                    reflection: 0.6,
                    ..Default::default()
                },
            ))
            .add_surface(Surface::new(
                AxisAlignedBox::new(
                    Point3::new(cos * 3. - 0.3, -1., sin * 3. - 0.3),
                    Point3::new(cos * 3. + 0.3, -0.4, sin * 3. + 0.3),
                ),
                Material {
                    kd: tint,
                    ..Default::default()
                },
            ));
    }

    builder.build()
}

fn main() {
    let matches = App::new("Whitted Ray Tracer")
        .version("0.1")
        .about("Renders a demo scene with recursive reflections and refractions")
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("The output file")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .help("Image width in pixels")
                .default_value("800"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .help("Image height in pixels")
                .default_value("600"),
        )
        .arg(
            Arg::with_name("view-plane-width")
                .long("view-plane-width")
                .help("Width of the view plane in world units")
                .default_value("2"),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .short("t")
                .help("Number of render workers (default: all cores, at least 2)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("anti-aliasing")
                .long("anti-aliasing")
                .short("a")
                .help("Anti-aliasing factor: 1, 2 or 3")
                .default_value("1"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .short("d")
                .help("Maximum recursion level")
                .default_value("4"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .help("Log level: off, error, warn, info, debug or trace")
                .default_value("info"),
        )
        .get_matches();

    let level = value_t!(matches, "log-level", LevelFilter).unwrap_or_else(|e| e.exit());
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut settings = RenderSettings::new(
        value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit()),
        value_t!(matches, "height", u32).unwrap_or_else(|e| e.exit()),
        value_t!(matches, "view-plane-width", f64).unwrap_or_else(|e| e.exit()),
    );
    if matches.is_present("threads") {
        settings = settings.with_threads(value_t!(matches, "threads", usize).unwrap_or_else(|e| e.exit()));
    }
    let anti_aliasing = value_t!(matches, "anti-aliasing", u32).unwrap_or_else(|e| e.exit());
    let depth = value_t!(matches, "depth", u32).unwrap_or_else(|e| e.exit());
    let output = matches.value_of("output").unwrap_or("render.png");

    let start_time = Instant::now();
    let result = demo_scene(depth, anti_aliasing).and_then(|scene| {
        info!("Scene constructed in {:.3}s", start_time.elapsed().as_secs_f32());
        scene.render(&settings)?.save(output)
    });

    match result {
        Ok(()) => info!(
            "Wrote {} in {:.3}s",
            output,
            start_time.elapsed().as_secs_f32()
        ),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
