use std::time::Instant;

use varjo::{
    camera::CameraParameters,
    film::FilmSettings,
    light::{Light, Lighting},
    material::Material,
    math::{Matrix4x4, Point3, Spectrum, Vec2, Vec3},
    mesh::{Mesh, MeshSettings},
    primitive::Primitive,
    renderer::{render, RenderConfig},
    scene::{NodeIdAllocator, SceneNode},
};

use std::sync::Arc;

const INVERT_ITERATIONS: usize = 5_000_000;

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn bench_invert(name: &str, m: &Matrix4x4<f64>) {
    let mut m = *m;
    let start = Instant::now();
    for _ in 0..INVERT_ITERATIONS {
        m = m.inverted();
        if m.m[0][0].is_nan() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_invert = (elapsed_ns as f64) * 1e-3 / (INVERT_ITERATIONS as f64);
    println!(
        "{:8} took {:4.1} ms total, {:0.4} us per invert",
        name, elapsed_ms, us_per_invert
    );
}

// A quad grid standing in for a real model, heavy enough that the mesh
// hierarchy matters
fn grid_mesh(n: usize, subdivide: bool, ids: &mut NodeIdAllocator) -> Mesh {
    let mut verts = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            verts.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }
    let mut faces = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            faces.push(vec![
                j * (n + 1) + i,
                j * (n + 1) + i + 1,
                (j + 1) * (n + 1) + i + 1,
                (j + 1) * (n + 1) + i,
            ]);
        }
    }

    let settings = MeshSettings {
        subdivide,
        max_depth: 2,
        max_faces: 20,
    };
    Mesh::new(verts, faces, &settings, ids)
}

fn bench_render(name: &str, subdivide: bool) {
    let grid_dim = 32;

    let mut ids = NodeIdAllocator::new();
    let mut root = SceneNode::new("root", &mut ids);
    let mesh = grid_mesh(grid_dim, subdivide, &mut ids);
    let mut geom = SceneNode::geometry("grid", Arc::new(Primitive::Mesh(Arc::new(mesh))), &mut ids);
    geom.set_material(Arc::new(Material::new(
        Spectrum::new(0.8, 0.8, 0.8),
        Spectrum::new(0.2, 0.2, 0.2),
        25.0,
    )));
    root.add_child(geom);

    let half = (grid_dim as f64) / 2.0;
    let camera = CameraParameters {
        position: Point3::new(half, half, -40.0),
        view: Vec3::new(0.0, 0.0, 1.0),
        up: Vec3::new(0.0, 1.0, 0.0),
        fov_degrees: 50.0,
    };
    let film = FilmSettings {
        res: Vec2::new(128, 128),
    };
    let lighting = Lighting {
        ambient: Spectrum::new(0.1, 0.1, 0.1),
        lights: vec![Light::new(
            Spectrum::ones(),
            Point3::new(half, half, -20.0),
            [1.0, 0.0, 0.0],
        )],
    };

    let start = Instant::now();
    let result = render(
        &root,
        &film,
        &camera,
        &lighting,
        &RenderConfig::default(),
    )
    .unwrap();
    let elapsed_ms = (start.elapsed().as_nanos() as f64) * 1e-6;
    println!(
        "{:12} took {:6.1} ms, {} box checks, {} box hits, {} face tests",
        name,
        elapsed_ms,
        result.stats.bounding_box_checks,
        result.stats.bounding_box_hits,
        result.stats.face_tests
    );
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let s = Matrix4x4::new([
        [2.0, 0.0, 0.0, 0.0],
        [0.0, 3.0, 0.0, 0.0],
        [0.0, 0.0, 4.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let r = Matrix4x4::new([
        [-0.6024969, 0.6975837, -0.3877816, 0.0],
        [-0.1818856, -0.5930915, -0.7843214, 0.0],
        [-0.7771198, -0.4020193, 0.4842162, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let t = Matrix4x4::new([
        [1.0, 0.0, 0.0, 2.0],
        [0.0, 1.0, 0.0, 3.0],
        [0.0, 0.0, 1.0, 4.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    println!("Matrix inverts");
    bench_invert("Identity", &Matrix4x4::identity());
    bench_invert("S", &s);
    bench_invert("SR", &(&r * &s));
    bench_invert("SRT", &(&t * &(&r * &s)));

    println!("Renders");
    bench_render("flat mesh", false);
    bench_render("tree mesh", true);
}
