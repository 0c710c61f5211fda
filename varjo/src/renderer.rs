use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::{
    camera::{Camera, CameraParameters},
    film::{Film, FilmSettings},
    light::Lighting,
    material::Material,
    math::{Point2, Ray, Spectrum, Vec2, Vec3},
    result::{Intersection, RayStats},
    scene::SceneNode,
    varjo_info, EPSILON,
};

/// Per-render toggles that change what rays report.
#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Render mesh bounding boxes instead of their contents
    pub draw_bounding_boxes: bool,
    /// Substitute the highlight material on picked geometry
    pub highlight_picked: bool,
}

/// The image plus the intersection counters summed over every ray.
#[derive(Clone, Debug)]
pub struct RenderResult {
    pub film: Film,
    pub stats: RayStats,
}

/// Renders `root` seen through `camera_params` onto a new film.
///
/// Rows are traced in parallel; the scene is only read so no locking is
/// needed.
pub fn render(
    root: &SceneNode,
    film_settings: &FilmSettings,
    camera_params: &CameraParameters,
    lighting: &Lighting,
    config: &RenderConfig,
) -> Result<RenderResult, String> {
    let res = film_settings.res;
    if res.x == 0 || res.y == 0 {
        return Err(format!("Film resolution {}x{} is not positive", res.x, res.y));
    }
    if camera_params.fov_degrees <= 0.0 || camera_params.fov_degrees >= 180.0 {
        return Err(format!(
            "Vertical fov {} is outside (0, 180)",
            camera_params.fov_degrees
        ));
    }

    let camera = Camera::new(camera_params, film_settings);

    varjo_info!("Rendering {}x{}", res.x, res.y);
    let render_start = Instant::now();

    let rows: Vec<(Vec<Spectrum<f64>>, RayStats)> = (0..res.y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(res.x as usize);
            let mut stats = RayStats::default();
            for x in 0..res.x {
                let (colour, pixel_stats) =
                    raytrace_pixel(Point2::new(x, y), res, &camera, root, lighting, config);
                stats.merge(pixel_stats);
                row.push(colour);
            }
            (row, stats)
        })
        .collect();

    let mut film = Film::new(res);
    let mut stats = RayStats::default();
    for (y, (row, row_stats)) in rows.iter().enumerate() {
        film.set_row(y as u32, row);
        stats.merge(*row_stats);
    }

    varjo_info!(
        "Render took {:.2}s, {} box checks, {} box hits, {} face tests",
        render_start.elapsed().as_secs_f64(),
        stats.bounding_box_checks,
        stats.bounding_box_hits,
        stats.face_tests
    );

    Ok(RenderResult { film, stats })
}

fn raytrace_pixel(
    p: Point2<u32>,
    res: Vec2<u32>,
    camera: &Camera,
    root: &SceneNode,
    lighting: &Lighting,
    config: &RenderConfig,
) -> (Spectrum<f64>, RayStats) {
    let ray = camera.ray(p);

    let result = root.find_intersections(&ray, config);
    let mut stats = result.stats;

    match nearest_hit(&ray, result.intersections) {
        Some(hit) => {
            let colour = shade(&hit, &ray, root, lighting, config, &mut stats);
            (colour, stats)
        }
        None => (
            gen_background(normalized(p.x, res.x), normalized(p.y, res.y)),
            stats,
        ),
    }
}

fn normalized(v: u32, extent: u32) -> f64 {
    if extent > 1 {
        (v as f64) / ((extent - 1) as f64)
    } else {
        0.0
    }
}

/// The hit with the smallest positive distance along `ray`, if any.
fn nearest_hit(ray: &Ray<f64>, intersections: Vec<Intersection>) -> Option<Intersection> {
    let d_len_sqr = ray.d.len_sqr();
    intersections
        .into_iter()
        .filter_map(|hit| {
            let t = (hit.p - ray.o).dot(ray.d) / d_len_sqr;
            (t > EPSILON).then_some((t, hit))
        })
        .min_by(|(t0, _), (t1, _)| t0.total_cmp(t1))
        .map(|(_, hit)| hit)
}

fn shade(
    hit: &Intersection,
    ray: &Ray<f64>,
    root: &SceneNode,
    lighting: &Lighting,
    config: &RenderConfig,
    stats: &mut RayStats,
) -> Spectrum<f64> {
    // Matte gray for geometry that was never given a material
    let fallback = Material::new(Spectrum::new(0.5, 0.5, 0.5), Spectrum::zeros(), 1.0);
    let material = hit.material.as_deref().unwrap_or(&fallback);

    let n = Vec3::from(hit.n).normalized();
    let v = -ray.d.normalized();

    let mut colour = lighting.ambient * material.diffuse;

    for light in &lighting.lights {
        let to_light = light.position - hit.p;
        let dist = to_light.len();
        if dist < EPSILON {
            continue;
        }
        let l = to_light / dist;

        // Offset along the normal so the shadow ray doesn't re-hit this
        // surface
        let shadow_ray = Ray::new(hit.p + n * EPSILON, l);
        let (occluded, shadow_stats) = raytrace_shadow(&shadow_ray, dist, root, config);
        stats.merge(shadow_stats);
        if occluded {
            continue;
        }

        let n_dot_l = n.dot(l);
        if n_dot_l <= 0.0 {
            continue;
        }

        let light_colour = light.attenuated(dist);
        colour += material.diffuse * light_colour * n_dot_l;

        let r = (n * (2.0 * n_dot_l) - l).normalized();
        let r_dot_v = r.dot(v);
        if r_dot_v > 0.0 {
            colour += material.specular * light_colour * r_dot_v.powf(material.shininess);
        }
    }

    colour
}

/// Checks if anything blocks `ray` before `light_dist`. `ray.d` is assumed
/// normalized.
fn raytrace_shadow(
    ray: &Ray<f64>,
    light_dist: f64,
    root: &SceneNode,
    config: &RenderConfig,
) -> (bool, RayStats) {
    let result = root.find_intersections(ray, config);
    let occluded = result.intersections.iter().any(|hit| {
        let t = (hit.p - ray.o).dot(ray.d);
        t > EPSILON && t < light_dist - EPSILON
    });
    (occluded, result.stats)
}

const BACKGROUND_ZENITH: Spectrum<f64> = Spectrum {
    r: 0.07,
    g: 0.07,
    b: 0.18,
};
const BACKGROUND_HORIZON: Spectrum<f64> = Spectrum {
    r: 0.45,
    g: 0.55,
    b: 0.75,
};

/// The deterministic backdrop for rays that hit nothing, as a function of
/// normalized pixel coordinates in `[0, 1]`. A vertical gradient from a dark
/// zenith to a pale horizon.
fn gen_background(_x: f64, y: f64) -> Spectrum<f64> {
    BACKGROUND_ZENITH.lerp(BACKGROUND_HORIZON, y)
}
