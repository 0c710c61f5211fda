use std::sync::Arc;

use crate::{
    math::{Normal, Point3, Ray, Vec3},
    mesh::Mesh,
    renderer::RenderConfig,
    result::{Intersection, RayResult, RayStats},
    EPSILON,
};

/// The closed set of geometric test objects.
///
/// A primitive knows nothing about transforms or materials; rays arrive in
/// its local space and hits leave in it.
#[derive(Clone, Debug)]
pub enum Primitive {
    /// Unit sphere at the origin
    Sphere,
    /// Axis-aligned unit cube spanning `[0, 1]` on each axis
    Cube,
    /// Sphere with explicit center and radius
    NonhierSphere { pos: Point3<f64>, radius: f64 },
    /// Axis-aligned box with explicit corner and edge length
    NonhierBox { pos: Point3<f64>, size: f64 },
    /// Polygon soup, see [Mesh]
    Mesh(Arc<Mesh>),
}

impl Primitive {
    /// Intersects `ray` with this primitive, `ray` in the primitive's local
    /// space.
    ///
    /// Hits closer than [EPSILON] along the ray are rejected so a ray never
    /// re-hits the surface it just left. Parallel and degenerate cases
    /// report no intersection.
    pub fn intersect(&self, ray: &Ray<f64>, config: &RenderConfig) -> RayResult {
        match self {
            Self::Sphere => sphere_intersection(ray, Point3::zeros(), 1.0),
            Self::Cube => box_intersection(ray, Point3::zeros(), Point3::new(1.0, 1.0, 1.0)),
            Self::NonhierSphere { pos, radius } => sphere_intersection(ray, *pos, *radius),
            Self::NonhierBox { pos, size } => {
                box_intersection(ray, *pos, *pos + Vec3::from(*size))
            }
            Self::Mesh(mesh) => mesh.intersect(ray, config),
        }
    }
}

fn sphere_intersection(ray: &Ray<f64>, center: Point3<f64>, radius: f64) -> RayResult {
    let oc = ray.o - center;

    // Quadratic coefficients
    let a = ray.d.dot(ray.d);
    if a < EPSILON {
        // Degenerate ray direction
        return RayResult::default();
    }
    let b = 2.0 * oc.dot(ray.d);
    let c = oc.dot(oc) - radius * radius;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return RayResult::default();
    }
    let rd = disc.sqrt();

    // Numerically stable root pairing
    let q = if b < 0.0 {
        -0.5 * (b - rd)
    } else {
        -0.5 * (b + rd)
    };
    let mut t0 = q / a;
    let mut t1 = if q != 0.0 { c / q } else { t0 };
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }

    let t = if t0 > EPSILON {
        t0
    } else if t1 > EPSILON {
        t1
    } else {
        return RayResult::default();
    };

    let p = ray.point(t);
    let n = Normal::from((p - center) / radius);
    RayResult::new(vec![Intersection::new(p, n, None)], RayStats::default())
}

fn box_intersection(ray: &Ray<f64>, p_min: Point3<f64>, p_max: Point3<f64>) -> RayResult {
    let mut t_near = f64::NEG_INFINITY;
    let mut t_far = f64::INFINITY;
    // Outward normals of the faces crossed at t_near/t_far
    let mut n_near = Normal::new(0.0, 0.0, 1.0);
    let mut n_far = Normal::new(0.0, 0.0, 1.0);

    for i in 0..3 {
        let o = ray.o[i];
        let d = ray.d[i];
        if d.abs() < EPSILON {
            // Parallel to this slab; miss unless the origin lies within it
            if o < p_min[i] || o > p_max[i] {
                return RayResult::default();
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t0 = (p_min[i] - o) * inv;
        let mut t1 = (p_max[i] - o) * inv;
        // Outward normal is negative on the min face, positive on the max
        let mut face0 = -1.0;
        let mut face1 = 1.0;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
            std::mem::swap(&mut face0, &mut face1);
        }

        if t0 > t_near {
            t_near = t0;
            n_near = axis_normal(i, face0);
        }
        if t1 < t_far {
            t_far = t1;
            n_far = axis_normal(i, face1);
        }
        if t_near > t_far {
            return RayResult::default();
        }
    }

    // Entry face if it is ahead of the origin, exit face if we start inside
    let (t, n) = if t_near > EPSILON {
        (t_near, n_near)
    } else if t_far > EPSILON {
        (t_far, n_far)
    } else {
        return RayResult::default();
    };

    RayResult::new(
        vec![Intersection::new(ray.point(t), n, None)],
        RayStats::default(),
    )
}

fn axis_normal(axis: usize, sign: f64) -> Normal<f64> {
    let mut n = Normal::new(0.0, 0.0, 0.0);
    match axis {
        0 => n.x = sign,
        1 => n.y = sign,
        _ => n.z = sign,
    }
    n
}
