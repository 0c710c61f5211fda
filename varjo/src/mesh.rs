use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt, sync::Arc};

use crate::{
    math::{Normal, Point3, Ray, Vec3},
    primitive::Primitive,
    renderer::RenderConfig,
    result::{Intersection, RayResult},
    scene::{NodeIdAllocator, SceneNode},
    varjo_debug, varjo_info, varjo_warn, EPSILON,
};

/// A face is a planar simple polygon given as indices into the mesh's vertex
/// list, wound consistently.
pub type Face = Vec<usize>;

/// Acceleration knobs for [Mesh] construction.
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct MeshSettings {
    /// Build a spatial hierarchy of sub-meshes
    pub subdivide: bool,
    /// Subdivision recursion limit
    pub max_depth: u32,
    /// Face count below which a mesh is not subdivided further
    pub max_faces: usize,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            subdivide: false,
            max_depth: 1,
            max_faces: 20,
        }
    }
}

// No acceleration at all below this; the box tests would cost more than they
// save
const MIN_ACCEL_FACES: usize = 6;

const BOUND_MIN_EXTENT: f64 = 0.001;

/// Vertices and polygonal faces, optionally wrapped in a bounding box and/or
/// subdivided into a hierarchy of sub-meshes.
///
/// When the subdivision hierarchy is built, the geometry moves down into its
/// leaves and this mesh keeps only the bounding box.
#[derive(Debug)]
pub struct Mesh {
    verts: Vec<Point3<f64>>,
    faces: Vec<Face>,
    bound: Option<SceneNode>,
    descendants: Option<SceneNode>,
}

impl Mesh {
    /// Creates a new `Mesh`, building acceleration structures per `settings`.
    pub fn new(
        verts: Vec<Point3<f64>>,
        faces: Vec<Face>,
        settings: &MeshSettings,
        ids: &mut NodeIdAllocator,
    ) -> Self {
        Self::with_depth(verts, faces, 0, settings, ids)
    }

    fn with_depth(
        verts: Vec<Point3<f64>>,
        faces: Vec<Face>,
        depth: u32,
        settings: &MeshSettings,
        ids: &mut NodeIdAllocator,
    ) -> Self {
        varjo_info!(
            "Constructing mesh with {} verts and {} faces",
            verts.len(),
            faces.len()
        );

        let mut mesh = Self {
            verts,
            faces,
            bound: None,
            descendants: None,
        };

        if mesh.verts.is_empty() || mesh.faces.len() < MIN_ACCEL_FACES {
            return mesh;
        }

        mesh.bound = Some(bounding_box_node(&mesh.verts, &mesh.faces, ids));

        if settings.subdivide && depth < settings.max_depth && mesh.faces.len() > settings.max_faces
        {
            let chunks = bisect_faces(&mesh.verts, std::mem::take(&mut mesh.faces));
            varjo_debug!("Dividing into {} descendants", chunks.len());

            let mut internal = SceneNode::new("mesh_internal", ids);
            for chunk in chunks {
                let sub = Self::with_depth(mesh.verts.clone(), chunk, depth + 1, settings, ids);
                internal.add_child(SceneNode::geometry(
                    "mesh_internal_geom",
                    Arc::new(Primitive::Mesh(Arc::new(sub))),
                    ids,
                ));
            }
            mesh.descendants = Some(internal);

            // Geometry ownership moved into the leaves
            mesh.verts.clear();
        }

        mesh
    }

    /// Intersects `ray` with this mesh, `ray` in mesh-local space.
    ///
    /// The bounding box is consulted first when present and a miss
    /// short-circuits everything else. A subdivided mesh delegates entirely
    /// to its descendants.
    pub fn intersect(&self, ray: &Ray<f64>, config: &RenderConfig) -> RayResult {
        let mut result = RayResult::default();

        if let Some(bound) = &self.bound {
            let bound_result = bound.find_intersections(ray, config);

            result.stats.bounding_box_checks += 1;
            if bound_result.is_hit() {
                result.stats.bounding_box_hits += 1;
            }

            if !bound_result.is_hit() || config.draw_bounding_boxes {
                // Either nothing inside can be hit, or the caller wants the
                // boxes themselves rendered
                result.merge(bound_result);
                return result;
            }

            result.stats.merge(bound_result.stats);
        }

        if let Some(descendants) = &self.descendants {
            result.merge(descendants.find_intersections(ray, config));
            return result;
        }

        // Reinier van Vliet and Remco Lam angle sums algorithm
        for face in &self.faces {
            result.stats.face_tests += 1;

            if face.len() < 3 {
                varjo_warn!("Face with fewer than 3 verts, skipping");
                continue;
            }
            if face.iter().any(|&vi| vi >= self.verts.len()) {
                varjo_warn!("Face indexes past the vertex list, skipping");
                continue;
            }

            let v0 = self.verts[face[0]];
            let v1 = self.verts[face[1]];
            let v2 = self.verts[face[2]];

            // Plane normal from the winding of the first three verts
            let n = (v1 - v2).cross(v1 - v0);
            if n.len() < EPSILON {
                varjo_warn!("Face with collinear verts, skipping");
                continue;
            }
            let n = n.normalized();

            let denom = ray.d.dot(n);
            if denom.abs() < EPSILON {
                // Parallel to the face plane
                continue;
            }
            let t = -(ray.o - v0).dot(n) / denom;
            if t < EPSILON {
                // Face is behind the ray
                continue;
            }
            let q = ray.point(t);

            let mut angle_sum = 0.0;
            for i in 0..face.len() {
                let p1 = self.verts[face[i]] - q;
                let p2 = self.verts[face[(i + 1) % face.len()]] - q;

                let m1 = p1.len();
                let m2 = p2.len();
                if m1 * m2 <= EPSILON {
                    // On a vertex, consider it inside
                    angle_sum = std::f64::consts::TAU;
                } else {
                    angle_sum += (p1.dot(p2) / (m1 * m2)).clamp(-1.0, 1.0).acos();
                }

                if (angle_sum - std::f64::consts::TAU).abs() <= EPSILON {
                    result
                        .intersections
                        .push(Intersection::new(q, Normal::from(n), None));
                    break;
                }
            }
        }

        result
    }
}

/// Extrema of the referenced vertices, wrapped into a synthetic geometry node
/// holding a transformed unit [Primitive::Cube].
fn bounding_box_node(
    verts: &[Point3<f64>],
    faces: &[Face],
    ids: &mut NodeIdAllocator,
) -> SceneNode {
    // Only vertices a face actually references count; sub-mesh chunks share
    // the full vertex list
    let mut extrema: Option<(Point3<f64>, Point3<f64>)> = None;
    for &vi in faces.iter().flatten() {
        if vi >= verts.len() {
            continue;
        }
        let v = verts[vi];
        extrema = Some(match extrema {
            Some((p_min, p_max)) => (p_min.min(v), p_max.max(v)),
            None => (v, v),
        });
    }
    let (p_min, p_max) = extrema.unwrap_or((verts[0], verts[0]));

    // Degenerate zero-volume boxes break the slab test
    let size = (p_max - p_min).max(Vec3::from(BOUND_MIN_EXTENT));

    let mut bound = SceneNode::geometry("mesh_bound", Arc::new(Primitive::Cube), ids);
    bound.translate(p_min - Point3::zeros());
    bound.scale(size);
    bound
}

/// Sorts the faces by centroid along X, Y and Z in turn, bisecting on every
/// pass; one call yields eight chunks.
fn bisect_faces(verts: &[Point3<f64>], faces: Vec<Face>) -> VecDeque<Vec<Face>> {
    let mut chunks = VecDeque::new();
    chunks.push_back(faces);

    for axis in 0..3 {
        for _ in 0..chunks.len() {
            let mut faces = chunks.pop_front().unwrap();
            faces.sort_by(|a, b| {
                face_centroid(verts, a)[axis].total_cmp(&face_centroid(verts, b)[axis])
            });
            let half = faces.len() / 2;
            let back = faces.split_off(half);
            chunks.push_back(faces);
            chunks.push_back(back);
        }
    }

    chunks
}

fn face_centroid(verts: &[Point3<f64>], face: &Face) -> Point3<f64> {
    let mut c = Point3::zeros();
    let mut count = 0;
    for &vi in face {
        if vi >= verts.len() {
            continue;
        }
        c = c + verts[vi];
        count += 1;
    }
    if count > 0 {
        c / (count as f64)
    } else {
        c
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh({{")?;
        for (i, v) in self.verts.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}, {}]", v.x, v.y, v.z)?;
        }
        write!(f, "}}, {{")?;
        for (i, face) in self.faces.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, vi) in face.iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", vi)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}})")
    }
}
