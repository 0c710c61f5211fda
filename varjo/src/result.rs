use std::sync::Arc;

use crate::{
    material::Material,
    math::{Normal, Point3},
};

/// A single surface hit, in the coordinate space of the node that found it.
/// Ancestor nodes transform it on the way up the tree.
#[derive(Clone, Debug)]
pub struct Intersection {
    /// Hit position
    pub p: Point3<f64>,
    /// Surface normal at the hit
    pub n: Normal<f64>,
    /// Surface material, stamped by the owning geometry node
    pub material: Option<Arc<Material>>,
}

impl Intersection {
    pub fn new(p: Point3<f64>, n: Normal<f64>, material: Option<Arc<Material>>) -> Self {
        Self { p, n, material }
    }
}

/// Intersection-test counters for performance analysis.
///
/// Merging is a component-wise sum, so results from sibling subtrees combine
/// in any order without double counting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RayStats {
    pub bounding_box_checks: usize,
    pub bounding_box_hits: usize,
    pub face_tests: usize,
}

impl RayStats {
    pub fn merge(&mut self, other: Self) {
        self.bounding_box_checks += other.bounding_box_checks;
        self.bounding_box_hits += other.bounding_box_hits;
        self.face_tests += other.face_tests;
    }
}

/// Zero or more [Intersection]s plus the [RayStats] accumulated finding them.
#[derive(Clone, Debug, Default)]
pub struct RayResult {
    pub intersections: Vec<Intersection>,
    pub stats: RayStats,
}

impl RayResult {
    pub fn new(intersections: Vec<Intersection>, stats: RayStats) -> Self {
        Self {
            intersections,
            stats,
        }
    }

    /// Checks if any surface was hit.
    pub fn is_hit(&self) -> bool {
        !self.intersections.is_empty()
    }

    /// Absorbs `other`, keeping its intersections and summing its stats.
    pub fn merge(&mut self, other: Self) {
        let Self {
            mut intersections,
            stats,
        } = other;
        self.intersections.append(&mut intersections);
        self.stats.merge(stats);
    }
}
