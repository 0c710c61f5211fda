mod joint;

pub use joint::{JointRange, JointState};

use std::sync::{Arc, OnceLock};

use crate::{
    material::Material,
    math::{
        transforms::{rotation_x, rotation_y, rotation_z, scale, translation},
        Ray, Transform, Vec3,
    },
    primitive::Primitive,
    renderer::RenderConfig,
    result::RayResult,
};

/// Hands out unique node ids for one scene tree.
#[derive(Debug, Default)]
pub struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A rotation axis for node transforms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// What a [SceneNode] contributes beyond its transform and children.
#[derive(Debug)]
pub enum NodeKind {
    /// Grouping only
    Inner,
    /// Articulated rotation applied between this node's transform and its
    /// subtree
    Joint(JointState),
    /// A primitive surface with an optional material
    Geometry {
        material: Option<Arc<Material>>,
        primitive: Arc<Primitive>,
    },
}

/// A node in the scene tree, owning its children.
///
/// Each node carries an affine transform from its local space to its parent's
/// space. Rays are pushed down the tree through the inverses and hits pulled
/// back up through the forward transforms.
#[derive(Debug)]
pub struct SceneNode {
    id: u32,
    name: String,
    transform: Transform<f64>,
    picked: bool,
    kind: NodeKind,
    children: Vec<SceneNode>,
}

fn highlight_material() -> Arc<Material> {
    static HIGHLIGHT: OnceLock<Arc<Material>> = OnceLock::new();
    HIGHLIGHT
        .get_or_init(|| Arc::new(Material::highlight()))
        .clone()
}

impl SceneNode {
    /// Creates a new grouping node.
    pub fn new(name: &str, ids: &mut NodeIdAllocator) -> Self {
        Self::with_kind(name, NodeKind::Inner, ids)
    }

    /// Creates a new joint node with the given per-axis rotation limits.
    pub fn joint(
        name: &str,
        x_range: JointRange,
        y_range: JointRange,
        ids: &mut NodeIdAllocator,
    ) -> Self {
        Self::with_kind(
            name,
            NodeKind::Joint(JointState::new(x_range, y_range)),
            ids,
        )
    }

    /// Creates a new geometry node with no material.
    pub fn geometry(name: &str, primitive: Arc<Primitive>, ids: &mut NodeIdAllocator) -> Self {
        Self::with_kind(
            name,
            NodeKind::Geometry {
                material: None,
                primitive,
            },
            ids,
        )
    }

    fn with_kind(name: &str, kind: NodeKind, ids: &mut NodeIdAllocator) -> Self {
        Self {
            id: ids.allocate(),
            name: String::from(name),
            transform: Transform::default(),
            picked: false,
            kind,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn picked(&self) -> bool {
        self.picked
    }

    pub fn is_joint(&self) -> bool {
        matches!(self.kind, NodeKind::Joint(_))
    }

    pub fn transform(&self) -> &Transform<f64> {
        &self.transform
    }

    /// Replaces this node's transform outright.
    pub fn set_transform(&mut self, transform: Transform<f64>) {
        self.transform = transform;
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Sets the material on a geometry node. No-op on other kinds.
    pub fn set_material(&mut self, new_material: Arc<Material>) {
        if let NodeKind::Geometry { material, .. } = &mut self.kind {
            *material = Some(new_material);
        }
    }

    /// Replaces the x-axis limits of a joint node. No-op on other kinds.
    pub fn set_joint_x(&mut self, range: JointRange) {
        if let NodeKind::Joint(state) = &mut self.kind {
            state.set_range(0, range);
        }
    }

    /// Replaces the y-axis limits of a joint node. No-op on other kinds.
    pub fn set_joint_y(&mut self, range: JointRange) {
        if let NodeKind::Joint(state) = &mut self.kind {
            state.set_range(1, range);
        }
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Detaches and returns the direct child with `id`, or `None` if this
    /// node has no such child.
    pub fn remove_child(&mut self, id: u32) -> Option<SceneNode> {
        let i = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(i))
    }

    /// Appends a rotation of `degrees` around `axis` to this node's
    /// transform.
    pub fn rotate(&mut self, axis: Axis, degrees: f64) {
        let theta = degrees.to_radians();
        let rotation = match axis {
            Axis::X => rotation_x(theta),
            Axis::Y => rotation_y(theta),
            Axis::Z => rotation_z(theta),
        };
        self.transform = &self.transform * &rotation;
    }

    /// Appends a scaling to this node's transform.
    pub fn scale(&mut self, amount: Vec3<f64>) {
        self.transform = &self.transform * &scale(amount.x, amount.y, amount.z);
    }

    /// Appends a translation to this node's transform.
    pub fn translate(&mut self, amount: Vec3<f64>) {
        self.transform = &self.transform * &translation(amount);
    }

    /// Prepends a rotation of `degrees` around `axis`, applying it after
    /// everything already in this node's transform.
    pub fn pre_rotate(&mut self, axis: Axis, degrees: f64) {
        let theta = degrees.to_radians();
        let rotation = match axis {
            Axis::X => rotation_x(theta),
            Axis::Y => rotation_y(theta),
            Axis::Z => rotation_z(theta),
        };
        self.transform = &rotation * &self.transform;
    }

    /// Prepends a scaling to this node's transform.
    pub fn pre_scale(&mut self, amount: Vec3<f64>) {
        self.transform = &scale(amount.x, amount.y, amount.z) * &self.transform;
    }

    /// Prepends a translation to this node's transform.
    pub fn pre_translate(&mut self, amount: Vec3<f64>) {
        self.transform = &translation(amount) * &self.transform;
    }

    /// The node's transform with any joint rotation folded in.
    fn local_transform(&self) -> Transform<f64> {
        match &self.kind {
            NodeKind::Joint(state) => {
                let joint = &rotation_x(state.rotation_x().to_radians())
                    * &rotation_y(state.rotation_y().to_radians());
                &self.transform * &joint
            }
            _ => self.transform.clone(),
        }
    }

    /// Toggles the picked flag on the node with `id`, but only if its parent
    /// is a joint. Returns `true` if a flag was flipped.
    pub fn toggle_pick(&mut self, id: u32) -> bool {
        self.toggle_pick_inner(id, false)
    }

    fn toggle_pick_inner(&mut self, id: u32, parent_is_joint: bool) -> bool {
        if self.id == id {
            if parent_is_joint {
                self.picked = !self.picked;
                return true;
            }
            return false;
        }
        let is_joint = self.is_joint();
        self.children
            .iter_mut()
            .any(|child| child.toggle_pick_inner(id, is_joint))
    }

    /// Rotates every joint that has a picked immediate child by
    /// `delta_x`/`delta_y` degrees, clamped per joint.
    pub fn move_joints(&mut self, delta_x: f64, delta_y: f64) {
        if let NodeKind::Joint(state) = &mut self.kind {
            if self.children.iter().any(|c| c.picked) {
                state.rotate_by(delta_x, delta_y);
            }
        }
        for child in &mut self.children {
            child.move_joints(delta_x, delta_y);
        }
    }

    /// Puts every joint in the subtree back at its initial angles.
    pub fn reset_joints(&mut self) {
        if let NodeKind::Joint(state) = &mut self.kind {
            state.reset();
        }
        for child in &mut self.children {
            child.reset_joints();
        }
    }

    /// Records the current rotation of every joint in the subtree as an undo
    /// step.
    pub fn checkpoint_joints(&mut self) {
        if let NodeKind::Joint(state) = &mut self.kind {
            state.checkpoint();
        }
        for child in &mut self.children {
            child.checkpoint_joints();
        }
    }

    /// Undoes the last checkpoint on every joint in the subtree. Returns
    /// `true` if any joint had history to restore.
    pub fn undo_joints(&mut self) -> bool {
        let mut changed = false;
        if let NodeKind::Joint(state) = &mut self.kind {
            changed |= state.undo();
        }
        for child in &mut self.children {
            changed |= child.undo_joints();
        }
        changed
    }

    /// Redoes the last undone checkpoint on every joint in the subtree.
    /// Returns `true` if any joint had history to reapply.
    pub fn redo_joints(&mut self) -> bool {
        let mut changed = false;
        if let NodeKind::Joint(state) = &mut self.kind {
            changed |= state.redo();
        }
        for child in &mut self.children {
            changed |= child.redo_joints();
        }
        changed
    }

    /// Intersects `ray` with this node's subtree, `ray` in the parent's
    /// space. Hits come back in the parent's space as well, with normals
    /// renormalized after non-uniform scales.
    pub fn find_intersections(&self, ray: &Ray<f64>, config: &RenderConfig) -> RayResult {
        let local = self.local_transform();
        let local_ray = &local.inverted() * *ray;

        let mut result = RayResult::default();

        if let NodeKind::Geometry {
            material,
            primitive,
        } = &self.kind
        {
            let mut prim_result = primitive.intersect(&local_ray, config);
            let stamp = if self.picked && config.highlight_picked {
                Some(highlight_material())
            } else {
                material.clone()
            };
            if stamp.is_some() {
                for hit in &mut prim_result.intersections {
                    hit.material = stamp.clone();
                }
            }
            result.merge(prim_result);
        }

        for child in &self.children {
            result.merge(child.find_intersections(&local_ray, config));
        }

        for hit in &mut result.intersections {
            hit.p = &local * hit.p;
            hit.n = (&local * hit.n).normalized();
        }

        result
    }
}
