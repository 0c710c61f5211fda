use std::collections::VecDeque;

/// Limits on a single joint rotation axis, in degrees.
#[derive(Copy, Clone, Debug)]
pub struct JointRange {
    pub min: f64,
    pub init: f64,
    pub max: f64,
}

impl JointRange {
    pub fn new(min: f64, init: f64, max: f64) -> Self {
        Self { min, init, max }
    }

    fn clamp(&self, angle: f64) -> f64 {
        angle.clamp(self.min, self.max)
    }
}

impl Default for JointRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            init: 0.0,
            max: 0.0,
        }
    }
}

// Oldest checkpoints are dropped past this so long interactive sessions don't
// grow without bound
const MAX_UNDO_STEPS: usize = 64;

/// Clamped two-axis joint rotation with checkpointed undo and redo.
#[derive(Clone, Debug, Default)]
pub struct JointState {
    ranges: [JointRange; 2],
    rotation: [f64; 2],
    undo_stack: VecDeque<[f64; 2]>,
    redo_stack: Vec<[f64; 2]>,
}

impl JointState {
    pub fn new(x_range: JointRange, y_range: JointRange) -> Self {
        Self {
            rotation: [x_range.clamp(x_range.init), y_range.clamp(y_range.init)],
            ranges: [x_range, y_range],
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn rotation_x(&self) -> f64 {
        self.rotation[0]
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation[1]
    }

    /// Replaces the limits of one axis, re-clamping the current rotation.
    pub fn set_range(&mut self, axis: usize, range: JointRange) {
        self.ranges[axis] = range;
        self.rotation[axis] = range.clamp(self.rotation[axis]);
    }

    /// Adds `delta_x`/`delta_y` degrees to the rotations, clamped to the
    /// joint's limits.
    pub fn rotate_by(&mut self, delta_x: f64, delta_y: f64) {
        self.rotation[0] = self.ranges[0].clamp(self.rotation[0] + delta_x);
        self.rotation[1] = self.ranges[1].clamp(self.rotation[1] + delta_y);
    }

    /// Puts both axes back at their initial angles.
    pub fn reset(&mut self) {
        self.rotation = [
            self.ranges[0].clamp(self.ranges[0].init),
            self.ranges[1].clamp(self.ranges[1].init),
        ];
    }

    /// Records the current rotation as an undo step and invalidates any redo
    /// history.
    pub fn checkpoint(&mut self) {
        if self.undo_stack.len() == MAX_UNDO_STEPS {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(self.rotation);
        self.redo_stack.clear();
    }

    /// Restores the previous checkpoint, returning `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop_back() {
            Some(rotation) => {
                self.redo_stack.push(self.rotation);
                self.rotation = rotation;
                true
            }
            None => false,
        }
    }

    /// Reapplies the last undone rotation, returning `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(rotation) => {
                if self.undo_stack.len() == MAX_UNDO_STEPS {
                    self.undo_stack.pop_front();
                }
                self.undo_stack.push_back(self.rotation);
                self.rotation = rotation;
                true
            }
            None => false,
        }
    }
}
