use std::collections::HashMap;

use engine::scene::Transform;

/// Stable identity of a tracked input device for the life of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub usize);

/// Host-provided input state, refreshed every frame before systems update:
/// whether an immersive session is presenting, and the current world pose of
/// each tracked controller. Systems read this; only the host writes it.
#[derive(Clone, Debug, Default)]
pub struct InputContext {
    pub is_presenting: bool,
    poses: HashMap<ControllerId, Transform>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_controller_pose(&mut self, id: ControllerId, pose: Transform) {
        self.poses.insert(id, pose);
    }

    /// None when the device has no pose this frame (not yet tracked).
    pub fn controller_pose(&self, id: ControllerId) -> Option<&Transform> {
        self.poses.get(&id)
    }
}
