use cgmath::{Vector3, Zero};

/// The movable node representing the user's tracked origin. The camera is
/// conceptually a child of the rig: head tracking writes the camera-local
/// offset, locomotion moves the rig, and the two compose into the camera's
/// world position.
///
/// Invariant: camera world position = rig position + tracked offset. A
/// teleport must preserve the offset rather than overwrite the camera.
#[derive(Clone, Copy, Debug)]
pub struct PlayerRig {
    pub position: Vector3<f32>,
    camera_local: Vector3<f32>,
}

impl PlayerRig {
    pub fn new() -> Self {
        Self {
            position: Vector3::zero(),
            camera_local: Vector3::zero(),
        }
    }

    /// Written by the headset tracking collaborator each frame; the rig
    /// itself never changes it.
    pub fn set_camera_local(&mut self, offset: Vector3<f32>) {
        self.camera_local = offset;
    }

    pub fn camera_local(&self) -> Vector3<f32> {
        self.camera_local
    }

    pub fn camera_world_position(&self) -> Vector3<f32> {
        self.position + self.camera_local
    }
}

impl Default for PlayerRig {
    fn default() -> Self {
        Self::new()
    }
}
