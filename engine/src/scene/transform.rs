use cgmath::{Quaternion, Vector3, Zero};

/// Rigid world transform (translation + rotation, no scale).
///
/// Directions transform through the rotation only — translation must never
/// leak into a direction vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn new(position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        self.rotation * point + self.position
    }

    /// Rotation only; a unit rotation preserves length, so unit directions
    /// stay unit.
    pub fn transform_direction(&self, direction: Vector3<f32>) -> Vector3<f32> {
        self.rotation * direction
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
