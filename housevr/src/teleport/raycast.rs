use cgmath::{vec3, InnerSpace};
use engine::scene::{Ray, RaycastHit, Raycaster, Transform};

use crate::layers;

/// Minimum dot product between a surface's world normal and world-up for the
/// surface to count as a floor (~32 degrees from vertical). Strict: exactly
/// at the threshold is rejected.
pub const SURFACE_UP_THRESHOLD: f32 = 0.85;

/// Raycaster configured for teleport floor detection; it only tests surfaces
/// on the teleport layer, so unrelated geometry never participates.
pub fn create_teleport_raycaster() -> Raycaster {
    Raycaster::with_layer(layers::TELEPORT)
}

/// Whether a raycast hit landed on a surface flat enough to teleport to.
/// Fails closed when the hit carries no face normal.
pub fn is_valid_teleport_surface(hit: &RaycastHit) -> bool {
    surface_exceeds_threshold(hit, SURFACE_UP_THRESHOLD)
}

/// Threshold-parameterized variant used by the system's config.
pub fn surface_exceeds_threshold(hit: &RaycastHit, up_threshold: f32) -> bool {
    let Some(local_normal) = hit.normal else {
        return false;
    };

    // Only the hit object's rotation applies to a direction vector
    let world_normal = hit.surface_transform.transform_direction(local_normal);
    world_normal.dot(vec3(0.0, 1.0, 0.0)) > up_threshold
}

/// World-space pointing ray of a controller: origin at the device, direction
/// along its local -Z forward axis. Unit rotation keeps the direction unit.
pub fn controller_ray(pose: &Transform) -> Ray {
    Ray::new(
        pose.position,
        pose.transform_direction(vec3(0.0, 0.0, -1.0)),
    )
}
