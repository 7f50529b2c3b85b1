// VR Teleport Locomotion
//
// Point-and-release locomotion that avoids motion sickness: a controller ray
// picks a floor target, a marker previews it, and the actual position change
// happens behind a short fade to black instead of smooth movement.

pub mod raycast;
pub mod teleport_marker;
pub mod teleport_system;
pub mod teleport_ui;

pub use raycast::{
    controller_ray, create_teleport_raycaster, is_valid_teleport_surface, SURFACE_UP_THRESHOLD,
};
pub use teleport_marker::TeleportMarker;
pub use teleport_system::{GuideRay, RayColor, TeleportConfig, TeleportSystem};
pub use teleport_ui::{MarkerVisual, RayVisual, TeleportUi, TeleportVisualStyle, TeleportVisuals};
