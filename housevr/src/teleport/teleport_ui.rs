use cgmath::{vec3, Vector3};
use serde::{Deserialize, Serialize};

use crate::input_context::ControllerId;

use super::teleport_system::{RayColor, TeleportSystem};

/// Color scheme for the teleport feedback visuals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TeleportVisualStyle {
    pub valid_ray_color: Vector3<f32>,
    pub invalid_ray_color: Vector3<f32>,
    pub neutral_ray_color: Vector3<f32>,
    pub marker_color: Vector3<f32>,
}

impl Default for TeleportVisualStyle {
    fn default() -> Self {
        Self {
            valid_ray_color: vec3(0.0, 0.8, 1.0),     // Cyan
            invalid_ray_color: vec3(1.0, 0.27, 0.27), // Warning red
            neutral_ray_color: vec3(0.4, 0.4, 0.4),   // Dim grey
            marker_color: vec3(0.0, 0.8, 1.0),
        }
    }
}

/// One controller's guide-ray, ready to draw: a line from the device origin
/// along its forward axis.
#[derive(Clone, Copy, Debug)]
pub struct RayVisual {
    pub controller: ControllerId,
    pub length: f32,
    pub color: Vector3<f32>,
}

/// The destination ring, ready to draw.
#[derive(Clone, Copy, Debug)]
pub struct MarkerVisual {
    pub position: Vector3<f32>,
    pub scale: f32,
    pub ring_opacity: f32,
    pub color: Vector3<f32>,
}

/// Everything the renderer collaborator needs to draw teleport feedback for
/// one frame.
#[derive(Clone, Debug, Default)]
pub struct TeleportVisuals {
    pub rays: Vec<RayVisual>,
    pub marker: Option<MarkerVisual>,
    /// Fullscreen blackout opacity in [0, 1].
    pub fade_opacity: f32,
}

pub struct TeleportUi;

impl TeleportUi {
    /// Map the system's current state to plain draw descriptors. Pure; the
    /// renderer owns the actual geometry and materials.
    pub fn build_visuals(system: &TeleportSystem, style: &TeleportVisualStyle) -> TeleportVisuals {
        let rays = system
            .controllers()
            .iter()
            .filter_map(|&id| {
                let guide_ray = system.guide_ray(id)?;
                guide_ray.visible.then(|| RayVisual {
                    controller: id,
                    length: guide_ray.length,
                    color: Self::ray_color(style, guide_ray.color),
                })
            })
            .collect();

        let marker = system.marker().is_visible().then(|| MarkerVisual {
            position: system.marker().position(),
            scale: system.marker().scale(),
            ring_opacity: system.marker().ring_opacity(),
            color: style.marker_color,
        });

        TeleportVisuals {
            rays,
            marker,
            fade_opacity: system.fade_opacity(),
        }
    }

    fn ray_color(style: &TeleportVisualStyle, color: RayColor) -> Vector3<f32> {
        match color {
            RayColor::Neutral => style.neutral_ray_color,
            RayColor::Valid => style.valid_ray_color,
            RayColor::Invalid => style.invalid_ray_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_context::InputContext;
    use crate::player_rig::PlayerRig;
    use crate::time::Time;
    use cgmath::{Deg, Quaternion, Rotation3};
    use engine::scene::{Surface, Transform, TriangleMesh};

    fn run_one_frame(aim_down: bool) -> TeleportSystem {
        let mut system = TeleportSystem::with_default_config();
        system.add_controller(ControllerId(0));

        let mut surface = Surface::new(
            "floor",
            TriangleMesh::horizontal_quad(10.0),
            Transform::identity(),
        );
        surface.layers.enable(crate::layers::TELEPORT);

        let mut input = InputContext::new();
        input.is_presenting = true;
        let pitch = if aim_down { Deg(-45.0) } else { Deg(90.0) };
        input.set_controller_pose(
            ControllerId(0),
            Transform::new(vec3(0.0, 1.5, 0.0), Quaternion::from_angle_x(pitch)),
        );

        let time = Time {
            total: 0.0,
            delta: 0.016,
        };
        let mut rig = PlayerRig::new();
        system.update(&time, &input, &[surface], &mut rig);
        system
    }

    #[test]
    fn test_valid_target_visuals() {
        let system = run_one_frame(true);
        let visuals = TeleportUi::build_visuals(&system, &TeleportVisualStyle::default());

        assert_eq!(visuals.rays.len(), 1);
        assert_eq!(visuals.rays[0].color, vec3(0.0, 0.8, 1.0));

        let marker = visuals.marker.expect("marker visible on a valid target");
        assert_eq!(marker.color, vec3(0.0, 0.8, 1.0));
        assert!((visuals.fade_opacity - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_miss_uses_neutral_color_and_no_marker() {
        let system = run_one_frame(false);
        let visuals = TeleportUi::build_visuals(&system, &TeleportVisualStyle::default());

        assert_eq!(visuals.rays.len(), 1);
        assert_eq!(visuals.rays[0].color, vec3(0.4, 0.4, 0.4));
        assert!((visuals.rays[0].length - 5.0).abs() < 1e-6);
        assert!(visuals.marker.is_none());
    }
}
