use std::collections::HashMap;

use cgmath::{Vector3, Zero};
use engine::scene::{Raycaster, Surface};
use engine::{input_log, teleport_log, xr_log};
use serde::{Deserialize, Serialize};

use crate::input_context::{ControllerId, InputContext};
use crate::player_rig::PlayerRig;
use crate::time::Time;

use super::raycast::{
    controller_ray, create_teleport_raycaster, surface_exceeds_threshold, SURFACE_UP_THRESHOLD,
};
use super::teleport_marker::TeleportMarker;

/// Configuration for the teleport system
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeleportConfig {
    pub enabled: bool,
    /// Length of each fade phase, seconds.
    pub fade_duration: f32,
    /// Guide-ray length when the controller points at nothing.
    pub default_ray_length: f32,
    /// Up-facing threshold for valid floor surfaces (strict dot product).
    pub surface_up_threshold: f32,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        TeleportConfig {
            enabled: true,
            fade_duration: 0.25,
            default_ray_length: 5.0,
            surface_up_threshold: SURFACE_UP_THRESHOLD,
        }
    }
}

/// Tri-state coloring of a controller's guide ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RayColor {
    /// Pointing at nothing
    Neutral,
    /// Pointing at a teleportable floor
    Valid,
    /// Pointing at geometry too steep to stand on
    Invalid,
}

/// Per-controller guide-ray state the renderer draws each frame.
#[derive(Clone, Copy, Debug)]
pub struct GuideRay {
    pub visible: bool,
    pub length: f32,
    pub color: RayColor,
}

impl Default for GuideRay {
    fn default() -> Self {
        Self {
            visible: false,
            length: 0.0,
            color: RayColor::Neutral,
        }
    }
}

/// Auxiliary state the system owns for each registered controller, keyed by
/// controller identity rather than stored on the input device itself.
#[derive(Clone, Copy, Debug, Default)]
struct ControllerRecord {
    guide_ray: GuideRay,
    is_selecting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FadeDirection {
    None,
    Out,
    In,
}

/// Fade-to-black sub-state. Lives entirely inside the teleport system and is
/// cleared after a full out/in cycle.
#[derive(Clone, Copy, Debug)]
struct Fade {
    alpha: f32,
    direction: FadeDirection,
    target: Vector3<f32>,
}

impl Fade {
    fn idle() -> Self {
        Self {
            alpha: 0.0,
            direction: FadeDirection::None,
            target: Vector3::zero(),
        }
    }
}

/// Teleport locomotion state machine.
///
/// Each frame the host calls [`TeleportSystem::update`]. While idle, every
/// registered controller raycasts against the teleport-layer surfaces and
/// drives the shared marker plus its own guide ray. A select-release with a
/// valid target starts a fade-out; at full black the rig is relocated so the
/// camera lands on the target, then the view fades back in. During either
/// fade phase all raycasting and marker updates are suspended.
pub struct TeleportSystem {
    config: TeleportConfig,
    raycaster: Raycaster,
    marker: TeleportMarker,
    /// Registration order; doubles as deterministic iteration order.
    controllers: Vec<ControllerId>,
    records: HashMap<ControllerId, ControllerRecord>,
    has_valid_target: bool,
    is_teleporting: bool,
    fade: Fade,
    /// Last observed presence state, for logging session transitions.
    was_presenting: bool,
}

impl TeleportSystem {
    pub fn new(config: TeleportConfig) -> Self {
        TeleportSystem {
            config,
            raycaster: create_teleport_raycaster(),
            marker: TeleportMarker::new(),
            controllers: Vec::new(),
            records: HashMap::new(),
            has_valid_target: false,
            is_teleporting: false,
            fade: Fade::idle(),
            was_presenting: false,
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(TeleportConfig::default())
    }

    /// Register a controller for teleport input. Registering the same id
    /// twice is a no-op.
    pub fn add_controller(&mut self, id: ControllerId) {
        if self.controllers.contains(&id) {
            return;
        }
        self.controllers.push(id);
        self.records.insert(id, ControllerRecord::default());
        input_log!(debug, "controller {:?} registered for teleport", id);
    }

    /// Select (trigger) pressed. Only flips the per-controller flag; aiming
    /// state is recomputed on the next update tick.
    pub fn select_started(&mut self, id: ControllerId) {
        if let Some(record) = self.records.get_mut(&id) {
            record.is_selecting = true;
        }
    }

    /// Select (trigger) released: the sole teleport trigger. Ignored while a
    /// teleport is already in flight or without a valid target.
    pub fn select_ended(&mut self, id: ControllerId) {
        let Some(record) = self.records.get_mut(&id) else {
            return;
        };
        record.is_selecting = false;

        if self.has_valid_target && !self.is_teleporting {
            self.start_teleport();
        }
    }

    fn start_teleport(&mut self) {
        self.is_teleporting = true;
        self.fade = Fade {
            alpha: 0.0,
            direction: FadeDirection::Out,
            target: self.marker.position(),
        };
        teleport_log!(debug, "teleport started toward {:?}", self.fade.target);
    }

    /// Move the rig so the camera's horizontal position lands on the target.
    ///
    /// The headset offset (camera world minus rig world) is subtracted on X/Z
    /// only; setting the rig straight to the target would double-apply that
    /// offset and misplace the user. Y takes the floor height directly — the
    /// headset's own vertical tracking composes on top.
    fn relocate_rig(rig: &mut PlayerRig, target: Vector3<f32>) {
        let offset = rig.camera_world_position() - rig.position;
        rig.position.x = target.x - offset.x;
        rig.position.z = target.z - offset.z;
        rig.position.y = target.y;
    }

    /// Update each frame. Handles the fade state machine, raycasting and
    /// marker animation.
    pub fn update(
        &mut self,
        time: &Time,
        input: &InputContext,
        surfaces: &[Surface],
        rig: &mut PlayerRig,
    ) {
        if !self.config.enabled {
            return;
        }

        if input.is_presenting != self.was_presenting {
            xr_log!(info, "immersive session presenting: {}", input.is_presenting);
            self.was_presenting = input.is_presenting;
        }

        // Fade in progress: advance it and suspend all target re-evaluation
        if self.fade.direction != FadeDirection::None {
            self.advance_fade(time.delta, rig);
            return;
        }

        self.has_valid_target = false;

        // Teleport is gated on an active immersive session
        if !input.is_presenting || surfaces.is_empty() {
            self.marker.hide();
            for record in self.records.values_mut() {
                record.guide_ray.visible = false;
            }
            return;
        }

        for index in 0..self.controllers.len() {
            let id = self.controllers[index];
            let Some(pose) = input.controller_pose(id) else {
                // No pose this frame; skip this controller's visual update
                continue;
            };

            let ray = controller_ray(pose);
            self.raycaster.set(ray.origin, ray.direction);
            let hits = self.raycaster.intersect_surfaces(surfaces);

            let guide_ray = match hits.first() {
                Some(hit) if surface_exceeds_threshold(hit, self.config.surface_up_threshold) => {
                    self.marker.show(hit.point);
                    self.has_valid_target = true;
                    GuideRay {
                        visible: true,
                        length: hit.distance,
                        color: RayColor::Valid,
                    }
                }
                Some(hit) => {
                    self.marker.hide();
                    GuideRay {
                        visible: true,
                        length: hit.distance,
                        color: RayColor::Invalid,
                    }
                }
                None => {
                    self.marker.hide();
                    GuideRay {
                        visible: true,
                        length: self.config.default_ray_length,
                        color: RayColor::Neutral,
                    }
                }
            };

            if let Some(record) = self.records.get_mut(&id) {
                record.guide_ray = guide_ray;
            }
        }

        self.marker.update(time.delta);
    }

    fn advance_fade(&mut self, delta: f32, rig: &mut PlayerRig) {
        match self.fade.direction {
            FadeDirection::Out => {
                self.fade.alpha += delta / self.config.fade_duration;
                if self.fade.alpha >= 1.0 {
                    // Fully black: apply the position change and turn around
                    self.fade.alpha = 1.0;
                    Self::relocate_rig(rig, self.fade.target);
                    self.fade.direction = FadeDirection::In;
                    teleport_log!(info, "rig relocated to {:?}", rig.position);
                }
            }
            FadeDirection::In => {
                self.fade.alpha -= delta / self.config.fade_duration;
                if self.fade.alpha <= 0.0 {
                    self.fade = Fade::idle();
                    self.is_teleporting = false;
                }
            }
            FadeDirection::None => {}
        }
    }

    /// Fullscreen overlay opacity the renderer applies in front of the
    /// camera, already clamped to [0, 1].
    pub fn fade_opacity(&self) -> f32 {
        self.fade.alpha.clamp(0.0, 1.0)
    }

    pub fn is_teleporting(&self) -> bool {
        self.is_teleporting
    }

    pub fn has_valid_target(&self) -> bool {
        self.has_valid_target
    }

    pub fn marker(&self) -> &TeleportMarker {
        &self.marker
    }

    pub fn controllers(&self) -> &[ControllerId] {
        &self.controllers
    }

    pub fn guide_ray(&self, id: ControllerId) -> Option<GuideRay> {
        self.records.get(&id).map(|record| record.guide_ray)
    }

    pub fn is_selecting(&self, id: ControllerId) -> bool {
        self.records
            .get(&id)
            .map(|record| record.is_selecting)
            .unwrap_or(false)
    }

    pub fn get_config(&self) -> &TeleportConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TeleportConfig) {
        self.config = config;
    }
}
