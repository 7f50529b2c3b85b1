use cgmath::{vec3, Vector3, Zero};

/// How far above the hit point the marker sits, to prevent z-fighting with
/// the floor it marks.
const SURFACE_LIFT: f32 = 0.01;

const PULSE_RATE: f32 = 3.0;
const PULSE_AMPLITUDE: f32 = 0.1;
const RING_BASE_OPACITY: f32 = 0.6;
const RING_PULSE_OPACITY: f32 = 0.2;

/// Visual indicator for the current teleport destination: a glowing ring on
/// the floor with a subtle pulse. The pulse is purely cosmetic — it never
/// feeds back into hit-testing or locomotion.
#[derive(Clone, Debug)]
pub struct TeleportMarker {
    position: Vector3<f32>,
    visible: bool,
    phase: f32,
    scale: f32,
    ring_opacity: f32,
}

impl TeleportMarker {
    pub fn new() -> Self {
        Self {
            position: Vector3::zero(),
            visible: false,
            phase: 0.0,
            scale: 1.0,
            ring_opacity: RING_BASE_OPACITY,
        }
    }

    /// Place the marker at a hit point and make it visible.
    pub fn show(&mut self, position: Vector3<f32>) {
        self.position = position + vec3(0.0, SURFACE_LIFT, 0.0);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Advance the pulse animation. No-op while hidden.
    pub fn update(&mut self, delta: f32) {
        if !self.visible {
            return;
        }

        self.phase += delta * PULSE_RATE;
        self.scale = 1.0 + PULSE_AMPLITUDE * self.phase.sin();
        self.ring_opacity = RING_BASE_OPACITY + RING_PULSE_OPACITY * self.phase.sin();
    }

    /// The current target position (a copy; callers cannot mutate marker
    /// state through it).
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn ring_opacity(&self) -> f32 {
        self.ring_opacity
    }
}

impl Default for TeleportMarker {
    fn default() -> Self {
        Self::new()
    }
}
