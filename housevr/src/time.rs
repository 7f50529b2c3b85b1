/// Frame clock state, advanced once per render frame by the host loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Time {
    /// Seconds since the session started.
    pub total: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, delta: f32) {
        self.delta = delta;
        self.total += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_accumulates() {
        let mut time = Time::new();
        time.tick(0.016);
        time.tick(0.02);
        assert!((time.delta - 0.02).abs() < 1e-6);
        assert!((time.total - 0.036).abs() < 1e-6);
    }
}
