/// Layer membership bitmask used to filter raycasts and categorize scene
/// surfaces. A surface may belong to several layers; a raycaster only tests
/// surfaces whose mask intersects its own.
///
/// Layer 0 is enabled by default, matching the convention that every surface
/// is part of the ordinary render set until told otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layers(u32);

impl Layers {
    pub fn new() -> Self {
        Layers(1)
    }

    /// Empty mask, member of no layer.
    pub fn none() -> Self {
        Layers(0)
    }

    /// Replace the mask with exactly one layer.
    pub fn set(&mut self, layer: u32) {
        self.0 = 1 << layer;
    }

    pub fn enable(&mut self, layer: u32) {
        self.0 |= 1 << layer;
    }

    pub fn disable(&mut self, layer: u32) {
        self.0 &= !(1 << layer);
    }

    pub fn is_enabled(&self, layer: u32) -> bool {
        self.0 & (1 << layer) != 0
    }

    pub fn intersects(&self, other: &Layers) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layer_zero() {
        let layers = Layers::new();
        assert!(layers.is_enabled(0));
        assert!(!layers.is_enabled(1));
    }

    #[test]
    fn test_enable_disable() {
        let mut layers = Layers::new();
        layers.enable(1);
        assert!(layers.is_enabled(0));
        assert!(layers.is_enabled(1));

        layers.disable(0);
        assert!(!layers.is_enabled(0));
        assert!(layers.is_enabled(1));
    }

    #[test]
    fn test_set_replaces_mask() {
        let mut layers = Layers::new();
        layers.set(3);
        assert!(!layers.is_enabled(0));
        assert!(layers.is_enabled(3));
    }

    #[test]
    fn test_intersects() {
        let mut a = Layers::none();
        a.enable(1);

        let b = Layers::new();
        assert!(!a.intersects(&b));

        let mut c = Layers::new();
        c.enable(1);
        assert!(a.intersects(&c));
    }
}
