//! Layer assignments for raycasting and surface categorization.

pub const DEFAULT: u32 = 0;

/// Surfaces valid for teleportation (floors)
pub const TELEPORT: u32 = 1;
