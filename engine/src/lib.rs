pub mod logging;
pub mod scene;

pub use scene::{Layers, Ray, RaycastHit, Raycaster, Surface, Transform, TriangleMesh};
