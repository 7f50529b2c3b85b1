pub mod layers;
pub use layers::Layers;

pub mod transform;
pub use transform::Transform;

pub mod surface;
pub use surface::{Surface, TriangleMesh};

pub mod raycast;
pub use raycast::{Ray, RaycastHit, Raycaster};
