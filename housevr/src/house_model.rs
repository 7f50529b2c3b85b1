use engine::scene::Surface;
use engine::scene_log;

use crate::layers;

/// Mesh name fragments that mark a surface as walkable floor.
const FLOOR_NAME_HINTS: [&str; 4] = ["floor", "pavimento", "ground", "plane"];

/// The loaded house: a set of placed surfaces with floors tagged on the
/// teleport layer. Geometry and materials come from the asset-loading
/// collaborator; this type only owns the surface categorization.
#[derive(Clone, Debug)]
pub struct HouseModel {
    surfaces: Vec<Surface>,
    floor_count: usize,
}

impl HouseModel {
    pub fn from_surfaces(mut surfaces: Vec<Surface>) -> Self {
        let floor_count = classify_floors(&mut surfaces);
        scene_log!(
            info,
            "house ready with {} surfaces, {} floors",
            surfaces.len(),
            floor_count
        );
        Self {
            surfaces,
            floor_count,
        }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn floor_count(&self) -> usize {
        self.floor_count
    }
}

/// Enable the teleport layer on floor surfaces, identified by name
/// convention. When no surface matches, every surface becomes teleportable —
/// the model author can refine later by naming floor meshes. Returns the
/// number of floors tagged.
pub fn classify_floors(surfaces: &mut [Surface]) -> usize {
    let mut floor_count = 0;
    for surface in surfaces.iter_mut() {
        if is_floor_name(&surface.name) {
            surface.layers.enable(layers::TELEPORT);
            floor_count += 1;
            scene_log!(debug, "floor surface found: {:?}", surface.name);
        }
    }

    if floor_count == 0 {
        scene_log!(
            warn,
            "no floor surfaces found by name, enabling teleport on all surfaces"
        );
        for surface in surfaces.iter_mut() {
            surface.layers.enable(layers::TELEPORT);
        }
        floor_count = surfaces.len();
    }

    floor_count
}

fn is_floor_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    FLOOR_NAME_HINTS.iter().any(|hint| lower.contains(hint))
}
