use std::cmp::Ordering;

use cgmath::{InnerSpace, Vector3, Zero};

use super::{Layers, Surface, Transform};

const RAY_EPSILON: f32 = 1e-7;

/// World-space ray with a unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Result of a ray/surface intersection. Transient; recomputed every frame.
///
/// `normal` is the face normal in object-local space (None for a degenerate
/// face); `surface_transform` carries the rotation needed to take it to
/// world space.
#[derive(Clone, Copy, Debug)]
pub struct RaycastHit {
    pub point: Vector3<f32>,
    pub distance: f32,
    pub normal: Option<Vector3<f32>>,
    pub surface_transform: Transform,
}

/// Layer-filtered nearest-first raycaster over surface sets.
#[derive(Clone, Debug)]
pub struct Raycaster {
    ray: Ray,
    layers: Layers,
}

impl Raycaster {
    pub fn new() -> Self {
        Self {
            ray: Ray::new(Vector3::zero(), Vector3::unit_z() * -1.0),
            layers: Layers::new(),
        }
    }

    /// Raycaster that only tests surfaces on one layer.
    pub fn with_layer(layer: u32) -> Self {
        let mut caster = Self::new();
        caster.layers.set(layer);
        caster
    }

    pub fn set(&mut self, origin: Vector3<f32>, direction: Vector3<f32>) {
        self.ray = Ray::new(origin, direction.normalize());
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    /// Intersect every face of every layer-matching surface, sorted by
    /// distance. Both triangle windings count as hits: a downward ray must
    /// intersect an upward-wound floor.
    pub fn intersect_surfaces(&self, surfaces: &[Surface]) -> Vec<RaycastHit> {
        let mut hits = Vec::new();

        for surface in surfaces {
            if !self.layers.intersects(&surface.layers) {
                continue;
            }

            for face_index in 0..surface.mesh.face_count() {
                let Some([a, b, c]) = surface.mesh.face(face_index) else {
                    continue;
                };
                let world_a = surface.transform.transform_point(a);
                let world_b = surface.transform.transform_point(b);
                let world_c = surface.transform.transform_point(c);

                if let Some(t) = intersect_triangle(&self.ray, world_a, world_b, world_c) {
                    hits.push(RaycastHit {
                        point: self.ray.at(t),
                        distance: t,
                        normal: surface.mesh.face_normal(face_index),
                        surface_transform: surface.transform,
                    });
                }
            }
        }

        hits.sort_by(|x, y| {
            x.distance
                .partial_cmp(&y.distance)
                .unwrap_or(Ordering::Equal)
        });
        hits
    }
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Moeller-Trumbore ray/triangle intersection, two-sided.
/// Returns the ray parameter t (world distance for a unit direction).
fn intersect_triangle(
    ray: &Ray,
    a: Vector3<f32>,
    b: Vector3<f32>,
    c: Vector3<f32>,
) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;

    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < RAY_EPSILON {
        // Ray parallel to the triangle plane (or degenerate face)
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > RAY_EPSILON).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TriangleMesh;
    use cgmath::vec3;

    fn floor_surface(name: &str, y: f32, layer: u32) -> Surface {
        let mut surface = Surface::new(
            name,
            TriangleMesh::horizontal_quad(5.0),
            Transform::from_position(vec3(0.0, y, 0.0)),
        );
        surface.layers.enable(layer);
        surface
    }

    #[test]
    fn test_downward_ray_hits_floor() {
        let surfaces = vec![floor_surface("floor", 0.0, 1)];
        let mut caster = Raycaster::with_layer(1);
        caster.set(vec3(1.0, 2.0, 0.5), vec3(0.0, -1.0, 0.0));

        let hits = caster.intersect_surfaces(&surfaces);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 2.0).abs() < 1e-5);
        assert!((hits[0].point - vec3(1.0, 0.0, 0.5)).magnitude() < 1e-5);
        assert_eq!(hits[0].normal, Some(vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_hits_sorted_nearest_first() {
        // Two stacked floors; a ray from above must report the upper first.
        let surfaces = vec![
            floor_surface("lower", 0.0, 1),
            floor_surface("upper", 1.0, 1),
        ];
        let mut caster = Raycaster::with_layer(1);
        caster.set(vec3(0.5, 3.0, -0.25), vec3(0.0, -1.0, 0.0));

        let hits = caster.intersect_surfaces(&surfaces);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].distance < hits[1].distance);
        assert!((hits[0].point.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_shared_diagonal_edge_reports_both_faces() {
        // The quad's two triangles share the x = z diagonal, and the
        // inclusive barycentric bounds register an edge hit on both faces.
        // Consumers take the nearest hit, so the coincident duplicate is
        // accepted rather than deduplicated.
        let surfaces = vec![floor_surface("floor", 0.0, 1)];
        let mut caster = Raycaster::with_layer(1);
        caster.set(vec3(1.0, 2.0, 1.0), vec3(0.0, -1.0, 0.0));

        let hits = caster.intersect_surfaces(&surfaces);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].distance - hits[1].distance).abs() < 1e-6);
        assert!((hits[0].point - vec3(1.0, 0.0, 1.0)).magnitude() < 1e-5);
        assert_eq!(hits[0].normal, Some(vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_layer_filter_excludes_surfaces() {
        let surfaces = vec![floor_surface("decor", 0.0, 2)];
        let mut caster = Raycaster::with_layer(1);
        caster.set(vec3(0.0, 2.0, 0.0), vec3(0.0, -1.0, 0.0));

        assert!(caster.intersect_surfaces(&surfaces).is_empty());
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let surfaces = vec![floor_surface("floor", 0.0, 1)];
        let mut caster = Raycaster::with_layer(1);
        caster.set(vec3(0.0, 2.0, 0.0), vec3(0.0, 1.0, 0.0));

        assert!(caster.intersect_surfaces(&surfaces).is_empty());
    }

    #[test]
    fn test_empty_surface_set_misses() {
        let mut caster = Raycaster::with_layer(1);
        caster.set(vec3(0.0, 2.0, 0.0), vec3(0.0, -1.0, 0.0));
        assert!(caster.intersect_surfaces(&[]).is_empty());
    }
}
