use cgmath::{vec3, InnerSpace, Vector3};

use super::{Layers, Transform};

/// Indexed triangle geometry in object-local space.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    pub positions: Vec<Vector3<f32>>,
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn new(positions: Vec<Vector3<f32>>, indices: Vec<[u32; 3]>) -> Self {
        Self { positions, indices }
    }

    /// Horizontal quad at y = 0 spanning +-half_extent, wound so the face
    /// normal points up (+Y).
    pub fn horizontal_quad(half_extent: f32) -> Self {
        let e = half_extent;
        Self {
            positions: vec![
                vec3(-e, 0.0, -e),
                vec3(-e, 0.0, e),
                vec3(e, 0.0, e),
                vec3(e, 0.0, -e),
            ],
            indices: vec![[0, 1, 2], [0, 2, 3]],
        }
    }

    pub fn face_count(&self) -> usize {
        self.indices.len()
    }

    pub fn face(&self, index: usize) -> Option<[Vector3<f32>; 3]> {
        let [i0, i1, i2] = *self.indices.get(index)?;
        Some([
            *self.positions.get(i0 as usize)?,
            *self.positions.get(i1 as usize)?,
            *self.positions.get(i2 as usize)?,
        ])
    }

    /// Object-local unit normal of a face, or None for degenerate faces.
    pub fn face_normal(&self, index: usize) -> Option<Vector3<f32>> {
        let [a, b, c] = self.face(index)?;
        let cross = (b - a).cross(c - a);
        if cross.magnitude2() < 1e-12 {
            return None;
        }
        Some(cross.normalize())
    }
}

/// A named mesh placed in the world, tagged with the layers it belongs to.
/// Surfaces are the raycastable unit the scene hands to gameplay systems.
#[derive(Clone, Debug)]
pub struct Surface {
    pub name: String,
    pub mesh: TriangleMesh,
    pub transform: Transform,
    pub layers: Layers,
}

impl Surface {
    pub fn new(name: impl Into<String>, mesh: TriangleMesh, transform: Transform) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform,
            layers: Layers::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_quad_faces_up() {
        let quad = TriangleMesh::horizontal_quad(1.0);
        assert_eq!(quad.face_count(), 2);

        for i in 0..quad.face_count() {
            let normal = quad.face_normal(i).unwrap();
            assert!((normal - vec3(0.0, 1.0, 0.0)).magnitude() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_face_has_no_normal() {
        let mesh = TriangleMesh::new(
            vec![vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(2.0, 0.0, 0.0)],
            vec![[0, 1, 2]],
        );
        assert!(mesh.face_normal(0).is_none());
    }

    #[test]
    fn test_face_out_of_range() {
        let quad = TriangleMesh::horizontal_quad(1.0);
        assert!(quad.face(2).is_none());
        assert!(quad.face_normal(2).is_none());
    }
}
