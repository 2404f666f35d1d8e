use serde::{ Deserialize, Serialize };

use crate::types::{ Point2, Point3 };

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IndexKind {
    Vertex,
    TextureVertex,
    Normal,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Vertex => write!(f, "vertex"),
            IndexKind::TextureVertex => write!(f, "texture vertex"),
            IndexKind::Normal => write!(f, "normal"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Face {face}: a polygon requires at least three points, found {count}")]
    DegenerateFace { face: usize, count: usize },
    #[error("Face {face}: vertex, texture and normal index counts do not match")]
    InconsistentFace { face: usize },
    #[error("Face {face}: {kind} index {index} is out of range (count: {len})")]
    IndexOutOfRange { face: usize, kind: IndexKind, index: usize, len: usize },
}

/// A polygon as three parallel lists of zero-based indices into a [`Mesh`].
///
/// The texture and normal lists are either empty or as long as the vertex list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    vertex_indices: Vec<usize>,
    texture_vertex_indices: Vec<usize>,
    normal_indices: Vec<usize>,
}

impl Face {
    pub fn new(
        vertex_indices: Vec<usize>,
        texture_vertex_indices: Vec<usize>,
        normal_indices: Vec<usize>,
    ) -> Face {
        Face { vertex_indices, texture_vertex_indices, normal_indices }
    }

    pub fn vertex_indices(&self) -> &[usize] {
        &self.vertex_indices
    }

    pub fn texture_vertex_indices(&self) -> &[usize] {
        &self.texture_vertex_indices
    }

    pub fn normal_indices(&self) -> &[usize] {
        &self.normal_indices
    }

    /// Number of corners.
    pub fn len(&self) -> usize {
        self.vertex_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_indices.is_empty()
    }

    pub fn has_texture(&self) -> bool {
        !self.texture_vertex_indices.is_empty()
    }

    pub fn has_normals(&self) -> bool {
        !self.normal_indices.is_empty()
    }

    /// True when every pair of index lists is either of equal length or has an empty side.
    pub fn is_consistent(&self) -> bool {
        let compatible = |a: usize, b: usize| a == b || a == 0 || b == 0;
        let v = self.vertex_indices.len();
        let t = self.texture_vertex_indices.len();
        let n = self.normal_indices.len();
        compatible(v, t) && compatible(v, n) && compatible(t, n)
    }
}

/// Everything read from an OBJ document, in file order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3>,
    pub texture_vertices: Vec<Point2>,
    pub normals: Vec<Point3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Mesh {
        Mesh::default()
    }

    pub fn add_vertex(&mut self, vertex: Point3) {
        self.vertices.push(vertex);
    }

    pub fn add_texture_vertex(&mut self, texture_vertex: Point2) {
        self.texture_vertices.push(texture_vertex);
    }

    pub fn add_normal(&mut self, normal: Point3) {
        self.normals.push(normal);
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.texture_vertices.is_empty()
            && self.normals.is_empty()
            && self.faces.is_empty()
    }

    /// Verifies that every face is a proper polygon and only references
    /// entities present in this mesh.
    pub fn check(&self) -> Result<(), ModelError> {
        for (face_index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(ModelError::DegenerateFace { face: face_index, count: face.len() });
            }
            if !face.is_consistent() {
                return Err(ModelError::InconsistentFace { face: face_index });
            }
            check_range(face_index, IndexKind::Vertex, face.vertex_indices(), self.vertices.len())?;
            check_range(face_index, IndexKind::TextureVertex, face.texture_vertex_indices(), self.texture_vertices.len())?;
            check_range(face_index, IndexKind::Normal, face.normal_indices(), self.normals.len())?;
        }
        Ok(())
    }
}

fn check_range(face: usize, kind: IndexKind, indices: &[usize], len: usize) -> Result<(), ModelError> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(ModelError::IndexOutOfRange { face, kind, index, len }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod mesh_check_tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_texture_vertex(Point2::new(0.0, 0.0));
        mesh.add_normal(Point3::new(0.0, 0.0, 1.0));
        mesh
    }

    #[test]
    fn empty_mesh_passes() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.check(), Ok(()));
    }

    #[test]
    fn valid_face_passes() {
        let mut mesh = triangle_mesh();
        mesh.add_face(Face::new(vec![0, 1, 2], vec![0, 0, 0], vec![0, 0, 0]));
        mesh.add_face(Face::new(vec![2, 1, 0], vec![], vec![]));
        assert_eq!(mesh.check(), Ok(()));
    }

    #[test]
    fn vertex_out_of_range() {
        let mut mesh = triangle_mesh();
        mesh.add_face(Face::new(vec![0, 1, 3], vec![], vec![]));
        assert_eq!(
            mesh.check(),
            Err(ModelError::IndexOutOfRange { face: 0, kind: IndexKind::Vertex, index: 3, len: 3 })
        );
    }

    #[test]
    fn normal_out_of_range() {
        let mut mesh = triangle_mesh();
        mesh.add_face(Face::new(vec![0, 1, 2], vec![], vec![0, 1, 0]));
        assert_eq!(
            mesh.check(),
            Err(ModelError::IndexOutOfRange { face: 0, kind: IndexKind::Normal, index: 1, len: 1 })
        );
    }

    #[test]
    fn degenerate_face() {
        let mut mesh = triangle_mesh();
        mesh.add_face(Face::new(vec![0, 1, 2], vec![], vec![]));
        mesh.add_face(Face::new(vec![0, 1], vec![], vec![]));
        assert_eq!(mesh.check(), Err(ModelError::DegenerateFace { face: 1, count: 2 }));
    }

    #[test]
    fn inconsistent_face() {
        let mut mesh = triangle_mesh();
        mesh.add_face(Face::new(vec![0, 1, 2], vec![0, 0], vec![]));
        assert_eq!(mesh.check(), Err(ModelError::InconsistentFace { face: 0 }));
    }

    #[test]
    fn face_accessors() {
        let face = Face::new(vec![0, 1, 2, 3], vec![], vec![3, 2, 1, 0]);
        assert_eq!(face.len(), 4);
        assert!(!face.has_texture());
        assert!(face.has_normals());
        assert!(face.is_consistent());
        assert_eq!(face.normal_indices(), &[3, 2, 1, 0]);
    }
}
