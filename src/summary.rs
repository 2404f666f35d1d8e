use std::fmt::Display;

use objreader_core::Mesh;

/// Entity counts reported by `objinfo`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub vertices: usize,
    pub texture_vertices: usize,
    pub normals: usize,
    pub faces: usize,
    pub triangles: usize,
    pub textured_faces: usize,
    pub faces_with_normals: usize,
}

impl Summary {
    pub fn of(mesh: &Mesh) -> Summary {
        Summary {
            vertices: mesh.vertices.len(),
            texture_vertices: mesh.texture_vertices.len(),
            normals: mesh.normals.len(),
            faces: mesh.faces.len(),
            triangles: mesh.faces.iter().filter(|f| f.len() == 3).count(),
            textured_faces: mesh.faces.iter().filter(|f| f.has_texture()).count(),
            faces_with_normals: mesh.faces.iter().filter(|f| f.has_normals()).count(),
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "vertices:         {}", self.vertices)?;
        writeln!(f, "texture vertices: {}", self.texture_vertices)?;
        writeln!(f, "normals:          {}", self.normals)?;
        writeln!(f, "faces:            {} ({} triangles, {} polygons)", self.faces, self.triangles, self.faces - self.triangles)?;
        writeln!(f, "  textured:       {}", self.textured_faces)?;
        write!(f, "  with normals:   {}", self.faces_with_normals)
    }
}

#[cfg(test)]
mod summary_tests {
    use super::Summary;

    const SOURCE: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vn 0 0 1
f 1/1 2/2 3/3
f 1//1 2//1 3//1 4//1
";

    #[test]
    fn counts() {
        let mesh = objreader_core::read(SOURCE).unwrap();
        assert_eq!(Summary::of(&mesh), Summary {
            vertices: 4,
            texture_vertices: 3,
            normals: 1,
            faces: 2,
            triangles: 1,
            textured_faces: 1,
            faces_with_normals: 1,
        });
    }

    #[test]
    fn display() {
        let mesh = objreader_core::read(SOURCE).unwrap();
        let text = Summary::of(&mesh).to_string();
        assert!(text.contains("faces:            2 (1 triangles, 1 polygons)"));
    }
}
