use std::io::Read;
use std::path::Path;

use log::info;

use objreader_model::Mesh;
use crate::ObjError;

/// Reads and parses the OBJ file at `path`.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ObjError::General(format!("load_obj: expected obj file at path {}", path.display())));
    }

    let mut file = std::fs::File::open(path)?;
    let mesh = read_obj(&mut file)?;
    info!(
        "Loaded {}: {} vertices, {} texture vertices, {} normals, {} faces",
        path.display(), mesh.vertices.len(), mesh.texture_vertices.len(), mesh.normals.len(), mesh.faces.len()
    );
    Ok(mesh)
}

/// Reads `source` to the end and parses it as a single OBJ document.
pub fn read_obj(source: &mut dyn Read) -> Result<Mesh, ObjError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    super::format::read(&text)
}
