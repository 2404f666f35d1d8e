mod format;
mod loader;

pub use format::{
    read, read_into,
    parse_vertex, parse_texture_vertex, parse_normal, parse_face,
    FaceWord, FaceWordError,
};
pub use loader::{ load_obj, read_obj };
pub use objreader_model::{ Face, IndexKind, Mesh, ModelError, Point2, Point3 };

#[derive(thiserror::Error, Debug)]
pub enum ObjError {
    #[error("Error in OBJ line {line}: {message}")]
    Format { line: usize, message: String },
    #[error("Invalid OBJ content in line {line}: {message}")]
    Content { line: usize, message: String },
    #[error("Inconsistent OBJ data: {0}")]
    Model(#[from] ModelError),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error loading OBJ file: {0}")]
    General(String),
}

impl ObjError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> ObjError {
        ObjError::Format { line, message: message.into() }
    }

    pub(crate) fn content(line: usize, message: impl Into<String>) -> ObjError {
        ObjError::Content { line, message: message.into() }
    }

    /// Malformed record shape: wrong field count, bad number, bad face word.
    pub fn is_format(&self) -> bool {
        matches!(self, ObjError::Format { .. })
    }

    /// Well-formed record carrying an invalid value, e.g. a negative index.
    pub fn is_content(&self) -> bool {
        matches!(self, ObjError::Content { .. })
    }

    /// The 1-based line of the offending record, if the error came from one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::Format { line, .. } | ObjError::Content { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ObjError::Format { message, .. } | ObjError::Content { message, .. } => Some(message),
            _ => None,
        }
    }
}
