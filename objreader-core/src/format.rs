use log::{ debug, trace };

use objreader_model::{ Face, Mesh, Point2, Point3 };
use crate::ObjError;

// Obj reader
//
// Single forward pass over the document, one record per line.
// Supported directives:
// - `v x y z`         vertex position
// - `vt u v [w]`      texture vertex, depth is validated then dropped
// - `vn x y z`        vertex normal
// - `f a b c ...`     polygon, each corner `v`, `v/vt`, `v//vn` or `v/vt/vn`
// Everything else (comments, groups, materials, ...) is skipped.
//
// Indices in the file are 1-based, indices in the Mesh are 0-based.
//
// See: https://en.wikipedia.org/wiki/Wavefront_.obj_file

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Directive {
    Vertex,
    TextureVertex,
    Normal,
    Face,
}

impl Directive {
    fn from_tag(tag: &str) -> Option<Directive> {
        match tag {
            "v" => Some(Directive::Vertex),
            "vt" => Some(Directive::TextureVertex),
            "vn" => Some(Directive::Normal),
            "f" => Some(Directive::Face),
            _ => None,
        }
    }
}

/// Parses a whole OBJ document into a new [`Mesh`].
pub fn read(source: &str) -> Result<Mesh, ObjError> {
    let mut mesh = Mesh::default();
    read_into(source, &mut mesh)?;
    Ok(mesh)
}

/// Parses a whole OBJ document, appending every record to `mesh`.
///
/// Stops at the first malformed record. Once all lines are consumed the
/// mesh is checked with [`Mesh::check`] and any failure is returned as is.
pub fn read_into(source: &str, mesh: &mut Mesh) -> Result<(), ObjError> {
    for (line_no, line) in logical_lines(source).enumerate() {
        let line_no = line_no + 1;
        let mut words = line.split_whitespace();
        let Some(tag) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        match Directive::from_tag(tag) {
            Some(Directive::Vertex) => mesh.add_vertex(parse_vertex(&args, line_no)?),
            Some(Directive::TextureVertex) => mesh.add_texture_vertex(parse_texture_vertex(&args, line_no)?),
            Some(Directive::Normal) => mesh.add_normal(parse_normal(&args, line_no)?),
            Some(Directive::Face) => mesh.add_face(parse_face(&args, line_no)?),
            None => trace!("Skipping unsupported directive `{tag}` on line {line_no}"),
        }
    }

    mesh.check()?;

    debug!(
        "Read OBJ document: {} vertices, {} texture vertices, {} normals, {} faces",
        mesh.vertices.len(), mesh.texture_vertices.len(), mesh.normals.len(), mesh.faces.len()
    );
    Ok(())
}

// Splits on `\n`, `\r\n` and lone `\r`.
fn logical_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

fn argument<'a>(words: &[&'a str], i: usize, line_no: usize, missing: &str) -> Result<&'a str, ObjError> {
    words.get(i).copied().ok_or_else(|| ObjError::format(line_no, missing))
}

fn parse_float(word: &str, line_no: usize) -> Result<f32, ObjError> {
    word.parse().map_err(|_| ObjError::format(line_no, "Failed to parse float value"))
}

fn parse_point3(words: &[&str], line_no: usize, wrong_count: &str, missing: &str) -> Result<Point3, ObjError> {
    if words.len() != 3 {
        return Err(ObjError::format(line_no, wrong_count));
    }
    let x = parse_float(argument(words, 0, line_no, missing)?, line_no)?;
    let y = parse_float(argument(words, 1, line_no, missing)?, line_no)?;
    let z = parse_float(argument(words, 2, line_no, missing)?, line_no)?;
    Ok(Point3::new(x, y, z))
}

/// Parses the arguments of a `v` record.
pub fn parse_vertex(words: &[&str], line_no: usize) -> Result<Point3, ObjError> {
    parse_point3(words, line_no, "The number of vertex coordinates is incorrect", "Too few vertex arguments")
}

/// Parses the arguments of a `vt` record. An optional third (depth) value must
/// be a valid float but is not kept.
pub fn parse_texture_vertex(words: &[&str], line_no: usize) -> Result<Point2, ObjError> {
    const MISSING: &str = "Too few texture vertex arguments";
    if words.len() != 2 && words.len() != 3 {
        return Err(ObjError::format(line_no, "The number of texture vertex coordinates is incorrect"));
    }
    let u = parse_float(argument(words, 0, line_no, MISSING)?, line_no)?;
    let v = parse_float(argument(words, 1, line_no, MISSING)?, line_no)?;
    if let Some(depth) = words.get(2) {
        parse_float(depth, line_no)?;
    }
    Ok(Point2::new(u, v))
}

/// Parses the arguments of a `vn` record.
pub fn parse_normal(words: &[&str], line_no: usize) -> Result<Point3, ObjError> {
    parse_point3(words, line_no, "The number of normal coordinates is incorrect", "Too few normal arguments")
}

/// Parses the arguments of an `f` record into a [`Face`] of 0-based indices.
pub fn parse_face(words: &[&str], line_no: usize) -> Result<Face, ObjError> {
    if words.len() < 3 {
        return Err(ObjError::format(line_no, "Not enough information, a polygon requires at least three points"));
    }

    let mut vertex_indices = Vec::with_capacity(words.len());
    let mut texture_vertex_indices = Vec::new();
    let mut normal_indices = Vec::new();

    for word in words {
        let corner: FaceWord = word.parse().map_err(|err: FaceWordError| err.at_line(line_no))?;
        vertex_indices.push(corner.vertex_index);
        texture_vertex_indices.extend(corner.texture_index);
        normal_indices.extend(corner.normal_index);
    }

    let face = Face::new(vertex_indices, texture_vertex_indices, normal_indices);
    check_face_format(&face, line_no)?;
    Ok(face)
}

// Each pair of index lists must either match in length or have an empty side.
// A corner always contributes a vertex index, so this also rejects faces that
// give a texture or normal index on some corners only.
fn check_face_format(face: &Face, line_no: usize) -> Result<(), ObjError> {
    if !face.is_consistent() {
        return Err(ObjError::format(line_no, "Incorrect format in the face description"));
    }
    Ok(())
}

/// One corner of a face: `v`, `v/vt`, `v//vn` or `v/vt/vn`, already converted to 0-based indices.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FaceWord {
    pub vertex_index: usize,
    pub texture_index: Option<usize>,
    pub normal_index: Option<usize>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceWordError {
    #[error("Invalid element size")]
    UnexpectedPartCount,
    #[error("Too few arguments")]
    TooFewArguments,
    #[error("Failed to parse int value")]
    ParseIntError(#[from] std::num::ParseIntError),
    #[error("Index cannot be negative")]
    NegativeIndex,
    #[error("Index cannot be zero")]
    ZeroIndex,
    #[error("Index is too large")]
    IndexTooLarge,
}

impl FaceWordError {
    /// Attaches the line number, classifying the failure as format or content.
    pub fn at_line(self, line_no: usize) -> ObjError {
        match self {
            FaceWordError::NegativeIndex
            | FaceWordError::ZeroIndex
            | FaceWordError::IndexTooLarge => ObjError::content(line_no, self.to_string()),
            FaceWordError::UnexpectedPartCount
            | FaceWordError::TooFewArguments
            | FaceWordError::ParseIntError(_) => ObjError::format(line_no, self.to_string()),
        }
    }
}

// 1-based file index to 0-based mesh index.
fn parse_index(s: &str) -> Result<usize, FaceWordError> {
    let index: i64 = s.parse()?;
    if index < 0 {
        return Err(FaceWordError::NegativeIndex);
    }
    if index == 0 {
        return Err(FaceWordError::ZeroIndex);
    }
    usize::try_from(index - 1).map_err(|_| FaceWordError::IndexTooLarge)
}

impl std::str::FromStr for FaceWord {
    type Err = FaceWordError;
    fn from_str(s: &str) -> Result<Self, FaceWordError> {
        let parts: Vec<&str> = s.split('/').collect();
        // Negative indices are rejected before the element size is looked at
        for part in parts.iter().filter(|part| !part.is_empty()) {
            if part.parse::<i64>()? < 0 {
                return Err(FaceWordError::NegativeIndex);
            }
        }
        let part = |i: usize| parts.get(i).copied().ok_or(FaceWordError::TooFewArguments);
        match parts.len() {
            1 => Ok(FaceWord {
                vertex_index: parse_index(part(0)?)?,
                texture_index: None,
                normal_index: None,
            }),
            2 => Ok(FaceWord {
                vertex_index: parse_index(part(0)?)?,
                texture_index: Some(parse_index(part(1)?)?),
                normal_index: None,
            }),
            3 => {
                let vertex_index = parse_index(part(0)?)?;
                // Only the texture slot may be left empty: `v//vn`
                let texture_index = match part(1)? {
                    "" => None,
                    t => Some(parse_index(t)?),
                };
                let normal_index = Some(parse_index(part(2)?)?);
                Ok(FaceWord { vertex_index, texture_index, normal_index })
            },
            _ => Err(FaceWordError::UnexpectedPartCount),
        }
    }
}

#[cfg(test)]
mod face_word_tests {
    use super::{ FaceWord, FaceWordError };

    fn parse(s: &str) -> Result<FaceWord, FaceWordError> {
        s.parse()
    }

    #[test]
    fn vertex_only() {
        assert_eq!(parse("1"), Ok(FaceWord { vertex_index: 0, texture_index: None, normal_index: None }));
    }

    #[test]
    fn vertex_texture() {
        assert_eq!(parse("3/7"), Ok(FaceWord { vertex_index: 2, texture_index: Some(6), normal_index: None }));
    }

    #[test]
    fn vertex_texture_normal() {
        assert_eq!(parse("3/7/9"), Ok(FaceWord { vertex_index: 2, texture_index: Some(6), normal_index: Some(8) }));
    }

    #[test]
    fn vertex_normal() {
        assert_eq!(parse("3//9"), Ok(FaceWord { vertex_index: 2, texture_index: None, normal_index: Some(8) }));
    }

    #[test]
    fn index_round_trip() {
        for file_index in [1usize, 2, 10, 12345] {
            let word = parse(&file_index.to_string()).unwrap();
            assert_eq!(word.vertex_index + 1, file_index);
        }
    }

    #[test]
    fn too_many_parts() {
        assert_eq!(parse("1/2/3/4"), Err(FaceWordError::UnexpectedPartCount));
        assert_eq!(parse("1///4"), Err(FaceWordError::UnexpectedPartCount));
    }

    #[test]
    fn negative_index_wins_over_element_size() {
        assert_eq!(parse("1/2/3/-4"), Err(FaceWordError::NegativeIndex));
        assert_eq!(parse("-1//2//3"), Err(FaceWordError::NegativeIndex));
        assert!(matches!(parse("1/2/3/x"), Err(FaceWordError::ParseIntError(_))));
    }

    #[test]
    fn empty_texture_in_two_parts() {
        assert!(matches!(parse("1/"), Err(FaceWordError::ParseIntError(_))));
    }

    #[test]
    fn empty_vertex_or_normal() {
        assert!(matches!(parse("/2/3"), Err(FaceWordError::ParseIntError(_))));
        assert!(matches!(parse("1/2/"), Err(FaceWordError::ParseIntError(_))));
    }

    #[test]
    fn not_an_integer() {
        assert!(matches!(parse("a"), Err(FaceWordError::ParseIntError(_))));
        assert!(matches!(parse("1.5"), Err(FaceWordError::ParseIntError(_))));
    }

    #[test]
    fn negative_index() {
        assert_eq!(parse("-1"), Err(FaceWordError::NegativeIndex));
        assert_eq!(parse("1/-2/3"), Err(FaceWordError::NegativeIndex));
    }

    #[test]
    fn zero_index() {
        assert_eq!(parse("0"), Err(FaceWordError::ZeroIndex));
        assert_eq!(parse("1//0"), Err(FaceWordError::ZeroIndex));
    }
}
