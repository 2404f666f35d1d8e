use serde::{ Deserialize, Serialize };

/// Tolerance used when comparing point coordinates.
pub const EPSILON: f32 = 1e-7;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

//
// Point3
//

/// A position or a normal read from an OBJ document.
///
/// Equality is tolerance based: two points are equal when every coordinate
/// differs by less than [`EPSILON`].
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Point3(f32, f32, f32); // x, y, z

impl Point3 {
    pub const ZERO: Point3 = Point3(0.0, 0.0, 0.0);

    pub fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3(x, y, z)
    }

    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }

    pub fn z(&self) -> f32 {
        self.2
    }

    pub fn xyz(&self) -> [f32; 3] {
        [self.0, self.1, self.2]
    }
}

impl PartialEq for Point3 {
    fn eq(&self, other: &Point3) -> bool {
        approx_eq(self.0, other.0)
            && approx_eq(self.1, other.1)
            && approx_eq(self.2, other.2)
    }
}

impl Default for Point3 {
    fn default() -> Point3 {
        Point3::ZERO
    }
}

//
// Point2
//

/// A texture coordinate. Any depth component in the source is discarded.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Point2(f32, f32); // u, v

impl Point2 {
    pub const ZERO: Point2 = Point2(0.0, 0.0);

    pub fn new(u: f32, v: f32) -> Point2 {
        Point2(u, v)
    }

    pub fn u(&self) -> f32 {
        self.0
    }

    pub fn v(&self) -> f32 {
        self.1
    }
}

impl PartialEq for Point2 {
    fn eq(&self, other: &Point2) -> bool {
        approx_eq(self.0, other.0) && approx_eq(self.1, other.1)
    }
}

impl Default for Point2 {
    fn default() -> Point2 {
        Point2::ZERO
    }
}
