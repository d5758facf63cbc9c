use std::fmt::Display;

/// A point in 3D space
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Point3(pub f32, pub f32, pub f32);

impl Point3 {
    pub const ORIGIN: Point3 = Point3(0.0, 0.0, 0.0);

    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }

    pub fn z(&self) -> f32 {
        self.2
    }
}

impl From<(f32, f32, f32)> for Point3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Point3(x, y, z)
    }
}

impl From<Point3> for (f32, f32, f32) {
    fn from(p: Point3) -> Self {
        (p.0, p.1, p.2)
    }
}

impl Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}
