use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Dims3;
use crate::geometry::primitives::Point3;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned cuboid
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Aabb {
    pub x_min: f32,
    pub y_min: f32,
    pub z_min: f32,
    pub x_max: f32,
    pub y_max: f32,
    pub z_max: f32,
}

impl Aabb {
    pub fn try_new(
        x_min: f32,
        y_min: f32,
        z_min: f32,
        x_max: f32,
        y_max: f32,
        z_max: f32,
    ) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max && z_min < z_max,
            "invalid cuboid, x: [{x_min}, {x_max}], y: [{y_min}, {y_max}], z: [{z_min}, {z_max}]"
        );
        Ok(Aabb {
            x_min,
            y_min,
            z_min,
            x_max,
            y_max,
            z_max,
        })
    }

    /// The box occupied by extents `dims` with its minimum corner at `pos`.
    pub fn from_pos_dims(pos: Point3, dims: Dims3) -> Self {
        let Point3(x, y, z) = pos;
        Aabb {
            x_min: x,
            y_min: y,
            z_min: z,
            x_max: x + dims.l,
            y_max: y + dims.w,
            z_max: z + dims.h,
        }
    }

    pub fn length(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn width(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn height(&self) -> f32 {
        self.z_max - self.z_min
    }

    pub fn volume(&self) -> f32 {
        self.length() * self.width() * self.height()
    }

    /// Area of the bottom face
    pub fn base_area(&self) -> f32 {
        self.length() * self.width()
    }

    /// Returns true if `other` lies entirely within `self`, with a tolerance for
    /// floating point precision at shared boundaries.
    #[inline(always)]
    pub fn contains(&self, other: &Aabb) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.z_min) <= FPA(other.z_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
            && FPA(self.z_max) >= FPA(other.z_max)
    }

    /// Area of the overlap between the xy-footprints of `a` and `b`.
    /// Zero if the footprints are disjoint or merely share an edge.
    pub fn footprint_overlap(a: &Aabb, b: &Aabb) -> f32 {
        let dx = f32::min(a.x_max, b.x_max) - f32::max(a.x_min, b.x_min);
        let dy = f32::min(a.y_max, b.y_max) - f32::max(a.y_min, b.y_min);
        if dx > 0.0 && dy > 0.0 { dx * dy } else { 0.0 }
    }
}

impl CollidesWith<Aabb> for Aabb {
    /// Strict overlap test: boxes touching at a face, edge or corner do not collide.
    /// Contact within the [`FPA`] tolerance counts as touching.
    #[inline(always)]
    fn collides_with(&self, other: &Aabb) -> bool {
        FPA(f32::max(self.x_min, other.x_min)) < FPA(f32::min(self.x_max, other.x_max))
            && FPA(f32::max(self.y_min, other.y_min)) < FPA(f32::min(self.y_max, other.y_max))
            && FPA(f32::max(self.z_min, other.z_min)) < FPA(f32::min(self.z_max, other.z_max))
    }
}

impl CollidesWith<Point3> for Aabb {
    #[inline(always)]
    fn collides_with(&self, point: &Point3) -> bool {
        let Point3(x, y, z) = *point;
        x >= self.x_min
            && x <= self.x_max
            && y >= self.y_min
            && y <= self.y_max
            && z >= self.z_min
            && z <= self.z_max
    }
}
