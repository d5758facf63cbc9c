use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

///Extents of a cuboid along the three axes: length (x), width (y) and height (z)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Dims3 {
    pub l: f32,
    pub w: f32,
    pub h: f32,
}

impl Dims3 {
    pub fn try_new(l: f32, w: f32, h: f32) -> Result<Self> {
        ensure!(
            l.is_finite() && w.is_finite() && h.is_finite() && l > 0.0 && w > 0.0 && h > 0.0,
            "invalid extents, l: {l}, w: {w}, h: {h}"
        );
        Ok(Dims3 { l, w, h })
    }

    pub fn volume(&self) -> f32 {
        self.l * self.w * self.h
    }

    /// True if these extents fit within `other` along every axis, with a tolerance
    /// for floating point precision at shared boundaries.
    pub fn fits_within(&self, other: Dims3) -> bool {
        FPA(self.l) <= FPA(other.l) && FPA(self.w) <= FPA(other.w) && FPA(self.h) <= FPA(other.h)
    }
}
