use crate::geometry::primitives::Dims3;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the six axis-aligned orientations of a cuboid.
/// Named by the order in which the original (L, W, H) extents end up on the (x, y, z) axes.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rotation {
    Lwh,
    Wlh,
    Whl,
    Hlw,
    Hwl,
    Lhw,
}

impl Rotation {
    /// All six rotations, in the default preference order.
    pub const ALL: [Rotation; 6] = [
        Rotation::Lwh,
        Rotation::Wlh,
        Rotation::Whl,
        Rotation::Hlw,
        Rotation::Hwl,
        Rotation::Lhw,
    ];

    /// Applies the rotation to `dims`, returning the extents along the (x, y, z) axes.
    pub fn apply(&self, dims: Dims3) -> Dims3 {
        let Dims3 { l, w, h } = dims;
        match self {
            Rotation::Lwh => Dims3 { l, w, h },
            Rotation::Wlh => Dims3 { l: w, w: l, h },
            Rotation::Whl => Dims3 { l: w, w: h, h: l },
            Rotation::Hlw => Dims3 { l: h, w: l, h: w },
            Rotation::Hwl => Dims3 { l: h, w, h: l },
            Rotation::Lhw => Dims3 { l, w: h, h: w },
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rotation::Lwh => "LWH",
            Rotation::Wlh => "WLH",
            Rotation::Whl => "WHL",
            Rotation::Hlw => "HLW",
            Rotation::Hwl => "HWL",
            Rotation::Lhw => "LHW",
        };
        write!(f, "{s}")
    }
}
