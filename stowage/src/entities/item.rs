use crate::geometry::primitives::Dims3;
use serde::{Deserialize, Serialize};

/// Item to be packed.
#[derive(Clone, Debug)]
pub struct Item {
    pub id: usize,
    /// Identifier of the item as defined in the input file
    pub name: String,
    /// Extents of the item in its original orientation
    pub dims: Dims3,
    pub weight: f32,
    /// Whether other items may rest on top of this item
    pub stackable: bool,
    /// Maximum total weight this item can carry on top of it.
    /// Zero for non-stackable items.
    pub load_capacity: f32,
    /// Priority tier; higher tiers are packed first
    pub priority: Priority,
}

impl Item {
    pub fn new(
        id: usize,
        name: String,
        dims: Dims3,
        weight: f32,
        stackable: bool,
        load_capacity: f32,
        priority: Priority,
    ) -> Item {
        let load_capacity = match stackable {
            true => load_capacity,
            false => 0.0,
        };
        Item {
            id,
            name,
            dims,
            weight,
            stackable,
            load_capacity,
            priority,
        }
    }

    pub fn volume(&self) -> f32 {
        self.dims.volume()
    }
}

/// Priority tier of an [`Item`]. Lower tiers are only considered after higher ones.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}
