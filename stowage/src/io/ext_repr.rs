use crate::entities::{PackOutcome, Priority, UnplacedReason};
use crate::geometry::Rotation;
use serde::{Deserialize, Serialize};

/// External representation of a Bin Packing instance
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Set of items to be packed
    pub items: Vec<ExtItem>,
    /// Spec of the bins; every bin used during the run is identical
    pub bin: ExtBin,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: String,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub weight: f32,
    /// Whether other items may be placed on top of this item
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    /// Maximum weight supportable on top of this item.
    /// Unlimited if not specified; irrelevant when `stackable` is false.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub load_capacity: Option<f32>,
    /// Priority tier of the item
    #[serde(default)]
    pub priority: Priority,
}

fn default_stackable() -> bool {
    true
}

/// External representation of the bin capacity spec
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBin {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub weight_limit: f32,
}

/// External representation of a [`PackSolution`](crate::entities::PackSolution)
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    /// Bins used by the solution, in creation order
    pub layouts: Vec<ExtLayout>,
    /// Items that could not be placed in any bin
    pub unplaced_items: Vec<ExtUnplacedItem>,
    /// Terminal state of the packing run
    pub outcome: PackOutcome,
    /// Sum of the placed item volumes divided by the sum of the used bin volumes
    pub density: f32,
    /// Number of packing passes the orchestrator ran
    pub passes: usize,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`Layout`](crate::entities::Layout):
/// one bin with items placed in a specific configuration.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtLayout {
    /// Id of the bin, assigned in creation order
    pub bin_id: u64,
    /// The items placed in the bin, in packing order
    pub placed_items: Vec<ExtPlacedItem>,
    /// Percentage of the bin volume occupied, rounded to two decimals
    pub utilization: f32,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem)
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacedItem {
    /// The id of the item in the instance
    pub item_id: String,
    /// Position of the minimum corner of the item in the bin
    pub position: (f32, f32, f32),
    /// The rotation applied to the item
    pub rotation: Rotation,
    /// Extents along the (x, y, z) axes after rotation
    pub dimensions: (f32, f32, f32),
}

/// An item that ended the run outside every bin
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtUnplacedItem {
    /// The id of the item in the instance
    pub item_id: String,
    pub reason: UnplacedReason,
}
