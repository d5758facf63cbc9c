use crate::entities::LayoutSnapshot;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Snapshot of a packing run after the orchestrator terminated.
#[derive(Debug, Clone)]
pub struct PackSolution {
    /// One snapshot per used bin, in bin-creation order
    pub layout_snapshots: Vec<LayoutSnapshot>,
    /// Items that ended the run outside every bin, with the reason
    pub unplaced_items: Vec<(usize, UnplacedReason)>,
    /// Number of packing passes the orchestrator ran
    pub passes: usize,
    /// Terminal state of the orchestrator
    pub outcome: PackOutcome,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl PackSolution {
    /// Ratio of the total placed item volume to the total volume of the used bins.
    /// Zero if no bins were used.
    pub fn density(&self) -> f32 {
        let total_bin_volume = self
            .layout_snapshots
            .iter()
            .map(|ls| ls.container.volume())
            .sum::<f32>();

        if total_bin_volume == 0.0 {
            return 0.0;
        }

        let total_item_volume = self
            .layout_snapshots
            .iter()
            .flat_map(|ls| ls.placed_items.iter())
            .map(|pi| pi.bbox.volume())
            .sum::<f32>();

        total_item_volume / total_bin_volume
    }

    pub fn n_placed_items(&self) -> usize {
        self.layout_snapshots
            .iter()
            .map(|ls| ls.placed_items.len())
            .sum()
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == PackOutcome::Complete
    }
}

/// Terminal state of a packing run.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackOutcome {
    /// Every item was placed
    Complete,
    /// Some items can never be placed: they were oversize from the start,
    /// or opening additional bins stopped making progress
    Stalled,
    /// The hard pass cap was reached before all items were resolved
    Exhausted,
}

/// Reason why an item ended the run outside every bin.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnplacedReason {
    /// No rotation of the item fits within the bin dimensions
    ExceedsDimension,
    /// The item alone is heavier than the bin weight limit
    ExceedsWeight,
    /// The item fits the bin capacity, but no stable position was found
    NoStablePosition,
}
