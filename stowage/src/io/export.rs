use crate::entities::{LayoutSnapshot, PackInstance, PackSolution};
use crate::io::ext_repr::{ExtLayout, ExtPlacedItem, ExtSolution, ExtUnplacedItem};
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(instance: &PackInstance, solution: &PackSolution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        layouts: solution
            .layout_snapshots
            .iter()
            .map(|ls| export_layout_snapshot(ls, instance))
            .collect(),
        unplaced_items: solution
            .unplaced_items
            .iter()
            .map(|&(item_id, reason)| ExtUnplacedItem {
                item_id: instance.item(item_id).name.clone(),
                reason,
            })
            .collect(),
        outcome: solution.outcome,
        density: solution.density(),
        passes: solution.passes,
        run_time_ms: solution.time_stamp.duration_since(epoch).as_millis() as u64,
    }
}

/// Exports a single bin, with its utilization as a percentage rounded to two decimals
pub fn export_layout_snapshot(ls: &LayoutSnapshot, instance: &PackInstance) -> ExtLayout {
    ExtLayout {
        bin_id: ls.container.id as u64,
        placed_items: ls
            .placed_items
            .iter()
            .map(|pi| ExtPlacedItem {
                item_id: instance.item(pi.item_id).name.clone(),
                position: pi.position.into(),
                rotation: pi.rotation,
                dimensions: (pi.dims.l, pi.dims.w, pi.dims.h),
            })
            .collect(),
        utilization: (ls.usage * 10_000.0).round() / 100.0,
    }
}
