//! Static stability evaluation of candidate placements.
//!
//! A placement is considered stable when the item rests on the container floor
//! or on enough supporting surface, and no item beneath it ends up loaded past
//! its load-bearing capacity.

mod load;
mod support;

#[doc(inline)]
pub use load::load_admissible;
#[doc(inline)]
pub use support::{on_floor, rests_on, support_ratio, supporters};

use crate::entities::{Layout, PlacedItem};
use crate::util::FPA;

/// Verdict on a candidate placement against all items already in the layout.
///
/// Accepts the candidate if:
/// 1. it rests on the floor, OR its support ratio reaches `support_threshold`
///    while touching no non-stackable top face,
/// 2. a non-stackable candidate carries nothing itself,
/// 3. the load-bearing capacity of every item beneath it is respected.
pub fn placement_is_stable(
    candidate: &PlacedItem,
    layout: &Layout,
    support_threshold: f32,
) -> bool {
    if !on_floor(&candidate.bbox) {
        // any contact with a non-stackable top face disqualifies the position,
        // regardless of how much support the remaining surfaces would provide
        if supporters(&candidate.bbox, layout).any(|(_, pi)| !pi.stackable) {
            return false;
        }
        if FPA(support_ratio(&candidate.bbox, layout)) < FPA(support_threshold) {
            return false;
        }
    }

    if !candidate.stackable
        && layout
            .placed_items
            .values()
            .any(|pi| rests_on(&pi.bbox, &candidate.bbox))
    {
        return false;
    }

    load_admissible(candidate, layout)
}
