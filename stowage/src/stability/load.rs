use crate::entities::{Layout, PlacedItem};
use crate::stability::support::{on_floor, rests_on};
use crate::util::FPA;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// True if adding `candidate` to the layout keeps the carried load of every item
/// (the candidate included) within its load-bearing capacity.
///
/// An item's carried load is the full weight of every item transitively resting
/// on it; when an item rests on multiple supporters, each supporter is charged
/// the full weight. The check spans the entire arrangement, so placing an item
/// on top of a stack re-validates everything beneath it.
pub fn load_admissible(candidate: &PlacedItem, layout: &Layout) -> bool {
    let nodes = layout
        .placed_items
        .values()
        .chain(std::iter::once(candidate))
        .collect_vec();

    // Settle carried loads from the top of the arrangement down.
    // Anything resting on a node has a strictly higher base, so by the time a
    // node distributes its subtree weight, its own carried load is final.
    let order = (0..nodes.len()).sorted_by_key(|&i| Reverse(OrderedFloat(nodes[i].bbox.z_min)));

    let mut carried = vec![0.0_f32; nodes.len()];
    for i in order {
        if on_floor(&nodes[i].bbox) {
            continue;
        }
        let subtree_weight = nodes[i].weight + carried[i];
        for (j, below) in nodes.iter().enumerate() {
            if i != j && rests_on(&nodes[i].bbox, &below.bbox) {
                carried[j] += subtree_weight;
            }
        }
    }

    nodes
        .iter()
        .zip(&carried)
        .all(|(node, &load)| FPA(load) <= FPA(node.load_capacity))
}
