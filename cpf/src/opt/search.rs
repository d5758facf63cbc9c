use crate::config::CPFConfig;
use itertools::Itertools;
use log::debug;
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Reverse;
use stowage::entities::{Item, Layout, PackInstance, PlacedItem};
use stowage::geometry::Rotation;
use stowage::geometry::geo_traits::CollidesWith;
use stowage::geometry::primitives::Point3;
use stowage::stability::placement_is_stable;
use stowage::util::FPA;

/// Search the layout for the first valid placement of the item: the first
/// candidate position (in scan order) and rotation (in preference order) where
/// the item is contained in the bin, collides with nothing, respects the bin
/// weight limit and is accepted by the stability evaluator.
pub fn search(
    layout: &Layout,
    item: &Item,
    config: &CPFConfig,
    position_counter: &mut usize,
) -> Option<(Point3, Rotation)> {
    if FPA(layout.placed_weight() + item.weight) > FPA(layout.container.weight_limit) {
        // no position can fix a busted weight limit
        return None;
    }

    let bin_bbox = layout.container.bbox();

    for position in candidate_positions(layout) {
        for rotation in config.rotation_order {
            *position_counter += 1;

            let probe = PlacedItem::new(item, position, rotation);
            if !bin_bbox.contains(&probe.bbox) {
                continue;
            }
            if layout
                .placed_items
                .values()
                .any(|pi| probe.bbox.collides_with(&pi.bbox))
            {
                continue;
            }
            if !placement_is_stable(&probe, layout, config.support_threshold) {
                continue;
            }

            debug!(
                "[CPF] valid placement for item {} at {} [{}] in bin {}",
                item.id, position, rotation, layout.container.id
            );
            return Some((position, rotation));
        }
    }
    None
}

/// Candidate positions for the next placement: the bin's origin corner plus,
/// per placed item, the three corner points adjacent to its minimum corner.
/// Deduplicated and scanned in ascending (z, y, x) order.
pub fn candidate_positions(layout: &Layout) -> Vec<Point3> {
    let corners = layout.placed_items.values().flat_map(|pi| {
        let b = &pi.bbox;
        [
            Point3(b.x_max, b.y_min, b.z_min),
            Point3(b.x_min, b.y_max, b.z_min),
            Point3(b.x_min, b.y_min, b.z_max),
        ]
    });

    std::iter::once(Point3::ORIGIN)
        .chain(corners)
        .sorted_by_key(|p| (OrderedFloat(p.z()), OrderedFloat(p.y()), OrderedFloat(p.x())))
        .dedup()
        .collect_vec()
}

/// Items in packing order: priority tier first, descending volume as tie-break,
/// then id to make the order total.
pub fn item_placement_order(instance: &PackInstance) -> Vec<usize> {
    (0..instance.items.len())
        .sorted_by_cached_key(|&id| {
            let item = &instance.items[id];
            let volume = NotNan::new(item.volume()).expect("item volume is NaN");
            (item.priority, Reverse(volume), id)
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage::entities::{Container, PackInstance, Priority};
    use stowage::geometry::primitives::Dims3;

    fn item(id: usize, dims: (f32, f32, f32), priority: Priority) -> Item {
        Item::new(
            id,
            format!("item-{id}"),
            Dims3::try_new(dims.0, dims.1, dims.2).unwrap(),
            1.0,
            true,
            f32::INFINITY,
            priority,
        )
    }

    #[test]
    fn placement_order_is_priority_then_volume() {
        let instance = PackInstance::new(
            vec![
                item(0, (2.0, 2.0, 2.0), Priority::Low),
                item(1, (1.0, 1.0, 1.0), Priority::High),
                item(2, (3.0, 3.0, 3.0), Priority::Normal),
                item(3, (2.0, 2.0, 2.0), Priority::Normal),
            ],
            Container::new(0, Dims3::try_new(10.0, 10.0, 10.0).unwrap(), 100.0),
        );

        assert_eq!(item_placement_order(&instance), vec![1, 2, 3, 0]);
    }

    #[test]
    fn candidate_positions_scan_bottom_up() {
        let container = Container::new(0, Dims3::try_new(10.0, 10.0, 10.0).unwrap(), 100.0);
        let mut layout = Layout::new(container);
        layout.place_item(
            &item(0, (4.0, 4.0, 4.0), Priority::Normal),
            Point3::ORIGIN,
            Rotation::Lwh,
        );

        let positions = candidate_positions(&layout);
        assert_eq!(
            positions,
            vec![
                Point3::ORIGIN,
                Point3(4.0, 0.0, 0.0),
                Point3(0.0, 4.0, 0.0),
                Point3(0.0, 0.0, 4.0),
            ]
        );
    }
}
