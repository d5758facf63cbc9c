use crate::entities::{Container, Item, Layout, LayoutSnapshot, PlacedItem};
use crate::geometry::geo_traits::CollidesWith;
use crate::stability::placement_is_stable;
use crate::util::FPA;
use itertools::Itertools;

pub fn instance_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

pub fn layout_is_feasible(layout: &Layout) -> bool {
    let items = layout.placed_items.values().cloned().collect_vec();
    placements_feasible(&layout.container, &items)
}

pub fn snapshot_is_feasible(ls: &LayoutSnapshot) -> bool {
    placements_feasible(&ls.container, &ls.placed_items)
}

/// Containment, pairwise non-overlap and the weight limit.
pub fn placements_feasible(container: &Container, items: &[PlacedItem]) -> bool {
    let bin_bbox = container.bbox();

    let all_contained = items.iter().all(|pi| bin_bbox.contains(&pi.bbox));
    let none_collide = items
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.bbox.collides_with(&b.bbox));
    let weight_ok =
        FPA(items.iter().map(|pi| pi.weight).sum::<f32>()) <= FPA(container.weight_limit);

    all_contained && none_collide && weight_ok
}

/// Every item, evaluated against the rest of the arrangement, must be acceptable
/// to the stability evaluator.
pub fn placements_stable(
    container: &Container,
    items: &[PlacedItem],
    support_threshold: f32,
) -> bool {
    (0..items.len()).all(|i| {
        let mut rest = Layout::new(*container);
        for (j, pi) in items.iter().enumerate() {
            if j != i {
                rest.placed_items.insert(pi.clone());
            }
        }
        placement_is_stable(&items[i], &rest, support_threshold)
    })
}
