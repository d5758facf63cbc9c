use crate::entities::{Layout, PItemKey, PlacedItem};
use crate::geometry::primitives::Aabb;
use crate::util::FPA;

/// True if the base of `bbox` rests on the container floor.
pub fn on_floor(bbox: &Aabb) -> bool {
    FPA(bbox.z_min) == FPA(0.0)
}

/// True if a box at `top` rests on a box at `bottom`: its base at the bottom
/// box's top face, with overlapping footprints.
pub fn rests_on(top: &Aabb, bottom: &Aabb) -> bool {
    FPA(top.z_min) == FPA(bottom.z_max) && Aabb::footprint_overlap(top, bottom) > 0.0
}

/// The placed items whose top face is in contact with the base of `bbox`.
pub fn supporters<'a>(
    bbox: &'a Aabb,
    layout: &'a Layout,
) -> impl Iterator<Item = (PItemKey, &'a PlacedItem)> {
    layout
        .placed_items
        .iter()
        .filter(move |(_, pi)| rests_on(bbox, &pi.bbox))
}

/// Fraction of the base area of `bbox` resting on solid support: the container
/// floor, or the top face of a stackable placed item at exactly the base height.
/// Placed items never overlap, so the per-supporter contributions are disjoint.
pub fn support_ratio(bbox: &Aabb, layout: &Layout) -> f32 {
    if on_floor(bbox) {
        return 1.0;
    }

    let supported = layout
        .placed_items
        .values()
        .filter(|pi| pi.stackable)
        .filter(|pi| FPA(bbox.z_min) == FPA(pi.bbox.z_max))
        .map(|pi| Aabb::footprint_overlap(bbox, &pi.bbox))
        .sum::<f32>();

    supported / bbox.base_area()
}
