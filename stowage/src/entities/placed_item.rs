use crate::entities::Item;
use crate::geometry::Rotation;
use crate::geometry::primitives::{Aabb, Dims3, Point3};
use slotmap::new_key_type;

#[cfg(doc)]
use crate::entities::Layout;

new_key_type! {
    /// Unique key for each [`PlacedItem`] in a layout.
    pub struct PItemKey;
}

/// Represents an [`Item`] that has been placed in a [`Layout`]
#[derive(Clone, Debug)]
pub struct PlacedItem {
    /// ID of the `Item` that was placed
    pub item_id: usize,
    /// The rotation that was applied to the `Item` before it was placed
    pub rotation: Rotation,
    /// Position of the minimum corner of the item in the container
    pub position: Point3,
    /// Extents along the (x, y, z) axes after rotation
    pub dims: Dims3,
    /// Space occupied by the item in the container
    pub bbox: Aabb,
    pub weight: f32,
    pub stackable: bool,
    pub load_capacity: f32,
}

impl PlacedItem {
    pub fn new(item: &Item, position: Point3, rotation: Rotation) -> Self {
        let dims = rotation.apply(item.dims);
        let bbox = Aabb::from_pos_dims(position, dims);
        PlacedItem {
            item_id: item.id,
            rotation,
            position,
            dims,
            bbox,
            weight: item.weight,
            stackable: item.stackable,
            load_capacity: item.load_capacity,
        }
    }
}
