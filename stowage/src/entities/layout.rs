use crate::entities::Container;
use crate::entities::Item;
use crate::entities::{PItemKey, PlacedItem};
use crate::geometry::Rotation;
use crate::geometry::primitives::Point3;
use crate::util::assertions;
use slotmap::SlotMap;

/// Defines a configuration of [`Item`]s in a [`Container`].
/// It is a mutable representation: a packing pass fills it one placement at a time.
#[derive(Clone)]
pub struct Layout {
    /// The container used for this layout
    pub container: Container,
    /// How the items are placed in the container
    pub placed_items: SlotMap<PItemKey, PlacedItem>,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        Layout {
            container,
            placed_items: SlotMap::with_key(),
        }
    }

    pub fn place_item(&mut self, item: &Item, position: Point3, rotation: Rotation) -> PItemKey {
        let pk = self
            .placed_items
            .insert(PlacedItem::new(item, position, rotation));

        debug_assert!(assertions::layout_is_feasible(self));

        pk
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// Total weight of the items placed in the container
    pub fn placed_weight(&self) -> f32 {
        self.placed_items.values().map(|pi| pi.weight).sum()
    }

    /// Total volume of the items placed in the container
    pub fn placed_volume(&self) -> f32 {
        self.placed_items.values().map(|pi| pi.bbox.volume()).sum()
    }

    /// Returns the usage of the container: the ratio of the volume of the placed
    /// items to the volume of the container.
    pub fn usage(&self) -> f32 {
        self.placed_volume() / self.container.volume()
    }

    /// Creates an immutable snapshot of the current state of the layout.
    /// Items appear in placement order, which is preserved as long as no items
    /// were removed.
    pub fn save(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            container: self.container,
            placed_items: self.placed_items.values().cloned().collect(),
            usage: self.usage(),
        }
    }
}

/// Immutable and compact representation of a [`Layout`], with items in placement order.
#[derive(Clone, Debug)]
pub struct LayoutSnapshot {
    /// The container used for this layout
    pub container: Container,
    /// The items placed in the container, in packing order
    pub placed_items: Vec<PlacedItem>,
    /// The usage of the container with the items placed
    pub usage: f32,
}
