use egui::Id;

use crate::item::{Item, ItemCollection, ItemId};

/// Lets the drag and drop widget track a row across frames.
pub trait DragDropItem {
    fn id(&self) -> Id;
}

impl DragDropItem for ItemId {
    fn id(&self) -> Id {
        Id::new(("dnd_order_row", self))
    }
}

impl DragDropItem for Item {
    fn id(&self) -> Id {
        self.id.id()
    }
}

/// What the widget needs to draw one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor {
    pub id: ItemId,
    pub label: String,
    pub height: f32,
}

impl DragDropItem for RowDescriptor {
    fn id(&self) -> Id {
        self.id.id()
    }
}

impl ItemCollection {
    /// One descriptor per item in storage order, all of them `item_height` tall.
    pub fn row_descriptors(&self, item_height: f32) -> Vec<RowDescriptor> {
        self.iter()
            .map(|item| RowDescriptor {
                id: item.id.clone(),
                label: item.name.clone(),
                height: item_height,
            })
            .collect()
    }
}
