//! Position bookkeeping for drag and drop reorderable lists.
//!
//! The drag and drop widget (e.g. an egui list) owns gestures, drawing and scrolling. This crate
//! keeps the per item `pos` field consistent with the list order when items are added, removed,
//! or dragged to a new slot. See [ItemStore] for the entry point and [utils] for the pure
//! reconcile and normalize steps it is built from.

pub use config::{ConfigError, ListConfig};
pub use handle::{EguiScroll, ScrollHandle, ScrollPolicy, ScrollTarget};
pub use item::{Item, ItemCollection, ItemId, Positions};
pub use render::{DragDropItem, RowDescriptor};
pub use state::{ItemStore, StoreError};

mod config;
mod handle;
mod item;
mod render;
pub mod seed;
mod state;
pub mod utils;
