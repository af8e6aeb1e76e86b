use log::{debug, warn};
use std::collections::HashSet;
use thiserror::Error;

use crate::config::ListConfig;
use crate::handle::ScrollHandle;
use crate::item::{Item, ItemCollection, ItemId, Positions};
use crate::utils::{normalize, positions_from_move, reconcile, DragIndices};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item id {0} is used by more than one item")]
    DuplicateId(ItemId),
}

/// [ItemStore] owns the items of a reorderable list.
///
/// Every operation replaces the whole collection and returns the new one, so readers only ever
/// see a collection whose storage order matches its positions. Ids of added items come from a
/// counter that only goes up, removing items never frees an id for reuse until the `u64` range
/// is used up. Minting never hands out an id that is still in the list.
///
/// The optional scroll handle `S` is told to scroll after adds and removes, according to the
/// configured [ScrollPolicy](crate::ScrollPolicy).
///
/// # Example
/// ```rust
/// use dnd_order::{ItemId, ItemStore, Positions};
///
/// let mut store = ItemStore::new();
/// for name in ["Lettuce", "Walnuts", "Chips"] {
///     store.add_item(name);
/// }
///
/// // the widget reports that "Chips" was dropped at the top
/// let ids: Vec<ItemId> = store.items().ids().cloned().collect();
/// let positions = Positions::from([
///     (ids[2].clone(), 0),
///     (ids[0].clone(), 1),
///     (ids[1].clone(), 2),
/// ]);
/// let items = store.reorder(&positions);
/// assert_eq!(items[0].name, "Chips");
/// assert!(items.is_reconciled());
///
/// let items = store.remove_item_by_id(&ids[0]);
/// let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
/// assert_eq!(names, ["Chips", "Walnuts"]);
/// assert!(items.is_reconciled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemStore<S = ()> {
    items: ItemCollection,
    next_id: u64,
    config: ListConfig,
    scroll: S,
}

impl ItemStore<()> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store. Items are put into position order and renumbered if needed.
    pub fn from_items(items: ItemCollection) -> Result<Self, StoreError> {
        if let Some(dup) = first_duplicate(&items) {
            return Err(StoreError::DuplicateId(dup.clone()));
        }

        let next_id = items
            .ids()
            .filter_map(|id| match id {
                ItemId::Seq(n) => Some(n.saturating_add(1)),
                ItemId::Key(_) => None,
            })
            .max()
            .unwrap_or_default();

        let items = if items.is_reconciled() {
            items
        } else {
            warn!("seed items are out of position order, renumbering");
            normalize(&reconcile(&Positions::new(), &items))
        };

        Ok(Self {
            items,
            next_id,
            config: ListConfig::default(),
            scroll: (),
        })
    }
}

impl<S: ScrollHandle> ItemStore<S> {
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scroll_handle<T: ScrollHandle>(self, scroll: T) -> ItemStore<T> {
        ItemStore {
            items: self.items,
            next_id: self.next_id,
            config: self.config,
            scroll,
        }
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.find(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn scroll_handle(&self) -> &S {
        &self.scroll
    }

    pub fn scroll_handle_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    /// Appends an item named `name` at the end of the list.
    pub fn add_item(&mut self, name: impl Into<String>) -> &ItemCollection {
        let id = self.mint_id();
        let item = Item::new(id, name, self.items.len());
        debug!("adding item {} at {}", item.id, item.pos);

        let items = self.items.iter().cloned().chain(Some(item)).collect();
        self.replace(items);
        &self.items
    }

    /// Drops the item with `id` and renumbers the rest. Unknown ids leave the list as it is.
    pub fn remove_item_by_id(&mut self, id: &ItemId) -> &ItemCollection {
        if !self.items.contains(id) {
            debug!("remove ignored, no item {id}");
            return &self.items;
        }
        debug!("removing item {id}");

        let remaining = self
            .items
            .iter()
            .filter(|item| &item.id != id)
            .cloned()
            .collect();
        self.replace(normalize(&remaining));
        &self.items
    }

    /// Applies the positions reported by the widget after a completed drag.
    pub fn reorder(&mut self, positions: &Positions) -> &ItemCollection {
        debug!("reordering with {} reported positions", positions.len());

        let reconciled = reconcile(positions, &self.items);
        self.items = if self.config.normalize_after_reorder {
            normalize(&reconciled)
        } else {
            reconciled
        };
        &self.items
    }

    /// [ItemStore::reorder] for widgets that report a drag as source and target index.
    pub fn move_item(&mut self, drag: DragIndices) -> &ItemCollection {
        let positions = positions_from_move(drag, &self.items);
        self.reorder(&positions)
    }

    pub fn rename_item(&mut self, id: &ItemId, name: impl Into<String>) -> &ItemCollection {
        let Some(idx) = self.items.iter().position(|item| &item.id == id) else {
            debug!("rename ignored, no item {id}");
            return &self.items;
        };

        let mut items = self.items.clone().into_vec();
        items[idx].name = name.into();
        self.items = items.into();
        &self.items
    }

    /// Once the counter is exhausted it starts over at 0, still skipping ids in use.
    fn mint_id(&mut self) -> ItemId {
        loop {
            let id = ItemId::Seq(self.next_id);
            self.next_id = self.next_id.checked_add(1).unwrap_or_else(|| {
                warn!("item id counter exhausted, starting over at 0");
                0
            });
            if !self.items.contains(&id) {
                return id;
            }
        }
    }

    fn replace(&mut self, items: ItemCollection) {
        let len_before = self.items.len();
        self.items = items;

        let target = self.config.scroll_policy.target(
            len_before,
            self.items.len(),
            self.config.short_list_len,
        );
        if let Some(target) = target {
            debug!("scrolling to {target:?}");
            self.scroll.scroll_to(target);
        }
    }
}

fn first_duplicate(items: &ItemCollection) -> Option<&ItemId> {
    let mut seen = HashSet::with_capacity(items.len());
    items.ids().find(|id| !seen.insert(*id))
}
