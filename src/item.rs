use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// Identifier of a list item. Either a caller supplied key (`"a"`) or an integer, usually one
/// minted by [`ItemStore`](crate::ItemStore). Never changes for the lifetime of the item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Seq(u64),
    Key(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Seq(n) => write!(f, "{n}"),
            ItemId::Key(key) => f.write_str(key),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Seq(n)
    }
}

impl From<&str> for ItemId {
    fn from(key: &str) -> Self {
        ItemId::Key(key.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(key: String) -> Self {
        ItemId::Key(key)
    }
}

/// New positions reported by the drag and drop widget once a drag completes, keyed by item id.
/// May cover only the moved items.
pub type Positions = HashMap<ItemId, usize>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Logical slot of the item in the list
    pub pos: usize,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, pos: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pos,
        }
    }
}

/// Ordered sequence of [Item]s.
///
/// The storage order (the order of the sequence) and the logical order (ascending `pos`) can
/// disagree, e.g. after a malformed reorder. [ItemCollection::is_reconciled] tells whether they
/// coincide and the positions are exactly `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCollection(Vec<Item>);

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.0.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.0.iter().map(|item| &item.id)
    }

    /// Position fields in storage order.
    pub fn positions(&self) -> Vec<usize> {
        self.0.iter().map(|item| item.pos).collect()
    }

    /// True if the positions are exactly `{0, .., len - 1}`, regardless of storage order.
    pub fn is_contiguous(&self) -> bool {
        let mut positions = self.positions();
        positions.sort_unstable();
        positions.into_iter().enumerate().all(|(idx, pos)| idx == pos)
    }

    /// True if every item sits in the slot its position names.
    pub fn is_reconciled(&self) -> bool {
        self.0.iter().enumerate().all(|(idx, item)| item.pos == idx)
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.0
    }
}

impl Deref for ItemCollection {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.0
    }
}

impl From<Vec<Item>> for ItemCollection {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

impl FromIterator<Item> for ItemCollection {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ItemCollection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Two column `Item`/`Pos` table in storage order.
impl fmt::Display for ItemCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .map(|item| item.name.chars().count())
            .chain(std::iter::once("Item".len()))
            .max()
            .unwrap_or_default();

        writeln!(f, "{:<width$}  Pos", "Item")?;
        for item in &self.0 {
            writeln!(f, "{:<width$}  {}", item.name, item.pos)?;
        }
        Ok(())
    }
}
