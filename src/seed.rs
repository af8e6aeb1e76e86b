//! Demo content for the grocery list showcase.

use crate::item::{Item, ItemCollection};

const GROCERIES: [(&str, &str); 13] = [
    ("a", "Coconut Milk"),
    ("b", "Lettuce"),
    ("c", "Walnuts"),
    ("d", "Chips"),
    ("e", "Ice Cream"),
    ("f", "Carrots"),
    ("g", "Onions"),
    ("h", "Cheese"),
    ("i", "Frozen Dinners"),
    ("j", "Yogurt"),
    ("k", "Kombucha"),
    ("l", "Lemons"),
    ("m", "Bread"),
];

/// Thirteen groceries keyed `"a"` to `"m"`, already in position order.
pub fn grocery_list() -> ItemCollection {
    GROCERIES
        .iter()
        .enumerate()
        .map(|(pos, (id, name))| Item::new(*id, *name, pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grocery_list_is_reconciled() {
        let items = grocery_list();
        assert_eq!(items.len(), 13);
        assert!(items.is_reconciled());
        assert_eq!(items[12].name, "Bread");
    }
}
