use log::{debug, log_enabled, trace, Level};

use crate::item::{Item, ItemCollection, Positions};

/// Source and target index of a completed drag, as reported by index based drag and drop widgets.
/// `target` is the insertion slot counted before the dragged item is taken out of the list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragIndices {
    pub source: usize,
    pub target: usize,
}

/// Merges `positions` into `items` and returns a copy sorted by the resulting positions.
///
/// Items missing from `positions` keep their position. Entries naming items that are not in the
/// collection are ignored. Items that end up sharing a position keep their relative input order.
/// Contiguity is not restored here, follow up with [normalize] when the mapping may be malformed.
pub fn reconcile(positions: &Positions, items: &ItemCollection) -> ItemCollection {
    let mut reconciled: Vec<Item> = items
        .iter()
        .map(|item| match positions.get(&item.id) {
            Some(&pos) => {
                trace!("item {} moves from {} to {}", item.id, item.pos, pos);
                Item { pos, ..item.clone() }
            }
            None => item.clone(),
        })
        .collect();

    if log_enabled!(Level::Debug) {
        for id in positions.keys().filter(|id| !items.contains(id)) {
            debug!("ignoring position for unknown item {id}");
        }
    }

    // `sort_by_key` is stable, ties keep input order
    reconciled.sort_by_key(|item| item.pos);
    reconciled.into()
}

/// Rewrites every position to the index of its slot. Never reorders.
pub fn normalize(items: &ItemCollection) -> ItemCollection {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| Item {
            pos: idx,
            ..item.clone()
        })
        .collect()
}

/// Full [Positions] mapping for `items` after moving the item at `drag.source` to `drag.target`.
/// Out of bounds indices leave every item where it is.
pub fn positions_from_move(drag: DragIndices, items: &ItemCollection) -> Positions {
    let mut ids: Vec<_> = items.ids().collect();
    shift_vec(drag.source, drag.target, &mut ids);
    ids.into_iter()
        .enumerate()
        .map(|(pos, id)| (id.clone(), pos))
        .collect()
}

/// Removes value at `source_idx` and places it at `target_idx`. Does nothing if `source_idx` is
/// equal to `target_idx` or if either index is outside the vec bounds.
fn shift_vec<T>(source_idx: usize, mut target_idx: usize, vec: &mut Vec<T>) {
    if source_idx == target_idx || source_idx >= vec.len() || target_idx > vec.len() {
        return;
    }

    if source_idx < target_idx {
        target_idx -= 1
    };

    let item = vec.remove(source_idx);
    vec.insert(target_idx, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn abc() -> ItemCollection {
        vec![
            Item::new("a", "Coconut Milk", 0),
            Item::new("b", "Lettuce", 1),
            Item::new("c", "Walnuts", 2),
        ]
        .into()
    }

    fn mapping(entries: &[(&str, usize)]) -> Positions {
        entries
            .iter()
            .map(|(id, pos)| (ItemId::from(*id), *pos))
            .collect()
    }

    fn order(items: &ItemCollection) -> Vec<(String, usize)> {
        items.iter().map(|item| (item.id.to_string(), item.pos)).collect()
    }

    fn owned(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
        entries
            .iter()
            .map(|(id, pos)| (id.to_string(), *pos))
            .collect()
    }

    fn permutations(n: usize) -> Vec<Vec<usize>> {
        if n == 0 {
            return vec![vec![]];
        }
        let mut all = Vec::new();
        for perm in permutations(n - 1) {
            for slot in 0..=perm.len() {
                let mut next = perm.clone();
                next.insert(slot, n - 1);
                all.push(next);
            }
        }
        all
    }

    #[test]
    fn reconcile_sorts_by_mapped_positions() {
        let reconciled = reconcile(&mapping(&[("a", 2), ("b", 0), ("c", 1)]), &abc());

        assert_eq!(order(&reconciled), owned(&[("b", 0), ("c", 1), ("a", 2)]));
        assert!(reconciled.is_reconciled());
    }

    #[test]
    fn reconcile_ignores_unknown_ids() {
        let items = abc();

        assert_eq!(reconcile(&mapping(&[("zz", 5)]), &items), items);
    }

    #[test]
    fn reconcile_leaves_input_untouched() {
        let items = abc();
        let before = items.clone();

        let _ = reconcile(&mapping(&[("a", 2), ("c", 0)]), &items);

        assert_eq!(items, before);
    }

    #[rstest]
    #[case(&[("a", 1)], &[("a", 1), ("b", 1), ("c", 2)])]
    #[case(&[("c", 0)], &[("a", 0), ("c", 0), ("b", 1)])]
    #[case(&[("a", 0), ("b", 0), ("c", 0)], &[("a", 0), ("b", 0), ("c", 0)])]
    #[case(&[("a", 7)], &[("b", 1), ("c", 2), ("a", 7)])]
    fn reconcile_is_stable_on_malformed_mappings(
        #[case] entries: &[(&str, usize)],
        #[case] expected: &[(&str, usize)],
    ) {
        let reconciled = reconcile(&mapping(entries), &abc());

        assert_eq!(order(&reconciled), owned(expected));
    }

    #[test]
    fn reconcile_is_idempotent_for_current_order() {
        let items = abc();
        let current = mapping(&[("a", 0), ("b", 1), ("c", 2)]);

        let once = reconcile(&current, &items);
        assert_eq!(once, items);
        assert_eq!(reconcile(&current, &once), once);
    }

    #[test]
    fn reconcile_applies_every_permutation() {
        for n in 0..=5 {
            let items: ItemCollection = (0..n)
                .map(|i| Item::new(i as u64, format!("item {i}"), i))
                .collect();

            for perm in permutations(n) {
                let positions: Positions = perm
                    .iter()
                    .enumerate()
                    .map(|(i, &pos)| (ItemId::from(i as u64), pos))
                    .collect();

                let reconciled = reconcile(&positions, &items);

                assert!(reconciled.is_reconciled(), "{perm:?}");
                for item in reconciled.iter() {
                    assert_eq!(positions[&item.id], item.pos);
                }
            }
        }
    }

    #[test]
    fn normalize_renumbers_in_storage_order() {
        let items: ItemCollection = vec![
            Item::new("a", "Coconut Milk", 4),
            Item::new("c", "Walnuts", 9),
            Item::new("b", "Lettuce", 0),
        ]
        .into();

        assert_eq!(
            order(&normalize(&items)),
            owned(&[("a", 0), ("c", 1), ("b", 2)])
        );
    }

    #[rstest]
    #[case(ItemCollection::new())]
    #[case(ItemCollection::from(vec![Item::new("a", "Coconut Milk", 3)]))]
    #[case(ItemCollection::from(vec![
        Item::new("a", "Coconut Milk", 2),
        Item::new("b", "Lettuce", 2),
    ]))]
    #[case(ItemCollection::from(vec![
        Item::new(1u64, "Chips", 0),
        Item::new(5u64, "Bread", 1),
    ]))]
    fn normalize_is_idempotent_and_contiguous(#[case] items: ItemCollection) {

        let once = normalize(&items);
        assert!(once.is_reconciled());
        assert_eq!(normalize(&once), once);
        assert_eq!(once.len(), items.len());
    }

    #[rstest]
    #[case(DragIndices { source: 0, target: 3 }, &["b", "c", "a"])]
    #[case(DragIndices { source: 2, target: 0 }, &["c", "a", "b"])]
    #[case(DragIndices { source: 0, target: 2 }, &["b", "a", "c"])]
    #[case(DragIndices { source: 1, target: 1 }, &["a", "b", "c"])]
    #[case(DragIndices { source: 3, target: 0 }, &["a", "b", "c"])]
    #[case(DragIndices { source: 0, target: 4 }, &["a", "b", "c"])]
    fn move_becomes_full_mapping(#[case] drag: DragIndices, #[case] expected: &[&str]) {
        let items = abc();

        let positions = positions_from_move(drag, &items);
        assert_eq!(positions.len(), items.len());

        let reconciled = reconcile(&positions, &items);
        let ids: Vec<String> = reconciled.ids().map(ToString::to_string).collect();
        assert_eq!(ids, expected);
        assert!(reconciled.is_reconciled());
    }
}
