//! Display order of items within a tab.

use crate::entities::Item;

/// Index given to an item whose position is not yet known (dropped from
/// elsewhere). It sorts after every placed item until the next reindex.
pub const SENTINEL_INDEX: i64 = -1;

/// Sort key: placed items by index, then unplaced ones.
fn display_key(item: &Item) -> (bool, i64) {
    match item.index() {
        Some(index) if index >= 0 => (false, index),
        _ => (true, 0),
    }
}

/// Items in display order.
///
/// Ascending `index`; the sort is stable, so ties (and every unplaced item)
/// keep the order they were given in, which for a record is insertion order.
pub fn sort_for_display<'a, I>(items: I) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut sorted: Vec<&Item> = items.into_iter().collect();
    sorted.sort_by_key(|item| display_key(item));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ItemKind;
    use crate::ids::ItemId;

    fn gear(name: &str, index: Option<i64>) -> Item {
        let item = Item::new(ItemKind::Gear, name);
        match index {
            Some(index) => item.with_placement(ItemId::new(), index),
            None => item,
        }
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn ascending_index_with_stable_ties() {
        let items = vec![
            gear("c", Some(5)),
            gear("a", Some(0)),
            gear("b1", Some(2)),
            gear("b2", Some(2)),
        ];
        assert_eq!(names(&sort_for_display(&items)), ["a", "b1", "b2", "c"]);
    }

    #[test]
    fn sentinel_and_missing_indices_go_last_in_insertion_order() {
        let items = vec![
            gear("dropped", Some(SENTINEL_INDEX)),
            gear("second", Some(1)),
            gear("fresh", None),
            gear("first", Some(0)),
        ];
        assert_eq!(
            names(&sort_for_display(&items)),
            ["first", "second", "dropped", "fresh"]
        );
    }
}
