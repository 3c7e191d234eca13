use std::cell::RefCell;

/// The externally owned collection every operation is bound to.
pub type Target<T> = RefCell<Vec<T>>;

/// Adds `element` and leaves `list` in ascending order.
///
/// An already sorted list gets the element inserted at its place; otherwise the whole list is
/// sorted afterwards, so callers may hand over an unsorted collection.
pub(crate) fn insert_one<T: Ord>(list: &mut Vec<T>, element: T) {
    if is_sorted(list) {
        let index = match list.binary_search(&element) {
            Ok(i) | Err(i) => i,
        };
        list.insert(index, element);
    } else {
        list.push(element);
        list.sort();
    }
}

/// Removes exactly one occurrence of `element` and leaves `list` in ascending order.
///
/// Returns `None` and leaves `list` untouched if there's no such element.
pub(crate) fn remove_one<T: Ord>(list: &mut Vec<T>, element: &T) -> Option<T> {
    let index = list.iter().position(|e| e == element)?;
    let removed = list.remove(index);
    restore_order(list);
    Some(removed)
}

pub(crate) fn restore_order<T: Ord>(list: &mut [T]) {
    if !is_sorted(list) {
        list.sort();
    }
}

pub(crate) fn is_sorted<T: Ord>(list: &[T]) -> bool {
    list.windows(2).all(|w| w[0] <= w[1])
}
