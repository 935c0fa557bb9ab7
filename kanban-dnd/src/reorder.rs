//! Reordering primitives for ordered sequences.
//!
//! `relocate` is "move element" semantics: the item is removed from `from` and
//! reinserted so that it ends up at index `to` of the result. It never swaps.
//!
//! The cross-container variant works on items that belong to a container (tasks
//! in columns) and sequences the two effects explicitly: adopt the target's
//! container first, then reposition.

use std::cmp::Ordering;

/// Move the item at `from` so it ends up at index `to`.
///
/// # Panics
///
/// Panics when either index is out of bounds. Callers derive both indices from
/// a lookup in the same sequence, so a bad index means the board's invariants
/// are already broken.
pub fn relocate<T>(items: &mut [T], from: usize, to: usize) {
    let len = items.len();
    assert!(
        from < len && to < len,
        "relocate out of bounds: from {from}, to {to}, len {len}"
    );

    match from.cmp(&to) {
        Ordering::Less => items[from..=to].rotate_left(1),
        Ordering::Greater => items[to..=from].rotate_right(1),
        Ordering::Equal => {}
    }
}

/// Pure form of [`relocate`]: returns the reordered sequence
pub fn relocated<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    relocate(&mut out, from, to);
    out
}

/// An item that belongs to exactly one container at a time
pub trait Contained {
    type Container: PartialEq + Clone;

    fn container(&self) -> &Self::Container;

    fn set_container(&mut self, container: Self::Container);
}

/// Where an item moving from `from` onto the item at `over` lands.
///
/// Within a container the item takes `over`'s index. When it enters a new
/// container it lands immediately before `over`, so moving forward stops one
/// short of `over`'s index.
pub fn landing_index(from: usize, over: usize, crossing: bool) -> usize {
    if crossing && from < over {
        over - 1
    } else {
        over
    }
}

/// Move the item at `from` onto the item at `over`, adopting its container.
///
/// Returns the index the item ends up at.
///
/// # Panics
///
/// Panics when either index is out of bounds.
pub fn relocate_across<T: Contained>(items: &mut [T], from: usize, over: usize) -> usize {
    let len = items.len();
    assert!(
        from < len && over < len,
        "relocate_across out of bounds: from {from}, over {over}, len {len}"
    );

    let target = items[over].container().clone();
    let crossing = *items[from].container() != target;
    if crossing {
        items[from].set_container(target);
    }

    let to = landing_index(from, over, crossing);
    relocate(items, from, to);
    to
}
