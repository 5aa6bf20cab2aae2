//! Query engine for the saved-candidate list.
//!
//! This crate provides:
//! - `SearchFilter` for case-insensitive free-text search
//! - `SortKey` and `locale_compare` for field ordering
//! - `SortState` for column-header toggling in a view
//! - `query`, the pure filter-then-sort entry point
//!
//! ## Example Usage
//! ```ignore
//! use query::{query, SortKey};
//!
//! let rows = query(&saved.candidates()?, "acme", Some(SortKey::FullName), true);
//! ```

pub mod filter;
pub mod sort;
pub mod state;

pub use filter::SearchFilter;
pub use sort::{FieldValue, SortKey, UnknownSortKey, locale_compare};
pub use state::SortState;

use model::Candidate;
use std::cmp::Ordering;

/// Filter and order `candidates`.
///
/// ## Algorithm
/// 1. Keep candidates matching `search_text` (all of them when it is empty)
/// 2. If `sort_key` is set, stable-sort by that field, reversing the
///    comparison when `ascending` is false
///
/// Pairs that compare `Equal` (including absent values) keep their input
/// order in both directions. Identical input always yields identical output.
pub fn query(
    candidates: &[Candidate],
    search_text: &str,
    sort_key: Option<SortKey>,
    ascending: bool,
) -> Vec<Candidate> {
    let mut rows = SearchFilter::new(search_text).apply(candidates.to_vec());

    if let Some(key) = sort_key {
        stable_insertion_sort(&mut rows, |a, b| {
            let ordering = key.compare(a, b);
            if ascending { ordering } else { ordering.reverse() }
        });
    }

    rows
}

/// Stable insertion sort that tolerates a non-transitive comparator.
///
/// Absent values compare `Equal` to everything, so the comparator is not a
/// total order and `slice::sort_by` may panic on it. Each element moves left
/// only past neighbours strictly greater than itself, which leaves every
/// adjacent pair in order and makes a second pass a no-op.
fn stable_insertion_sort<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
