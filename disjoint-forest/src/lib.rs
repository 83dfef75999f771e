//! Disjoint-set (union-find) forest over arbitrary hashable elements.
//!
//! Groups are merged by rank and lookups compress paths, so any sequence of
//! `m` operations on `n` elements costs `O(m · α(n))` amortized.
//!
//! ```
//! use disjoint_forest::DisjointSets;
//!
//! let mut sets: DisjointSets<i32> = DisjointSets::new();
//! sets.register([1, 2, 3, 4]);
//! sets.union(1, 2);
//! sets.union(3, 4);
//! assert_eq!(sets.count(), 2);
//!
//! sets.union(2, 3);
//! assert!(sets.connected(&1, &4));
//! assert_eq!(sets.count(), 1);
//! ```
//!
//! Looking up an element that was never registered is not an error:
//! [`DisjointSets::find`] returns `None` and [`DisjointSets::connected`]
//! returns `false`, even when both sides are the same unregistered value.

mod dump;
mod forest;

pub use forest::DisjointSets;
