//! Arena-backed self-balancing AVL tree.
//!
//! An in-memory ordered-set primitive over any element type with a total
//! order: ordered insertion, deletion, exact search with a height-and-parent
//! report, and full in-order traversal. Elements are unique; duplicate
//! inserts and absent-value removals are silent no-ops, never errors.
//!
//! Instead of raw pointers, all links are `Option<u32>` indices into a
//! tree-owned `Vec<AvlNode<T>>` arena. Slots freed by removal are recycled
//! through an explicit free list. Nodes carry no parent link; the parent of
//! a node is recovered by a top-down comparator-driven scan.
//!
//! Ordering comes from a `Fn(&T, &T) -> i32` comparator, by default derived
//! from `PartialOrd` (equality is "neither less nor greater").
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`AvlNode`] arena node, [`Comparator`] alias |
//! | [`util`] | order-neutral walks: `first`, `last`, `size`, `find`, `find_parent`, `for_each`, `print` |
//! | [`avl`] | [`AvlTree`] and the rotation/insert/remove machinery |
//! | [`error`] | [`InvariantError`] for the validation oracle |

pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use avl::{AvlTree, SearchResult};
pub use error::InvariantError;
pub use types::{AvlNode, Comparator};
