//! Node representation for the arena-backed tree.
//!
//! All "pointers" are `Option<u32>` indices into a tree-owned
//! `Vec<AvlNode<T>>` arena. Nodes carry no parent link; the parent of a node
//! is recovered with a top-down scan ([`crate::util::find_parent`]).

/// Comparator used by tree structures.
///
/// Negative means `a < b`, zero means equal, positive means `a > b`.
pub type Comparator<T> = dyn Fn(&T, &T) -> i32;

/// Single tree node stored in a `Vec`-backed arena.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub data: T,
    /// Cached subtree height; a leaf has height 1, an absent child 0.
    pub height: i32,
}

impl<T> AvlNode<T> {
    pub fn new(data: T) -> Self {
        Self {
            l: None,
            r: None,
            data,
            height: 1,
        }
    }
}
