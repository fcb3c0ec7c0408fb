//! The AVL tree family: owning structure plus the structural machinery.

pub mod tree;
pub mod util;

pub use tree::{AvlTree, SearchResult};
pub use util::{assert_avl_tree, balance_factor, height, insert, remove};
