use thiserror::Error;

/// Invariant violations reported by tree validation.
///
/// Produced only by [`crate::avl::assert_avl_tree`] and
/// [`crate::AvlTree::assert_valid`]; the operational API (insert, remove,
/// search, traversal) has no error path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("height cache mismatch: expected {expected}, got {actual}")]
    HeightMismatch { expected: i32, actual: i32 },

    #[error("balance factor {balance_factor} out of range")]
    Unbalanced { balance_factor: i32 },

    #[error("node order violated")]
    OrderViolation,

    #[error("arena accounting mismatch: {reachable} reachable, {free} free, {slots} slots")]
    ArenaAccounting {
        reachable: usize,
        free: usize,
        slots: usize,
    },
}
