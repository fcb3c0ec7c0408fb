//! AVL machinery: height bookkeeping, rotations, and the value-returning
//! recursive insert/remove.
//!
//! Every structural helper returns the possibly-new root of the subtree it
//! touched; the caller must relink it, since rebalancing can change which
//! node is the local root.

use crate::error::InvariantError;
use crate::types::AvlNode;
use crate::util::{first, for_each};

/// Cached height of a subtree, 0 for an absent child.
#[inline]
pub fn height<T>(arena: &[AvlNode<T>], node: Option<u32>) -> i32 {
    node.map_or(0, |i| arena[i as usize].height)
}

#[inline]
fn update_height<T>(arena: &mut [AvlNode<T>], i: u32) {
    let h = 1 + height(arena, arena[i as usize].l).max(height(arena, arena[i as usize].r));
    arena[i as usize].height = h;
}

/// `height(left) - height(right)`, 0 for an absent node.
#[inline]
pub fn balance_factor<T>(arena: &[AvlNode<T>], node: Option<u32>) -> i32 {
    node.map_or(0, |i| {
        height(arena, arena[i as usize].l) - height(arena, arena[i as usize].r)
    })
}

/// Promotes `y`'s left child into `y`'s slot; `y` becomes its right child.
///
/// Heights are recomputed child-before-new-parent: `y` first, then `x`.
fn rotate_right<T>(arena: &mut [AvlNode<T>], y: u32) -> u32 {
    let x = arena[y as usize].l.expect("left child exists");
    let t2 = arena[x as usize].r;
    arena[x as usize].r = Some(y);
    arena[y as usize].l = t2;
    update_height(arena, y);
    update_height(arena, x);
    x
}

/// Mirror image of [`rotate_right`].
fn rotate_left<T>(arena: &mut [AvlNode<T>], x: u32) -> u32 {
    let y = arena[x as usize].r.expect("right child exists");
    let t2 = arena[y as usize].l;
    arena[y as usize].l = Some(x);
    arena[x as usize].r = t2;
    update_height(arena, x);
    update_height(arena, y);
    y
}

/// Restores the balance invariant at `i` after an edit below it.
///
/// The four cases: left-left, left-right, right-right, right-left. At most
/// one rotation pair is applied.
fn rebalance<T>(arena: &mut [AvlNode<T>], i: u32) -> u32 {
    let bf = balance_factor(arena, Some(i));
    if bf > 1 {
        let l = arena[i as usize].l;
        if balance_factor(arena, l) < 0 {
            let rotated = rotate_left(arena, l.expect("left child exists"));
            arena[i as usize].l = Some(rotated);
        }
        return rotate_right(arena, i);
    }
    if bf < -1 {
        let r = arena[i as usize].r;
        if balance_factor(arena, r) > 0 {
            let rotated = rotate_right(arena, r.expect("right child exists"));
            arena[i as usize].r = Some(rotated);
        }
        return rotate_left(arena, i);
    }
    i
}

/// Links the pre-allocated `node` into the subtree at `root`.
///
/// Returns the new subtree root and whether the node was linked; an equal
/// element already present leaves the subtree untouched and reports `false`.
/// On the way back up every ancestor's height is recomputed and the ancestor
/// rebalanced.
pub fn insert<T, C>(
    arena: &mut [AvlNode<T>],
    root: Option<u32>,
    node: u32,
    comparator: &C,
) -> (u32, bool)
where
    C: Fn(&T, &T) -> i32,
{
    let Some(curr) = root else {
        return (node, true);
    };

    let cmp = comparator(&arena[node as usize].data, &arena[curr as usize].data);
    if cmp == 0 {
        return (curr, false);
    }

    let inserted = if cmp < 0 {
        let child = arena[curr as usize].l;
        let (l, inserted) = insert(arena, child, node, comparator);
        arena[curr as usize].l = Some(l);
        inserted
    } else {
        let child = arena[curr as usize].r;
        let (r, inserted) = insert(arena, child, node, comparator);
        arena[curr as usize].r = Some(r);
        inserted
    };
    if !inserted {
        return (curr, false);
    }

    update_height(arena, curr);
    (rebalance(arena, curr), true)
}

fn swap_data<T>(arena: &mut [AvlNode<T>], a: u32, b: u32) {
    let (a, b) = (a as usize, b as usize);
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi);
    std::mem::swap(&mut head[lo].data, &mut tail[0].data);
}

/// Removes the node equal to `data` from the subtree at `root`.
///
/// Returns the new subtree root and the index of the physically unlinked
/// slot (`None` when the value is absent; the subtree is then unchanged).
/// The caller owns the freed slot.
///
/// A node with two children exchanges elements with its in-order successor
/// (leftmost of the right subtree) and the removal recurses into the right
/// subtree, where the target element now occupies the leftmost slot; the
/// slot physically unlinked is always one with at most one child. Heights
/// are recomputed and every ancestor rebalanced on the return path.
pub fn remove<T, C>(
    arena: &mut [AvlNode<T>],
    root: Option<u32>,
    data: &T,
    comparator: &C,
) -> (Option<u32>, Option<u32>)
where
    C: Fn(&T, &T) -> i32,
{
    let Some(curr) = root else {
        return (None, None);
    };

    let cmp = comparator(data, &arena[curr as usize].data);
    let freed = if cmp < 0 {
        let child = arena[curr as usize].l;
        let (l, freed) = remove(arena, child, data, comparator);
        arena[curr as usize].l = l;
        freed
    } else if cmp > 0 {
        let child = arena[curr as usize].r;
        let (r, freed) = remove(arena, child, data, comparator);
        arena[curr as usize].r = r;
        freed
    } else {
        let l = arena[curr as usize].l;
        let r = arena[curr as usize].r;
        if let (Some(_), Some(r)) = (l, r) {
            let succ = first(arena, Some(r)).expect("right subtree is non-empty");
            swap_data(arena, curr, succ);
            let (nr, freed) = remove(arena, Some(r), data, comparator);
            arena[curr as usize].r = nr;
            freed
        } else {
            // Zero or one child: the single child (or nothing) takes this
            // node's slot in the parent; the child subtree is already a
            // consistent AVL tree, so no recomputation is needed here.
            let child = l.or(r);
            arena[curr as usize].l = None;
            arena[curr as usize].r = None;
            return (child, Some(curr));
        }
    };
    if freed.is_none() {
        return (Some(curr), None);
    }

    update_height(arena, curr);
    (Some(rebalance(arena, curr)), freed)
}

fn check_subtree<T>(arena: &[AvlNode<T>], i: u32) -> Result<i32, InvariantError> {
    let n = &arena[i as usize];
    let lh = match n.l {
        Some(l) => check_subtree(arena, l)?,
        None => 0,
    };
    let rh = match n.r {
        Some(r) => check_subtree(arena, r)?,
        None => 0,
    };
    let expected = 1 + lh.max(rh);
    if n.height != expected {
        return Err(InvariantError::HeightMismatch {
            expected,
            actual: n.height,
        });
    }
    let bf = lh - rh;
    if !(-1..=1).contains(&bf) {
        return Err(InvariantError::Unbalanced { balance_factor: bf });
    }
    Ok(expected)
}

/// Validation oracle for tests and debugging.
///
/// Verifies cached heights against recomputed subtree heights, the balance
/// invariant at every node, and strict ascending in-order sequence.
pub fn assert_avl_tree<T, C>(
    arena: &[AvlNode<T>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    check_subtree(arena, root)?;

    let mut prev: Option<&T> = None;
    let mut order = Ok(());
    for_each(arena, Some(root), &mut |data| {
        if let Some(prev) = prev {
            if order.is_ok() && comparator(prev, data) >= 0 {
                order = Err(InvariantError::OrderViolation);
            }
        }
        prev = Some(data);
    });
    order
}

// ── Tests ─────────────────────────────────────────────────────────────────
