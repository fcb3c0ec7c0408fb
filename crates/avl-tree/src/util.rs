//! Order-neutral walks over the node arena.
//!
//! These helpers read tree shape only; none of them recomputes heights or
//! rebalances. The AVL-specific machinery lives in [`crate::avl::util`].

use std::fmt::Debug;

use crate::types::AvlNode;

/// Leftmost node in the subtree, i.e. the minimum element.
pub fn first<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        match arena[i as usize].l {
            Some(l) => curr = Some(l),
            None => return Some(i),
        }
    }
    curr
}

/// Rightmost node in the subtree, i.e. the maximum element.
pub fn last<T>(arena: &[AvlNode<T>], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        match arena[i as usize].r {
            Some(r) => curr = Some(r),
            None => return Some(i),
        }
    }
    curr
}

fn size_inner<T>(arena: &[AvlNode<T>], root: u32) -> usize {
    1 + arena[root as usize].l.map_or(0, |l| size_inner(arena, l))
        + arena[root as usize].r.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<T>(arena: &[AvlNode<T>], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Finds a node by element value.
///
/// Descends by comparison only; equality is "neither less nor greater". A
/// probe greater than every element walks just the rightmost spine.
pub fn find<T, C>(arena: &[AvlNode<T>], root: Option<u32>, data: &T, comparator: &C) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let i = root?;
    let cmp = comparator(data, &arena[i as usize].data);
    if cmp == 0 {
        Some(i)
    } else if cmp < 0 {
        find(arena, arena[i as usize].l, data, comparator)
    } else {
        find(arena, arena[i as usize].r, data, comparator)
    }
}

/// Finds the parent of `child` by a top-down scan from `root`.
///
/// Stops at the first node either of whose child links equals `child`.
/// Returns `None` if `child` is the root or not reachable.
pub fn find_parent<T, C>(
    arena: &[AvlNode<T>],
    root: Option<u32>,
    child: u32,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let i = root?;
    let n = &arena[i as usize];
    if n.l == Some(child) || n.r == Some(child) {
        return Some(i);
    }
    let cmp = comparator(&arena[child as usize].data, &n.data);
    if cmp < 0 {
        find_parent(arena, n.l, child, comparator)
    } else {
        find_parent(arena, n.r, child, comparator)
    }
}

/// In-order walk (left, self, right), ascending, each element exactly once.
pub fn for_each<'a, T, F>(arena: &'a [AvlNode<T>], root: Option<u32>, f: &mut F)
where
    F: FnMut(&'a T),
{
    let Some(i) = root else {
        return;
    };
    for_each(arena, arena[i as usize].l, f);
    f(&arena[i as usize].data);
    for_each(arena, arena[i as usize].r, f);
}

/// Debug printer for subtrees.
pub fn print<T: Debug>(arena: &[AvlNode<T>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height, n.data
            )
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::util::insert;

    fn cmp(a: &i32, b: &i32) -> i32 {
        if a == b {
            0
        } else if a < b {
            -1
        } else {
            1
        }
    }

    fn build(values: &[i32]) -> (Vec<AvlNode<i32>>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &v in values {
            arena.push(AvlNode::new(v));
            let idx = (arena.len() - 1) as u32;
            let (r, inserted) = insert(&mut arena, root, idx, &cmp);
            assert!(inserted);
            root = Some(r);
        }
        (arena, root)
    }

    fn collect(arena: &[AvlNode<i32>], root: Option<u32>) -> Vec<i32> {
        let mut out = Vec::new();
        for_each(arena, root, &mut |v| out.push(*v));
        out
    }

    #[test]
    fn first_and_last_find_extremes() {
        let (arena, root) = build(&[5, 2, 8, 1, 4]);
        assert_eq!(first(&arena, root).map(|i| arena[i as usize].data), Some(1));
        assert_eq!(last(&arena, root).map(|i| arena[i as usize].data), Some(8));
        assert_eq!(first(&arena, None), None);
        assert_eq!(last(&arena, None), None);
    }

    #[test]
    fn size_counts_reachable_nodes() {
        let (arena, root) = build(&[5, 2, 8, 1, 4]);
        assert_eq!(size(&arena, root), 5);
        assert_eq!(size(&arena, None), 0);
    }

    #[test]
    fn find_hits_members_and_misses_others() {
        let (arena, root) = build(&[5, 2, 8, 1, 4]);
        for v in [1, 2, 4, 5, 8] {
            let idx = find(&arena, root, &v, &cmp).expect("member must be found");
            assert_eq!(arena[idx as usize].data, v);
        }
        assert_eq!(find(&arena, root, &3, &cmp), None);
        assert_eq!(find(&arena, root, &100, &cmp), None);
        assert_eq!(find(&arena, None, &1, &cmp), None);
    }

    #[test]
    fn find_parent_matches_child_links() {
        let (arena, root) = build(&[5, 2, 8, 1, 4]);
        let root_idx = root.unwrap();
        assert_eq!(find_parent(&arena, root, root_idx, &cmp), None);
        for v in [1, 2, 4, 5, 8] {
            let idx = find(&arena, root, &v, &cmp).unwrap();
            if idx == root_idx {
                continue;
            }
            let p = find_parent(&arena, root, idx, &cmp).expect("non-root has parent");
            let pn = &arena[p as usize];
            assert!(pn.l == Some(idx) || pn.r == Some(idx));
        }
    }

    #[test]
    fn for_each_yields_ascending_order() {
        let (arena, root) = build(&[5, 2, 8, 1, 4]);
        assert_eq!(collect(&arena, root), vec![1, 2, 4, 5, 8]);
        assert_eq!(collect(&arena, None), Vec::<i32>::new());
    }
}
