use std::fmt::Debug;

use super::util::{assert_avl_tree, height, insert, remove};
use crate::error::InvariantError;
use crate::types::AvlNode;
use crate::util::{find, find_parent, first, for_each, last, print, size};

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Report produced by a successful [`AvlTree::search`].
#[derive(Debug)]
pub struct SearchResult<'a, T> {
    /// The element equal to the probe.
    pub data: &'a T,
    /// Cached height of the node holding it.
    pub height: i32,
    /// Element of the node's parent; `None` when the node is the root.
    pub parent: Option<&'a T>,
}

/// Self-balancing AVL tree over comparator-ordered unique elements.
///
/// Nodes live in a tree-owned `Vec` arena; links are `Option<u32>` indices
/// and slots freed by removal are recycled through an explicit free list, so
/// no node is ever reachable from two places. Single-owner, single-thread
/// usage; no internal synchronization.
pub struct AvlTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Option<u32>,
    arena: Vec<AvlNode<T>>,
    free: Vec<u32>,
    comparator: C,
    length: usize,
}

impl<T> AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            free: Vec::new(),
            comparator,
            length: 0,
        }
    }

    fn alloc(&mut self, data: T) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = AvlNode::new(data);
                i
            }
            None => {
                self.arena.push(AvlNode::new(data));
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, i: u32) {
        if i as usize + 1 == self.arena.len() {
            self.arena.pop();
        } else {
            self.free.push(i);
        }
    }

    /// Inserts `data`, keeping the tree balanced.
    ///
    /// Returns `false` when an equal element is already present; the tree is
    /// then unchanged and the element is dropped. May change which node is
    /// root.
    pub fn insert(&mut self, data: T) -> bool {
        let node = self.alloc(data);
        let (new_root, inserted) = insert(&mut self.arena, self.root, node, &self.comparator);
        if inserted {
            self.root = Some(new_root);
            self.length += 1;
        } else {
            self.release(node);
        }
        inserted
    }

    /// Removes the element equal to `data`, keeping the tree balanced.
    ///
    /// Returns `false` when no such element exists; the tree is then
    /// unchanged.
    pub fn remove(&mut self, data: &T) -> bool {
        let (new_root, freed) = remove(&mut self.arena, self.root, data, &self.comparator);
        self.root = new_root;
        match freed {
            Some(i) => {
                self.release(i);
                self.length -= 1;
                true
            }
            None => false,
        }
    }

    /// Looks up `data` and reports the found element, its cached height,
    /// and its parent's element (absent for the root).
    pub fn search(&self, data: &T) -> Option<SearchResult<'_, T>> {
        let node = find(&self.arena, self.root, data, &self.comparator)?;
        let parent = if self.root == Some(node) {
            None
        } else {
            find_parent(&self.arena, self.root, node, &self.comparator)
        };
        let n = &self.arena[node as usize];
        Some(SearchResult {
            data: &n.data,
            height: n.height,
            parent: parent.map(|p| &self.arena[p as usize].data),
        })
    }

    pub fn has(&self, data: &T) -> bool {
        find(&self.arena, self.root, data, &self.comparator).is_some()
    }

    /// In-order traversal; visits every element once, in ascending order.
    pub fn for_each<F: FnMut(&T)>(&self, mut f: F) {
        for_each(&self.arena, self.root, &mut f);
    }

    /// Minimum element.
    pub fn first(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].data)
    }

    /// Maximum element.
    pub fn last(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].data)
    }

    pub fn size(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.length = 0;
    }

    /// Verifies the ordering, balance, height-cache, and arena-accounting
    /// invariants. Intended for tests and debugging.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = size(&self.arena, self.root);
        if reachable != self.length || reachable + self.free.len() != self.arena.len() {
            return Err(InvariantError::ArenaAccounting {
                reachable,
                free: self.free.len(),
                slots: self.arena.len(),
            });
        }
        Ok(())
    }
}

impl<T, C> AvlTree<T, C>
where
    T: Debug,
    C: Fn(&T, &T) -> i32,
{
    /// Debug rendering of the whole tree.
    pub fn print(&self) -> String {
        print(&self.arena, self.root, "")
    }
}
