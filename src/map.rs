//! An ordered map implemented with an AVL tree.

use std::cmp::{self, Ordering};
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use compare::{natural, Compare, Natural};

use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};

mod cursor;
mod iter;

pub use cursor::{Cursor, Direction};
pub use iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

/// An ordered map implemented with an AVL tree.
///
/// Keys are ordered by the comparator `C`, which defaults to the natural
/// order of `K`. Inserting an existing key leaves the stored value alone.
///
/// A map holds at most `u32::MAX` elements; [`try_insert`](Self::try_insert)
/// reports [`Error::CapacityExceeded`] beyond that, while `insert` panics.
///
/// ```
/// use avl_map::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(0, "zero");
/// map.insert(1, "one");
/// map.insert(2, "two");
/// assert_eq!(map.get(&1), Some(&"one"));
/// map.remove(&1);
/// assert!(map.get(&1).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V, C = Natural<K>> {
    // Keys and links. Values live in `values` under the same handle.
    nodes: Arena<Node<K>>,
    values: Arena<V>,
    root: Link,
    num_nodes: usize,
    cmp: C,
}

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link,
    right: Link,
    parent: Link,
    height: usize,
}

type Link = Option<Handle>;

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

enum Search {
    Found(Handle),
    Vacant(Link, Side),
}

#[allow(clippy::enum_variant_names)]
enum Visit {
    FromParent,
    FromLeft,
    FromRight,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map ordered by the natural order of its keys.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Creates an empty map ordered by the given comparator.
    ///
    /// ```
    /// use avl_map::AvlTreeMap;
    /// let mut map = AvlTreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.insert(1, ());
    /// map.insert(2, ());
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            num_nodes: 0,
            cmp,
        }
    }

    /// Returns the comparator ordering the keys.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree.
    /// An empty map has height 0, a single element has height 1.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.values.clear();
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns the first key-value pair in the map.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.key_value(self.leftmost(root)))
    }

    /// Returns the last key-value pair in the map.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.key_value(self.rightmost(root)))
    }

    /// Removes and returns the first element in the map.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.leftmost(self.root?);
        Some(self.remove_node(first))
    }

    /// Removes and returns the last element in the map.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.rightmost(self.root?);
        Some(self.remove_node(last))
    }

    /// Visits all elements in pre-order: node, left subtree, right subtree.
    pub fn traverse_preorder<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.traverse(
            |node| f(&self.nodes[node].key, &self.values[node]),
            |_| {},
            |_| {},
        );
    }

    /// Visits all elements in order of their keys.
    pub fn traverse_inorder<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.traverse(
            |_| {},
            |node| f(&self.nodes[node].key, &self.values[node]),
            |_| {},
        );
    }

    /// Visits all elements in post-order: left subtree, right subtree, node.
    pub fn traverse_postorder<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.traverse(
            |_| {},
            |_| {},
            |node| f(&self.nodes[node].key, &self.values[node]),
        );
    }

    /// Visits all elements level by level, starting at the root.
    pub fn traverse_level_order<F: FnMut(&K, &V)>(&self, mut f: F) {
        let mut queue: VecDeque<Handle> = self.root.into_iter().collect();
        while let Some(handle) = queue.pop_front() {
            let node = &self.nodes[handle];
            f(&node.key, &self.values[handle]);
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }

    fn key_value(&self, node: Handle) -> (&K, &V) {
        (&self.nodes[node].key, &self.values[node])
    }

    fn leftmost(&self, node: Handle) -> Handle {
        leftmost(&self.nodes, node)
    }

    fn rightmost(&self, node: Handle) -> Handle {
        rightmost(&self.nodes, node)
    }

    fn successor(&self, node: Handle) -> Link {
        successor(&self.nodes, node)
    }

    fn predecessor(&self, node: Handle) -> Link {
        predecessor(&self.nodes, node)
    }

    /// Both arenas see the same sequence of allocations and frees,
    /// so they hand out the same handle.
    fn attach(&mut self, parent: Link, side: Side, key: K, value: V) -> Handle {
        let node = self.nodes.alloc(Node::new(parent, key));
        let slot = self.values.alloc(value);
        debug_assert_eq!(node, slot);
        match parent {
            None => self.root = Some(node),
            Some(parent) => *self.nodes[parent].child_mut(side) = Some(node),
        }
        self.num_nodes += 1;
        node
    }

    /// Unlinks `node` from the tree, frees it and returns its payload.
    ///
    /// A node with two children keeps its slot: it receives the payload of its
    /// in-order successor, and the successor's slot is unlinked instead.
    fn remove_node(&mut self, node: Handle) -> (K, V) {
        match (self.nodes[node].left, self.nodes[node].right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let parent = self.unlink(successor);
                self.rebalance(parent);
                let (mut key, value) = self.take_node(successor);
                mem::swap(&mut self.nodes[node].key, &mut key);
                let value = mem::replace(&mut self.values[node], value);
                (key, value)
            }
            _ => {
                let parent = self.unlink(node);
                self.rebalance(parent);
                self.take_node(node)
            }
        }
    }

    /// Replaces `node`, which has at most one child, by that child.
    /// Heights are left untouched. Returns the former parent of `node`.
    fn unlink(&mut self, node: Handle) -> Link {
        let (left, right, parent) = {
            let node = &self.nodes[node];
            (node.left, node.right, node.parent)
        };
        debug_assert!(left.is_none() || right.is_none());
        let child = left.or(right);
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        self.replace_child(parent, node, child);
        parent
    }

    /// Frees an unlinked node and returns its payload.
    fn take_node(&mut self, node: Handle) -> (K, V) {
        debug_assert!(self.num_nodes >= 1);
        self.num_nodes -= 1;
        (self.nodes.take(node).key, self.values.take(node))
    }

    /// Points the link of `parent` that referenced `old` to `new`.
    /// A missing parent stands for the root link.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert!(parent.right == Some(old));
                    parent.right = new;
                }
            }
        }
    }

    fn height_of(&self, link: Link) -> usize {
        link.map_or(0, |node| self.nodes[node].height)
    }

    fn left_height(&self, node: Handle) -> usize {
        self.height_of(self.nodes[node].left)
    }

    fn right_height(&self, node: Handle) -> usize {
        self.height_of(self.nodes[node].right)
    }

    fn adjust_height(&mut self, node: Handle) {
        let height = 1 + cmp::max(self.left_height(node), self.right_height(node));
        self.nodes[node].height = height;
    }

    fn rotate_left(&mut self, node: Handle) -> Handle {
        let right = self.nodes[node]
            .right
            .expect("left rotation without right child");

        let right_left = self.nodes[right].left;
        self.nodes[node].right = right_left;
        if let Some(right_left) = right_left {
            self.nodes[right_left].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        self.nodes[right].parent = parent;
        self.replace_child(parent, node, Some(right));

        self.nodes[right].left = Some(node);
        self.nodes[node].parent = Some(right);

        self.adjust_height(node);
        self.adjust_height(right);
        right
    }

    fn rotate_right(&mut self, node: Handle) -> Handle {
        let left = self.nodes[node]
            .left
            .expect("right rotation without left child");

        let left_right = self.nodes[left].right;
        self.nodes[node].left = left_right;
        if let Some(left_right) = left_right {
            self.nodes[left_right].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        self.nodes[left].parent = parent;
        self.replace_child(parent, node, Some(left));

        self.nodes[left].right = Some(node);
        self.nodes[node].parent = Some(left);

        self.adjust_height(node);
        self.adjust_height(left);
        left
    }

    /// Rebalances nodes starting from given position up to the root node.
    fn rebalance(&mut self, start_from: Link) {
        let mut current = start_from;
        while let Some(node) = current {
            let subtree_root = self.rebalance_node(node);
            current = self.nodes[subtree_root].parent;
        }
    }

    /// Restores AVL condition at given node after a removal below it and adjusts height.
    /// The heavier grandchild decides between a single and a double rotation,
    /// a tie resolving to the single rotation.
    /// Returns the root of the rebalanced subtree.
    fn rebalance_node(&mut self, node: Handle) -> Handle {
        let left_height = self.left_height(node);
        let right_height = self.right_height(node);
        debug_assert!(left_height <= right_height + 2);
        debug_assert!(right_height <= left_height + 2);
        if left_height > right_height + 1 {
            if let Some(left) = self.nodes[node].left {
                if self.right_height(left) > self.left_height(left) {
                    self.rotate_left(left);
                }
            }
            self.rotate_right(node)
        } else if right_height > left_height + 1 {
            if let Some(right) = self.nodes[node].right {
                if self.left_height(right) > self.right_height(right) {
                    self.rotate_right(right);
                }
            }
            self.rotate_left(node)
        } else {
            self.adjust_height(node);
            node
        }
    }

    fn traverse<Pre, In, Post>(&self, mut preorder: Pre, mut inorder: In, mut postorder: Post)
    where
        Pre: FnMut(Handle),
        In: FnMut(Handle),
        Post: FnMut(Handle),
    {
        if let Some(mut node) = self.root {
            let mut visit = Visit::FromParent;
            loop {
                match visit {
                    Visit::FromParent => {
                        preorder(node);
                        if let Some(left) = self.nodes[node].left {
                            node = left;
                        } else {
                            visit = Visit::FromLeft;
                        }
                    }
                    Visit::FromLeft => {
                        inorder(node);
                        if let Some(right) = self.nodes[node].right {
                            node = right;
                            visit = Visit::FromParent;
                        } else {
                            visit = Visit::FromRight;
                        }
                    }
                    Visit::FromRight => {
                        postorder(node);
                        match self.nodes[node].parent {
                            Some(parent) => {
                                if self.nodes[parent].left == Some(node) {
                                    visit = Visit::FromLeft;
                                } else {
                                    visit = Visit::FromRight;
                                }
                                node = parent;
                            }
                            None => break,
                        }
                    }
                }
            }
        }
    }
}

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be of any type the comparator can order against `K`:
    ///
    /// ```
    /// use avl_map::AvlTreeMap;
    /// use compare::{natural, Compare};
    ///
    /// let mut map = AvlTreeMap::with_comparator(natural::<str>().borrowing());
    /// map.insert(String::from("a"), 1);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get(&String::from("a")), Some(&1));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        C: Compare<Q, K>,
    {
        self.find_node(key).map(|node| &self.values[node])
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        C: Compare<Q, K>,
    {
        let node = self.find_node(key)?;
        Some(&mut self.values[node])
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
    where
        C: Compare<Q, K>,
    {
        self.find_node(key).map(|node| self.key_value(node))
    }

    /// Returns true if the map contains a value for the key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.find_node(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key,
    /// or [`Error::KeyNotFound`] if the key is absent.
    ///
    /// ```
    /// use avl_map::{AvlTreeMap, Error};
    /// let mut map = AvlTreeMap::new();
    /// map.insert("a", 1);
    /// assert_eq!(map.at(&"a"), Ok(&1));
    /// assert_eq!(map.at(&"b"), Err(Error::KeyNotFound));
    /// ```
    pub fn at<Q: ?Sized>(&self, key: &Q) -> Result<&V>
    where
        C: Compare<Q, K>,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// or [`Error::KeyNotFound`] if the key is absent.
    pub fn at_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V>
    where
        C: Compare<Q, K>,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value for the key,
    /// inserting `V::default()` first if the key is absent.
    ///
    /// Unlike [`at`](Self::at) this grows the map on a miss.
    ///
    /// ```
    /// use avl_map::AvlTreeMap;
    /// let mut counts: AvlTreeMap<&str, u32> = AvlTreeMap::new();
    /// *counts.get_or_default("x") += 1;
    /// *counts.get_or_default("x") += 1;
    /// assert_eq!(counts.get(&"x"), Some(&2));
    /// ```
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns a mutable reference to the value for the key,
    /// inserting the result of `f` first if the key is absent.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, f: F) -> &mut V {
        let node = match self.search(&key) {
            Search::Found(node) => node,
            Search::Vacant(parent, side) => {
                let node = self.attach(parent, side, key, f());
                self.rebalance_after_insert(node);
                node
            }
        };
        &mut self.values[node]
    }

    /// Inserts a key-value pair into the map.
    /// Returns false and leaves the map untouched if the key was already present.
    ///
    /// # Panics
    ///
    /// Panics if the map already holds `u32::MAX` elements.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.search(&key) {
            Search::Found(_) => false,
            Search::Vacant(parent, side) => {
                let node = self.attach(parent, side, key, value);
                self.rebalance_after_insert(node);
                true
            }
        }
    }

    /// Inserts a key-value pair into the map, reporting allocation failure
    /// and a full map instead of aborting. The map is unchanged on error.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<bool> {
        match self.search(&key) {
            Search::Found(_) => Ok(false),
            Search::Vacant(parent, side) => {
                self.nodes.try_reserve()?;
                self.values.try_reserve()?;
                let node = self.attach(parent, side, key, value);
                self.rebalance_after_insert(node);
                Ok(true)
            }
        }
    }

    /// Removes a key from the map.
    /// Returns whether the key was previously in the map.
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes a key from the map.
    /// Returns the value at the key if the key was previously in the map.
    pub fn take<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        C: Compare<Q, K>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map.
    /// Returns the stored key and value if the key was previously in the map.
    pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
    {
        let node = self.find_node(key)?;
        let entry = self.remove_node(node);
        debug_assert!(self.find_node(key).is_none());
        Some(entry)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check root link
        if let Some(root) = self.root {
            assert!(self.nodes[root].parent.is_none());
        }

        // Check tree nodes
        let mut num_nodes = 0;
        self.traverse(
            |node| {
                let mut left_height = 0;
                let mut right_height = 0;

                // Check link for left child node
                if let Some(left) = self.nodes[node].left {
                    assert!(self.nodes[left].parent == Some(node));
                    assert_eq!(
                        self.cmp.compare(&self.nodes[left].key, &self.nodes[node].key),
                        Ordering::Less
                    );
                    left_height = self.nodes[left].height;
                }

                // Check link for right child node
                if let Some(right) = self.nodes[node].right {
                    assert!(self.nodes[right].parent == Some(node));
                    assert_eq!(
                        self.cmp.compare(&self.nodes[right].key, &self.nodes[node].key),
                        Ordering::Greater
                    );
                    right_height = self.nodes[right].height;
                }

                // Check height
                assert_eq!(
                    self.nodes[node].height,
                    1 + cmp::max(left_height, right_height)
                );

                // Check AVL condition (nearly balance)
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);

                num_nodes += 1;
            },
            |_| {},
            |_| {},
        );

        // Check in-order key sequence
        let mut prev: Option<&K> = None;
        self.traverse(
            |_| {},
            |node| {
                let key = &self.nodes[node].key;
                if let Some(prev) = prev {
                    assert_eq!(self.cmp.compare(prev, key), Ordering::Less);
                }
                prev = Some(key);
            },
            |_| {},
        );

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.nodes.len(), self.num_nodes);
        assert_eq!(self.values.len(), self.num_nodes);
        assert_eq!(self.root.is_none(), self.nodes.is_empty());
    }

    fn find_node<Q: ?Sized>(&self, key: &Q) -> Link
    where
        C: Compare<Q, K>,
    {
        let mut current = self.root;
        while let Some(node) = current {
            current = match <C as Compare<Q, K>>::compare(&self.cmp, key, &self.nodes[node].key) {
                Ordering::Equal => break,
                Ordering::Less => self.nodes[node].left,
                Ordering::Greater => self.nodes[node].right,
            };
        }
        current
    }

    fn search(&self, key: &K) -> Search {
        let mut parent: Link = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(node) = current {
            parent = current;
            current = match self.cmp.compare(key, &self.nodes[node].key) {
                Ordering::Equal => return Search::Found(node),
                Ordering::Less => {
                    side = Side::Left;
                    self.nodes[node].left
                }
                Ordering::Greater => {
                    side = Side::Right;
                    self.nodes[node].right
                }
            };
        }
        Search::Vacant(parent, side)
    }

    /// Rebalances the ancestors of a freshly inserted node.
    /// Stops after the first rotation, which restores the height the subtree
    /// had before the insertion.
    ///
    /// The inserted key compared against the heavy child's key decides between
    /// a single and a double rotation.
    fn rebalance_after_insert(&mut self, inserted: Handle) {
        let mut current = self.nodes[inserted].parent;
        while let Some(node) = current {
            self.adjust_height(node);
            let left_height = self.left_height(node);
            let right_height = self.right_height(node);
            if left_height > right_height + 1 {
                if let Some(left) = self.nodes[node].left {
                    if self.compare_nodes(inserted, left) == Ordering::Greater {
                        self.rotate_left(left);
                    }
                }
                self.rotate_right(node);
                break;
            } else if right_height > left_height + 1 {
                if let Some(right) = self.nodes[node].right {
                    if self.compare_nodes(inserted, right) == Ordering::Less {
                        self.rotate_right(right);
                    }
                }
                self.rotate_left(node);
                break;
            }
            current = self.nodes[node].parent;
        }
    }

    fn compare_nodes(&self, a: Handle, b: Handle) -> Ordering {
        self.cmp.compare(&self.nodes[a].key, &self.nodes[b].key)
    }
}

fn leftmost<K>(nodes: &Arena<Node<K>>, mut node: Handle) -> Handle {
    while let Some(left) = nodes[node].left {
        node = left;
    }
    node
}

fn rightmost<K>(nodes: &Arena<Node<K>>, mut node: Handle) -> Handle {
    while let Some(right) = nodes[node].right {
        node = right;
    }
    node
}

/// Returns the in-order successor of `node`, or `None` past the last node.
fn successor<K>(nodes: &Arena<Node<K>>, node: Handle) -> Link {
    if let Some(right) = nodes[node].right {
        return Some(leftmost(nodes, right));
    }
    let mut current = node;
    let mut parent = nodes[node].parent;
    while let Some(parent_node) = parent {
        if nodes[parent_node].left == Some(current) {
            break;
        }
        current = parent_node;
        parent = nodes[parent_node].parent;
    }
    parent
}

/// Returns the in-order predecessor of `node`, or `None` before the first node.
fn predecessor<K>(nodes: &Arena<Node<K>>, node: Handle) -> Link {
    if let Some(left) = nodes[node].left {
        return Some(rightmost(nodes, left));
    }
    let mut current = node;
    let mut parent = nodes[node].parent;
    while let Some(parent_node) = parent {
        if nodes[parent_node].right == Some(current) {
            break;
        }
        current = parent_node;
        parent = nodes[parent_node].parent;
    }
    parent
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlTreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for AvlTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for AvlTreeMap<K, V, C> {}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for AvlTreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K> Node<K> {
    fn new(parent: Link, key: K) -> Self {
        Self {
            key,
            parent,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
