use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{predecessor, successor, AvlTreeMap, Link, Node};
use crate::arena::{Arena, Handle};

/// An iterator over the entries of a map, sorted by key.
pub struct Iter<'a, K, V, C> {
    map: &'a AvlTreeMap<K, V, C>,
    front: Link,
    back: Link,
    remaining: usize,
}

/// An iterator over the keys of a map, sorted.
pub struct Keys<'a, K, V, C> {
    iter: Iter<'a, K, V, C>,
}

/// An iterator over the values of a map, sorted by key.
pub struct Values<'a, K, V, C> {
    iter: Iter<'a, K, V, C>,
}

/// A mutable iterator over the entries of a map, sorted by key.
pub struct IterMut<'a, K, V> {
    nodes: &'a Arena<Node<K>>,
    // Slot storage of the value arena, mutably borrowed for 'a.
    values: *mut Option<V>,
    front: Link,
    back: Link,
    remaining: usize,
    marker: PhantomData<&'a mut V>,
}

/// A mutable iterator over the values of a map, sorted by key.
pub struct ValuesMut<'a, K, V> {
    iter: IterMut<'a, K, V>,
}

/// An owning iterator over the entries of a map, sorted by key.
///
/// Elements are unlinked from the ends of the tree without rebalancing,
/// so draining the whole map takes linear time.
pub struct IntoIter<K, V, C> {
    map: AvlTreeMap<K, V, C>,
    front: Link,
    back: Link,
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Gets an iterator over the entries of the map, sorted by key.
    /// Use `rev()` to walk them from the largest key down.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            map: self,
            front: self.root.map(|root| self.leftmost(root)),
            back: self.root.map(|root| self.rightmost(root)),
            remaining: self.num_nodes,
        }
    }

    /// Gets an iterator over the entries of the map with mutable values, sorted by key.
    ///
    /// ```
    /// use avl_map::AvlTreeMap;
    /// let mut map: AvlTreeMap<_, _> = (1..=3).map(|k| (k, k)).collect();
    /// for (key, value) in map.iter_mut() {
    ///     *value += key * 10;
    /// }
    /// assert_eq!(map.get(&2), Some(&22));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let front = self.root.map(|root| self.leftmost(root));
        let back = self.root.map(|root| self.rightmost(root));
        IterMut {
            nodes: &self.nodes,
            values: self.values.as_mut_ptr(),
            front,
            back,
            remaining: self.num_nodes,
            marker: PhantomData,
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { iter: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { iter: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map, in order by key.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            iter: self.iter_mut(),
        }
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.front = self.map.successor(node);
        self.remaining -= 1;
        Some(self.map.key_value(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.back = self.map.predecessor(node);
        self.remaining -= 1;
        Some(self.map.key_value(node))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C> {}

impl<'a, K, V, C> FusedIterator for Iter<'a, K, V, C> {}

impl<'a, K, V, C> Clone for Iter<'a, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V, C> DoubleEndedIterator for Keys<'a, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(key, _)| key)
    }
}

impl<'a, K, V, C> ExactSizeIterator for Keys<'a, K, V, C> {}

impl<'a, K, V, C> FusedIterator for Keys<'a, K, V, C> {}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V, C> DoubleEndedIterator for Values<'a, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

impl<'a, K, V, C> ExactSizeIterator for Values<'a, K, V, C> {}

impl<'a, K, V, C> FusedIterator for Values<'a, K, V, C> {}

impl<'a, K, V> IterMut<'a, K, V> {
    fn entry(&mut self, node: Handle) -> (&'a K, &'a mut V) {
        let nodes = self.nodes;
        // SAFETY: `values` comes from the value arena of a map that stays
        // mutably borrowed for 'a, so the storage is neither moved nor resized.
        // Every handle in the tree indexes an occupied slot, and the walk yields
        // each handle at most once, so the returned references are disjoint.
        let slot = unsafe { &mut *self.values.add(node.to_index()) };
        let value = slot.as_mut().expect("`IterMut` - `handle` is invalid!");
        (&nodes[node].key, value)
    }
}

// SAFETY: `IterMut` behaves like `(&'a K, &'a mut V)`.
unsafe impl<'a, K: Sync, V: Send> Send for IterMut<'a, K, V> {}
// SAFETY: as above.
unsafe impl<'a, K: Sync, V: Sync> Sync for IterMut<'a, K, V> {}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.front = successor(self.nodes, node);
        self.remaining -= 1;
        Some(self.entry(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.back = predecessor(self.nodes, node);
        self.remaining -= 1;
        Some(self.entry(node))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for ValuesMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for ValuesMut<'a, K, V> {}

impl<K, V, C> Iterator for IntoIter<K, V, C> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.map.num_nodes == 0 {
            return None;
        }
        // The front node is the smallest one left, so it has no left child.
        let node = self.front?;
        let (right, parent) = (self.map.nodes[node].right, self.map.nodes[node].parent);
        self.map.unlink(node);
        self.front = right.map(|right| self.map.leftmost(right)).or(parent);
        Some(self.map.take_node(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.map.len(), Some(self.map.len()))
    }
}

impl<K, V, C> DoubleEndedIterator for IntoIter<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.map.num_nodes == 0 {
            return None;
        }
        // The back node is the largest one left, so it has no right child.
        let node = self.back?;
        let (left, parent) = (self.map.nodes[node].left, self.map.nodes[node].parent);
        self.map.unlink(node);
        self.back = left.map(|left| self.map.rightmost(left)).or(parent);
        Some(self.map.take_node(node))
    }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> {}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, C> IntoIterator for AvlTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        let front = self.root.map(|root| self.leftmost(root));
        let back = self.root.map(|root| self.rightmost(root));
        IntoIter {
            map: self,
            front,
            back,
        }
    }
}
