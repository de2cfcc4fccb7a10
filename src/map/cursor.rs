use std::fmt;
use std::ptr;

use compare::Compare;

use super::{AvlTreeMap, Link};

/// Order in which a [`Cursor`] walks the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Ascending key order.
    Forward,
    /// Descending key order.
    Reverse,
}

/// A read-only position in a map: either an element or the end sentinel.
///
/// A cursor borrows the map, so the element it points at cannot be removed
/// while the cursor is alive.
///
/// ```
/// use avl_map::AvlTreeMap;
/// let map: AvlTreeMap<_, _> = (1..=3).map(|k| (k, k * 10)).collect();
///
/// let mut cursor = map.begin();
/// assert_eq!(cursor.key_value(), Some((&1, &10)));
/// cursor.move_next();
/// cursor.move_next();
/// cursor.move_next();
/// assert!(cursor == map.end());
///
/// let mut cursor = map.rbegin();
/// assert_eq!(cursor.key(), Some(&3));
/// cursor.move_next();
/// assert_eq!(cursor.key(), Some(&2));
/// ```
pub struct Cursor<'a, K, V, C> {
    map: &'a AvlTreeMap<K, V, C>,
    node: Link,
    direction: Direction,
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Returns a forward cursor at the smallest key, or at the end if the map is empty.
    pub fn begin(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            map: self,
            node: self.root.map(|root| self.leftmost(root)),
            direction: Direction::Forward,
        }
    }

    /// Returns the forward end sentinel.
    pub fn end(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            map: self,
            node: None,
            direction: Direction::Forward,
        }
    }

    /// Returns a reverse cursor at the largest key, or at the end if the map is empty.
    pub fn rbegin(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            map: self,
            node: self.root.map(|root| self.rightmost(root)),
            direction: Direction::Reverse,
        }
    }

    /// Returns the reverse end sentinel.
    pub fn rend(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            map: self,
            node: None,
            direction: Direction::Reverse,
        }
    }
}

impl<K, V, C: Compare<K>> AvlTreeMap<K, V, C> {
    /// Returns a forward cursor at the given key, or [`end`](Self::end) if it is absent.
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        C: Compare<Q, K>,
    {
        Cursor {
            map: self,
            node: self.find_node(key),
            direction: Direction::Forward,
        }
    }
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    /// Returns the direction of travel of `move_next`.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if the cursor is at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the key at the cursor, or `None` at the end.
    pub fn key(&self) -> Option<&'a K> {
        self.key_value().map(|(key, _)| key)
    }

    /// Returns the value at the cursor, or `None` at the end.
    pub fn value(&self) -> Option<&'a V> {
        self.key_value().map(|(_, value)| value)
    }

    /// Returns the entry at the cursor, or `None` at the end.
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        let map = self.map;
        self.node.map(|node| map.key_value(node))
    }

    /// Advances the cursor in its direction.
    /// Moving past the last element reaches the end; at the end this does nothing.
    pub fn move_next(&mut self) {
        if let Some(node) = self.node {
            self.node = match self.direction {
                Direction::Forward => self.map.successor(node),
                Direction::Reverse => self.map.predecessor(node),
            };
        }
    }

    /// Moves the cursor against its direction.
    /// Moving before the first element reaches the end; at the end this does nothing.
    pub fn move_prev(&mut self) {
        if let Some(node) = self.node {
            self.node = match self.direction {
                Direction::Forward => self.map.predecessor(node),
                Direction::Reverse => self.map.successor(node),
            };
        }
    }
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V, C> Copy for Cursor<'a, K, V, C> {}

impl<'a, K, V, C> PartialEq for Cursor<'a, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.map, other.map) && self.node == other.node && self.direction == other.direction
    }
}

impl<'a, K, V, C> Eq for Cursor<'a, K, V, C> {}

impl<'a, K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Cursor<'a, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.key_value())
            .field("direction", &self.direction)
            .finish()
    }
}
