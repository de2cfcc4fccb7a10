//! An ordered map implemented with an AVL tree.
//!
//! [`AvlTreeMap`] keeps its keys sorted under a comparator (the natural order
//! by default) and restores the AVL height balance after every insertion and
//! removal, so lookups and updates take O(log n).
//!
//! Nodes live in an internal arena and carry a back-reference to their
//! parent, which lets iterators and [`Cursor`]s step to the in-order
//! successor or predecessor without an auxiliary stack.
//!
//! ```
//! use avl_map::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     map.insert(key, key * 10);
//! }
//! map.remove(&5);
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec![1, 3, 4, 7, 8, 9]);
//!
//! let reversed: Vec<_> = map.keys().rev().copied().collect();
//! assert_eq!(reversed, vec![9, 8, 7, 4, 3, 1]);
//! ```
//!
//! # Lookup policies
//!
//! [`AvlTreeMap::at`] reports a missing key as [`Error::KeyNotFound`], while
//! [`AvlTreeMap::get_or_default`] inserts a default value for a missing key.
//!
//! # Features
//!
//! - **`consistency_check`** - exposes `AvlTreeMap::check_consistency`
//!   outside of the crate's own tests.

mod arena;
pub mod error;
pub mod map;

pub use error::{Error, Result};
pub use map::{AvlTreeMap, Cursor, Direction};
