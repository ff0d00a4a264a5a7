//! # chunky_list
//!
//! `chunky_list` provides one sequence contract, the [`List`] trait, and three
//! interchangeable representations of it:
//!
//! - [`SinglyLinkedList`]: a head-only chain of boxed nodes.
//! - [`DoublyLinkedList`]: a chain with backward links and a tail reference.
//! - [`ChunkyList`]: an **unrolled linked list** -like structure, an ordered
//!   directory of fixed-capacity blocks.
//!
//! ## Chunked storage
//! A [`ChunkyList<T, N>`] keeps its elements in blocks of at most `N` values.
//! Global indices are translated into a block and a local offset by scanning
//! the directory. Inserting into a full block splits it, removing the last
//! element of a block drops the block. Every block therefore always holds
//! between `1` and `N` elements.
//!
//! ## Errors
//! Operations that can be misused return [`ListError`]: `EmptyList` when the
//! list has no element to give, `BadIndex` when an index is out of range.
//! A failed operation never mutates the list.
//!
//! ## Example
//! ```rust
//! use chunky_list::{ChunkyList, List, ListError};
//!
//! let mut list: ChunkyList<i64, 2> = ChunkyList::new();
//! list.push_back(2);
//! list.push_front(0);
//! list.insert(1, 1)?;
//!
//! assert_eq!(list.front(), Ok(&0));
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.back(), Ok(&2));
//! assert_eq!(format!("{list:?}"), "[[0, 1], [2]]");
//!
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list.pop_front(), Ok(0));
//! assert_eq!(list.pop_front(), Err(ListError::EmptyList));
//! # Ok::<(), ListError>(())
//! ```

mod block;
mod chunky;
mod doubly;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod sailed;
mod singly;

pub use chunky::ChunkyList;
pub use doubly::{DoublyLinkedList, Iter as DoublyIter};
pub use error::ListError;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use singly::{Iter as SinglyIter, SinglyLinkedList};

/// Marker type lifting a block capacity into the type system.
pub enum Usize<const N: usize> {}

/// Implemented by [`Usize<N>`] for every accepted block capacity.
pub trait ChunkCapacity: crate::sailed::Sailed {}

/// An ordered, zero-indexed sequence that allows duplicates.
///
/// Reads and removals on an empty list fail with [`ListError::EmptyList`];
/// indices outside the valid range fail with [`ListError::BadIndex`].
/// Insertion accepts `0..=len()`, every other indexed operation `0..len()`.
pub trait List<T> {
    /// Forward iterator over the elements, created by [`List::iter`].
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Adds an element at the front.
    fn push_front(&mut self, value: T);

    /// Adds an element at the back.
    fn push_back(&mut self, value: T);

    /// Inserts an element so that it ends up at `index`.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError>;

    fn pop_front(&mut self) -> Result<T, ListError>;

    fn pop_back(&mut self) -> Result<T, ListError>;

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    fn front(&self) -> Result<&T, ListError>;

    fn back(&self) -> Result<&T, ListError>;

    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Provides a forward iterator over the list's elements.
    fn iter(&self) -> Self::Iter<'_>;
}
