//! Sequence abstract data type and its three implementations
//!
//! A sequence maintains items in an extrinsic order: each item has a rank,
//! not a key. The trait below is the shared interface; the implementations
//! trade off differently between random access and structural update:
//!
//! - **`ArraySequence<T>`** - exact-fit array, O(1) access, O(n) insert/delete
//! - **`DynamicArraySequence<T>`** - table doubling/shrinking, O(1) amortized
//!   insert/delete at the ends
//! - **`LinkedListSequence<T>`** - arena-backed singly linked list, O(1)
//!   insert/delete at the front, O(i) access

use crate::error::{Result, SeqSetError};

mod array;
mod dynamic;
mod linked;

pub use array::ArraySequence;
pub use dynamic::{DynamicArraySequence, DEFAULT_GROWTH_FACTOR};
pub use linked::LinkedListSequence;

/// Shared interface of the sequence data structures
///
/// All operations use 0-based indices. Access with an index outside the
/// currently valid range fails with [`SeqSetError::OutOfBounds`];
/// `insert_at` additionally accepts `index == len` (append).
///
/// # Examples
///
/// ```rust
/// use seqset::{DynamicArraySequence, Sequence};
///
/// let mut seq = DynamicArraySequence::new();
/// seq.build(vec![1, 2, 3])?;
/// seq.insert_first(0)?;
/// assert_eq!(*seq.get_at(0)?, 0);
/// assert_eq!(seq.delete_last()?, 3);
/// assert_eq!(seq.len(), 3);
/// # Ok::<(), seqset::SeqSetError>(())
/// ```
pub trait Sequence<T> {
    /// Number of items currently stored
    fn len(&self) -> usize;

    /// Get a reference to the item at `index`. O(1) for arrays, O(index)
    /// for the linked list.
    fn get_at(&self, index: usize) -> Result<&T>;

    /// Overwrite the item at `index`, dropping the previous occupant
    fn set_at(&mut self, index: usize, item: T) -> Result<()>;

    /// Insert `item` so that it ends up at `index`, shifting later items one
    /// rank up. Valid for `0 <= index <= len`.
    fn insert_at(&mut self, index: usize, item: T) -> Result<()>;

    /// Remove and return the item at `index`, shifting later items one rank
    /// down. Valid for `0 <= index < len`.
    fn delete_at(&mut self, index: usize) -> Result<T>;

    /// Clear the sequence and repopulate it from `items`, preserving order
    fn build(&mut self, items: Vec<T>) -> Result<()>;

    /// Returns true if the sequence holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `item` at the front
    fn insert_first(&mut self, item: T) -> Result<()> {
        self.insert_at(0, item)
    }

    /// Insert `item` at the back
    fn insert_last(&mut self, item: T) -> Result<()> {
        self.insert_at(self.len(), item)
    }

    /// Remove and return the first item
    fn delete_first(&mut self) -> Result<T> {
        self.delete_at(0)
    }

    /// Remove and return the last item
    fn delete_last(&mut self) -> Result<T> {
        let len = self.len();
        if len == 0 {
            return Err(SeqSetError::out_of_bounds(0, 0));
        }
        self.delete_at(len - 1)
    }
}
