//! # SeqSet: Sequence and Set Data Structures
//!
//! This crate implements the classic Sequence and Set abstract data types
//! with the amortized-cost machinery made explicit and observable:
//!
//! - **Resizable Storage**: an owned buffer with logical size distinct from
//!   physical capacity, built on directional block copies
//! - **Dynamic Array Sequence**: table doubling/shrinking with a hysteresis
//!   band, giving O(1) amortized insert/delete at the ends
//! - **Array Sequence**: the exact-fit contrast case, O(n) per update
//! - **Linked List Sequence**: a singly linked list over an index arena
//! - **Key-Value Set**: an unsorted flat set with sort-on-demand ordered
//!   queries (min/max/successor/predecessor/ordered traversal)
//! - **Sorting routines**: in-place selection and insertion sort
//!
//! The point is the tradeoff, not raw throughput: every structure exposes
//! its capacity and reallocation behavior so the amortized analysis can be
//! checked against reality in tests and benchmarks.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqset::{ArraySet, DynamicArraySequence, Sequence};
//!
//! // amortized O(1) appends: 1000 inserts, ~log₂(1000) reallocations
//! let mut seq = DynamicArraySequence::new();
//! for i in 0..1000 {
//!     seq.insert_last(i)?;
//! }
//! assert_eq!(seq.len(), 1000);
//! assert_eq!(seq.reallocation_count(), 10);
//!
//! // unsorted set with ordered queries computed on demand
//! let mut set = ArraySet::new();
//! set.build(vec![("ashgrey", 21), ("huaier", 19), ("rust", 13)])?;
//! set.insert("kotlin", 14)?;
//! assert_eq!(set.find_next(&"huaier").map(|pair| pair.key), Some("kotlin"));
//! # Ok::<(), seqset::SeqSetError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod sequence;
pub mod set;
pub mod sort;
pub mod storage;

pub use error::{Result, SeqSetError};
pub use sequence::{
    ArraySequence, DynamicArraySequence, LinkedListSequence, Sequence, DEFAULT_GROWTH_FACTOR,
};
pub use set::{ArraySet, OrderedIter, Pair};
pub use storage::Storage;
