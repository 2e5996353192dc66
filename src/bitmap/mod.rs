//! Bitmap façade: translates 32-bit element and range
//! operations into chunk-level operations against [`crate::containers`].

mod cmp;
mod fmt;
mod inherent;
mod iter;
mod offset;
mod ops;
#[cfg(feature = "std")]
mod serialization;
#[cfg(feature = "serde")]
mod serde_impl;
mod stats;

pub use iter::{IntoIter, Iter, IterMany};
pub use stats::Statistics;

use crate::containers::Containers;

/// A compressed bitmap over the 32-bit unsigned integer universe, built on
/// a two-level partitioned container engine: an ordered sequence of
/// (high-key, container) pairs, where each container is one of an array,
/// bitmap, or run representation chosen by cardinality and clustering.
///
/// # Examples
///
/// ```
/// use rbitset::RoaringBitmap;
///
/// let mut rb = RoaringBitmap::new();
/// rb.insert(2);
/// rb.insert(3);
/// rb.insert(5);
/// assert_eq!(rb.len(), 3);
/// ```
#[derive(Clone)]
pub struct RoaringBitmap {
    containers: Containers,
}
