//! A compressed bitmap over the 32-bit unsigned integer universe, built on
//! the [Roaring bitmap compression scheme](https://roaringbitmap.org/).
//!
//! The crate is organized around a two-level partitioned container
//! engine: a [`RoaringBitmap`] is an ordered sequence
//! of (high-key, container) pairs, where each container is one of three
//! representations — a sorted array, a dense bitmap, or a run-length list —
//! chosen and promoted/demoted by cardinality and clustering after every
//! mutation.
//!
//! # Examples
//!
//! ```
//! use rbitset::RoaringBitmap;
//!
//! let mut rb = RoaringBitmap::new();
//!
//! // insert all primes less than 10
//! rb.insert(2);
//! rb.insert(3);
//! rb.insert(5);
//! rb.insert(7);
//! assert_eq!(rb.len(), 4);
//! ```

mod bitmap;
mod container;
mod containers;
pub mod error;
mod store;
mod util;

pub use crate::bitmap::{IntoIter, Iter, IterMany, RoaringBitmap, Statistics};
pub use crate::error::{Error, Result};
