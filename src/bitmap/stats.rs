//! Statistics struct: a snapshot of container counts,
//! stored-value counts, and byte footprint per representation.
//!
//! Byte counts report the serialized payload size rather than native
//! in-memory capacity, so the numbers are stable across host word sizes
//! so the numbers stay comparable across hosts.

use crate::store::Store;

use super::RoaringBitmap;

/// Detailed statistics on the composition of a bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Statistics {
    /// Number of containers in the bitmap.
    pub n_containers: u64,
    /// Number of array containers in the bitmap.
    pub n_array_containers: u64,
    /// Number of bitmap containers in the bitmap.
    pub n_bitmap_containers: u64,
    /// Number of run containers in the bitmap.
    pub n_run_containers: u64,
    /// Number of values stored in array containers.
    pub n_values_array_containers: u64,
    /// Number of values stored in bitmap containers.
    pub n_values_bitmap_containers: u64,
    /// Number of values stored in run containers.
    pub n_values_run_containers: u64,
    /// Serialized payload bytes used by array containers.
    pub n_bytes_array_containers: u64,
    /// Serialized payload bytes used by bitmap containers.
    pub n_bytes_bitmap_containers: u64,
    /// Serialized payload bytes used by run containers.
    pub n_bytes_run_containers: u64,
    /// Smallest element in the bitmap, if any.
    pub min_value: Option<u32>,
    /// Largest element in the bitmap, if any.
    pub max_value: Option<u32>,
    /// Total number of elements in the bitmap.
    pub cardinality: u64,
}

impl RoaringBitmap {
    /// Returns statistics about the composition of this bitmap: container
    /// counts, stored-value counts, and serialized byte footprint broken
    /// down per representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let bitmap: RoaringBitmap = (1..100).collect();
    /// let stats = bitmap.stats();
    ///
    /// assert_eq!(stats.n_containers, 1);
    /// assert_eq!(stats.n_array_containers, 1);
    /// assert_eq!(stats.n_run_containers, 0);
    /// assert_eq!(stats.n_values_array_containers, 99);
    /// assert_eq!(stats.cardinality, 99);
    /// ```
    pub fn stats(&self) -> Statistics {
        let mut stats = Statistics { min_value: self.min(), max_value: self.max(), ..Statistics::default() };

        for container in self.containers.iter() {
            stats.n_containers += 1;
            let len = container.len();
            stats.cardinality += len;
            match &container.store {
                Store::Array(array) => {
                    stats.n_array_containers += 1;
                    stats.n_values_array_containers += len;
                    stats.n_bytes_array_containers += array.len() * 2;
                }
                Store::Bitmap(_) => {
                    stats.n_bitmap_containers += 1;
                    stats.n_values_bitmap_containers += len;
                    stats.n_bytes_bitmap_containers += 8 * 1024;
                }
                Store::Run(run) => {
                    stats.n_run_containers += 1;
                    stats.n_values_run_containers += len;
                    stats.n_bytes_run_containers += 2 + 4 * run.run_count() as u64;
                }
            }
        }

        stats
    }
}
