use core::ops::Range;

use crate::container::Container;
use crate::error::{Error, Result};
use crate::util;

use super::RoaringBitmap;

impl RoaringBitmap {
    /// Creates an empty `RoaringBitmap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    /// let rb = RoaringBitmap::new();
    /// assert!(rb.is_empty());
    /// ```
    pub fn new() -> RoaringBitmap {
        RoaringBitmap { containers: crate::containers::Containers::new() }
    }

    /// Adds a value to the set, returning whether it was absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert!(rb.insert(3));
    /// assert!(!rb.insert(3));
    /// assert!(rb.contains(3));
    /// ```
    pub fn insert(&mut self, value: u32) -> bool {
        let (key, low) = util::split(value);
        let i = self.containers.get_or_insert(key);
        self.containers[i].insert(low)
    }

    /// Inserts every value in the half-open range `[range.start, range.end)`.
    ///
    /// Returns the number of values actually inserted. The range's upper
    /// bound may reach `2**32` to cover the maximum element. A range with
    /// `start >= end` is treated as empty, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `range.end` exceeds `2**32`,
    /// without modifying the bitmap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert_range(2..4).unwrap();
    /// assert!(rb.contains(2));
    /// assert!(rb.contains(3));
    /// assert!(!rb.contains(4));
    /// ```
    pub fn insert_range(&mut self, range: Range<u64>) -> Result<u64> {
        if range.end > u64::from(u32::MAX) + 1 {
            return Err(Error::InvalidRange { hi: range.end });
        }
        if range.start >= range.end {
            return Ok(0);
        }

        let (start_hi, start_lo) = util::split(range.start as u32);
        let (end_hi, end_lo) = util::split((range.end - 1) as u32);

        let mut inserted = 0;
        for key in start_hi..=end_hi {
            let lo = if key == start_hi { start_lo } else { 0 };
            let hi = if key == end_hi { end_lo } else { u16::MAX };
            let i = self.containers.get_or_insert(key);
            inserted += self.containers[i].insert_range(lo..=hi);
        }
        Ok(inserted)
    }

    /// Inserts `value` only if it is greater than the current maximum.
    ///
    /// Returns whether the value was inserted. Useful for building a
    /// bitmap from an already-sorted source without the binary search that
    /// [`insert`](Self::insert) performs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// assert!(rb.push(1));
    /// assert!(rb.push(3));
    /// assert!(!rb.push(3));
    /// assert!(rb.push(5));
    /// ```
    pub fn push(&mut self, value: u32) -> bool {
        let (key, low) = util::split(value);
        match self.containers.as_slice().last() {
            Some(tail) if tail.key == key => {
                let i = self.containers.size() - 1;
                self.containers[i].push(low)
            }
            Some(tail) if tail.key > key => false,
            _ => {
                let mut container = Container::new(key);
                container.push(low);
                self.containers.append(container);
                true
            }
        }
    }

    /// Removes a value, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(3);
    /// assert!(rb.remove(3));
    /// assert!(!rb.remove(3));
    /// ```
    pub fn remove(&mut self, value: u32) -> bool {
        let (key, low) = util::split(value);
        match self.containers.search(key) {
            Ok(i) => {
                let removed = self.containers[i].remove(low);
                if removed && self.containers[i].is_empty() {
                    self.containers.remove_at(i);
                }
                removed
            }
            Err(_) => false,
        }
    }

    /// Removes every value in the half-open range `[range.start, range.end)`.
    ///
    /// Returns the number of values actually removed. A range with
    /// `start >= end` is treated as empty, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `range.end` exceeds `2**32`,
    /// without modifying the bitmap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert_range(0..10).unwrap();
    /// assert_eq!(rb.remove_range(2..4).unwrap(), 2);
    /// assert_eq!(rb.len(), 8);
    /// ```
    pub fn remove_range(&mut self, range: Range<u64>) -> Result<u64> {
        if range.end > u64::from(u32::MAX) + 1 {
            return Err(Error::InvalidRange { hi: range.end });
        }
        if range.start >= range.end {
            return Ok(0);
        }

        let (start_hi, start_lo) = util::split(range.start as u32);
        let (end_hi, end_lo) = util::split((range.end - 1) as u32);

        let mut removed = 0;
        let mut i = 0;
        while i < self.containers.size() {
            let key = self.containers[i].key;
            if key < start_hi || key > end_hi {
                i += 1;
                continue;
            }
            let lo = if key == start_hi { start_lo } else { 0 };
            let hi = if key == end_hi { end_lo } else { u16::MAX };
            removed += self.containers[i].remove_range(lo..=hi);
            if self.containers[i].is_empty() {
                self.containers.remove_at(i);
            } else {
                i += 1;
            }
        }
        Ok(removed)
    }

    /// Toggles every value in the half-open range `[range.start, range.end)`:
    /// present elements are removed, absent elements are inserted. A range
    /// with `start >= end` is treated as empty, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `range.end` exceeds `2**32`,
    /// without modifying the bitmap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(0);
    /// rb.flip(1..2).unwrap();
    /// assert_eq!(rb.iter().collect::<Vec<u32>>(), vec![0, 1]);
    /// ```
    pub fn flip(&mut self, range: Range<u64>) -> Result<()> {
        if range.end > u64::from(u32::MAX) + 1 {
            return Err(Error::InvalidRange { hi: range.end });
        }
        if range.start >= range.end {
            return Ok(());
        }

        let (start_hi, start_lo) = util::split(range.start as u32);
        let (end_hi, end_lo) = util::split((range.end - 1) as u32);

        for key in start_hi..=end_hi {
            let lo = if key == start_hi { start_lo } else { 0 };
            let hi = if key == end_hi { end_lo } else { u16::MAX };
            match self.containers.search(key) {
                Ok(i) => {
                    let mut full = Container::new(key);
                    full.insert_range(lo..=hi);
                    self.containers[i].symmetric_difference_with(&full);
                    if self.containers[i].is_empty() {
                        self.containers.remove_at(i);
                    }
                }
                Err(i) => {
                    let mut container = Container::new(key);
                    container.insert_range(lo..=hi);
                    self.containers.insert_at(i, container);
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if this set contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(1);
    /// assert!(rb.contains(1));
    /// assert!(!rb.contains(0));
    /// ```
    pub fn contains(&self, value: u32) -> bool {
        let (key, low) = util::split(value);
        self.containers.get_container_for_key(key).is_some_and(|c| c.contains(low))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.containers = crate::containers::Containers::new();
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// Computed on demand by summing per-chunk cardinalities.
    pub fn len(&self) -> u64 {
        self.containers.len_sum()
    }

    /// Returns the smallest element, or `None` if the set is empty.
    pub fn min(&self) -> Option<u32> {
        self.containers.as_slice().first().and_then(|c| c.min().map(|low| util::join(c.key, low)))
    }

    /// Returns the largest element, or `None` if the set is empty.
    pub fn max(&self) -> Option<u32> {
        self.containers.as_slice().last().and_then(|c| c.max().map(|low| util::join(c.key, low)))
    }

    /// Returns the number of elements `<= value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(1);
    /// rb.insert(3);
    /// assert_eq!(rb.rank(2), 1);
    /// assert_eq!(rb.rank(3), 2);
    /// ```
    pub fn rank(&self, value: u32) -> u64 {
        let (key, low) = util::split(value);
        let mut rank = 0u64;
        for container in self.containers.iter() {
            if container.key < key {
                rank += container.len();
            } else if container.key == key {
                rank += container.rank(low);
                break;
            } else {
                break;
            }
        }
        rank
    }

    /// Returns the `n`th smallest element (0-based), or
    /// [`Error::OutOfRange`] if `n >= cardinality`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut rb = RoaringBitmap::new();
    /// rb.insert(5);
    /// rb.insert(10);
    /// assert_eq!(rb.select(0).unwrap(), 5);
    /// assert!(rb.select(2).is_err());
    /// ```
    pub fn select(&self, n: u32) -> Result<u32> {
        let mut remaining = n;
        for container in self.containers.iter() {
            let len = container.len();
            if u64::from(remaining) < len {
                let low = container.select(remaining).expect("remaining < len");
                return Ok(util::join(container.key, low));
            }
            remaining -= len as u32;
        }
        Err(Error::OutOfRange { requested: u64::from(n), cardinality: self.len() })
    }

    /// Converts eligible containers to run-length representation where
    /// doing so strictly reduces storage. Run
    /// containers are never chosen automatically by any other operation.
    pub fn run_optimize(&mut self) {
        for container in self.containers.iter_mut() {
            container.run_optimize();
        }
    }
}

impl Default for RoaringBitmap {
    fn default() -> RoaringBitmap {
        RoaringBitmap::new()
    }
}
