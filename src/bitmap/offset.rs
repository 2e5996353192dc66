use super::RoaringBitmap;

impl RoaringBitmap {
    /// Shifts every element by `delta`, dropping elements whose shifted
    /// value falls outside `[0, 2**32)` rather than wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let rb: RoaringBitmap = [1u32, 2, 3].into_iter().collect();
    /// let shifted = rb.add_offset(10);
    /// assert_eq!(shifted.iter().collect::<Vec<_>>(), vec![11, 12, 13]);
    ///
    /// let rb: RoaringBitmap = [0u32, 1].into_iter().collect();
    /// let shifted = rb.add_offset(-1);
    /// assert_eq!(shifted.iter().collect::<Vec<_>>(), vec![0]);
    /// ```
    pub fn add_offset(&self, delta: i64) -> RoaringBitmap {
        let mut out = RoaringBitmap::new();
        // Shifting by a constant preserves ascending order, so every
        // surviving value can be appended with `push` rather than `insert`.
        for value in self.iter() {
            let shifted = i64::from(value) + delta;
            if (0..=i64::from(u32::MAX)).contains(&shifted) {
                out.push(shifted as u32);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_offset_drops_negative_results() {
        let rb: RoaringBitmap = [0u32, 5, 10].into_iter().collect();
        let shifted = rb.add_offset(-3);
        assert_eq!(shifted.iter().collect::<Vec<_>>(), vec![2, 7]);
    }

    #[test]
    fn test_add_offset_drops_overflowing_results() {
        let rb: RoaringBitmap = [u32::MAX - 1, u32::MAX].into_iter().collect();
        let shifted = rb.add_offset(5);
        assert!(shifted.is_empty());
    }

    #[test]
    fn test_add_offset_across_chunk_boundary() {
        let rb: RoaringBitmap = [65_535u32].into_iter().collect();
        let shifted = rb.add_offset(1);
        assert_eq!(shifted.iter().collect::<Vec<_>>(), vec![65_536]);
    }
}
