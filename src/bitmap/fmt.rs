use core::fmt;

use super::RoaringBitmap;

impl fmt::Debug for RoaringBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() < 16 {
            write!(f, "RoaringBitmap<{:?}>", self.iter().collect::<Vec<u32>>())
        } else {
            write!(
                f,
                "RoaringBitmap<{:?} values between {:?} and {:?}>",
                self.len(),
                self.min().unwrap(),
                self.max().unwrap()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_small_lists_elements() {
        let rb: RoaringBitmap = [1u32, 2, 3].into_iter().collect();
        assert_eq!(format!("{:?}", rb), "RoaringBitmap<[1, 2, 3]>");
    }

    #[test]
    fn test_debug_large_summarizes() {
        let rb: RoaringBitmap = (0..100u32).collect();
        assert_eq!(format!("{:?}", rb), "RoaringBitmap<100 values between 0 and 99>");
    }
}
