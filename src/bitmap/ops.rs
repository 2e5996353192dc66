use core::mem;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::RoaringBitmap;

impl RoaringBitmap {
    /// Returns `true` if `self` and `other` share at least one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let a: RoaringBitmap = (1..4).collect();
    /// let b: RoaringBitmap = (3..5).collect();
    /// assert!(a.intersects(&b));
    /// ```
    pub fn intersects(&self, other: &RoaringBitmap) -> bool {
        !self.containers.is_disjoint(&other.containers)
    }

    /// Computes the cardinality of the intersection without materializing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let a: RoaringBitmap = (1..4).collect();
    /// let b: RoaringBitmap = (3..5).collect();
    /// assert_eq!(a.and_cardinality(&b), (&a & &b).len());
    /// ```
    pub fn and_cardinality(&self, other: &RoaringBitmap) -> u64 {
        self.containers.intersection_len(&other.containers)
    }

    /// Computes the cardinality of the union without materializing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let a: RoaringBitmap = (1..4).collect();
    /// let b: RoaringBitmap = (3..5).collect();
    /// assert_eq!(a.or_cardinality(&b), (&a | &b).len());
    /// ```
    pub fn or_cardinality(&self, other: &RoaringBitmap) -> u64 {
        self.len().wrapping_add(other.len()).wrapping_sub(self.and_cardinality(other))
    }

    /// Computes the cardinality of the difference without materializing it.
    pub fn difference_cardinality(&self, other: &RoaringBitmap) -> u64 {
        self.len() - self.and_cardinality(other)
    }

    /// Computes the cardinality of the symmetric difference without
    /// materializing it.
    pub fn symmetric_difference_cardinality(&self, other: &RoaringBitmap) -> u64 {
        let intersection = self.and_cardinality(other);
        self.len().wrapping_add(other.len()).wrapping_sub(intersection).wrapping_sub(intersection)
    }
}

impl BitOr<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitor(mut self, rhs: RoaringBitmap) -> RoaringBitmap {
        BitOrAssign::bitor_assign(&mut self, rhs);
        self
    }
}

impl BitOr<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitor(mut self, rhs: &RoaringBitmap) -> RoaringBitmap {
        BitOrAssign::bitor_assign(&mut self, rhs);
        self
    }
}

impl BitOr<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitor(self, rhs: RoaringBitmap) -> RoaringBitmap {
        BitOr::bitor(rhs, self)
    }
}

impl BitOr<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitor(self, rhs: &RoaringBitmap) -> RoaringBitmap {
        RoaringBitmap { containers: self.containers.union(&rhs.containers) }
    }
}

impl BitOrAssign<RoaringBitmap> for RoaringBitmap {
    fn bitor_assign(&mut self, mut rhs: RoaringBitmap) {
        // Apply the union on the larger map to favor fewer inserts.
        if self.len() < rhs.len() {
            mem::swap(self, &mut rhs);
        }
        self.containers.union_with(&rhs.containers);
    }
}

impl BitOrAssign<&RoaringBitmap> for RoaringBitmap {
    fn bitor_assign(&mut self, rhs: &RoaringBitmap) {
        self.containers.union_with(&rhs.containers);
    }
}

impl BitAnd<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitand(mut self, rhs: RoaringBitmap) -> RoaringBitmap {
        BitAndAssign::bitand_assign(&mut self, rhs);
        self
    }
}

impl BitAnd<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitand(mut self, rhs: &RoaringBitmap) -> RoaringBitmap {
        BitAndAssign::bitand_assign(&mut self, rhs);
        self
    }
}

impl BitAnd<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitand(self, rhs: RoaringBitmap) -> RoaringBitmap {
        BitAnd::bitand(rhs, self)
    }
}

impl BitAnd<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitand(self, rhs: &RoaringBitmap) -> RoaringBitmap {
        RoaringBitmap { containers: self.containers.intersect(&rhs.containers) }
    }
}

impl BitAndAssign<RoaringBitmap> for RoaringBitmap {
    fn bitand_assign(&mut self, mut rhs: RoaringBitmap) {
        // Apply the intersection on the smaller map to minimize work.
        if rhs.containers.size() < self.containers.size() {
            mem::swap(self, &mut rhs);
        }
        self.containers.intersect_with(&rhs.containers);
    }
}

impl BitAndAssign<&RoaringBitmap> for RoaringBitmap {
    fn bitand_assign(&mut self, rhs: &RoaringBitmap) {
        self.containers.intersect_with(&rhs.containers);
    }
}

impl Sub<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn sub(mut self, rhs: RoaringBitmap) -> RoaringBitmap {
        SubAssign::sub_assign(&mut self, &rhs);
        self
    }
}

impl Sub<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn sub(mut self, rhs: &RoaringBitmap) -> RoaringBitmap {
        SubAssign::sub_assign(&mut self, rhs);
        self
    }
}

impl Sub<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn sub(self, rhs: RoaringBitmap) -> RoaringBitmap {
        Sub::sub(self, &rhs)
    }
}

impl Sub<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn sub(self, rhs: &RoaringBitmap) -> RoaringBitmap {
        RoaringBitmap { containers: self.containers.difference(&rhs.containers) }
    }
}

impl SubAssign<RoaringBitmap> for RoaringBitmap {
    fn sub_assign(&mut self, rhs: RoaringBitmap) {
        SubAssign::sub_assign(self, &rhs)
    }
}

impl SubAssign<&RoaringBitmap> for RoaringBitmap {
    fn sub_assign(&mut self, rhs: &RoaringBitmap) {
        self.containers.difference_with(&rhs.containers);
    }
}

impl BitXor<RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitxor(mut self, rhs: RoaringBitmap) -> RoaringBitmap {
        BitXorAssign::bitxor_assign(&mut self, rhs);
        self
    }
}

impl BitXor<&RoaringBitmap> for RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitxor(mut self, rhs: &RoaringBitmap) -> RoaringBitmap {
        BitXorAssign::bitxor_assign(&mut self, rhs);
        self
    }
}

impl BitXor<RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitxor(self, rhs: RoaringBitmap) -> RoaringBitmap {
        BitXor::bitxor(rhs, self)
    }
}

impl BitXor<&RoaringBitmap> for &RoaringBitmap {
    type Output = RoaringBitmap;
    fn bitxor(self, rhs: &RoaringBitmap) -> RoaringBitmap {
        RoaringBitmap { containers: self.containers.symmetric_difference(&rhs.containers) }
    }
}

impl BitXorAssign<RoaringBitmap> for RoaringBitmap {
    fn bitxor_assign(&mut self, rhs: RoaringBitmap) {
        self.containers.symmetric_difference_with(&rhs.containers);
    }
}

impl BitXorAssign<&RoaringBitmap> for RoaringBitmap {
    fn bitxor_assign(&mut self, rhs: &RoaringBitmap) {
        self.containers.symmetric_difference_with(&rhs.containers);
    }
}
