use super::RoaringBitmap;

impl RoaringBitmap {
    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut a = RoaringBitmap::new();
    /// let mut b = RoaringBitmap::new();
    /// a.insert(1);
    /// assert!(a.is_disjoint(&b));
    /// b.insert(1);
    /// assert!(!a.is_disjoint(&b));
    /// ```
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.containers.is_disjoint(&other.containers)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut a = RoaringBitmap::new();
    /// let mut b = RoaringBitmap::new();
    /// a.insert(1);
    /// assert!(!a.is_subset(&b));
    /// b.insert(1);
    /// assert!(a.is_subset(&b));
    /// ```
    pub fn is_subset(&self, other: &Self) -> bool {
        self.containers.is_subset(&other.containers)
    }

    /// Returns `true` if every element of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` contain exactly the same
    /// elements.
    ///
    /// Unlike a bitwise comparison of the underlying containers, this is
    /// defined over the element set: a bitmap and its [`run_optimize`]d
    /// self compare equal even though one holds run containers and the
    /// other holds array or bitmap containers.
    ///
    /// [`run_optimize`]: RoaringBitmap::run_optimize
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let mut a: RoaringBitmap = (0..1000).collect();
    /// let b = a.clone();
    /// a.run_optimize();
    /// assert!(a.equals(&b));
    /// ```
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl PartialEq for RoaringBitmap {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for RoaringBitmap {}
