//! Container operations: the three representations and the
//! dispatch tables that implement set algebra across every ordered pair of
//! them.
//!
//! Genuinely specialized cross-representation algorithms are used rather
//! than funneling every pair through a common bitmap conversion — the
//! latter would throw away the compactness the three representations exist
//! to provide. Array/Bitmap pairs operate element-at-a-time against the
//! other side's native query (`contains`, bit test); Run/Bitmap pairs
//! materialize only the run side into a scratch bitmap, since the other
//! side is already word-shaped; Array/Run pairs walk the array against the
//! run list with a binary-search cursor.

pub mod array_store;
pub mod bitmap_store;
pub mod run_store;

use core::ops::RangeInclusive;

pub use array_store::ArrayStore;
pub use bitmap_store::BitmapStore;
pub use run_store::{Interval, RunStore};

/// Cardinality at/above which an array container promotes to a bitmap
/// container, and at/below which a bitmap container demotes to an array.
pub const ARRAY_LIMIT: u64 = 4096;

/// One container's storage representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Store {
    Array(ArrayStore),
    Bitmap(BitmapStore),
    Run(RunStore),
}

impl Store {
    pub fn new() -> Store {
        Store::Array(ArrayStore::new())
    }

    pub fn len(&self) -> u64 {
        match self {
            Store::Array(a) => a.len(),
            Store::Bitmap(b) => b.len(),
            Store::Run(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: u16) -> bool {
        match self {
            Store::Array(a) => a.contains(index),
            Store::Bitmap(b) => b.contains(index),
            Store::Run(r) => r.contains(index),
        }
    }

    pub fn min(&self) -> Option<u16> {
        match self {
            Store::Array(a) => a.min(),
            Store::Bitmap(b) => b.min(),
            Store::Run(r) => r.min(),
        }
    }

    pub fn max(&self) -> Option<u16> {
        match self {
            Store::Array(a) => a.max(),
            Store::Bitmap(b) => b.max(),
            Store::Run(r) => r.max(),
        }
    }

    pub fn rank(&self, index: u16) -> u64 {
        match self {
            Store::Array(a) => a.rank(index),
            Store::Bitmap(b) => b.rank(index),
            Store::Run(r) => r.rank(index),
        }
    }

    pub fn select(&self, n: u32) -> Option<u16> {
        match self {
            Store::Array(a) => a.select(n),
            Store::Bitmap(b) => b.select(n),
            Store::Run(r) => r.select(n),
        }
    }

    /// Inserts `index`, returning whether it was newly added. The container
    /// may change representation; call [`Store::normalize`] afterwards.
    pub fn insert(&mut self, index: u16) -> bool {
        match self {
            Store::Array(a) => a.insert(index),
            Store::Bitmap(b) => b.insert(index),
            Store::Run(r) => r.insert(index),
        }
    }

    pub fn push(&mut self, index: u16) -> bool {
        match self {
            Store::Array(a) => a.push(index),
            Store::Bitmap(b) => b.push(index),
            Store::Run(r) => {
                if r.max().map_or(true, |max| max < index) {
                    r.insert(index)
                } else {
                    false
                }
            }
        }
    }

    pub fn remove(&mut self, index: u16) -> bool {
        match self {
            Store::Array(a) => a.remove(index),
            Store::Bitmap(b) => b.remove(index),
            Store::Run(r) => r.remove(index),
        }
    }

    pub fn insert_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        match self {
            Store::Array(a) => a.insert_range(range),
            Store::Bitmap(b) => b.insert_range(range),
            Store::Run(r) => r.insert_range(range),
        }
    }

    pub fn remove_range(&mut self, range: RangeInclusive<u16>) -> u64 {
        match self {
            Store::Array(a) => a.remove_range(range),
            Store::Bitmap(b) => b.remove_range(range),
            Store::Run(r) => r.remove_range(range),
        }
    }

    pub fn to_array(&self) -> ArrayStore {
        match self {
            Store::Array(a) => a.clone(),
            Store::Bitmap(b) => b.to_array_store(),
            Store::Run(r) => r.to_array_store(),
        }
    }

    pub fn to_bitmap(&self) -> BitmapStore {
        match self {
            Store::Array(a) => a.to_bitmap_store(),
            Store::Bitmap(b) => b.clone(),
            Store::Run(r) => r.to_bitmap_store(),
        }
    }

    /// Converts to a run container if doing so strictly reduces storage;
    /// only called by the explicit run-optimize operation (never
    /// automatically from a mutation path).
    pub fn run_optimize(&mut self) {
        let candidate = match self {
            Store::Array(a) => RunStore::from_sorted_values(a.as_slice()),
            Store::Bitmap(b) => RunStore::from_sorted_values(&b.to_array_store().into_vec()),
            Store::Run(_) => return,
        };
        let array_len = self.len();
        let run_bytes = 2 + 4 * candidate.run_count() as u64;
        let current_bytes = match self {
            Store::Array(_) => 2 * array_len,
            Store::Bitmap(_) => 8192,
            Store::Run(_) => unreachable!(),
        };
        if run_bytes < current_bytes {
            *self = Store::Run(candidate);
        }
    }

    /// Re-applies the representation thresholds after a
    /// mutation. Never introduces a run container (that only happens via
    /// [`Store::run_optimize`]); may demote a run container to array/bitmap
    /// when runs are no longer cheaper than the alternative.
    pub fn normalize(&mut self) {
        match self {
            Store::Array(a) => {
                if a.len() > ARRAY_LIMIT {
                    *self = Store::Bitmap(a.to_bitmap_store());
                }
            }
            Store::Bitmap(b) => {
                if b.len() <= ARRAY_LIMIT {
                    *self = Store::Array(b.to_array_store());
                }
            }
            Store::Run(r) => {
                let cardinality = r.len();
                let alt_cost = if cardinality <= ARRAY_LIMIT { 2 * cardinality } else { 8192 };
                let run_cost = 2 + 4 * r.run_count() as u64;
                if run_cost >= alt_cost {
                    *self = if cardinality <= ARRAY_LIMIT {
                        Store::Array(r.to_array_store())
                    } else {
                        Store::Bitmap(r.to_bitmap_store())
                    };
                }
            }
        }
    }

    pub fn is_disjoint(&self, other: &Store) -> bool {
        use Store::*;
        match (self, other) {
            (Array(a), Array(b)) => a.is_disjoint(b),
            (Bitmap(a), Bitmap(b)) => a.is_disjoint(b),
            (Run(a), Run(b)) => a.is_disjoint(b),
            (Array(a), Bitmap(b)) | (Bitmap(b), Array(a)) => b.is_disjoint_array(a),
            (Array(a), Run(b)) | (Run(b), Array(a)) => a.iter().all(|&v| !b.contains(v)),
            (Bitmap(a), Run(b)) | (Run(b), Bitmap(a)) => a.is_disjoint(&b.to_coverage_bitmap()),
        }
    }

    pub fn is_subset(&self, other: &Store) -> bool {
        use Store::*;
        match (self, other) {
            (Array(a), Array(b)) => a.is_subset(b),
            (Bitmap(a), Bitmap(b)) => a.is_subset(b),
            (Run(a), Run(b)) => a.is_subset(b),
            (Array(a), Bitmap(b)) => a.iter().all(|&v| b.contains(v)),
            (Bitmap(a), Array(b)) => a.is_subset_array(b),
            (Array(a), Run(b)) => a.iter().all(|&v| b.contains(v)),
            (Run(a), Array(b)) => {
                let array = a.to_array_store();
                array.is_subset(b)
            }
            (Bitmap(a), Run(b)) => a.is_subset(&b.to_coverage_bitmap()),
            (Run(a), Bitmap(b)) => a.to_coverage_bitmap().is_subset(b),
        }
    }

    pub fn intersection_len(&self, other: &Store) -> u64 {
        use Store::*;
        match (self, other) {
            (Array(a), Array(b)) => a.intersection_len(b),
            (Bitmap(a), Bitmap(b)) => a.intersection_len(b),
            (Array(a), Bitmap(b)) | (Bitmap(b), Array(a)) => b.intersection_len_array(a),
            (Run(a), Run(b)) => a.intersect(b).len(),
            (Array(a), Run(b)) | (Run(b), Array(a)) => a.iter().filter(|&&v| b.contains(v)).count() as u64,
            (Bitmap(a), Run(b)) | (Run(b), Bitmap(a)) => a.intersection_len(&b.to_coverage_bitmap()),
        }
    }

    pub fn union(&self, other: &Store) -> Store {
        use Store::*;
        match (self, other) {
            (Array(a), Array(b)) => Array(a.union(b)),
            (Bitmap(a), Bitmap(b)) => Bitmap(a.union(b)),
            (Run(a), Run(b)) => Run(a.union(b)),
            (Array(a), Bitmap(b)) | (Bitmap(b), Array(a)) => {
                let mut out = b.clone();
                for &v in a.iter() {
                    out.insert(v);
                }
                Bitmap(out)
            }
            (Array(a), Run(b)) | (Run(b), Array(a)) => {
                let mut out = b.clone();
                for &v in a.iter() {
                    out.insert(v);
                }
                Run(out)
            }
            (Bitmap(a), Run(b)) | (Run(b), Bitmap(a)) => Bitmap(a.union(&b.to_coverage_bitmap())),
        }
    }

    pub fn intersect(&self, other: &Store) -> Store {
        use Store::*;
        match (self, other) {
            (Array(a), Array(b)) => Array(a.intersect(b)),
            (Bitmap(a), Bitmap(b)) => Bitmap(a.intersect(b)),
            (Run(a), Run(b)) => Run(a.intersect(b)),
            (Array(a), Bitmap(b)) | (Bitmap(b), Array(a)) => {
                Array(ArrayStore::from_vec_unchecked(a.iter().copied().filter(|&v| b.contains(v)).collect()))
            }
            (Array(a), Run(b)) | (Run(b), Array(a)) => {
                Array(ArrayStore::from_vec_unchecked(a.iter().copied().filter(|&v| b.contains(v)).collect()))
            }
            (Bitmap(a), Run(b)) | (Run(b), Bitmap(a)) => Bitmap(a.intersect(&b.to_coverage_bitmap())),
        }
    }

    /// `self - other`. Unlike the other three operators this is not
    /// symmetric, so each pair is handled in a fixed left/right order.
    pub fn difference(&self, other: &Store) -> Store {
        use Store::*;
        match (self, other) {
            (Array(a), Array(b)) => Array(a.difference(b)),
            (Bitmap(a), Bitmap(b)) => Bitmap(a.difference(b)),
            (Run(a), Run(b)) => Run(a.difference(b)),
            (Array(a), Bitmap(b)) => {
                Array(ArrayStore::from_vec_unchecked(a.iter().copied().filter(|&v| !b.contains(v)).collect()))
            }
            (Bitmap(a), Array(b)) => {
                let mut out = a.clone();
                for &v in b.iter() {
                    out.remove(v);
                }
                Bitmap(out)
            }
            (Array(a), Run(b)) => {
                Array(ArrayStore::from_vec_unchecked(a.iter().copied().filter(|&v| !b.contains(v)).collect()))
            }
            (Run(a), Array(b)) => {
                let mut out = a.clone();
                for &v in b.iter() {
                    out.remove(v);
                }
                Run(out)
            }
            (Bitmap(a), Run(b)) => Bitmap(a.difference(&b.to_coverage_bitmap())),
            (Run(a), Bitmap(b)) => Bitmap(a.to_coverage_bitmap().difference(b)),
        }
    }

    pub fn symmetric_difference(&self, other: &Store) -> Store {
        use Store::*;
        match (self, other) {
            (Array(a), Array(b)) => Array(a.symmetric_difference(b)),
            (Bitmap(a), Bitmap(b)) => Bitmap(a.symmetric_difference(b)),
            (Run(a), Run(b)) => Run(a.symmetric_difference(b)),
            (Array(a), Bitmap(b)) | (Bitmap(b), Array(a)) => {
                let mut toggled = b.clone();
                for &v in a.iter() {
                    if toggled.contains(v) {
                        toggled.remove(v);
                    } else {
                        toggled.insert(v);
                    }
                }
                Bitmap(toggled)
            }
            (Array(a), Run(b)) | (Run(b), Array(a)) => {
                Bitmap(a.to_bitmap_store().symmetric_difference(&b.to_coverage_bitmap()))
            }
            (Bitmap(a), Run(b)) | (Run(b), Bitmap(a)) => Bitmap(a.symmetric_difference(&b.to_coverage_bitmap())),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        match self {
            Store::Array(a) => Iter::Array(a.iter()),
            Store::Bitmap(b) => Iter::Bitmap(b.iter()),
            Store::Run(r) => Iter::Run(RunIter { runs: r.runs(), front: 0, back: r.runs().len(), cur_front: None, cur_back: None }),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// A forward-and-reverse iterator over a run container's elements.
pub struct RunIter<'a> {
    runs: &'a [Interval],
    front: usize,
    back: usize,
    cur_front: Option<(u16, u16)>,
    cur_back: Option<(u16, u16)>,
}

impl<'a> Iterator for RunIter<'a> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        loop {
            if let Some((cur, last)) = self.cur_front {
                let out = cur;
                self.cur_front = if cur < last { Some((cur + 1, last)) } else { None };
                return Some(out);
            }
            if self.front >= self.back {
                return None;
            }
            let run = self.runs[self.front];
            self.front += 1;
            self.cur_front = Some((run.start, run.last));
        }
    }
}

impl<'a> DoubleEndedIterator for RunIter<'a> {
    fn next_back(&mut self) -> Option<u16> {
        loop {
            if let Some((start, cur)) = self.cur_back {
                let out = cur;
                self.cur_back = if cur > start { Some((start, cur - 1)) } else { None };
                return Some(out);
            }
            if self.back <= self.front {
                return None;
            }
            self.back -= 1;
            let run = self.runs[self.back];
            self.cur_back = Some((run.start, run.last));
        }
    }
}

/// A forward-and-reverse iterator over a container's elements, regardless
/// of its storage representation.
pub enum Iter<'a> {
    Array(core::slice::Iter<'a, u16>),
    Bitmap(bitmap_store::BitmapIter<'a>),
    Run(RunIter<'a>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        match self {
            Iter::Array(it) => it.next().copied(),
            Iter::Bitmap(it) => it.next(),
            Iter::Run(it) => it.next(),
        }
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<u16> {
        match self {
            Iter::Array(it) => it.next_back().copied(),
            Iter::Bitmap(it) => it.next_back(),
            Iter::Run(it) => it.next_back(),
        }
    }
}
