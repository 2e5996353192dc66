use rbitset::RoaringBitmap;

#[test]
fn empty_is_disjoint_from_anything() {
    let empty = RoaringBitmap::new();
    let other: RoaringBitmap = (0..1000).collect();
    assert!(empty.is_disjoint(&other));
}

#[test]
fn overlapping_is_not_disjoint() {
    let a: RoaringBitmap = (0..2000).collect();
    let b: RoaringBitmap = (1500..3000).collect();
    assert!(!a.is_disjoint(&b));
}

#[test]
fn disjoint_across_many_chunks() {
    let a: RoaringBitmap = (0..2000).chain(1_000_000..1_002_000).collect();
    let b: RoaringBitmap = (2000..4000).chain(2_000_000..2_002_000).collect();
    assert!(a.is_disjoint(&b));
}
