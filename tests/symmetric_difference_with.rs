use rbitset::RoaringBitmap;

#[test]
fn overlapping_arrays() {
    let mut bitmap1: RoaringBitmap = (0..3000).collect();
    let bitmap2: RoaringBitmap = (2000..4000).collect();
    let bitmap3: RoaringBitmap = (0..2000).chain(3000..4000).collect();

    bitmap1 ^= &bitmap2;

    assert_eq!(bitmap1, bitmap3);
}

#[test]
fn self_xor_self_is_empty() {
    let mut bitmap1: RoaringBitmap = (0..10_000).collect();
    let bitmap2 = bitmap1.clone();

    bitmap1 ^= &bitmap2;

    assert!(bitmap1.is_empty());
}

#[test]
fn disjoint_is_union() {
    let mut bitmap1: RoaringBitmap = (0..2000).collect();
    let bitmap2: RoaringBitmap = (2000..4000).collect();
    let bitmap3: RoaringBitmap = (0..4000).collect();

    bitmap1 ^= &bitmap2;

    assert_eq!(bitmap1, bitmap3);
}
