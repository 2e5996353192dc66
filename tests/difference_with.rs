use rbitset::RoaringBitmap;

#[test]
fn array_minus_array() {
    let mut bitmap1: RoaringBitmap = (0..3000).collect();
    let bitmap2: RoaringBitmap = (1000..2000).collect();
    let bitmap3: RoaringBitmap = (0..1000).chain(2000..3000).collect();

    bitmap1 -= &bitmap2;

    assert_eq!(bitmap1, bitmap3);
}

#[test]
fn self_minus_self_is_empty() {
    let bitmap1: RoaringBitmap = (0..2000).collect();
    let mut bitmap2 = bitmap1.clone();

    bitmap2 -= &bitmap1;

    assert!(bitmap2.is_empty());
}

#[test]
fn minus_disjoint_is_unchanged() {
    let bitmap1: RoaringBitmap = (0..2000).collect();
    let mut bitmap2 = bitmap1.clone();
    let bitmap3: RoaringBitmap = (1_000_000..1_002_000).collect();

    bitmap2 -= &bitmap3;

    assert_eq!(bitmap1, bitmap2);
}
