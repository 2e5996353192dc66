use rbitset::RoaringBitmap;

#[test]
fn array_with_array() {
    let mut bitmap1: RoaringBitmap = (0..2000).collect();
    let bitmap2: RoaringBitmap = (1000..3000).collect();
    let bitmap3: RoaringBitmap = (1000..2000).collect();

    bitmap1 &= &bitmap2;

    assert_eq!(bitmap1, bitmap3);
}

#[test]
fn bitmap_with_array() {
    let mut bitmap1: RoaringBitmap = (0..6000).collect();
    let bitmap2: RoaringBitmap = (4000..5000).collect();
    let bitmap3: RoaringBitmap = (4000..5000).collect();

    bitmap1 &= &bitmap2;

    assert_eq!(bitmap1, bitmap3);
}

#[test]
fn disjoint_is_empty() {
    let mut bitmap1: RoaringBitmap = (0..2000).collect();
    let bitmap2: RoaringBitmap = (1_000_000..1_002_000).collect();

    bitmap1 &= &bitmap2;

    assert!(bitmap1.is_empty());
}

#[test]
fn run_with_bitmap() {
    let mut bitmap1 = RoaringBitmap::new();
    bitmap1.insert_range(0..10_000).unwrap();
    bitmap1.run_optimize();
    let bitmap2: RoaringBitmap = (5000..15_000).collect();
    let bitmap3: RoaringBitmap = (5000..10_000).collect();

    bitmap1 &= &bitmap2;

    assert_eq!(bitmap1, bitmap3);
}
