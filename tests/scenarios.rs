use rbitset::RoaringBitmap;

#[test]
fn s1_literal_values_round_trip_and_export() {
    let mut rb = RoaringBitmap::new();
    for v in [5580u32, 33722, 44031, 57276, 83097] {
        rb.insert(v);
    }
    assert_eq!(rb.len(), 5);

    let mut bytes = Vec::with_capacity(rb.serialized_size());
    rb.serialize_into(&mut bytes).unwrap();
    let back = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    assert_eq!(rb, back);

    let values: Vec<u32> = rb.iter().collect();
    assert_eq!(values, vec![5580, 33722, 44031, 57276, 83097]);
}

#[test]
fn s2_run_optimize_whole_low_chunks() {
    let mut rb = RoaringBitmap::new();
    rb.insert_range(0..(1 << 17)).unwrap();
    rb.run_optimize();

    let stats = rb.stats();
    assert_eq!(stats.n_run_containers, 2);
    assert_eq!(stats.n_values_run_containers, 1 << 17);
    assert_eq!(rb.min(), Some(0));
    assert_eq!(rb.max(), Some((1 << 17) - 1));
}

#[test]
fn s3_sparse_prefix_then_dense_tail() {
    let mut rb = RoaringBitmap::new();
    rb.insert(2);
    rb.insert(4);
    rb.insert(8);
    for i in 32..131072 {
        rb.insert(i);
    }
    rb.run_optimize();

    assert_eq!(rb.min(), Some(2));
    assert_eq!(rb.max(), Some(131071));
}

#[test]
fn s4_and_not_isolates_tail_range() {
    let mut b1 = RoaringBitmap::new();
    b1.insert_range(0..60000).unwrap();
    let mut b2 = RoaringBitmap::new();
    b2.insert_range(59990..60010).unwrap();

    b2 -= &b1;

    let expected: RoaringBitmap = (60000..60010).collect();
    assert_eq!(b2, expected);
}

#[test]
fn s5_remove_range_boundary_at_u32_max() {
    let mut b = RoaringBitmap::new();
    b.insert(u32::MAX);

    b.remove_range(0..u32::MAX as u64).unwrap();
    assert!(b.contains(u32::MAX));

    b.remove_range(0..(u32::MAX as u64 + 1)).unwrap();
    assert!(b.is_empty());
}

#[test]
fn s6_flip_empty_over_full_range() {
    let mut b = RoaringBitmap::new();
    let max_range = 1u64 << 32;
    b.flip(0..max_range).unwrap();
    assert_eq!(b.len(), max_range);
}

#[test]
fn s7_flip_narrow_range_after_insert() {
    let mut b = RoaringBitmap::new();
    b.insert(0);
    b.flip(1..2).unwrap();

    let values: Vec<u32> = b.iter().collect();
    assert_eq!(values, vec![0, 1]);
}

#[test]
fn s8_disjoint_union_and_self_xor() {
    let b1: RoaringBitmap = (0..4000).collect();
    let b2: RoaringBitmap = (1_000_000..1_004_000).collect();

    let union = &b1 | &b2;
    assert_eq!(union.len(), 8000);

    let xor = &b1 ^ &b1;
    assert!(xor.is_empty());
}
