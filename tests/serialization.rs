use rbitset::RoaringBitmap;

fn serialize_and_deserialize(bitmap: &RoaringBitmap) -> RoaringBitmap {
    let mut buffer = vec![];
    bitmap.serialize_into(&mut buffer).unwrap();
    assert_eq!(buffer.len(), bitmap.serialized_size());
    RoaringBitmap::deserialize_from(&buffer[..]).unwrap()
}

#[test]
fn empty() {
    let original = RoaringBitmap::new();
    assert_eq!(original, serialize_and_deserialize(&original));
}

#[test]
fn single_array_container() {
    let original: RoaringBitmap = (1..4).collect();
    assert_eq!(original, serialize_and_deserialize(&original));
}

#[test]
fn single_bitmap_container() {
    let original: RoaringBitmap = (0..10_000).collect();
    assert_eq!(original, serialize_and_deserialize(&original));
}

#[test]
fn run_containers_after_optimize() {
    let mut original = RoaringBitmap::new();
    original.insert_range(0..200_000).unwrap();
    original.run_optimize();
    let roundtripped = serialize_and_deserialize(&original);
    assert_eq!(original, roundtripped);
    assert_eq!(roundtripped.stats().n_run_containers, original.stats().n_run_containers);
}

#[test]
fn mixed_container_kinds_with_offset_table() {
    // five or more chunks triggers the no-runs offset table.
    let original: RoaringBitmap = (0..10)
        .chain(100_000..110_000)
        .chain(200_000..200_010)
        .chain(300_000..300_010)
        .chain(400_000..400_010)
        .collect();
    assert_eq!(original, serialize_and_deserialize(&original));
}

#[test]
fn run_optimize_never_grows_serialized_size() {
    let mut bitmap = RoaringBitmap::new();
    bitmap.insert_range(0..50_000).unwrap();
    let before = bitmap.serialized_size();
    bitmap.run_optimize();
    assert!(bitmap.serialized_size() <= before);
}
