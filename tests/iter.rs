use rbitset::RoaringBitmap;

#[test]
fn iter_yields_ascending() {
    let bitmap: RoaringBitmap = [5u32, 1, 3, 70_000, 2].into_iter().collect();
    let values: Vec<u32> = bitmap.iter().collect();
    assert_eq!(values, vec![1, 2, 3, 5, 70_000]);
}

#[test]
fn iter_rev_yields_descending() {
    let bitmap: RoaringBitmap = (0..2000).chain(70_000..70_010).collect();
    let forward: Vec<u32> = bitmap.iter().collect();
    let mut backward: Vec<u32> = bitmap.iter().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn into_iter_consumes_and_matches_borrowed_iter() {
    let bitmap: RoaringBitmap = (0..5000).collect();
    let via_ref: Vec<u32> = (&bitmap).into_iter().collect();
    let via_owned: Vec<u32> = bitmap.into_iter().collect();
    assert_eq!(via_ref, via_owned);
}

#[test]
fn from_iter_roundtrips_through_extend() {
    let mut bitmap: RoaringBitmap = (0..10).collect();
    bitmap.extend(10..20);
    let values: Vec<u32> = bitmap.iter().collect();
    assert_eq!(values, (0..20).collect::<Vec<u32>>());
}

#[test]
fn next_many_batches_without_skipping() {
    let bitmap: RoaringBitmap = (0..10_000).collect();
    let mut iter = bitmap.many_iter();
    let mut buf = [0u32; 256];
    let mut collected = Vec::new();
    loop {
        let n = iter.next_many(&mut buf);
        if n == 0 {
            break;
        }
        collected.extend_from_slice(&buf[..n]);
    }
    assert_eq!(collected, (0..10_000).collect::<Vec<u32>>());
}
