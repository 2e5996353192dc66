//! Optional `serde` bridge (ambient, gated behind the `serde` feature):
//! (de)serializes through the same byte layout as
//! [`RoaringBitmap::serialize_into`]/[`RoaringBitmap::deserialize_from`].

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RoaringBitmap;

impl Serialize for RoaringBitmap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = Vec::with_capacity(self.serialized_size());
        self.serialize_into(&mut buf).map_err(serde::ser::Error::custom)?;
        serializer.serialize_bytes(&buf)
    }
}

impl<'de> Deserialize<'de> for RoaringBitmap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BitmapVisitor;

        impl<'de> Visitor<'de> for BitmapVisitor {
            type Value = RoaringBitmap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a serialized RoaringBitmap")
            }

            fn visit_bytes<E: serde::de::Error>(self, bytes: &[u8]) -> Result<RoaringBitmap, E> {
                RoaringBitmap::deserialize_from(bytes).map_err(serde::de::Error::custom)
            }

            // Some formats (e.g. JSON) serialize byte slices as sequences.
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RoaringBitmap, A::Error> {
                let mut bytes = Vec::new();
                while let Some(byte) = seq.next_element()? {
                    bytes.push(byte);
                }
                RoaringBitmap::deserialize_from(&bytes[..]).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(BitmapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_json_roundtrip() {
        let rb: RoaringBitmap = [1u32, 70_000, 140_000].into_iter().collect();
        let json = serde_json::to_vec(&rb).unwrap();
        let back: RoaringBitmap = serde_json::from_slice(&json).unwrap();
        assert_eq!(rb, back);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let rb: RoaringBitmap = (0..10_000u32).collect();
        let buf = bincode::serialize(&rb).unwrap();
        let back: RoaringBitmap = bincode::deserialize(&buf).unwrap();
        assert_eq!(rb, back);
    }
}
