//! Serialization: the portable byte layout, little-endian
//! throughout, with a format cookie distinguishing the "no-run containers"
//! form from the "may-have-run containers" form.

use std::io;

use bytemuck::cast_slice_mut;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::container::Container;
use crate::error::{Error, MalformedReason, Result};
use crate::store::{ArrayStore, BitmapStore, RunStore, Store, ARRAY_LIMIT};

use super::RoaringBitmap;

/// Cookie for bitmaps guaranteed to hold no run containers.
const NO_RUN_COOKIE: u32 = 0x0000_3B3B;
/// Low 16 bits of the cookie word for bitmaps that may hold run containers;
/// the high 16 bits carry `chunk_count - 1`.
const RUN_COOKIE_LOW: u32 = 0x3B30;
/// Chunk count at/above which the no-runs form carries an offset table.
const NO_OFFSET_THRESHOLD: usize = 4;
/// Number of 64-bit words in a bitmap container's payload.
const BITMAP_WORDS: usize = 1024;

fn truncated(_: io::Error) -> Error {
    Error::MalformedSerialization { reason: MalformedReason::TruncatedBuffer }
}

impl RoaringBitmap {
    /// Returns the exact number of bytes [`serialize_into`](Self::serialize_into)
    /// would write, so callers can pre-size a buffer.
    pub fn serialized_size(&self) -> usize {
        let has_runs = self.containers.iter().any(|c| matches!(c.store, Store::Run(_)));
        let n = self.containers.size();

        let header = if has_runs { 4 + (n + 7) / 8 } else { 8 };
        let descriptors = 4 * n;
        let offsets = if !has_runs && n >= NO_OFFSET_THRESHOLD { 4 * n } else { 0 };
        let payloads: usize = self
            .containers
            .iter()
            .map(|c| match &c.store {
                Store::Array(a) => 2 * a.as_slice().len(),
                Store::Bitmap(_) => 8 * BITMAP_WORDS,
                Store::Run(r) => 2 + 4 * r.run_count(),
            })
            .sum();

        header + descriptors + offsets + payloads
    }

    /// Serializes this bitmap into the portable format described in
    /// this module: little-endian throughout, a format cookie chosen
    /// automatically depending on whether any container is run-encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let mut bytes = Vec::with_capacity(rb1.serialized_size());
    /// rb1.serialize_into(&mut bytes).unwrap();
    /// let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    /// assert_eq!(rb1, rb2);
    /// ```
    pub fn serialize_into<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        let n = self.containers.size();
        let has_runs = self.containers.iter().any(|c| matches!(c.store, Store::Run(_)));

        if has_runs {
            let cookie = ((n as u32 - 1) << 16) | RUN_COOKIE_LOW;
            writer.write_u32::<LittleEndian>(cookie)?;
            let mut bitset = vec![0u8; (n + 7) / 8];
            for (i, container) in self.containers.iter().enumerate() {
                if matches!(container.store, Store::Run(_)) {
                    bitset[i / 8] |= 1 << (i % 8);
                }
            }
            writer.write_all(&bitset)?;
        } else {
            writer.write_u32::<LittleEndian>(NO_RUN_COOKIE)?;
            writer.write_u32::<LittleEndian>(n as u32)?;
        }

        for container in self.containers.iter() {
            writer.write_u16::<LittleEndian>(container.key)?;
            writer.write_u16::<LittleEndian>((container.len() - 1) as u16)?;
        }

        if !has_runs && n >= NO_OFFSET_THRESHOLD {
            let mut offset = 8 + 8 * n as u32;
            for container in self.containers.iter() {
                writer.write_u32::<LittleEndian>(offset)?;
                offset += match &container.store {
                    Store::Array(a) => 2 * a.as_slice().len() as u32,
                    Store::Bitmap(_) => 8 * BITMAP_WORDS as u32,
                    Store::Run(_) => unreachable!("has_runs is false"),
                };
            }
        }

        for container in self.containers.iter() {
            match &container.store {
                Store::Array(a) => {
                    for &value in a.as_slice() {
                        writer.write_u16::<LittleEndian>(value)?;
                    }
                }
                Store::Bitmap(b) => {
                    for &word in b.as_array() {
                        writer.write_u64::<LittleEndian>(word)?;
                    }
                }
                Store::Run(r) => {
                    writer.write_u16::<LittleEndian>(r.run_count() as u16)?;
                    for run in r.runs() {
                        writer.write_u16::<LittleEndian>(run.start)?;
                        writer.write_u16::<LittleEndian>(run.last - run.start)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Deserializes a bitmap from the format written by
    /// [`serialize_into`](Self::serialize_into). Reads both the no-runs and
    /// has-runs cookies, and both sub-forms (with and without an offset
    /// table) of the no-runs cookie. Every malformed-input case is detected
    /// eagerly; on error, no partial bitmap is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbitset::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let mut bytes = vec![];
    /// rb1.serialize_into(&mut bytes).unwrap();
    /// let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    /// assert_eq!(rb1, rb2);
    /// ```
    pub fn deserialize_from<R: io::Read>(mut reader: R) -> Result<RoaringBitmap> {
        let cookie = reader.read_u32::<LittleEndian>().map_err(truncated)?;

        let (size, run_flags) = if cookie == NO_RUN_COOKIE {
            let size = reader.read_u32::<LittleEndian>().map_err(truncated)? as usize;
            (size, None)
        } else if cookie & 0xFFFF == RUN_COOKIE_LOW {
            let size = (cookie >> 16) as usize + 1;
            let mut bitset = vec![0u8; (size + 7) / 8];
            reader.read_exact(&mut bitset).map_err(truncated)?;
            let padding_bits = bitset.len() * 8 - size;
            if padding_bits > 0 {
                let last = *bitset.last().unwrap();
                if last & (0xFFu8 << (8 - padding_bits)) != 0 {
                    return Err(Error::MalformedSerialization { reason: MalformedReason::RunBitsetLengthMismatch });
                }
            }
            let flags: Vec<bool> = (0..size).map(|i| bitset[i / 8] & (1 << (i % 8)) != 0).collect();
            (size, Some(flags))
        } else {
            return Err(Error::MalformedSerialization { reason: MalformedReason::UnknownCookie });
        };

        if size > u16::MAX as usize + 1 {
            return Err(Error::MalformedSerialization { reason: MalformedReason::TruncatedBuffer });
        }

        let mut descriptors = Vec::with_capacity(size);
        let mut prev_key: Option<u16> = None;
        for _ in 0..size {
            let key = reader.read_u16::<LittleEndian>().map_err(truncated)?;
            let cardinality = u64::from(reader.read_u16::<LittleEndian>().map_err(truncated)?) + 1;
            if let Some(prev) = prev_key {
                if key <= prev {
                    return Err(Error::MalformedSerialization { reason: MalformedReason::HighKeysNotAscending });
                }
            }
            prev_key = Some(key);
            descriptors.push((key, cardinality));
        }

        if run_flags.is_none() && size >= NO_OFFSET_THRESHOLD {
            let mut discard = vec![0u8; 4 * size];
            reader.read_exact(&mut discard).map_err(truncated)?;
        }

        let mut containers = Vec::with_capacity(size);
        for (i, (key, cardinality)) in descriptors.into_iter().enumerate() {
            let is_run = run_flags.as_ref().is_some_and(|flags| flags[i]);

            let store = if is_run {
                let run_count = reader.read_u16::<LittleEndian>().map_err(truncated)? as usize;
                let mut runs = Vec::with_capacity(run_count);
                let mut prev_last: Option<u32> = None;
                let mut total = 0u64;
                for _ in 0..run_count {
                    let start = reader.read_u16::<LittleEndian>().map_err(truncated)?;
                    let length_minus1 = reader.read_u16::<LittleEndian>().map_err(truncated)?;
                    let last = start as u32 + length_minus1 as u32;
                    if last > u16::MAX as u32 {
                        return Err(Error::MalformedSerialization { reason: MalformedReason::RunsNotNormalized });
                    }
                    if let Some(prev) = prev_last {
                        if start as u32 <= prev + 1 {
                            return Err(Error::MalformedSerialization { reason: MalformedReason::RunsNotNormalized });
                        }
                    }
                    total += length_minus1 as u64 + 1;
                    prev_last = Some(last);
                    runs.push(crate::store::Interval::new(start, last as u16));
                }
                if total != cardinality {
                    return Err(Error::MalformedSerialization { reason: MalformedReason::CardinalityPayloadMismatch });
                }
                Store::Run(RunStore::from_vec_unchecked(runs))
            } else if cardinality <= ARRAY_LIMIT {
                let mut values = vec![0u16; cardinality as usize];
                reader.read_exact(cast_slice_mut(&mut values)).map_err(truncated)?;
                values.iter_mut().for_each(|v| *v = u16::from_le(*v));
                if !values.windows(2).all(|w| w[0] < w[1]) {
                    return Err(Error::MalformedSerialization { reason: MalformedReason::CardinalityPayloadMismatch });
                }
                Store::Array(ArrayStore::from_vec_unchecked(values))
            } else {
                let mut words = Box::new([0u64; BITMAP_WORDS]);
                reader.read_exact(cast_slice_mut(&mut words[..])).map_err(truncated)?;
                words.iter_mut().for_each(|w| *w = u64::from_le(*w));
                let popcount: u64 = words.iter().map(|w| w.count_ones() as u64).sum();
                if popcount != cardinality {
                    return Err(Error::MalformedSerialization { reason: MalformedReason::CardinalityPayloadMismatch });
                }
                Store::Bitmap(BitmapStore::from_unchecked(cardinality, words))
            };

            containers.push(Container { key, store });
        }

        Ok(RoaringBitmap { containers: containers.into_iter().collect() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_array_containers() {
        let rb1: RoaringBitmap = [5580u32, 33722, 44031, 57276, 83097].into_iter().collect();
        let mut bytes = Vec::with_capacity(rb1.serialized_size());
        rb1.serialize_into(&mut bytes).unwrap();
        assert_eq!(bytes.len(), rb1.serialized_size());
        let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
        assert_eq!(rb1, rb2);
    }

    #[test]
    fn test_roundtrip_bitmap_container() {
        let rb1: RoaringBitmap = (0..10_000u32).collect();
        let mut bytes = vec![];
        rb1.serialize_into(&mut bytes).unwrap();
        let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
        assert_eq!(rb1, rb2);
    }

    #[test]
    fn test_roundtrip_run_containers() {
        let mut rb1 = RoaringBitmap::new();
        rb1.insert_range(0..(1 << 17)).unwrap();
        rb1.run_optimize();
        let mut bytes = vec![];
        rb1.serialize_into(&mut bytes).unwrap();
        let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
        assert_eq!(rb1, rb2);
        assert_eq!(rb2.stats().n_run_containers, 2);
    }

    #[test]
    fn test_roundtrip_empty() {
        let rb1 = RoaringBitmap::new();
        let mut bytes = vec![];
        rb1.serialize_into(&mut bytes).unwrap();
        let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
        assert_eq!(rb1, rb2);
    }

    #[test]
    fn test_unknown_cookie_rejected() {
        let bytes = [0xFFu8, 0xFF, 0xFF, 0xFF];
        let err = RoaringBitmap::deserialize_from(&bytes[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedSerialization { reason: MalformedReason::UnknownCookie }
        ));
    }

    #[test]
    fn test_truncated_buffer_rejected() {
        let rb1: RoaringBitmap = (1..4).collect();
        let mut bytes = vec![];
        rb1.serialize_into(&mut bytes).unwrap();
        bytes.truncate(bytes.len() - 2);
        let err = RoaringBitmap::deserialize_from(&bytes[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedSerialization { reason: MalformedReason::TruncatedBuffer }
        ));
    }

    #[test]
    fn test_non_ascending_high_keys_rejected() {
        // Two descriptors with the same high-key, zero-cardinality payload.
        let mut bytes = vec![];
        bytes.extend_from_slice(&NO_RUN_COOKIE.to_le_bytes());
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        let err = RoaringBitmap::deserialize_from(&bytes[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedSerialization { reason: MalformedReason::HighKeysNotAscending }
        ));
    }
}
