//! Error kinds returned by fallible operations on [`crate::RoaringBitmap`].

use core::fmt;

/// The error type for fallible bitmap operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `select(k)` was called with `k` greater than or equal to the cardinality.
    #[error("rank {requested} is out of range for a bitmap of cardinality {cardinality}")]
    OutOfRange {
        /// The rank that was requested.
        requested: u64,
        /// The cardinality of the bitmap at the time of the request.
        cardinality: u64,
    },

    /// The serialized buffer could not be decoded into a bitmap.
    #[error("malformed serialized bitmap: {reason}")]
    MalformedSerialization {
        /// A human-readable description of what was wrong with the buffer.
        reason: MalformedReason,
    },

    /// A range argument fell outside the representable 33-bit universe.
    #[error("range upper bound {hi} exceeds the maximum representable bound 2^32")]
    InvalidRange {
        /// The offending upper bound.
        hi: u64,
    },
}

/// The specific reason a serialized buffer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The leading cookie did not match either known format.
    UnknownCookie,
    /// The buffer ended before all declared fields were read.
    TruncatedBuffer,
    /// The run-container bitset length disagreed with the descriptor count.
    RunBitsetLengthMismatch,
    /// A container's declared cardinality did not match the bytes that follow it.
    CardinalityPayloadMismatch,
    /// Chunk high-keys were not strictly ascending.
    HighKeysNotAscending,
    /// A run container's intervals were not ascending and non-adjacent.
    RunsNotNormalized,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MalformedReason::UnknownCookie => "unrecognized format cookie",
            MalformedReason::TruncatedBuffer => "buffer ended before declared fields were read",
            MalformedReason::RunBitsetLengthMismatch => {
                "run-container bitset length disagrees with descriptor count"
            }
            MalformedReason::CardinalityPayloadMismatch => {
                "container cardinality disagrees with payload length"
            }
            MalformedReason::HighKeysNotAscending => "chunk high-keys are not strictly ascending",
            MalformedReason::RunsNotNormalized => {
                "run container intervals are not ascending and non-adjacent"
            }
        };
        f.write_str(msg)
    }
}

/// A convenient alias for `Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
