//! Protocol revisions
//!
//! The wire version byte doubles as the enum value, so the values here are
//! dictated by the protocol and must not be renumbered.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Supported protocol revisions, ordered.
///
/// Every version-indexed dispatch table carries one row per variant. The
/// ordering is meaningful: several wire layouts changed at a version
/// boundary and are selected with an ordered comparison (see
/// [`crate::wire::varlen`]).
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Version {
    V1_0 = 1,
    V1_1 = 2,
    V1_2 = 3,
    V1_3 = 4,
}

impl Version {
    /// Number of supported revisions; the row count of every dispatch table.
    pub const COUNT: usize = 4;

    /// Row index into a version-indexed table.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// All supported revisions in wire order.
    pub const ALL: [Version; Version::COUNT] =
        [Version::V1_0, Version::V1_1, Version::V1_2, Version::V1_3];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_ordering_follows_wire_bytes() {
        assert!(Version::V1_0 < Version::V1_1);
        assert!(Version::V1_1 < Version::V1_2);
        assert!(Version::V1_2 < Version::V1_3);
    }

    #[test]
    fn version_round_trips_through_wire_byte() {
        for v in Version::ALL {
            let byte: u8 = v.into();
            assert_eq!(Version::try_from(byte).unwrap(), v);
        }
    }

    #[test]
    fn unknown_wire_byte_is_rejected() {
        assert!(Version::try_from(0u8).is_err());
        assert!(Version::try_from(5u8).is_err());
    }

    #[test]
    fn index_is_dense_from_zero() {
        for (i, v) in Version::ALL.into_iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }
}
