//! Version-indexed dispatch tables
//!
//! One table per TLV16 family, two directions each: wire type code to
//! internal identifier and back. Rows are per-revision and partial:
//! an entry that does not exist in a given revision is `None`, which is
//! distinct from every real identifier. Looking up an absent entry is
//! detectable by the caller instead of silently resolving to whatever
//! identifier happens to sit at value zero.
//!
//! The experimenter sentinel (`0xffff`) never appears in a forward row;
//! the resolvers check for it before consulting the table. It does appear
//! in inverse rows, for every identifier that encodes as a vendor
//! extension.
//!
//! Table content is protocol-specification data (see `tables`); this
//! module owns only the lookup contract.

mod tables;

pub use tables::{
    ACTION, ACTION_ID, HELLO_ELEM, INSTRUCTION, METER_BAND, QUEUE_PROP, TABLE_FEATURE_PROP,
};

use crate::version::Version;

/// Forward and inverse wire-type mapping for one family.
///
/// `by_code` rows are indexed by wire type code, `by_kind` rows by the
/// identifier's discriminant. Both are immutable process-wide data, safe
/// to share across threads without synchronization.
pub struct TypeMap<K: 'static> {
    pub(crate) by_code: [&'static [Option<K>]; Version::COUNT],
    pub(crate) by_kind: [&'static [Option<u16>]; Version::COUNT],
}

impl<K: Copy + Into<u16>> TypeMap<K> {
    /// Resolve a wire type code for `version`, or `None` when the code is
    /// not defined in that revision.
    pub fn kind_of(&self, version: Version, code: u16) -> Option<K> {
        self.by_code[version.index()]
            .get(code as usize)
            .copied()
            .flatten()
    }

    /// Resolve an identifier to its wire type code for `version`, or
    /// `None` when the identifier has no encoding in that revision.
    pub fn code_of(&self, version: Version, kind: K) -> Option<u16> {
        let idx: u16 = kind.into();
        self.by_kind[version.index()]
            .get(idx as usize)
            .copied()
            .flatten()
    }
}
