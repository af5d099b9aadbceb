//! Multi-version wire type and length resolution
//!
//! This crate is the layer of an OpenFlow-style protocol stack where raw
//! wire bytes are interpreted against version-dependent layouts: the same
//! internal identifier encodes as different wire type codes per protocol
//! revision, and a reserved "experimenter" code escapes into vendor-defined
//! sub-formats that carry their own nested type tag.
//!
//! ```text
//! TLV16 object                      OXM object
//! ┌────────┬────────┬─────────┐     ┌──────────────────┬──────┬─────────┐
//! │type u16│len  u16│ body …  │     │masked type 24 bit│len u8│ body …  │
//! └────────┴────────┴─────────┘     └──────────────────┴──────┴─────────┘
//!
//! Experimenter body (wire type == 0xffff)
//! ┌────────┬────────┬───────────────┬──────────────────┬─────────┐
//! │type u16│len  u16│ vendor id u32 │ subtype u16/u32  │  …      │
//! └────────┴────────┴───────────────┴──────────────────┴─────────┘
//! ```
//!
//! Everything here is a pure function of the buffer contents plus
//! (version, family): views allocate nothing, mutation is in-place
//! overwrite of caller-owned bytes, and the dispatch tables are immutable
//! process-wide data. Concurrent access to one buffer is the caller's
//! problem to serialize; the read-modify-write of an OXM header is not
//! atomic.
//!
//! An invalid lookup (a wire code with no meaning in this revision, an
//! identifier with no encoding, a missing parent) is a caller bug and a
//! panic. The `try_` accessor twins return [`WireError`] instead, for
//! framing stages that validate before asserting. The one soft case is an
//! experimenter extension unknown to this build: it resolves to the
//! family's generic experimenter identifier, never an error.

use thiserror::Error;

pub mod buffer;
pub mod extension;
pub mod kind;
pub mod object;
pub mod oxm;
pub mod typemap;
pub mod version;
pub mod wire;

pub use buffer::WireBuffer;
pub use kind::{
    ActionIdKind, ActionKind, Family, HelloElemKind, InstructionKind, Kind, MeterBandKind,
    OxmKind, QueuePropKind, TableFeaturePropKind,
};
pub use object::{Parent, WireObject};
pub use version::Version;

/// The reserved wire type code meaning "experimenter extension follows",
/// constant across TLV16 families and revisions.
pub const EXPERIMENTER_WIRE_TYPE: u16 = 0xffff;

/// Contract violations surfaced by the `try_` accessor forms. The
/// panicking accessors wrap these; none of them is a recoverable decode
/// state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("no {family:?} wire type {code:#06x} in {version:?}")]
    UnknownWireType {
        family: Family,
        version: Version,
        code: u16,
    },

    #[error("no OXM with masked type {masked_type:#08x} in {version:?}")]
    UnknownOxmType { masked_type: u32, version: Version },

    #[error("{kind:?} has no {family:?} wire encoding in {version:?}")]
    UnmappedKind {
        family: Family,
        version: Version,
        kind: Kind,
    },

    #[error("length {len} exceeds the field maximum {max}")]
    LengthOutOfRange { len: usize, max: usize },

    #[error("{family:?} requires an enclosing parent object")]
    MissingParent { family: Family },

    #[error("expected a {expected:?} parent, found {found:?}")]
    ParentMismatch { expected: Family, found: Family },

    #[error("parent length {length} is shorter than its {header}-byte fixed header")]
    LengthUnderflow { length: u16, header: usize },

    #[error("{family:?} objects do not carry a wire type")]
    NoWireType { family: Family },

    #[error("{family:?} length is derived from the parent and cannot be set")]
    DerivedLength { family: Family },

    #[error("cannot write a {kind:?} identifier into a {object:?} object")]
    FamilyMismatch { object: Family, kind: Family },
}
