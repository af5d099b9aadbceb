//! Wire-backed object views
//!
//! A [`WireObject`] owns no bytes: it is a view over a region of a
//! caller-supplied [`WireBuffer`], carrying the version, family and base
//! offset needed to interpret that region. Views are transient: built on
//! demand, used for a handful of accessor calls, dropped. Nested objects
//! (a list and its elements) are separate views over overlapping regions
//! of the same buffer.

use crate::buffer::WireBuffer;
use crate::kind::Family;
use crate::version::Version;

/// Snapshot of the enclosing object, for lengths that are derived from the
/// parent rather than stored locally.
#[derive(Debug, Clone, Copy)]
pub struct Parent {
    pub family: Family,
    /// The parent's own declared wire length. The parent must already be
    /// populated when a derived length is read.
    pub wire_length: u16,
}

/// A view over one protocol object inside a wire buffer.
pub struct WireObject<'b> {
    buf: &'b mut WireBuffer,
    version: Version,
    family: Family,
    base: usize,
    parent: Option<Parent>,
}

impl<'b> WireObject<'b> {
    pub fn new(buf: &'b mut WireBuffer, version: Version, family: Family, base: usize) -> Self {
        Self {
            buf,
            version,
            family,
            base,
            parent: None,
        }
    }

    /// View with a parent snapshot attached; required for families whose
    /// length is derived from the enclosing object.
    pub fn with_parent(
        buf: &'b mut WireBuffer,
        version: Version,
        family: Family,
        base: usize,
        parent: Parent,
    ) -> Self {
        Self {
            buf,
            version,
            family,
            base,
            parent: Some(parent),
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn parent(&self) -> Option<Parent> {
        self.parent
    }

    /// Translate an offset relative to this object's base into an absolute
    /// buffer offset.
    pub fn absolute_offset(&self, relative: usize) -> usize {
        self.base + relative
    }

    pub fn buffer(&self) -> &WireBuffer {
        self.buf
    }

    pub fn buffer_mut(&mut self) -> &mut WireBuffer {
        self.buf
    }
}
