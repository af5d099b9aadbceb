//! OXM header codec
//!
//! Type and length share one 32-bit word, so every setter is
//! read-modify-write: the whole word is read, one part replaced, and the
//! word written back. No path leaves the header half-written.

use crate::kind::{Kind, OxmKind};
use crate::object::WireObject;
use crate::oxm;
use crate::{Family, WireError};

pub const HEADER_OFFSET: usize = 0;

fn header(obj: &WireObject<'_>) -> u32 {
    obj.buffer().get_u32(obj.absolute_offset(HEADER_OFFSET))
}

fn set_header(obj: &mut WireObject<'_>, word: u32) {
    let at = obj.absolute_offset(HEADER_OFFSET);
    obj.buffer_mut().set_u32(at, word);
}

/// Length from the low 8 bits of the header.
pub fn wire_length(obj: &WireObject<'_>) -> u16 {
    (header(obj) & 0xff) as u16
}

/// Replace the low 8 bits of the header, preserving the masked type.
pub fn try_set_wire_length(obj: &mut WireObject<'_>, length: u16) -> Result<(), WireError> {
    if length > 0xff {
        return Err(WireError::LengthOutOfRange {
            len: length as usize,
            max: 0xff,
        });
    }
    let word = header(obj);
    set_header(obj, (word & !0xff) | length as u32);
    Ok(())
}

/// Resolve the high 24 bits of the header to an identifier.
pub fn try_kind(obj: &WireObject<'_>) -> Result<OxmKind, WireError> {
    let masked_type = header(obj) >> 8;
    oxm::kind_of(masked_type, obj.version()).ok_or(WireError::UnknownOxmType {
        masked_type,
        version: obj.version(),
    })
}

/// Replace the high 24 bits of the header, preserving the length.
pub fn try_set_kind(obj: &mut WireObject<'_>, kind: OxmKind) -> Result<(), WireError> {
    let masked_type =
        oxm::masked_type_of(kind, obj.version()).ok_or(WireError::UnmappedKind {
            family: Family::Oxm,
            version: obj.version(),
            kind: Kind::Oxm(kind),
        })?;
    let word = header(obj);
    set_header(obj, (masked_type << 8) | (word & 0xff));
    Ok(())
}
