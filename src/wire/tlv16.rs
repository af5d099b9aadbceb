//! TLV16 header codec
//!
//! Most sub-objects open with two u16 fields: type at offset 0, length at
//! offset 2, both relative to the object's base. The length is stored and
//! returned as-is: no header size is added or subtracted, and the setter
//! does not check the value against the encoded content.

use crate::object::WireObject;

pub const WIRE_TYPE_OFFSET: usize = 0;
pub const WIRE_LENGTH_OFFSET: usize = 2;

/// Read the declared length.
pub fn wire_length(obj: &WireObject<'_>) -> u16 {
    obj.buffer().get_u16(obj.absolute_offset(WIRE_LENGTH_OFFSET))
}

/// Store a declared length. The caller keeps it consistent with the
/// encoded content.
pub fn set_wire_length(obj: &mut WireObject<'_>, length: u16) {
    let at = obj.absolute_offset(WIRE_LENGTH_OFFSET);
    obj.buffer_mut().set_u16(at, length);
}

/// Read the wire type code.
pub fn wire_type(obj: &WireObject<'_>) -> u16 {
    obj.buffer().get_u16(obj.absolute_offset(WIRE_TYPE_OFFSET))
}

/// Store a wire type code.
pub fn set_wire_type(obj: &mut WireObject<'_>, code: u16) {
    let at = obj.absolute_offset(WIRE_TYPE_OFFSET);
    obj.buffer_mut().set_u16(at, code);
}
