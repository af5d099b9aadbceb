//! Top-level message length
//!
//! The buffer already tracks the total message length as part of its own
//! bookkeeping, so this is delegation, not a byte-offset read. The view is
//! assumed to be a root message with the buffer attached; enforcement of
//! "is a root message" belongs to the object-tree layer above.

use crate::object::WireObject;
use crate::WireError;

pub fn try_message_length(obj: &WireObject<'_>) -> Result<u16, WireError> {
    let len = obj.buffer().message_length();
    u16::try_from(len).map_err(|_| WireError::LengthOutOfRange {
        len,
        max: u16::MAX as usize,
    })
}

pub fn set_message_length(obj: &mut WireObject<'_>, length: u16) {
    obj.buffer_mut().set_message_length(length as usize);
}
