//! Length fields that are not plain TLV16
//!
//! Three shapes: a u16 length whose own offset depends on the revision
//! (packet queues), a u16 length sitting after a multi-field fixed header
//! (meter stats), and a length that is not stored at all but derived from
//! the enclosing object (the meter-band-stats list). Flow-stats entries
//! keep a u16 length as their first member.

use crate::kind::Family;
use crate::object::WireObject;
use crate::version::Version;
use crate::WireError;

/// First member of a flow-stats entry.
pub const U16_LEN_OFFSET: usize = 0;

/// Meter stats: length after the 4-byte meter id. Almost a TLV.
pub const METER_STATS_LENGTH_OFFSET: usize = 4;

/// Fixed header size of a meter-stats object; everything past it is the
/// band-stats list.
pub const METER_STATS_FIXED_LENGTH: u16 = 40;

/// Packet queues grew a 32-bit port field ahead of the length in V1_2.
pub const PACKET_QUEUE_OFFSET_CUTOFF: Version = Version::V1_2;

fn packet_queue_length_offset(version: Version) -> usize {
    if version >= PACKET_QUEUE_OFFSET_CUTOFF {
        8
    } else {
        4
    }
}

pub fn u16_len_wire_length(obj: &WireObject<'_>) -> u16 {
    obj.buffer().get_u16(obj.absolute_offset(U16_LEN_OFFSET))
}

pub fn set_u16_len_wire_length(obj: &mut WireObject<'_>, length: u16) {
    let at = obj.absolute_offset(U16_LEN_OFFSET);
    obj.buffer_mut().set_u16(at, length);
}

pub fn packet_queue_wire_length(obj: &WireObject<'_>) -> u16 {
    let offset = packet_queue_length_offset(obj.version());
    obj.buffer().get_u16(obj.absolute_offset(offset))
}

pub fn set_packet_queue_wire_length(obj: &mut WireObject<'_>, length: u16) {
    let at = obj.absolute_offset(packet_queue_length_offset(obj.version()));
    obj.buffer_mut().set_u16(at, length);
}

pub fn meter_stats_wire_length(obj: &WireObject<'_>) -> u16 {
    obj.buffer()
        .get_u16(obj.absolute_offset(METER_STATS_LENGTH_OFFSET))
}

pub fn set_meter_stats_wire_length(obj: &mut WireObject<'_>, length: u16) {
    let at = obj.absolute_offset(METER_STATS_LENGTH_OFFSET);
    obj.buffer_mut().set_u16(at, length);
}

/// Length of a meter-band-stats list: the meter-stats parent's declared
/// length minus its fixed header. Not independently stored: there is no
/// setter, callers grow the parent instead. The parent must already be
/// populated.
pub fn try_meter_band_stats_list_wire_length(obj: &WireObject<'_>) -> Result<u16, WireError> {
    let parent = obj.parent().ok_or(WireError::MissingParent {
        family: Family::MeterBandStatsList,
    })?;
    if parent.family != Family::MeterStats {
        return Err(WireError::ParentMismatch {
            expected: Family::MeterStats,
            found: parent.family,
        });
    }
    parent
        .wire_length
        .checked_sub(METER_STATS_FIXED_LENGTH)
        .ok_or(WireError::LengthUnderflow {
            length: parent.wire_length,
            header: METER_STATS_FIXED_LENGTH as usize,
        })
}
