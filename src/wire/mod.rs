//! Family-polymorphic wire accessors
//!
//! Every family answers the same two questions, "what is this object's
//! wire length" and "what is its identifier", through one accessor pair
//! on [`WireObject`], dispatched over the closed family set. The panicking
//! forms are the primary API: a failed lookup is a caller or
//! upstream-decoder bug, per the contract of this layer. The `try_` twins
//! expose the same operations fallibly for framing stages that want to
//! reject before asserting.

pub mod message;
pub mod oxm_codec;
pub mod tlv16;
pub mod varlen;

use crate::extension;
use crate::kind::{
    Family, InstructionKind, Kind, MeterBandKind, QueuePropKind, TableFeaturePropKind,
};
use crate::object::WireObject;
use crate::typemap::{self, TypeMap};
use crate::{WireError, EXPERIMENTER_WIRE_TYPE};

/// Resolve a TLV16 object's identifier: experimenter sentinel goes to the
/// family's extension resolver, anything else through the forward table.
fn tlv_kind<K>(
    obj: &WireObject<'_>,
    map: &TypeMap<K>,
    family: Family,
    resolve_ext: impl FnOnce(&WireObject<'_>) -> K,
) -> Result<K, WireError>
where
    K: Copy + Into<u16>,
{
    let code = tlv16::wire_type(obj);
    if code == EXPERIMENTER_WIRE_TYPE {
        return Ok(resolve_ext(obj));
    }
    map.kind_of(obj.version(), code)
        .ok_or(WireError::UnknownWireType {
            family,
            version: obj.version(),
            code,
        })
}

/// Same, for the one TLV16 family with no experimenter escape hatch.
fn tlv_kind_direct<K>(
    obj: &WireObject<'_>,
    map: &TypeMap<K>,
    family: Family,
) -> Result<K, WireError>
where
    K: Copy + Into<u16>,
{
    let code = tlv16::wire_type(obj);
    map.kind_of(obj.version(), code)
        .ok_or(WireError::UnknownWireType {
            family,
            version: obj.version(),
            code,
        })
}

fn set_tlv_kind<K>(
    obj: &mut WireObject<'_>,
    map: &TypeMap<K>,
    kind: K,
    tagged: Kind,
) -> Result<(), WireError>
where
    K: Copy + Into<u16>,
{
    let code = map
        .code_of(obj.version(), kind)
        .ok_or(WireError::UnmappedKind {
            family: tagged.family(),
            version: obj.version(),
            kind: tagged,
        })?;
    tlv16::set_wire_type(obj, code);
    if code == EXPERIMENTER_WIRE_TYPE {
        extension::stamp(obj, tagged);
    }
    Ok(())
}

impl<'b> WireObject<'b> {
    /// The object's wire length.
    ///
    /// # Panics
    /// On a contract violation: a derived length with a missing or wrong
    /// parent, or a parent shorter than its fixed header.
    pub fn wire_length(&self) -> u16 {
        match self.try_wire_length() {
            Ok(length) => length,
            Err(e) => panic!("wire length contract violation: {e}"),
        }
    }

    /// Fallible form of [`wire_length`](Self::wire_length).
    pub fn try_wire_length(&self) -> Result<u16, WireError> {
        match self.family() {
            Family::Message => message::try_message_length(self),
            Family::Oxm => Ok(oxm_codec::wire_length(self)),
            Family::PacketQueue => Ok(varlen::packet_queue_wire_length(self)),
            Family::FlowStatsEntry => Ok(varlen::u16_len_wire_length(self)),
            Family::MeterStats => Ok(varlen::meter_stats_wire_length(self)),
            Family::MeterBandStatsList => varlen::try_meter_band_stats_list_wire_length(self),
            _ => Ok(tlv16::wire_length(self)),
        }
    }

    /// Store the object's wire length.
    ///
    /// # Panics
    /// On a contract violation: an out-of-range value for the family, or a
    /// family whose length is derived and cannot be set.
    pub fn set_wire_length(&mut self, length: u16) {
        if let Err(e) = self.try_set_wire_length(length) {
            panic!("wire length contract violation: {e}");
        }
    }

    /// Fallible form of [`set_wire_length`](Self::set_wire_length).
    pub fn try_set_wire_length(&mut self, length: u16) -> Result<(), WireError> {
        match self.family() {
            Family::Message => {
                message::set_message_length(self, length);
                Ok(())
            }
            Family::Oxm => oxm_codec::try_set_wire_length(self, length),
            Family::PacketQueue => {
                varlen::set_packet_queue_wire_length(self, length);
                Ok(())
            }
            Family::FlowStatsEntry => {
                varlen::set_u16_len_wire_length(self, length);
                Ok(())
            }
            Family::MeterStats => {
                varlen::set_meter_stats_wire_length(self, length);
                Ok(())
            }
            Family::MeterBandStatsList => Err(WireError::DerivedLength {
                family: Family::MeterBandStatsList,
            }),
            _ => {
                tlv16::set_wire_length(self, length);
                Ok(())
            }
        }
    }

    /// Resolve the object's internal identifier from its wire bytes.
    ///
    /// # Panics
    /// On a contract violation: a wire type code outside the valid range
    /// for this (family, version), or a family with no wire type at all.
    /// An unknown experimenter extension is not a violation; it resolves
    /// to the family's generic experimenter identifier.
    pub fn wire_kind(&self) -> Kind {
        match self.try_wire_kind() {
            Ok(kind) => kind,
            Err(e) => panic!("wire type contract violation: {e}"),
        }
    }

    /// Fallible form of [`wire_kind`](Self::wire_kind).
    pub fn try_wire_kind(&self) -> Result<Kind, WireError> {
        match self.family() {
            Family::Action => {
                tlv_kind(self, &typemap::ACTION, Family::Action, extension::action_kind)
                    .map(Kind::Action)
            }
            Family::ActionId => tlv_kind(
                self,
                &typemap::ACTION_ID,
                Family::ActionId,
                extension::action_id_kind,
            )
            .map(Kind::ActionId),
            Family::Instruction => tlv_kind(self, &typemap::INSTRUCTION, Family::Instruction, |_| {
                InstructionKind::Experimenter
            })
            .map(Kind::Instruction),
            Family::QueueProp => tlv_kind(self, &typemap::QUEUE_PROP, Family::QueueProp, |_| {
                QueuePropKind::Experimenter
            })
            .map(Kind::QueueProp),
            Family::TableFeatureProp => tlv_kind(
                self,
                &typemap::TABLE_FEATURE_PROP,
                Family::TableFeatureProp,
                |_| TableFeaturePropKind::Experimenter,
            )
            .map(Kind::TableFeatureProp),
            Family::MeterBand => tlv_kind(self, &typemap::METER_BAND, Family::MeterBand, |_| {
                MeterBandKind::Experimenter
            })
            .map(Kind::MeterBand),
            Family::HelloElem => {
                tlv_kind_direct(self, &typemap::HELLO_ELEM, Family::HelloElem).map(Kind::HelloElem)
            }
            Family::Oxm => oxm_codec::try_kind(self).map(Kind::Oxm),
            other => Err(WireError::NoWireType { family: other }),
        }
    }

    /// Write the wire encoding of `kind`: the type code for this version,
    /// plus vendor identifier and subtype for known extensions.
    ///
    /// # Panics
    /// On a contract violation: a kind from another family, or one with no
    /// encoding in this version.
    pub fn set_wire_kind(&mut self, kind: Kind) {
        if let Err(e) = self.try_set_wire_kind(kind) {
            panic!("wire type contract violation: {e}");
        }
    }

    /// Fallible form of [`set_wire_kind`](Self::set_wire_kind).
    pub fn try_set_wire_kind(&mut self, kind: Kind) -> Result<(), WireError> {
        if kind.family() != self.family() {
            return Err(WireError::FamilyMismatch {
                object: self.family(),
                kind: kind.family(),
            });
        }
        match kind {
            Kind::Action(k) => set_tlv_kind(self, &typemap::ACTION, k, kind),
            Kind::ActionId(k) => set_tlv_kind(self, &typemap::ACTION_ID, k, kind),
            Kind::Instruction(k) => set_tlv_kind(self, &typemap::INSTRUCTION, k, kind),
            Kind::QueueProp(k) => set_tlv_kind(self, &typemap::QUEUE_PROP, k, kind),
            Kind::TableFeatureProp(k) => set_tlv_kind(self, &typemap::TABLE_FEATURE_PROP, k, kind),
            Kind::MeterBand(k) => set_tlv_kind(self, &typemap::METER_BAND, k, kind),
            Kind::HelloElem(k) => set_tlv_kind(self, &typemap::HELLO_ELEM, k, kind),
            Kind::Oxm(k) => oxm_codec::try_set_kind(self, k),
        }
    }
}
