//! Internal object identifiers
//!
//! Each object family gets its own identifier namespace, stable across
//! protocol revisions. The values on the wire (per-version type codes) are
//! a separate numbering entirely; the dispatch tables in [`crate::typemap`]
//! translate between the two. Discriminants here index the inverse table
//! rows and must stay dense from zero.
//!
//! Families that support vendor extensions reserve one generic
//! `Experimenter` value meaning "extension, not resolved to anything more
//! specific". The action and action-id namespaces additionally carry the
//! known vendor extensions (see [`crate::extension`]); action-id objects
//! describe an action's shape without operand values, so the two lists are
//! parallel but distinct types.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::version::Version;

/// Object families: the closed set of wire shapes this layer understands.
///
/// The first block carries a TLV16 header (type and length as two u16
/// fields); `Oxm` packs type and length into one 32-bit word; the rest are
/// length-only shapes with no wire type of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Family {
    // TLV16 families
    Action,
    ActionId,
    Instruction,
    QueueProp,
    TableFeatureProp,
    MeterBand,
    HelloElem,

    // Packed 32-bit header
    Oxm,

    // Length-only shapes
    Message,
    PacketQueue,
    FlowStatsEntry,
    MeterStats,
    MeterBandStatsList,
}

impl Family {
    /// Whether objects of this family start with a TLV16 header.
    pub fn is_tlv16(self) -> bool {
        matches!(
            self,
            Family::Action
                | Family::ActionId
                | Family::Instruction
                | Family::QueueProp
                | Family::TableFeatureProp
                | Family::MeterBand
                | Family::HelloElem
        )
    }
}

/// Action identifiers.
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ActionKind {
    Output = 0,
    SetVlanVid = 1,
    StripVlan = 2,
    SetQueue = 3,
    Group = 4,
    PushVlan = 5,
    PopVlan = 6,
    SetNwTtl = 7,
    DecNwTtl = 8,
    SetField = 9,

    // Vendor extensions; `Experimenter` is the unresolved generic form
    Experimenter = 10,
    BsnMirror = 11,
    BsnSetTunnelDst = 12,
    NiciraDecTtl = 13,
}

impl ActionKind {
    pub const COUNT: usize = 14;

    pub fn is_experimenter(self) -> bool {
        matches!(
            self,
            ActionKind::Experimenter
                | ActionKind::BsnMirror
                | ActionKind::BsnSetTunnelDst
                | ActionKind::NiciraDecTtl
        )
    }
}

/// Action-id identifiers: the shape of an action, without operand values.
/// Carried in table-feature descriptions from V1_3 on.
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ActionIdKind {
    Output = 0,
    SetVlanVid = 1,
    StripVlan = 2,
    SetQueue = 3,
    Group = 4,
    PushVlan = 5,
    PopVlan = 6,
    SetNwTtl = 7,
    DecNwTtl = 8,
    SetField = 9,

    Experimenter = 10,
    BsnMirror = 11,
    BsnSetTunnelDst = 12,
    NiciraDecTtl = 13,
}

impl ActionIdKind {
    pub const COUNT: usize = 14;

    pub fn is_experimenter(self) -> bool {
        matches!(
            self,
            ActionIdKind::Experimenter
                | ActionIdKind::BsnMirror
                | ActionIdKind::BsnSetTunnelDst
                | ActionIdKind::NiciraDecTtl
        )
    }
}

/// Instruction identifiers. Instructions exist from V1_1 on; metering from
/// V1_3.
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum InstructionKind {
    GotoTable = 0,
    WriteMetadata = 1,
    WriteActions = 2,
    ApplyActions = 3,
    ClearActions = 4,
    Meter = 5,
    Experimenter = 6,
}

impl InstructionKind {
    pub const COUNT: usize = 7;
}

/// Queue property identifiers. Max-rate and experimenter properties were
/// added in V1_2.
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum QueuePropKind {
    MinRate = 0,
    MaxRate = 1,
    Experimenter = 2,
}

impl QueuePropKind {
    pub const COUNT: usize = 3;
}

/// Table-feature property identifiers (V1_3 only). The `-Miss` forms
/// describe the table-miss flow entry.
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum TableFeaturePropKind {
    Instructions = 0,
    InstructionsMiss = 1,
    NextTables = 2,
    NextTablesMiss = 3,
    WriteActions = 4,
    WriteActionsMiss = 5,
    ApplyActions = 6,
    ApplyActionsMiss = 7,
    Match = 8,
    Wildcards = 9,
    WriteSetfield = 10,
    WriteSetfieldMiss = 11,
    ApplySetfield = 12,
    ApplySetfieldMiss = 13,
    Experimenter = 14,
}

impl TableFeaturePropKind {
    pub const COUNT: usize = 15;
}

/// Meter band identifiers (V1_3 only).
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum MeterBandKind {
    Drop = 0,
    DscpRemark = 1,
    Experimenter = 2,
}

impl MeterBandKind {
    pub const COUNT: usize = 3;
}

/// Hello element identifiers (V1_3 only). No experimenter form exists for
/// this family.
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum HelloElemKind {
    VersionBitmap = 0,
}

impl HelloElemKind {
    pub const COUNT: usize = 1;
}

/// Match-field (OXM) identifiers. A `-Masked` variant is a distinct
/// identifier: the mask-present bit is part of the wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OxmKind {
    InPort,
    EthDst,
    EthDstMasked,
    EthSrc,
    EthSrcMasked,
    EthType,
    VlanVid,
    VlanVidMasked,
    IpProto,
    Ipv4Src,
    Ipv4SrcMasked,
    Ipv4Dst,
    Ipv4DstMasked,
    TcpSrc,
    TcpDst,
    UdpSrc,
    UdpDst,
    TunnelId,
    TunnelIdMasked,
}

impl OxmKind {
    /// Field number within the basic match class.
    pub fn field(self) -> u8 {
        match self {
            OxmKind::InPort => 0,
            OxmKind::EthDst | OxmKind::EthDstMasked => 3,
            OxmKind::EthSrc | OxmKind::EthSrcMasked => 4,
            OxmKind::EthType => 5,
            OxmKind::VlanVid | OxmKind::VlanVidMasked => 6,
            OxmKind::IpProto => 10,
            OxmKind::Ipv4Src | OxmKind::Ipv4SrcMasked => 11,
            OxmKind::Ipv4Dst | OxmKind::Ipv4DstMasked => 12,
            OxmKind::TcpSrc => 13,
            OxmKind::TcpDst => 14,
            OxmKind::UdpSrc => 15,
            OxmKind::UdpDst => 16,
            OxmKind::TunnelId | OxmKind::TunnelIdMasked => 38,
        }
    }

    /// Whether the mask-present bit is set for this identifier.
    pub fn has_mask(self) -> bool {
        matches!(
            self,
            OxmKind::EthDstMasked
                | OxmKind::EthSrcMasked
                | OxmKind::VlanVidMasked
                | OxmKind::Ipv4SrcMasked
                | OxmKind::Ipv4DstMasked
                | OxmKind::TunnelIdMasked
        )
    }

    /// First revision that defines this field. Match fields in this
    /// encoding exist from V1_2; tunnel metadata arrived with V1_3.
    pub fn min_version(self) -> Version {
        match self {
            OxmKind::TunnelId | OxmKind::TunnelIdMasked => Version::V1_3,
            _ => Version::V1_2,
        }
    }
}

/// An internal identifier tagged with its family, the value type of the
/// family-polymorphic accessors on [`crate::object::WireObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    Action(ActionKind),
    ActionId(ActionIdKind),
    Instruction(InstructionKind),
    QueueProp(QueuePropKind),
    TableFeatureProp(TableFeaturePropKind),
    MeterBand(MeterBandKind),
    HelloElem(HelloElemKind),
    Oxm(OxmKind),
}

impl Kind {
    pub fn family(self) -> Family {
        match self {
            Kind::Action(_) => Family::Action,
            Kind::ActionId(_) => Family::ActionId,
            Kind::Instruction(_) => Family::Instruction,
            Kind::QueueProp(_) => Family::QueueProp,
            Kind::TableFeatureProp(_) => Family::TableFeatureProp,
            Kind::MeterBand(_) => Family::MeterBand,
            Kind::HelloElem(_) => Family::HelloElem,
            Kind::Oxm(_) => Family::Oxm,
        }
    }
}
