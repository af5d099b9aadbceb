//! Per-revision table content
//!
//! Row index in a `*_CODES_*` slice is the wire type code; row index in a
//! `*_IDS_*` slice is the identifier discriminant. Holes in a revision's
//! numbering are `None` entries. Identifiers that encode as a vendor
//! extension map to the experimenter sentinel in the inverse direction
//! and are never present in a forward row.

use crate::kind::{
    ActionIdKind, ActionKind, HelloElemKind, InstructionKind, MeterBandKind, QueuePropKind,
    TableFeaturePropKind,
};
use crate::typemap::TypeMap;
use crate::EXPERIMENTER_WIRE_TYPE;

const EXP: Option<u16> = Some(EXPERIMENTER_WIRE_TYPE);

// ---------------------------------------------------------------- actions

const ACTION_CODES_V1_0: &[Option<ActionKind>] = &[
    Some(ActionKind::Output),     // 0
    Some(ActionKind::SetVlanVid), // 1
    None,                         // 2
    Some(ActionKind::StripVlan),  // 3
];

const ACTION_CODES_V1_1: &[Option<ActionKind>] = &[
    Some(ActionKind::Output),     // 0
    Some(ActionKind::SetVlanVid), // 1
    None,                         // 2
    None,                         // 3
    None,                         // 4
    None,                         // 5
    None,                         // 6
    None,                         // 7
    None,                         // 8
    None,                         // 9
    None,                         // 10
    None,                         // 11
    None,                         // 12
    None,                         // 13
    None,                         // 14
    None,                         // 15
    None,                         // 16
    Some(ActionKind::PushVlan),   // 17
    Some(ActionKind::PopVlan),    // 18
    None,                         // 19
    None,                         // 20
    Some(ActionKind::SetQueue),   // 21
    Some(ActionKind::Group),      // 22
    Some(ActionKind::SetNwTtl),   // 23
    Some(ActionKind::DecNwTtl),   // 24
];

// Unchanged between V1_2 and V1_3.
const ACTION_CODES_V1_2: &[Option<ActionKind>] = &[
    Some(ActionKind::Output),   // 0
    None,                       // 1
    None,                       // 2
    None,                       // 3
    None,                       // 4
    None,                       // 5
    None,                       // 6
    None,                       // 7
    None,                       // 8
    None,                       // 9
    None,                       // 10
    None,                       // 11
    None,                       // 12
    None,                       // 13
    None,                       // 14
    None,                       // 15
    None,                       // 16
    Some(ActionKind::PushVlan), // 17
    Some(ActionKind::PopVlan),  // 18
    None,                       // 19
    None,                       // 20
    Some(ActionKind::SetQueue), // 21
    Some(ActionKind::Group),    // 22
    Some(ActionKind::SetNwTtl), // 23
    Some(ActionKind::DecNwTtl), // 24
    Some(ActionKind::SetField), // 25
];

const ACTION_IDS_V1_0: &[Option<u16>] = &[
    Some(0), // Output
    Some(1), // SetVlanVid
    Some(3), // StripVlan
    None,    // SetQueue
    None,    // Group
    None,    // PushVlan
    None,    // PopVlan
    None,    // SetNwTtl
    None,    // DecNwTtl
    None,    // SetField
    EXP,     // Experimenter
    EXP,     // BsnMirror
    EXP,     // BsnSetTunnelDst
    EXP,     // NiciraDecTtl
];

const ACTION_IDS_V1_1: &[Option<u16>] = &[
    Some(0),  // Output
    Some(1),  // SetVlanVid
    None,     // StripVlan
    Some(21), // SetQueue
    Some(22), // Group
    Some(17), // PushVlan
    Some(18), // PopVlan
    Some(23), // SetNwTtl
    Some(24), // DecNwTtl
    None,     // SetField
    EXP,      // Experimenter
    EXP,      // BsnMirror
    EXP,      // BsnSetTunnelDst
    EXP,      // NiciraDecTtl
];

// Unchanged between V1_2 and V1_3.
const ACTION_IDS_V1_2: &[Option<u16>] = &[
    Some(0),  // Output
    None,     // SetVlanVid
    None,     // StripVlan
    Some(21), // SetQueue
    Some(22), // Group
    Some(17), // PushVlan
    Some(18), // PopVlan
    Some(23), // SetNwTtl
    Some(24), // DecNwTtl
    Some(25), // SetField
    EXP,      // Experimenter
    EXP,      // BsnMirror
    EXP,      // BsnSetTunnelDst
    EXP,      // NiciraDecTtl
];

pub static ACTION: TypeMap<ActionKind> = TypeMap {
    by_code: [
        ACTION_CODES_V1_0,
        ACTION_CODES_V1_1,
        ACTION_CODES_V1_2,
        ACTION_CODES_V1_2,
    ],
    by_kind: [
        ACTION_IDS_V1_0,
        ACTION_IDS_V1_1,
        ACTION_IDS_V1_2,
        ACTION_IDS_V1_2,
    ],
};

// ------------------------------------------------------------- action ids
//
// Action-id lists arrived with table features in V1_3; earlier rows are
// empty, and the V1_3 numbering matches the action numbering.

const ACTION_ID_CODES_V1_3: &[Option<ActionIdKind>] = &[
    Some(ActionIdKind::Output),   // 0
    None,                         // 1
    None,                         // 2
    None,                         // 3
    None,                         // 4
    None,                         // 5
    None,                         // 6
    None,                         // 7
    None,                         // 8
    None,                         // 9
    None,                         // 10
    None,                         // 11
    None,                         // 12
    None,                         // 13
    None,                         // 14
    None,                         // 15
    None,                         // 16
    Some(ActionIdKind::PushVlan), // 17
    Some(ActionIdKind::PopVlan),  // 18
    None,                         // 19
    None,                         // 20
    Some(ActionIdKind::SetQueue), // 21
    Some(ActionIdKind::Group),    // 22
    Some(ActionIdKind::SetNwTtl), // 23
    Some(ActionIdKind::DecNwTtl), // 24
    Some(ActionIdKind::SetField), // 25
];

const ACTION_ID_IDS_V1_3: &[Option<u16>] = &[
    Some(0),  // Output
    None,     // SetVlanVid
    None,     // StripVlan
    Some(21), // SetQueue
    Some(22), // Group
    Some(17), // PushVlan
    Some(18), // PopVlan
    Some(23), // SetNwTtl
    Some(24), // DecNwTtl
    Some(25), // SetField
    EXP,      // Experimenter
    EXP,      // BsnMirror
    EXP,      // BsnSetTunnelDst
    EXP,      // NiciraDecTtl
];

pub static ACTION_ID: TypeMap<ActionIdKind> = TypeMap {
    by_code: [&[], &[], &[], ACTION_ID_CODES_V1_3],
    by_kind: [&[], &[], &[], ACTION_ID_IDS_V1_3],
};

// ------------------------------------------------------------ instructions

const INSTRUCTION_CODES_V1_1: &[Option<InstructionKind>] = &[
    None,                                  // 0
    Some(InstructionKind::GotoTable),      // 1
    Some(InstructionKind::WriteMetadata),  // 2
    Some(InstructionKind::WriteActions),   // 3
    Some(InstructionKind::ApplyActions),   // 4
    Some(InstructionKind::ClearActions),   // 5
];

const INSTRUCTION_CODES_V1_3: &[Option<InstructionKind>] = &[
    None,                                  // 0
    Some(InstructionKind::GotoTable),      // 1
    Some(InstructionKind::WriteMetadata),  // 2
    Some(InstructionKind::WriteActions),   // 3
    Some(InstructionKind::ApplyActions),   // 4
    Some(InstructionKind::ClearActions),   // 5
    Some(InstructionKind::Meter),          // 6
];

const INSTRUCTION_IDS_V1_1: &[Option<u16>] = &[
    Some(1), // GotoTable
    Some(2), // WriteMetadata
    Some(3), // WriteActions
    Some(4), // ApplyActions
    Some(5), // ClearActions
    None,    // Meter
    EXP,     // Experimenter
];

const INSTRUCTION_IDS_V1_3: &[Option<u16>] = &[
    Some(1), // GotoTable
    Some(2), // WriteMetadata
    Some(3), // WriteActions
    Some(4), // ApplyActions
    Some(5), // ClearActions
    Some(6), // Meter
    EXP,     // Experimenter
];

pub static INSTRUCTION: TypeMap<InstructionKind> = TypeMap {
    by_code: [
        &[],
        INSTRUCTION_CODES_V1_1,
        INSTRUCTION_CODES_V1_1,
        INSTRUCTION_CODES_V1_3,
    ],
    by_kind: [
        &[],
        INSTRUCTION_IDS_V1_1,
        INSTRUCTION_IDS_V1_1,
        INSTRUCTION_IDS_V1_3,
    ],
};

// -------------------------------------------------------- queue properties

const QUEUE_PROP_CODES_V1_0: &[Option<QueuePropKind>] = &[
    None,                         // 0
    Some(QueuePropKind::MinRate), // 1
];

const QUEUE_PROP_CODES_V1_2: &[Option<QueuePropKind>] = &[
    None,                         // 0
    Some(QueuePropKind::MinRate), // 1
    Some(QueuePropKind::MaxRate), // 2
];

const QUEUE_PROP_IDS_V1_0: &[Option<u16>] = &[
    Some(1), // MinRate
    None,    // MaxRate
    None,    // Experimenter
];

const QUEUE_PROP_IDS_V1_2: &[Option<u16>] = &[
    Some(1), // MinRate
    Some(2), // MaxRate
    EXP,     // Experimenter
];

pub static QUEUE_PROP: TypeMap<QueuePropKind> = TypeMap {
    by_code: [
        QUEUE_PROP_CODES_V1_0,
        QUEUE_PROP_CODES_V1_0,
        QUEUE_PROP_CODES_V1_2,
        QUEUE_PROP_CODES_V1_2,
    ],
    by_kind: [
        QUEUE_PROP_IDS_V1_0,
        QUEUE_PROP_IDS_V1_0,
        QUEUE_PROP_IDS_V1_2,
        QUEUE_PROP_IDS_V1_2,
    ],
};

// ------------------------------------------------- table feature properties

const TABLE_FEATURE_PROP_CODES_V1_3: &[Option<TableFeaturePropKind>] = &[
    Some(TableFeaturePropKind::Instructions),      // 0
    Some(TableFeaturePropKind::InstructionsMiss),  // 1
    Some(TableFeaturePropKind::NextTables),        // 2
    Some(TableFeaturePropKind::NextTablesMiss),    // 3
    Some(TableFeaturePropKind::WriteActions),      // 4
    Some(TableFeaturePropKind::WriteActionsMiss),  // 5
    Some(TableFeaturePropKind::ApplyActions),      // 6
    Some(TableFeaturePropKind::ApplyActionsMiss),  // 7
    Some(TableFeaturePropKind::Match),             // 8
    None,                                          // 9
    Some(TableFeaturePropKind::Wildcards),         // 10
    None,                                          // 11
    Some(TableFeaturePropKind::WriteSetfield),     // 12
    Some(TableFeaturePropKind::WriteSetfieldMiss), // 13
    Some(TableFeaturePropKind::ApplySetfield),     // 14
    Some(TableFeaturePropKind::ApplySetfieldMiss), // 15
];

const TABLE_FEATURE_PROP_IDS_V1_3: &[Option<u16>] = &[
    Some(0),  // Instructions
    Some(1),  // InstructionsMiss
    Some(2),  // NextTables
    Some(3),  // NextTablesMiss
    Some(4),  // WriteActions
    Some(5),  // WriteActionsMiss
    Some(6),  // ApplyActions
    Some(7),  // ApplyActionsMiss
    Some(8),  // Match
    Some(10), // Wildcards
    Some(12), // WriteSetfield
    Some(13), // WriteSetfieldMiss
    Some(14), // ApplySetfield
    Some(15), // ApplySetfieldMiss
    EXP,      // Experimenter
];

pub static TABLE_FEATURE_PROP: TypeMap<TableFeaturePropKind> = TypeMap {
    by_code: [&[], &[], &[], TABLE_FEATURE_PROP_CODES_V1_3],
    by_kind: [&[], &[], &[], TABLE_FEATURE_PROP_IDS_V1_3],
};

// ------------------------------------------------------------- meter bands

const METER_BAND_CODES_V1_3: &[Option<MeterBandKind>] = &[
    None,                            // 0
    Some(MeterBandKind::Drop),       // 1
    Some(MeterBandKind::DscpRemark), // 2
];

const METER_BAND_IDS_V1_3: &[Option<u16>] = &[
    Some(1), // Drop
    Some(2), // DscpRemark
    EXP,     // Experimenter
];

pub static METER_BAND: TypeMap<MeterBandKind> = TypeMap {
    by_code: [&[], &[], &[], METER_BAND_CODES_V1_3],
    by_kind: [&[], &[], &[], METER_BAND_IDS_V1_3],
};

// ----------------------------------------------------------- hello elements

const HELLO_ELEM_CODES_V1_3: &[Option<HelloElemKind>] = &[
    None,                               // 0
    Some(HelloElemKind::VersionBitmap), // 1
];

const HELLO_ELEM_IDS_V1_3: &[Option<u16>] = &[
    Some(1), // VersionBitmap
];

pub static HELLO_ELEM: TypeMap<HelloElemKind> = TypeMap {
    by_code: [&[], &[], &[], HELLO_ELEM_CODES_V1_3],
    by_kind: [&[], &[], &[], HELLO_ELEM_IDS_V1_3],
};
