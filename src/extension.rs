//! Experimenter extension resolution
//!
//! One wire type code, the experimenter sentinel, is shared by an
//! unbounded set of vendor-defined sub-formats. The body of such an object
//! opens with a second, nested type tag: a 32-bit vendor identifier
//! followed by a vendor-specific subtype whose width the vendor defines.
//! This module maps (vendor, subtype) pairs to internal identifiers and
//! back through a registry, so a new vendor extension is a registry entry
//! rather than a new code path.
//!
//! Only the action and action-id families have known extensions today.
//! Instructions, queue properties and table-feature properties resolve to
//! their generic experimenter identifier and are stamped by nobody: a
//! placeholder until extension definitions exist for them, not a failure.
//!
//! An unrecognized vendor or subtype is not an error either: it resolves
//! to the generic identifier so that extensions unknown to this build pass
//! through undamaged.

use tracing::{debug, trace};

use crate::kind::{ActionIdKind, ActionKind, Kind};
use crate::object::WireObject;

/// Body offset of the 32-bit vendor identifier, right after the TLV16
/// header.
pub const EXPERIMENTER_ID_OFFSET: usize = 4;

/// Body offset of the vendor-specific subtype.
pub const EXPERIMENTER_SUBTYPE_OFFSET: usize = 8;

/// Big Switch Networks.
pub const EXPERIMENTER_ID_BSN: u32 = 0x005c_16c7;

/// Nicira Networks.
pub const EXPERIMENTER_ID_NICIRA: u32 = 0x0000_2320;

/// Width of a vendor's subtype field. The asymmetry across vendors is a
/// fact of their wire formats and must be preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtypeWidth {
    U16,
    U32,
}

/// A vendor known to this build.
#[derive(Debug)]
pub struct Vendor {
    pub experimenter_id: u32,
    pub subtype_width: SubtypeWidth,
    pub name: &'static str,
}

pub static VENDORS: &[Vendor] = &[
    Vendor {
        experimenter_id: EXPERIMENTER_ID_BSN,
        subtype_width: SubtypeWidth::U32,
        name: "bsn",
    },
    Vendor {
        experimenter_id: EXPERIMENTER_ID_NICIRA,
        subtype_width: SubtypeWidth::U16,
        name: "nicira",
    },
];

/// One known extension: a (vendor, subtype) pair and the identifiers it
/// resolves to in the action and action-id namespaces.
#[derive(Debug)]
pub struct ActionExtension {
    pub experimenter_id: u32,
    pub subtype: u32,
    pub action: ActionKind,
    pub action_id: ActionIdKind,
}

pub static ACTION_EXTENSIONS: &[ActionExtension] = &[
    ActionExtension {
        experimenter_id: EXPERIMENTER_ID_BSN,
        subtype: 1,
        action: ActionKind::BsnMirror,
        action_id: ActionIdKind::BsnMirror,
    },
    ActionExtension {
        experimenter_id: EXPERIMENTER_ID_BSN,
        subtype: 2,
        action: ActionKind::BsnSetTunnelDst,
        action_id: ActionIdKind::BsnSetTunnelDst,
    },
    ActionExtension {
        experimenter_id: EXPERIMENTER_ID_NICIRA,
        subtype: 18,
        action: ActionKind::NiciraDecTtl,
        action_id: ActionIdKind::NiciraDecTtl,
    },
];

fn vendor(experimenter_id: u32) -> Option<&'static Vendor> {
    VENDORS
        .iter()
        .find(|v| v.experimenter_id == experimenter_id)
}

fn read_subtype(obj: &WireObject<'_>, width: SubtypeWidth) -> u32 {
    let at = obj.absolute_offset(EXPERIMENTER_SUBTYPE_OFFSET);
    match width {
        SubtypeWidth::U32 => obj.buffer().get_u32(at),
        SubtypeWidth::U16 => obj.buffer().get_u16(at) as u32,
    }
}

/// Match the object body against the registry. `None` means "no specific
/// extension known"; the caller falls back to the generic identifier.
fn lookup(obj: &WireObject<'_>) -> Option<&'static ActionExtension> {
    let experimenter_id = obj.buffer().get_u32(obj.absolute_offset(EXPERIMENTER_ID_OFFSET));
    let Some(vendor) = vendor(experimenter_id) else {
        debug!(experimenter_id, "unknown experimenter, resolving to generic id");
        return None;
    };
    let subtype = read_subtype(obj, vendor.subtype_width);
    let entry = ACTION_EXTENSIONS
        .iter()
        .find(|e| e.experimenter_id == experimenter_id && e.subtype == subtype);
    if entry.is_none() {
        debug!(
            vendor = vendor.name,
            subtype, "unknown experimenter subtype, resolving to generic id"
        );
    }
    entry
}

/// Resolve an experimenter action body to its identifier.
pub fn action_kind(obj: &WireObject<'_>) -> ActionKind {
    lookup(obj).map_or(ActionKind::Experimenter, |e| e.action)
}

/// Resolve an experimenter action-id body to its identifier.
pub fn action_id_kind(obj: &WireObject<'_>) -> ActionIdKind {
    lookup(obj).map_or(ActionIdKind::Experimenter, |e| e.action_id)
}

/// Stamp the vendor identifier and subtype for a specific known extension.
///
/// A no-op for any identifier without a registry entry: a generic
/// experimenter identifier carries nothing more specific to write, and
/// families without extension knowledge have nothing to stamp.
pub fn stamp(obj: &mut WireObject<'_>, kind: Kind) {
    let entry = match kind {
        Kind::Action(a) => ACTION_EXTENSIONS.iter().find(|e| e.action == a),
        Kind::ActionId(a) => ACTION_EXTENSIONS.iter().find(|e| e.action_id == a),
        _ => None,
    };
    let Some(entry) = entry else {
        return;
    };
    let Some(vendor) = vendor(entry.experimenter_id) else {
        return;
    };

    let id_at = obj.absolute_offset(EXPERIMENTER_ID_OFFSET);
    obj.buffer_mut().set_u32(id_at, entry.experimenter_id);

    let subtype_at = obj.absolute_offset(EXPERIMENTER_SUBTYPE_OFFSET);
    match vendor.subtype_width {
        SubtypeWidth::U32 => obj.buffer_mut().set_u32(subtype_at, entry.subtype),
        SubtypeWidth::U16 => obj.buffer_mut().set_u16(subtype_at, entry.subtype as u16),
    }
    trace!(vendor = vendor.name, subtype = entry.subtype, ?kind, "stamped extension fields");
}
