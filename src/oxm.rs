//! OXM masked-type mapping
//!
//! An OXM header is one 32-bit word: the high 24 bits are the "masked
//! type" (a 16-bit class, a 7-bit field number and a 1-bit mask-present
//! flag) and the low 8 bits are the length. The header codec in
//! [`crate::wire`] treats the 24 bits opaquely; this module is the pure
//! (masked type, version) mapping behind it.

use crate::kind::OxmKind;
use crate::version::Version;

/// The basic match-field class. The only class with identifiers defined
/// here; other classes resolve to nothing and are reported as unknown.
pub const OXM_CLASS_BASIC: u16 = 0x8000;

/// Pack class, field number and mask flag into a 24-bit masked type.
pub fn pack_masked_type(class: u16, field: u8, has_mask: bool) -> u32 {
    ((class as u32) << 8) | ((field as u32) << 1) | has_mask as u32
}

/// Masked-type value for `kind` in `version`, or `None` when the field is
/// not defined in that revision (no OXM encoding exists before V1_2).
pub fn masked_type_of(kind: OxmKind, version: Version) -> Option<u32> {
    if version < kind.min_version() {
        return None;
    }
    Some(pack_masked_type(OXM_CLASS_BASIC, kind.field(), kind.has_mask()))
}

/// Resolve a 24-bit masked type for `version`, or `None` for an unknown
/// class, field or revision.
pub fn kind_of(masked_type: u32, version: Version) -> Option<OxmKind> {
    let class = (masked_type >> 8) as u16;
    let field = ((masked_type >> 1) & 0x7f) as u8;
    let has_mask = masked_type & 1 == 1;

    if class != OXM_CLASS_BASIC {
        return None;
    }

    let kind = match (field, has_mask) {
        (0, false) => OxmKind::InPort,
        (3, false) => OxmKind::EthDst,
        (3, true) => OxmKind::EthDstMasked,
        (4, false) => OxmKind::EthSrc,
        (4, true) => OxmKind::EthSrcMasked,
        (5, false) => OxmKind::EthType,
        (6, false) => OxmKind::VlanVid,
        (6, true) => OxmKind::VlanVidMasked,
        (10, false) => OxmKind::IpProto,
        (11, false) => OxmKind::Ipv4Src,
        (11, true) => OxmKind::Ipv4SrcMasked,
        (12, false) => OxmKind::Ipv4Dst,
        (12, true) => OxmKind::Ipv4DstMasked,
        (13, false) => OxmKind::TcpSrc,
        (14, false) => OxmKind::TcpDst,
        (15, false) => OxmKind::UdpSrc,
        (16, false) => OxmKind::UdpDst,
        (38, false) => OxmKind::TunnelId,
        (38, true) => OxmKind::TunnelIdMasked,
        _ => return None,
    };

    (version >= kind.min_version()).then_some(kind)
}
