//! End-to-end drills over the public accessor surface: identifier and
//! length round-trips for every family and revision, read-modify-write
//! isolation, version-dependent offsets, derived lengths and the
//! experimenter resolution table.

use anyhow::Result;
use ofwire::extension::{EXPERIMENTER_ID_BSN, EXPERIMENTER_ID_NICIRA};
use ofwire::{
    ActionIdKind, ActionKind, Family, HelloElemKind, InstructionKind, Kind, MeterBandKind,
    OxmKind, Parent, QueuePropKind, TableFeaturePropKind, Version, WireBuffer, WireError,
    WireObject, EXPERIMENTER_WIRE_TYPE,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const ALL_OXM: &[OxmKind] = &[
    OxmKind::InPort,
    OxmKind::EthDst,
    OxmKind::EthDstMasked,
    OxmKind::EthSrc,
    OxmKind::EthSrcMasked,
    OxmKind::EthType,
    OxmKind::VlanVid,
    OxmKind::VlanVidMasked,
    OxmKind::IpProto,
    OxmKind::Ipv4Src,
    OxmKind::Ipv4SrcMasked,
    OxmKind::Ipv4Dst,
    OxmKind::Ipv4DstMasked,
    OxmKind::TcpSrc,
    OxmKind::TcpDst,
    OxmKind::UdpSrc,
    OxmKind::UdpDst,
    OxmKind::TunnelId,
    OxmKind::TunnelIdMasked,
];

/// Every identifier of every family, tagged.
fn all_kinds() -> Vec<Kind> {
    let mut kinds = Vec::new();
    for i in 0..ActionKind::COUNT as u16 {
        kinds.push(Kind::Action(ActionKind::try_from(i).unwrap()));
    }
    for i in 0..ActionIdKind::COUNT as u16 {
        kinds.push(Kind::ActionId(ActionIdKind::try_from(i).unwrap()));
    }
    for i in 0..InstructionKind::COUNT as u16 {
        kinds.push(Kind::Instruction(InstructionKind::try_from(i).unwrap()));
    }
    for i in 0..QueuePropKind::COUNT as u16 {
        kinds.push(Kind::QueueProp(QueuePropKind::try_from(i).unwrap()));
    }
    for i in 0..TableFeaturePropKind::COUNT as u16 {
        kinds.push(Kind::TableFeatureProp(
            TableFeaturePropKind::try_from(i).unwrap(),
        ));
    }
    for i in 0..MeterBandKind::COUNT as u16 {
        kinds.push(Kind::MeterBand(MeterBandKind::try_from(i).unwrap()));
    }
    for i in 0..HelloElemKind::COUNT as u16 {
        kinds.push(Kind::HelloElem(HelloElemKind::try_from(i).unwrap()));
    }
    for &k in ALL_OXM {
        kinds.push(Kind::Oxm(k));
    }
    kinds
}

#[test]
fn identifier_round_trips_for_every_valid_family_version_pair() {
    init_tracing();
    let mut encodable = 0usize;
    for version in Version::ALL {
        for kind in all_kinds() {
            let mut buf = WireBuffer::new(16);
            let mut obj = WireObject::new(&mut buf, version, kind.family(), 0);
            match obj.try_set_wire_kind(kind) {
                Err(WireError::UnmappedKind { .. }) => continue, // not valid in this revision
                Err(e) => panic!("unexpected failure for {kind:?} in {version:?}: {e}"),
                Ok(()) => {}
            }
            encodable += 1;
            assert_eq!(obj.wire_kind(), kind, "{kind:?} in {version:?}");
        }
    }
    // Guard against the loop passing vacuously.
    assert!(encodable > 60, "only {encodable} encodable pairs seen");
}

#[test]
fn tlv16_length_round_trips_all_values() {
    let mut buf = WireBuffer::new(8);
    let mut obj = WireObject::new(&mut buf, Version::V1_3, Family::Action, 0);
    for n in 0..=u16::MAX {
        obj.set_wire_length(n);
        assert_eq!(obj.wire_length(), n);
    }
}

#[test]
fn oxm_length_round_trips_all_representable_values() {
    let mut buf = WireBuffer::new(8);
    let mut obj = WireObject::new(&mut buf, Version::V1_3, Family::Oxm, 0);
    for n in 0..=0xff {
        obj.set_wire_length(n);
        assert_eq!(obj.wire_length(), n);
    }
    assert_eq!(
        obj.try_set_wire_length(0x100),
        Err(WireError::LengthOutOfRange { len: 256, max: 255 })
    );
}

#[test]
fn oxm_type_and_length_do_not_clobber_each_other() {
    for &kind in &[OxmKind::InPort, OxmKind::EthSrcMasked, OxmKind::TunnelId] {
        for length in [0u16, 1, 8, 0xff] {
            let mut buf = WireBuffer::new(8);
            let mut obj = WireObject::new(&mut buf, Version::V1_3, Family::Oxm, 0);
            obj.set_wire_kind(Kind::Oxm(kind));
            obj.set_wire_length(length);
            assert_eq!(obj.wire_kind(), Kind::Oxm(kind));
            assert_eq!(obj.wire_length(), length);

            // And in the other order.
            let mut buf = WireBuffer::new(8);
            let mut obj = WireObject::new(&mut buf, Version::V1_3, Family::Oxm, 0);
            obj.set_wire_length(length);
            obj.set_wire_kind(Kind::Oxm(kind));
            assert_eq!(obj.wire_length(), length);
            assert_eq!(obj.wire_kind(), Kind::Oxm(kind));
        }
    }
}

#[test]
fn packet_queue_length_offset_moves_at_the_version_cutoff() {
    // Last revision below the cutoff: offset 4.
    let mut buf = WireBuffer::new(16);
    let mut obj = WireObject::new(&mut buf, Version::V1_1, Family::PacketQueue, 0);
    obj.set_wire_length(40);
    assert_eq!(obj.wire_length(), 40);
    assert_eq!(buf.as_slice()[4..6], [0, 40]);
    assert_eq!(buf.as_slice()[8..10], [0, 0]);

    // First revision at the cutoff: offset 8.
    let mut buf = WireBuffer::new(16);
    let mut obj = WireObject::new(&mut buf, Version::V1_2, Family::PacketQueue, 0);
    obj.set_wire_length(40);
    assert_eq!(obj.wire_length(), 40);
    assert_eq!(buf.as_slice()[8..10], [0, 40]);
    assert_eq!(buf.as_slice()[4..6], [0, 0]);
}

#[test]
fn meter_band_stats_list_length_is_parent_minus_header() {
    let mut buf = WireBuffer::new(64);
    let obj = WireObject::with_parent(
        &mut buf,
        Version::V1_3,
        Family::MeterBandStatsList,
        40,
        Parent {
            family: Family::MeterStats,
            wire_length: 64,
        },
    );
    assert_eq!(obj.wire_length(), 24);
}

#[test]
#[should_panic(expected = "contract violation")]
fn meter_band_stats_list_with_undersized_parent_panics() {
    let mut buf = WireBuffer::new(64);
    let obj = WireObject::with_parent(
        &mut buf,
        Version::V1_3,
        Family::MeterBandStatsList,
        0,
        Parent {
            family: Family::MeterStats,
            wire_length: 39,
        },
    );
    obj.wire_length();
}

/// Lay out an experimenter TLV body by hand: sentinel type, vendor id at
/// offset 4, subtype at offset 8.
fn experimenter_bytes(vendor: u32, subtype: u32, wide: bool) -> WireBuffer {
    let mut buf = WireBuffer::new(16);
    buf.set_u16(0, EXPERIMENTER_WIRE_TYPE);
    buf.set_u16(2, 16);
    buf.set_u32(4, vendor);
    if wide {
        buf.set_u32(8, subtype);
    } else {
        buf.set_u16(8, subtype as u16);
    }
    buf
}

#[test]
fn known_extensions_resolve_in_both_action_namespaces() {
    init_tracing();
    let cases: &[(u32, u32, bool, ActionKind, ActionIdKind)] = &[
        (EXPERIMENTER_ID_BSN, 1, true, ActionKind::BsnMirror, ActionIdKind::BsnMirror),
        (
            EXPERIMENTER_ID_BSN,
            2,
            true,
            ActionKind::BsnSetTunnelDst,
            ActionIdKind::BsnSetTunnelDst,
        ),
        (
            EXPERIMENTER_ID_NICIRA,
            18,
            false,
            ActionKind::NiciraDecTtl,
            ActionIdKind::NiciraDecTtl,
        ),
    ];
    for &(vendor, subtype, wide, action, action_id) in cases {
        let mut buf = experimenter_bytes(vendor, subtype, wide);
        let obj = WireObject::new(&mut buf, Version::V1_0, Family::Action, 0);
        assert_eq!(obj.wire_kind(), Kind::Action(action));

        // The same bytes viewed as an action-id resolve to the parallel
        // namespace.
        let mut buf = experimenter_bytes(vendor, subtype, wide);
        let obj = WireObject::new(&mut buf, Version::V1_3, Family::ActionId, 0);
        assert_eq!(obj.wire_kind(), Kind::ActionId(action_id));
    }
}

#[test]
fn unknown_subtype_falls_back_to_the_generic_identifier() {
    let mut buf = experimenter_bytes(EXPERIMENTER_ID_BSN, 99, true);
    let obj = WireObject::new(&mut buf, Version::V1_0, Family::Action, 0);
    assert_eq!(obj.wire_kind(), Kind::Action(ActionKind::Experimenter));
}

#[test]
fn unknown_vendor_falls_back_to_the_generic_identifier() {
    let mut buf = experimenter_bytes(0xdead_beef, 1, true);
    let obj = WireObject::new(&mut buf, Version::V1_0, Family::Action, 0);
    assert_eq!(obj.wire_kind(), Kind::Action(ActionKind::Experimenter));
}

#[test]
fn placeholder_families_resolve_experimenter_to_generic_only() {
    // No instruction extensions are defined; any experimenter body maps to
    // the generic identifier regardless of its vendor fields.
    let mut buf = experimenter_bytes(EXPERIMENTER_ID_BSN, 1, true);
    let obj = WireObject::new(&mut buf, Version::V1_3, Family::Instruction, 0);
    assert_eq!(
        obj.wire_kind(),
        Kind::Instruction(InstructionKind::Experimenter)
    );

    let mut buf = experimenter_bytes(EXPERIMENTER_ID_BSN, 1, true);
    let obj = WireObject::new(&mut buf, Version::V1_3, Family::MeterBand, 0);
    assert_eq!(obj.wire_kind(), Kind::MeterBand(MeterBandKind::Experimenter));
}

#[test]
fn stamping_then_resolving_is_idempotent() {
    let mut buf = WireBuffer::new(16);
    let mut obj = WireObject::new(&mut buf, Version::V1_3, Family::ActionId, 0);
    obj.set_wire_kind(Kind::ActionId(ActionIdKind::BsnMirror));
    assert_eq!(obj.wire_kind(), Kind::ActionId(ActionIdKind::BsnMirror));
}

#[test]
fn stamping_the_generic_identifier_leaves_the_body_untouched() {
    let mut buf = WireBuffer::new(16);
    for off in [4, 6, 8, 10] {
        buf.set_u16(off, 0xabab);
    }
    let body_before = buf.as_slice()[4..12].to_vec();

    let mut obj = WireObject::new(&mut buf, Version::V1_0, Family::Action, 0);
    obj.set_wire_kind(Kind::Action(ActionKind::Experimenter));
    assert_eq!(&obj.buffer().as_slice()[4..12], &body_before[..]);
    // The wire type itself was written.
    assert_eq!(obj.buffer().get_u16(0), EXPERIMENTER_WIRE_TYPE);
}

#[test]
fn message_length_round_trips_through_buffer_bookkeeping() {
    let mut buf = WireBuffer::new(8);
    let mut obj = WireObject::new(&mut buf, Version::V1_0, Family::Message, 0);
    obj.set_wire_length(1024);
    assert_eq!(obj.wire_length(), 1024);
    assert_eq!(buf.message_length(), 1024);
}

#[test]
fn flow_stats_entry_length_is_its_first_member() {
    let mut buf = WireBuffer::new(16);
    let mut obj = WireObject::new(&mut buf, Version::V1_3, Family::FlowStatsEntry, 4);
    obj.set_wire_length(88);
    assert_eq!(obj.wire_length(), 88);
    assert_eq!(buf.get_u16(4), 88);
}

#[test]
fn unknown_wire_codes_are_detectable_not_zero() {
    // Code 2 is a hole in the V1_0 action row; code 200 is past its end.
    for code in [2u16, 200] {
        let mut buf = WireBuffer::new(16);
        buf.set_u16(0, code);
        let obj = WireObject::new(&mut buf, Version::V1_0, Family::Action, 0);
        assert_eq!(
            obj.try_wire_kind(),
            Err(WireError::UnknownWireType {
                family: Family::Action,
                version: Version::V1_0,
                code,
            })
        );
    }
}

#[test]
fn identifiers_serialize_for_diagnostics() -> Result<()> {
    let kind = Kind::Action(ActionKind::BsnMirror);
    let json = serde_json::to_string(&kind)?;
    assert_eq!(serde_json::from_str::<Kind>(&json)?, kind);
    let version: Version = serde_json::from_str(&serde_json::to_string(&Version::V1_3)?)?;
    assert_eq!(version, Version::V1_3);
    Ok(())
}
