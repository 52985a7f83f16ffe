//! Integration tests for replay decoding

use srp::replay::plan::{header_ops, HeaderOp};
use srp::{decode, DecodeError, DecodeWarning};

use super::helpers::{frame, load_fixture, ReplayBytes};

/// Version 6 file with one pre- and one post-frame trimmed off a raw count of 5.
fn v6_bytes() -> Vec<u8> {
    let mut builder = ReplayBytes::new(6)
        .cstring("bhop_legacy")
        .u8(2)
        .u8(1)
        .i32(1)
        .i32(5)
        .f32(12.5)
        .i32(777)
        .i32(1)
        .f32(100.0);
    for x in [0.0, 1.0, 2.0] {
        builder = builder.frame(6, &frame(x, 0.0, 0.0));
    }
    builder.build()
}

#[test]
fn decodes_version_8_fixture() {
    let replay = decode(&load_fixture("zone_v8.replay")).unwrap();
    let header = replay.header();

    assert_eq!(header.version, 8);
    assert_eq!(header.map_name, "bhop_zone");
    assert_eq!(header.style, 1);
    assert_eq!(header.author_id, Some(12345));
    assert_eq!(header.tick_rate, Some(100.0));
    assert_eq!(header.zone_offset, [100.0, 0.0]);
    assert_eq!(replay.frame_count(), 3);
    assert_eq!(replay.frames()[2].origin.x, 20.0);
    assert_eq!(replay.frames()[2].yaw, 180.0);
    assert_eq!(replay.frames()[2].buttons, 2);
    assert!(replay.warnings().is_empty());
}

#[test]
fn decodes_version_1_fixture_with_text_author() {
    let replay = decode(&load_fixture("legacy_v1.replay")).unwrap();
    let header = replay.header();

    assert_eq!(header.version, 1);
    assert_eq!(header.map_name, "");
    assert_eq!(header.author_text.as_deref(), Some("[U:1:12345]"));
    assert_eq!(header.author_id, Some(12345));
    assert_eq!(header.tick_rate, None);
    assert_eq!(header.zone_offset, [0.0, 0.0]);
    assert_eq!(replay.frame_count(), 2);
    assert_eq!(replay.frames()[1].origin.z, 6.0);
    assert_eq!(replay.frames()[1].buttons, 1);
}

#[test]
fn decoding_is_deterministic() {
    let bytes = v6_bytes();
    assert_eq!(decode(&bytes).unwrap(), decode(&bytes).unwrap());
}

#[test]
fn legacy_versions_trim_pre_and_post_frames() {
    let replay = decode(&v6_bytes()).unwrap();
    assert_eq!(replay.header().frame_count, 3);
    assert_eq!(replay.frame_count(), replay.frames().len());
    assert_eq!(replay.header().pre_frames, 1);
    assert_eq!(replay.header().post_frames, 1);
}

#[test]
fn version_3_trims_only_pre_frames() {
    let mut builder = ReplayBytes::new(3)
        .cstring("bhop_three")
        .u8(0)
        .u8(0)
        .i32(2)
        .i32(10)
        .f32(3.0)
        .cstring("STEAM_0:0:11");
    for i in 0..8 {
        builder = builder.frame(3, &frame(i as f32, 0.0, 0.0));
    }
    let bytes = builder.build();

    let replay = decode(&bytes).unwrap();
    assert_eq!(replay.frame_count(), 8);
    assert_eq!(replay.frames()[7].origin.x, 7.0);
    assert_eq!(replay.header().author_id, Some(11));
}

#[test]
fn version_4_reads_a_numeric_author_and_no_tick_rate() {
    let mut builder = ReplayBytes::new(4)
        .cstring("bhop_four")
        .u8(1)
        .u8(0)
        .i32(0)
        .i32(2)
        .f32(2.5)
        .i32(55);
    for x in [4.0, 8.0] {
        builder = builder.frame(4, &frame(x, 0.0, 0.0));
    }
    let bytes = builder.build();
    assert_eq!(bytes.len(), "4:{SHAVITREPLAYFORMAT}{FINAL}\n".len() + 10 + 2 + 16 + 2 * 32);

    let replay = decode(&bytes).unwrap();
    let header = replay.header();
    assert_eq!(header.author_id, Some(55));
    assert_eq!(header.author_text, None);
    assert_eq!(header.tick_rate, None);
    assert_eq!(header.post_frames, 0);
    assert_eq!(replay.frame_count(), 2);
    assert_eq!(replay.frames()[1].origin.x, 8.0);
}

#[test]
fn version_5_trims_post_frames_from_the_stored_count() {
    let mut builder = ReplayBytes::new(5)
        .cstring("bhop_five")
        .u8(0)
        .u8(0)
        .i32(2)
        .i32(7)
        .f32(9.0)
        .i32(1234)
        .i32(3)
        .f32(100.0);
    for x in [0.0, 1.0] {
        builder = builder.frame(5, &frame(x, 0.0, 0.0));
    }
    let bytes = builder.build();

    let replay = decode(&bytes).unwrap();
    let header = replay.header();
    assert_eq!(header.pre_frames, 2);
    assert_eq!(header.post_frames, 3);
    assert_eq!(header.frame_count, 2);
    assert_eq!(header.author_id, Some(1234));
    assert_eq!(header.tick_rate, Some(100.0));
    assert_eq!(replay.frame_count(), 2);
    assert_eq!(replay.frames()[1].origin.x, 1.0);
}

#[test]
fn post_frame_trim_starts_at_version_5() {
    let trims_post = |version| header_ops(version).any(|op| op == HeaderOp::TrimPostFrames);
    assert!(!trims_post(4));
    assert!(trims_post(5));
    assert!(trims_post(6));
    assert!(!trims_post(7));

    let reads_author_id = |version| header_ops(version).any(|op| op == HeaderOp::AuthorId);
    assert!(!reads_author_id(3));
    assert!(reads_author_id(4));
}

#[test]
fn version_7_and_later_keep_the_stored_count() {
    let mut builder = ReplayBytes::new(7)
        .cstring("bhop_seven")
        .u8(0)
        .u8(0)
        .i32(4)
        .i32(2)
        .f32(1.0)
        .i32(1)
        .i32(4)
        .f32(128.0);
    for x in [0.0, 1.0] {
        builder = builder.frame(7, &frame(x, 0.0, 0.0));
    }
    let replay = decode(&builder.build()).unwrap();
    assert_eq!(replay.frame_count(), 2);
}

#[test]
fn every_truncation_point_reports_its_offset() {
    let bytes = v6_bytes();
    let header_len = bytes.iter().position(|&b| b == b'\n').unwrap() + 1;
    let frames_start = bytes.len() - 3 * 40;

    for cut in header_len..bytes.len() {
        match decode(&bytes[..cut]) {
            Err(DecodeError::Truncated {
                offset,
                available,
                frame,
                ..
            }) => {
                assert_eq!(offset + available, cut, "cut at {}", cut);
                if cut >= frames_start {
                    assert_eq!(frame, Some((cut - frames_start) / 40), "cut at {}", cut);
                } else {
                    assert_eq!(frame, None, "cut at {}", cut);
                }
            }
            other => panic!("cut at {} gave {:?}", cut, other),
        }
    }
}

#[test]
fn truncated_fixture_names_the_frame() {
    let err = decode(&load_fixture("truncated_v8.replay")).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Truncated {
            field: "frame.origin.y",
            offset: 117,
            needed: 4,
            available: 2,
            frame: Some(1),
        }
    );
    assert_eq!(err.offset(), Some(117));
    assert!(err.to_string().contains("frame #1"));
}

#[test]
fn wrong_tag_is_a_format_error_for_every_version() {
    for version in 1..=12 {
        let bytes = ReplayBytes::with_header(&format!("{}:{{SHAVITREPLAYFORMAT}}{{DRAFT}}\n", version))
            .i32(0)
            .f32(0.0)
            .build();
        assert!(
            matches!(decode(&bytes), Err(DecodeError::Format { .. })),
            "version {}",
            version
        );
    }
    assert!(matches!(
        decode(&load_fixture("bad_tag.replay")),
        Err(DecodeError::Format { .. })
    ));
}

#[test]
fn bad_version_token_is_a_version_error() {
    for token in ["abc", "0", "-3", ""] {
        let bytes = ReplayBytes::with_header(&format!("{}:{}\n", token, srp::replay::FORMAT_TAG))
            .build();
        assert!(
            matches!(decode(&bytes), Err(DecodeError::Version { .. })),
            "token {:?}",
            token
        );
    }
}

#[test]
fn carriage_return_terminates_the_header_line() {
    let bytes = ReplayBytes::with_header(&format!("2:{}\r", srp::replay::FORMAT_TAG))
        .i32(1)
        .f32(0.5)
        .cstring("42")
        .frame(2, &frame(1.0, 2.0, 3.0))
        .build();
    let replay = decode(&bytes).unwrap();
    assert_eq!(replay.version(), 2);
    assert_eq!(replay.frames()[0].origin.y, 2.0);
}

#[test]
fn unusable_tick_rate_is_a_warning() {
    let bytes = ReplayBytes::v8("bhop_slow", 0.5, [0.0, 0.0], &[frame(0.0, 0.0, 0.0)]);
    let replay = decode(&bytes).unwrap();
    assert_eq!(
        replay.warnings(),
        &[DecodeWarning::InvalidTickRate { found: 0.5 }]
    );
    assert_eq!(replay.header().effective_tick_rate(100.0), 100.0);
}

#[test]
fn header_serializes_without_frames() {
    let replay = decode(&load_fixture("zone_v8.replay")).unwrap();
    let json = serde_json::to_value(replay.header()).unwrap();
    assert_eq!(json["map_name"], "bhop_zone");
    assert_eq!(json["frame_count"], 3);
    assert!(json.get("frames").is_none());
    assert!(json.get("warnings").is_none());
}
