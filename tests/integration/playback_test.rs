//! Integration tests for the playback cursor and host session

use srp::player::{AxisMapping, PlaybackState};
use srp::{decode, PlaybackCursor, ReplaySession};

use super::helpers::{frame, temp_fixture, temp_replay, ReplayBytes};

#[test]
fn zone_offset_is_applied_additively() {
    let bytes = ReplayBytes::v8(
        "bhop_offset",
        100.0,
        [100.0, -50.0],
        &[frame(0.0, 0.0, 0.0), frame(10.0, 0.0, 0.0)],
    );
    let mut session = ReplaySession::new(100.0);
    session.load_bytes(&bytes).unwrap();
    session.play();

    let half = session.cursor().sample_interval() / 2.0;
    let pose = session.tick(half).unwrap();
    assert_eq!(pose.position.x, 5.0);
    assert_eq!(pose.zone_offset, [100.0, -50.0]);

    let world = pose.to_world(AxisMapping::Source);
    assert_eq!(world.position.x, 105.0);
    assert_eq!(world.position.y, -50.0);

    let y_up = pose.to_world(AxisMapping::YUp);
    assert_eq!(y_up.position.x, 105.0);
    assert_eq!(y_up.position.z, 50.0);
}

#[test]
fn zero_delta_is_idempotent_while_playing() {
    let bytes = ReplayBytes::v8(
        "bhop_idle",
        100.0,
        [0.0, 0.0],
        &[frame(0.0, 0.0, 0.0), frame(4.0, 8.0, 0.0), frame(8.0, 0.0, 0.0)],
    );
    let replay = decode(&bytes).unwrap();
    let mut cursor = PlaybackCursor::for_replay(&replay, 100.0);
    cursor.play();
    let first = cursor.advance(&replay, 0.013);
    for _ in 0..10 {
        assert_eq!(cursor.advance(&replay, 0.0), first);
    }
}

#[test]
fn one_interval_after_reset_reaches_the_second_frame() {
    let bytes = ReplayBytes::v8(
        "bhop_step",
        64.0,
        [0.0, 0.0],
        &[frame(0.0, 0.0, 0.0), frame(1.0, 0.0, 0.0), frame(2.0, 0.0, 0.0)],
    );
    let replay = decode(&bytes).unwrap();
    let mut cursor = PlaybackCursor::for_replay(&replay, 100.0);
    cursor.play();
    cursor.advance(&replay, 0.5);
    cursor.reset();
    cursor.play();

    let pose = cursor.advance(&replay, cursor.sample_interval()).unwrap();
    assert!(pose.frame_index <= replay.frame_count() - 2);
    assert!((0.0..=1.0).contains(&pose.t));
    assert_eq!(pose.position.x, 1.0);
}

#[test]
fn playback_holds_the_final_frame() {
    let bytes = ReplayBytes::v8(
        "bhop_end",
        100.0,
        [0.0, 0.0],
        &[frame(0.0, 0.0, 0.0), frame(10.0, 0.0, 0.0), frame(20.0, 5.0, 0.0)],
    );
    let mut session = ReplaySession::new(100.0);
    session.load_bytes(&bytes).unwrap();
    session.play();

    for _ in 0..3 {
        let pose = session.tick(1.0).unwrap();
        assert_eq!(pose.frame_index, 1);
        assert_eq!(pose.t, 1.0);
        assert_eq!(pose.position.x, 20.0);
        assert_eq!(pose.position.y, 5.0);
    }
    assert!(session.is_finished());
}

#[test]
fn single_frame_replay_is_static() {
    let bytes = ReplayBytes::v8("bhop_still", 100.0, [0.0, 0.0], &[frame(3.0, 4.0, 5.0)]);
    let mut session = ReplaySession::new(100.0);
    session.load_bytes(&bytes).unwrap();
    session.play();

    for delta in [0.0, 0.01, 7.5, 1000.0] {
        let pose = session.tick(delta).unwrap();
        assert_eq!((pose.frame_index, pose.t), (0, 0.0));
        assert_eq!(
            (pose.position.x, pose.position.y, pose.position.z),
            (3.0, 4.0, 5.0)
        );
    }
}

#[test]
fn empty_replay_has_no_pose() {
    let bytes = ReplayBytes::v8("bhop_empty", 100.0, [0.0, 0.0], &[]);
    let mut session = ReplaySession::new(100.0);
    session.load_bytes(&bytes).unwrap();
    session.play();
    assert_eq!(session.tick(0.5), None);
}

#[test]
fn missing_tick_rate_falls_back_to_default() {
    let (_dir, path) = temp_fixture("legacy_v1.replay");
    let mut session = ReplaySession::new(100.0);
    session.load_path(&path).unwrap();
    assert_eq!(session.cursor().tick_rate(), 100.0);
    assert_eq!(session.duration(), 0.01);
}

#[test]
fn failed_load_leaves_session_untouched() {
    let (_dir, good) = temp_fixture("zone_v8.replay");
    let (_bad_dir, bad) = temp_replay(b"8:{SHAVITREPLAYFORMAT}{FINAL}\nbhop");

    let mut session = ReplaySession::new(100.0);
    session.load_path(&good).unwrap();
    session.play();
    session.tick(0.01);

    let err = session.load_path(&bad).unwrap_err();
    assert!(format!("{:#}", err).contains("Truncated replay"));
    assert_eq!(session.replay().unwrap().header().map_name, "bhop_zone");
    assert_eq!(session.state(), PlaybackState::Playing);
}

#[test]
fn loading_a_new_replay_stops_playback() {
    let (_dir, path) = temp_fixture("zone_v8.replay");
    let mut session = ReplaySession::new(100.0);
    session.load_path(&path).unwrap();
    session.play();
    session.tick(0.01);

    session.load_path(&path).unwrap();
    assert_eq!(session.state(), PlaybackState::Stopped);
    assert_eq!(session.cursor().elapsed(), 0.0);
}
