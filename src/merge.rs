// src/merge.rs
//! Stub + detail → final record. Pure; cannot fail.

use crate::session::{SessionDetail, SessionRecord, SessionStub};

/// Track labels end with this ("Aトラック") ...
pub const TRACK_SUFFIX: &str = "トラック";
/// ... and the room shares the name with this instead ("Aルーム").
pub const ROOM_SUFFIX: &str = "ルーム";

/// Room name derived from a track label. A label without the track suffix
/// is taken as the room name as-is.
pub fn room_from_track(track: &str) -> String {
    match track.strip_suffix(TRACK_SUFFIX) {
        Some(stem) => join!(stem, ROOM_SUFFIX).trim().to_string(),
        None => track.trim().to_string(),
    }
}

pub fn merge(stub: SessionStub, detail: SessionDetail) -> SessionRecord {
    let room = stub.track.as_deref().map(room_from_track);
    SessionRecord {
        title: stub.title,
        description: detail.description,
        room,
        day: stub.day,
        track: stub.track,
        thumbnail_url: detail.thumbnail_url,
        speaker: stub.speaker,
        speaker_affiliation: detail.speaker_affiliation,
        speaker_profile: detail.speaker_profile,
        speaker_github: detail.speaker_github,
        speaker_twitter: detail.speaker_twitter,
        speaker_icon_url: detail.speaker_icon_url,
        detail_url: stub.detail_url,
    }
}
