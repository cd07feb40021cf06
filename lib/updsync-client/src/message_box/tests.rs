// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::*;
use crate::errors::ProtocolError;

const SELF_ID: i64 = 1000;

fn state(pts: i32, qts: i32, seq: i32, date: i32) -> Cursor {
    Cursor { pts, qts, seq, date }
}

fn new_message(pts: i32, pts_count: i32) -> tl::enums::Update {
    tl::types::UpdateNewMessage {
        message: tl::types::MessageEmpty {
            id: pts,
            peer_id: None,
        }
        .into(),
        pts,
        pts_count,
    }
    .into()
}

fn channel_message(channel_id: i64, pts: i32) -> tl::enums::Update {
    tl::types::UpdateNewChannelMessage {
        message: tl::types::MessageEmpty {
            id: pts,
            peer_id: Some(tl::types::PeerChannel { channel_id }.into()),
        }
        .into(),
        pts,
        pts_count: 1,
    }
    .into()
}

fn short_message(out: bool) -> tl::enums::Updates {
    tl::types::UpdateShortMessage {
        out,
        mentioned: false,
        media_unread: false,
        silent: false,
        id: 12,
        user_id: 55,
        message: "hi".into(),
        pts: 101,
        pts_count: 1,
        date: 1001,
        via_bot_id: None,
        reply_to_msg_id: None,
        ttl_period: None,
    }
    .into()
}

fn sender_of(envelope: &Envelope) -> Option<tl::enums::Peer> {
    match envelope {
        Envelope::ShortMessage {
            update: tl::enums::Update::NewMessage(u),
            ..
        } => match &u.message {
            tl::enums::Message::Message(m) => m.from_id.clone(),
            _ => None,
        },
        _ => None,
    }
}

#[test]
fn classify_short_message_uses_self_for_outgoing() {
    let incoming = classify(short_message(false), SELF_ID).unwrap();
    assert_eq!(
        sender_of(&incoming),
        Some(tl::enums::Peer::User(tl::types::PeerUser { user_id: 55 }))
    );

    let outgoing = classify(short_message(true), SELF_ID).unwrap();
    assert_eq!(
        sender_of(&outgoing),
        Some(tl::enums::Peer::User(tl::types::PeerUser {
            user_id: SELF_ID
        }))
    );
    assert!(outgoing.is_short_message());
}

#[test]
fn classify_rejects_sent_message_and_unknown() {
    let sent = tl::types::UpdateShortSentMessage {
        out: true,
        id: 1,
        pts: 2,
        pts_count: 1,
        date: 3,
        ttl_period: None,
    };
    assert_eq!(
        classify(sent.into(), SELF_ID),
        Err(ProtocolError::UnexpectedUpdates {
            name: "updateShortSentMessage"
        })
    );
    assert_eq!(
        classify(
            tl::enums::Updates::Unknown {
                constructor_id: 0xdeadbeef
            },
            SELF_ID
        ),
        Err(ProtocolError::UnknownUpdates {
            constructor_id: 0xdeadbeef
        })
    );
}

#[test]
fn classify_rejects_batch_with_unknown_update() {
    let updates = tl::types::Updates {
        updates: vec![
            new_message(101, 1),
            tl::enums::Update::Unknown {
                constructor_id: 0x1234,
            },
        ],
        users: Vec::new(),
        chats: Vec::new(),
        date: 1001,
        seq: 11,
    };
    assert_eq!(
        classify(updates.into(), SELF_ID),
        Err(ProtocolError::UnknownUpdate {
            constructor_id: 0x1234
        })
    );
}

#[test]
fn batch_uses_seq_as_seq_start() {
    let updates = tl::types::Updates {
        updates: vec![new_message(101, 1)],
        users: Vec::new(),
        chats: Vec::new(),
        date: 1001,
        seq: 11,
    };
    let combined = classify(updates.into(), SELF_ID)
        .unwrap()
        .into_combined()
        .unwrap();
    assert_eq!(combined.seq_start, 11);
    assert_eq!(combined.seq, 11);

    let short = tl::types::UpdateShort {
        update: new_message(101, 1),
        date: 1001,
    };
    let combined = classify(short.into(), SELF_ID)
        .unwrap()
        .into_combined()
        .unwrap();
    assert_eq!(combined.seq_start, NO_SEQ);
    assert_eq!(combined.date, 1001);

    assert_eq!(
        classify(tl::enums::Updates::TooLong, SELF_ID)
            .unwrap()
            .into_combined(),
        None
    );
}

#[test]
fn pts_info_of_updates() {
    assert_eq!(
        PtsInfo::from_update(&new_message(105, 5)),
        Some(PtsInfo {
            pts: 105,
            count: 5,
            key: Key::Common,
            bot_qts: false,
        })
    );
    assert_eq!(
        PtsInfo::from_update(&channel_message(7, 20)),
        Some(PtsInfo {
            pts: 20,
            count: 1,
            key: Key::Channel(7),
            bot_qts: false,
        })
    );
    let vote: tl::enums::Update = tl::types::UpdateMessagePollVote {
        poll_id: 1,
        peer: tl::types::PeerUser { user_id: 2 }.into(),
        options: Vec::new(),
        qts: 6,
    }
    .into();
    assert_eq!(
        PtsInfo::from_update(&vote),
        Some(PtsInfo {
            pts: 6,
            count: 1,
            key: Key::Secondary,
            bot_qts: true,
        })
    );
}

#[test]
fn zero_pts_means_no_ordering() {
    let participant: tl::enums::Update = tl::types::UpdateChannelParticipant {
        via_chatlist: false,
        channel_id: 7,
        date: 0,
        actor_id: 1,
        user_id: 2,
        prev_participant: None,
        new_participant: None,
        qts: 0,
    }
    .into();
    assert_eq!(PtsInfo::from_update(&participant), None);

    let too_long: tl::enums::Update = tl::types::UpdateChannelTooLong {
        channel_id: 7,
        pts: Some(50),
    }
    .into();
    assert_eq!(PtsInfo::from_update(&too_long), None);
}

#[test]
fn check_pts_three_ways() {
    let info = |pts, count| PtsInfo {
        pts,
        count,
        key: Key::Common,
        bot_qts: false,
    };
    assert_eq!(check_pts(100, &info(105, 5)), Verdict::Apply);
    assert_eq!(check_pts(100, &info(110, 2)), Verdict::Gap);
    assert_eq!(check_pts(100, &info(100, 1)), Verdict::Stale);
}

#[test]
fn check_pts_out_of_range_is_a_gap() {
    let info = PtsInfo {
        pts: 5,
        count: 10,
        key: Key::Common,
        bot_qts: false,
    };
    assert_eq!(check_pts(i32::MAX, &info), Verdict::Gap);
    assert_eq!(check_pts(i32::MAX - 10, &PtsInfo { pts: i32::MAX, ..info }), Verdict::Apply);

    let message_box = MessageBox::load(state(100, 5, i32::MAX, 1000));
    assert_eq!(message_box.check_seq(1), Verdict::Gap);
}

#[test]
fn zero_qts_takes_first_as_baseline() {
    let info = PtsInfo {
        pts: 40,
        count: 1,
        key: Key::Secondary,
        bot_qts: true,
    };
    assert_eq!(check_pts(0, &info), Verdict::Apply);
    assert_eq!(check_pts(5, &info), Verdict::Gap);
    assert_eq!(check_pts(39, &info), Verdict::Apply);
    assert_eq!(check_pts(40, &info), Verdict::Stale);
}

#[test]
fn zero_qts_baseline_is_only_for_bot_updates() {
    let encrypted: tl::enums::Update = tl::types::UpdateNewEncryptedMessage {
        chat_id: 3,
        random_id: 4,
        date: 1000,
        qts: 40,
    }
    .into();
    let info = PtsInfo::from_update(&encrypted).unwrap();
    assert!(!info.bot_qts);
    assert_eq!(check_pts(0, &info), Verdict::Gap);

    let stopped: tl::enums::Update = tl::types::UpdateBotStopped {
        user_id: 2,
        date: 1000,
        stopped: true,
        qts: 40,
    }
    .into();
    let info = PtsInfo::from_update(&stopped).unwrap();
    assert!(info.bot_qts);
    assert_eq!(check_pts(0, &info), Verdict::Apply);
}

#[test]
fn check_seq_three_ways() {
    let message_box = MessageBox::load(state(100, 5, 10, 1000));
    assert_eq!(message_box.check_seq(11), Verdict::Apply);
    assert_eq!(message_box.check_seq(13), Verdict::Gap);
    assert_eq!(message_box.check_seq(10), Verdict::Stale);
}

#[test]
fn end_envelope_keeps_seq_when_unspecified() {
    let mut message_box = MessageBox::load(state(100, 5, 10, 1000));
    message_box.end_envelope(NO_SEQ, 1001);
    assert_eq!(message_box.cursor(), state(100, 5, 10, 1001));

    message_box.end_envelope(11, 999);
    assert_eq!(message_box.cursor(), state(100, 5, 11, 1001));
}

#[test]
fn channel_pts_is_not_kept_by_message_box() {
    let mut message_box = MessageBox::load(state(100, 5, 10, 1000));
    message_box.set_pts(Key::Channel(7), 50);
    assert_eq!(message_box.cursor(), state(100, 5, 10, 1000));

    message_box.set_pts(Key::Common, 105);
    message_box.set_pts(Key::Secondary, 6);
    assert_eq!(message_box.cursor(), state(105, 6, 10, 1000));
}

#[test]
fn no_difference_while_unhydrated() {
    assert_eq!(MessageBox::new().get_difference(), None);

    let message_box = MessageBox::load(state(100, 5, 10, 1000));
    assert_eq!(
        message_box.get_difference(),
        Some(tl::functions::updates::GetDifference {
            pts: 100,
            pts_limit: None,
            pts_total_limit: None,
            date: 1000,
            qts: 5,
            qts_limit: None,
        })
    );
}
