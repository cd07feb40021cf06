// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::defs::{Envelope, Key, NO_PTS, NO_SEQ, PtsInfo};
use crate::errors::ProtocolError;
use updsync_tl_types as tl;

// > The `updateShortMessage`, `updateShortSentMessage` and `updateShortChatMessage` constructors
// > [...] should be transformed to `updateShort` upon receiving.
//
// This module's job is converting the various updates types into an `Envelope`, rejecting the
// ones that can't be pushed, and later into `updatesCombined`, which is big enough to contain
// all updates inside. It also converts updates into their corresponding `PtsInfo`.

/// Normalizes the updates pushed by the server.
///
/// Constructors that are not valid as a passive push, or that are not known at all, indicate a
/// protocol mismatch and are rejected. This also applies to unknown updates inside containers,
/// so that nothing is applied from an envelope that cannot be fully understood.
///
/// `self_id` is needed to know who sent outgoing private messages.
pub fn classify(updates: tl::enums::Updates, self_id: i64) -> Result<Envelope, ProtocolError> {
    match updates {
        tl::enums::Updates::TooLong => Ok(Envelope::TooLong),
        tl::enums::Updates::UpdateShortMessage(short) => Ok(Envelope::ShortMessage {
            date: short.date,
            update: update_short_message(short, self_id),
        }),
        tl::enums::Updates::UpdateShortChatMessage(short) => Ok(Envelope::ShortChatMessage {
            date: short.date,
            update: update_short_chat_message(short),
        }),
        tl::enums::Updates::UpdateShort(short) => {
            check_known(&short.update)?;
            Ok(Envelope::ShortUpdate {
                update: short.update,
                date: short.date,
            })
        }
        tl::enums::Updates::Combined(combined) => {
            combined.updates.iter().try_for_each(check_known)?;
            Ok(Envelope::CombinedBatch {
                updates: combined.updates,
                users: combined.users,
                chats: combined.chats,
                seq: combined.seq,
                seq_start: combined.seq_start,
                date: combined.date,
            })
        }
        tl::enums::Updates::Updates(updates) => {
            updates.updates.iter().try_for_each(check_known)?;
            Ok(Envelope::Batch {
                updates: updates.updates,
                users: updates.users,
                chats: updates.chats,
                seq: updates.seq,
                date: updates.date,
            })
        }
        // Only valid as the result of sending a message, never pushed on its own.
        tl::enums::Updates::UpdateShortSentMessage(_) => Err(ProtocolError::UnexpectedUpdates {
            name: "updateShortSentMessage",
        }),
        tl::enums::Updates::Unknown { constructor_id } => {
            Err(ProtocolError::UnknownUpdates { constructor_id })
        }
    }
}

fn check_known(update: &tl::enums::Update) -> Result<(), ProtocolError> {
    match update {
        tl::enums::Update::Unknown { constructor_id } => Err(ProtocolError::UnknownUpdate {
            constructor_id: *constructor_id,
        }),
        _ => Ok(()),
    }
}

fn update_short_message(short: tl::types::UpdateShortMessage, self_id: i64) -> tl::enums::Update {
    tl::types::UpdateNewMessage {
        message: tl::types::Message {
            out: short.out,
            mentioned: short.mentioned,
            media_unread: short.media_unread,
            silent: short.silent,
            post: false,
            pinned: false,
            id: short.id,
            from_id: Some(
                tl::types::PeerUser {
                    user_id: if short.out { self_id } else { short.user_id },
                }
                .into(),
            ),
            peer_id: tl::types::PeerUser {
                user_id: short.user_id,
            }
            .into(),
            via_bot_id: short.via_bot_id,
            reply_to_msg_id: short.reply_to_msg_id,
            date: short.date,
            message: short.message,
            edit_date: None,
            ttl_period: short.ttl_period,
        }
        .into(),
        pts: short.pts,
        pts_count: short.pts_count,
    }
    .into()
}

fn update_short_chat_message(short: tl::types::UpdateShortChatMessage) -> tl::enums::Update {
    tl::types::UpdateNewMessage {
        message: tl::types::Message {
            out: short.out,
            mentioned: short.mentioned,
            media_unread: short.media_unread,
            silent: short.silent,
            post: false,
            pinned: false,
            id: short.id,
            from_id: Some(
                tl::types::PeerUser {
                    user_id: short.from_id,
                }
                .into(),
            ),
            peer_id: tl::types::PeerChat {
                chat_id: short.chat_id,
            }
            .into(),
            via_bot_id: short.via_bot_id,
            reply_to_msg_id: short.reply_to_msg_id,
            date: short.date,
            message: short.message,
            edit_date: None,
            ttl_period: short.ttl_period,
        }
        .into(),
        pts: short.pts,
        pts_count: short.pts_count,
    }
    .into()
}

impl Envelope {
    /// Converts the envelope into `updatesCombined`, or `None` if it is `TooLong`.
    ///
    /// `updates` cover exactly one `seq`, so it is also used as their `seq_start`.
    /// Short updates carry no `seq` at all.
    pub(crate) fn into_combined(self) -> Option<tl::types::UpdatesCombined> {
        let short = |update, date| tl::types::UpdatesCombined {
            updates: vec![update],
            users: Vec::new(),
            chats: Vec::new(),
            date,
            seq_start: NO_SEQ,
            seq: NO_SEQ,
        };

        match self {
            Envelope::ShortUpdate { update, date }
            | Envelope::ShortMessage { update, date }
            | Envelope::ShortChatMessage { update, date } => Some(short(update, date)),
            Envelope::Batch {
                updates,
                users,
                chats,
                seq,
                date,
            } => Some(tl::types::UpdatesCombined {
                updates,
                users,
                chats,
                date,
                seq_start: seq,
                seq,
            }),
            Envelope::CombinedBatch {
                updates,
                users,
                chats,
                seq,
                seq_start,
                date,
            } => Some(tl::types::UpdatesCombined {
                updates,
                users,
                chats,
                date,
                seq_start,
                seq,
            }),
            Envelope::TooLong => None,
        }
    }

    /// Whether the envelope is a reduced form of a message.
    pub(crate) fn is_short_message(&self) -> bool {
        matches!(
            self,
            Envelope::ShortMessage { .. } | Envelope::ShortChatMessage { .. }
        )
    }
}

fn message_channel_id(message: &tl::enums::Message) -> Option<i64> {
    match message.peer_id()? {
        tl::enums::Peer::Channel(c) => Some(c.channel_id),
        _ => None,
    }
}

impl PtsInfo {
    fn common(pts: i32, count: i32) -> Option<Self> {
        Some(Self {
            pts,
            count,
            key: Key::Common,
            bot_qts: false,
        })
    }

    fn secondary(qts: i32, bot_qts: bool) -> Option<Self> {
        Some(Self {
            pts: qts,
            count: 1,
            key: Key::Secondary,
            bot_qts,
        })
    }

    fn channel(channel_id: Option<i64>, pts: i32, count: i32) -> Option<Self> {
        channel_id.map(|id| Self {
            pts,
            count,
            key: Key::Channel(id),
            bot_qts: false,
        })
    }

    /// Ordering information of an update, if it has any.
    ///
    /// `ChannelTooLong` carries a `pts`, but it's a signal and not an ordered update.
    pub(crate) fn from_update(update: &tl::enums::Update) -> Option<Self> {
        use tl::enums::Update::*;
        match update {
            NewMessage(u) => Self::common(u.pts, u.pts_count),
            NewChannelMessage(u) => {
                Self::channel(message_channel_id(&u.message), u.pts, u.pts_count)
            }
            EditMessage(u) => Self::common(u.pts, u.pts_count),
            EditChannelMessage(u) => {
                Self::channel(message_channel_id(&u.message), u.pts, u.pts_count)
            }
            DeleteMessages(u) => Self::common(u.pts, u.pts_count),
            DeleteChannelMessages(u) => Self::channel(Some(u.channel_id), u.pts, u.pts_count),
            DeleteScheduledMessages(_) => None,
            PinnedMessages(u) => Self::common(u.pts, u.pts_count),
            PinnedChannelMessages(u) => Self::channel(Some(u.channel_id), u.pts, u.pts_count),
            ReadHistoryInbox(u) => Self::common(u.pts, u.pts_count),
            ReadHistoryOutbox(u) => Self::common(u.pts, u.pts_count),
            ReadMessagesContents(u) => Self::common(u.pts, u.pts_count),
            WebPage(u) => Self::common(u.pts, u.pts_count),
            ChannelTooLong(_) => None,
            NewEncryptedMessage(u) => Self::secondary(u.qts, false),
            MessagePoll(_) => None,
            MessagePollVote(u) => Self::secondary(u.qts, true),
            BotStopped(u) => Self::secondary(u.qts, true),
            ChatParticipant(u) => Self::secondary(u.qts, true),
            ChannelParticipant(u) => Self::secondary(u.qts, true),
            ChatParticipantAdd(_) => None,
            ChatParticipantAdmin(_) => None,
            ChatParticipantDelete(_) => None,
            UserName(_) => None,
            BotCallbackQuery(_) => None,
            InlineBotCallbackQuery(_) => None,
            BotInlineQuery(_) => None,
            Config => None,
            Unknown { .. } => None,
        }
        .filter(|info| info.pts != NO_PTS)
    }
}
