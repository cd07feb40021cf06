// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{
    CallbackQuery, InlineQuery, Message, MessageDeletion, ParticipantChange, PinnedMessages,
    PollResults, PollVote, Raw, UserNameChange,
};
use crate::peer_map::PeerMap;
use std::sync::Arc;
use updsync_tl_types as tl;

/// An event that indicates something, which may be of interest to the logged-in account, has occured.
///
/// Events are produced in order, without gaps and without duplicates, as long as the updates they
/// come from are ordered. Updates without a friendlier wrapper are delivered as [`Event::Raw`].
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum Event {
    /// Occurs whenever a new text message or a message with media is produced.
    NewMessage(Message),
    /// Occurs when a message is updated.
    MessageEdited(Message),
    /// Occurs when a message is deleted.
    MessageDeleted(MessageDeletion),
    /// Occurs when messages are pinned or unpinned.
    MessagesPinned(PinnedMessages),
    /// Occurs when the results of a poll change.
    PollResults(PollResults),
    /// Occurs when a user votes on a poll sent by the bot.
    PollVote(PollVote),
    /// Occurs when a user is added to a small group.
    ChatParticipantAdded(ParticipantChange),
    /// Occurs when a user is promoted or demoted in a small group.
    ChatParticipantAdmin(ParticipantChange),
    /// Occurs when a user is removed from a small group.
    ChatParticipantDeleted(ParticipantChange),
    /// Occurs when the participation of a user in a small group changes (bots only).
    ChatParticipant(ParticipantChange),
    /// Occurs when the participation of a user in a channel changes.
    ChannelParticipant(ParticipantChange),
    /// Occurs when a user changes their name.
    UserName(UserNameChange),
    /// Occurs when Telegram calls back into your bot because an inline callback
    /// button was pressed.
    CallbackQuery(CallbackQuery),
    /// Occurs whenever you sign in as a bot and a user sends an inline query
    /// such as `@bot query`.
    InlineQuery(InlineQuery),
    /// Raw events are not actual events.
    /// Instead, they are the raw Update object that Telegram sends. You
    /// normally shouldn't need these.
    Raw(Raw),
}

impl Event {
    /// Create a friendlier `Event` from its raw version and the entities that came with it.
    ///
    /// Returns `None` for updates that carry no event at all (such as new empty messages).
    pub(crate) fn from_raw(update: tl::enums::Update, peers: &Arc<PeerMap>) -> Option<Self> {
        let peers_clone = || Arc::clone(peers);
        Some(match update {
            // NewMessage
            tl::enums::Update::NewMessage(tl::types::UpdateNewMessage { message, .. })
            | tl::enums::Update::NewChannelMessage(tl::types::UpdateNewChannelMessage {
                message,
                ..
            }) => return Self::from_new_message(message, peers),

            // MessageEdited
            tl::enums::Update::EditMessage(tl::types::UpdateEditMessage { message, .. })
            | tl::enums::Update::EditChannelMessage(tl::types::UpdateEditChannelMessage {
                message,
                ..
            }) => match message {
                tl::enums::Message::Empty(_) => return None,
                message => Self::MessageEdited(Message::from_raw(message, peers)),
            },

            // MessageDeleted
            update @ (tl::enums::Update::DeleteMessages(_)
            | tl::enums::Update::DeleteChannelMessages(_)
            | tl::enums::Update::DeleteScheduledMessages(_)) => {
                Self::MessageDeleted(MessageDeletion { raw: update })
            }

            // MessagesPinned
            update @ (tl::enums::Update::PinnedMessages(_)
            | tl::enums::Update::PinnedChannelMessages(_)) => {
                Self::MessagesPinned(PinnedMessages { raw: update })
            }

            // Polls
            tl::enums::Update::MessagePoll(raw) => Self::PollResults(PollResults { raw }),
            tl::enums::Update::MessagePollVote(raw) => Self::PollVote(PollVote {
                raw,
                peers: peers_clone(),
            }),

            // Participants
            update @ tl::enums::Update::ChatParticipantAdd(_) => {
                Self::ChatParticipantAdded(ParticipantChange {
                    raw: update,
                    peers: peers_clone(),
                })
            }
            update @ tl::enums::Update::ChatParticipantAdmin(_) => {
                Self::ChatParticipantAdmin(ParticipantChange {
                    raw: update,
                    peers: peers_clone(),
                })
            }
            update @ tl::enums::Update::ChatParticipantDelete(_) => {
                Self::ChatParticipantDeleted(ParticipantChange {
                    raw: update,
                    peers: peers_clone(),
                })
            }
            update @ tl::enums::Update::ChatParticipant(_) => {
                Self::ChatParticipant(ParticipantChange {
                    raw: update,
                    peers: peers_clone(),
                })
            }
            update @ tl::enums::Update::ChannelParticipant(_) => {
                Self::ChannelParticipant(ParticipantChange {
                    raw: update,
                    peers: peers_clone(),
                })
            }

            // UserName
            tl::enums::Update::UserName(raw) => Self::UserName(UserNameChange { raw }),

            // CallbackQuery
            update @ (tl::enums::Update::BotCallbackQuery(_)
            | tl::enums::Update::InlineBotCallbackQuery(_)) => {
                Self::CallbackQuery(CallbackQuery {
                    raw: update,
                    peers: peers_clone(),
                })
            }

            // InlineQuery
            tl::enums::Update::BotInlineQuery(raw) => Self::InlineQuery(InlineQuery {
                raw,
                peers: peers_clone(),
            }),

            // Raw
            update => Self::Raw(Raw { raw: update }),
        })
    }

    /// Like [`Event::from_raw`], but for the messages that come outside of an update.
    pub(crate) fn from_new_message(
        message: tl::enums::Message,
        peers: &Arc<PeerMap>,
    ) -> Option<Self> {
        match message {
            tl::enums::Message::Empty(_) => None,
            message => Some(Self::NewMessage(Message::from_raw(message, peers))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_messages_produce_no_event() {
        let update = tl::types::UpdateNewMessage {
            message: tl::types::MessageEmpty {
                id: 1,
                peer_id: None,
            }
            .into(),
            pts: 1,
            pts_count: 1,
        };
        assert!(Event::from_raw(update.into(), &PeerMap::empty()).is_none());
    }

    #[test]
    fn deletions_keep_their_channel() {
        let update = tl::types::UpdateDeleteChannelMessages {
            channel_id: 7,
            messages: vec![1, 2],
            pts: 20,
            pts_count: 2,
        };
        match Event::from_raw(update.into(), &PeerMap::empty()) {
            Some(Event::MessageDeleted(deletion)) => {
                assert_eq!(deletion.channel_id(), Some(7));
                assert_eq!(deletion.messages(), &[1, 2]);
                assert!(!deletion.scheduled());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn unknown_shapes_are_raw() {
        let update = tl::types::UpdateReadHistoryOutbox {
            peer: tl::types::PeerUser { user_id: 2 }.into(),
            max_id: 10,
            pts: 20,
            pts_count: 1,
        };
        assert!(matches!(
            Event::from_raw(update.into(), &PeerMap::empty()),
            Some(Event::Raw(_))
        ));
    }

    #[test]
    fn participant_changes_resolve_the_user() {
        let peers = PeerMap::new(
            vec![
                tl::types::User {
                    is_self: false,
                    bot: false,
                    min: false,
                    id: 5,
                    access_hash: Some(1),
                    first_name: Some("Alice".into()),
                    last_name: None,
                    username: None,
                }
                .into(),
            ],
            Vec::new(),
        );
        let update = tl::types::UpdateChatParticipantDelete {
            chat_id: 3,
            user_id: 5,
            version: 2,
        };
        match Event::from_raw(update.into(), &peers) {
            Some(Event::ChatParticipantDeleted(change)) => {
                assert!(change.left());
                assert_eq!(change.user().and_then(|u| u.name()), Some("Alice"));
                assert_eq!(
                    change.chat_id(),
                    tl::enums::Peer::Chat(tl::types::PeerChat { chat_id: 3 })
                );
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
