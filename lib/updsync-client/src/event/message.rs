// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::peer_map::{Entity, PeerMap};
use crate::utils::{self, Date};
use std::sync::Arc;
use updsync_tl_types as tl;

/// Represents a Telegram message, which includes text messages, messages with media, and service
/// messages.
///
/// The chat and sender are resolved through the entities that came with the message, so they
/// may be missing if the server did not include them.
#[derive(Debug, Clone)]
pub struct Message {
    pub raw: tl::enums::Message,
    pub(crate) peers: Arc<PeerMap>,
}

impl Message {
    pub(crate) fn from_raw(raw: tl::enums::Message, peers: &Arc<PeerMap>) -> Self {
        Self {
            raw,
            peers: Arc::clone(peers),
        }
    }

    /// The ID of this message.
    ///
    /// Message identifiers are counters that start at 1 and grow by 1 for each message produced.
    ///
    /// Every channel has its own unique counter. This counter is the same for all users, but
    /// unique to each channel.
    ///
    /// Every account has another unique counter. This counter is used for private conversations
    /// and small group chats. Therefore, it's not possible to use the message identifier alone to
    /// tell which chat it belongs to.
    pub fn id(&self) -> i32 {
        self.raw.id()
    }

    /// The peer where the message was sent.
    pub fn peer_id(&self) -> Option<&tl::enums::Peer> {
        self.raw.peer_id()
    }

    /// The chat where the message was sent, if it came with the message.
    pub fn chat(&self) -> Option<&Entity> {
        self.peer_id().and_then(|peer| self.peers.get(peer))
    }

    /// The peer that sent the message.
    ///
    /// Private incoming messages may omit the sender, in which case the chat itself is the sender.
    pub fn sender_id(&self) -> Option<&tl::enums::Peer> {
        let from_id = match &self.raw {
            tl::enums::Message::Empty(_) => None,
            tl::enums::Message::Message(m) => m.from_id.as_ref(),
            tl::enums::Message::Service(m) => m.from_id.as_ref(),
        };
        from_id.or_else(|| match self.peer_id() {
            Some(peer @ tl::enums::Peer::User(_)) if !self.outgoing() => Some(peer),
            _ => None,
        })
    }

    /// The entity that sent the message, if it came with the message.
    pub fn sender(&self) -> Option<&Entity> {
        self.sender_id().and_then(|peer| self.peers.get(peer))
    }

    /// The text of the message. Service and empty messages have no text.
    pub fn text(&self) -> &str {
        match &self.raw {
            tl::enums::Message::Message(m) => &m.message,
            _ => "",
        }
    }

    /// When was this message sent.
    pub fn date(&self) -> Date {
        utils::date(match &self.raw {
            tl::enums::Message::Empty(_) => 0,
            tl::enums::Message::Message(m) => m.date,
            tl::enums::Message::Service(m) => m.date,
        })
    }

    /// When was this message last edited, if ever.
    pub fn edit_date(&self) -> Option<Date> {
        match &self.raw {
            tl::enums::Message::Message(m) => m.edit_date.map(utils::date),
            _ => None,
        }
    }

    /// Whether the message is outgoing (i.e. you sent this message to some other chat) or
    /// incoming (i.e. someone else sent it to you or the chat).
    pub fn outgoing(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Empty(_) => false,
            tl::enums::Message::Message(m) => m.out,
            tl::enums::Message::Service(m) => m.out,
        }
    }

    /// Whether you were mentioned in this message or not.
    pub fn mentioned(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Message(m) => m.mentioned,
            _ => false,
        }
    }

    /// Whether the message was sent without producing a notification.
    pub fn silent(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Empty(_) => false,
            tl::enums::Message::Message(m) => m.silent,
            tl::enums::Message::Service(m) => m.silent,
        }
    }

    /// Whether this message is a post in a broadcast channel.
    pub fn post(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Message(m) => m.post,
            _ => false,
        }
    }

    /// Whether this message is currently pinned.
    pub fn pinned(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Message(m) => m.pinned,
            _ => false,
        }
    }

    /// The ID of the bot that was used to send this message, if any.
    pub fn via_bot_id(&self) -> Option<i64> {
        match &self.raw {
            tl::enums::Message::Message(m) => m.via_bot_id,
            _ => None,
        }
    }

    /// The ID of the message this one is replying to, if any.
    pub fn reply_to_message_id(&self) -> Option<i32> {
        match &self.raw {
            tl::enums::Message::Empty(_) => None,
            tl::enums::Message::Message(m) => m.reply_to_msg_id,
            tl::enums::Message::Service(m) => m.reply_to_msg_id,
        }
    }

    /// The action of a service message.
    pub fn action(&self) -> Option<&tl::enums::MessageAction> {
        match &self.raw {
            tl::enums::Message::Service(m) => Some(&m.action),
            _ => None,
        }
    }
}
