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

/// Occurs when the membership of a user in a group or channel changes.
///
/// The same type is used for every kind of change; the [`crate::Event`] variant it
/// arrives in tells which one it was.
#[derive(Debug, Clone)]
pub struct ParticipantChange {
    pub raw: tl::enums::Update,
    pub(crate) peers: Arc<PeerMap>,
}

impl ParticipantChange {
    /// The peer of the group or channel where the change happened.
    pub fn chat_id(&self) -> tl::enums::Peer {
        use tl::enums::Update::*;
        match &self.raw {
            ChatParticipantAdd(u) => tl::types::PeerChat { chat_id: u.chat_id }.into(),
            ChatParticipantAdmin(u) => tl::types::PeerChat { chat_id: u.chat_id }.into(),
            ChatParticipantDelete(u) => tl::types::PeerChat { chat_id: u.chat_id }.into(),
            ChatParticipant(u) => tl::types::PeerChat { chat_id: u.chat_id }.into(),
            ChannelParticipant(u) => tl::types::PeerChannel {
                channel_id: u.channel_id,
            }
            .into(),
            _ => unreachable!(),
        }
    }

    /// The group or channel, if it came with the update.
    pub fn chat(&self) -> Option<&Entity> {
        self.peers.get(&self.chat_id())
    }

    /// Identifier of the user whose membership changed.
    pub fn user_id(&self) -> i64 {
        use tl::enums::Update::*;
        match &self.raw {
            ChatParticipantAdd(u) => u.user_id,
            ChatParticipantAdmin(u) => u.user_id,
            ChatParticipantDelete(u) => u.user_id,
            ChatParticipant(u) => u.user_id,
            ChannelParticipant(u) => u.user_id,
            _ => unreachable!(),
        }
    }

    /// The user whose membership changed, if it came with the update.
    pub fn user(&self) -> Option<&Entity> {
        self.peers.get_user(self.user_id())
    }

    /// Identifier of the user who caused the change, if known.
    pub fn actor_id(&self) -> Option<i64> {
        use tl::enums::Update::*;
        match &self.raw {
            ChatParticipantAdd(u) => Some(u.inviter_id),
            ChatParticipant(u) => Some(u.actor_id),
            ChannelParticipant(u) => Some(u.actor_id),
            _ => None,
        }
    }

    /// When did the change happen, if known.
    pub fn date(&self) -> Option<Date> {
        use tl::enums::Update::*;
        match &self.raw {
            ChatParticipantAdd(u) => Some(utils::date(u.date)),
            ChatParticipant(u) => Some(utils::date(u.date)),
            ChannelParticipant(u) => Some(utils::date(u.date)),
            _ => None,
        }
    }

    /// Whether the user is no longer a participant after this change.
    pub fn left(&self) -> bool {
        use tl::enums::Update::*;
        match &self.raw {
            ChatParticipantAdd(_) | ChatParticipantAdmin(_) => false,
            ChatParticipantDelete(_) => true,
            ChatParticipant(u) => u.new_participant.is_none(),
            ChannelParticipant(u) => matches!(
                u.new_participant,
                None | Some(tl::enums::ChannelParticipant::Left(_))
                    | Some(tl::enums::ChannelParticipant::Banned(_))
            ),
            _ => unreachable!(),
        }
    }

    /// Whether the user is an administrator after this change.
    pub fn is_admin(&self) -> bool {
        use tl::enums::Update::*;
        match &self.raw {
            ChatParticipantAdmin(u) => u.is_admin,
            ChatParticipant(u) => matches!(
                u.new_participant,
                Some(tl::enums::ChatParticipant::Admin(_))
                    | Some(tl::enums::ChatParticipant::Creator(_))
            ),
            ChannelParticipant(u) => matches!(
                u.new_participant,
                Some(tl::enums::ChannelParticipant::Admin(_))
                    | Some(tl::enums::ChannelParticipant::Creator(_))
            ),
            _ => false,
        }
    }
}
