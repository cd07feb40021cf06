// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::collections::HashMap;
use std::sync::Arc;
use updsync_tl_types as tl;

/// A user or chat shipped alongside updates.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    User(tl::enums::User),
    Chat(tl::enums::Chat),
}

impl Entity {
    /// The peer that refers to this entity.
    pub fn peer(&self) -> tl::enums::Peer {
        match self {
            Entity::User(user) => tl::types::PeerUser { user_id: user.id() }.into(),
            Entity::Chat(chat @ tl::enums::Chat::Channel(_))
            | Entity::Chat(chat @ tl::enums::Chat::ChannelForbidden(_)) => {
                tl::types::PeerChannel {
                    channel_id: chat.id(),
                }
                .into()
            }
            Entity::Chat(chat) => tl::types::PeerChat { chat_id: chat.id() }.into(),
        }
    }

    /// Display name of the entity, if it has any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Entity::User(tl::enums::User::User(user)) => user.first_name.as_deref(),
            Entity::User(tl::enums::User::Empty(_)) => None,
            Entity::Chat(tl::enums::Chat::Empty(_)) => None,
            Entity::Chat(tl::enums::Chat::Chat(chat)) => Some(&chat.title),
            Entity::Chat(tl::enums::Chat::Forbidden(chat)) => Some(&chat.title),
            Entity::Chat(tl::enums::Chat::Channel(channel)) => Some(&channel.title),
            Entity::Chat(tl::enums::Chat::ChannelForbidden(channel)) => Some(&channel.title),
        }
    }
}

/// Helper structure to efficiently retrieve entities via their peer.
///
/// Updates and differences include the entities related to them in the form of a list of
/// users and chats. This structure lets you save those separate vectors in a single place
/// and query them by using a `Peer`.
///
/// The map only lives as long as the events produced from the response it came with.
#[derive(Debug, Default)]
pub struct PeerMap {
    map: HashMap<tl::enums::Peer, Entity>,
}

impl PeerMap {
    /// Create a new entity set.
    pub fn new<U, C>(users: U, chats: C) -> Arc<Self>
    where
        U: IntoIterator<Item = tl::enums::User>,
        C: IntoIterator<Item = tl::enums::Chat>,
    {
        Arc::new(Self {
            map: users
                .into_iter()
                .map(Entity::User)
                .chain(chats.into_iter().map(Entity::Chat))
                .map(|entity| (entity.peer(), entity))
                .collect(),
        })
    }

    /// Create a new empty entity set.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Retrieve the full entity given its peer.
    pub fn get(&self, peer: &tl::enums::Peer) -> Option<&Entity> {
        self.map.get(peer)
    }

    /// Retrieve a user by its identifier.
    pub fn get_user(&self, user_id: i64) -> Option<&Entity> {
        self.get(&tl::types::PeerUser { user_id }.into())
    }

    /// Input channel usable in requests, if the channel's access hash is known.
    pub(crate) fn input_channel(&self, channel_id: i64) -> Option<tl::enums::InputChannel> {
        let peer = tl::types::PeerChannel { channel_id }.into();
        match self.map.get(&peer)? {
            Entity::Chat(tl::enums::Chat::Channel(tl::types::Channel {
                access_hash: Some(access_hash),
                min: false,
                ..
            })) => Some(
                tl::types::InputChannel {
                    channel_id,
                    access_hash: *access_hash,
                }
                .into(),
            ),
            Entity::Chat(tl::enums::Chat::ChannelForbidden(channel)) => Some(
                tl::types::InputChannel {
                    channel_id,
                    access_hash: channel.access_hash,
                }
                .into(),
            ),
            _ => None,
        }
    }

    /// Iterate over the entities in the map.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.map.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_and_small_chats_do_not_collide() {
        let peers = PeerMap::new(
            Vec::new(),
            vec![
                tl::types::Chat {
                    deactivated: false,
                    id: 7,
                    title: "group".into(),
                    participants_count: 2,
                    date: 0,
                    version: 1,
                }
                .into(),
                tl::types::Channel {
                    broadcast: true,
                    megagroup: false,
                    min: false,
                    id: 7,
                    access_hash: Some(77),
                    title: "channel".into(),
                    username: None,
                    date: 0,
                }
                .into(),
            ],
        );

        let chat = peers.get(&tl::types::PeerChat { chat_id: 7 }.into());
        assert_eq!(chat.and_then(Entity::name), Some("group"));
        assert_eq!(
            peers.input_channel(7),
            Some(tl::enums::InputChannel::Channel(tl::types::InputChannel {
                channel_id: 7,
                access_hash: 77,
            }))
        );
        assert_eq!(peers.input_channel(8), None);
    }
}
