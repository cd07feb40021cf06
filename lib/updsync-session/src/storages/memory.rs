// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::defs::Cursor;
use crate::store::error::InvalidDataSnafu;
use crate::{Store, StoreError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use updsync_tl_types as tl;

/// Everything a [`MemoryStore`] keeps.
#[derive(Clone, Debug, Default)]
pub struct StoreData {
    pub cursor: Option<Cursor>,
    pub channel_pts: HashMap<i64, i32>,
    pub channel_full: HashMap<i64, tl::types::ChannelFull>,
    pub chats: HashMap<i64, tl::enums::Chat>,
    pub users: HashMap<i64, tl::enums::User>,
    pub messages: HashSet<(tl::enums::Peer, i32)>,
}

/// In-memory store.
///
/// Does not actually offer direct ways to persist the state anywhere,
/// so it should only be used in tests or for short-lived clients
/// that are fine catching up from scratch on every start.
#[derive(Default)]
pub struct MemoryStore(Mutex<StoreData>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything currently stored.
    pub fn data(&self) -> StoreData {
        self.0.lock().unwrap().clone()
    }
}

impl From<StoreData> for MemoryStore {
    fn from(data: StoreData) -> Self {
        Self(Mutex::new(data))
    }
}

fn is_min_chat(chat: &tl::enums::Chat) -> bool {
    matches!(chat, tl::enums::Chat::Channel(c) if c.min)
}

fn is_min_user(user: &tl::enums::User) -> bool {
    matches!(user, tl::enums::User::User(u) if u.min)
}

impl Store for MemoryStore {
    fn cursor(&self) -> Result<Option<Cursor>, StoreError> {
        Ok(self.0.lock().unwrap().cursor)
    }

    fn set_cursor(&self, cursor: &Cursor) -> Result<(), StoreError> {
        self.0.lock().unwrap().cursor = Some(*cursor);
        Ok(())
    }

    fn channel_pts(&self, channel_id: i64) -> Result<Option<i32>, StoreError> {
        let data = self.0.lock().unwrap();
        Ok(data
            .channel_pts
            .get(&channel_id)
            .copied()
            .or_else(|| data.channel_full.get(&channel_id).map(|full| full.pts)))
    }

    fn set_channel_pts(&self, channel_id: i64, pts: i32) -> Result<(), StoreError> {
        self.0.lock().unwrap().channel_pts.insert(channel_id, pts);
        Ok(())
    }

    fn put_channel_full(
        &self,
        channel_id: i64,
        full: &tl::types::ChannelFull,
    ) -> Result<(), StoreError> {
        if full.id != channel_id {
            return InvalidDataSnafu {
                reason: format!(
                    "full information of channel {} stored under id {}",
                    full.id, channel_id
                ),
            }
            .fail();
        }

        let mut data = self.0.lock().unwrap();
        data.channel_pts.insert(channel_id, full.pts);
        data.channel_full.insert(channel_id, full.clone());
        Ok(())
    }

    fn channel(&self, channel_id: i64) -> Result<Option<tl::enums::InputChannel>, StoreError> {
        let data = self.0.lock().unwrap();
        Ok(match data.chats.get(&channel_id) {
            Some(tl::enums::Chat::Channel(channel)) => {
                channel.access_hash.map(|access_hash| {
                    tl::types::InputChannel {
                        channel_id,
                        access_hash,
                    }
                    .into()
                })
            }
            Some(tl::enums::Chat::ChannelForbidden(channel)) => Some(
                tl::types::InputChannel {
                    channel_id,
                    access_hash: channel.access_hash,
                }
                .into(),
            ),
            _ => None,
        })
    }

    fn message_exists(&self, peer: &tl::enums::Peer, message_id: i32) -> Result<bool, StoreError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .messages
            .contains(&(peer.clone(), message_id)))
    }

    fn save_message(&self, message: &tl::enums::Message) -> Result<(), StoreError> {
        if let Some(peer) = message.peer_id() {
            self.0
                .lock()
                .unwrap()
                .messages
                .insert((peer.clone(), message.id()));
        }
        Ok(())
    }

    fn upsert_entities(
        &self,
        chats: &[tl::enums::Chat],
        users: &[tl::enums::User],
    ) -> Result<(), StoreError> {
        let mut data = self.0.lock().unwrap();
        for chat in chats {
            let id = chat.id();
            if is_min_chat(chat) && data.chats.contains_key(&id) {
                log::trace!("not overwriting cached chat {} with min variant", id);
                continue;
            }
            data.chats.insert(id, chat.clone());
        }
        for user in users {
            let id = user.id();
            if is_min_user(user) && data.users.contains_key(&id) {
                log::trace!("not overwriting cached user {} with min variant", id);
                continue;
            }
            data.users.insert(id, user.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: i64, access_hash: Option<i64>, min: bool) -> tl::enums::Chat {
        tl::types::Channel {
            broadcast: true,
            megagroup: false,
            min,
            id,
            access_hash,
            title: format!("channel {id}"),
            username: None,
            date: 0,
        }
        .into()
    }

    fn channel_full(id: i64, pts: i32) -> tl::types::ChannelFull {
        tl::types::ChannelFull {
            id,
            about: String::new(),
            participants_count: None,
            read_inbox_max_id: 0,
            read_outbox_max_id: 0,
            unread_count: 0,
            pts,
        }
    }

    #[test]
    fn new_store_has_no_cursor() {
        let store = MemoryStore::new();
        assert_eq!(store.cursor().unwrap(), None);
    }

    #[test]
    fn channel_pts_falls_back_to_full_info() {
        let store = MemoryStore::new();
        assert_eq!(store.channel_pts(7).unwrap(), None);

        store.put_channel_full(7, &channel_full(7, 40)).unwrap();
        assert_eq!(store.channel_pts(7).unwrap(), Some(40));

        store.set_channel_pts(7, 45).unwrap();
        assert_eq!(store.channel_pts(7).unwrap(), Some(45));
    }

    #[test]
    fn channel_full_under_wrong_id_is_rejected() {
        let store = MemoryStore::new();
        let err = store.put_channel_full(8, &channel_full(7, 40)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidData { .. }));
        assert_eq!(store.channel_pts(8).unwrap(), None);
    }

    #[test]
    fn min_channel_does_not_overwrite_access_hash() {
        let store = MemoryStore::new();
        store
            .upsert_entities(&[channel(7, Some(1234), false)], &[])
            .unwrap();
        store.upsert_entities(&[channel(7, None, true)], &[]).unwrap();

        assert_eq!(
            store.channel(7).unwrap(),
            Some(tl::enums::InputChannel::Channel(tl::types::InputChannel {
                channel_id: 7,
                access_hash: 1234
            }))
        );
        assert_eq!(store.channel(8).unwrap(), None);
    }

    #[test]
    fn saved_messages_exist_per_peer() {
        let store = MemoryStore::new();
        let peer: tl::enums::Peer = tl::types::PeerChannel { channel_id: 7 }.into();
        let message: tl::enums::Message = tl::types::MessageEmpty {
            id: 3,
            peer_id: Some(peer.clone()),
        }
        .into();

        assert!(!store.message_exists(&peer, 3).unwrap());
        store.save_message(&message).unwrap();
        assert!(store.message_exists(&peer, 3).unwrap());

        let other: tl::enums::Peer = tl::types::PeerChannel { channel_id: 8 }.into();
        assert!(!store.message_exists(&other, 3).unwrap());
    }
}
