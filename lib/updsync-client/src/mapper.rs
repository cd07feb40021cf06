// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turns updates that were already ordered into [`Event`]s.
//!
//! New messages are checked against the store before being emitted, so that replaying a
//! difference which overlaps with what was already delivered does not produce duplicates.
use crate::event::Event;
use crate::peer_map::PeerMap;
use log::debug;
use std::sync::Arc;
use updsync_session::{Store, StoreError};
use updsync_tl_types as tl;

pub(crate) struct EventMapper<'a> {
    store: &'a dyn Store,
}

impl<'a> EventMapper<'a> {
    pub(crate) fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub(crate) fn update(
        &self,
        update: tl::enums::Update,
        peers: &Arc<PeerMap>,
    ) -> Result<Option<Event>, StoreError> {
        self.dedup(Event::from_raw(update, peers))
    }

    /// Map one of the `new_messages` of a difference.
    pub(crate) fn message(
        &self,
        message: tl::enums::Message,
        peers: &Arc<PeerMap>,
    ) -> Result<Option<Event>, StoreError> {
        self.dedup(Event::from_new_message(message, peers))
    }

    fn dedup(&self, event: Option<Event>) -> Result<Option<Event>, StoreError> {
        if let Some(Event::NewMessage(message)) = &event {
            if let Some(peer) = message.raw.peer_id() {
                if self.store.message_exists(peer, message.id())? {
                    debug!(
                        "skipping message {} in {:?} as it was already delivered",
                        message.id(),
                        peer
                    );
                    return Ok(None);
                }
            }
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use updsync_session::storages::MemoryStore;

    fn new_message(id: i32) -> tl::enums::Message {
        tl::types::Message {
            out: false,
            mentioned: false,
            media_unread: false,
            silent: false,
            post: false,
            pinned: false,
            id,
            from_id: None,
            peer_id: tl::types::PeerUser { user_id: 42 }.into(),
            via_bot_id: None,
            reply_to_msg_id: None,
            date: 1000,
            message: "hi".to_string(),
            edit_date: None,
            ttl_period: None,
        }
        .into()
    }

    #[test]
    fn delivered_messages_are_skipped() {
        let store = MemoryStore::new();
        store.save_message(&new_message(1)).unwrap();
        let mapper = EventMapper::new(&store);
        let peers = PeerMap::empty();

        assert!(mapper.message(new_message(1), &peers).unwrap().is_none());
        assert!(matches!(
            mapper.message(new_message(2), &peers).unwrap(),
            Some(Event::NewMessage(_))
        ));
    }

    #[test]
    fn other_updates_are_not_deduplicated() {
        let store = MemoryStore::new();
        store.save_message(&new_message(1)).unwrap();
        let mapper = EventMapper::new(&store);

        let update = tl::types::UpdateEditMessage {
            message: new_message(1),
            pts: 10,
            pts_count: 1,
        };
        assert!(matches!(
            mapper.update(update.into(), &PeerMap::empty()).unwrap(),
            Some(Event::MessageEdited(_))
        ));
    }
}
