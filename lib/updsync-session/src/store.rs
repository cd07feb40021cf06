// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::defs::Cursor;
use snafu::Snafu;
use updsync_tl_types as tl;

/// The main interface to interact with the different [`crate::storages`].
///
/// The store is the system of record across restarts. Clients treat it as a write-through
/// cache of their in-memory state, so every method is synchronous and should be cheap.
///
/// Every method is fallible. A failing store is reported to the caller of whichever
/// operation needed it, and is never retried by the client.
pub trait Store: Send + Sync {
    /// Loads the global update cursor, if one was ever saved.
    fn cursor(&self) -> Result<Option<Cursor>, StoreError>;

    /// Replaces the saved global update cursor.
    fn set_cursor(&self, cursor: &Cursor) -> Result<(), StoreError>;

    /// Persistent timestamp of the given channel.
    ///
    /// If no pts was explicitly saved, the value from the cached full channel
    /// information should be returned, if any.
    fn channel_pts(&self, channel_id: i64) -> Result<Option<i32>, StoreError>;

    /// Changes the persistent timestamp of a channel.
    fn set_channel_pts(&self, channel_id: i64, pts: i32) -> Result<(), StoreError>;

    /// Caches the full information of a channel, which also carries its current pts.
    fn put_channel_full(
        &self,
        channel_id: i64,
        full: &tl::types::ChannelFull,
    ) -> Result<(), StoreError>;

    /// Query the input channel needed to make requests about a channel.
    ///
    /// Only channels whose access hash was seen through [`Store::upsert_entities`] are known.
    fn channel(&self, channel_id: i64) -> Result<Option<tl::enums::InputChannel>, StoreError>;

    /// Whether a message with this identifier inside this peer was already saved.
    fn message_exists(&self, peer: &tl::enums::Peer, message_id: i32) -> Result<bool, StoreError>;

    /// Saves a message so that [`Store::message_exists`] can later find it.
    fn save_message(&self, message: &tl::enums::Message) -> Result<(), StoreError>;

    /// Caches the entities that came with an update or difference.
    ///
    /// Entities marked as `min` must not overwrite their complete counterparts.
    fn upsert_entities(
        &self,
        chats: &[tl::enums::Chat],
        users: &[tl::enums::User],
    ) -> Result<(), StoreError>;
}

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
#[snafu(module(error))]
pub enum StoreError {
    #[snafu(display("Storage is unavailable: {reason}"))]
    Unavailable { reason: String },

    #[snafu(display("Stored data is not valid: {reason}"))]
    InvalidData { reason: String },
}
