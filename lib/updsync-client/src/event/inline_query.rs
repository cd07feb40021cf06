// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::peer_map::{Entity, PeerMap};
use std::sync::Arc;
use updsync_tl_types as tl;

/// Represents an update of type `BotInlineQuery`, which is sent when a user types
/// `@bot query` in any chat.
#[derive(Debug, Clone)]
pub struct InlineQuery {
    pub raw: tl::types::UpdateBotInlineQuery,
    pub(crate) peers: Arc<PeerMap>,
}

impl InlineQuery {
    pub fn query_id(&self) -> i64 {
        self.raw.query_id
    }

    /// Identifier of the user who made the query.
    pub fn sender_id(&self) -> i64 {
        self.raw.user_id
    }

    /// The user who made the query, if it came with the update.
    pub fn sender(&self) -> Option<&Entity> {
        self.peers.get_user(self.raw.user_id)
    }

    /// The text of the inline query.
    pub fn text(&self) -> &str {
        &self.raw.query
    }

    /// The offset of the inline query, used for pagination.
    pub fn offset(&self) -> &str {
        &self.raw.offset
    }
}
