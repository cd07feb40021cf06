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

/// Update that bots receive when a user presses one of the bot's inline callback buttons.
#[derive(Debug, Clone)]
pub struct CallbackQuery {
    pub raw: tl::enums::Update,
    pub(crate) peers: Arc<PeerMap>,
}

impl CallbackQuery {
    /// Identifier to use when answering the query.
    pub fn query_id(&self) -> i64 {
        match &self.raw {
            tl::enums::Update::BotCallbackQuery(update) => update.query_id,
            tl::enums::Update::InlineBotCallbackQuery(update) => update.query_id,
            _ => unreachable!(),
        }
    }

    /// The peer where the callback query occured.
    ///
    /// Queries from buttons in inline messages occur in the private chat with the user.
    pub fn peer_id(&self) -> tl::enums::Peer {
        match &self.raw {
            tl::enums::Update::BotCallbackQuery(update) => update.peer.clone(),
            tl::enums::Update::InlineBotCallbackQuery(update) => tl::types::PeerUser {
                user_id: update.user_id,
            }
            .into(),
            _ => unreachable!(),
        }
    }

    /// The peer where the callback query occured, if it came with the update.
    pub fn peer(&self) -> Option<&Entity> {
        self.peers.get(&self.peer_id())
    }

    /// Identifier of the user who pressed the button.
    pub fn sender_id(&self) -> i64 {
        match &self.raw {
            tl::enums::Update::BotCallbackQuery(update) => update.user_id,
            tl::enums::Update::InlineBotCallbackQuery(update) => update.user_id,
            _ => unreachable!(),
        }
    }

    /// The user who pressed the button, if it came with the update.
    pub fn sender(&self) -> Option<&Entity> {
        self.peers.get_user(self.sender_id())
    }

    /// They binary payload data contained by the inline button which was pressed.
    pub fn data(&self) -> &[u8] {
        match &self.raw {
            tl::enums::Update::BotCallbackQuery(update) => update.data.as_deref(),
            tl::enums::Update::InlineBotCallbackQuery(update) => update.data.as_deref(),
            _ => unreachable!(),
        }
        .unwrap_or(&[])
    }

    /// Whether the callback query was generated from an inline message.
    pub fn is_from_inline(&self) -> bool {
        matches!(self.raw, tl::enums::Update::InlineBotCallbackQuery(_))
    }
}
