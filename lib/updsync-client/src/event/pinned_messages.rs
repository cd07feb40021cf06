// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use updsync_tl_types as tl;

/// Occurs whenever messages are pinned or unpinned.
#[derive(Debug, Clone)]
pub struct PinnedMessages {
    pub raw: tl::enums::Update,
}

impl PinnedMessages {
    /// The peer where the messages were (un)pinned.
    pub fn peer(&self) -> tl::enums::Peer {
        match &self.raw {
            tl::enums::Update::PinnedMessages(update) => update.peer.clone(),
            tl::enums::Update::PinnedChannelMessages(update) => tl::types::PeerChannel {
                channel_id: update.channel_id,
            }
            .into(),
            _ => unreachable!(),
        }
    }

    /// `true` if the messages were pinned, `false` if they were unpinned.
    pub fn pinned(&self) -> bool {
        match &self.raw {
            tl::enums::Update::PinnedMessages(update) => update.pinned,
            tl::enums::Update::PinnedChannelMessages(update) => update.pinned,
            _ => unreachable!(),
        }
    }

    /// Identifiers of the messages that were (un)pinned.
    pub fn messages(&self) -> &[i32] {
        match &self.raw {
            tl::enums::Update::PinnedMessages(update) => &update.messages,
            tl::enums::Update::PinnedChannelMessages(update) => &update.messages,
            _ => unreachable!(),
        }
    }
}
