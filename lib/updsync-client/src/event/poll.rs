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

/// Occurs when the results of a poll change.
#[derive(Debug, Clone)]
pub struct PollResults {
    pub raw: tl::types::UpdateMessagePoll,
}

impl PollResults {
    pub fn poll_id(&self) -> i64 {
        self.raw.poll_id
    }

    /// Total amount of people that voted, if known.
    pub fn total_voters(&self) -> Option<i32> {
        self.raw.results.total_voters
    }

    /// Voters of each option as `(option, voters, chosen)`, if known.
    pub fn answers(&self) -> impl Iterator<Item = (&[u8], i32, bool)> {
        self.raw
            .results
            .results
            .iter()
            .flatten()
            .map(|answer| (answer.option.as_slice(), answer.voters, answer.chosen))
    }
}

/// Occurs when someone votes on a non-anonymous poll sent by a bot.
#[derive(Debug, Clone)]
pub struct PollVote {
    pub raw: tl::types::UpdateMessagePollVote,
    pub(crate) peers: Arc<PeerMap>,
}

impl PollVote {
    pub fn poll_id(&self) -> i64 {
        self.raw.poll_id
    }

    /// The peer that voted.
    pub fn voter_id(&self) -> &tl::enums::Peer {
        &self.raw.peer
    }

    /// The entity that voted, if it came with the update.
    pub fn voter(&self) -> Option<&Entity> {
        self.peers.get(&self.raw.peer)
    }

    /// Options chosen by the voter. Empty if the vote was retracted.
    pub fn options(&self) -> &[Vec<u8>] {
        &self.raw.options
    }
}
