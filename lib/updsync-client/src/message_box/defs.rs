// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use updsync_tl_types as tl;

/// Telegram sends `seq` equal to `0` when "it doesn't matter", so we use that value too.
pub(crate) const NO_SEQ: i32 = 0;

/// It has been observed that Telegram may send updates with `qts` equal to `0` (for
/// example with `ChannelParticipant`), interleaved with non-zero `qts` values. This
/// presumably means that the ordering should be "ignored" in that case.
///
/// Not ignoring the `pts` information in those updates can lead to failures resolving gaps.
pub(crate) const NO_PTS: i32 = 0;

/// Which counter an update advances.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Key {
    /// Account-wide `pts`.
    ///
    /// This includes private conversations (one-to-one) and small group chats.
    Common,
    /// Account-wide `qts`.
    ///
    /// This includes secret chats and some bot updates.
    Secondary,
    /// Channel-specific `pts`.
    ///
    /// This includes "megagroup", "broadcast" and "supergroup" channels.
    Channel(i64),
}

/// Represents the information needed to correctly handle a specific `tl::enums::Update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PtsInfo {
    pub(crate) pts: i32,
    pub(crate) count: i32,
    pub(crate) key: Key,
    /// Whether this is one of the `qts` updates a bot receives.
    pub(crate) bot_qts: bool,
}

/// What should be done with an update (or envelope) after comparing it with the local state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// It comes right after the local state.
    Apply,
    /// It was already handled.
    Stale,
    /// Something was missed in between, and the difference must be fetched.
    Gap,
}

/// The shapes in which the server pushes updates, normalized.
#[derive(Clone, Debug, PartialEq)]
pub enum Envelope {
    /// A single update without any entities.
    ShortUpdate { update: tl::enums::Update, date: i32 },
    /// A private message, already expanded into a `NewMessage` update.
    ShortMessage { update: tl::enums::Update, date: i32 },
    /// A small group message, already expanded into a `NewMessage` update.
    ShortChatMessage { update: tl::enums::Update, date: i32 },
    /// Several updates covering exactly one `seq`.
    Batch {
        updates: Vec<tl::enums::Update>,
        users: Vec<tl::enums::User>,
        chats: Vec<tl::enums::Chat>,
        seq: i32,
        date: i32,
    },
    /// Several updates covering the range `seq_start..=seq`.
    CombinedBatch {
        updates: Vec<tl::enums::Update>,
        users: Vec<tl::enums::User>,
        chats: Vec<tl::enums::Chat>,
        seq: i32,
        seq_start: i32,
        date: i32,
    },
    /// There are too many updates and the difference must be fetched.
    TooLong,
}
