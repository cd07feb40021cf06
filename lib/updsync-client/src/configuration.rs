// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::time::Duration;

// See https://core.telegram.org/method/updates.getChannelDifference.
pub(crate) const BOT_CHANNEL_DIFF_LIMIT: i32 = 100000;
pub(crate) const USER_CHANNEL_DIFF_LIMIT: i32 = 100;

/// Configuration that controls how gaps are detected and filled.
#[derive(Clone, Debug)]
pub struct UpdatesConfiguration {
    /// Should the synchronizer catch up on updates sent while the client was offline?
    ///
    /// When enabled and a previously-persisted cursor is found on start, the difference
    /// between that cursor and the server's state is fetched right away, and the resulting
    /// events are published to the event sink.
    ///
    /// By default, the persisted cursor is only used as the baseline for future gaps.
    pub catch_up: bool,

    /// How long to wait without receiving any updates before checking in with the server.
    ///
    /// Silence does not mean nothing happened, so after this period the synchronizer will
    /// fetch the difference on its own.
    pub check_in: Duration,

    /// Upper bound on each individual request made to fill a gap.
    ///
    /// A value of `None` waits for as long as the gateway takes.
    pub request_timeout: Option<Duration>,

    /// How many messages to request per page when getting a channel's difference.
    ///
    /// When `None`, the limit is chosen depending on whether the account is a bot.
    pub channel_difference_limit: Option<i32>,

    /// Whether short message updates should be fetched through the difference instead.
    ///
    /// Short messages lack most of the information that a full message would have (such as
    /// entities or media), so some applications prefer to refetch them in full.
    pub refetch_short_messages: bool,
}

/// Information about the logged-in account needed to process its updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionContext {
    /// Identifier of the logged-in user.
    pub self_id: i64,
    /// Whether the logged-in user is a bot.
    pub bot: bool,
}

impl Default for UpdatesConfiguration {
    /// Returns an instance that will not catch up, checks in every minute, and gives up on
    /// requests after thirty seconds.
    fn default() -> Self {
        Self {
            catch_up: false,
            check_in: Duration::from_secs(60),
            request_timeout: Some(Duration::from_secs(30)),
            channel_difference_limit: None,
            refetch_short_messages: false,
        }
    }
}

impl UpdatesConfiguration {
    pub(crate) fn channel_difference_limit(&self, context: &SessionContext) -> i32 {
        self.channel_difference_limit.unwrap_or(if context.bot {
            BOT_CHANNEL_DIFF_LIMIT
        } else {
            USER_CHANNEL_DIFF_LIMIT
        })
    }
}
