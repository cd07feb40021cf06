// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The collaborators that the synchronizer talks to.

use crate::errors::InvocationError;
use crate::event::Event;
use std::future::Future;
use tokio::sync::mpsc;
use updsync_tl_types as tl;

/// The connection through which requests are made to the server.
///
/// Implementations are expected to deal with transport concerns (reconnecting, migrating,
/// waiting on flood errors). The synchronizer never retries a failed request by itself.
pub trait Gateway: Send + Sync + 'static {
    /// `updates.getState`.
    fn get_state(
        &self,
        request: tl::functions::updates::GetState,
    ) -> impl Future<Output = Result<tl::enums::updates::State, InvocationError>> + Send;

    /// `updates.getDifference`.
    fn get_difference(
        &self,
        request: tl::functions::updates::GetDifference,
    ) -> impl Future<Output = Result<tl::enums::updates::Difference, InvocationError>> + Send;

    /// `updates.getChannelDifference`.
    fn get_channel_difference(
        &self,
        request: tl::functions::updates::GetChannelDifference,
    ) -> impl Future<Output = Result<tl::enums::updates::ChannelDifference, InvocationError>> + Send;

    /// `channels.getFullChannel`.
    fn get_full_channel(
        &self,
        request: tl::functions::channels::GetFullChannel,
    ) -> impl Future<Output = Result<tl::enums::messages::ChatFull, InvocationError>> + Send;
}

/// Where events produced outside of [`crate::UpdateSynchronizer::handle`] are delivered.
///
/// Publishing is fire-and-forget, and must preserve the order in which events are published.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: Event);
}

impl EventSink for mpsc::UnboundedSender<Event> {
    fn publish(&self, event: Event) {
        if self.send(event).is_err() {
            log::trace!("event receiver was dropped; discarding event");
        }
    }
}
