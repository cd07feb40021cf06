// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fetching the difference of individual channels.
//!
//! The `pts` of every channel lives in the store, and is only read or written while holding
//! that channel's lock. Different channels never wait on each other.
use crate::errors::{InvocationError, ProtocolError, SyncError};
use crate::event::Event;
use crate::gateway::Gateway;
use crate::message_box::{PtsInfo, Verdict, check_pts};
use crate::peer_map::PeerMap;
use crate::synchronizer::Inner;
use futures_util::future::join_all;
use log::{debug, info, trace, warn};
use std::sync::Arc;
use updsync_session::StoreError;
use updsync_tl_types as tl;

/// Errors after which updates from a channel can no longer be fetched.
fn is_access_lost(error: &InvocationError) -> bool {
    error.is("CHANNEL_PRIVATE") || error.is("CHANNEL_INVALID")
}

/// Let the caller carry on past a channel whose access hash is unknown.
///
/// The first such channel is remembered in `unresolved`, so that it can be reported once
/// everything else was applied. Any other error is returned as-is.
pub(crate) fn defer_unresolved(
    result: Result<(), SyncError>,
    unresolved: &mut Option<SyncError>,
) -> Result<(), SyncError> {
    match result {
        Err(e @ SyncError::UnresolvableChannel { .. }) => {
            unresolved.get_or_insert(e);
            Ok(())
        }
        result => result,
    }
}

impl<G: Gateway> Inner<G> {
    /// Check an update that belongs to a channel against its stored `pts`.
    pub(crate) async fn process_channel_update(
        &self,
        channel_id: i64,
        info: &PtsInfo,
        update: tl::enums::Update,
        peers: &Arc<PeerMap>,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        let _guard = self.lock_channel(channel_id).await;

        let Some(local_pts) = self.store.channel_pts(channel_id)? else {
            // The full channel reflects its current state, which already includes this update.
            match self.resolve_channel(channel_id, Some(peers))? {
                Some(channel) => self.fetch_channel_state(channel_id, channel).await?,
                None => {
                    warn!(
                        "cannot check update for channel {} as its access hash is unknown",
                        channel_id
                    );
                    self.emit(self.mapper().update(update, peers)?, events)?;
                }
            }
            return Ok(());
        };

        match check_pts(local_pts, info) {
            Verdict::Apply => {
                debug!(
                    "updating pts for channel {}: {}->{}",
                    channel_id, local_pts, info.pts
                );
                self.store.set_channel_pts(channel_id, info.pts)?;
                self.emit(self.mapper().update(update, peers)?, events)?;
            }
            Verdict::Stale => {}
            Verdict::Gap => match self.resolve_channel(channel_id, Some(peers))? {
                Some(channel) => {
                    self.get_channel_difference(channel_id, channel, local_pts, events)
                        .await?
                }
                None => {
                    // Held back (and pts left as is) until the channel can be resolved.
                    warn!(
                        "cannot getChannelDifference for {} as we're missing its hash",
                        channel_id
                    );
                    return Err(SyncError::UnresolvableChannel { channel_id });
                }
            },
        }
        Ok(())
    }

    /// Catch up on every channel that was reported as too long, concurrently.
    ///
    /// Events are appended in the same order as the signals, and the first error (if any) is
    /// returned once every channel is done.
    pub(crate) async fn get_channels_too_long(
        &self,
        signals: Vec<tl::types::UpdateChannelTooLong>,
        peers: &Arc<PeerMap>,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        if signals.is_empty() {
            return Ok(());
        }

        let results = join_all(
            signals
                .iter()
                .map(|signal| self.channel_too_long(signal, peers)),
        )
        .await;

        let mut result = Ok(());
        let mut unresolved = None;
        for (channel_events, channel_result) in results {
            events.extend(channel_events);
            if let Err(e) = defer_unresolved(channel_result, &mut unresolved) {
                if result.is_ok() {
                    result = Err(e);
                } else {
                    warn!("failed to get channel difference: {}", e);
                }
            }
        }
        result?;
        unresolved.map_or(Ok(()), Err)
    }

    async fn channel_too_long(
        &self,
        signal: &tl::types::UpdateChannelTooLong,
        peers: &Arc<PeerMap>,
    ) -> (Vec<Event>, Result<(), SyncError>) {
        let mut events = Vec::new();
        let result = self
            .handle_channel_too_long(signal, peers, &mut events)
            .await;
        (events, result)
    }

    async fn handle_channel_too_long(
        &self,
        signal: &tl::types::UpdateChannelTooLong,
        peers: &Arc<PeerMap>,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        let channel_id = signal.channel_id;
        info!("channel {} is too long; getting its difference", channel_id);

        let _guard = self.lock_channel(channel_id).await;

        let stored_pts = self.store.channel_pts(channel_id)?;
        if let (Some(stored), Some(target)) = (stored_pts, signal.pts) {
            if target <= stored {
                debug!(
                    "channel {} is already at pts {} (signalled {})",
                    channel_id, stored, target
                );
                return Ok(());
            }
        }

        let Some(channel) = self.resolve_channel(channel_id, Some(peers))? else {
            warn!(
                "cannot getChannelDifference for {} as we're missing its hash",
                channel_id
            );
            return Err(SyncError::UnresolvableChannel { channel_id });
        };
        match stored_pts {
            Some(pts) => {
                self.get_channel_difference(channel_id, channel, pts, events)
                    .await
            }
            None => self.fetch_channel_state(channel_id, channel).await,
        }
    }

    /// Resync a single channel on request.
    pub(crate) async fn fill_channel_gap(
        &self,
        channel_id: i64,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        let _guard = self.lock_channel(channel_id).await;

        let channel = self
            .resolve_channel(channel_id, None)?
            .ok_or(SyncError::UnresolvableChannel { channel_id })?;
        match self.store.channel_pts(channel_id)? {
            Some(pts) => {
                self.get_channel_difference(channel_id, channel, pts, events)
                    .await
            }
            None => self.fetch_channel_state(channel_id, channel).await,
        }
    }

    /// Find the input channel needed to make requests, first from the entities that came with
    /// the updates, then from the store.
    fn resolve_channel(
        &self,
        channel_id: i64,
        peers: Option<&Arc<PeerMap>>,
    ) -> Result<Option<tl::enums::InputChannel>, StoreError> {
        if let Some(channel) = peers.and_then(|peers| peers.input_channel(channel_id)) {
            return Ok(Some(channel));
        }
        self.store.channel(channel_id)
    }

    /// Fetch the full channel, which also provides its first `pts`.
    async fn fetch_channel_state(
        &self,
        channel_id: i64,
        channel: tl::enums::InputChannel,
    ) -> Result<(), SyncError> {
        let request = tl::functions::channels::GetFullChannel { channel };
        trace!("requesting {:?}", request);
        let tl::enums::messages::ChatFull::Full(full) =
            match self.invoke(self.gateway.get_full_channel(request)).await {
                Ok(full) => full,
                Err(e) if is_access_lost(&e) => {
                    info!("account can no longer access channel {}: {}", channel_id, e);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

        self.store.upsert_entities(&full.chats, &full.users)?;
        match full.full_chat {
            tl::enums::ChatFull::ChannelFull(channel_full) => {
                debug!(
                    "channel {} starts at pts {}",
                    channel_id, channel_full.pts
                );
                self.store.put_channel_full(channel_id, &channel_full)?;
                Ok(())
            }
            tl::enums::ChatFull::Full(_) => Err(ProtocolError::UnexpectedResponse {
                request: "channels.getFullChannel",
            }
            .into()),
        }
    }

    /// Fetch pages of channel difference until the server marks one as final.
    ///
    /// Must be called while holding the channel's lock.
    pub(crate) async fn get_channel_difference(
        &self,
        channel_id: i64,
        channel: tl::enums::InputChannel,
        stored_pts: i32,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        let limit = self.configuration.channel_difference_limit(&self.context);
        let mut pts = stored_pts.max(1);

        loop {
            let request = tl::functions::updates::GetChannelDifference {
                force: false,
                channel: channel.clone(),
                filter: tl::enums::ChannelMessagesFilter::Empty,
                pts,
                limit,
            };
            trace!("requesting {:?}", request);

            let difference = match self
                .invoke(self.gateway.get_channel_difference(request))
                .await
            {
                Ok(difference) => difference,
                Err(e) if is_access_lost(&e) => {
                    info!(
                        "account can no longer fetch updates from channel {}: {}",
                        channel_id, e
                    );
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            trace!(
                "applying channel difference for {}: {:?}",
                channel_id, difference
            );

            let r#final = match difference {
                tl::enums::updates::ChannelDifference::Empty(diff) => {
                    self.store.set_channel_pts(channel_id, diff.pts)?;
                    pts = diff.pts;
                    diff.r#final
                }
                tl::enums::updates::ChannelDifference::Difference(
                    tl::types::updates::ChannelDifference {
                        r#final,
                        pts: new_pts,
                        new_messages,
                        other_updates,
                        chats,
                        users,
                        ..
                    },
                ) => {
                    self.store.upsert_entities(&chats, &users)?;
                    let peers = PeerMap::new(users, chats);
                    let mapper = self.mapper();
                    for update in other_updates {
                        self.emit(mapper.update(update, &peers)?, events)?;
                    }
                    for message in new_messages {
                        self.emit(mapper.message(message, &peers)?, events)?;
                    }
                    self.store.set_channel_pts(channel_id, new_pts)?;
                    pts = new_pts;
                    r#final
                }
                tl::enums::updates::ChannelDifference::TooLong(diff) => {
                    pts = match diff.dialog {
                        tl::enums::Dialog::Dialog(dialog) => dialog.pts.unwrap_or(1),
                        tl::enums::Dialog::Folder(_) => 1,
                    };
                    info!(
                        "channel {} difference is too long; resetting pts to {}",
                        channel_id, pts
                    );
                    self.store.set_channel_pts(channel_id, pts)?;
                    true
                }
            };

            if r#final {
                debug!(
                    "channel {} difference done at pts {}",
                    channel_id, pts
                );
                return Ok(());
            }
            debug!(
                "channel {} difference continues from pts {}",
                channel_id, pts
            );
        }
    }
}
