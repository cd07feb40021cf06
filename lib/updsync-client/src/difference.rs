// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fetching the difference of the global state.
use crate::channel_difference::defer_unresolved;
use crate::errors::SyncError;
use crate::event::Event;
use crate::gateway::Gateway;
use crate::message_box::{Key, MessageBox, PtsInfo};
use crate::peer_map::PeerMap;
use crate::synchronizer::{Inner, Phase};
use log::{debug, info, trace, warn};
use updsync_tl_types as tl;

impl<G: Gateway> Inner<G> {
    /// Fetch the difference while marking the synchronizer as resyncing.
    pub(crate) async fn resync(
        &self,
        message_box: &mut MessageBox,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        self.transition(Phase::Ready, Phase::Resyncing);
        let result = self.get_difference(message_box, events).await;
        self.transition(Phase::Resyncing, Phase::Ready);
        result
    }

    /// Fetch pages of difference until the server says there is nothing left.
    ///
    /// The state is persisted after every page, so an error leaves the cursor at the last
    /// page that was fully applied. Channels that could not be resolved do not stop the
    /// remaining pages, and the first of them is reported at the end.
    pub(crate) async fn get_difference(
        &self,
        message_box: &mut MessageBox,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        let mut unresolved = None;
        self.get_difference_pages(message_box, events, &mut unresolved)
            .await?;
        unresolved.map_or(Ok(()), Err)
    }

    async fn get_difference_pages(
        &self,
        message_box: &mut MessageBox,
        events: &mut Vec<Event>,
        unresolved: &mut Option<SyncError>,
    ) -> Result<(), SyncError> {
        loop {
            let Some(request) = message_box.get_difference() else {
                warn!("cannot get difference before the update state is known");
                return Ok(());
            };

            let difference = self.invoke(self.gateway.get_difference(request)).await?;
            trace!("applying account difference: {:?}", difference);
            match difference {
                tl::enums::updates::Difference::Empty(diff) => {
                    message_box.apply_empty_difference(diff.seq, diff.date);
                    self.store.set_cursor(&message_box.cursor())?;
                    return Ok(());
                }
                tl::enums::updates::Difference::Difference(diff) => {
                    debug!(
                        "handling full difference {:?}; no longer getting diff",
                        diff.state
                    );
                    let result = self.apply_difference_type(message_box, diff, events).await;
                    return defer_unresolved(result, unresolved);
                }
                tl::enums::updates::Difference::Slice(tl::types::updates::DifferenceSlice {
                    new_messages,
                    other_updates,
                    chats,
                    users,
                    intermediate_state: state,
                }) => {
                    debug!("handling partial difference {:?}", state);
                    let result = self
                        .apply_difference_type(
                            message_box,
                            tl::types::updates::Difference {
                                new_messages,
                                other_updates,
                                chats,
                                users,
                                state,
                            },
                            events,
                        )
                        .await;
                    defer_unresolved(result, unresolved)?;
                }
                tl::enums::updates::Difference::TooLong(diff) => {
                    info!(
                        "handling too-long difference (pts = {}); no longer getting diff",
                        diff.pts
                    );
                    message_box.set_pts(Key::Common, diff.pts);
                    self.store.set_cursor(&message_box.cursor())?;
                    return Ok(());
                }
            }
        }
    }

    async fn apply_difference_type(
        &self,
        message_box: &mut MessageBox,
        tl::types::updates::Difference {
            new_messages,
            other_updates,
            chats,
            users,
            state,
        }: tl::types::updates::Difference,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        self.store.upsert_entities(&chats, &users)?;
        let peers = PeerMap::new(users, chats);
        let mapper = self.mapper();

        // The difference is authoritative for the global state, but other_updates may also
        // contain things like updateNewChannelMessage, which still need to be checked against
        // the channel's own state.
        let mut too_long = Vec::new();
        let mut unresolved = None;
        for update in other_updates {
            if let tl::enums::Update::ChannelTooLong(signal) = update {
                too_long.push(signal);
                continue;
            }
            match PtsInfo::from_update(&update) {
                Some(info) => match info.key {
                    Key::Channel(channel_id) => {
                        let result = self
                            .process_channel_update(channel_id, &info, update, &peers, events)
                            .await;
                        defer_unresolved(result, &mut unresolved)?
                    }
                    Key::Common | Key::Secondary => {
                        self.emit(mapper.update(update, &peers)?, events)?
                    }
                },
                None => self.emit(mapper.update(update, &peers)?, events)?,
            }
        }

        for message in new_messages {
            self.emit(mapper.message(message, &peers)?, events)?;
        }

        message_box.set_state(&state);
        self.store.set_cursor(&message_box.cursor())?;

        let result = self.get_channels_too_long(too_long, &peers, events).await;
        defer_unresolved(result, &mut unresolved)?;
        unresolved.map_or(Ok(()), Err)
    }
}
