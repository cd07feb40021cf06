// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A scripted gateway and helpers to build the updates that the tests feed in.
#![allow(dead_code)]

use simple_logger::SimpleLogger;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use updsync_client::session::storages::{MemoryStore, StoreData};
use updsync_client::{
    Cursor, Event, Gateway, InvocationError, SessionContext, UpdateSynchronizer,
    UpdatesConfiguration, tl,
};

pub const SELF_ID: i64 = 1;
pub const USER_ID: i64 = 42;

pub fn init_logger() {
    let _ = SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init();
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    GetState,
    GetDifference(tl::functions::updates::GetDifference),
    GetChannelDifference(tl::functions::updates::GetChannelDifference),
    GetFullChannel(tl::functions::channels::GetFullChannel),
}

#[derive(Default)]
struct Script {
    states: VecDeque<Result<tl::enums::updates::State, InvocationError>>,
    differences: VecDeque<Result<tl::enums::updates::Difference, InvocationError>>,
    channel_differences: VecDeque<Result<tl::enums::updates::ChannelDifference, InvocationError>>,
    full_channels: VecDeque<Result<tl::enums::messages::ChatFull, InvocationError>>,
    calls: Vec<Call>,
}

/// Answers every request with the next scripted response, and records the request.
///
/// Requests without a scripted response fail with [`InvocationError::Dropped`].
#[derive(Clone, Default)]
pub struct ScriptedGateway(Arc<Mutex<Script>>);

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_state(&self, state: tl::enums::updates::State) {
        self.0.lock().unwrap().states.push_back(Ok(state));
    }

    pub fn push_difference(&self, difference: impl Into<tl::enums::updates::Difference>) {
        self.0
            .lock()
            .unwrap()
            .differences
            .push_back(Ok(difference.into()));
    }

    pub fn push_channel_difference(
        &self,
        difference: impl Into<tl::enums::updates::ChannelDifference>,
    ) {
        self.0
            .lock()
            .unwrap()
            .channel_differences
            .push_back(Ok(difference.into()));
    }

    pub fn push_channel_difference_error(&self, error: InvocationError) {
        self.0
            .lock()
            .unwrap()
            .channel_differences
            .push_back(Err(error));
    }

    pub fn push_full_channel(&self, full: tl::types::ChannelFull, chats: Vec<tl::enums::Chat>) {
        self.0.lock().unwrap().full_channels.push_back(Ok(
            tl::types::messages::ChatFull {
                full_chat: full.into(),
                chats,
                users: Vec::new(),
            }
            .into(),
        ));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().calls.clone()
    }
}

impl Gateway for ScriptedGateway {
    async fn get_state(
        &self,
        _: tl::functions::updates::GetState,
    ) -> Result<tl::enums::updates::State, InvocationError> {
        let mut script = self.0.lock().unwrap();
        script.calls.push(Call::GetState);
        script.states.pop_front().unwrap_or(Err(InvocationError::Dropped))
    }

    async fn get_difference(
        &self,
        request: tl::functions::updates::GetDifference,
    ) -> Result<tl::enums::updates::Difference, InvocationError> {
        let mut script = self.0.lock().unwrap();
        script.calls.push(Call::GetDifference(request));
        script
            .differences
            .pop_front()
            .unwrap_or(Err(InvocationError::Dropped))
    }

    async fn get_channel_difference(
        &self,
        request: tl::functions::updates::GetChannelDifference,
    ) -> Result<tl::enums::updates::ChannelDifference, InvocationError> {
        let mut script = self.0.lock().unwrap();
        script.calls.push(Call::GetChannelDifference(request));
        script
            .channel_differences
            .pop_front()
            .unwrap_or(Err(InvocationError::Dropped))
    }

    async fn get_full_channel(
        &self,
        request: tl::functions::channels::GetFullChannel,
    ) -> Result<tl::enums::messages::ChatFull, InvocationError> {
        let mut script = self.0.lock().unwrap();
        script.calls.push(Call::GetFullChannel(request));
        script
            .full_channels
            .pop_front()
            .unwrap_or(Err(InvocationError::Dropped))
    }
}

pub struct Harness {
    pub sync: UpdateSynchronizer<ScriptedGateway>,
    pub gateway: ScriptedGateway,
    pub store: Arc<MemoryStore>,
    pub events: mpsc::UnboundedReceiver<Event>,
}

impl Harness {
    pub fn new(data: StoreData, configuration: UpdatesConfiguration) -> Self {
        init_logger();
        let gateway = ScriptedGateway::new();
        let store = Arc::new(MemoryStore::from(data));
        let (sender, events) = mpsc::unbounded_channel();
        let sync = UpdateSynchronizer::new(
            gateway.clone(),
            store.clone(),
            sender,
            SessionContext {
                self_id: SELF_ID,
                bot: false,
            },
            configuration,
        );
        Self {
            sync,
            gateway,
            store,
            events,
        }
    }

    /// A synchronizer that resumes from `cursor()`.
    pub async fn started() -> Self {
        Self::started_with(StoreData {
            cursor: Some(cursor()),
            ..Default::default()
        })
        .await
    }

    pub async fn started_with(data: StoreData) -> Self {
        let harness = Self::new(data, UpdatesConfiguration::default());
        harness.sync.start().await.unwrap();
        harness
    }

    /// Events that were published to the sink so far.
    pub fn published(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}

/// The state most tests start from.
pub fn cursor() -> Cursor {
    Cursor {
        pts: 100,
        qts: 5,
        seq: 10,
        date: 1000,
    }
}

pub fn state(pts: i32, qts: i32, seq: i32, date: i32) -> tl::enums::updates::State {
    tl::types::updates::State {
        pts,
        qts,
        date,
        seq,
        unread_count: 0,
    }
    .into()
}

pub fn message(id: i32, peer: tl::enums::Peer) -> tl::enums::Message {
    tl::types::Message {
        out: false,
        mentioned: false,
        media_unread: false,
        silent: false,
        post: false,
        pinned: false,
        id,
        from_id: None,
        peer_id: peer,
        via_bot_id: None,
        reply_to_msg_id: None,
        date: 1000,
        message: format!("message {id}"),
        edit_date: None,
        ttl_period: None,
    }
    .into()
}

pub fn user_peer() -> tl::enums::Peer {
    tl::types::PeerUser { user_id: USER_ID }.into()
}

pub fn channel_peer(channel_id: i64) -> tl::enums::Peer {
    tl::types::PeerChannel { channel_id }.into()
}

pub fn new_message(id: i32, pts: i32, pts_count: i32) -> tl::enums::Update {
    tl::types::UpdateNewMessage {
        message: message(id, user_peer()),
        pts,
        pts_count,
    }
    .into()
}

pub fn channel_message(channel_id: i64, id: i32, pts: i32, pts_count: i32) -> tl::enums::Update {
    tl::types::UpdateNewChannelMessage {
        message: message(id, channel_peer(channel_id)),
        pts,
        pts_count,
    }
    .into()
}

pub fn channel(channel_id: i64) -> tl::enums::Chat {
    tl::types::Channel {
        broadcast: true,
        megagroup: false,
        min: false,
        id: channel_id,
        access_hash: Some(channel_id * 1000),
        title: format!("channel {channel_id}"),
        username: None,
        date: 0,
    }
    .into()
}

pub fn input_channel(channel_id: i64) -> tl::enums::InputChannel {
    tl::enums::InputChannel::Channel(tl::types::InputChannel {
        channel_id,
        access_hash: channel_id * 1000,
    })
}

pub fn short(update: tl::enums::Update, date: i32) -> tl::enums::Updates {
    tl::types::UpdateShort { update, date }.into()
}

pub fn combined(
    updates: Vec<tl::enums::Update>,
    chats: Vec<tl::enums::Chat>,
    seq_start: i32,
    seq: i32,
    date: i32,
) -> tl::enums::Updates {
    tl::types::UpdatesCombined {
        updates,
        users: Vec::new(),
        chats,
        date,
        seq_start,
        seq,
    }
    .into()
}

/// Store contents resuming from `cursor()` and knowing the given channels at the given pts.
pub fn with_channels(channels: &[(i64, i32)]) -> StoreData {
    StoreData {
        cursor: Some(cursor()),
        channel_pts: channels.iter().copied().collect::<HashMap<_, _>>(),
        chats: channels
            .iter()
            .map(|&(channel_id, _)| (channel_id, channel(channel_id)))
            .collect(),
        ..Default::default()
    }
}

/// The message ids of the events, in order.
pub fn message_ids(events: &[Event]) -> Vec<i32> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::NewMessage(message) => Some(message.id()),
            _ => None,
        })
        .collect()
}
