// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The orchestrator that ties every other piece together.
use crate::channel_difference::defer_unresolved;
use crate::check_in::CheckIn;
use crate::configuration::{SessionContext, UpdatesConfiguration};
use crate::errors::{InvocationError, SyncError};
use crate::event::Event;
use crate::gateway::{EventSink, Gateway};
use crate::mapper::EventMapper;
use crate::message_box::{Envelope, Key, MessageBox, NO_SEQ, PtsInfo, Verdict, check_pts, classify};
use crate::peer_map::PeerMap;
use log::{debug, info, trace, warn};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use updsync_session::{Cursor, Store, StoreError};
use updsync_tl_types as tl;

/// The lifecycle of an [`UpdateSynchronizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Created, but [`UpdateSynchronizer::start`] has not completed yet.
    Uninitialized,
    /// The initial cursor is being loaded or fetched.
    Hydrating,
    /// Updates can be handled.
    Ready,
    /// A global difference is being fetched.
    Resyncing,
    /// [`UpdateSynchronizer::shutdown`] was called. This phase is final.
    ShutDown,
}

/// Keeps the update state of an account in sync with the server.
///
/// Every `Updates` received from the transport should be fed into [`Self::handle`], in the same
/// order they arrived. Gaps are detected and filled automatically, so the events returned are
/// ordered and free of duplicates.
///
/// Cloning the synchronizer is cheap, and all clones share the same state.
pub struct UpdateSynchronizer<G: Gateway> {
    inner: Arc<Inner<G>>,
}

pub(crate) struct Inner<G: Gateway> {
    pub(crate) gateway: G,
    pub(crate) store: Arc<dyn Store>,
    sink: Box<dyn EventSink>,
    pub(crate) context: SessionContext,
    pub(crate) configuration: UpdatesConfiguration,
    phase: Mutex<Phase>,
    pub(crate) message_box: AsyncMutex<MessageBox>,
    channel_locks: Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
    check_in: Mutex<Option<CheckIn>>,
}

/// Exclusive access to the `pts` of a channel.
///
/// The channel's entry is removed from the registry on drop, unless another task is still
/// waiting for it.
pub(crate) struct ChannelGuard<'a> {
    locks: &'a Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
    channel_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for ChannelGuard<'_> {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap();
        drop(self.guard.take());
        if locks
            .get(&self.channel_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.channel_id);
        }
    }
}

impl<G: Gateway> Clone for UpdateSynchronizer<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Gateway> UpdateSynchronizer<G> {
    pub fn new<S: EventSink + 'static>(
        gateway: G,
        store: Arc<dyn Store>,
        sink: S,
        context: SessionContext,
        configuration: UpdatesConfiguration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                store,
                sink: Box::new(sink),
                context,
                configuration,
                phase: Mutex::new(Phase::Uninitialized),
                message_box: AsyncMutex::new(MessageBox::new()),
                channel_locks: Mutex::new(HashMap::new()),
                check_in: Mutex::new(None),
            }),
        }
    }

    /// Load the cursor from the store, or fetch it from the server if there is none, and start
    /// the check-in timer.
    ///
    /// If [`UpdatesConfiguration::catch_up`] is enabled, the updates missed while offline are
    /// fetched right away and published to the event sink.
    ///
    /// Calling this method more than once has no effect.
    pub async fn start(&self) -> Result<(), SyncError> {
        let inner = &self.inner;
        if !inner.transition(Phase::Uninitialized, Phase::Hydrating) {
            return match inner.phase() {
                Phase::ShutDown => Err(SyncError::ShutDown),
                _ => {
                    debug!("update synchronizer was already started");
                    Ok(())
                }
            };
        }

        let mut message_box = inner.message_box.lock().await;
        let mut events = Vec::new();
        let result = inner.hydrate(&mut message_box, &mut events).await;
        inner.publish(events);

        if let Err(e) = result {
            inner.transition(Phase::Hydrating, Phase::Uninitialized);
            return Err(e);
        }
        if !inner.transition(Phase::Hydrating, Phase::Ready) {
            return Err(SyncError::ShutDown);
        }

        *inner.check_in.lock().unwrap() =
            Some(CheckIn::spawn(inner, inner.configuration.check_in));
        info!("update synchronizer ready at {:?}", message_box.cursor());
        Ok(())
    }

    /// Process the `Updates` received from the server and return the events they produce.
    ///
    /// If a gap is detected, the missing updates are fetched before this method returns, and
    /// their events are included in the result in the order they occurred.
    ///
    /// Calls are serialized, so feeding updates from several tasks is safe, but their relative
    /// order is then up to the scheduler.
    ///
    /// If an error occurs after some events were already produced, those events are published
    /// to the event sink before the error is returned.
    pub async fn handle(&self, updates: tl::enums::Updates) -> Result<Vec<Event>, SyncError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        let mut message_box = inner.message_box.lock().await;
        inner.ensure_ready()?;
        inner.reset_check_in();

        trace!("handling updates: {:?}", updates);
        let envelope = match classify(updates, inner.context.self_id) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("rejecting updates: {}", e);
                return Err(e.into());
            }
        };

        let mut events = Vec::new();
        match inner
            .process_envelope(&mut message_box, envelope, &mut events)
            .await
        {
            Ok(()) => Ok(events),
            Err(e) => {
                inner.publish(events);
                Err(e)
            }
        }
    }

    /// Fetch the difference even if no gap was detected, publishing the events to the sink.
    ///
    /// Useful after reconnecting, as updates may have been lost while the connection was down.
    pub async fn fill_gap(&self) -> Result<(), SyncError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        let mut message_box = inner.message_box.lock().await;
        inner.ensure_ready()?;

        let mut events = Vec::new();
        let result = inner.resync(&mut message_box, &mut events).await;
        inner.publish(events);
        result
    }

    /// Fetch the difference of a single channel, publishing the events to the sink.
    ///
    /// Only updates for this channel are held back while this runs.
    pub async fn fill_channel_gap(&self, channel_id: i64) -> Result<(), SyncError> {
        let inner = &self.inner;
        inner.ensure_ready()?;

        let mut events = Vec::new();
        let result = inner.fill_channel_gap(channel_id, &mut events).await;
        inner.publish(events);
        result
    }

    /// Stop the check-in timer and refuse any further work.
    ///
    /// Calls to [`Self::handle`] that are already running will finish, and should be awaited
    /// before dropping the synchronizer so that their progress is persisted.
    pub fn shutdown(&self) {
        *self.inner.phase.lock().unwrap() = Phase::ShutDown;
        if let Some(check_in) = self.inner.check_in.lock().unwrap().take() {
            check_in.cancel();
        }
        info!("update synchronizer shut down");
    }

    /// A snapshot of the global update state.
    pub async fn cursor(&self) -> Cursor {
        self.inner.message_box.lock().await.cursor()
    }

    pub fn phase(&self) -> Phase {
        self.inner.phase()
    }
}

impl<G: Gateway> Inner<G> {
    pub(crate) fn phase(&self) -> Phase {
        *self.phase.lock().unwrap()
    }

    /// Move from one phase to another, only if currently in the expected phase.
    pub(crate) fn transition(&self, from: Phase, to: Phase) -> bool {
        let mut phase = self.phase.lock().unwrap();
        if *phase == from {
            trace!("phase {:?} -> {:?}", from, to);
            *phase = to;
            true
        } else {
            false
        }
    }

    pub(crate) fn ensure_ready(&self) -> Result<(), SyncError> {
        match self.phase() {
            Phase::Ready | Phase::Resyncing => Ok(()),
            Phase::ShutDown => Err(SyncError::ShutDown),
            Phase::Uninitialized | Phase::Hydrating => Err(SyncError::NotReady),
        }
    }

    fn reset_check_in(&self) {
        if let Some(check_in) = self.check_in.lock().unwrap().as_ref() {
            check_in.reset(self.configuration.check_in);
        }
    }

    pub(crate) fn publish(&self, events: Vec<Event>) {
        for event in events {
            self.sink.publish(event);
        }
    }

    pub(crate) fn mapper(&self) -> EventMapper<'_> {
        EventMapper::new(self.store.as_ref())
    }

    /// Push a mapped event, remembering new messages so that they are never delivered twice.
    pub(crate) fn emit(
        &self,
        event: Option<Event>,
        events: &mut Vec<Event>,
    ) -> Result<(), StoreError> {
        if let Some(event) = event {
            if let Event::NewMessage(message) = &event {
                self.store.save_message(&message.raw)?;
            }
            events.push(event);
        }
        Ok(())
    }

    /// Run a request, giving up after the configured timeout.
    pub(crate) async fn invoke<T>(
        &self,
        request: impl Future<Output = Result<T, InvocationError>>,
    ) -> Result<T, InvocationError> {
        match self.configuration.request_timeout {
            Some(duration) => tokio::time::timeout(duration, request)
                .await
                .map_err(|_| InvocationError::Timeout)?,
            None => request.await,
        }
    }

    /// Wait for the lock that must be held while reading or writing the `pts` of a channel.
    pub(crate) async fn lock_channel(&self, channel_id: i64) -> ChannelGuard<'_> {
        let lock = Arc::clone(
            self.channel_locks
                .lock()
                .unwrap()
                .entry(channel_id)
                .or_default(),
        );
        ChannelGuard {
            locks: &self.channel_locks,
            channel_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    async fn hydrate(
        &self,
        message_box: &mut MessageBox,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        match self.store.cursor()? {
            Some(cursor) if cursor.is_hydrated() => {
                *message_box = MessageBox::load(cursor);
                if self.configuration.catch_up {
                    let mut unresolved = None;
                    let result = self.get_difference(message_box, events).await;
                    defer_unresolved(result, &mut unresolved)?;
                    if let Some(e) = unresolved {
                        warn!("caught up, but some channels were skipped: {}", e);
                    }
                }
            }
            _ => {
                debug!("no previous update state; fetching it");
                let state = self
                    .invoke(self.gateway.get_state(tl::functions::updates::GetState {}))
                    .await?;
                message_box.set_state(&state);
                self.store.set_cursor(&message_box.cursor())?;
            }
        }
        Ok(())
    }

    async fn process_envelope(
        &self,
        message_box: &mut MessageBox,
        envelope: Envelope,
        events: &mut Vec<Event>,
    ) -> Result<(), SyncError> {
        let refetch = self.configuration.refetch_short_messages && envelope.is_short_message();
        let Some(tl::types::UpdatesCombined {
            updates,
            users,
            chats,
            date,
            seq_start,
            seq,
        }) = envelope.into_combined()
        else {
            info!("received updatesTooLong; getting difference");
            return self.resync(message_box, events).await;
        };

        self.store.upsert_entities(&chats, &users)?;
        let peers = PeerMap::new(users, chats);

        if seq_start != NO_SEQ {
            match message_box.check_seq(seq_start) {
                Verdict::Apply => {}
                Verdict::Stale => return Ok(()),
                Verdict::Gap => return self.resync(message_box, events).await,
            }
        }

        let before = message_box.cursor();
        let mut resynced = false;
        let mut unresolved = None;
        let mut too_long = Vec::new();
        for update in updates {
            match update {
                tl::enums::Update::ChannelTooLong(signal) => too_long.push(signal),
                // The difference already covered the rest of the pts and qts updates.
                update if resynced && is_global(&update) => {
                    debug!("skipping update already covered by the difference");
                }
                update => {
                    resynced |= self
                        .process_update(
                            message_box,
                            update,
                            &peers,
                            refetch,
                            events,
                            &mut unresolved,
                        )
                        .await?
                }
            }
        }

        if !resynced {
            message_box.end_envelope(seq, date);
        }
        if message_box.cursor() != before {
            self.store.set_cursor(&message_box.cursor())?;
        }

        let result = self.get_channels_too_long(too_long, &peers, events).await;
        defer_unresolved(result, &mut unresolved)?;
        unresolved.map_or(Ok(()), Err)
    }

    /// Returns `true` if the update caused the difference to be fetched.
    async fn process_update(
        &self,
        message_box: &mut MessageBox,
        update: tl::enums::Update,
        peers: &Arc<PeerMap>,
        refetch: bool,
        events: &mut Vec<Event>,
        unresolved: &mut Option<SyncError>,
    ) -> Result<bool, SyncError> {
        let Some(info) = PtsInfo::from_update(&update) else {
            self.emit(self.mapper().update(update, peers)?, events)?;
            return Ok(false);
        };

        let local_pts = match info.key {
            Key::Channel(channel_id) => {
                let result = self
                    .process_channel_update(channel_id, &info, update, peers, events)
                    .await;
                defer_unresolved(result, unresolved)?;
                return Ok(false);
            }
            Key::Common => message_box.cursor().pts,
            Key::Secondary => message_box.cursor().qts,
        };

        match check_pts(local_pts, &info) {
            Verdict::Apply if refetch => {
                debug!("refetching short message through the difference");
                defer_unresolved(self.resync(message_box, events).await, unresolved)?;
                Ok(true)
            }
            Verdict::Apply => {
                message_box.set_pts(info.key, info.pts);
                self.emit(self.mapper().update(update, peers)?, events)?;
                Ok(false)
            }
            Verdict::Stale => Ok(false),
            Verdict::Gap => {
                defer_unresolved(self.resync(message_box, events).await, unresolved)?;
                Ok(true)
            }
        }
    }
}

/// Whether the update is ordered by the global `pts` or `qts`.
fn is_global(update: &tl::enums::Update) -> bool {
    PtsInfo::from_update(update).is_some_and(|info| !matches!(info.key, Key::Channel(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use updsync_session::storages::MemoryStore;

    struct NoGateway;

    impl Gateway for NoGateway {
        async fn get_state(
            &self,
            _: tl::functions::updates::GetState,
        ) -> Result<tl::enums::updates::State, InvocationError> {
            Err(InvocationError::Dropped)
        }

        async fn get_difference(
            &self,
            _: tl::functions::updates::GetDifference,
        ) -> Result<tl::enums::updates::Difference, InvocationError> {
            Err(InvocationError::Dropped)
        }

        async fn get_channel_difference(
            &self,
            _: tl::functions::updates::GetChannelDifference,
        ) -> Result<tl::enums::updates::ChannelDifference, InvocationError> {
            Err(InvocationError::Dropped)
        }

        async fn get_full_channel(
            &self,
            _: tl::functions::channels::GetFullChannel,
        ) -> Result<tl::enums::messages::ChatFull, InvocationError> {
            Err(InvocationError::Dropped)
        }
    }

    fn get_synchronizer() -> UpdateSynchronizer<NoGateway> {
        panic!()
    }

    #[test]
    fn ensure_futures_impl_send() {
        if false {
            // We just want it to type-check, not actually run.
            fn typeck(_: impl Future + Send) {}
            typeck(get_synchronizer().start());
            typeck(get_synchronizer().handle(tl::enums::Updates::TooLong));
            typeck(get_synchronizer().fill_gap());
            typeck(get_synchronizer().fill_channel_gap(1));
        }
    }

    fn idle_synchronizer() -> UpdateSynchronizer<NoGateway> {
        let (sender, _receiver) = tokio::sync::mpsc::unbounded_channel();
        UpdateSynchronizer::new(
            NoGateway,
            Arc::new(MemoryStore::new()),
            sender,
            SessionContext {
                self_id: 1,
                bot: false,
            },
            UpdatesConfiguration::default(),
        )
    }

    #[test]
    fn transitions_only_happen_from_the_expected_phase() {
        let sync = idle_synchronizer();
        assert_eq!(sync.phase(), Phase::Uninitialized);
        assert!(!sync.inner.transition(Phase::Ready, Phase::Resyncing));
        assert!(sync.inner.transition(Phase::Uninitialized, Phase::Hydrating));
        assert!(matches!(sync.inner.ensure_ready(), Err(SyncError::NotReady)));

        sync.shutdown();
        assert_eq!(sync.phase(), Phase::ShutDown);
        assert!(!sync.inner.transition(Phase::Hydrating, Phase::Ready));
        assert!(matches!(sync.inner.ensure_ready(), Err(SyncError::ShutDown)));
    }

    #[tokio::test]
    async fn idle_channel_locks_are_forgotten() {
        let sync = idle_synchronizer();
        let locks = || sync.inner.channel_locks.lock().unwrap().len();

        let held = sync.inner.lock_channel(7).await;
        let other = sync.inner.lock_channel(8).await;
        assert_eq!(locks(), 2);
        drop(other);
        assert_eq!(locks(), 1);

        let waiter = tokio::spawn({
            let sync = sync.clone();
            async move {
                let _guard = sync.inner.lock_channel(7).await;
            }
        });
        tokio::task::yield_now().await;
        drop(held);
        assert_eq!(locks(), 1);

        waiter.await.unwrap();
        assert_eq!(locks(), 0);
    }
}
