// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Periodically fetching the difference while no updates arrive.
//!
//! Not receiving updates for a while does not mean nothing happened. The connection may have
//! silently dropped them, so the difference is fetched after a period of silence.
use crate::gateway::Gateway;
use crate::synchronizer::{Inner, Phase};
use log::{debug, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

pub(crate) struct CheckIn {
    deadline: Arc<Mutex<Instant>>,
    handle: JoinHandle<()>,
}

impl CheckIn {
    /// Spawn the timer task.
    ///
    /// The task only keeps a weak reference to the synchronizer, and stops once it is dropped.
    pub(crate) fn spawn<G: Gateway>(inner: &Arc<Inner<G>>, interval: Duration) -> Self {
        let deadline = Arc::new(Mutex::new(Instant::now() + interval));
        let task_deadline = Arc::clone(&deadline);
        let inner = Arc::downgrade(inner);

        let handle = tokio::spawn(async move {
            loop {
                let next = *task_deadline.lock().unwrap();
                if Instant::now() < next {
                    sleep_until(next).await;
                    continue;
                }

                *task_deadline.lock().unwrap() = Instant::now() + interval;
                match inner.upgrade() {
                    Some(inner) => inner.check_in().await,
                    None => break,
                }
            }
        });

        Self { deadline, handle }
    }

    /// Push the deadline back, as updates are arriving.
    pub(crate) fn reset(&self, interval: Duration) {
        *self.deadline.lock().unwrap() = Instant::now() + interval;
    }

    pub(crate) fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for CheckIn {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl<G: Gateway> Inner<G> {
    async fn check_in(&self) {
        let Ok(mut message_box) = self.message_box.try_lock() else {
            warn!("check-in fired while updates are being handled; trying again later");
            return;
        };
        if self.phase() != Phase::Ready {
            return;
        }

        debug!("no updates received in a while; checking in");
        let mut events = Vec::new();
        let result = self.resync(&mut message_box, &mut events).await;
        self.publish(events);
        if let Err(e) = result {
            warn!("failed to get difference on check-in: {}", e);
        }
    }
}
