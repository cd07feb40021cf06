// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library keeps the update state of a Telegram account consistent with the server.
//!
//! Telegram pushes updates to connected clients, but pushed updates may arrive out of order,
//! twice, or not at all. The [`UpdateSynchronizer`] tracks the sequence numbers they carry,
//! detects the gaps and duplicates, fetches whatever was missed, and turns everything into an
//! ordered stream of [`Event`]s.
//!
//! The synchronizer does not talk to the network itself. Requests go through a [`Gateway`],
//! state is persisted in a [`Store`], and events produced outside of [`UpdateSynchronizer::handle`]
//! are delivered to an [`EventSink`].
//!
//! # Examples
//!
//! ```no_run
//! # async fn f<G: updsync_client::Gateway>(gateway: G, updates: updsync_client::tl::enums::Updates) -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use updsync_client::{SessionContext, UpdateSynchronizer, UpdatesConfiguration};
//! use updsync_client::session::storages::MemoryStore;
//!
//! let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
//! let sync = UpdateSynchronizer::new(
//!     gateway,
//!     Arc::new(MemoryStore::new()),
//!     sender,
//!     SessionContext { self_id: 1, bot: false },
//!     UpdatesConfiguration::default(),
//! );
//! sync.start().await?;
//!
//! for event in sync.handle(updates).await? {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

mod channel_difference;
mod check_in;
pub mod configuration;
mod difference;
pub mod errors;
pub mod event;
mod gateway;
mod mapper;
mod message_box;
mod peer_map;
mod synchronizer;
mod utils;

pub use configuration::{SessionContext, UpdatesConfiguration};
pub use errors::{InvocationError, ProtocolError, RpcError, SyncError};
pub use event::Event;
pub use gateway::{EventSink, Gateway};
pub use message_box::{Envelope, classify};
pub use peer_map::{Entity, PeerMap};
pub use synchronizer::{Phase, UpdateSynchronizer};
pub use updsync_session as session;
pub use updsync_session::{Cursor, Store, StoreError};
pub use updsync_tl_types as tl;
