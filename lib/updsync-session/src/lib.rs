// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library serves as the storage interface for the data an update synchronization
//! engine needs to survive restarts:
//! - The global update [`Cursor`], to catch up on missed updates while offline.
//! - The persistent timestamp of every channel seen so far.
//! - Channel access hashes, needed to request a channel's difference.
//! - Which messages were already delivered, to avoid emitting them twice.
//!
//! To use with other libraries, you will want to instantiate one of the
//! [`storages`], which are what implement the [`Store`] trait.

#![deny(unsafe_code)]

pub mod defs;
mod store;
pub mod storages;

pub use defs::Cursor;
pub use store::{Store, StoreError, error};
