// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for the subset of Telegram's [`types`] and
//! [`functions`] involved in keeping a client's view of updates in sync with the server.
//!
//! Values are already decoded: every boxed type is an `enum` in [`enums`] wrapping one
//! of the concrete `struct` in [`types`], and `From<Type> for Enum` is implemented for
//! all of them.
//!
//! Constructors the library does not know about are kept as an `Unknown` variant carrying
//! the constructor identifier, so that callers can decide what to do with them.
//!
//! [`types`]: types/index.html
//! [`functions`]: functions/index.html
//! [`enums`]: enums/index.html
pub mod enums;
pub mod functions;
pub mod types;

pub use functions::RemoteCall;

/// The layer these definitions were modelled after.
pub const LAYER: i32 = 166;
