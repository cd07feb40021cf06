// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cursor type definitions.

use updsync_tl_types as tl;

/// The client's view of the server-side progress of the account's global update stream.
///
/// Every field is either [`Cursor::UNSET`] or has been hydrated from the server (directly,
/// or through a previously persisted copy). All four fields become set together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "impl-serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct Cursor {
    /// Primary persistent timestamp value.
    pub pts: i32,
    /// Secondary persistent timestamp value.
    pub qts: i32,
    /// Auxiliary sequence value.
    pub seq: i32,
    /// Auxiliary date value.
    pub date: i32,
}

impl Cursor {
    /// Sentinel for a field that has not been hydrated yet.
    pub const UNSET: i32 = -1;

    /// A cursor with every field [`Cursor::UNSET`].
    pub const fn unset() -> Self {
        Self {
            pts: Self::UNSET,
            qts: Self::UNSET,
            seq: Self::UNSET,
            date: Self::UNSET,
        }
    }

    /// Whether every field has been hydrated.
    pub fn is_hydrated(&self) -> bool {
        self.pts != Self::UNSET
            && self.qts != Self::UNSET
            && self.seq != Self::UNSET
            && self.date != Self::UNSET
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::unset()
    }
}

impl From<&tl::types::updates::State> for Cursor {
    fn from(state: &tl::types::updates::State) -> Self {
        Self {
            pts: state.pts,
            qts: state.qts,
            seq: state.seq,
            date: state.date,
        }
    }
}

impl From<&tl::enums::updates::State> for Cursor {
    fn from(state: &tl::enums::updates::State) -> Self {
        let tl::enums::updates::State::State(state) = state;
        state.into()
    }
}
