// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module deals with correct handling of updates, including gaps, and knowing when the code
//! should "get difference" (the set of updates that the client should know by now minus the set
//! of updates that it actually knows).
//!
//! Each update produces a side-effect on the global state (`pts` and `qts`), or on the state of
//! a channel. Channels have their own isolated state, kept by the store, and this module only
//! provides the comparison rules for them.
//!
//! Every `Updates` received from the server is first converted into an [`Envelope`], which is
//! later unpacked into `updatesCombined` so that all shapes can be handled uniformly.
//!
//! See <https://core.telegram.org/api/updates>.
mod adaptor;
mod defs;
#[cfg(test)]
mod tests;

pub use adaptor::classify;
pub use defs::Envelope;
pub(crate) use defs::{Key, NO_SEQ, PtsInfo, Verdict};
use log::{debug, info, trace};
use std::cmp::Ordering;
use updsync_session::Cursor;
use updsync_tl_types as tl;

/// Compares the local `pts` of an entry against the ordering information of an update.
///
/// `local + count` is the `pts` the next update should have.
pub(crate) fn check_pts(local_pts: i32, info: &PtsInfo) -> Verdict {
    if info.bot_qts && local_pts == 0 {
        // Bots that never received a qts-ordered update start at zero,
        // so the first one is taken as the baseline.
        debug!("taking qts {} as the baseline", info.pts);
        return Verdict::Apply;
    }

    let Some(expected) = local_pts.checked_add(info.count) else {
        info!(
            "gap on update for {:?} (local {:?}, count {:?} out of range)",
            info.key, local_pts, info.count
        );
        return Verdict::Gap;
    };

    match expected.cmp(&info.pts) {
        Ordering::Equal => Verdict::Apply,
        Ordering::Greater => {
            debug!(
                "skipping update for {:?} (local {:?}, count {:?}, remote {:?})",
                info.key, local_pts, info.count, info.pts
            );
            Verdict::Stale
        }
        Ordering::Less => {
            info!(
                "gap on update for {:?} (local {:?}, count {:?}, remote {:?})",
                info.key, local_pts, info.count, info.pts
            );
            Verdict::Gap
        }
    }
}

/// The global update state of the account.
///
/// Only one may exist per synchronizer, and it must only be mutated while holding its lock.
#[derive(Debug)]
pub(crate) struct MessageBox {
    cursor: Cursor,
}

impl MessageBox {
    /// Create a new, empty [`MessageBox`].
    ///
    /// It won't be hydrated until [`MessageBox::set_state`] is called.
    pub(crate) fn new() -> Self {
        Self {
            cursor: Cursor::unset(),
        }
    }

    /// Create a [`MessageBox`] from a previously known cursor.
    pub(crate) fn load(cursor: Cursor) -> Self {
        trace!("loading {:?}", cursor);
        Self { cursor }
    }

    /// A copy of the current state.
    pub(crate) fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) fn is_hydrated(&self) -> bool {
        self.cursor.is_hydrated()
    }

    /// Overwrite the entire state, as returned by the server.
    pub(crate) fn set_state(&mut self, state: &tl::enums::updates::State) {
        let cursor = Cursor::from(state);
        debug!("setting state {:?} -> {:?}", self.cursor, cursor);
        self.cursor = cursor;
    }

    pub(crate) fn set_pts(&mut self, key: Key, pts: i32) {
        match key {
            Key::Common => {
                debug!("updating pts: {}->{}", self.cursor.pts, pts);
                self.cursor.pts = pts;
            }
            Key::Secondary => {
                debug!("updating qts: {}->{}", self.cursor.qts, pts);
                self.cursor.qts = pts;
            }
            // Channel pts is persisted by the store directly.
            Key::Channel(_) => {}
        }
    }

    /// Compares the start of a batch with the local `seq`.
    ///
    /// Must only be called with a `seq_start` other than [`NO_SEQ`].
    pub(crate) fn check_seq(&self, seq_start: i32) -> Verdict {
        let next = self.cursor.seq.checked_add(1);
        match next.map_or(Ordering::Less, |next| next.cmp(&seq_start)) {
            Ordering::Equal => Verdict::Apply,
            Ordering::Greater => {
                debug!(
                    "skipping updates that were already handled at seq = {}",
                    self.cursor.seq
                );
                Verdict::Stale
            }
            Ordering::Less => {
                info!(
                    "gap detected (local seq {}, remote seq {})",
                    self.cursor.seq, seq_start
                );
                Verdict::Gap
            }
        }
    }

    /// Finish applying an envelope.
    ///
    /// > If the updates were applied, local *Updates* state must be updated
    /// > with `seq` (unless it's 0) and `date` from the constructor.
    pub(crate) fn end_envelope(&mut self, seq: i32, date: i32) {
        if seq != NO_SEQ {
            self.cursor.seq = seq;
        }
        if date > self.cursor.date {
            self.cursor.date = date;
        }
    }

    /// Return the request that needs to be made to get the difference, if possible.
    pub(crate) fn get_difference(&self) -> Option<tl::functions::updates::GetDifference> {
        if !self.is_hydrated() {
            return None;
        }

        let gd = tl::functions::updates::GetDifference {
            pts: self.cursor.pts,
            pts_limit: None,
            pts_total_limit: None,
            date: self.cursor.date.max(1), // non-zero or the request will fail
            qts: self.cursor.qts,
            qts_limit: None,
        };
        trace!("requesting {:?}", gd);
        Some(gd)
    }

    /// Apply `updates.differenceEmpty`, which only advances `seq` and `date`.
    pub(crate) fn apply_empty_difference(&mut self, seq: i32, date: i32) {
        debug!(
            "handling empty difference (date = {}, seq = {}); no longer getting diff",
            date, seq
        );
        self.cursor.seq = seq;
        self.cursor.date = date;
    }
}
