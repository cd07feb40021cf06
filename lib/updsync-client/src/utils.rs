// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use chrono::{DateTime, Utc};

pub(crate) type Date = DateTime<Utc>;

pub(crate) fn date(date: i32) -> Date {
    DateTime::<Utc>::from_timestamp(date as i64, 0).unwrap_or_default()
}
