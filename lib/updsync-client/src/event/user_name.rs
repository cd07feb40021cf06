// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use updsync_tl_types as tl;

/// Occurs when a user changes their name or usernames.
#[derive(Debug, Clone)]
pub struct UserNameChange {
    pub raw: tl::types::UpdateUserName,
}

impl UserNameChange {
    pub fn user_id(&self) -> i64 {
        self.raw.user_id
    }

    pub fn first_name(&self) -> &str {
        &self.raw.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.raw.last_name
    }

    /// Active usernames, the first one being the main one.
    pub fn usernames(&self) -> &[String] {
        &self.raw.usernames
    }
}
