// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use updsync_tl_types as tl;

/// Any update that has no friendlier wrapper.
#[derive(Debug, Clone)]
pub struct Raw {
    pub raw: tl::enums::Update,
}
