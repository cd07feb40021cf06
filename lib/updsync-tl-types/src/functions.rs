// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Requests this library knows how to describe. Executing them is left to whoever owns
//! the connection.

/// Anything implementing this trait is a request with a known response type.
pub trait RemoteCall {
    /// The type of the "return" value coming from the other end of the connection.
    type Return;
}

pub mod updates {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetState {}

    impl crate::RemoteCall for GetState {
        type Return = enums::updates::State;
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetDifference {
        pub pts: i32,
        pub pts_limit: Option<i32>,
        pub pts_total_limit: Option<i32>,
        pub date: i32,
        pub qts: i32,
        pub qts_limit: Option<i32>,
    }

    impl crate::RemoteCall for GetDifference {
        type Return = enums::updates::Difference;
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetChannelDifference {
        pub force: bool,
        pub channel: enums::InputChannel,
        pub filter: enums::ChannelMessagesFilter,
        pub pts: i32,
        pub limit: i32,
    }

    impl crate::RemoteCall for GetChannelDifference {
        type Return = enums::updates::ChannelDifference;
    }
}

pub mod channels {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetFullChannel {
        pub channel: enums::InputChannel,
    }

    impl crate::RemoteCall for GetFullChannel {
        type Return = enums::messages::ChatFull;
    }
}
