// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Event types about what happened to the logged-in account.
//!
//! Properties containing raw types are public and will either be called "raw" or prefixed with "raw_".\
//! Keep in mind that **these fields are not part of the semantic versioning guarantees**.

mod callback_query;
mod event;
mod inline_query;
mod message;
mod message_deletion;
mod participant;
mod pinned_messages;
mod poll;
mod raw;
mod user_name;

pub use callback_query::CallbackQuery;
pub use event::Event;
pub use inline_query::InlineQuery;
pub use message::Message;
pub use message_deletion::MessageDeletion;
pub use participant::ParticipantChange;
pub use pinned_messages::PinnedMessages;
pub use poll::{PollResults, PollVote};
pub use raw::Raw;
pub use user_name::UserNameChange;
