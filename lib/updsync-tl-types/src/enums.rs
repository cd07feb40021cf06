// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Boxed types. Each enum groups every concrete [`crate::types`] that may appear
//! wherever the boxed type is expected.
use crate::types;

/// Implements `From<types::Concrete> for enums::Boxed` for every listed variant.
macro_rules! impl_from_type {
    ( $enum:ident { $( $variant:ident ( $ty:ty ) ),* $(,)? } ) => {
        $(
            impl From<$ty> for $enum {
                fn from(x: $ty) -> Self {
                    $enum::$variant(x)
                }
            }
        )*
    };
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
}

impl_from_type!(Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
});

#[derive(Clone, Debug, PartialEq)]
pub enum InputChannel {
    Empty,
    Channel(types::InputChannel),
}

impl_from_type!(InputChannel {
    Channel(types::InputChannel),
});

#[derive(Clone, Debug, PartialEq)]
pub enum ChannelMessagesFilter {
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
}

impl_from_type!(User {
    Empty(types::UserEmpty),
    User(types::User),
});

impl User {
    pub fn id(&self) -> i64 {
        match self {
            User::Empty(u) => u.id,
            User::User(u) => u.id,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
}

impl_from_type!(Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
});

impl Chat {
    pub fn id(&self) -> i64 {
        match self {
            Chat::Empty(c) => c.id,
            Chat::Chat(c) => c.id,
            Chat::Forbidden(c) => c.id,
            Chat::Channel(c) => c.id,
            Chat::ChannelForbidden(c) => c.id,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChatFull {
    Full(types::ChatFull),
    ChannelFull(types::ChannelFull),
}

impl_from_type!(ChatFull {
    Full(types::ChatFull),
    ChannelFull(types::ChannelFull),
});

#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Dialog(types::Dialog),
    Folder(types::DialogFolder),
}

impl_from_type!(Dialog {
    Dialog(types::Dialog),
    Folder(types::DialogFolder),
});

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
}

impl_from_type!(Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
});

impl Message {
    pub fn id(&self) -> i32 {
        match self {
            Message::Empty(m) => m.id,
            Message::Message(m) => m.id,
            Message::Service(m) => m.id,
        }
    }

    pub fn peer_id(&self) -> Option<&Peer> {
        match self {
            Message::Empty(m) => m.peer_id.as_ref(),
            Message::Message(m) => Some(&m.peer_id),
            Message::Service(m) => Some(&m.peer_id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageAction {
    Empty,
    ChatCreate(types::MessageActionChatCreate),
    ChatEditTitle(types::MessageActionChatEditTitle),
    ChatAddUser(types::MessageActionChatAddUser),
    ChatDeleteUser(types::MessageActionChatDeleteUser),
    ChannelCreate(types::MessageActionChannelCreate),
    PinMessage,
    HistoryClear,
}

impl_from_type!(MessageAction {
    ChatCreate(types::MessageActionChatCreate),
    ChatEditTitle(types::MessageActionChatEditTitle),
    ChatAddUser(types::MessageActionChatAddUser),
    ChatDeleteUser(types::MessageActionChatDeleteUser),
    ChannelCreate(types::MessageActionChannelCreate),
});

#[derive(Clone, Debug, PartialEq)]
pub enum ChatParticipant {
    Participant(types::ChatParticipant),
    Creator(types::ChatParticipantCreator),
    Admin(types::ChatParticipantAdmin),
}

impl_from_type!(ChatParticipant {
    Participant(types::ChatParticipant),
    Creator(types::ChatParticipantCreator),
    Admin(types::ChatParticipantAdmin),
});

#[derive(Clone, Debug, PartialEq)]
pub enum ChannelParticipant {
    Participant(types::ChannelParticipant),
    Creator(types::ChannelParticipantCreator),
    Admin(types::ChannelParticipantAdmin),
    Banned(types::ChannelParticipantBanned),
    Left(types::ChannelParticipantLeft),
}

impl_from_type!(ChannelParticipant {
    Participant(types::ChannelParticipant),
    Creator(types::ChannelParticipantCreator),
    Admin(types::ChannelParticipantAdmin),
    Banned(types::ChannelParticipantBanned),
    Left(types::ChannelParticipantLeft),
});

#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    NewMessage(types::UpdateNewMessage),
    NewChannelMessage(types::UpdateNewChannelMessage),
    EditMessage(types::UpdateEditMessage),
    EditChannelMessage(types::UpdateEditChannelMessage),
    DeleteMessages(types::UpdateDeleteMessages),
    DeleteChannelMessages(types::UpdateDeleteChannelMessages),
    DeleteScheduledMessages(types::UpdateDeleteScheduledMessages),
    PinnedMessages(types::UpdatePinnedMessages),
    PinnedChannelMessages(types::UpdatePinnedChannelMessages),
    ReadHistoryInbox(types::UpdateReadHistoryInbox),
    ReadHistoryOutbox(types::UpdateReadHistoryOutbox),
    ReadMessagesContents(types::UpdateReadMessagesContents),
    WebPage(types::UpdateWebPage),
    ChannelTooLong(types::UpdateChannelTooLong),
    NewEncryptedMessage(types::UpdateNewEncryptedMessage),
    MessagePoll(types::UpdateMessagePoll),
    MessagePollVote(types::UpdateMessagePollVote),
    BotStopped(types::UpdateBotStopped),
    ChatParticipant(types::UpdateChatParticipant),
    ChannelParticipant(types::UpdateChannelParticipant),
    ChatParticipantAdd(types::UpdateChatParticipantAdd),
    ChatParticipantAdmin(types::UpdateChatParticipantAdmin),
    ChatParticipantDelete(types::UpdateChatParticipantDelete),
    UserName(types::UpdateUserName),
    BotCallbackQuery(types::UpdateBotCallbackQuery),
    InlineBotCallbackQuery(types::UpdateInlineBotCallbackQuery),
    BotInlineQuery(types::UpdateBotInlineQuery),
    Config,
    /// A constructor this library has no definition for.
    Unknown { constructor_id: u32 },
}

impl_from_type!(Update {
    NewMessage(types::UpdateNewMessage),
    NewChannelMessage(types::UpdateNewChannelMessage),
    EditMessage(types::UpdateEditMessage),
    EditChannelMessage(types::UpdateEditChannelMessage),
    DeleteMessages(types::UpdateDeleteMessages),
    DeleteChannelMessages(types::UpdateDeleteChannelMessages),
    DeleteScheduledMessages(types::UpdateDeleteScheduledMessages),
    PinnedMessages(types::UpdatePinnedMessages),
    PinnedChannelMessages(types::UpdatePinnedChannelMessages),
    ReadHistoryInbox(types::UpdateReadHistoryInbox),
    ReadHistoryOutbox(types::UpdateReadHistoryOutbox),
    ReadMessagesContents(types::UpdateReadMessagesContents),
    WebPage(types::UpdateWebPage),
    ChannelTooLong(types::UpdateChannelTooLong),
    NewEncryptedMessage(types::UpdateNewEncryptedMessage),
    MessagePoll(types::UpdateMessagePoll),
    MessagePollVote(types::UpdateMessagePollVote),
    BotStopped(types::UpdateBotStopped),
    ChatParticipant(types::UpdateChatParticipant),
    ChannelParticipant(types::UpdateChannelParticipant),
    ChatParticipantAdd(types::UpdateChatParticipantAdd),
    ChatParticipantAdmin(types::UpdateChatParticipantAdmin),
    ChatParticipantDelete(types::UpdateChatParticipantDelete),
    UserName(types::UpdateUserName),
    BotCallbackQuery(types::UpdateBotCallbackQuery),
    InlineBotCallbackQuery(types::UpdateInlineBotCallbackQuery),
    BotInlineQuery(types::UpdateBotInlineQuery),
});

#[derive(Clone, Debug, PartialEq)]
pub enum Updates {
    TooLong,
    UpdateShortMessage(types::UpdateShortMessage),
    UpdateShortChatMessage(types::UpdateShortChatMessage),
    UpdateShort(types::UpdateShort),
    Combined(types::UpdatesCombined),
    Updates(types::Updates),
    UpdateShortSentMessage(types::UpdateShortSentMessage),
    /// A constructor this library has no definition for.
    Unknown { constructor_id: u32 },
}

impl_from_type!(Updates {
    UpdateShortMessage(types::UpdateShortMessage),
    UpdateShortChatMessage(types::UpdateShortChatMessage),
    UpdateShort(types::UpdateShort),
    Combined(types::UpdatesCombined),
    Updates(types::Updates),
    UpdateShortSentMessage(types::UpdateShortSentMessage),
});

pub mod updates {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    pub enum State {
        State(types::updates::State),
    }

    impl From<types::updates::State> for State {
        fn from(x: types::updates::State) -> Self {
            State::State(x)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum Difference {
        Empty(types::updates::DifferenceEmpty),
        Difference(types::updates::Difference),
        Slice(types::updates::DifferenceSlice),
        TooLong(types::updates::DifferenceTooLong),
    }

    impl_from_type!(Difference {
        Empty(types::updates::DifferenceEmpty),
        Difference(types::updates::Difference),
        Slice(types::updates::DifferenceSlice),
        TooLong(types::updates::DifferenceTooLong),
    });

    #[derive(Clone, Debug, PartialEq)]
    pub enum ChannelDifference {
        Empty(types::updates::ChannelDifferenceEmpty),
        TooLong(types::updates::ChannelDifferenceTooLong),
        Difference(types::updates::ChannelDifference),
    }

    impl_from_type!(ChannelDifference {
        Empty(types::updates::ChannelDifferenceEmpty),
        TooLong(types::updates::ChannelDifferenceTooLong),
        Difference(types::updates::ChannelDifference),
    });
}

pub mod messages {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    pub enum ChatFull {
        Full(types::messages::ChatFull),
    }

    impl From<types::messages::ChatFull> for ChatFull {
        fn from(x: types::messages::ChatFull) -> Self {
            ChatFull::Full(x)
        }
    }
}
