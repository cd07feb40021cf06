// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Concrete (bare) types. Every type belongs to at least one of the boxed [`crate::enums`].
use crate::enums;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PeerUser {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PeerChannel {
    pub channel_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputChannel {
    pub channel_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputBotInlineMessageId {
    pub dc_id: i32,
    pub id: i64,
    pub access_hash: i64,
}

// Entities

#[derive(Clone, Debug, PartialEq)]
pub struct UserEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub is_self: bool,
    pub bot: bool,
    pub min: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    pub deactivated: bool,
    pub id: i64,
    pub title: String,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatForbidden {
    pub id: i64,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub broadcast: bool,
    pub megagroup: bool,
    pub min: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelForbidden {
    pub broadcast: bool,
    pub megagroup: bool,
    pub id: i64,
    pub access_hash: i64,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatFull {
    pub id: i64,
    pub about: String,
}

/// Full information about a channel, including its current persistent timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelFull {
    pub id: i64,
    pub about: String,
    pub participants_count: Option<i32>,
    pub read_inbox_max_id: i32,
    pub read_outbox_max_id: i32,
    pub unread_count: i32,
    pub pts: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dialog {
    pub pinned: bool,
    pub peer: enums::Peer,
    pub top_message: i32,
    pub unread_count: i32,
    pub pts: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogFolder {
    pub folder_id: i32,
    pub top_message: i32,
}

// Messages

#[derive(Clone, Debug, PartialEq)]
pub struct MessageEmpty {
    pub id: i32,
    pub peer_id: Option<enums::Peer>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub pinned: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub via_bot_id: Option<i64>,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub message: String,
    pub edit_date: Option<i32>,
    pub ttl_period: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageService {
    pub out: bool,
    pub silent: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub action: enums::MessageAction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatCreate {
    pub title: String,
    pub users: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatEditTitle {
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatAddUser {
    pub users: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatDeleteUser {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChannelCreate {
    pub title: String,
}

// Participants

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipant {
    pub user_id: i64,
    pub inviter_id: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantCreator {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantAdmin {
    pub user_id: i64,
    pub inviter_id: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipant {
    pub user_id: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantCreator {
    pub user_id: i64,
    pub rank: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantAdmin {
    pub user_id: i64,
    pub promoted_by: i64,
    pub date: i32,
    pub rank: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantBanned {
    pub left: bool,
    pub peer: enums::Peer,
    pub kicked_by: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantLeft {
    pub peer: enums::Peer,
}

// Polls

#[derive(Clone, Debug, PartialEq)]
pub struct PollAnswerVoters {
    pub chosen: bool,
    pub correct: bool,
    pub option: Vec<u8>,
    pub voters: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PollResults {
    pub min: bool,
    pub results: Option<Vec<PollAnswerVoters>>,
    pub total_voters: Option<i32>,
}

// Updates (the individual events)

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewChannelMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateEditMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateEditChannelMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDeleteMessages {
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDeleteChannelMessages {
    pub channel_id: i64,
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDeleteScheduledMessages {
    pub peer: enums::Peer,
    pub messages: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePinnedMessages {
    pub pinned: bool,
    pub peer: enums::Peer,
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePinnedChannelMessages {
    pub pinned: bool,
    pub channel_id: i64,
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadHistoryInbox {
    pub peer: enums::Peer,
    pub max_id: i32,
    pub still_unread_count: i32,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadHistoryOutbox {
    pub peer: enums::Peer,
    pub max_id: i32,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadMessagesContents {
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateWebPage {
    pub webpage_id: i64,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChannelTooLong {
    pub channel_id: i64,
    pub pts: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewEncryptedMessage {
    pub chat_id: i32,
    pub random_id: i64,
    pub date: i32,
    pub qts: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateMessagePoll {
    pub poll_id: i64,
    pub results: PollResults,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateMessagePollVote {
    pub poll_id: i64,
    pub peer: enums::Peer,
    pub options: Vec<Vec<u8>>,
    pub qts: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateBotStopped {
    pub user_id: i64,
    pub date: i32,
    pub stopped: bool,
    pub qts: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatParticipant {
    pub chat_id: i64,
    pub date: i32,
    pub actor_id: i64,
    pub user_id: i64,
    pub prev_participant: Option<enums::ChatParticipant>,
    pub new_participant: Option<enums::ChatParticipant>,
    pub qts: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChannelParticipant {
    pub via_chatlist: bool,
    pub channel_id: i64,
    pub date: i32,
    pub actor_id: i64,
    pub user_id: i64,
    pub prev_participant: Option<enums::ChannelParticipant>,
    pub new_participant: Option<enums::ChannelParticipant>,
    pub qts: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatParticipantAdd {
    pub chat_id: i64,
    pub user_id: i64,
    pub inviter_id: i64,
    pub date: i32,
    pub version: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatParticipantAdmin {
    pub chat_id: i64,
    pub user_id: i64,
    pub is_admin: bool,
    pub version: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatParticipantDelete {
    pub chat_id: i64,
    pub user_id: i64,
    pub version: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUserName {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub usernames: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateBotCallbackQuery {
    pub query_id: i64,
    pub user_id: i64,
    pub peer: enums::Peer,
    pub msg_id: i32,
    pub chat_instance: i64,
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateInlineBotCallbackQuery {
    pub query_id: i64,
    pub user_id: i64,
    pub msg_id: InputBotInlineMessageId,
    pub chat_instance: i64,
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateBotInlineQuery {
    pub query_id: i64,
    pub user_id: i64,
    pub query: String,
    pub offset: String,
}

// Updates (the containers pushed by the server)

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShortMessage {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub id: i32,
    pub user_id: i64,
    pub message: String,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub via_bot_id: Option<i64>,
    pub reply_to_msg_id: Option<i32>,
    pub ttl_period: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShortChatMessage {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub id: i32,
    pub from_id: i64,
    pub chat_id: i64,
    pub message: String,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub via_bot_id: Option<i64>,
    pub reply_to_msg_id: Option<i32>,
    pub ttl_period: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShort {
    pub update: enums::Update,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatesCombined {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq_start: i32,
    pub seq: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Updates {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShortSentMessage {
    pub out: bool,
    pub id: i32,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub ttl_period: Option<i32>,
}

pub mod updates {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    pub struct State {
        pub pts: i32,
        pub qts: i32,
        pub date: i32,
        pub seq: i32,
        pub unread_count: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct DifferenceEmpty {
        pub date: i32,
        pub seq: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Difference {
        pub new_messages: Vec<enums::Message>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
        pub state: enums::updates::State,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct DifferenceSlice {
        pub new_messages: Vec<enums::Message>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
        pub intermediate_state: enums::updates::State,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct DifferenceTooLong {
        pub pts: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelDifferenceEmpty {
        pub r#final: bool,
        pub pts: i32,
        pub timeout: Option<i32>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelDifferenceTooLong {
        pub r#final: bool,
        pub timeout: Option<i32>,
        pub dialog: enums::Dialog,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelDifference {
        pub r#final: bool,
        pub pts: i32,
        pub timeout: Option<i32>,
        pub new_messages: Vec<enums::Message>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}

pub mod messages {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChatFull {
        pub full_chat: enums::ChatFull,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}
