// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod common;

use common::*;
use std::time::Duration;
use tokio::time::sleep;
use updsync_client::tl;

fn one_message_difference(id: i32, pts: i32) -> tl::types::updates::Difference {
    tl::types::updates::Difference {
        new_messages: vec![message(id, user_peer())],
        other_updates: Vec::new(),
        chats: Vec::new(),
        users: Vec::new(),
        state: state(pts, 5, 10, 1000),
    }
}

#[tokio::test(start_paused = true)]
async fn silence_triggers_difference() {
    let mut h = Harness::started().await;
    h.gateway.push_difference(one_message_difference(1, 101));

    sleep(Duration::from_secs(59)).await;
    assert!(h.gateway.calls().is_empty());

    sleep(Duration::from_secs(2)).await;
    assert_eq!(h.gateway.calls().len(), 1);
    assert_eq!(message_ids(&h.published()), vec![1]);
    assert_eq!(h.sync.cursor().await.pts, 101);
}

#[tokio::test(start_paused = true)]
async fn updates_push_the_check_in_back() {
    let h = Harness::started().await;

    sleep(Duration::from_secs(30)).await;
    h.sync
        .handle(short(new_message(1, 101, 1), 1001))
        .await
        .unwrap();

    sleep(Duration::from_secs(45)).await;
    assert!(h.gateway.calls().is_empty());

    sleep(Duration::from_secs(20)).await;
    assert_eq!(h.gateway.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_check_in_is_retried() {
    let mut h = Harness::started().await;

    // Nothing scripted, so the first check-in fails.
    sleep(Duration::from_secs(61)).await;
    assert_eq!(h.gateway.calls().len(), 1);
    assert_eq!(h.sync.cursor().await, cursor());

    h.gateway.push_difference(one_message_difference(1, 101));
    sleep(Duration::from_secs(60)).await;
    assert_eq!(h.gateway.calls().len(), 2);
    assert_eq!(message_ids(&h.published()), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_the_check_in() {
    let h = Harness::started().await;
    h.sync.shutdown();

    sleep(Duration::from_secs(300)).await;
    assert!(h.gateway.calls().is_empty());
}
