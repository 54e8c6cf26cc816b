//! Shared fakes for integration tests

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use result_watch::{
    feed::{LinkFeed, ResultFeed, ResultLink, TargetInstant},
    state::SharePayload,
    AnchoredClock, AppController, CountdownEngine, FeedError, MemorySelectionStore,
    SelectionStore, StoreError,
};

/// Feed source replaying queued responses, repeating the last one
pub struct ScriptedFeed {
    responses: Mutex<VecDeque<Result<ResultFeed, FeedError>>>,
    calls: AtomicUsize,
}

impl ScriptedFeed {
    pub fn new(responses: Vec<Result<ResultFeed, FeedError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkFeed for ScriptedFeed {
    async fn fetch(&self) -> Result<ResultFeed, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().expect("scripted response")
        }
    }
}

/// Memory store counting reads and writes
#[derive(Default)]
pub struct CountingStore {
    inner: MemorySelectionStore,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl SelectionStore for CountingStore {
    fn get(&self) -> Option<i64> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get()
    }

    fn set(&self, id: i64) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(id)
    }
}

pub fn link(id: i64, url: &str) -> ResultLink {
    ResultLink {
        id,
        url: url.to_string(),
        status: "up".to_string(),
    }
}

pub fn feed_at(target: DateTime<Utc>, links: Vec<ResultLink>) -> ResultFeed {
    ResultFeed {
        target: TargetInstant::At(target),
        notification_text: Some("Results will be declared on 30th April".to_string()),
        links,
    }
}

pub fn controller(
    feed: Arc<dyn LinkFeed>,
    store: Arc<dyn SelectionStore>,
    now: DateTime<Utc>,
) -> AppController {
    AppController::new(
        feed,
        store,
        CountdownEngine::with_clock(Arc::new(AnchoredClock::new(now))),
        SharePayload::new("http://127.0.0.1:20554/"),
    )
}
