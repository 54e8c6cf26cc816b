//! Application controller orchestrating feed, countdown and selection

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::{CountdownState, LinkActivation, LinkView, Phase, SharePayload, UNAVAILABLE_NOTICE};
use crate::{
    error::{ActivationError, FeedError},
    feed::{LinkFeed, LinkId},
    store::SelectionStore,
    tasks::CountdownEngine,
    utils::lock,
};

/// Owns the loaded feed and drives the countdown and selection store
pub struct AppController {
    feed_source: Arc<dyn LinkFeed>,
    store: Arc<dyn SelectionStore>,
    engine: CountdownEngine,
    phase: Mutex<Phase>,
    /// Selection read once from the store, then kept in step with writes
    last_used: Mutex<Option<LinkId>>,
    notification_visible: Mutex<bool>,
    /// Latest countdown state, `None` while no countdown has ticked
    countdown_tx: Arc<watch::Sender<Option<CountdownState>>>,
    /// Serializes loads so only one fetch is in flight
    load_lock: tokio::sync::Mutex<()>,
    share: SharePayload,
    start_time: Instant,
}

impl AppController {
    pub fn new(
        feed_source: Arc<dyn LinkFeed>,
        store: Arc<dyn SelectionStore>,
        engine: CountdownEngine,
        share: SharePayload,
    ) -> Self {
        let (countdown_tx, _) = watch::channel(None);
        let last_used = store.get();

        Self {
            feed_source,
            store,
            engine,
            phase: Mutex::new(Phase::Loading),
            last_used: Mutex::new(last_used),
            notification_visible: Mutex::new(false),
            countdown_tx: Arc::new(countdown_tx),
            load_lock: tokio::sync::Mutex::new(()),
            share,
            start_time: Instant::now(),
        }
    }

    /// Fetch the feed and start the countdown against its target.
    ///
    /// On failure the phase becomes `Failed` with the error message and no
    /// countdown runs. There is no retry.
    pub async fn load(&self) -> Result<(), FeedError> {
        let _guard = self.load_lock.lock().await;

        self.engine.cancel();
        self.countdown_tx.send_replace(None);
        *lock(&self.phase) = Phase::Loading;
        debug!("Loading result feed");

        match self.feed_source.fetch().await {
            Ok(feed) => {
                let target = feed.target;
                info!("Result feed ready with {} links", feed.links.len());
                *lock(&self.phase) = Phase::Ready(feed);

                let countdown_tx = Arc::clone(&self.countdown_tx);
                let started = self.engine.start(target, move |state| {
                    countdown_tx.send_replace(Some(state));
                });
                if started.is_none() {
                    warn!("Loaded feed has no target date, countdown not started");
                }
                Ok(())
            }
            Err(e) => {
                error!("Failed to load result feed: {}", e);
                *lock(&self.phase) = Phase::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Explicit re-fetch requested by the caller; replaces the feed wholesale
    pub async fn refresh(&self) -> Result<(), FeedError> {
        info!("Refreshing result feed on request");
        self.load().await
    }

    /// Current phase snapshot
    pub fn phase(&self) -> Phase {
        lock(&self.phase).clone()
    }

    /// Latest countdown state
    pub fn countdown(&self) -> Option<CountdownState> {
        *self.countdown_tx.borrow()
    }

    /// Watch countdown updates
    pub fn subscribe_countdown(&self) -> watch::Receiver<Option<CountdownState>> {
        self.countdown_tx.subscribe()
    }

    /// Activate a link: record it and navigate, or refuse a placeholder
    pub fn activate(&self, id: LinkId) -> Result<LinkActivation, ActivationError> {
        let link = {
            let phase = lock(&self.phase);
            let feed = phase.feed().ok_or(ActivationError::NotReady)?;
            feed.link(id).cloned().ok_or(ActivationError::UnknownLink(id))?
        };

        if link.is_sentinel() {
            info!("Link {} is not live yet, refusing navigation", id);
            return Ok(LinkActivation::Unavailable {
                id,
                message: UNAVAILABLE_NOTICE.to_string(),
            });
        }

        // Selection only drives a highlight; a store failure never blocks navigation
        match self.store.set(id) {
            Ok(()) => *lock(&self.last_used) = Some(id),
            Err(e) => warn!("Failed to record last used link {}: {}", id, e),
        }

        info!("Link {} activated", id);
        Ok(LinkActivation::Navigate { id, url: link.url })
    }

    /// Last activated link id, as last written to the durable store
    pub fn last_used(&self) -> Option<LinkId> {
        *lock(&self.last_used)
    }

    /// Links with availability and last-used flags, empty unless ready
    pub fn links(&self) -> Vec<LinkView> {
        let last_used = self.last_used();
        lock(&self.phase)
            .feed()
            .map(|feed| LinkView::from_feed(feed, last_used))
            .unwrap_or_default()
    }

    /// Flip notification visibility and return the new value
    pub fn toggle_notification(&self) -> bool {
        let mut visible = lock(&self.notification_visible);
        *visible = !*visible;
        debug!("Notification visible: {}", *visible);
        *visible
    }

    pub fn notification_visible(&self) -> bool {
        *lock(&self.notification_visible)
    }

    /// Notification text when visible and present
    pub fn notification(&self) -> Option<String> {
        if !self.notification_visible() {
            return None;
        }
        lock(&self.phase)
            .feed()
            .and_then(|feed| feed.notification_text.clone())
            .filter(|text| !text.is_empty())
    }

    pub fn share_payload(&self) -> &SharePayload {
        &self.share
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Stop the countdown
    pub fn shutdown(&self) {
        info!("Stopping countdown");
        self.engine.cancel();
    }
}
