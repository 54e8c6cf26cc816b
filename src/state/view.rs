//! Values handed to the presentation layer

use serde::{Deserialize, Serialize};

use crate::feed::{LinkId, ResultFeed, ResultLink};

/// Notice shown when a placeholder link is activated
pub const UNAVAILABLE_NOTICE: &str = "This link is currently not available. Please try again later.";

/// A result link decorated with display flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    pub id: LinkId,
    pub url: String,
    pub status: String,
    pub available: bool,
    pub last_used: bool,
}

impl LinkView {
    pub fn new(link: &ResultLink, last_used: Option<LinkId>) -> Self {
        Self {
            id: link.id,
            url: link.url.clone(),
            status: link.status.clone(),
            available: !link.is_sentinel(),
            last_used: last_used == Some(link.id),
        }
    }

    /// Views for every link in feed order
    pub fn from_feed(feed: &ResultFeed, last_used: Option<LinkId>) -> Vec<Self> {
        feed.links.iter().map(|link| Self::new(link, last_used)).collect()
    }
}

/// Outcome of activating a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LinkActivation {
    /// Open the portal; the selection has been recorded
    Navigate { id: LinkId, url: String },
    /// Placeholder link; nothing was recorded
    Unavailable { id: LinkId, message: String },
}

/// Fixed title/text/url triple for the share action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    /// Shown when the platform cannot share
    pub fallback_message: String,
}

impl SharePayload {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: "HS 2025 Result Link".to_string(),
            text: "Check out the HS 2025 result here!".to_string(),
            url: url.into(),
            fallback_message: "Sharing not supported on this browser.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::TargetInstant;

    #[test]
    fn link_views_flag_last_used_and_availability() {
        let feed = ResultFeed {
            target: TargetInstant::Unset,
            notification_text: None,
            links: vec![
                ResultLink { id: 1, url: "#".into(), status: "down".into() },
                ResultLink { id: 2, url: "https://b.example".into(), status: "up".into() },
            ],
        };

        let views = LinkView::from_feed(&feed, Some(2));
        assert_eq!(views.len(), 2);
        assert!(!views[0].available && !views[0].last_used);
        assert!(views[1].available && views[1].last_used);
    }

    #[test]
    fn activation_serializes_with_action_tag() {
        let json = serde_json::to_value(LinkActivation::Unavailable {
            id: 1,
            message: UNAVAILABLE_NOTICE.to_string(),
        })
        .expect("json");
        assert_eq!(json["action"], "unavailable");
        assert_eq!(json["id"], 1);
    }
}
