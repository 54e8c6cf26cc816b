//! Feed payload and validated feed types

use std::collections::HashSet;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Identifier of a result link, unique within one feed
pub type LinkId = i64;

/// URL value meaning "this portal is not live yet"
pub const SENTINEL_URL: &str = "#";

/// Countdown target, explicitly unset until a feed has loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetInstant {
    #[default]
    Unset,
    At(DateTime<Utc>),
}

impl TargetInstant {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            TargetInstant::Unset => None,
            TargetInstant::At(at) => Some(*at),
        }
    }
}

/// One candidate result portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLink {
    pub id: LinkId,
    pub url: String,
    /// Informational only
    pub status: String,
}

impl ResultLink {
    /// True when the url is the placeholder rather than a live portal
    pub fn is_sentinel(&self) -> bool {
        let url = self.url.trim();
        url.is_empty() || url == SENTINEL_URL
    }
}

/// Validated feed, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFeed {
    pub target: TargetInstant,
    pub notification_text: Option<String>,
    pub links: Vec<ResultLink>,
}

/// Wire shape of the feed endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedPayload {
    result_date: String,
    #[serde(default)]
    notification_date: Option<String>,
    links: Vec<ResultLink>,
}

impl ResultFeed {
    /// Parse and validate a raw feed body
    pub fn from_json(body: &[u8]) -> Result<Self, FeedError> {
        let payload: FeedPayload = serde_json::from_slice(body)?;

        let target = parse_result_date(&payload.result_date)?;

        let mut seen = HashSet::new();
        for link in &payload.links {
            if !seen.insert(link.id) {
                return Err(FeedError::Protocol(format!("Duplicate link id: {}", link.id)));
            }
        }

        Ok(Self {
            target: TargetInstant::At(target),
            notification_text: payload.notification_date,
            links: payload.links,
        })
    }

    pub fn link(&self, id: LinkId) -> Option<&ResultLink> {
        self.links.iter().find(|link| link.id == id)
    }
}

/// Parse an ISO-8601 result date.
///
/// Offset-less date-times are read in the device's local zone, bare dates as
/// UTC midnight.
pub fn parse_result_date(raw: &str) -> Result<DateTime<Utc>, FeedError> {
    let raw = raw.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    // Minute precision with an offset, e.g. 2025-04-30T09:00Z or 09:00+05:30
    let zoned = match raw.strip_suffix(&['Z', 'z'][..]) {
        Some(rest) => format!("{}+00:00", rest),
        None => raw.to_string(),
    };
    for format in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(at) = DateTime::parse_from_str(&zoned, format) {
            return Ok(at.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|at| at.with_timezone(&Utc))
                .ok_or_else(|| FeedError::Protocol(format!("Nonexistent local time: {}", raw)));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(FeedError::Protocol(format!("Invalid resultDate: {:?}", raw)))
}
