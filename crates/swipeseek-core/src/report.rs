//! Records of what a visibility search did.
//!
//! Each executed swipe is captured as a [`SwipeRecord`] with a unique id and
//! timestamp, and a finished search can be summarized as a [`SearchReport`].
//! Both types are plain serializable data so callers can attach them to their
//! own test reports or persist them as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::driver::Locator;
use crate::geometry::{Point, Rect};
use crate::search::{SearchError, SearchOutcome, SearchRequest, SearchState};

/// One executed swipe within a visibility search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRecord {
    /// Unique identifier for this record.
    pub id: Uuid,

    /// When the swipe was performed.
    pub timestamp: DateTime<Utc>,

    /// Where the finger was lowered.
    pub start: Point,

    /// Where the finger was raised.
    pub end: Point,

    /// Euclidean length of the swipe, in pixels.
    pub distance: f64,
}

impl SwipeRecord {
    /// Creates a record for a swipe just performed, with a fresh id and the
    /// current time.
    pub fn new(start: Point, end: Point, distance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            start,
            end,
            distance,
        }
    }
}

/// Summary of one visibility search: what was asked for and how it ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Unique identifier for this report.
    pub id: Uuid,

    /// When the report was created.
    pub timestamp: DateTime<Utc>,

    /// The element the search tried to bring into view.
    pub locator: Locator,

    /// The swipe area the search was confined to.
    pub area: Rect,

    /// The swipe angle in degrees.
    pub angle_degrees: f64,

    /// The terminal state the search reached.
    pub state: SearchState,

    /// Total distance swiped, in pixels.
    pub distance_swiped: u64,

    /// The swipes performed, in order.
    pub swipes: Vec<SwipeRecord>,

    /// Error message for searches that ended in
    /// [`SearchState::InvalidRequest`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchReport {
    /// Builds a report for a search that reached a terminal outcome.
    pub fn from_outcome(request: &SearchRequest, outcome: &SearchOutcome) -> Self {
        let stats = outcome.stats();
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            locator: request.locator.clone(),
            area: request.area,
            angle_degrees: request.heading.degrees(),
            state: outcome.state(),
            distance_swiped: stats.distance_swiped,
            swipes: stats.swipes.clone(),
            error: None,
        }
    }

    /// Builds a report for a search rejected with an invalid-request error.
    pub fn from_error(request: &SearchRequest, error: &SearchError) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            locator: request.locator.clone(),
            area: request.area,
            angle_degrees: request.heading.degrees(),
            state: SearchState::InvalidRequest,
            distance_swiped: 0,
            swipes: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_records_get_unique_ids() {
        let a = SwipeRecord::new(Point::new(0, 0), Point::new(0, 100), 100.0);
        let b = SwipeRecord::new(Point::new(0, 0), Point::new(0, 100), 100.0);
        assert_ne!(a.id, b.id);
        assert_eq!(a.distance, 100.0);
    }

    #[test]
    fn swipe_record_roundtrips_through_json() {
        let record = SwipeRecord::new(Point::new(150, 300), Point::new(0, 299), 150.0);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SwipeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, record.id);
        assert_eq!(parsed.start, record.start);
        assert_eq!(parsed.end, record.end);
    }
}
