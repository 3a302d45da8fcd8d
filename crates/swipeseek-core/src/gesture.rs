//! Multi-finger touch gesture sequences.
//!
//! A [`GestureSequence`] is pure data: an ordered set of [`FingerTrack`]s, one
//! per simultaneously-moving finger, each holding an ordered list of
//! [`TouchAction`]s. All tracks share time origin zero, so a multi-finger tap
//! presses every finger at once and a multi-finger swipe drags every finger
//! concurrently. Nothing here touches hardware; a sequence only takes effect
//! when handed to a [`PointerActionExecutor`](crate::driver::PointerActionExecutor).
//!
//! Sequences are built fresh per gesture request and discarded after
//! execution; they are never shared or mutated concurrently.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use swipeseek_core::geometry::Point;
//! use swipeseek_core::gesture::build_multi_tap;
//!
//! let sequence = build_multi_tap(
//!     &[Point::new(100, 200), Point::new(300, 200)],
//!     Duration::from_millis(50),
//! );
//! assert_eq!(sequence.tracks.len(), 2);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;
use crate::swipe::SwipeProperties;

/// Errors produced when materializing a gesture from swipe parameters.
#[derive(Error, Debug)]
pub enum GestureError {
    /// A swipe entry has no start point.
    #[error("swipe for finger{0} is missing a start point")]
    MissingStartPoint(usize),

    /// A swipe entry has no end point.
    #[error("swipe for finger{0} is missing an end point")]
    MissingEndPoint(usize),
}

/// One primitive action of a single finger.
///
/// Serialized with a `type` tag discriminator so executor backends can
/// transmit sequences over their own transports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TouchAction {
    /// Move the pointer to `point`, taking `duration` to arrive.
    ///
    /// A zero duration positions the pointer instantly (used before pressing).
    MoveTo {
        /// Target of the move, in viewport coordinates.
        point: Point,
        /// Time the move takes.
        duration: Duration,
    },

    /// Lower the finger onto the screen.
    Press,

    /// Hold the finger still for `duration`.
    Pause {
        /// How long to hold.
        duration: Duration,
    },

    /// Raise the finger from the screen.
    Release,
}

/// The ordered actions of one finger within a gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerTrack {
    /// Name of the pointer input, `finger0`, `finger1`, ...
    pub finger: String,
    /// The actions this finger performs, in order, from time origin zero.
    pub actions: Vec<TouchAction>,
}

/// An ordered set of finger tracks executed concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureSequence {
    /// One track per simultaneously-moving finger.
    pub tracks: Vec<FingerTrack>,
}

impl GestureSequence {
    /// The number of fingers in this gesture.
    pub fn finger_count(&self) -> usize {
        self.tracks.len()
    }
}

/// Builds a simultaneous multi-finger tap: one finger per point, each lowered
/// at time zero, held for `hold_duration`, then raised.
pub fn build_multi_tap(points: &[Point], hold_duration: Duration) -> GestureSequence {
    let tracks = points
        .iter()
        .enumerate()
        .map(|(finger, point)| FingerTrack {
            finger: format!("finger{}", finger),
            actions: vec![
                TouchAction::MoveTo {
                    point: *point,
                    duration: Duration::ZERO,
                },
                TouchAction::Press,
                TouchAction::Pause {
                    duration: hold_duration,
                },
                TouchAction::Release,
            ],
        })
        .collect();

    GestureSequence { tracks }
}

/// Builds a multi-finger swipe: one finger per [`SwipeProperties`] entry.
///
/// Each finger moves to its start point at time zero, presses, pauses for the
/// entry's start delay, drags to the end point over the entry's swipe time,
/// and releases. Tracks execute concurrently relative to each other.
///
/// # Errors
///
/// Returns a [`GestureError`] if any entry is missing its start or end point.
pub fn build_multi_swipe(swipes: &[SwipeProperties]) -> Result<GestureSequence, GestureError> {
    let mut tracks = Vec::with_capacity(swipes.len());

    for (finger, swipe) in swipes.iter().enumerate() {
        let start = swipe
            .start_point()
            .ok_or(GestureError::MissingStartPoint(finger))?;
        let end = swipe
            .end_point()
            .ok_or(GestureError::MissingEndPoint(finger))?;

        tracks.push(FingerTrack {
            finger: format!("finger{}", finger),
            actions: vec![
                TouchAction::MoveTo {
                    point: start,
                    duration: Duration::ZERO,
                },
                TouchAction::Press,
                TouchAction::Pause {
                    duration: swipe.start_delay(),
                },
                TouchAction::MoveTo {
                    point: end,
                    duration: swipe.swipe_time(),
                },
                TouchAction::Release,
            ],
        });
    }

    Ok(GestureSequence { tracks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_tap_builds_one_track_per_point() {
        let points = [Point::new(10, 10), Point::new(20, 20), Point::new(30, 30)];
        let hold = Duration::from_millis(75);

        let sequence = build_multi_tap(&points, hold);
        assert_eq!(sequence.finger_count(), 3);

        for (i, track) in sequence.tracks.iter().enumerate() {
            assert_eq!(track.finger, format!("finger{}", i));
            assert_eq!(
                track.actions,
                vec![
                    TouchAction::MoveTo {
                        point: points[i],
                        duration: Duration::ZERO,
                    },
                    TouchAction::Press,
                    TouchAction::Pause { duration: hold },
                    TouchAction::Release,
                ]
            );
        }
    }

    #[test]
    fn multi_tap_with_no_points_is_empty() {
        let sequence = build_multi_tap(&[], Duration::from_millis(50));
        assert_eq!(sequence.finger_count(), 0);
    }

    #[test]
    fn multi_swipe_track_ordering_and_timing() {
        let swipe = SwipeProperties::between_timed(
            Point::new(150, 600),
            Point::new(150, 200),
            Duration::from_millis(300),
            Duration::from_millis(1000),
        );

        let sequence = build_multi_swipe(std::slice::from_ref(&swipe)).unwrap();
        assert_eq!(sequence.finger_count(), 1);
        assert_eq!(
            sequence.tracks[0].actions,
            vec![
                TouchAction::MoveTo {
                    point: Point::new(150, 600),
                    duration: Duration::ZERO,
                },
                TouchAction::Press,
                TouchAction::Pause {
                    duration: Duration::from_millis(300),
                },
                TouchAction::MoveTo {
                    point: Point::new(150, 200),
                    duration: Duration::from_millis(1000),
                },
                TouchAction::Release,
            ]
        );
    }

    #[test]
    fn multi_swipe_builds_concurrent_tracks() {
        let swipes = vec![
            SwipeProperties::between(Point::new(100, 500), Point::new(100, 100)),
            SwipeProperties::between(Point::new(300, 500), Point::new(300, 100)),
        ];

        let sequence = build_multi_swipe(&swipes).unwrap();
        assert_eq!(sequence.finger_count(), 2);
        assert_eq!(sequence.tracks[0].finger, "finger0");
        assert_eq!(sequence.tracks[1].finger, "finger1");
        // Both tracks start from time origin zero with an instant move.
        for track in &sequence.tracks {
            assert!(matches!(
                track.actions[0],
                TouchAction::MoveTo {
                    duration: Duration::ZERO,
                    ..
                }
            ));
        }
    }

    #[test]
    fn multi_swipe_rejects_missing_endpoints() {
        let err = build_multi_swipe(&[SwipeProperties::new()]).unwrap_err();
        assert!(matches!(err, GestureError::MissingStartPoint(0)));
        assert!(err.to_string().contains("finger0"));
    }

    #[test]
    fn sequences_serialize_with_type_tags() {
        let sequence = build_multi_tap(&[Point::new(1, 2)], Duration::from_millis(10));
        let json = serde_json::to_string(&sequence).unwrap();
        assert!(json.contains(r#""type":"Press""#));

        let parsed: GestureSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sequence);
    }
}
