//! Swipe gesture parameters.
//!
//! [`SwipeProperties`] is an immutable value object describing one swipe: its
//! endpoints, timing, and (when used to drive a visibility search) the area
//! constraint and distance budget. Values are set through consuming `with_*`
//! builders and read through accessors; once a search or gesture build has
//! consumed a `SwipeProperties`, it is never mutated.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use swipeseek_core::geometry::Point;
//! use swipeseek_core::swipe::SwipeProperties;
//!
//! let props = SwipeProperties::between(Point::new(150, 600), Point::new(150, 200))
//!     .with_swipe_time(Duration::from_millis(500));
//! assert_eq!(props.swipe_time(), Duration::from_millis(500));
//! assert_eq!(props.start_delay(), Duration::from_millis(300));
//! ```

use std::time::Duration;

use tracing::warn;

use crate::config::SwipeDefaults;
use crate::geometry::{Point, Rect};

const DEFAULT_MAX_DISTANCE_TO_SWIPE_PX: u64 = 10_000;
const DEFAULT_SWIPE_LENGTH_PERCENT: f64 = 0.5;
const DEFAULT_MAX_NUMBER_OF_SWIPES: u32 = 10;
const DEFAULT_START_DELAY: Duration = Duration::from_millis(300);
const DEFAULT_SWIPE_TIME: Duration = Duration::from_millis(1000);
const DEFAULT_WAIT_TIME: Duration = Duration::from_secs(3);

/// Parameters for a single swipe gesture and for the search loop that issues
/// repeated swipes.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeProperties {
    start_point: Option<Point>,
    end_point: Option<Point>,
    swipe_area: Option<Rect>,
    max_distance_to_swipe_px: u64,
    swipe_length_percent: f64,
    max_number_of_swipes: u32,
    start_delay: Duration,
    swipe_time: Duration,
    wait_time: Duration,
}

impl Default for SwipeProperties {
    fn default() -> Self {
        Self {
            start_point: None,
            end_point: None,
            swipe_area: None,
            max_distance_to_swipe_px: DEFAULT_MAX_DISTANCE_TO_SWIPE_PX,
            swipe_length_percent: DEFAULT_SWIPE_LENGTH_PERCENT,
            max_number_of_swipes: DEFAULT_MAX_NUMBER_OF_SWIPES,
            start_delay: DEFAULT_START_DELAY,
            swipe_time: DEFAULT_SWIPE_TIME,
            wait_time: DEFAULT_WAIT_TIME,
        }
    }
}

impl SwipeProperties {
    /// Creates properties with all defaults and no endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates properties for a swipe between two points with default timing:
    /// the swipe starts after 0.3 seconds and lasts 1 second.
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            start_point: Some(start),
            end_point: Some(end),
            ..Self::default()
        }
    }

    /// Creates properties for a swipe between two points with explicit timing.
    pub fn between_timed(
        start: Point,
        end: Point,
        start_delay: Duration,
        swipe_time: Duration,
    ) -> Self {
        Self {
            start_point: Some(start),
            end_point: Some(end),
            start_delay,
            swipe_time,
            ..Self::default()
        }
    }

    /// Creates properties with the library defaults overridden by any values
    /// set in the persistent [`SwipeDefaults`] config.
    pub fn from_defaults(defaults: &SwipeDefaults) -> Self {
        let mut props = Self::default();
        if let Some(max) = defaults.max_distance_to_swipe_px {
            props.max_distance_to_swipe_px = max;
        }
        if let Some(percent) = defaults.swipe_length_percent {
            props = props.with_swipe_length_percent(percent);
        }
        if let Some(max) = defaults.max_number_of_swipes {
            props.max_number_of_swipes = max;
        }
        if let Some(ms) = defaults.start_delay_ms {
            props.start_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = defaults.swipe_time_ms {
            props.swipe_time = Duration::from_millis(ms);
        }
        if let Some(ms) = defaults.wait_time_ms {
            props.wait_time = Duration::from_millis(ms);
        }
        props
    }

    /// Sets the swipe area rectangle confining search gestures.
    pub fn with_swipe_area(mut self, area: Rect) -> Self {
        self.swipe_area = Some(area);
        self
    }

    /// Sets the cumulative distance budget for a visibility search, in pixels.
    pub fn with_max_distance_to_swipe_px(mut self, max: u64) -> Self {
        self.max_distance_to_swipe_px = max;
        self
    }

    /// Sets the swipe length as a fraction of the swipe-area side.
    ///
    /// The intended domain is `(0, 1]`, but out-of-domain values have always
    /// been accepted and callers depend on that. They log a warning instead
    /// of producing an error.
    pub fn with_swipe_length_percent(mut self, percent: f64) -> Self {
        if !(percent > 0.0 && percent <= 1.0) {
            warn!(
                percent,
                "swipe length percent outside the intended (0, 1] domain"
            );
        }
        self.swipe_length_percent = percent;
        self
    }

    /// Sets the maximum number of swipes.
    ///
    /// Reserved: the search loop is bounded by the distance budget only and
    /// does not consult this value.
    pub fn with_max_number_of_swipes(mut self, max: u32) -> Self {
        self.max_number_of_swipes = max;
        self
    }

    /// Sets the delay between touching the screen and starting to drag.
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Sets the duration of the drag from start point to end point.
    pub fn with_swipe_time(mut self, time: Duration) -> Self {
        self.swipe_time = time;
        self
    }

    /// Sets how long the element probe waits for the target per iteration.
    pub fn with_wait_time(mut self, time: Duration) -> Self {
        self.wait_time = time;
        self
    }

    /// The point where the finger is lowered onto the screen, if set.
    pub fn start_point(&self) -> Option<Point> {
        self.start_point
    }

    /// The point where the finger is raised from the screen, if set.
    pub fn end_point(&self) -> Option<Point> {
        self.end_point
    }

    /// The swipe area rectangle, if set.
    pub fn swipe_area(&self) -> Option<Rect> {
        self.swipe_area
    }

    /// The cumulative distance budget for a visibility search, in pixels.
    pub fn max_distance_to_swipe_px(&self) -> u64 {
        self.max_distance_to_swipe_px
    }

    /// The swipe length as a fraction of the swipe-area side.
    pub fn swipe_length_percent(&self) -> f64 {
        self.swipe_length_percent
    }

    /// The maximum number of swipes (reserved, see
    /// [`with_max_number_of_swipes`](Self::with_max_number_of_swipes)).
    pub fn max_number_of_swipes(&self) -> u32 {
        self.max_number_of_swipes
    }

    /// The delay between touching the screen and starting to drag.
    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    /// The duration of the drag from start point to end point.
    pub fn swipe_time(&self) -> Duration {
        self.swipe_time
    }

    /// How long the element probe waits for the target per iteration.
    pub fn wait_time(&self) -> Duration {
        self.wait_time
    }
}
