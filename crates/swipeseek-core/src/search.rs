//! Iterative swipe-until-visible search.
//!
//! [`VisibilitySearch`] brings an off-screen element into view by repeating a
//! probe→swipe→probe cycle inside a swipe area until the element is visible,
//! a cumulative distance budget runs out, or a geometric precondition fails.
//!
//! # State machine
//!
//! A search is in [`SearchState::Searching`] while the loop runs and ends in
//! exactly one terminal state:
//!
//! - [`SearchState::Found`] — the element became visible (success)
//! - [`SearchState::Exhausted`] — the distance budget ran out (a normal
//!   negative outcome, returned as a value, not an error)
//! - [`SearchState::InvalidRequest`] — a precondition failed (returned as a
//!   [`SearchError`], never retried)
//!
//! The budget is checked *before* each swipe, so the final swipe may push the
//! accumulated distance past the budget by up to one swipe's length. Callers
//! tune budgets to whole numbers of swipes; do not tighten the check.
//!
//! The swipe start is recomputed every iteration (the area center in the
//! default mode); there is no virtual scroll cursor because the wrapped UI
//! drivers expose no scroll offset. The only state carried between iterations
//! is the running distance counter.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use swipeseek_core::driver::{ElementProbe, Locator, PointerActionExecutor};
//! use swipeseek_core::geometry::{Rect, SwipeDirection};
//! use swipeseek_core::search::{SearchRequest, VisibilitySearch};
//!
//! # async fn example(
//! #     probe: Arc<dyn ElementProbe>,
//! #     executor: Arc<dyn PointerActionExecutor>,
//! # ) -> Result<(), swipeseek_core::search::SearchError> {
//! let search = VisibilitySearch::new(probe, executor);
//! let request = SearchRequest::new(
//!     Locator::Id("load-more".to_string()),
//!     Rect::new(0, 0, 390, 844),
//!     SwipeDirection::Up.into(),
//! );
//! let outcome = search.run(&request).await?;
//! assert!(outcome.is_found());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, info_span, Instrument};

use crate::area::{contains_point, is_visible_in_area};
use crate::driver::{DriverError, ElementProbe, Locator, PointerActionExecutor};
use crate::geometry::{
    endpoint_from_angle, euclidean_distance, max_half_extent, scroll_direction_for_angle,
    GeometryError, Point, Rect, SwipeHeading,
};
use crate::gesture::{build_multi_swipe, GestureError};
use crate::report::SwipeRecord;
use crate::swipe::SwipeProperties;

/// Errors that terminate a search as an invalid request.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The fixed swipe start point lies outside the swipe area.
    #[error("swipe start point {start} lies outside the swipe area {area}")]
    StartOutsideArea {
        /// The requested start point.
        start: Point,
        /// The swipe area bounds.
        area: Rect,
    },

    /// The computed swipe endpoint lies outside the swipe area.
    #[error("swipe endpoint {endpoint} lies outside the swipe area {area}")]
    EndpointOutsideArea {
        /// The computed endpoint.
        endpoint: Point,
        /// The swipe area bounds.
        area: Rect,
    },

    /// The swipe vector could not be computed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The swipe gesture could not be built.
    #[error(transparent)]
    Gesture(#[from] GestureError),

    /// A collaborator failed in a way that is not "element not yet visible".
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// The states a visibility search can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchState {
    /// The probe→swipe→probe loop is still running.
    Searching,
    /// Terminal: the element became visible.
    Found,
    /// Terminal: the distance budget ran out before the element was visible.
    Exhausted,
    /// Terminal: a precondition failed.
    InvalidRequest,
}

/// How each swipe's start and end points are derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SwipeVector {
    /// Start at the area center and drag toward the area edge: the per-axis
    /// swipe extent is half the area's width and height.
    AreaEdge,

    /// Start at a fixed point and drag a fixed pixel distance along the swipe
    /// angle.
    Fixed {
        /// Where every swipe starts.
        start: Point,
        /// The swipe extent along both axes, in pixels.
        distance: i64,
    },
}

/// Everything one search call needs: what to find, where to swipe, and how.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// The element to bring into view.
    pub locator: Locator,

    /// The rectangle confining search gestures.
    pub area: Rect,

    /// The swipe direction or angle.
    pub heading: SwipeHeading,

    /// How swipe endpoints are derived. Defaults to [`SwipeVector::AreaEdge`].
    pub vector: SwipeVector,

    /// With `true`, partial visibility in the area counts as found.
    pub partial: bool,

    /// Distance budget, timing, and probe wait for the loop.
    pub properties: SwipeProperties,
}

impl SearchRequest {
    /// Creates a request with the default vector mode (area-edge swipes from
    /// the center), full-visibility matching, and default swipe properties.
    pub fn new(locator: Locator, area: Rect, heading: SwipeHeading) -> Self {
        Self {
            locator,
            area,
            heading,
            vector: SwipeVector::AreaEdge,
            partial: false,
            properties: SwipeProperties::default(),
        }
    }

    /// Sets the swipe vector mode.
    pub fn with_vector(mut self, vector: SwipeVector) -> Self {
        self.vector = vector;
        self
    }

    /// Accepts partial visibility in the area as found.
    pub fn with_partial_match(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Replaces the swipe properties.
    pub fn with_properties(mut self, properties: SwipeProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// Statistics accumulated by a finished search.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total distance swiped, in whole pixels (each swipe's Euclidean length,
    /// floored).
    pub distance_swiped: u64,

    /// The swipes performed, in order.
    pub swipes: Vec<SwipeRecord>,
}

impl SearchStats {
    /// The number of swipes performed.
    pub fn swipes_performed(&self) -> usize {
        self.swipes.len()
    }
}

/// Terminal outcome of a search that ran to completion.
///
/// Invalid requests are reported through [`SearchError`] instead; budget
/// exhaustion is deliberately a value here, because whether it constitutes a
/// test failure is the caller's call.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The element became visible in the swipe area.
    Found(SearchStats),
    /// The distance budget ran out first.
    Exhausted(SearchStats),
}

impl SearchOutcome {
    /// Returns true for [`SearchOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The terminal [`SearchState`] this outcome represents.
    pub fn state(&self) -> SearchState {
        match self {
            SearchOutcome::Found(_) => SearchState::Found,
            SearchOutcome::Exhausted(_) => SearchState::Exhausted,
        }
    }

    /// The accumulated statistics, regardless of outcome.
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found(stats) | SearchOutcome::Exhausted(stats) => stats,
        }
    }
}

/// Drives the probe→swipe→probe loop against a pair of collaborators.
///
/// The search holds an [`ElementProbe`] and a [`PointerActionExecutor`] and is
/// otherwise stateless: the running distance counter lives inside each
/// [`run`](Self::run) call, so one instance can serve any number of sequential
/// searches.
pub struct VisibilitySearch {
    probe: Arc<dyn ElementProbe>,
    executor: Arc<dyn PointerActionExecutor>,
}

impl VisibilitySearch {
    /// Creates a search engine over the given collaborators.
    pub fn new(probe: Arc<dyn ElementProbe>, executor: Arc<dyn PointerActionExecutor>) -> Self {
        Self { probe, executor }
    }

    /// Runs the search until a terminal state is reached.
    ///
    /// Each iteration computes the swipe vector, validates the endpoint is
    /// inside the area, probes for visibility (stopping with
    /// [`SearchOutcome::Found`] before any gesture if the element is already
    /// visible), and otherwise performs one single-finger swipe, adding its
    /// floored Euclidean length to the running counter. The loop continues
    /// while the counter is below the budget.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] for precondition failures: a fixed start
    /// point or computed endpoint outside the area, a negative angle or
    /// distance, or a collaborator failure other than the element not being
    /// locatable yet.
    pub async fn run(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let angle = request.heading.degrees();
        let span = info_span!("visibility_search", locator = %request.locator, angle);
        self.run_inner(request, angle).instrument(span).await
    }

    async fn run_inner(
        &self,
        request: &SearchRequest,
        angle: f64,
    ) -> Result<SearchOutcome, SearchError> {
        let area = request.area;
        let props = &request.properties;
        let budget = props.max_distance_to_swipe_px();

        if let SwipeVector::Fixed { start, .. } = request.vector {
            if !contains_point(area, start) {
                return Err(SearchError::StartOutsideArea { start, area });
            }
        }

        let mut stats = SearchStats::default();

        while stats.distance_swiped < budget {
            let (start, end) = match request.vector {
                SwipeVector::AreaEdge => {
                    let start = area.center();
                    let end = endpoint_from_angle(
                        start,
                        angle,
                        max_half_extent(area.width),
                        max_half_extent(area.height),
                    )?;
                    (start, end)
                }
                SwipeVector::Fixed { start, distance } => {
                    let end = endpoint_from_angle(start, angle, distance, distance)?;
                    (start, end)
                }
            };

            if !contains_point(area, end) {
                return Err(SearchError::EndpointOutsideArea { endpoint: end, area });
            }

            let visible = is_visible_in_area(
                self.probe.as_ref(),
                &request.locator,
                area,
                props.wait_time(),
                request.partial,
            )
            .await?;

            if visible {
                info!(
                    swipes = stats.swipes_performed(),
                    distance_swiped = stats.distance_swiped,
                    "element visible in swipe area"
                );
                return Ok(SearchOutcome::Found(stats));
            }

            let swipe =
                SwipeProperties::between_timed(start, end, props.start_delay(), props.swipe_time());
            let sequence = build_multi_swipe(std::slice::from_ref(&swipe))?;
            self.executor.perform(&sequence).await?;

            let distance = euclidean_distance(start, end);
            stats.distance_swiped += distance.floor() as u64;
            stats.swipes.push(SwipeRecord::new(start, end, distance));
            debug!(
                distance_swiped = stats.distance_swiped,
                budget, %start, %end,
                scroll = %scroll_direction_for_angle(angle),
                "swipe performed"
            );
        }

        info!(
            swipes = stats.swipes_performed(),
            distance_swiped = stats.distance_swiped,
            "distance budget exhausted"
        );
        Ok(SearchOutcome::Exhausted(stats))
    }
}
