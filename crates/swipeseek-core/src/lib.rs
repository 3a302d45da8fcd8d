//! # swipeseek-core
//!
//! Gesture-based element-visibility search for UI test automation.
//!
//! This crate computes swipe vectors from a direction or angle, builds
//! multi-finger touch gesture sequences, and repeatedly performs bounded
//! swipes to bring an off-screen element into view, terminating on success,
//! on a cumulative distance budget, or on a geometric precondition failure.
//!
//! It is consumed in-process and talks to the outside world only through
//! three capability traits ([`driver::ElementProbe`],
//! [`driver::PointerActionExecutor`], [`driver::ScreenQuery`]), implemented
//! once per platform by the embedding test framework.
//!
//! ## Modules
//!
//! - [`geometry`] - Points, rectangles, swipe directions, angle-to-vector
//!   conversion, and distance functions
//! - [`gesture`] - Multi-finger tap and swipe sequences as pure data
//! - [`swipe`] - The [`swipe::SwipeProperties`] value object
//! - [`area`] - Swipe-area containment and visibility predicates
//! - [`driver`] - Collaborator capability traits and the unified driver error
//! - [`search`] - The swipe-until-visible search loop
//! - [`report`] - Serializable records of what a search did
//! - [`config`] - Persistent overrides for the swipe defaults
//!
//! ## Example
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
//!
//! // Swipe up from the screen center until the footer scrolls into view.
//! let request = SearchRequest::new(
//!     Locator::Id("footer".to_string()),
//!     Rect::new(0, 0, 390, 844),
//!     SwipeDirection::Up.into(),
//! );
//!
//! match search.run(&request).await? {
//!     outcome if outcome.is_found() => println!("footer is visible"),
//!     outcome => println!(
//!         "gave up after {} px",
//!         outcome.stats().distance_swiped
//!     ),
//! }
//! # Ok(())
//! # }
//! ```

pub mod area;
pub mod config;
pub mod driver;
pub mod geometry;
pub mod gesture;
pub mod report;
pub mod search;
pub mod swipe;
