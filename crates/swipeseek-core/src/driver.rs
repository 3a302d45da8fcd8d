//! Collaborator capabilities for backend-agnostic gesture automation.
//!
//! The search engine never talks to a concrete device or browser driver.
//! Instead it depends on three narrow capabilities, implemented once per
//! platform:
//!
//! - [`ElementProbe`] — inspects the rendered UI for element presence, bounds,
//!   and visibility
//! - [`PointerActionExecutor`] — performs a built
//!   [`GestureSequence`](crate::gesture::GestureSequence) on real hardware
//! - [`ScreenQuery`] — reports the window bounds, used to derive a default
//!   full-screen swipe area
//!
//! Driver construction, selector-strategy resolution, and screenshot capture
//! live behind these traits and are out of scope for this crate.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Instant;

use crate::geometry::Rect;
use crate::gesture::GestureSequence;

/// How often the default [`ElementProbe::wait_for`] implementation re-probes.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during collaborator operations.
///
/// This enum unifies errors from all backends behind a single type, so the
/// search engine can handle failures uniformly regardless of the underlying
/// driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A command or operation failed with the given message.
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// The backend is not available or not connected.
    #[error("not connected to automation backend")]
    NotConnected,

    /// The element could not be located.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// An operation timed out.
    #[error("operation timed out")]
    Timeout,

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A selector identifying a UI element.
///
/// Mirrors the two selector forms accessibility backends commonly expose: a
/// stable identifier or a user-visible label. How a locator is resolved to an
/// element is entirely up to the [`ElementProbe`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    /// Match by stable accessibility identifier.
    Id(String),
    /// Match by user-visible accessibility label.
    Label(String),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "id={}", id),
            Locator::Label(label) => write!(f, "label={}", label),
        }
    }
}

/// A located element: its bounds and whether the backend reports it rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// The element's bounding rectangle in screen coordinates.
    pub bounds: Rect,
    /// Whether the backend considers the element displayed.
    pub displayed: bool,
}

/// Capability to inspect the rendered UI for an element.
#[async_trait]
pub trait ElementProbe: Send + Sync {
    /// Returns whether an element matching the locator currently exists.
    async fn exists(&self, locator: &Locator) -> Result<bool, DriverError>;

    /// Returns the bounding rectangle of the element.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::ElementNotFound`] if no element matches.
    async fn bounds_of(&self, locator: &Locator) -> Result<Rect, DriverError>;

    /// Returns whether the element is displayed (rendered and not hidden).
    async fn is_displayed(&self, locator: &Locator) -> Result<bool, DriverError>;

    /// Waits up to `timeout` for the element to be locatable, then returns a
    /// handle with its bounds and displayed flag.
    ///
    /// The default implementation polls [`bounds_of`](Self::bounds_of) every
    /// 100 ms. Backends with native wait support can override this.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Timeout`] if the element does not appear within
    /// `timeout`.
    async fn wait_for(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<ElementHandle, DriverError> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.bounds_of(locator).await {
                Ok(bounds) => {
                    let displayed = self.is_displayed(locator).await?;
                    return Ok(ElementHandle { bounds, displayed });
                }
                Err(DriverError::ElementNotFound(_)) | Err(DriverError::Timeout) => {}
                Err(e) => return Err(e),
            }
            if Instant::now() >= deadline {
                return Err(DriverError::Timeout);
            }
            tokio::time::sleep(WAIT_POLL_INTERVAL).await;
        }
    }
}

/// Capability to perform a gesture sequence on real hardware.
///
/// [`perform`](Self::perform) blocks for the gesture's defined duration; for a
/// swipe that is approximately start delay plus swipe time.
#[async_trait]
pub trait PointerActionExecutor: Send + Sync {
    /// Performs the sequence, actuating all finger tracks concurrently.
    async fn perform(&self, sequence: &GestureSequence) -> Result<(), DriverError>;
}

/// Capability to query the screen or window geometry.
#[async_trait]
pub trait ScreenQuery: Send + Sync {
    /// Returns the bounds of the automation window.
    async fn window_bounds(&self) -> Result<Rect, DriverError>;
}
