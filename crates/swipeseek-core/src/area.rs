//! Swipe-area containment and element-visibility predicates.
//!
//! A swipe area is a rectangle confining search gestures. This module decides
//! whether points and element bounds lie inside one, and combines that with an
//! [`ElementProbe`] to answer "is the target visible in the area right now".
//!
//! All edge comparisons are inclusive: a point or edge exactly on a boundary
//! counts as inside.
//!
//! # Partial containment vs. intersection
//!
//! [`partially_contains`] is an OR of four independent edge comparisons. That
//! is *not* a rectangle-intersection test and diverges from true overlap
//! semantics for some inputs, but existing suites depend on its verdicts, so
//! it is kept as is. [`intersects`] is the correctly-computed overlap
//! predicate for callers that want one.

use std::time::Duration;

use tracing::debug;

use crate::driver::{DriverError, ElementProbe, Locator, ScreenQuery};
use crate::geometry::{Point, Rect};

/// Returns whether the point lies inside the area, inclusive on all four
/// edges.
pub fn contains_point(area: Rect, point: Point) -> bool {
    let left = area.x;
    let right = area.x + area.width;
    let top = area.y;
    let bottom = area.y + area.height;

    left <= point.x && point.x <= right && top <= point.y && point.y <= bottom
}

/// Returns whether all four edges of `element` lie within `area`.
pub fn fully_contains(area: Rect, element: Rect) -> bool {
    let area_right = area.x + area.width;
    let area_bottom = area.y + area.height;
    let element_right = element.x + element.width;
    let element_bottom = element.y + element.height;

    area.x <= element.x
        && element_right <= area_right
        && area.y <= element.y
        && element_bottom <= area_bottom
}

/// Returns whether any of the four independent edge comparisons (left-in,
/// right-in, top-in, bottom-in) holds.
///
/// Do not "fix" the OR: existing suites depend on its verdicts. This is not a
/// true intersection test; see [`intersects`] for one.
pub fn partially_contains(area: Rect, element: Rect) -> bool {
    let area_right = area.x + area.width;
    let area_bottom = area.y + area.height;
    let element_right = element.x + element.width;
    let element_bottom = element.y + element.height;

    area.x <= element.x
        || element_right <= area_right
        || area.y <= element.y
        || element_bottom <= area_bottom
}

/// Returns whether the two rectangles overlap, edges inclusive.
///
/// This is the correctly-computed intersection test, exposed separately from
/// the parity-preserving [`partially_contains`].
pub fn intersects(area: Rect, element: Rect) -> bool {
    let area_right = area.x + area.width;
    let area_bottom = area.y + area.height;
    let element_right = element.x + element.width;
    let element_bottom = element.y + element.height;

    element.x <= area_right
        && area.x <= element_right
        && element.y <= area_bottom
        && area.y <= element_bottom
}

/// Returns whether the element is visible inside the area.
///
/// Asks the probe for the element's bounds and displayed flag, waiting up to
/// `timeout`. With `partial` set, [`partially_contains`] decides containment;
/// otherwise [`fully_contains`] does. The element must also be reported
/// displayed.
///
/// A probe timeout or a missing element folds into `Ok(false)`: "not yet
/// visible" is an answer, not an error. Other driver failures propagate.
pub async fn is_visible_in_area(
    probe: &dyn ElementProbe,
    locator: &Locator,
    area: Rect,
    timeout: Duration,
    partial: bool,
) -> Result<bool, DriverError> {
    let handle = match probe.wait_for(locator, timeout).await {
        Ok(handle) => handle,
        Err(DriverError::Timeout) | Err(DriverError::ElementNotFound(_)) => {
            debug!(%locator, "element not located within wait time");
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    let contained = if partial {
        partially_contains(area, handle.bounds)
    } else {
        fully_contains(area, handle.bounds)
    };

    Ok(contained && handle.displayed)
}

/// Returns a swipe area equal to the full automation window.
pub async fn full_screen_area(screen: &dyn ScreenQuery) -> Result<Rect, DriverError> {
    screen.window_bounds().await
}

/// Returns a swipe area spanning the screen width between two rows, for
/// confining swipes between top and/or bottom headers.
///
/// `y_top` is the top edge and `y_bottom` the bottom edge of the area. The
/// area width is `window width - 1`; callers rely on that off-by-one.
pub async fn screen_width_band(
    screen: &dyn ScreenQuery,
    y_top: i32,
    y_bottom: i32,
) -> Result<Rect, DriverError> {
    let bounds = screen.window_bounds().await?;
    Ok(Rect::new(0, y_top, bounds.width - 1, y_bottom - y_top))
}

/// Returns a swipe area with explicit left/right/top/bottom bounds.
pub fn bounded_area(x_left: i32, x_right: i32, y_top: i32, y_bottom: i32) -> Rect {
    Rect::new(x_left, y_top, x_right - x_left, y_bottom - y_top)
}
