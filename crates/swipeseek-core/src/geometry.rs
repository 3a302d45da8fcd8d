//! Coordinate geometry for swipe gestures.
//!
//! This module provides the primitives every other part of the engine is built
//! on: screen points and rectangles, swipe directions with their fixed angles,
//! angle-to-vector conversion, and distance functions.
//!
//! # Coordinate system
//!
//! The origin `(0, 0)` is the top-left corner of the screen, with `x` growing
//! to the right and `y` growing downward. Swipe angles follow the unit circle:
//! 0° points right, 90° up, 180° left, 270° down. Because a swipe drags the
//! screen content *toward* the start point, [`endpoint_from_angle`] mirrors the
//! requested angle by 180° so the endpoint lies on the opposite side of the
//! start point from the swipe direction.
//!
//! # Example
//!
//! ```
//! use swipeseek_core::geometry::{endpoint_from_angle, Point, SwipeDirection};
//!
//! let start = Point::new(50, 50);
//! let angle = SwipeDirection::Right.angle_degrees();
//! // Swiping right drags the finger left of the start point.
//! let end = endpoint_from_angle(start, angle, 20, 20).unwrap();
//! assert_eq!(end, Point::new(30, 50));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by geometry operations.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The swipe angle in degrees was negative.
    #[error("swipe angle in degrees must not be negative (got {0})")]
    NegativeAngle(f64),

    /// A maximum per-axis swipe distance was negative.
    #[error("maximum swipe distance in pixels must not be negative (got x={x}, y={y})")]
    NegativeDistance {
        /// The requested maximum distance along the x axis.
        x: i64,
        /// The requested maximum distance along the y axis.
        y: i64,
    },
}

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate in pixels.
    pub x: i32,
    /// The y-coordinate in pixels.
    pub y: i32,
}

impl Point {
    /// Creates a point from `(x, y)` coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangle in screen coordinates.
///
/// `x` and `y` locate the top-left corner. `width` and `height` must be
/// non-negative; the containment predicates in [`crate::area`] assume this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x: i32,
    /// The y-coordinate of the top-left corner.
    pub y: i32,
    /// The width in pixels (non-negative).
    pub width: i32,
    /// The height in pixels (non-negative).
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the center of the rectangle, rounding to the nearest pixel.
    pub fn center(&self) -> Point {
        let center_x = (f64::from(self.x) + f64::from(self.width) / 2.0).round();
        let center_y = (f64::from(self.y) + f64::from(self.height) / 2.0).round();
        Point::new(center_x as i32, center_y as i32)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A screen axis, for distance measurements along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// The horizontal (x) axis.
    X,
    /// The vertical (y) axis.
    Y,
}

/// The four cardinal swipe directions.
///
/// Each direction maps to a fixed angle on the unit circle:
/// RIGHT = 0°, UP = 90°, LEFT = 180°, DOWN = 270°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Returns the fixed swipe angle for this direction, in degrees.
    pub fn angle_degrees(&self) -> f64 {
        match self {
            SwipeDirection::Right => 0.0,
            SwipeDirection::Up => 90.0,
            SwipeDirection::Left => 180.0,
            SwipeDirection::Down => 270.0,
        }
    }

    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either a cardinal [`SwipeDirection`] or an arbitrary angle in degrees.
///
/// Search requests accept both forms; [`SwipeHeading::degrees`] collapses them
/// to the angle the geometry works with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SwipeHeading {
    /// One of the four cardinal directions.
    Direction(SwipeDirection),
    /// An arbitrary swipe angle in degrees.
    Degrees(f64),
}

impl SwipeHeading {
    /// Returns the swipe angle in degrees.
    pub fn degrees(&self) -> f64 {
        match self {
            SwipeHeading::Direction(direction) => direction.angle_degrees(),
            SwipeHeading::Degrees(angle) => *angle,
        }
    }
}

impl From<SwipeDirection> for SwipeHeading {
    fn from(direction: SwipeDirection) -> Self {
        SwipeHeading::Direction(direction)
    }
}

/// The direction screen content scrolls when a swipe is performed.
///
/// A swipe and the resulting scroll are opposite: swiping right scrolls the
/// content left. Useful for log messages and assertions about scroll effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Left,
    DownLeft,
    Down,
    DownRight,
    Right,
    UpRight,
    Up,
    UpLeft,
}

impl ScrollDirection {
    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Left => "left",
            ScrollDirection::DownLeft => "down-left",
            ScrollDirection::Down => "down",
            ScrollDirection::DownRight => "down-right",
            ScrollDirection::Right => "right",
            ScrollDirection::UpRight => "up-right",
            ScrollDirection::Up => "up",
            ScrollDirection::UpLeft => "up-left",
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes an angle in degrees to the range `[0, 360)`.
///
/// Full rotations are removed: `normalize_angle(a + 360.0 * k)` equals
/// `normalize_angle(a)` for any integer `k`.
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    angle_degrees.rem_euclid(360.0)
}

/// Returns the scroll direction produced by swiping at the given angle.
pub fn scroll_direction_for_angle(swipe_angle_degrees: f64) -> ScrollDirection {
    let angle = normalize_angle(swipe_angle_degrees);

    if angle == 0.0 {
        ScrollDirection::Left
    } else if angle < 90.0 {
        ScrollDirection::DownLeft
    } else if angle == 90.0 {
        ScrollDirection::Down
    } else if angle < 180.0 {
        ScrollDirection::DownRight
    } else if angle == 180.0 {
        ScrollDirection::Right
    } else if angle < 270.0 {
        ScrollDirection::UpRight
    } else if angle == 270.0 {
        ScrollDirection::Up
    } else {
        ScrollDirection::UpLeft
    }
}

/// Computes the endpoint of a swipe starting at `start` along `angle_degrees`.
///
/// The endpoint lies on the opposite side of the unit circle from the swipe
/// direction: the angle is mirrored by 180°, its cosine and sine are scaled by
/// the per-axis maximum distances, and the resulting coordinates are floored.
///
/// | degrees | cosine | sine | endpoint          | scroll effect |
/// |---------|--------|------|-------------------|---------------|
/// | 0       | 1      | 0    | `(x - dx, y)`     | scroll left   |
/// | 90      | 0      | 1    | `(x, y + dy)`     | scroll down   |
/// | 180     | -1     | 0    | `(x + dx, y)`     | scroll right  |
/// | 270     | 0      | -1   | `(x, y - dy)`     | scroll up     |
///
/// # Errors
///
/// Returns [`GeometryError::NegativeAngle`] if `angle_degrees` is negative and
/// [`GeometryError::NegativeDistance`] if either maximum distance is negative.
pub fn endpoint_from_angle(
    start: Point,
    angle_degrees: f64,
    max_distance_x: i64,
    max_distance_y: i64,
) -> Result<Point, GeometryError> {
    if angle_degrees < 0.0 {
        return Err(GeometryError::NegativeAngle(angle_degrees));
    }
    if max_distance_x < 0 || max_distance_y < 0 {
        return Err(GeometryError::NegativeDistance {
            x: max_distance_x,
            y: max_distance_y,
        });
    }

    let mirrored = normalize_angle(angle_degrees + 180.0);
    let radians = mirrored.to_radians();

    // Cosine and sine range over [-1, 1]; scale by the per-axis maximums.
    let x_offset = radians.cos() * max_distance_x as f64;
    let y_offset = radians.sin() * max_distance_y as f64;

    let end_x = (f64::from(start.x) + x_offset).floor() as i32;
    let end_y = (f64::from(start.y) - y_offset).floor() as i32;

    Ok(Point::new(end_x, end_y))
}

/// Returns the straight-line distance between two points, in pixels.
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    (dx * dx + dy * dy).sqrt()
}

/// Returns the absolute distance between two points along a single axis.
///
/// Used for strictly vertical or horizontal swipes where the cross-axis
/// component is irrelevant.
pub fn axis_distance(a: Point, b: Point, axis: Axis) -> f64 {
    match axis {
        Axis::X => f64::from((a.x - b.x).abs()),
        Axis::Y => f64::from((a.y - b.y).abs()),
    }
}

/// Returns the maximum swipe distance from the center of a swipe-area side,
/// `floor(side_length * 0.5)`.
pub fn max_half_extent(side_length: i32) -> i64 {
    (f64::from(side_length) * 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_angles_are_fixed() {
        assert_eq!(SwipeDirection::Right.angle_degrees(), 0.0);
        assert_eq!(SwipeDirection::Up.angle_degrees(), 90.0);
        assert_eq!(SwipeDirection::Left.angle_degrees(), 180.0);
        assert_eq!(SwipeDirection::Down.angle_degrees(), 270.0);
    }

    #[test]
    fn heading_collapses_to_degrees() {
        assert_eq!(SwipeHeading::from(SwipeDirection::Up).degrees(), 90.0);
        assert_eq!(SwipeHeading::Degrees(42.5).degrees(), 42.5);
    }

    #[test]
    fn normalize_removes_full_rotations() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(450.0), 90.0);
        assert_eq!(normalize_angle(90.0 + 360.0 * 3.0), 90.0);
        // rem_euclid keeps negative inputs in [0, 360) too.
        assert_eq!(normalize_angle(-90.0), 270.0);
    }

    #[test]
    fn endpoint_mirrors_swipe_right_to_left_facing_vector() {
        let end = endpoint_from_angle(Point::new(50, 50), 0.0, 20, 20).unwrap();
        assert_eq!(end, Point::new(30, 50));
    }

    #[test]
    fn endpoint_mirrors_swipe_left_to_right_facing_vector() {
        let end = endpoint_from_angle(Point::new(50, 50), 180.0, 20, 20).unwrap();
        assert_eq!(end, Point::new(70, 50));
    }

    #[test]
    fn endpoint_for_vertical_swipes() {
        // Swiping up drags the finger downward; zero x-extent keeps the
        // column fixed.
        let end = endpoint_from_angle(Point::new(50, 50), 90.0, 0, 20).unwrap();
        assert_eq!(end, Point::new(50, 70));

        let end = endpoint_from_angle(Point::new(50, 50), 270.0, 0, 20).unwrap();
        assert_eq!(end, Point::new(50, 30));
    }

    #[test]
    fn endpoint_rejects_negative_angle() {
        let err = endpoint_from_angle(Point::new(0, 0), -1.0, 10, 10).unwrap_err();
        assert!(matches!(err, GeometryError::NegativeAngle(_)));
    }

    #[test]
    fn endpoint_rejects_negative_distance() {
        let err = endpoint_from_angle(Point::new(0, 0), 0.0, -5, 10).unwrap_err();
        assert!(matches!(err, GeometryError::NegativeDistance { x: -5, y: 10 }));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn euclidean_distance_is_pythagorean() {
        assert_eq!(euclidean_distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean_distance(Point::new(1, 1), Point::new(1, 1)), 0.0);
    }

    #[test]
    fn axis_distance_ignores_cross_axis() {
        let a = Point::new(10, 100);
        let b = Point::new(40, 60);
        assert_eq!(axis_distance(a, b, Axis::X), 30.0);
        assert_eq!(axis_distance(a, b, Axis::Y), 40.0);
    }

    #[test]
    fn center_rounds_to_nearest_pixel() {
        assert_eq!(Rect::new(0, 0, 300, 600).center(), Point::new(150, 300));
        // Odd dimensions round up from the .5 midpoint.
        assert_eq!(Rect::new(0, 0, 5, 5).center(), Point::new(3, 3));
        assert_eq!(Rect::new(10, 20, 4, 4).center(), Point::new(12, 22));
    }

    #[test]
    fn half_extent_floors() {
        assert_eq!(max_half_extent(300), 150);
        assert_eq!(max_half_extent(5), 2);
        assert_eq!(max_half_extent(0), 0);
    }

    #[test]
    fn scroll_direction_covers_the_circle() {
        assert_eq!(scroll_direction_for_angle(0.0), ScrollDirection::Left);
        assert_eq!(scroll_direction_for_angle(45.0), ScrollDirection::DownLeft);
        assert_eq!(scroll_direction_for_angle(90.0), ScrollDirection::Down);
        assert_eq!(scroll_direction_for_angle(135.0), ScrollDirection::DownRight);
        assert_eq!(scroll_direction_for_angle(180.0), ScrollDirection::Right);
        assert_eq!(scroll_direction_for_angle(225.0), ScrollDirection::UpRight);
        assert_eq!(scroll_direction_for_angle(270.0), ScrollDirection::Up);
        assert_eq!(scroll_direction_for_angle(315.0), ScrollDirection::UpLeft);
        assert_eq!(scroll_direction_for_angle(360.0), ScrollDirection::Left);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Point::new(5, -3).to_string(), "(5, -3)");
        assert_eq!(Rect::new(0, 10, 300, 600).to_string(), "(0, 10) 300x600");
        assert_eq!(SwipeDirection::Down.to_string(), "down");
        assert_eq!(ScrollDirection::UpLeft.to_string(), "up-left");
    }
}
