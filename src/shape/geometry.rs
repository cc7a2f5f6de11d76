//! Shared geometry for both shape layouts.
//!
//! All coordinates are in stencil units with the origin at the top-left of
//! the shape. Connection points use normalised 0-1 coordinates instead.

/// Horizontal length of a pin stem on either side of the body.
pub const STEM_WIDTH: f64 = 25.0;

/// Gap between a stem end and the body edge, so the stem stroke does not
/// overlap the outline.
pub const STEM_GAP: f64 = 0.5;

/// Offset of a socket type label from the body edge.
pub const TYPE_LABEL_INSET: f64 = 2.0;

/// Vertical offset of a socket type label above its stem.
pub const TYPE_LABEL_RISE: f64 = 7.0;

/// A point in stencil units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in stencil units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl Rect {
    /// Creates a rectangle from its edges.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Corners in outline order: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub const fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }
}

/// Horizontal frame shared by both layouts: a body of `body_width` with a
/// stem on each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Width of the rectangular body
    pub body_width: f64,
}

impl Frame {
    /// Creates a frame for the given body width.
    #[must_use]
    pub const fn new(body_width: f64) -> Self {
        Self { body_width }
    }

    /// Overall shape width including both stems.
    #[must_use]
    pub fn width(&self) -> f64 {
        2.0 * STEM_WIDTH + self.body_width
    }

    /// Horizontal centre of the shape.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.width() / 2.0
    }

    /// Left edge of the body.
    #[must_use]
    pub const fn body_left(&self) -> f64 {
        STEM_WIDTH
    }

    /// Right edge of the body.
    #[must_use]
    pub fn body_right(&self) -> f64 {
        STEM_WIDTH + self.body_width
    }

    /// Body rectangle between two heights.
    #[must_use]
    pub fn body_band(&self, top: f64, bottom: f64) -> Rect {
        Rect::new(self.body_left(), top, self.body_right(), bottom)
    }

    /// Input stem at height `y`, from the left edge up to the body.
    #[must_use]
    pub fn input_stem(&self, y: f64) -> (Point, Point) {
        (Point::new(0.0, y), Point::new(STEM_WIDTH - STEM_GAP, y))
    }

    /// Output stem at height `y`, from the body to the right edge.
    #[must_use]
    pub fn output_stem(&self, y: f64) -> (Point, Point) {
        (
            Point::new(self.body_right() + STEM_GAP, y),
            Point::new(self.width(), y),
        )
    }

    /// Anchor of an input's type label, right-aligned against the body.
    #[must_use]
    pub fn input_type_label(&self, pin_y: f64) -> Point {
        Point::new(STEM_WIDTH - TYPE_LABEL_INSET, pin_y - TYPE_LABEL_RISE)
    }

    /// Anchor of an output's type label, left-aligned against the body.
    #[must_use]
    pub fn output_type_label(&self, pin_y: f64) -> Point {
        Point::new(self.body_right() + TYPE_LABEL_INSET, pin_y - TYPE_LABEL_RISE)
    }
}

/// Formats a coordinate as plain decimal with the shortest exact form
/// (`200`, `24.5`, `0.5384615384615385`).
#[must_use]
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        // normalises -0
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(200.0), "200");
        assert_eq!(fmt_num(24.5), "24.5");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(0.5 * (40.0 / 130.0) + 50.0 / 130.0), "0.5384615384615385");
    }

    #[test]
    fn test_frame_edges() {
        let frame = Frame::new(150.0);
        assert_eq!(frame.width(), 200.0);
        assert_eq!(frame.center_x(), 100.0);
        assert_eq!(frame.body_left(), 25.0);
        assert_eq!(frame.body_right(), 175.0);
    }

    #[test]
    fn test_stems_stop_short_of_body() {
        let frame = Frame::new(120.0);
        let (from, to) = frame.input_stem(30.0);
        assert_eq!(from, Point::new(0.0, 30.0));
        assert_eq!(to, Point::new(24.5, 30.0));

        let (from, to) = frame.output_stem(30.0);
        assert_eq!(from, Point::new(145.5, 30.0));
        assert_eq!(to, Point::new(170.0, 30.0));
    }

    #[test]
    fn test_type_label_anchors() {
        let frame = Frame::new(120.0);
        assert_eq!(frame.input_type_label(30.0), Point::new(23.0, 23.0));
        assert_eq!(frame.output_type_label(30.0), Point::new(147.0, 23.0));
    }

    #[test]
    fn test_rect_corners_order() {
        let rect = Rect::new(25.0, 0.0, 175.0, 50.0);
        assert_eq!(
            rect.corners(),
            [
                Point::new(25.0, 0.0),
                Point::new(175.0, 0.0),
                Point::new(175.0, 50.0),
                Point::new(25.0, 50.0),
            ]
        );
    }
}
