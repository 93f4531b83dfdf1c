//! Drawing surface abstraction

use super::Style;

/// Axis-aligned integer rectangle, right and bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width, wrapping on overflow
    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// Height, wrapping on overflow
    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Horizontal center, rounded toward negative infinity
    pub const fn center_x(&self) -> i32 {
        ((self.left as i64 + self.right as i64) >> 1) as i32
    }

    /// Vertical center, rounded toward negative infinity
    pub const fn center_y(&self) -> i32 {
        ((self.top as i64 + self.bottom as i64) >> 1) as i32
    }

    /// Horizontal center without rounding
    pub fn exact_center_x(&self) -> f32 {
        (self.left as i64 + self.right as i64) as f32 * 0.5
    }

    pub fn exact_center_y(&self) -> f32 {
        (self.top as i64 + self.bottom as i64) as f32 * 0.5
    }
}

/// Point in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Measured extent of a string
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextMetrics {
    /// Advance width
    pub width: f32,
    /// Height of the bounding box
    pub height: f32,
}

/// Capabilities the face needs from the host graphics stack
pub trait Surface {
    type Error;

    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Fill a rectangle with the style color
    fn fill_rect(&mut self, rect: Bounds, style: &Style) -> Result<(), Self::Error>;

    /// Measure `text` as it would be drawn with `style`
    fn measure_text(&self, text: &str, style: &Style) -> TextMetrics;

    /// Draw `text` with its left end of the baseline at `origin`
    fn draw_text(&mut self, text: &str, origin: PointF, style: &Style) -> Result<(), Self::Error>;

    /// Rotate everything drawn afterwards by `degrees` (clockwise) about
    /// `pivot`. Rotations accumulate.
    fn rotate(&mut self, degrees: f32, pivot: PointF);

    /// Draw a line segment with the style color and stroke width
    fn draw_line(&mut self, from: PointF, to: PointF, style: &Style) -> Result<(), Self::Error>;
}
