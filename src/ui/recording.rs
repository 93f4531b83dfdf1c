//! Surface that records draw calls, for tests

use core::convert::Infallible;

use super::{Bounds, Color, PointF, Style, Surface, TextMetrics};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill { rect: Bounds, color: Color },
    Text { text: String, origin: PointF, style: Style },
    Rotate { degrees: f32, pivot: PointF },
    Line { from: PointF, to: PointF, style: Style },
}

/// Every glyph is `char_width` wide and text is as tall as its text size.
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub char_width: f32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            char_width: 10.0,
            ops: Vec::new(),
        }
    }

    /// Drawn strings with their origins, in draw order
    pub fn texts(&self) -> Vec<(&str, PointF)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, origin, .. } => Some((text.as_str(), *origin)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Bounds, style: &Style) -> Result<(), Self::Error> {
        self.ops.push(Op::Fill {
            rect,
            color: style.color,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str, style: &Style) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.char_width,
            height: style.text_size,
        }
    }

    fn draw_text(&mut self, text: &str, origin: PointF, style: &Style) -> Result<(), Self::Error> {
        self.ops.push(Op::Text {
            text: text.into(),
            origin,
            style: *style,
        });
        Ok(())
    }

    fn rotate(&mut self, degrees: f32, pivot: PointF) {
        self.ops.push(Op::Rotate { degrees, pivot });
    }

    fn draw_line(&mut self, from: PointF, to: PointF, style: &Style) -> Result<(), Self::Error> {
        self.ops.push(Op::Line {
            from,
            to,
            style: *style,
        });
        Ok(())
    }
}
