//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

mod canvas;
#[cfg(test)]
mod recording;
mod style;
mod surface;
mod watchface;

pub use canvas::{font_for, Affine, CanvasSurface};
pub use style::{Color, Style};
pub use surface::{Bounds, PointF, Surface, TextMetrics};
pub use watchface::{
    format_date, format_time, seconds_rotation, x_offset, FaceRenderer, ViewState,
    SECOND_HAND_INSET, TEXT_GAP,
};

/// A face that can be drawn once per frame
pub trait WatchFace {
    /// Draw the face onto `surface` inside `bounds`
    fn draw<S: Surface>(&mut self, surface: &mut S, bounds: Bounds) -> Result<(), S::Error>;
}
