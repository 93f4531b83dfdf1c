//! `embedded-graphics` backed surface
//!
//! Text uses ProFont, picked by text size. Mono fonts have no antialiasing,
//! so the style's antialias flag is ignored here.

use core::f32::consts::PI;

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{renderer::TextRenderer, Baseline, Text},
};
use profont::{
    PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT,
    PROFONT_7_POINT, PROFONT_9_POINT,
};

use super::{Bounds, PointF, Style, Surface, TextMetrics};

/// Available fonts, smallest first
const FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Largest font whose glyph height fits `text_size`, or the smallest one
pub fn font_for(text_size: f32) -> &'static MonoFont<'static> {
    let mut chosen = FONTS[0];
    for font in FONTS {
        if font.character_size.height as f32 <= text_size {
            chosen = font;
        }
    }
    chosen
}

/// 2D affine transform
///
/// Maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    tx: f32,
    ty: f32,
}

impl Affine {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Clockwise rotation about `pivot` (y axis pointing down)
    pub fn rotation(degrees: f32, pivot: PointF) -> Self {
        let radians = degrees * (PI / 180.0);
        let (sin, cos) = (libm::sinf(radians), libm::cosf(radians));
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: pivot.x - cos * pivot.x + sin * pivot.y,
            ty: pivot.y - sin * pivot.x - cos * pivot.y,
        }
    }

    /// Transform that applies `inner` first, then `self`
    pub fn pre_concat(&self, inner: &Self) -> Self {
        Self {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            tx: self.a * inner.tx + self.c * inner.ty + self.tx,
            ty: self.b * inner.tx + self.d * inner.ty + self.ty,
        }
    }

    pub fn map(&self, p: PointF) -> PointF {
        PointF::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Surface drawing onto an `embedded-graphics` target
///
/// Rotations apply to line end points and text origins. Rectangles are
/// filled with the axis-aligned box around their transformed corners.
pub struct CanvasSurface<'a, D> {
    target: &'a mut D,
    transform: Affine,
}

impl<'a, D> CanvasSurface<'a, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            transform: Affine::IDENTITY,
        }
    }

    /// Current accumulated transform
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Drop all accumulated rotations
    pub fn reset_transform(&mut self) {
        self.transform = Affine::IDENTITY;
    }

    /// Target color, `None` for fully transparent styles
    fn color(style: &Style) -> Option<D::Color> {
        (style.color.alpha() != 0).then(|| Rgb888::from(style.color).into())
    }

    fn to_point(&self, p: PointF) -> Point {
        let p = self.transform.map(p);
        Point::new(libm::roundf(p.x) as i32, libm::roundf(p.y) as i32)
    }
}

impl<'a, D> Surface for CanvasSurface<'a, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    type Error = D::Error;

    fn size(&self) -> (u32, u32) {
        let size = self.target.bounding_box().size;
        (size.width, size.height)
    }

    fn fill_rect(&mut self, rect: Bounds, style: &Style) -> Result<(), Self::Error> {
        let Some(color) = Self::color(style) else {
            return Ok(());
        };

        let corners = [
            (rect.left, rect.top),
            (rect.right, rect.top),
            (rect.left, rect.bottom),
            (rect.right, rect.bottom),
        ]
        .map(|(x, y)| self.to_point(PointF::new(x as f32, y as f32)));
        let min = corners
            .iter()
            .fold(corners[0], |acc, p| acc.component_min(*p));
        let max = corners
            .iter()
            .fold(corners[0], |acc, p| acc.component_max(*p));
        if max.x <= min.x || max.y <= min.y {
            return Ok(());
        }

        let area = Rectangle::new(
            min,
            Size::new((max.x - min.x) as u32, (max.y - min.y) as u32),
        );
        self.target.fill_solid(&area, color)
    }

    fn measure_text(&self, text: &str, style: &Style) -> TextMetrics {
        let character_style = MonoTextStyle::new(font_for(style.text_size), Rgb888::WHITE);
        let metrics = character_style.measure_string(text, Point::zero(), Baseline::Alphabetic);
        TextMetrics {
            width: metrics.bounding_box.size.width as f32,
            height: metrics.bounding_box.size.height as f32,
        }
    }

    fn draw_text(&mut self, text: &str, origin: PointF, style: &Style) -> Result<(), Self::Error> {
        let Some(color) = Self::color(style) else {
            return Ok(());
        };

        let character_style = MonoTextStyle::new(font_for(style.text_size), color);
        Text::with_baseline(text, self.to_point(origin), character_style, Baseline::Alphabetic)
            .draw(&mut *self.target)?;
        Ok(())
    }

    fn rotate(&mut self, degrees: f32, pivot: PointF) {
        self.transform = self
            .transform
            .pre_concat(&Affine::rotation(degrees, pivot));
    }

    fn draw_line(&mut self, from: PointF, to: PointF, style: &Style) -> Result<(), Self::Error> {
        let Some(color) = Self::color(style) else {
            return Ok(());
        };

        // Zero width is a one pixel hairline
        let stroke_width = libm::fmaxf(libm::roundf(style.stroke_width), 1.0) as u32;
        Line::new(self.to_point(from), self.to_point(to))
            .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
            .draw(&mut *self.target)
    }
}
