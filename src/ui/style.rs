//! Paint styles

use embedded_graphics::pixelcolor::Rgb888;

/// 32 bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xff);
    pub const TRANSPARENT: Self = Self::argb(0x00, 0x00, 0x00, 0x00);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xff, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<Color> for Rgb888 {
    fn from(color: Color) -> Self {
        Rgb888::new(color.red(), color.green(), color.blue())
    }
}

/// How one element of the face is painted
///
/// Styles are plain values; changing one means building a new one with the
/// `with_*` methods and storing it in place of the old.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Style {
    pub color: Color,
    /// Text height in pixels, zero for non-text elements
    pub text_size: f32,
    /// Line width in pixels, zero for a hairline
    pub stroke_width: f32,
    pub anti_alias: bool,
}

impl Style {
    /// Solid fill
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            text_size: 0.0,
            stroke_width: 0.0,
            anti_alias: false,
        }
    }

    /// Antialiased text
    pub const fn text(color: Color, text_size: f32) -> Self {
        Self {
            color,
            text_size,
            stroke_width: 0.0,
            anti_alias: true,
        }
    }

    /// Antialiased stroke
    pub const fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            text_size: 0.0,
            stroke_width,
            anti_alias: true,
        }
    }

    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub const fn with_stroke_width(self, stroke_width: f32) -> Self {
        Self {
            stroke_width,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channels() {
        let c = Color::argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(c.0, 0x8012_3456);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(Color::BLUE.0, 0xff00_00ff);
    }

    #[test]
    fn test_color_to_rgb888() {
        let rgb: Rgb888 = Color::rgb(0x21, 0x96, 0xf3).into();
        assert_eq!(rgb, Rgb888::new(0x21, 0x96, 0xf3));
    }

    #[test]
    fn test_with_color_keeps_other_fields() {
        let style = Style::text(Color::BLUE, 20.0).with_stroke_width(3.0);
        let recolored = style.with_color(Color::WHITE);
        assert_eq!(recolored.color, Color::WHITE);
        assert_eq!(recolored.text_size, 20.0);
        assert_eq!(recolored.stroke_width, 3.0);
        assert!(recolored.anti_alias);
    }
}
