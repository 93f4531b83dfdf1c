//! Face configuration

use crate::ui::Color;

/// Primary blue of the default theme
pub const PRIMARY_BLUE: Color = Color::rgb(0x21, 0x96, 0xf3);

/// Background color restored by
/// [`FaceRenderer::update_background_colour_to_default`](crate::FaceRenderer::update_background_colour_to_default)
pub const BACKGROUND_DEFAULT_COLOUR: Color = Color::BLACK;

/// Colors and sizes the face styles are built from
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Theme {
    pub time_colour: Color,
    pub date_colour: Color,
    pub battery_colour: Color,
    pub background_colour: Color,
    /// Time text height in pixels
    pub time_text_size: f32,
    /// Date and battery text height in pixels
    pub date_text_size: f32,
    /// Width of the battery stroke and the seconds hand
    pub stroke_width: f32,
}

impl Theme {
    /// Blue on black
    pub const DEFAULT: Self = Self {
        time_colour: PRIMARY_BLUE,
        date_colour: PRIMARY_BLUE,
        battery_colour: PRIMARY_BLUE,
        background_colour: BACKGROUND_DEFAULT_COLOUR,
        time_text_size: 40.0,
        date_text_size: 20.0,
        stroke_width: 3.0,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything needed to set up a face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    pub theme: Theme,
    /// Show `HH:MM:SS` instead of `HH:MM`
    pub show_seconds: bool,
    /// Zone identifier, see [`TimeZone::parse`](crate::TimeZone::parse)
    pub time_zone: &'static str,
    /// Initial battery label
    pub battery_text: &'static str,
}

impl FaceConfig {
    /// Default theme in UTC, with seconds and a full battery
    pub const DEFAULT: Self = Self {
        theme: Theme::DEFAULT,
        show_seconds: true,
        time_zone: "UTC",
        battery_text: "100%",
    };
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
