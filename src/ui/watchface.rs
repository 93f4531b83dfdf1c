//! Digital watchface
//!
//! Time in the middle of the bounds, date and battery label stacked below,
//! and a seconds hand sweeping around the surface center.

use heapless::String;

use super::{Bounds, Color, PointF, Style, Surface, WatchFace};
use crate::{
    bounded,
    clock::{Clock, ClockReading, ClockSource, TimeZone},
    config::{FaceConfig, Theme, BACKGROUND_DEFAULT_COLOUR},
    fmt::{debug, trace, warn},
};

/// Vertical gap between stacked text lines
pub const TEXT_GAP: f32 = 10.0;

/// Distance from the pivot to the inner end of the seconds hand
pub const SECOND_HAND_INSET: f32 = 120.0;

/// Battery text the face keeps, in bytes
pub const BATTERY_TEXT_LEN: usize = 64;

const DEGREES_PER_SECOND: f32 = 6.0;

const TIME_BUF_LEN: usize = 16;
const DATE_BUF_LEN: usize = 24;

/// Format `HH:MM:SS`, or `HH:MM` without seconds.
///
/// Returns an empty string if `buf` is too small.
pub fn format_time<'b>(buf: &'b mut [u8], reading: &ClockReading, show_seconds: bool) -> &'b str {
    let text = if show_seconds {
        format_no_std::show(
            buf,
            format_args!(
                "{:02}:{:02}:{:02}",
                reading.hour, reading.minute, reading.second
            ),
        )
    } else {
        format_no_std::show(
            buf,
            format_args!("{:02}:{:02}", reading.hour, reading.minute),
        )
    };
    text.unwrap_or_default()
}

/// Format `DD.MM.YYYY` with a one-based month.
///
/// Returns an empty string if `buf` is too small.
pub fn format_date<'b>(buf: &'b mut [u8], reading: &ClockReading) -> &'b str {
    format_no_std::show(
        buf,
        format_args!(
            "{:02}.{:02}.{}",
            reading.month_day,
            reading.month + 1,
            reading.year
        ),
    )
    .unwrap_or_default()
}

/// Left edge that centers a string of `width` in `bounds`
pub fn x_offset(bounds: &Bounds, width: f32) -> f32 {
    bounds.exact_center_x() - width / 2.0
}

/// Seconds hand angle in degrees, clockwise from twelve o'clock
pub fn seconds_rotation(second: u32) -> f32 {
    second as f32 * DEGREES_PER_SECOND
}

/// Surface size seen on the last draw
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViewState {
    pub width: u32,
    pub height: u32,
}

impl ViewState {
    /// Surface center, the seconds hand pivot
    pub fn pivot(&self) -> PointF {
        PointF::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Battery text kept as given. Anything past [`BATTERY_TEXT_LEN`] bytes
/// does not fit and is dropped at a char boundary.
fn battery_label(text: &str) -> String<BATTERY_TEXT_LEN> {
    if text.len() > BATTERY_TEXT_LEN {
        warn!(
            "Battery label is {} bytes, keeping the first {}",
            text.len(),
            BATTERY_TEXT_LEN
        );
    }
    bounded(text)
}

/// Clock face renderer
pub struct FaceRenderer<C> {
    time_style: Style,
    date_style: Style,
    battery_style: Style,
    background_style: Style,
    second_hand_style: Style,
    clock: Clock<C>,
    show_seconds: bool,
    battery: String<BATTERY_TEXT_LEN>,
    view: ViewState,
}

impl<C: ClockSource> FaceRenderer<C> {
    /// Create a face in UTC showing seconds and a `"100%"` battery label.
    ///
    /// The clock reading stays zeroed until the first draw.
    pub fn new(theme: &Theme, source: C) -> Self {
        Self {
            time_style: Style::text(theme.time_colour, theme.time_text_size),
            date_style: Style::text(theme.date_colour, theme.date_text_size),
            battery_style: Style::text(theme.battery_colour, theme.date_text_size)
                .with_stroke_width(theme.stroke_width),
            background_style: Style::fill(theme.background_colour),
            second_hand_style: Style::stroke(theme.battery_colour, theme.stroke_width),
            clock: Clock::new(source),
            show_seconds: true,
            battery: bounded("100%"),
            view: ViewState::default(),
        }
    }

    /// Create a face from a full configuration
    pub fn with_config(config: &FaceConfig, source: C) -> Self {
        let mut face = Self::new(&config.theme, source);
        face.clock.clear(config.time_zone);
        face.show_seconds = config.show_seconds;
        face.battery = battery_label(config.battery_text);
        face
    }

    /// Switch time zone and refresh the reading right away
    pub fn update_time_zone_with(&mut self, zone_id: &str) {
        self.clock.clear(zone_id);
        self.clock.set_to_now();
    }

    /// Replace the battery label
    pub fn update_battery(&mut self, text: &str) {
        debug!("Battery label set to {}", text);
        self.battery = battery_label(text);
    }

    /// Restore the default background color
    pub fn update_background_colour_to_default(&mut self) {
        self.set_background_colour(BACKGROUND_DEFAULT_COLOUR);
    }

    /// Use a custom background color
    pub fn set_background_colour(&mut self, color: Color) {
        self.background_style = self.background_style.with_color(color);
    }

    pub fn set_show_seconds(&mut self, show_seconds: bool) {
        self.show_seconds = show_seconds;
    }

    pub fn show_seconds(&self) -> bool {
        self.show_seconds
    }

    /// Reading taken on the last draw or zone change
    pub fn reading(&self) -> &ClockReading {
        self.clock.reading()
    }

    pub fn time_zone(&self) -> &TimeZone {
        self.clock.zone()
    }

    pub fn battery_text(&self) -> &str {
        &self.battery
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn time_style(&self) -> &Style {
        &self.time_style
    }

    pub fn date_style(&self) -> &Style {
        &self.date_style
    }

    pub fn battery_style(&self) -> &Style {
        &self.battery_style
    }

    pub fn background_style(&self) -> &Style {
        &self.background_style
    }

    /// Stroke style for a seconds hand. The face draws its hand with
    /// [`battery_style`](Self::battery_style), not this one.
    pub fn second_hand_style(&self) -> &Style {
        &self.second_hand_style
    }
}

impl<C: ClockSource> WatchFace for FaceRenderer<C> {
    fn draw<S: Surface>(&mut self, surface: &mut S, bounds: Bounds) -> Result<(), S::Error> {
        let (width, height) = surface.size();
        self.view = ViewState { width, height };
        let pivot = self.view.pivot();
        trace!("Drawing face on {}x{} surface", width, height);

        self.clock.set_to_now();
        let reading = *self.clock.reading();

        surface.fill_rect(
            Bounds::new(0, 0, bounds.width(), bounds.height()),
            &self.background_style,
        )?;

        // Time
        let mut buf = [0u8; TIME_BUF_LEN];
        let time_text = format_time(&mut buf, &reading, self.show_seconds);
        let time_width = surface.measure_text(time_text, &self.time_style).width;
        let time_y = bounds.center_y() as f32;
        surface.draw_text(
            time_text,
            PointF::new(x_offset(&bounds, time_width), time_y),
            &self.time_style,
        )?;

        // Date
        let mut buf = [0u8; DATE_BUF_LEN];
        let date_text = format_date(&mut buf, &reading);
        let date_metrics = surface.measure_text(date_text, &self.date_style);
        let date_y = time_y + date_metrics.height + TEXT_GAP;
        surface.draw_text(
            date_text,
            PointF::new(x_offset(&bounds, date_metrics.width), date_y),
            &self.date_style,
        )?;

        // Battery
        let battery_text = self.battery.as_str();
        let battery_metrics = surface.measure_text(battery_text, &self.battery_style);
        let battery_y = date_y + battery_metrics.height + TEXT_GAP;
        surface.draw_text(
            battery_text,
            PointF::new(x_offset(&bounds, battery_metrics.width), battery_y),
            &self.battery_style,
        )?;

        // Seconds hand, painted with the battery style
        surface.rotate(seconds_rotation(reading.second), pivot);
        surface.draw_line(
            PointF::new(pivot.x, pivot.y - SECOND_HAND_INSET),
            PointF::new(pivot.x, pivot.y - pivot.x),
            &self.battery_style,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::PRIMARY_BLUE,
        ui::recording::{Op, RecordingSurface},
    };
    use chrono::{NaiveDate, NaiveDateTime};
    use core::cell::Cell;
    use proptest::prelude::*;

    struct FixedClock(NaiveDateTime);

    impl ClockSource for FixedClock {
        fn now_utc(&self) -> NaiveDateTime {
            self.0
        }
    }

    struct SettableClock(Cell<NaiveDateTime>);

    impl ClockSource for SettableClock {
        fn now_utc(&self) -> NaiveDateTime {
            self.0.get()
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn reading(hour: u32, minute: u32, second: u32) -> ClockReading {
        ClockReading {
            hour,
            minute,
            second,
            ..ClockReading::ZERO
        }
    }

    fn face_at(h: u32, m: u32, s: u32) -> FaceRenderer<FixedClock> {
        FaceRenderer::new(&Theme::default(), FixedClock(at(h, m, s)))
    }

    #[test]
    fn test_format_time() {
        let mut buf = [0u8; TIME_BUF_LEN];
        assert_eq!(format_time(&mut buf, &reading(7, 5, 3), true), "07:05:03");
        assert_eq!(format_time(&mut buf, &reading(23, 59, 0), false), "23:59");
        assert_eq!(format_time(&mut buf, &ClockReading::ZERO, true), "00:00:00");
    }

    #[test]
    fn test_format_time_buffer_too_small() {
        let mut buf = [0u8; 4];
        assert_eq!(format_time(&mut buf, &reading(7, 5, 3), true), "");
    }

    #[test]
    fn test_format_date_month_is_one_based() {
        let mut buf = [0u8; DATE_BUF_LEN];
        let date = ClockReading {
            month_day: 5,
            month: 6,
            year: 2024,
            ..ClockReading::ZERO
        };
        assert_eq!(format_date(&mut buf, &date), "05.07.2024");

        let december = ClockReading {
            month_day: 31,
            month: 11,
            year: 1999,
            ..ClockReading::ZERO
        };
        assert_eq!(format_date(&mut buf, &december), "31.12.1999");
    }

    #[test]
    fn test_seconds_rotation() {
        assert_eq!(seconds_rotation(0), 0.0);
        assert_eq!(seconds_rotation(15), 90.0);
        assert_eq!(seconds_rotation(59), 354.0);
    }

    #[test]
    fn test_styles_from_theme() {
        let face = face_at(0, 0, 0);
        assert_eq!(*face.time_style(), Style::text(PRIMARY_BLUE, 40.0));
        assert_eq!(*face.date_style(), Style::text(PRIMARY_BLUE, 20.0));
        assert_eq!(face.battery_style().stroke_width, 3.0);
        assert_eq!(face.battery_style().text_size, 20.0);
        assert_eq!(*face.background_style(), Style::fill(Color::BLACK));
        assert!(!face.background_style().anti_alias);
        assert_eq!(*face.second_hand_style(), Style::stroke(PRIMARY_BLUE, 3.0));
        assert_eq!(*face.reading(), ClockReading::ZERO);
        assert_eq!(face.battery_text(), "100%");
        assert!(face.show_seconds());
    }

    #[test]
    fn test_draw_layout() {
        let mut face = face_at(7, 15, 30);
        let mut surface = RecordingSurface::new(200, 100);
        face.draw(&mut surface, Bounds::new(0, 0, 200, 100)).unwrap();

        assert_eq!(
            surface.ops[0],
            Op::Fill {
                rect: Bounds::new(0, 0, 200, 100),
                color: Color::BLACK,
            }
        );
        assert_eq!(
            surface.texts(),
            vec![
                // 8 glyphs, 80 wide
                ("07:15:30", PointF::new(60.0, 50.0)),
                // Date text is 20 high plus the gap
                ("15.07.2024", PointF::new(50.0, 80.0)),
                ("100%", PointF::new(80.0, 110.0)),
            ]
        );
        assert_eq!(
            surface.ops[4],
            Op::Rotate {
                degrees: 180.0,
                pivot: PointF::new(100.0, 50.0),
            }
        );
        assert_eq!(
            surface.ops[5],
            Op::Line {
                from: PointF::new(100.0, -70.0),
                to: PointF::new(100.0, -50.0),
                style: *face.battery_style(),
            }
        );
        assert_eq!(surface.ops.len(), 6);
        assert_eq!(
            face.view_state(),
            ViewState {
                width: 200,
                height: 100
            }
        );
    }

    #[test]
    fn test_pivot_follows_surface_not_bounds() {
        let mut face = face_at(7, 15, 0);
        let mut surface = RecordingSurface::new(240, 240);
        face.draw(&mut surface, Bounds::new(20, 20, 100, 60)).unwrap();

        assert_eq!(
            surface.ops[0],
            Op::Fill {
                rect: Bounds::new(0, 0, 80, 40),
                color: Color::BLACK,
            }
        );
        assert!(surface.ops.contains(&Op::Rotate {
            degrees: 0.0,
            pivot: PointF::new(120.0, 120.0),
        }));
        let (_, time_origin) = surface.texts()[0];
        assert_eq!(time_origin, PointF::new(20.0, 40.0));
    }

    #[test]
    fn test_draw_is_idempotent_with_still_clock() {
        let mut face = face_at(12, 0, 42);
        let bounds = Bounds::new(0, 0, 240, 240);

        let mut first = RecordingSurface::new(240, 240);
        face.draw(&mut first, bounds).unwrap();
        let mut second = RecordingSurface::new(240, 240);
        face.draw(&mut second, bounds).unwrap();

        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn test_draw_refreshes_reading() {
        let source = SettableClock(Cell::new(at(8, 0, 0)));
        let mut face = FaceRenderer::new(&Theme::default(), &source);
        let bounds = Bounds::new(0, 0, 240, 240);

        face.draw(&mut RecordingSurface::new(240, 240), bounds).unwrap();
        assert_eq!(face.reading().hour, 8);

        source.0.set(at(8, 0, 59));
        // Nothing moves until the next draw
        assert_eq!(face.reading().second, 0);
        let mut surface = RecordingSurface::new(240, 240);
        face.draw(&mut surface, bounds).unwrap();
        assert_eq!(face.reading().second, 59);
        assert!(surface.ops.contains(&Op::Rotate {
            degrees: 354.0,
            pivot: PointF::new(120.0, 120.0),
        }));
    }

    #[test]
    fn test_hide_seconds() {
        let mut face = face_at(7, 15, 30);
        face.set_show_seconds(false);
        let mut surface = RecordingSurface::new(200, 100);
        face.draw(&mut surface, Bounds::new(0, 0, 200, 100)).unwrap();

        assert_eq!(surface.texts()[0], ("07:15", PointF::new(75.0, 50.0)));
    }

    #[test]
    fn test_update_time_zone_refreshes_immediately() {
        let mut face = face_at(23, 30, 0);
        face.update_time_zone_with("UTC+02:00");

        let reading = face.reading();
        assert_eq!((reading.hour, reading.minute), (1, 30));
        assert_eq!(reading.month_day, 16);
        assert_eq!(face.time_zone().offset_seconds(), 7_200);
    }

    #[test]
    fn test_update_time_zone_unknown_uses_utc() {
        let mut face = face_at(9, 0, 0);
        face.update_time_zone_with("Nowhere/Special");
        assert_eq!(face.time_zone().id(), "UTC");
        assert_eq!(face.reading().hour, 9);

        face.update_time_zone_with("+02:00");
        face.update_time_zone_with("+1€");
        assert_eq!(face.time_zone().id(), "UTC");
        assert_eq!(face.reading().hour, 9);
    }

    #[test]
    fn test_update_battery_is_verbatim() {
        let mut face = face_at(7, 15, 30);
        face.update_battery("42 %!");
        let mut surface = RecordingSurface::new(200, 100);
        face.draw(&mut surface, Bounds::new(0, 0, 200, 100)).unwrap();

        assert_eq!(face.battery_text(), "42 %!");
        assert_eq!(surface.texts()[2].0, "42 %!");
    }

    #[test]
    fn test_update_battery_keeps_long_label() {
        let mut face = face_at(7, 15, 30);
        face.update_battery("Battery: 87% (charging)");
        let mut surface = RecordingSurface::new(200, 100);
        face.draw(&mut surface, Bounds::new(0, 0, 200, 100)).unwrap();

        assert_eq!(face.battery_text(), "Battery: 87% (charging)");
        assert_eq!(surface.texts()[2].0, "Battery: 87% (charging)");
    }

    #[test]
    fn test_update_battery_over_capacity() {
        let mut face = face_at(7, 15, 30);
        let long = "é".repeat(BATTERY_TEXT_LEN);
        face.update_battery(&long);
        assert_eq!(face.battery_text(), "é".repeat(BATTERY_TEXT_LEN / 2));
    }

    #[test]
    fn test_background_reset_to_default() {
        let mut face = face_at(7, 15, 30);
        face.set_background_colour(Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(face.background_style().color, Color::rgb(0x10, 0x20, 0x30));

        face.update_background_colour_to_default();
        assert_eq!(face.background_style().color, BACKGROUND_DEFAULT_COLOUR);
        assert_eq!(*face.background_style(), Style::fill(Color::BLACK));

        // Default theme colors are untouched
        assert_eq!(face.time_style().color, PRIMARY_BLUE);
    }

    #[test]
    fn test_background_reset_ignores_theme_background() {
        let theme = Theme {
            background_colour: Color::WHITE,
            ..Theme::default()
        };
        let mut face = FaceRenderer::new(&theme, FixedClock(at(0, 0, 0)));
        face.update_background_colour_to_default();

        let mut surface = RecordingSurface::new(10, 10);
        face.draw(&mut surface, Bounds::new(0, 0, 10, 10)).unwrap();
        assert_eq!(
            surface.ops[0],
            Op::Fill {
                rect: Bounds::new(0, 0, 10, 10),
                color: Color::BLACK,
            }
        );
    }

    #[test]
    fn test_zero_sized_surface() {
        let mut face = face_at(7, 15, 30);
        let mut surface = RecordingSurface::new(0, 0);
        face.draw(&mut surface, Bounds::default()).unwrap();

        assert_eq!(surface.texts()[0], ("07:15:30", PointF::new(-40.0, 0.0)));
        assert_eq!(
            surface.ops.last(),
            Some(&Op::Line {
                from: PointF::new(0.0, -120.0),
                to: PointF::new(0.0, 0.0),
                style: *face.battery_style(),
            })
        );
    }

    #[test]
    fn test_with_config() {
        let config = FaceConfig {
            show_seconds: false,
            time_zone: "GMT-03:00",
            battery_text: "55%",
            ..FaceConfig::default()
        };
        let mut face = FaceRenderer::with_config(&config, FixedClock(at(7, 15, 30)));
        assert_eq!(*face.reading(), ClockReading::ZERO);

        let mut surface = RecordingSurface::new(200, 100);
        face.draw(&mut surface, Bounds::new(0, 0, 200, 100)).unwrap();
        let texts = surface.texts();
        assert_eq!(texts[0].0, "04:15");
        assert_eq!(texts[2].0, "55%");
    }

    proptest! {
        #[test]
        fn prop_text_is_centered(
            left in -500i32..500,
            top in -500i32..500,
            width in 0i32..1000,
            height in 0i32..1000,
            text_width in 0.0f32..2000.0,
        ) {
            let bounds = Bounds::new(left, top, left + width, top + height);
            let offset = x_offset(&bounds, text_width);
            prop_assert!((offset + text_width / 2.0 - bounds.exact_center_x()).abs() < 1e-3);
        }

        #[test]
        fn prop_time_fields_zero_padded(h in 0u32..24, m in 0u32..60, s in 0u32..60, show in any::<bool>()) {
            let mut buf = [0u8; TIME_BUF_LEN];
            let text = format_time(&mut buf, &reading(h, m, s), show);
            let fields: Vec<&str> = text.split(':').collect();
            prop_assert_eq!(fields.len(), if show { 3 } else { 2 });
            prop_assert!(fields.iter().all(|f| f.len() == 2));
            prop_assert_eq!(fields[0].parse::<u32>().unwrap(), h);
            prop_assert_eq!(fields[1].parse::<u32>().unwrap(), m);
            if show {
                prop_assert_eq!(fields[2].parse::<u32>().unwrap(), s);
            }
        }

        #[test]
        fn prop_date_month_shifted(d in 1u32..32, m in 0u32..12, y in 1000i32..10000) {
            let mut buf = [0u8; DATE_BUF_LEN];
            let date = ClockReading { month_day: d, month: m, year: y, ..ClockReading::ZERO };
            let text = format_date(&mut buf, &date);
            prop_assert_eq!(text.to_string(), format!("{:02}.{:02}.{}", d, m + 1, y));
        }

        #[test]
        fn prop_rotation_is_six_degrees_per_second(s in 0u32..60) {
            let rotation = seconds_rotation(s);
            prop_assert_eq!(rotation, s as f32 * 6.0);
            prop_assert!((0.0..360.0).contains(&rotation));
        }
    }
}
