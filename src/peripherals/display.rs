//! Display control module for PineTime

use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::{AnyPin, Output},
    peripherals::SPI2,
    spim::Spim,
};
use embassy_time::Delay;
use mipidsi::{models::ST7789, Builder, Orientation};
use pinetime_clockface::{Bounds, CanvasSurface, ClockSource, FaceRenderer, WatchFace};

use super::backlight::Backlight;

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, AnyPin>, Output<'static, AnyPin>>,
    ST7789,
    Output<'static, AnyPin>,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum DisplayError {
    /// Panel did not come up
    Init,
    /// Writing pixels failed
    Interface,
}

pub struct Display {
    /// Display instance
    lcd: Lcd,
    /// Kept alive so the backlight pins stay driven
    _backlight: Backlight,
}

impl Display {
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'static, SPI2>,
        cs_pin: Output<'static, AnyPin>,
        dc_pin: Output<'static, AnyPin>,
        rst_pin: Output<'static, AnyPin>,
        backlight: Backlight,
    ) -> Result<Self, DisplayError> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| DisplayError::Init)?;
        defmt::info!("Display ready ({}x{})", LCD_W, LCD_H);

        Ok(Self {
            lcd,
            _backlight: backlight,
        })
    }

    /// Draw one frame of the face over the whole panel
    pub fn render<C: ClockSource>(&mut self, face: &mut FaceRenderer<C>) -> Result<(), DisplayError> {
        let mut surface = CanvasSurface::new(&mut self.lcd);
        face.draw(&mut surface, Bounds::new(0, 0, LCD_W as i32, LCD_H as i32))
            .map_err(|_| DisplayError::Interface)
    }
}
