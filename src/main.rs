#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pin, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker, Timer};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, battery::BatteryStatus, display::Display};
use pinetime_clockface::{BatteryLabel, FaceConfig, FaceRenderer};
use system::time::{TimeManager, TimeReference};

// Include UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

const FACE_CONFIG: FaceConfig = FaceConfig {
    time_zone: "UTC+01:00",
    ..FaceConfig::DEFAULT
};

// Communication channels
static BATTERY_LABEL: Signal<ThreadModeRawMutex, BatteryLabel> = Signal::new();

/// Fetch the battery status from the hardware.
#[embassy_executor::task(pool_size = 1)]
async fn update_battery_status(mut battery: BatteryStatus) {
    loop {
        if battery.update().await {
            defmt::info!(
                "Battery status: {}% ({})",
                battery.percent(),
                if battery.is_charging() {
                    "charging"
                } else {
                    "discharging"
                }
            );
            BATTERY_LABEL.signal(BatteryLabel::from_percent(battery.percent()));
        }

        // Re-schedule the timer interrupt in 1s
        Timer::after(Duration::from_secs(1)).await;
    }
}

/// Redraw the face every second.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display, clock: TimeManager) {
    let mut face = FaceRenderer::with_config(&FACE_CONFIG, clock);
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        if let Some(label) = BATTERY_LABEL.try_take() {
            face.update_battery(label.as_str());
        }

        if let Err(err) = display.render(&mut face) {
            defmt::warn!("Drawing face failed: {}", err);
        }

        // Re-schedule the timer interrupt in 1s
        tick.next().await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    defmt::info!("Initializing");

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initialize Battery
    let battery = BatteryStatus::init(Input::new(p.P0_12.degrade(), Pull::None), saadc).await;
    BATTERY_LABEL.signal(BatteryLabel::from_percent(battery.percent()));

    // Initialize Backlight
    let backlight = Backlight::init(
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
        2,
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_18.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26.degrade(), Level::Low, OutputDrive::Standard),
        backlight,
    ));

    // Start the clock at the build time
    let mut clock = TimeManager::init();
    clock.set_time(unwrap!(TimeReference::from_timestamp(UTC_TIME)));

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_battery_status(battery)));
    unwrap!(spawner.spawn(update_lcd(display, clock)));
}
