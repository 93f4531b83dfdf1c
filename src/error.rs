//! Error type

/// Errors raised while preparing data for the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Time zone identifier not understood by the clock
    #[error("unrecognised time zone identifier")]
    InvalidTimeZone,
    /// Numeric zone offset beyond ±23:59
    #[error("time zone offset out of range")]
    OffsetOutOfRange,
    /// ADC sample outside the 12 bit range
    #[error("invalid battery measurement")]
    InvalidMeasurement,
}
