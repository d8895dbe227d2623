/** ------------------------------------------------------------
 * Error types raised by this lib.
 * ------------------------------------------------------------- */
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("Frequency {mhz} MHz does not belong to any known WiFi band")]
    UnrecognizedFrequency { mhz: i32 },
    #[error("Channel {channel} is not a known WiFi channel")]
    UnknownChannel { channel: i32 },
    #[error("Unknown WiFi band '{0}' (expected one of: all, 2.4, 5)")]
    UnknownBand(String),
}
