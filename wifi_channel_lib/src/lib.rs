mod classification;
mod errors;
mod frequency;
pub mod util;
mod wifi_band;

pub use classification::{classify_all, Classification};
pub use errors::ClassificationError;
pub use frequency::{Frequency, CHANNEL_SPACING_MHZ};
pub use wifi_band::{BandFilter, WiFiBand};
