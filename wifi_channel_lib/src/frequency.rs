/** ------------------------------------------------------------
 * Frequency (MHz) to WiFi channel and band classification
 * ------------------------------------------------------------- */
use crate::errors::ClassificationError;
use crate::wifi_band::{BandFilter, WiFiBand};
use log::{debug, trace};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Channel spacing within a band in MHz
pub const CHANNEL_SPACING_MHZ: i32 = 5;

#[rustfmt::skip]
struct BandDefinition {
    range_start   : i32,              // First frequency in the band (MHz)
    range_end     : i32,              // Last frequency in the band (MHz)
    first_channel : i32,              // Channel number of `range_start`
    wifi_band     : Option<WiFiBand>,
}

/**
 * Band table, indexed by `Frequency` discriminant.
 *
 * Ranges are disjoint and sorted by frequency.
 */
#[rustfmt::skip]
const BAND_DEFINITIONS: [BandDefinition; Frequency::COUNT] = [
    BandDefinition { range_start: 0,    range_end: 0,    first_channel: 0,  wifi_band: None },
    BandDefinition { range_start: 2412, range_end: 2472, first_channel: 1,  wifi_band: Some(WiFiBand::TwoPointFour) },
    BandDefinition { range_start: 2484, range_end: 2484, first_channel: 14, wifi_band: Some(WiFiBand::TwoPointFour) },
    BandDefinition { range_start: 5170, range_end: 5825, first_channel: 34, wifi_band: Some(WiFiBand::Five) },
];

/**
 * Frequency bands known to the classifier.
 *
 * Declaration order is the lookup order of [`Frequency::find`]. Variant
 * names convert to and from snake_case (`two_point_four_ch14`).
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Frequency {
    Unknown,
    TwoPointFour,
    TwoPointFourCh14,
    Five,
}

impl Frequency {
    fn definition(self) -> &'static BandDefinition {
        &BAND_DEFINITIONS[self as usize]
    }

    /// All variants in lookup order
    pub fn all() -> impl Iterator<Item = Frequency> {
        Frequency::iter()
    }

    pub fn range(self) -> RangeInclusive<i32> {
        let definition = self.definition();
        definition.range_start..=definition.range_end
    }

    pub fn in_range(self, frequency: i32) -> bool {
        self.range().contains(&frequency)
    }

    /**
     * Channel number of `frequency` within this band.
     *
     * Frequencies outside the band map to channel 0, so check membership
     * with `in_range` (or go through `find`) first.
     */
    pub fn channel(self, frequency: i32) -> i32 {
        if !self.in_range(frequency) {
            return 0;
        }
        let definition = self.definition();
        definition.first_channel + (frequency - definition.range_start) / CHANNEL_SPACING_MHZ
    }

    pub fn wifi_band(self) -> Option<WiFiBand> {
        self.definition().wifi_band
    }

    /**
     * Centre frequency (MHz) of `channel` within this band, if the band
     * carries that channel.
     */
    pub fn frequency(self, channel: i32) -> Option<i32> {
        if self == Frequency::Unknown {
            return None;
        }
        let definition = self.definition();
        if channel < definition.first_channel {
            return None;
        }
        let frequency = (channel - definition.first_channel)
            .checked_mul(CHANNEL_SPACING_MHZ)?
            .checked_add(definition.range_start)?;
        self.in_range(frequency).then_some(frequency)
    }

    /**
     * All channel numbers of this band in ascending order.
     *
     * `Unknown` has no channels even though its range holds frequency 0.
     */
    pub fn channels(self) -> BTreeSet<i32> {
        if self == Frequency::Unknown {
            return BTreeSet::new();
        }
        self.range()
            .step_by(CHANNEL_SPACING_MHZ as usize)
            .map(|frequency| self.channel(frequency))
            .collect()
    }

    /**
     * Find the band a frequency belongs to, defaulting to `Unknown`
     */
    pub fn find(frequency: i32) -> Frequency {
        match Frequency::iter().find(|band| band.in_range(frequency)) {
            Some(band) => {
                trace!("{} MHz classified as {:?}", frequency, band);
                band
            }
            None => {
                debug!("{} MHz is outside all known bands", frequency);
                Frequency::Unknown
            }
        }
    }

    /**
     * Strict form of `find`: frequencies without a WiFi band are an error
     * rather than `Unknown`.
     */
    pub fn try_find(frequency: i32) -> Result<Frequency, ClassificationError> {
        match Frequency::find(frequency) {
            Frequency::Unknown => Err(ClassificationError::UnrecognizedFrequency { mhz: frequency }),
            band => Ok(band),
        }
    }

    pub fn find_channel(frequency: i32) -> i32 {
        Frequency::find(frequency).channel(frequency)
    }

    /**
     * Union of the channels of every band selected by `filter`
     */
    pub fn find_channels(filter: impl Into<BandFilter>) -> BTreeSet<i32> {
        let filter = filter.into();
        Frequency::iter()
            .filter(|band| filter.matches(band.wifi_band()))
            .flat_map(|band| band.channels())
            .collect()
    }

    /**
     * Centre frequency (MHz) of a channel number, searched across all bands
     */
    pub fn find_frequency(channel: i32) -> Result<i32, ClassificationError> {
        Frequency::iter()
            .find_map(|band| band.frequency(channel))
            .ok_or(ClassificationError::UnknownChannel { channel })
    }
}
