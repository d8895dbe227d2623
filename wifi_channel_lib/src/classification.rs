/** ------------------------------------------------------------
 * Classification records used throughout the library.
 * ------------------------------------------------------------- */
use crate::frequency::Frequency;
use crate::wifi_band::WiFiBand;
use std::fmt;

/**
 * Band, channel and WiFi band of a single frequency
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Classification {
    pub frequency_mhz: i32,
    pub frequency: Frequency,
    pub channel: i32,
    pub wifi_band: Option<WiFiBand>,
}

/**
 * Constructor
 */
impl Classification {
    pub fn of(frequency_mhz: i32) -> Self {
        let frequency = Frequency::find(frequency_mhz);

        Self {
            frequency_mhz,
            frequency,
            channel: frequency.channel(frequency_mhz),
            wifi_band: frequency.wifi_band(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.frequency != Frequency::Unknown
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wifi_band {
            Some(band) => write!(
                f,
                "{} MHz: channel {} ({})",
                self.frequency_mhz, self.channel, band
            ),
            None => write!(f, "{} MHz: unknown", self.frequency_mhz),
        }
    }
}

/**
 * Classify a batch of frequencies, e.g. the frequency column of a scan
 * result list. Output order follows input order.
 */
pub fn classify_all(frequencies: &[i32]) -> Vec<Classification> {
    frequencies
        .iter()
        .map(|&frequency_mhz| Classification::of(frequency_mhz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_of_known_frequency() {
        let result = Classification::of(2437);

        assert_eq!(result.frequency, Frequency::TwoPointFour);
        assert_eq!(result.channel, 6);
        assert_eq!(result.wifi_band, Some(WiFiBand::TwoPointFour));
        assert!(result.is_known());
        assert_eq!(result.to_string(), "2437 MHz: channel 6 (2.4GHz)");
    }

    #[test]
    fn classification_of_unknown_frequency() {
        let result = Classification::of(3000);

        assert_eq!(result.frequency, Frequency::Unknown);
        assert_eq!(result.channel, 0);
        assert_eq!(result.wifi_band, None);
        assert!(!result.is_known());
        assert_eq!(result.to_string(), "3000 MHz: unknown");
    }

    #[test]
    fn batch_keeps_input_order() {
        let results = classify_all(&[5825, 0, 2484, 2412]);
        let channels: Vec<i32> = results.iter().map(|c| c.channel).collect();

        assert_eq!(channels, vec![165, 0, 14, 1]);
        assert_eq!(results[1].frequency, Frequency::Unknown);
        assert_eq!(results[2].frequency, Frequency::TwoPointFourCh14);
    }

    #[test]
    fn empty_batch() {
        assert!(classify_all(&[]).is_empty());
    }
}
