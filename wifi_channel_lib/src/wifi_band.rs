/** ------------------------------------------------------------
 * WiFi band tags and the band selector used for channel queries
 * ------------------------------------------------------------- */
use crate::errors::ClassificationError;
use std::str::FromStr;
use strum::Display;

/**
 * WiFi band type
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum WiFiBand {
    #[strum(serialize = "2.4GHz")]
    TwoPointFour,
    #[strum(serialize = "5GHz")]
    Five,
}

/**
 * Band selection for channel queries.
 *
 * `All` selects every band carrying a WiFi band tag, so the untagged
 * `Frequency::Unknown` placeholder never contributes channels.
 */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BandFilter {
    #[default]
    All,
    Band(WiFiBand),
}

impl BandFilter {
    pub fn matches(self, band: Option<WiFiBand>) -> bool {
        match (self, band) {
            (_, None) => false,
            (BandFilter::All, Some(_)) => true,
            (BandFilter::Band(wanted), Some(band)) => wanted == band,
        }
    }
}

impl From<WiFiBand> for BandFilter {
    fn from(band: WiFiBand) -> Self {
        BandFilter::Band(band)
    }
}

impl std::fmt::Display for BandFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandFilter::All => write!(f, "all"),
            BandFilter::Band(band) => write!(f, "{}", band),
        }
    }
}

/**
 * Conversion from user input, e.g. `--band 2.4` on the command line
 */
impl FromStr for BandFilter {
    type Err = ClassificationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "*" => Ok(BandFilter::All),
            "2.4" | "2.4g" | "2.4ghz" | "2g" => Ok(BandFilter::Band(WiFiBand::TwoPointFour)),
            "5" | "5g" | "5ghz" => Ok(BandFilter::Band(WiFiBand::Five)),
            _ => Err(ClassificationError::UnknownBand(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_display() {
        assert_eq!(WiFiBand::TwoPointFour.to_string(), "2.4GHz");
        assert_eq!(WiFiBand::Five.to_string(), "5GHz");
        assert_eq!(BandFilter::All.to_string(), "all");
        assert_eq!(BandFilter::from(WiFiBand::Five).to_string(), "5GHz");
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("ALL".parse::<BandFilter>(), Ok(BandFilter::All));
        assert_eq!(
            " 2.4GHz ".parse::<BandFilter>(),
            Ok(BandFilter::Band(WiFiBand::TwoPointFour))
        );
        assert_eq!("5g".parse::<BandFilter>(), Ok(BandFilter::Band(WiFiBand::Five)));

        let result = "6ghz".parse::<BandFilter>();
        assert_eq!(result, Err(ClassificationError::UnknownBand("6ghz".into())));
    }

    #[test]
    fn filter_never_matches_untagged() {
        assert!(!BandFilter::All.matches(None));
        assert!(!BandFilter::Band(WiFiBand::Five).matches(None));
    }

    #[test]
    fn filter_matching() {
        assert!(BandFilter::All.matches(Some(WiFiBand::TwoPointFour)));
        assert!(BandFilter::All.matches(Some(WiFiBand::Five)));
        assert!(BandFilter::Band(WiFiBand::Five).matches(Some(WiFiBand::Five)));
        assert!(!BandFilter::Band(WiFiBand::Five).matches(Some(WiFiBand::TwoPointFour)));
    }
}
