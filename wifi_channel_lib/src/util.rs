use std::collections::BTreeSet;

/**
 * Format a channel set, compacting consecutive runs
 *
 * # Example
 *
 * ```ignore
 * use crate::util::format_channels;
 * let channels = BTreeSet::from([1, 3, 4, 5, 36]);
 *
 * assert!(format_channels(&channels) == "1, 3-5, 36");
 */
pub fn format_channels(channels: &BTreeSet<i32>) -> String {
    let mut runs: Vec<(i32, i32)> = Vec::new();

    for &channel in channels {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == channel => *end = channel,
            _ => runs.push((channel, channel)),
        }
    }

    runs.iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_runs() {
        let channels = BTreeSet::from([1, 3, 4, 5, 36]);
        assert_eq!(format_channels(&channels), "1, 3-5, 36");
    }

    #[test]
    fn single_run() {
        let channels: BTreeSet<i32> = (1..=14).collect();
        assert_eq!(format_channels(&channels), "1-14");
    }

    #[test]
    fn empty_set() {
        assert_eq!(format_channels(&BTreeSet::new()), "");
    }

    #[test]
    fn negative_channels() {
        let channels = BTreeSet::from([-2, -1, 0, 2]);
        assert_eq!(format_channels(&channels), "-2-0, 2");
    }
}
