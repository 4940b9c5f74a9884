use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Categorical position mapping from names to equal-width horizontal bands.
///
/// Inner and outer padding share the same fraction of one step and the bands
/// are centered in the range. Only the first occurrence of a name enters the
/// domain, so repeated names resolve to the same band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: IndexMap<String, usize>,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new<'a, I>(names: I, range_width: f64, padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !range_width.is_finite() || range_width < 0.0 {
            return Err(ChartError::InvalidData(
                "band range width must be finite and >= 0".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        let mut domain = IndexMap::new();
        for name in names {
            let next_index = domain.len();
            domain.entry(name.to_owned()).or_insert(next_index);
        }

        let band_count = domain.len() as f64;
        let (step, bandwidth, start) = if domain.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let step = range_width / (band_count - padding + 2.0 * padding).max(1.0);
            let start = (range_width - step * (band_count - padding)) * 0.5;
            (step, step * (1.0 - padding), start)
        };

        Ok(Self {
            domain,
            step,
            bandwidth,
            start,
        })
    }

    /// Left edge of the band reserved for `name`, relative to the range start.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<f64> {
        self.domain
            .get(name)
            .map(|index| self.start + self.step * (*index as f64))
    }

    #[must_use]
    pub fn band_index(&self, name: &str) -> Option<usize> {
        self.domain.get(name).copied()
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Domain names in band order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.domain.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::BandScale;

    #[test]
    fn bands_are_padded_and_centered() {
        let scale = BandScale::new(["a", "b", "c"], 640.0, 0.2).expect("band scale");
        // step = 640 / (3 - 0.2 + 0.4)
        assert_relative_eq!(scale.step(), 200.0, epsilon = 1e-9);
        assert_relative_eq!(scale.bandwidth(), 160.0, epsilon = 1e-9);
        assert_relative_eq!(scale.position("a").expect("a"), 40.0, epsilon = 1e-9);
        assert_relative_eq!(scale.position("c").expect("c"), 440.0, epsilon = 1e-9);
        assert!(scale.position("missing").is_none());
    }

    #[test]
    fn repeated_names_share_the_first_band() {
        let scale = BandScale::new(["Eagle", "Eagle", "Owl"], 300.0, 0.2).expect("band scale");
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.band_index("Eagle"), Some(0));
        assert_eq!(scale.band_index("Owl"), Some(1));
    }

    #[test]
    fn empty_domain_has_no_bands() {
        let scale = BandScale::new(std::iter::empty::<&str>(), 300.0, 0.2).expect("band scale");
        assert!(scale.is_empty());
        assert_eq!(scale.bandwidth(), 0.0);
    }
}
