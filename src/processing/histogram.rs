use std::collections::HashSet;

/// Upper bound on the number of bins in the distribution chart.
pub const MAX_BINS: usize = 10;

/// An equal-width histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` of them.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin the finite values with one bin per distinct value, capped at
    /// [`MAX_BINS`] and never fewer than one. Returns `None` when nothing
    /// finite is left to bin.
    pub fn build(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        let bins = distinct_count(&finite).clamp(1, MAX_BINS);
        Some(Self::with_bins(&finite, bins))
    }

    /// Bin already-finite, non-empty values into `bins` equal-width bins over
    /// `[min, max]`. The last bin is closed on the right. A zero-width range
    /// is widened by half a unit on each side.
    ///
    /// Values may span more than `f64::MAX`, so the range is only ever
    /// handled in halves or through interpolation.
    fn with_bins(values: &[f64], bins: usize) -> Self {
        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let n = bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| match i {
                0 => lo,
                i if i == bins => hi,
                i => {
                    let t = i as f64 / n;
                    lo * (1.0 - t) + hi * t
                }
            })
            .collect();

        let half_span = hi / 2.0 - lo / 2.0;
        let mut counts = vec![0usize; bins];
        for &v in values {
            let t = if half_span > 0.0 {
                (v / 2.0 - lo / 2.0) / half_span
            } else {
                0.0
            };
            let idx = (t * n).floor();
            let idx = if idx < 0.0 { 0 } else { (idx as usize).min(bins - 1) };
            counts[idx] += 1;
        }

        Self { edges, counts }
    }

    pub fn bin_width(&self) -> f64 {
        let n = self.counts.len() as f64;
        self.edges[self.counts.len()] / n - self.edges[0] / n
    }

    /// `(center, count)` for each bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &c)| (w[0] / 2.0 + w[1] / 2.0, c))
    }
}

/// Number of distinct values, treating `0.0` and `-0.0` as the same.
pub fn distinct_count(values: &[f64]) -> usize {
    values
        .iter()
        .map(|v| (v + 0.0).to_bits())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_histogram() {
        assert_eq!(Histogram::build(&[]), None);
        assert_eq!(Histogram::build(&[f64::NAN, f64::INFINITY]), None);
    }

    #[test]
    fn test_single_distinct_value_gets_one_bin() {
        let h = Histogram::build(&[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(h.counts.len(), 1);
        assert_eq!(h.counts, vec![3]);
        assert_eq!(h.edges, vec![3.5, 4.5]);
    }

    #[test]
    fn test_bins_follow_distinct_count() {
        let h = Histogram::build(&[1.0, 2.0, 2.0, 3.0]).unwrap();
        assert_eq!(h.counts.len(), 3);
        assert_eq!(h.counts, vec![1, 2, 1]);
    }

    #[test]
    fn test_bins_capped_at_ten() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let h = Histogram::build(&values).unwrap();
        assert_eq!(h.counts.len(), MAX_BINS);
        assert_eq!(h.counts.iter().sum::<usize>(), 100);
        assert!(h.counts.iter().all(|&c| c == 10));
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let h = Histogram::build(&[0.0, 10.0]).unwrap();
        assert_eq!(h.counts, vec![1, 1]);
        assert_eq!(*h.edges.last().unwrap(), 10.0);
    }

    #[test]
    fn test_non_finite_skipped() {
        let h = Histogram::build(&[1.0, f64::NAN, 3.0, f64::NEG_INFINITY]).unwrap();
        assert_eq!(h.counts.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_bars_are_centered() {
        let h = Histogram::build(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        let centers: Vec<f64> = h.bars().map(|(c, _)| c).collect();
        assert_eq!(centers, vec![0.375, 1.125, 1.875, 2.625]);
        assert_eq!(h.bin_width(), 0.75);
    }

    #[test]
    fn test_range_wider_than_f64_max() {
        let h = Histogram::build(&[-1e308, 1e308]).unwrap();
        assert!(h.edges.iter().all(|e| e.is_finite()));
        assert_eq!(h.edges, vec![-1e308, 0.0, 1e308]);
        assert_eq!(h.counts, vec![1, 1]);
        assert_eq!(h.bin_width(), 1e308);
        let centers: Vec<f64> = h.bars().map(|(c, _)| c).collect();
        assert_eq!(centers, vec![-5e307, 5e307]);
    }

    #[test]
    fn test_extreme_values_spread_over_bins() {
        let h = Histogram::build(&[-f64::MAX, 0.0, f64::MAX]).unwrap();
        assert_eq!(h.counts, vec![1, 1, 1]);
        assert!(h.bin_width().is_finite());
    }

    #[test]
    fn test_signed_zero_is_one_value() {
        assert_eq!(distinct_count(&[0.0, -0.0]), 1);
    }
}
