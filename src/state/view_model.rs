use crate::processing::histogram::Histogram;
use crate::processing::statistics::{format_mean, Stats};
use crate::state::number_store::Number;

pub const UNAVAILABLE: &str = "N/A";

/// Formatted text for the five statistic labels.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLabels {
    pub minimum: String,
    pub maximum: String,
    pub sum: String,
    pub average: String,
    pub count: String,
}

impl StatLabels {
    pub fn from_stats(stats: &Stats) -> Self {
        match stats {
            Stats::Empty => Self {
                minimum: UNAVAILABLE.to_string(),
                maximum: UNAVAILABLE.to_string(),
                sum: UNAVAILABLE.to_string(),
                average: UNAVAILABLE.to_string(),
                count: "0".to_string(),
            },
            Stats::Summary(s) => Self {
                minimum: s.minimum.to_string(),
                maximum: s.maximum.to_string(),
                sum: s.sum.to_string(),
                average: format_mean(s.mean),
                count: s.count.to_string(),
            },
        }
    }
}

/// What one chart should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData<T> {
    /// Axes with a centered "No data available" message.
    Placeholder,
    Plot(T),
}

/// Everything the view needs for one full redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub labels: StatLabels,
    /// The numbers joined by `", "` in insertion order.
    pub numbers_text: String,
    /// `[index, value]` pairs for the sequence plot.
    pub sequence: ChartData<Vec<[f64; 2]>>,
    pub distribution: ChartData<Histogram>,
}

impl ViewModel {
    pub fn build(values: &[Number]) -> Self {
        let stats = Stats::compute(values);
        let labels = StatLabels::from_stats(&stats);

        let numbers_text = values
            .iter()
            .map(Number::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let points: Vec<[f64; 2]> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| [i as f64, v.as_f64()])
            .collect();
        let sequence = if points.is_empty() {
            ChartData::Placeholder
        } else {
            ChartData::Plot(points)
        };

        let raw: Vec<f64> = values.iter().map(Number::as_f64).collect();
        let distribution = match Histogram::build(&raw) {
            Some(h) => ChartData::Plot(h),
            None => ChartData::Placeholder,
        };

        Self {
            labels,
            numbers_text,
            sequence,
            distribution,
        }
    }

    pub fn empty() -> Self {
        Self::build(&[])
    }
}
