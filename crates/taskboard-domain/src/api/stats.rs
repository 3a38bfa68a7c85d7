use chrono::NaiveDate;
use serde::Serialize;

use super::range::{filter_by_range, RangeSelector};
use super::records::{round1, WeightRecord};

/// Summary of the weights inside a range window, each value rounded to one
/// decimal. `delta` is last minus first by date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightStats {
    pub avg: f64,
    pub delta: f64,
    pub min: f64,
    pub max: f64,
}

impl WeightStats {
    /// `None` when no record falls inside the window.
    pub fn over(
        records: &[WeightRecord],
        range: RangeSelector,
        today: NaiveDate,
    ) -> Option<Self> {
        let window = filter_by_range(records, range, today);
        let first = window.first()?.weight;
        let last = window.last()?.weight;

        let weights = window.iter().map(|record| record.weight);
        let sum: f64 = weights.clone().sum();
        let min = weights.clone().fold(f64::INFINITY, f64::min);
        let max = weights.fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            avg: round1(sum / window.len() as f64),
            delta: round1(last - first),
            min: round1(min),
            max: round1(max),
        })
    }
}
