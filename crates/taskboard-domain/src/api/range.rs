use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskboard_core::TaskboardError;

use super::records::Dated;

/// The `range` query parameter accepted by every list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeSelector {
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "180d")]
    HalfYear,
    #[serde(rename = "365d")]
    Year,
    #[serde(rename = "all")]
    All,
}

impl RangeSelector {
    pub const ALL: [RangeSelector; 6] = [
        RangeSelector::Week,
        RangeSelector::Month,
        RangeSelector::Quarter,
        RangeSelector::HalfYear,
        RangeSelector::Year,
        RangeSelector::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::HalfYear => "180d",
            Self::Year => "365d",
            Self::All => "all",
        }
    }

    /// Window length in days; `None` for the unbounded range.
    pub fn days(self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::HalfYear => Some(180),
            Self::Year => Some(365),
            Self::All => None,
        }
    }

    /// First day inside the window. The window includes `today`, so a 7-day
    /// range starts six days earlier.
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| today - Duration::days(days - 1))
    }

    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        self.start(today).map_or(true, |start| date >= start)
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelector {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == s.trim())
            .ok_or_else(|| {
                TaskboardError::Validation(format!(
                    "Invalid range '{}'. Valid values: 7d, 30d, 90d, 180d, 365d, all",
                    s
                ))
            })
    }
}

/// Records inside the window, ordered by date. Ties keep their input order.
pub fn filter_by_range<R: Dated + Clone>(
    records: &[R],
    range: RangeSelector,
    today: NaiveDate,
) -> Vec<R> {
    let mut selected: Vec<R> = records
        .iter()
        .filter(|record| range.contains(record.date(), today))
        .cloned()
        .collect();
    selected.sort_by_key(|record| record.date());
    selected
}
