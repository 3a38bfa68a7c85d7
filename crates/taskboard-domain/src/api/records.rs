use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};

pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;
pub const MAX_DURATION_MIN: u32 = 1440;

pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Key that identifies a record for create-or-update.
pub trait NaturalKey {
    type Key: Ord + Clone;

    fn natural_key(&self) -> Self::Key;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub date: NaiveDate,
    pub weight: f64,
}

impl WeightRecord {
    /// Weight in kilograms, rounded to one decimal.
    pub fn new(date: NaiveDate, weight: f64) -> TaskboardResult<Self> {
        Ok(Self {
            date,
            weight: validate_weight(weight)?,
        })
    }
}

impl Dated for WeightRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl NaturalKey for WeightRecord {
    type Key = NaiveDate;

    fn natural_key(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub date: NaiveDate,
    pub activity: String,
    pub duration_min: u32,
}

impl ExerciseRecord {
    pub fn new(date: NaiveDate, activity: &str, duration_min: u32) -> TaskboardResult<Self> {
        let activity = activity.trim();
        if activity.is_empty() {
            return Err(TaskboardError::Validation(
                "Activity name cannot be empty".to_string(),
            ));
        }
        if duration_min > MAX_DURATION_MIN {
            return Err(TaskboardError::Validation(format!(
                "Duration must be between 0 and {} minutes, got {}",
                MAX_DURATION_MIN, duration_min
            )));
        }
        Ok(Self {
            date,
            activity: activity.to_string(),
            duration_min,
        })
    }
}

impl Dated for ExerciseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl NaturalKey for ExerciseRecord {
    type Key = (NaiveDate, String);

    fn natural_key(&self) -> Self::Key {
        (self.date, self.activity.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub goal_weight: Option<f64>,
}

impl Settings {
    pub fn with_goal_weight(goal_weight: f64) -> TaskboardResult<Self> {
        Ok(Self {
            goal_weight: Some(validate_weight(goal_weight)?),
        })
    }
}

/// Rounds to one decimal, then checks the range on the rounded value.
fn validate_weight(weight: f64) -> TaskboardResult<f64> {
    let rounded = round1(weight);
    if !rounded.is_finite() || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&rounded) {
        return Err(TaskboardError::Validation(format!(
            "Weight must be between {:.1} and {:.1} kg, got {}",
            MIN_WEIGHT_KG, MAX_WEIGHT_KG, weight
        )));
    }
    Ok(rounded)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Insert `record`, replacing any record with the same natural key. The
/// collection stays sorted by natural key.
pub fn upsert<R: NaturalKey>(records: &mut Vec<R>, record: R) {
    let key = record.natural_key();
    records.retain(|existing| existing.natural_key() != key);
    let at = records.partition_point(|existing| existing.natural_key() < key);
    records.insert(at, record);
}

/// Delete the record with `key`. Returns whether anything was removed.
pub fn remove<R: NaturalKey>(records: &mut Vec<R>, key: &R::Key) -> bool {
    let before = records.len();
    records.retain(|existing| &existing.natural_key() != key);
    records.len() != before
}
