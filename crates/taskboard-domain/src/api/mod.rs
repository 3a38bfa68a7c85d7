//! Types shared with the dashboard's REST boundary (`/api/weights`,
//! `/api/exercises`, `/api/settings`). The task board does not use them; they
//! pin down the contract the list endpoints honour.

pub mod range;
pub mod records;
pub mod stats;

pub use range::{filter_by_range, RangeSelector};
pub use records::{remove, upsert, Dated, ExerciseRecord, NaturalKey, Settings, WeightRecord};
pub use stats::WeightStats;
