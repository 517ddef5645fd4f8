use chrono::NaiveDate;
use serde::Serialize;

/// One day of bookable slot starts, formatted `yyyy-MM-dd HH:mm:ss` in the
/// facility's local wall-clock time. Insertion order is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DaySlots {
    pub day: String,
    pub available_time_slots: Vec<String>,
}

impl DaySlots {
    pub fn new(day: impl Into<String>, available_time_slots: Vec<String>) -> Self {
        DaySlots {
            day: day.into(),
            available_time_slots,
        }
    }
}

/// Computed availability for one requested week, one entry per day present
/// in the upstream document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeekSlots {
    pub facility_id: String,
    pub date: NaiveDate,
    pub days: Vec<DaySlots>,
}
