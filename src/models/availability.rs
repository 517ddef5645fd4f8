use chrono::{NaiveDateTime, Weekday};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Facility {
    // Older upstream deployments omit the id.
    #[serde(rename = "FacilityId", default)]
    pub facility_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
}

/// Daily open/close hours and lunch window. Values come straight off the
/// wire and are not validated upstream; slot generation treats degenerate
/// periods as "closed for the day".
#[derive(Debug, Clone, Deserialize)]
pub struct WorkPeriod {
    #[serde(rename = "StartHour")]
    pub start_hour: i32,
    #[serde(rename = "EndHour")]
    pub end_hour: i32,
    #[serde(rename = "LunchStartHour")]
    pub lunch_start_hour: i32,
    #[serde(rename = "LunchEndHour")]
    pub lunch_end_hour: i32,
}

/// A half-open `[start, end)` span already booked upstream. Either endpoint
/// may be null, in which case the interval excludes nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct BusyInterval {
    #[serde(rename = "Start")]
    pub start: Option<NaiveDateTime>,
    #[serde(rename = "End")]
    pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayAvailability {
    #[serde(rename = "WorkPeriod")]
    pub work_period: WorkPeriod,
    #[serde(rename = "BusySlots")]
    pub busy_slots: Option<Vec<BusyInterval>>,
}

/// Weekly availability document as reported by the slot service.
///
/// The upstream JSON mixes fixed fields with dynamic day-name keys at the
/// top level, so this decodes in two passes: pull out the known fields,
/// then keep every remaining key that names a day of the week. Anything
/// else is ignored. Day entries preserve document order.
#[derive(Debug, Clone)]
pub struct WeekAvailability {
    pub facility: Facility,
    pub slot_duration_minutes: i64,
    pub days: Vec<(Weekday, DayAvailability)>,
}

impl<'de> Deserialize<'de> for WeekAvailability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let mut doc = Map::<String, Value>::deserialize(deserializer)?;

        // shift_remove keeps the remaining keys in document order; a plain
        // remove would swap the last key into the gap and reorder the days.
        let facility = doc
            .shift_remove("Facility")
            .ok_or_else(|| D::Error::missing_field("Facility"))?;
        let facility: Facility = serde_json::from_value(facility).map_err(D::Error::custom)?;

        let duration = doc
            .shift_remove("SlotDurationMinutes")
            .ok_or_else(|| D::Error::missing_field("SlotDurationMinutes"))?;
        let slot_duration_minutes: i64 =
            serde_json::from_value(duration).map_err(D::Error::custom)?;

        let mut days = Vec::new();
        for (key, value) in doc {
            let Ok(day) = key.parse::<Weekday>() else {
                continue;
            };
            let availability: DayAvailability =
                serde_json::from_value(value).map_err(D::Error::custom)?;
            days.push((day, availability));
        }

        Ok(WeekAvailability {
            facility,
            slot_duration_minutes,
            days,
        })
    }
}
