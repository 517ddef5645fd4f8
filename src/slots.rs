use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use tracing::warn;

use crate::models::availability::{DayAvailability, WeekAvailability, WorkPeriod};
use crate::models::slots::{DaySlots, WeekSlots};

const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns an upstream weekly-availability document into concrete bookable
/// slot starts, one `DaySlots` per day entry, in document order.
///
/// The anchor date is expected to be the Monday that begins the queried
/// week (the upstream rejects anything else at fetch time). Each day entry
/// resolves to `anchor + (days-from-Sunday - 1)`, which maps a Monday
/// anchor plus "Tuesday" to the next calendar day.
///
/// Malformed per-day data never fails the whole week: a non-positive slot
/// duration or a degenerate work period just yields an empty list for that
/// day, since the upstream legitimately reports closed days that way.
pub fn compute_week_slots(anchor: NaiveDate, week: &WeekAvailability) -> WeekSlots {
    let days = week
        .days
        .iter()
        .map(|(day, availability)| {
            day_slots(anchor, *day, availability, week.slot_duration_minutes)
        })
        .collect();

    WeekSlots {
        facility_id: week.facility.facility_id.clone(),
        date: anchor,
        days,
    }
}

fn day_slots(
    anchor: NaiveDate,
    day: Weekday,
    availability: &DayAvailability,
    slot_duration_minutes: i64,
) -> DaySlots {
    let offset = day.num_days_from_sunday() as i64 - 1;
    let date = anchor + Duration::days(offset);

    let slots = generate_candidates(date, &availability.work_period, slot_duration_minutes)
        .into_iter()
        .filter(|slot| !in_lunch_break(*slot, &availability.work_period))
        .filter(|slot| !is_busy(*slot, availability))
        .map(|slot| slot.format(SLOT_FORMAT).to_string())
        .collect();

    DaySlots::new(day_name(day), slots)
}

/// Candidate starts from `start_hour:00:00`, stepping by the slot duration,
/// strictly before `end_hour:00:00`. Midnight wraparound is not a thing
/// here: an end hour at or before the start hour is simply an invalid
/// period and produces nothing.
fn generate_candidates(
    date: NaiveDate,
    period: &WorkPeriod,
    slot_duration_minutes: i64,
) -> Vec<NaiveDateTime> {
    if slot_duration_minutes <= 0 {
        warn!(slot_duration_minutes, "invalid slot duration, no slots generated");
        return Vec::new();
    }
    if !is_valid_work_period(period) {
        return Vec::new();
    }

    let Some(start) = date.and_hms_opt(period.start_hour as u32, 0, 0) else {
        warn!(start_hour = period.start_hour, "work period start is not a valid hour");
        return Vec::new();
    };
    let Some(end) = date.and_hms_opt(period.end_hour as u32, 0, 0) else {
        warn!(end_hour = period.end_hour, "work period end is not a valid hour");
        return Vec::new();
    };

    let mut candidates = Vec::new();
    let mut current = start;
    while current < end {
        candidates.push(current);
        current += Duration::minutes(slot_duration_minutes);
    }
    candidates
}

fn is_valid_work_period(period: &WorkPeriod) -> bool {
    if period.start_hour < 0 || period.end_hour < 0 {
        warn!(
            start_hour = period.start_hour,
            end_hour = period.end_hour,
            "work period has negative hours"
        );
        return false;
    }
    if period.start_hour >= period.end_hour {
        warn!(
            start_hour = period.start_hour,
            end_hour = period.end_hour,
            "work period start is not before its end"
        );
        return false;
    }
    true
}

// Lunch is matched on the hour of day, half-open: a slot at lunch start is
// out, a slot at lunch end is back in.
fn in_lunch_break(slot: NaiveDateTime, period: &WorkPeriod) -> bool {
    let hour = slot.hour() as i32;
    hour >= period.lunch_start_hour && hour < period.lunch_end_hour
}

// Busy intervals are half-open `[start, end)` against the slot start. A
// null endpoint excludes nothing. Overlapping intervals need no merging;
// any single match drops the candidate.
fn is_busy(slot: NaiveDateTime, availability: &DayAvailability) -> bool {
    let Some(busy) = &availability.busy_slots else {
        return false;
    };
    busy.iter().any(|interval| match (interval.start, interval.end) {
        (Some(start), Some(end)) => slot >= start && slot < end,
        _ => false,
    })
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
