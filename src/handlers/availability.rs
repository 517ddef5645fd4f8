use chrono::NaiveDate;
use tracing::info;

use crate::error::AppError;
use crate::models::availability::WeekAvailability;
use crate::models::slots::WeekSlots;
use crate::slots;
use crate::upstream::client::SlotServiceClient;

/// Fetches the week's availability document and computes the bookable
/// slots. An absent document surfaces as "not found" for the whole week;
/// the transformer is never run in that case.
pub async fn get_week_slots(
    client: &SlotServiceClient,
    date: NaiveDate,
    auth_header: &str,
) -> Result<WeekSlots, AppError> {
    info!(%date, "fetching weekly available slots");

    let week = client.fetch_week_availability(date, auth_header).await?;
    week_slots_response(date, week)
}

fn week_slots_response(
    date: NaiveDate,
    week: Option<WeekAvailability>,
) -> Result<WeekSlots, AppError> {
    match week {
        Some(week) => {
            let result = slots::compute_week_slots(date, &week);
            info!(%date, days = result.days.len(), "weekly slots computed");
            Ok(result)
        }
        None => Err(AppError::UpstreamNotFound(
            "No available slots found for the given week.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::availability::{DayAvailability, Facility, WorkPeriod};
    use chrono::Weekday;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    }

    #[test]
    fn absent_document_becomes_not_found() {
        let result = week_slots_response(monday(), None);

        let error = result.unwrap_err();
        assert!(matches!(error, AppError::UpstreamNotFound(_)));
        assert_eq!(error.to_string(), "No available slots found for the given week.");
    }

    #[test]
    fn present_document_is_transformed() {
        let week = WeekAvailability {
            facility: Facility {
                facility_id: "f-1".to_string(),
                name: "Facility Example".to_string(),
                address: "Somewhere 1".to_string(),
            },
            slot_duration_minutes: 60,
            days: vec![(
                Weekday::Mon,
                DayAvailability {
                    work_period: WorkPeriod {
                        start_hour: 9,
                        end_hour: 11,
                        lunch_start_hour: 0,
                        lunch_end_hour: 0,
                    },
                    busy_slots: None,
                },
            )],
        };

        let result = week_slots_response(monday(), Some(week)).unwrap();
        assert_eq!(result.days.len(), 1);
        assert_eq!(
            result.days[0].available_time_slots,
            vec!["2024-03-11 09:00:00", "2024-03-11 10:00:00"]
        );
    }
}
