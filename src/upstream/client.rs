use chrono::NaiveDate;
use reqwest::StatusCode;
use tracing::{error, info, warn};
use url::Url;

use crate::error::AppError;
use crate::models::availability::WeekAvailability;
use crate::models::booking::BookingRequest;

// The upstream flags a non-Monday week anchor with this phrase in a 400 body.
const MONDAY_HINT: &str = "datetime must be a Monday";

/// HTTP client for the upstream slot service. One attempt per logical
/// operation, no retry; timeouts are left to the transport. The inbound
/// caller's `Authorization` header is forwarded unchanged on every call.
pub struct SlotServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl SlotServiceClient {
    pub fn new(base_url: Url) -> Self {
        SlotServiceClient {
            http: reqwest::Client::new(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the weekly availability document for `date` (sent as
    /// `yyyyMMdd`). Returns `Ok(None)` when the upstream has nothing for
    /// that week; that is data absence, not a failure.
    pub async fn fetch_week_availability(
        &self,
        date: NaiveDate,
        auth_header: &str,
    ) -> Result<Option<WeekAvailability>, AppError> {
        let url = format!("{}/GetWeeklyAvailability/{}", self.base_url, date.format("%Y%m%d"));
        info!(%url, %date, "fetching weekly availability");

        let response = self
            .http
            .get(&url)
            .header("Authorization", auth_header)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(%date, "upstream has no availability for this week");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_upstream_status(status, &body));
        }

        let body = response.text().await.map_err(transport_error)?;
        if body.trim().is_empty() {
            warn!(%date, "upstream returned an empty availability body");
            return Ok(None);
        }

        let week = serde_json::from_str::<WeekAvailability>(&body).map_err(|err| {
            error!(error = %err, "availability body did not match the expected shape");
            AppError::MalformedResponse("Invalid JSON response format.".to_string())
        })?;

        info!(%date, days = week.days.len(), "weekly availability retrieved");
        Ok(Some(week))
    }

    /// Submits a booking. `true` only on an explicit 200 from the upstream;
    /// any other success status means the slot was not confirmed.
    pub async fn take_slot(
        &self,
        request: &BookingRequest,
        auth_header: &str,
    ) -> Result<bool, AppError> {
        let url = format!("{}/TakeSlot", self.base_url);
        info!(%url, facility_id = %request.facility_id, start = %request.start, "taking slot");

        let response = self
            .http
            .post(&url)
            .header("Authorization", auth_header)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::OK {
            info!(start = %request.start, "slot taken");
            return Ok(true);
        }
        if status.is_success() {
            warn!(%status, "upstream did not confirm the booking");
            return Ok(false);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_upstream_status(status, &body))
    }
}

/// Sole translation point from upstream HTTP statuses into the caller-facing
/// failure taxonomy.
fn map_upstream_status(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::BAD_REQUEST if body.contains(MONDAY_HINT) => {
            error!("upstream rejected the week anchor: not a Monday");
            AppError::BadUpstreamRequest("Datetime must be a Monday.".to_string())
        }
        StatusCode::BAD_REQUEST => {
            error!("upstream rejected the request");
            AppError::BadUpstreamRequest("Bad Request: The request was invalid.".to_string())
        }
        StatusCode::UNAUTHORIZED => {
            error!("upstream rejected the credentials");
            AppError::Unauthorized("Unauthorized: Authentication failed.".to_string())
        }
        StatusCode::NOT_FOUND => {
            error!("upstream resource not found");
            AppError::UpstreamNotFound(
                "Not Found: The requested resource could not be found.".to_string(),
            )
        }
        StatusCode::INTERNAL_SERVER_ERROR => {
            error!("upstream reported a server error");
            AppError::UpstreamServerError(
                "Internal Server Error: There was a problem with the server.".to_string(),
            )
        }
        other => {
            error!(status = %other, "unexpected upstream status");
            AppError::Unexpected("An unexpected error occurred.".to_string())
        }
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    error!(error = %err, "upstream request failed");
    AppError::Unexpected("An unexpected error occurred.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses_to_the_taxonomy() {
        assert!(matches!(
            map_upstream_status(StatusCode::UNAUTHORIZED, ""),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            map_upstream_status(StatusCode::BAD_REQUEST, ""),
            AppError::BadUpstreamRequest(_)
        ));
        assert!(matches!(
            map_upstream_status(StatusCode::NOT_FOUND, ""),
            AppError::UpstreamNotFound(_)
        ));
        assert!(matches!(
            map_upstream_status(StatusCode::INTERNAL_SERVER_ERROR, ""),
            AppError::UpstreamServerError(_)
        ));
        assert!(matches!(
            map_upstream_status(StatusCode::BAD_GATEWAY, ""),
            AppError::Unexpected(_)
        ));
    }

    #[test]
    fn non_monday_anchor_maps_to_the_specific_message() {
        let body = r#"{"error":"datetime must be a Monday"}"#;
        let error = map_upstream_status(StatusCode::BAD_REQUEST, body);

        assert_eq!(error.to_string(), "Datetime must be a Monday.");
        assert!(matches!(error, AppError::BadUpstreamRequest(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = SlotServiceClient::new(
            Url::parse("https://upstream.test/api/availability/").unwrap(),
        );
        assert_eq!(client.base_url, "https://upstream.test/api/availability");
    }
}
