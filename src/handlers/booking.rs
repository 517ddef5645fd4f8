use tracing::info;

use crate::error::AppError;
use crate::models::booking::BookingRequest;
use crate::upstream::client::SlotServiceClient;

/// Forwards a booking to the upstream slot service. Booking state lives
/// entirely upstream; the result is whatever the upstream reported.
pub async fn take_slot(
    client: &SlotServiceClient,
    request: &BookingRequest,
    auth_header: &str,
) -> Result<bool, AppError> {
    info!(facility_id = %request.facility_id, start = %request.start, "attempting to take slot");

    client.take_slot(request, auth_header).await
}
