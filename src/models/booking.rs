use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Patient {
    pub name: String,
    pub second_name: String,
    pub email: String,
    pub phone: String,
}

/// Booking payload, forwarded to the upstream slot service as-is. No
/// cross-field validation happens here; the upstream is the authority on
/// whether the slot can actually be taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookingRequest {
    pub facility_id: String,
    pub start: String,
    pub end: String,
    pub comments: String,
    pub patient: Patient,
}
