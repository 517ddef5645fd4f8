pub mod availability;
pub mod booking;
pub mod health;

use actix_web::http::header;
use actix_web::{HttpRequest, web};

use crate::error::AppError;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .service(web::scope("/api/availability").configure(availability::init))
        .service(web::scope("/api/bookings").configure(booking::init));
}

/// Pulls the caller's `Authorization` header for pass-through to the
/// upstream. The value is opaque here; the upstream validates it.
pub(crate) fn auth_header(req: &HttpRequest) -> Result<String, AppError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| {
            AppError::Unauthorized("Authorization header is missing or invalid.".to_string())
        })
}
