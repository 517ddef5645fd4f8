use actix_web::{HttpRequest, HttpResponse, get, web};
use chrono::NaiveDate;
use serde_json::json;

use crate::error::AppError;
use crate::handlers::availability::get_week_slots;
use crate::routes::auth_header;
use crate::upstream::client::SlotServiceClient;

#[get("/{date}")]
async fn week_availability(
    req: HttpRequest,
    path: web::Path<String>,
    client: web::Data<SlotServiceClient>,
) -> Result<HttpResponse, AppError> {
    let Ok(date) = NaiveDate::parse_from_str(&path.into_inner(), "%Y%m%d") else {
        return Ok(HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid date format. Please use yyyyMMdd." })));
    };

    let auth = auth_header(&req)?;
    let week = get_week_slots(&client, date, &auth).await?;

    Ok(HttpResponse::Ok().json(week))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(week_availability);
}
