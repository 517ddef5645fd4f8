use actix_web::{HttpRequest, HttpResponse, post, web};
use serde_json::json;

use crate::error::AppError;
use crate::handlers::booking::take_slot;
use crate::models::booking::BookingRequest;
use crate::routes::auth_header;
use crate::upstream::client::SlotServiceClient;

#[post("")]
async fn book_slot(
    req: HttpRequest,
    body: web::Json<BookingRequest>,
    client: web::Data<SlotServiceClient>,
) -> Result<HttpResponse, AppError> {
    let auth = auth_header(&req)?;

    if take_slot(&client, &body, &auth).await? {
        Ok(HttpResponse::Ok().json(json!({ "message": "Slot taken successfully." })))
    } else {
        Ok(HttpResponse::BadRequest().json(json!({ "message": "Failed to take the slot." })))
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(book_slot);
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;
    use url::Url;

    use crate::routes;
    use crate::upstream::client::SlotServiceClient;

    fn client() -> web::Data<SlotServiceClient> {
        web::Data::new(SlotServiceClient::new(
            Url::parse("http://localhost:1/api/availability").unwrap(),
        ))
    }

    #[actix_web::test]
    async fn rejects_missing_authorization() {
        let app =
            test::init_service(App::new().app_data(client()).configure(routes::init)).await;

        let req = test::TestRequest::post()
            .uri("/api/bookings")
            .set_json(json!({
                "FacilityId": "f-1",
                "Start": "2024-03-11 10:00:00",
                "End": "2024-03-11 11:00:00",
                "Comments": "",
                "Patient": {
                    "Name": "Jane",
                    "SecondName": "Doe",
                    "Email": "jane@example.com",
                    "Phone": "555 0100"
                }
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
