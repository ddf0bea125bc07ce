//! # Staff Verification Service
//!
//! `POST /api/verify-staff` compares a submitted access code against the
//! configured `STAFF_ACCESS_CODE`. A match unlocks the staff-only mode in the
//! client UI; this is a UI gate, not an authentication system. There is no
//! lockout, no rate limiting and no session issuance.

use actix_web::{web, HttpResponse, Responder};
use common::requests::VerifyStaffRequest;
use log::error;
use serde_json::json;

use crate::config::Config;

pub async fn process(
    config: web::Data<Config>,
    payload: web::Json<VerifyStaffRequest>,
) -> impl Responder {
    if payload.code.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Code is required" }));
    }

    let Some(staff_code) = &config.staff_access_code else {
        error!("Staff access code not configured");
        return HttpResponse::InternalServerError()
            .json(json!({ "error": "Server configuration error" }));
    };

    if payload.code == *staff_code {
        HttpResponse::Ok().json(json!({ "success": true }))
    } else {
        HttpResponse::Unauthorized().json(json!({ "error": "Invalid access code" }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::config::Config;

    async fn call(staff_code: Option<&str>, body: Value) -> ServiceResponse {
        let config = Config {
            staff_access_code: staff_code.map(str::to_string),
            ..Default::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(crate::services::configure_routes()),
        )
        .await;
        app.call(
            test::TestRequest::post()
                .uri("/api/verify-staff")
                .set_json(body)
                .to_request(),
        )
        .await
        .unwrap()
    }

    #[actix_web::test]
    async fn matching_code_succeeds() {
        let resp = call(Some("open-sesame"), json!({ "code": "open-sesame" })).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));
    }

    #[actix_web::test]
    async fn wrong_code_is_401() {
        let resp = call(Some("open-sesame"), json!({ "code": "guess" })).await;
        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Invalid access code"));
    }

    #[actix_web::test]
    async fn empty_code_is_400() {
        let resp = call(Some("open-sesame"), json!({ "code": "" })).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn missing_code_field_is_400() {
        let resp = call(Some("open-sesame"), json!({})).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn unconfigured_secret_is_500_even_with_a_code() {
        let resp = call(None, json!({ "code": "anything" })).await;
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Server configuration error"));
    }
}
