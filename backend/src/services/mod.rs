//! HTTP services of the donation application.
//!
//! Each sub-module contributes one resource; `configure_routes` mounts them
//! all under a single shared `/api` scope. Actix dispatches to the first
//! service whose prefix matches and never backtracks, so sibling scopes with
//! the same prefix would shadow each other.

pub mod donations;
pub mod receipts;
pub mod staff;

use actix_web::web::scope;
use actix_web::Scope;

const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` holding every API route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(donations::configure_routes())
        .service(staff::configure_routes())
        .service(receipts::configure_routes())
}

#[cfg(test)]
mod tests {
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::graph::GraphClient;

    /// Mirrors the composition in `main.rs`: all API routes plus a default
    /// service standing in for the embedded SPA fallback.
    async fn call(req: test::TestRequest) -> ServiceResponse {
        let config = Config {
            staff_access_code: Some("open-sesame".to_string()),
            ..Default::default()
        };
        let graph = GraphClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            "http://127.0.0.1:9",
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(graph))
                .service(super::configure_routes())
                .default_service(web::route().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body("<!doctype html>")
                })),
        )
        .await;
        app.call(req.to_request()).await.unwrap()
    }

    #[actix_web::test]
    async fn every_api_route_dispatches_to_its_own_handler() {
        let resp = call(
            test::TestRequest::post()
                .uri("/api/verify-staff")
                .set_json(json!({ "code": "open-sesame" })),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true }));

        let resp = call(
            test::TestRequest::post()
                .uri("/api/verify-staff")
                .set_json(json!({ "code": "guess" })),
        )
        .await;
        assert_eq!(resp.status(), 401);

        let resp = call(
            test::TestRequest::post()
                .uri("/api/save-donation")
                .set_json(json!({ "name": "Jane" })),
        )
        .await;
        assert_eq!(resp.status(), 401);

        // The receipt handler answers 200 (PDF) or 503 (fonts missing); the
        // HTML fallback would be a routing failure either way.
        let resp = call(
            test::TestRequest::post()
                .uri("/api/receipts")
                .set_json(json!({ "name": "Jane" })),
        )
        .await;
        assert!(resp.status() == 200 || resp.status() == 503);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(!content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_through_to_the_default_service() {
        let resp = call(test::TestRequest::get().uri("/somewhere/else")).await;
        assert_eq!(resp.status(), 200);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }
}
