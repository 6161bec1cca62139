//! # Schema Service Module
//!
//! HTTP surface over the shared schema generator in `common::schema`.
//!
//! ## Sub-modules:
//! - `generate`: renders Yup schema text for a posted field list.
//! - `default`: serves the schema shown before the first build.

mod default;
mod generate;

use actix_web::error::InternalError;
use actix_web::web::{get, post, scope, JsonConfig};
use actix_web::{HttpResponse, Scope};
use log::warn;
use serde_json::json;

/// The base path for all schema-related API endpoints.
const API_PATH: &str = "/api/schemas";

/// Largest accepted request body, in bytes.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Configures and returns the Actix `Scope` for the schema routes.
///
/// # Registered Routes:
///
/// *   **`POST /generate`**: expects `{"fields": [...]}` and answers with the
///     generated schema as `text/plain`.
/// *   **`GET /default`**: answers with the placeholder schema as `text/plain`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/generate", post().to(generate::process))
        .route("/default", get().to(default::process))
}

/// JSON extractor settings for the schema routes.
///
/// Malformed or oversized bodies are answered with `400 Bad Request` and a
/// `{"error": "..."}` payload instead of actix's plain-text default.
pub fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_BODY_SIZE)
        .error_handler(|err, req| {
            warn!("Rejected body on {}: {}", req.path(), err);
            let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
            InternalError::from_response(err, response).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::schema::DEFAULT_SCHEMA;
    use serde_json::Value;

    macro_rules! schema_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(json_config())
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generate_returns_schema_text() {
        let app = schema_app!();
        let req = test::TestRequest::post()
            .uri("/api/schemas/generate")
            .set_json(json!({
                "fields": [{
                    "name": "email",
                    "kind": { "type": "string" },
                    "required": true,
                    "nullable": false,
                    "customMessage": ""
                }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("import * as Yup from 'yup';"));
        assert!(text.contains("  email: Yup.string().required(\"email is required\"),\n"));
    }

    #[actix_web::test]
    async fn generate_with_no_fields_yields_empty_object() {
        let app = schema_app!();
        let req = test::TestRequest::post()
            .uri("/api/schemas/generate")
            .set_json(json!({}))
            .to_request();

        let body = test::call_and_read_body(&app, req).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text, common::schema::generate(&[]));
    }

    #[actix_web::test]
    async fn malformed_body_is_a_json_bad_request() {
        let app = schema_app!();
        let req = test::TestRequest::post()
            .uri("/api/schemas/generate")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{\"fields\": [")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[actix_web::test]
    async fn default_serves_placeholder() {
        let app = schema_app!();
        let req = test::TestRequest::get()
            .uri("/api/schemas/default")
            .to_request();

        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, DEFAULT_SCHEMA.as_bytes());
    }
}
