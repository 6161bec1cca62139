use actix_web::{HttpResponse, Responder};
use common::schema::DEFAULT_SCHEMA;

/// Handler for `GET /api/schemas/default`.
pub async fn process() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(DEFAULT_SCHEMA)
}
