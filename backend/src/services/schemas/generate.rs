//! Handler for `POST /api/schemas/generate`.
//!
//! The body is deserialized straight into the shared request type, so field
//! records use the same camelCase JSON the browser keeps in memory.

use actix_web::{web, HttpResponse, Responder};
use common::requests::GenerateSchemaRequest;
use common::schema::generate;
use log::debug;

pub async fn process(request: web::Json<GenerateSchemaRequest>) -> impl Responder {
    let request = request.into_inner();
    debug!("Generating schema for {} field(s)", request.fields.len());

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(generate(&request.fields))
}
