//! This module defines the HTTP routes for single operation dry runs.

use super::recipe::{into_form_data, FormBody};
use crate::api::controllers::operation;
use actix_web::{get, post, web, Responder};

/// Lists the operation names accepted by `POST /operations/{kind}`.
#[get("/operations")]
async fn list_operations() -> impl Responder {
    operation::list_operations().await
}

/// Builds one operation and returns its base64 XDR.
#[post("/operations/{kind}")]
async fn build_operation(kind: web::Path<String>, form: FormBody) -> impl Responder {
    operation::build_operation(kind.into_inner(), into_form_data(form)).await
}

/// Configures the operation routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_operations).service(build_operation);
}
