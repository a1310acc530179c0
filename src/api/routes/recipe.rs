//! This module defines the HTTP routes for recipe runs.
//! Every route takes the recipe's form fields as a flat JSON object or as an
//! urlencoded form.

use std::collections::HashMap;

use crate::{
    api::controllers::recipe,
    models::{AppState, FormData},
};
use actix_web::{post, web, Either, Responder};

pub(crate) type FormBody = Either<web::Json<FormData>, web::Form<HashMap<String, String>>>;

pub(crate) fn into_form_data(body: FormBody) -> FormData {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => FormData::from(form.into_inner()),
    }
}

#[post("/recipes/asset-issuance")]
async fn asset_issuance(form: FormBody, data: web::ThinData<AppState>) -> impl Responder {
    recipe::asset_issuance(into_form_data(form), &data.0).await
}

#[post("/recipes/clawback")]
async fn clawback(form: FormBody, data: web::ThinData<AppState>) -> impl Responder {
    recipe::clawback(into_form_data(form), &data.0).await
}

#[post("/recipes/freeze")]
async fn freeze(form: FormBody, data: web::ThinData<AppState>) -> impl Responder {
    recipe::freeze(into_form_data(form), &data.0).await
}

#[post("/recipes/sponsoring")]
async fn sponsoring(form: FormBody, data: web::ThinData<AppState>) -> impl Responder {
    recipe::sponsoring(into_form_data(form), &data.0).await
}

/// Configures the recipe routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(asset_issuance)
        .service(clawback)
        .service(freeze)
        .service(sponsoring);
}
