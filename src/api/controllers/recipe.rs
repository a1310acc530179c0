//! # Recipes Controller
//!
//! Runs one recipe per request against the selected network and answers with
//! its status report. Failed runs still carry the report, so callers see the
//! `Error: ...` line.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::info;

use super::selected_horizon;
use crate::{
    domain::{
        clawback_asset, freeze_asset, issue_asset, report_outcome, sponsor_operation,
        RecipeContext, RecipeFailure, RecipeOutcome,
    },
    models::{ApiError, ApiResponse, AppState, FormData},
};

fn recipe_response(recipe: &str, result: Result<RecipeOutcome, RecipeFailure>) -> HttpResponse {
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(failure) => ApiError::from(failure.error.clone()).status_code(),
    };
    let report = report_outcome(recipe, result);

    if status.is_success() {
        HttpResponse::Ok().json(ApiResponse::success(report))
    } else {
        let message = report.status.message.clone();
        HttpResponse::build(status).json(ApiResponse::failure(report, message))
    }
}

pub async fn asset_issuance(form: FormData, state: &AppState) -> Result<HttpResponse, ApiError> {
    let (network, client) = selected_horizon(state).await?;
    info!("Running asset issuance on {}", network.name);
    let ctx = RecipeContext::new(&client, &network);
    let result = issue_asset(&ctx, &state.asset_repository, &form).await;
    Ok(recipe_response("asset issuance", result))
}

pub async fn clawback(form: FormData, state: &AppState) -> Result<HttpResponse, ApiError> {
    let (network, client) = selected_horizon(state).await?;
    info!("Running clawback on {}", network.name);
    let ctx = RecipeContext::new(&client, &network);
    let result = clawback_asset(&ctx, &form).await.map_err(RecipeFailure::from);
    Ok(recipe_response("clawback", result))
}

pub async fn freeze(form: FormData, state: &AppState) -> Result<HttpResponse, ApiError> {
    let (network, client) = selected_horizon(state).await?;
    info!("Running freeze on {}", network.name);
    let ctx = RecipeContext::new(&client, &network);
    let result = freeze_asset(&ctx, &form).await.map_err(RecipeFailure::from);
    Ok(recipe_response("freeze", result))
}

pub async fn sponsoring(form: FormData, state: &AppState) -> Result<HttpResponse, ApiError> {
    let (network, client) = selected_horizon(state).await?;
    info!("Running sponsoring on {}", network.name);
    let ctx = RecipeContext::new(&client, &network);
    let result = sponsor_operation(&ctx, &form).await.map_err(RecipeFailure::from);
    Ok(recipe_response("sponsoring", result))
}
