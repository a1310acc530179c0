//! # Operations Controller
//!
//! Builds a single operation from form fields without touching the network.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{operation_to_base64, OperationKind},
    models::{ApiError, ApiResponse, FormData},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationPreview {
    pub operation: OperationKind,
    /// Base64 XDR of the operation.
    pub xdr: String,
}

pub async fn list_operations() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(OperationKind::ALL.to_vec())))
}

pub async fn build_operation(kind: String, form: FormData) -> Result<HttpResponse, ApiError> {
    let kind: OperationKind = kind.parse()?;
    let operation = kind.build(&form)?;
    let xdr = operation_to_base64(&operation).map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(OperationPreview {
        operation: kind,
        xdr,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mocks::mockutils::TEST_PUBLIC_KEY;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_build_operation() {
        let form = FormData::new().with("sponsoredAccount", TEST_PUBLIC_KEY);
        let response = build_operation("begin-sponsoring".to_string(), form)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unknown_operation() {
        let err = build_operation("inflation".to_string(), FormData::new())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Unknown operation type: inflation");
    }

    #[actix_web::test]
    async fn test_missing_field() {
        let err = build_operation("payment".to_string(), FormData::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
