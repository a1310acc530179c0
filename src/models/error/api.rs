use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use eyre::Report;
use thiserror::Error;

use super::{FormError, HorizonError, RecipeError, RepositoryError};
use crate::models::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Internal Server Error: {0}")]
    InternalEyreError(#[from] Report),

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Bad Gateway: {0}")]
    BadGateway(String),
}

impl ApiError {
    /// Message sent to clients, without the status prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::InternalEyreError(report) => report.to_string(),
            ApiError::InternalError(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::BadGateway(msg) => msg.clone(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalEyreError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(self.message()))
    }
}

impl From<FormError> for ApiError {
    fn from(error: FormError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::ConstraintViolation(msg) => ApiError::BadRequest(msg),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl From<HorizonError> for ApiError {
    fn from(error: HorizonError) -> Self {
        match error {
            HorizonError::NetworkConfiguration(_) => ApiError::InternalError(error.to_string()),
            other => ApiError::BadGateway(other.to_string()),
        }
    }
}

impl From<RecipeError> for ApiError {
    fn from(error: RecipeError) -> Self {
        match error {
            RecipeError::Form(_) | RecipeError::Transaction(_) | RecipeError::Precondition(_) => {
                ApiError::BadRequest(error.to_string())
            }
            RecipeError::Horizon(_) | RecipeError::Failed { .. } => {
                ApiError::BadGateway(error.to_string())
            }
            RecipeError::Repository(inner) => ApiError::from(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HorizonError;

    #[test]
    fn test_recipe_error_mapping() {
        let err = ApiError::from(RecipeError::from(FormError::MissingField(
            "assetCode".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(RecipeError::from(HorizonError::SubmissionFailed(
            "tx_failed".to_string(),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

        let err = ApiError::from(RecipeError::from(RepositoryError::Io("disk".to_string())));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_horizon_error_mapping() {
        let err = ApiError::from(HorizonError::Request("timed out".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

        let err = ApiError::from(HorizonError::NetworkConfiguration("bad url".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_has_no_prefix() {
        let err = ApiError::BadRequest("Missing required field: amount".to_string());
        assert_eq!(err.message(), "Missing required field: amount");
        assert_eq!(err.to_string(), "Bad Request: Missing required field: amount");
    }
}
