use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::account::errors::AccountError;
use crate::account::validation::FieldError;

pub mod create_user;
pub mod login;
pub mod update_password;

pub const USERNAME_TAKEN_MESSAGE: &str = "Sorry, a user with this username already exists!";
pub const LOGIN_FAILED_MESSAGE: &str = "Please, login with correct credentials";
pub const RETRY_CREDENTIALS_MESSAGE: &str = "Please, try again with correct credentials";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something Went Wrong!";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Detail is logged, never sent.
    InternalServerError(String),
    BadRequest(String),
    ValidationFailed(Vec<FieldErrorData>),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorBody::message(INTERNAL_ERROR_MESSAGE.to_string())),
                )
                    .into_response()
            }
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ApiErrorBody::message(message))).into_response()
            }
            ApiError::ValidationFailed(errors) => {
                (StatusCode::BAD_REQUEST, Json(ApiErrorBody::fields(errors))).into_response()
            }
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, Json(ApiErrorBody::message(message))).into_response()
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::ValidationFailed(errors) => {
                ApiError::ValidationFailed(errors.iter().map(FieldErrorData::from).collect())
            }
            AccountError::UsernameTaken(_) => {
                ApiError::BadRequest(USERNAME_TAKEN_MESSAGE.to_string())
            }
            AccountError::InvalidCredentials => {
                ApiError::BadRequest(LOGIN_FAILED_MESSAGE.to_string())
            }
            AccountError::IdentityMismatch(_) => {
                ApiError::BadRequest(RETRY_CREDENTIALS_MESSAGE.to_string())
            }
            AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::DatabaseError(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// `{"success": true, ...data}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    success: bool,
    #[serde(flatten)]
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{"success": false, "error": ...}` or `{"success": false, "errors": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldErrorData>>,
}

impl ApiErrorBody {
    pub fn message(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
            errors: None,
        }
    }

    pub fn fields(errors: Vec<FieldErrorData>) -> Self {
        Self {
            success: false,
            error: None,
            errors: Some(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorData {
    pub field: String,
    pub message: String,
}

impl From<&FieldError> for FieldErrorData {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            message: error.message.clone(),
        }
    }
}

/// JSON body extractor whose rejection uses the API error shape.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {}", e.body_text())))?;

        Ok(JsonBody(value))
    }
}
