use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::account::models::RegisterCommand;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    state
        .account_service
        .register(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreateUserResponseData {
                    info: "Account Created Successfully!!".to_string(),
                },
            )
        })
}

/// HTTP request body for creating an account (raw JSON).
///
/// Absent fields deserialize as empty and are reported by validation.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl CreateUserRequest {
    fn into_command(self) -> RegisterCommand {
        RegisterCommand::new(self.name, self.username, self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub info: String,
}
