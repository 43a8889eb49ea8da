use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use super::RETRY_CREDENTIALS_MESSAGE;
use crate::account::errors::AccountError;
use crate::account::models::ChangePasswordCommand;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn update_password(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedAccount>,
    JsonBody(body): JsonBody<UpdatePasswordRequest>,
) -> Result<ApiSuccess<UpdatePasswordResponseData>, ApiError> {
    let command = ChangePasswordCommand::new(body.username, body.oldpassword, body.newpassword);

    state
        .account_service
        .change_password(&authenticated.account_id, command)
        .await
        .map_err(|e| match e {
            AccountError::InvalidCredentials => {
                ApiError::BadRequest(RETRY_CREDENTIALS_MESSAGE.to_string())
            }
            _ => ApiError::from(e),
        })
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdatePasswordResponseData {
                    info: "Password updated successfully".to_string(),
                },
            )
        })
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    oldpassword: String,
    #[serde(default)]
    newpassword: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePasswordResponseData {
    pub info: String,
}
