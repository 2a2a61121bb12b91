//! User handlers
//!
//! Endpoints for registering users and looking them up by ID.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::AppError;
use crate::AppState;

/// Success envelope: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Validated registration body
#[derive(Debug, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

impl RegisterRequest {
    /// Both fields must be present, be JSON strings and be non-empty.
    /// A body that failed to parse as JSON is treated as missing both.
    pub fn from_payload(payload: Result<Json<Value>, JsonRejection>) -> Result<Self, AppError> {
        let Json(body) = payload.map_err(|rejection| {
            tracing::debug!("Rejected registration body: {}", rejection);
            AppError::InvalidParams
        })?;

        match (required_string(&body, "name"), required_string(&body, "email")) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(AppError::InvalidParams),
        }
    }
}

fn required_string(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// POST /users
///
/// Register a new user. Responds 201 with the created record.
pub async fn register<UR>(
    State(state): State<AppState<UR>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<User>>), AppError>
where
    UR: UserRepository + 'static,
{
    let request = RegisterRequest::from_payload(payload)?;

    let user = state
        .user_service
        .create(&request.name, &request.email)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /users/:id
///
/// Returns the user, or `{"data": null}` when no record matches.
pub async fn get_user<UR>(
    State(state): State<AppState<UR>>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Option<User>>>, AppError>
where
    UR: UserRepository + 'static,
{
    let user = match id.parse::<UserId>() {
        Ok(id) => state.user_service.get_user(&id).await?,
        // not a UUID, so nothing can match
        Err(_) => {
            tracing::debug!(user_id = %id, "Lookup with malformed user id");
            None
        }
    };

    Ok(Json(DataResponse { data: user }))
}
