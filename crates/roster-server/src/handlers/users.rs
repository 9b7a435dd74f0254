//! `/api/users` handlers. Every input arrives through a validation step.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use roster_core::entities::{NewUser, User};
use roster_core::responses::SuccessResponse;
use roster_db::updates::UserUpdate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extract::{ValidatedBody, ValidatedParams, ValidatedQuery};

/// Path parameters of `/api/users/{id}`, after `getUserByIdParams`.
#[derive(Debug, Deserialize)]
pub struct UserIdParams {
    pub id: String,
}

impl UserIdParams {
    fn id(&self) -> Result<i64, ApiError> {
        // The schema pattern admits digit runs too long for i64.
        self.id.parse().map_err(|_| user_not_found())
    }
}

/// Query string of `GET /api/users`, after `paginationQuery` filled defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: String,
    pub limit: String,
    pub sort_by: String,
    pub sort_order: String,
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}

type Envelope<T> = Json<SuccessResponse<T>>;

pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Envelope<Vec<User>>, ApiError> {
    tracing::debug!(
        page = %query.page,
        limit = %query.limit,
        sort_by = %query.sort_by,
        sort_order = %query.sort_order,
        "listing users"
    );
    let users = state.service.list_users().await?;
    Ok(Json(SuccessResponse::new(users)))
}

pub async fn get_user(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<UserIdParams>,
) -> Result<Envelope<User>, ApiError> {
    let user = state
        .service
        .get_user(params.id()?)
        .await?
        .ok_or_else(user_not_found)?;
    Ok(Json(SuccessResponse::new(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedBody(new_user): ValidatedBody<NewUser>,
) -> Result<(StatusCode, Envelope<User>), ApiError> {
    let user = state.service.create_user(&new_user).await?;
    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(user))))
}

pub async fn update_user(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<UserIdParams>,
    ValidatedBody(update): ValidatedBody<UserUpdate>,
) -> Result<Envelope<User>, ApiError> {
    let user = state
        .service
        .update_user(params.id()?, &update)
        .await?
        .ok_or_else(user_not_found)?;
    Ok(Json(SuccessResponse::new(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<UserIdParams>,
) -> Result<Json<SuccessResponse<()>>, ApiError> {
    if state.service.delete_user(params.id()?).await? {
        tracing::info!(id = %params.id, "user deleted");
        Ok(Json(SuccessResponse::empty()))
    } else {
        Err(user_not_found())
    }
}
