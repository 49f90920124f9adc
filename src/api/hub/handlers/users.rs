/*
 * Responsibility
 * - GET /users/{user_name}
 * - Resolve the path name against the fixture catalogue; unknown names are 404
 */
use axum::{Json, extract::Path};

use crate::{
    api::hub::dto::users::UserRecord,
    error::AppError,
    services::fixture::{self, FixtureUser},
};

pub async fn get_user(Path(user_name): Path<String>) -> Result<Json<UserRecord>, AppError> {
    let user = FixtureUser::from_name(&user_name).ok_or_else(|| {
        tracing::debug!(%user_name, "unknown user requested");
        AppError::not_found(user_name.as_str())
    })?;

    Ok(Json(fixture::user_record(user)))
}
