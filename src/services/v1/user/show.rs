use actix_web::web::Json;
use sea_orm::DatabaseConnection;

use super::USER_NOT_FOUND;
use crate::entities::v1::users::Model;
use crate::errors::ApiError;
use crate::requests::v1::user::UserQuery;
use crate::responses::v1::user::User;

#[::tracing::instrument(skip_all, fields(username = %request.username))]
pub async fn show(db: &DatabaseConnection, request: UserQuery) -> Result<Json<User>, ApiError> {
    let user = Model::find_by_username(db, &request.username)
        .await?
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;

    Ok(Json(user.into()))
}
