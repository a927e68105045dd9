use actix_web::web::Json;
use sea_orm::DatabaseConnection;

use super::USER_NOT_FOUND;
use crate::entities::v1::users::Model;
use crate::errors::ApiError;
use crate::requests::v1::user::DeleteUserRequest;
use crate::responses::v1::user::Deleted;

#[::tracing::instrument(skip_all, fields(user_id = request.id))]
pub async fn delete(
    db: &DatabaseConnection,
    request: DeleteUserRequest,
) -> Result<Json<Deleted>, ApiError> {
    if Model::delete_by_id(db, request.id).await? == 0 {
        return Err(ApiError::NotFound(USER_NOT_FOUND.to_string()));
    }

    ::tracing::info!("User deleted");

    Ok(Json(Deleted::new()))
}
