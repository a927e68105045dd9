use sea_orm::prelude::*;
use sea_orm::PaginatorTrait;

use crate::entities::v1::users::{Column, Entity, Model};
use crate::responses::v1::user::User;

impl Model {
    /// Look a user up by exact username
    ///
    /// The value is bound as a statement parameter, so quotes or SQL
    /// fragments in `username` only ever match a row with that literal name.
    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    /// Delete the user with `id`, returning the number of rows removed
    ///
    /// Deleting an id that does not exist is not an error: it removes 0 rows.
    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;

        Ok(result.rows_affected)
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }
}

impl From<Model> for User {
    fn from(val: Model) -> Self {
        User {
            id: val.id,
            username: val.username,
            role: val.role,
        }
    }
}
