use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::entities::v1::users::Role;

/// Public view of a user record, the password hash is never exposed
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "admin")]
    pub role: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "User deleted")]
pub struct Deleted {
    #[schema(example = true)]
    pub ok: bool,
    #[schema(example = "Utilisateur supprimé")]
    pub message: String,
}

impl Deleted {
    pub fn new() -> Self {
        Self {
            ok: true,
            message: "Utilisateur supprimé".to_string(),
        }
    }
}

impl Default for Deleted {
    fn default() -> Self {
        Self::new()
    }
}
