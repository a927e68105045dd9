use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::requests::ValidatedRequest;
use crate::security::validation::{FieldRule, Location, Rule};

#[derive(Clone, Debug, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Exact username, matched literally
    #[param(example = "admin", min_length = 1)]
    pub username: String,
}

impl ValidatedRequest for UserQuery {
    const LOCATION: Location = Location::Query;
    const RULES: &'static [FieldRule] = &[FieldRule {
        field: "username",
        rules: &[Rule::Required, Rule::String, Rule::MinLength(1)],
    }];
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserRequest {
    /// Integer or numeric string, at least 1
    #[schema(example = 2, minimum = 1)]
    pub id: i64,
}

impl ValidatedRequest for DeleteUserRequest {
    const LOCATION: Location = Location::Body;
    const RULES: &'static [FieldRule] = &[FieldRule {
        field: "id",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    }];
}
