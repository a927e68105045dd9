use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::requests::ValidatedRequest;
use crate::security::validation::{FieldRule, Location, Rule};

#[derive(Clone, Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WelcomeQuery {
    /// Name to greet, markup is escaped
    #[param(example = "Zoé")]
    pub name: Option<String>,
}

impl ValidatedRequest for WelcomeQuery {
    const LOCATION: Location = Location::Query;
    const RULES: &'static [FieldRule] = &[FieldRule {
        field: "name",
        rules: &[Rule::String],
    }];
}
