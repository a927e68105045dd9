use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
pub struct Welcome {
    /// Greeting with the name HTML-escaped
    #[schema(example = "Bienvenue, invité!")]
    pub message: String,
}
