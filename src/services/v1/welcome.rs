use actix_web::web::Json;

use crate::requests::v1::welcome::WelcomeQuery;
use crate::responses::v1::welcome::Welcome;
use crate::security::validation::escape_html;

pub const DEFAULT_NAME: &str = "invité";

/// Greet `name`, or the default guest name when it is absent or blank
pub fn welcome(request: WelcomeQuery) -> Json<Welcome> {
    let name = request
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    Json(Welcome {
        message: format!("Bienvenue, {}!", escape_html(&name)),
    })
}
