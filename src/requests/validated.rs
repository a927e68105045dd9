use std::collections::HashMap;
use std::future::ready;

use actix_web::dev::Payload;
use actix_web::web::{Json, Query};
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::ApiError;
use crate::security::validation::{self, FieldRule, Location, Violation};

/// A request type that declares where it is read from and the rules its
/// raw input must satisfy before deserialization
pub trait ValidatedRequest: DeserializeOwned {
    const LOCATION: Location;
    const RULES: &'static [FieldRule];
}

/// Extractor that runs `T::RULES` and only then builds `T`
///
/// Any violation short-circuits the request with a 400 listing every
/// rejected field; the handler never runs.
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Validated<T>
where
    T: ValidatedRequest + 'static,
{
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match T::LOCATION {
            Location::Query => Box::pin(ready(query(req).and_then(check::<T>))),
            Location::Body => {
                let body = Json::<Value>::from_request(req, payload);

                Box::pin(async move {
                    let input = match body.await {
                        Ok(Json(input)) => input,
                        Err(e) => {
                            ::tracing::debug!(error = %e, "Unreadable JSON body");

                            return Err(ApiError::Validation(vec![Violation::new(
                                Location::Body,
                                "body",
                                "Corps JSON invalide",
                            )]));
                        }
                    };

                    check::<T>(input)
                })
            }
        }
    }
}

fn query(req: &HttpRequest) -> Result<Value, ApiError> {
    let Query(params) = Query::<HashMap<String, String>>::from_query(req.query_string())
        .map_err(|e| {
            ::tracing::debug!(error = %e, "Unreadable query string");

            ApiError::Validation(vec![Violation::new(
                Location::Query,
                "query",
                "Paramètres de requête invalides",
            )])
        })?;

    let object = params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect::<Map<_, _>>();

    Ok(Value::Object(object))
}

fn check<T: ValidatedRequest>(input: Value) -> Result<Validated<T>, ApiError> {
    let value = validation::validate(T::LOCATION, input, T::RULES).map_err(ApiError::Validation)?;

    serde_json::from_value(value).map(Validated).map_err(|e| {
        ::tracing::debug!(error = %e, "Validated input does not fit the request type");

        let field = match T::LOCATION {
            Location::Query => "query",
            Location::Body => "body",
        };
        ApiError::Validation(vec![Violation::new(T::LOCATION, field, "format invalide")])
    })
}
