//! API request handlers

mod admin;
mod coming_soon;
mod health;
mod pages;
mod site;

pub use admin::*;
pub use coming_soon::*;
pub use health::*;
pub use pages::*;
pub use site::*;

use crate::error::{ApiError, ApiResult};
use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON request body that must be an object
///
/// Derived `Deserialize` also accepts the array form of a struct (`[true]`
/// for `{"enabled": true}`); extracting a map first rules that out.
pub type ObjectBody = Result<Json<Map<String, Value>>, JsonRejection>;

/// Decode an object body into a request type
fn decode_object<T: DeserializeOwned>(payload: ObjectBody) -> ApiResult<T> {
    let Json(fields) = payload?;
    serde_json::from_value(Value::Object(fields)).map_err(|err| {
        tracing::debug!(reason = %err, "Rejected request body");
        ApiError::InvalidBody
    })
}
