//! The three-stage response pipeline shared by every endpoint.
//!
//! # Design
//! `check_status` runs before anything touches the body as a reply: a
//! non-200 body is only mined for a `cause`. `parse_document` turns the body
//! into JSON, then `check_success` reads the envelope and `R::from_document`
//! maps the endpoint fields. The envelope is checked before the endpoint
//! fields because failure bodies carry nothing but `success` and `cause`.

use serde::de::{Error as _, Unexpected};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, UNKNOWN_CAUSE};
use crate::http::HttpResponse;
use crate::reply::{Reply, ReplyStatus};

/// Runs a raw response through status, payload and domain validation.
pub fn process<R: Reply>(response: HttpResponse) -> Result<R, ApiError> {
    let body = check_status(response)?;
    let document = parse_document(&body)?;
    check_success(&document)?;
    R::from_document(document).map_err(ApiError::Parse)
}

/// Passes the body through on 200; anything else becomes a status error.
pub fn check_status(response: HttpResponse) -> Result<String, ApiError> {
    if response.status == 200 {
        return Ok(response.body);
    }
    Err(ApiError::Status {
        status: response.status,
        cause: extract_cause(&response.body),
    })
}

/// Best-effort `cause` from an error body. Bodies that are not a JSON
/// object with a string `cause` get [`UNKNOWN_CAUSE`].
fn extract_cause(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|document| document.get("cause"))
        .and_then(Value::as_str)
        .map_or_else(|| UNKNOWN_CAUSE.to_string(), str::to_string)
}

pub fn parse_document(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(ApiError::Parse)
}

/// Fails with a domain error unless the envelope reports `"success": true`.
///
/// A missing or null `success` flag counts as `false`. A document that is
/// not an object, or whose flag or cause has the wrong type, is a parse
/// error.
pub fn check_success(document: &Value) -> Result<ReplyStatus, ApiError> {
    if !document.is_object() {
        return Err(ApiError::Parse(serde_json::Error::invalid_type(
            unexpected(document),
            &"a reply object",
        )));
    }
    let status = ReplyStatus::deserialize(document).map_err(ApiError::Parse)?;
    if !status.success {
        return Err(ApiError::Domain {
            cause: status.cause,
        });
    }
    Ok(status)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Unexpected::Float(f),
            None => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
