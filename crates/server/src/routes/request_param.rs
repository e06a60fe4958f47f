//! Query-parameter binding handlers.
//!
//! Each handler binds the same two parameters (`username`, `age`) in a
//! different way, logs what it got, and answers `ok` as plain text.
//! Missing or malformed required parameters are rejected with 400 by the
//! `Query` extractor before the handler runs.

use std::collections::BTreeMap;

use axum::extract::Query;
use common::types::HelloData;
use serde::Deserialize;
use tracing::info;

use crate::errors::JsonApiError;

/// Look the values up by hand; a repeated key yields its first value.
pub async fn request_param_v1(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<&'static str, JsonApiError> {
    let params = first_values(pairs);
    let username = params.get("username").cloned().unwrap_or_default();
    let age: i32 = params
        .get("age")
        .ok_or_else(|| JsonApiError::bad_request("missing parameter `age`"))?
        .parse()
        .map_err(|e| JsonApiError::bad_request(format!("invalid `age`: {e}")))?;
    info!(%username, age, "request-param-v1");
    Ok("ok")
}

/// Parameter names differ from the field names.
#[derive(Debug, Deserialize)]
pub struct RenamedParams {
    #[serde(rename = "username")]
    pub member_name: String,
    #[serde(rename = "age")]
    pub member_age: i32,
}

pub async fn request_param_v2(Query(p): Query<RenamedParams>) -> &'static str {
    info!(username = %p.member_name, age = p.member_age, "request-param-v2");
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub username: String,
    pub age: i32,
}

pub async fn request_param_v3(Query(p): Query<UserParams>) -> &'static str {
    info!(username = %p.username, age = p.age, "request-param-v3");
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct OptionalNameParams {
    pub username: Option<String>,
    pub age: i32,
}

/// `username` may be omitted; `age` has no sensible absent value and stays required.
pub async fn request_param_v4(Query(p): Query<OptionalNameParams>) -> &'static str {
    info!(username = ?p.username, age = p.age, "request-param-v4");
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct RequiredParams {
    pub username: String,
    pub age: Option<i32>,
}

/// `username` must be present but may be empty (`?username=` passes).
pub async fn request_param_required(Query(p): Query<RequiredParams>) -> &'static str {
    info!(username = %p.username, age = ?p.age, "request-param-required");
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct DefaultParams {
    pub username: Option<String>,
    pub age: Option<String>,
}

impl DefaultParams {
    /// Absent and empty values both fall back to the defaults.
    pub fn resolve(&self) -> (String, String) {
        fn or_default(v: &Option<String>, default: &str) -> String {
            match v.as_deref() {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => default.to_string(),
            }
        }
        (or_default(&self.username, "guest"), or_default(&self.age, "-1"))
    }
}

pub async fn request_param_default(Query(p): Query<DefaultParams>) -> &'static str {
    let (username, age) = p.resolve();
    info!(%username, %age, "request-param-default");
    "ok"
}

/// First value wins for repeated keys.
fn first_values(pairs: Vec<(String, String)>) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (k, v) in pairs {
        map.entry(k).or_insert(v);
    }
    map
}

fn all_values(pairs: Vec<(String, String)>) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (k, v) in pairs {
        map.entry(k).or_default().push(v);
    }
    map
}

pub async fn request_param_map(Query(pairs): Query<Vec<(String, String)>>) -> &'static str {
    let params = first_values(pairs);
    info!(username = ?params.get("username"), age = ?params.get("age"), "request-param-map");
    "ok"
}

/// Keeps every value of a repeated key, e.g. `?username=kim&username=lee`.
pub async fn request_param_multi_map(Query(pairs): Query<Vec<(String, String)>>) -> &'static str {
    let params = all_values(pairs);
    info!(username = ?params.get("username"), age = ?params.get("age"), "request-param-multi-map");
    "ok"
}

pub async fn model_attribute_v1(Query(hello_data): Query<HelloData>) -> &'static str {
    info!(username = %hello_data.username, age = hello_data.age, "model-attribute-v1");
    info!(?hello_data, "model-attribute-v1");
    "ok"
}

pub async fn model_attribute_v2(Query(hello_data): Query<HelloData>) -> &'static str {
    info!(username = %hello_data.username, age = hello_data.age, "model-attribute-v2");
    "ok"
}
