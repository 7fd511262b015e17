//! Request body extraction for echoed payloads.

use axum::Json;
use axum::extract::{Form, FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;
use serde_json::map::Entry;
use status::FetchedData;

use crate::error::ApiError;

/// A key-value payload read from either a JSON object body or a
/// form-encoded body.
///
/// Form fields become JSON strings, in first-seen key order. A key
/// repeated in the form becomes an array of its values. Bracketed keys nest:
/// `a[]=1&a[]=2` gives an array and `p[name]=x` gives an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub FetchedData);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_encoded(req.headers()) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            Ok(Self(pairs_to_map(pairs)))
        } else {
            let Json(map) = Json::<FetchedData>::from_request(req, state).await?;
            Ok(Self(map))
        }
    }
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

fn pairs_to_map(pairs: Vec<(String, String)>) -> FetchedData {
    let mut map = FetchedData::new();

    for (key, value) in pairs {
        let nested = match split_key(&key) {
            Some((head, segments)) => insert_nested(&mut map, head, &segments, value),
            None => Err(value),
        };
        if let Err(value) = nested {
            insert_flat(&mut map, key, value);
        }
    }

    map
}

/// Splits `p[a][b]` into `("p", ["a", "b"])`.
///
/// Returns `None` unless the key is a non-empty head followed only by
/// bracketed segments.
fn split_key(key: &str) -> Option<(&str, Vec<&str>)> {
    let open = key.find('[').filter(|&open| open > 0)?;
    let (head, mut rest) = key.split_at(open);

    let mut segments = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        segments.push(&inner[..close]);
        rest = &inner[close + 1..];
    }

    Some((head, segments))
}

/// Inserts `value` under `head` and then each segment in turn. An empty
/// final segment appends to an array.
///
/// Hands the value back when the existing shape at some level does not
/// allow nesting.
fn insert_nested(
    map: &mut FetchedData,
    head: &str,
    segments: &[&str],
    value: String,
) -> Result<(), String> {
    match segments {
        [] => {
            insert_flat(map, head.to_string(), value);
            Ok(())
        }
        [""] => match map.get_mut(head) {
            None => {
                map.insert(head.to_string(), Value::Array(vec![Value::String(value)]));
                Ok(())
            }
            Some(Value::Array(_) | Value::String(_)) => {
                insert_flat(map, head.to_string(), value);
                Ok(())
            }
            Some(_) => Err(value),
        },
        [next, rest @ ..] if !next.is_empty() => {
            let child = map
                .entry(head)
                .or_insert_with(|| Value::Object(FetchedData::new()));
            match child {
                Value::Object(inner) => insert_nested(inner, next, rest, value),
                _ => Err(value),
            }
        }
        _ => Err(value),
    }
}

/// Inserts a plain string, turning a repeated key into an array.
fn insert_flat(map: &mut FetchedData, key: String, value: String) {
    match map.entry(key) {
        Entry::Vacant(entry) => {
            entry.insert(Value::String(value));
        }
        Entry::Occupied(mut entry) => match entry.get_mut() {
            Value::Array(values) => values.push(Value::String(value)),
            existing => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
        },
    }
}
