//! Call arguments and GET query-string construction.
//!
//! # Design
//! Arguments are an insertion-ordered JSON object so the same value can be
//! sent as a query string (GET) or as a JSON body (everything else). Before
//! a query string is built, top-level entries whose value is "falsy" are
//! dropped entirely rather than sent as empty parameters.
//!
//! Falsy is defined here, not borrowed from any language: `null`, `false`,
//! numeric zero, the empty string, and an empty array or object. The string
//! `"0"` is a regular value.

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Caller-supplied key/value arguments for one API call.
pub type Args = Map<String, Value>;

pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Copy of `args` without its falsy top-level entries, order preserved.
pub fn filter_args(args: &Args) -> Args {
    args.iter()
        .filter(|(_, v)| !is_falsy(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Form-urlencode `args` without filtering.
///
/// Scalars render literally (`true` as `1`). Arrays and objects expand to
/// bracketed keys, `tags[0]=a` and `settings[audio]=voip`. Nested `null`s are
/// skipped and nested `false` renders as `0`.
pub fn build_query(args: &Args) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in args {
        append_pair(&mut serializer, key, value, true);
    }
    serializer.finish()
}

/// Append the filtered `args` to `route` as a query string.
///
/// Returns `route` untouched when no argument survives filtering. A route that
/// already has a query string is extended with `&`.
pub fn add_query_arg(route: &str, args: &Args) -> String {
    let query = build_query(&filter_args(args));
    if query.is_empty() {
        return route.to_string();
    }
    let separator = if route.contains('?') { '&' } else { '?' };
    format!("{route}{separator}{query}")
}

fn append_pair(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    key: &str,
    value: &Value,
    top_level: bool,
) {
    match value {
        Value::Null => {}
        Value::Bool(true) => {
            serializer.append_pair(key, "1");
        }
        // Top-level false never gets here through add_query_arg.
        Value::Bool(false) => {
            if !top_level {
                serializer.append_pair(key, "0");
            }
        }
        Value::Number(n) => {
            serializer.append_pair(key, &n.to_string());
        }
        Value::String(s) => {
            serializer.append_pair(key, s);
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                append_pair(serializer, &format!("{key}[{i}]"), item, false);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                append_pair(serializer, &format!("{key}[{sub}]"), item, false);
            }
        }
    }
}
