//! JSON object assembly for simple string-to-string request bodies.

use serde_json::{Map, Value};

/// Serialize string pairs into a JSON object string.
///
/// Keys are emitted in sorted order. Escaping (quotes, backslashes,
/// control characters) is handled by the serializer.
pub fn json_object<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let map: Map<String, Value> = pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();

    Value::Object(map).to_string()
}
