//! Lenient deserializers for members the API sends as either strings or numbers.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accept `"12.5"`, `12.5` or `null`, yielding the textual form.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::Text(text)) => text,
        Some(StringOrNumber::Int(n)) => n.to_string(),
        Some(StringOrNumber::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Accept `12.5`, `"12.5"` or `null`, yielding a number (0 when unparseable).
pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[allow(clippy::cast_precision_loss)]
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::Text(text)) => text.trim().parse().unwrap_or(0.0),
        Some(StringOrNumber::Int(n)) => n as f64,
        Some(StringOrNumber::Float(n)) => n,
        None => 0.0,
    })
}
