use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
///
/// Hyphens and spaces are folded to underscores and the input is
/// lowercased, so `In-Progress`, `in progress`, and `in_progress` agree.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace(['-', ' '], "_");
    let json = serde_json::Value::String(normalized);
    serde_json::from_value(json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional flag, falling back to the type's default.
pub fn parse_or_default<T>(raw: Option<&str>, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned + Default,
{
    raw.map_or_else(|| Ok(T::default()), |value| parse_enum(value, field))
}
