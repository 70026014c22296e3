use serde::de::DeserializeOwned;

/// Parses a TEXT column back into one of the domain unit enums using its
/// serde representation, so the database and the API wire format can never
/// disagree about spelling.
pub fn enum_from_str<T: DeserializeOwned>(s: &str) -> anyhow::Result<T> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| anyhow::anyhow!("Unexpected enum value in database: {} ({})", s, e))
}
