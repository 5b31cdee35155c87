use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// One archived item as authored in the remote manifest.
///
/// The provider tag stays a raw string so entries with tags this build
/// doesn't know about still decode and can be reported per card. Fields of
/// the wrong JSON type decode as absent, so one malformed item never fails
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaEntry {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub description: Option<String>,
}

fn lenient_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_optional(deserializer).map(Option::unwrap_or_default)
}

impl MediaEntry {
    /// Decodes one manifest item. Anything that isn't an object becomes an
    /// entry with an empty tag, which resolves as unsupported.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Keeping malformed manifest item as unsupported: {}", e);
                Self {
                    kind: String::new(),
                    link: String::new(),
                    title: None,
                    artist: None,
                    description: None,
                }
            }
        }
    }

    #[cfg(test)]
    pub fn new(kind: &str, link: &str) -> Self {
        Self {
            kind: kind.to_string(),
            link: link.to_string(),
            title: None,
            artist: None,
            description: None,
        }
    }
}
