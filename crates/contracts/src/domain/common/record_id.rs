use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier assigned by the backend.
///
/// Always serialized as a number; some endpoints send it as a numeric
/// string, so both are accepted when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Parse an id coming from a form control or a tab key
    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(RecordId)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

struct RecordIdVisitor;

impl<'de> Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer id or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RecordId, E> {
        Ok(RecordId(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RecordId, E> {
        i64::try_from(value)
            .map(RecordId)
            .map_err(|_| E::custom(format!("id {} out of range", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RecordId, E> {
        RecordId::from_string(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordIdVisitor)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id = RecordId::from_string(" 42 ").unwrap();
        assert_eq!(id, RecordId(42));
        assert_eq!(id.to_string(), "42");
        assert!(RecordId::from_string("abc").is_err());
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&RecordId(7)).unwrap();
        assert_eq!(json, "7");
        let back: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(back, RecordId(7));
    }

    #[test]
    fn test_numeric_string_is_accepted() {
        let id: RecordId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(id, RecordId(12));
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        assert!(serde_json::from_str::<RecordId>("\"doze\"").is_err());
        assert!(serde_json::from_str::<RecordId>("1.5").is_err());
    }
}
