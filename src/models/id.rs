//! Opaque document identifier.
//!
//! Wraps the store's `ObjectId` so handlers and wire types only ever see a
//! validated 24-character hex string.

use crate::utils::error::AppError;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Fresh identifier, as the store would assign on insert.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// True if `s` is exactly 24 hex characters.
    pub fn is_valid(s: &str) -> bool {
        s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        if !Self::is_valid(s) {
            return Err(AppError::InvalidRequest(format!("'{}' is not a valid identifier", s)));
        }
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::InvalidRequest(format!("'{}' is not a valid identifier", s)))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub(crate) fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for DocumentId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Hex string for an optional stored `_id`; empty when the document has none.
pub fn wire_id(id: Option<ObjectId>) -> String {
    id.map(|oid| DocumentId::from(oid).to_hex()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(DocumentId::is_valid("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert!(DocumentId::is_valid("65A1F0C2E4B0A1B2C3D4E5F6"));
        assert!(!DocumentId::is_valid(""));
        assert!(!DocumentId::is_valid("65a1f0c2e4b0a1b2c3d4e5f"));
        assert!(!DocumentId::is_valid("65a1f0c2e4b0a1b2c3d4e5fg"));
        assert!(!DocumentId::is_valid("not-an-id"));
    }

    #[test]
    fn test_parse_and_display() {
        let id: DocumentId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().unwrap();
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_rejects_invalid_as_bad_request() {
        match DocumentId::parse("xyz") {
            Err(AppError::InvalidRequest(msg)) => assert!(msg.contains("xyz")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_plain_hex_string() {
        let id = DocumentId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_hex()));

        let bad: Result<DocumentId, _> = serde_json::from_str("\"1234\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_wire_id() {
        assert_eq!(wire_id(None), "");
        let oid = ObjectId::new();
        assert_eq!(wire_id(Some(oid)), oid.to_hex());
    }
}
