//! Store record shape
//!
//! A store is one retail-location document: address and geo fields, contact
//! info, and write-path timestamps. The storage key is assigned by the
//! collaborator on create and immutable afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A store document as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Opaque storage key. Empty only before the first put; an empty key is
    /// left out of the serialized document so the store assigns one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,

    pub code_name: String,
    pub country: String,
    pub city: String,
    pub address: String,

    /// Street/building number, clamped to >= 0 on write
    pub number: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    pub link: String,

    /// Set once at creation, never rewritten
    pub created_at: DateTime<Utc>,
    /// Re-stamped on create and every update
    pub updated_at: DateTime<Utc>,
}

/// Create-request body: a record without key and timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreDraft {
    pub code_name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub number: i64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub link: String,
}

impl StoreRecord {
    /// Record for a validated draft, number clamped, both timestamps set to
    /// the same instant. Key assignment is left to the storage collaborator.
    pub fn from_draft(draft: StoreDraft, now: DateTime<Utc>) -> Self {
        Self {
            key: String::new(),
            code_name: draft.code_name,
            country: draft.country,
            city: draft.city,
            address: draft.address,
            number: draft.number.max(0),
            phone: draft.phone,
            email: draft.email,
            latitude: draft.latitude,
            longitude: draft.longitude,
            link: draft.link,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> StoreDraft {
        StoreDraft {
            code_name: "AAPL01".to_string(),
            country: "usa".to_string(),
            city: "cupertino".to_string(),
            address: "1 infinite loop".to_string(),
            number: 1,
            phone: None,
            email: None,
            latitude: None,
            longitude: None,
            link: "http://apple.com/retail".to_string(),
        }
    }

    #[test]
    fn test_from_draft_stamps_both_timestamps() {
        let now = Utc::now();
        let record = StoreRecord::from_draft(draft(), now);
        assert_eq!(record.created_at, now);
        assert_eq!(record.updated_at, now);
    }

    #[test]
    fn test_from_draft_clamps_negative_number() {
        let mut d = draft();
        d.number = -5;
        let record = StoreRecord::from_draft(d, Utc::now());
        assert_eq!(record.number, 0);
    }

    #[test]
    fn test_from_draft_keeps_positive_number() {
        let mut d = draft();
        d.number = 42;
        let record = StoreRecord::from_draft(d, Utc::now());
        assert_eq!(record.number, 42);
    }

    #[test]
    fn test_empty_key_left_out_of_document() {
        let record = StoreRecord::from_draft(draft(), Utc::now());
        let doc = serde_json::to_value(&record).unwrap();
        assert!(doc.get("key").is_none());
    }

    #[test]
    fn test_absent_optionals_left_out_of_document() {
        let record = StoreRecord::from_draft(draft(), Utc::now());
        let doc = serde_json::to_value(&record).unwrap();
        assert!(doc.get("phone").is_none());
        assert!(doc.get("latitude").is_none());
    }

    #[test]
    fn test_draft_deserializes_without_optionals() {
        let draft: StoreDraft = serde_json::from_value(json!({
            "code_name": "AAPL01",
            "country": "usa",
            "city": "cupertino",
            "address": "1 infinite loop",
            "number": 1,
            "link": "http://apple.com/retail"
        }))
        .unwrap();
        assert_eq!(draft.phone, None);
        assert_eq!(draft.longitude, None);
    }

    #[test]
    fn test_record_round_trips_through_document() {
        let mut record = StoreRecord::from_draft(draft(), Utc::now());
        record.key = "abc123".to_string();

        let doc = serde_json::to_value(&record).unwrap();
        let back: StoreRecord = serde_json::from_value(doc).unwrap();
        assert_eq!(back, record);
    }
}
