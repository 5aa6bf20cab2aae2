//! Core domain types for candidate review.
//!
//! `CandidateRecord` is the loose shape a remote source hands us; `Candidate`
//! is the validated entity that flows through the review queue and the saved
//! store.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Stable numeric identity of a candidate within a session
pub type UserId = u64;

/// A prospective hire.
///
/// `user_login` and `profile_url` are always non-empty on a constructed
/// `Candidate`. Every other text field is optional; unset fields serialize as
/// `""` so a persisted snapshot always carries every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub user_id: UserId,
    pub user_login: String,
    #[serde(default, with = "empty_as_none")]
    pub full_name: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub avatar_url: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub user_location: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub contact_email: Option<String>,
    pub profile_url: String,
    #[serde(default, with = "empty_as_none")]
    pub company_name: Option<String>,
    #[serde(default, with = "empty_as_none")]
    pub biography: Option<String>,
}

impl Candidate {
    /// Create a candidate with only the identity and required fields set.
    pub fn new(
        user_id: UserId,
        user_login: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            user_login: user_login.into(),
            full_name: None,
            avatar_url: None,
            user_location: None,
            contact_email: None,
            profile_url: profile_url.into(),
            company_name: None,
            biography: None,
        }
    }
}

/// A "Candidate-like" record as returned by a remote source.
///
/// Every field is optional here; validity is decided when converting into a
/// `Candidate`. A field holding the wrong JSON type reads as unset instead of
/// failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateRecord {
    #[serde(deserialize_with = "lenient::user_id")]
    pub user_id: Option<UserId>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub user_login: Option<String>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub full_name: Option<String>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub avatar_url: Option<String>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub user_location: Option<String>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub contact_email: Option<String>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub profile_url: Option<String>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(serialize_with = "empty_as_none::serialize", deserialize_with = "lenient::text")]
    pub biography: Option<String>,
}

impl CandidateRecord {
    /// A record is valid iff both `userLogin` and `profileUrl` are non-empty.
    pub fn is_valid(&self) -> bool {
        self.user_login.is_some() && self.profile_url.is_some()
    }
}

impl TryFrom<CandidateRecord> for Candidate {
    type Error = ModelError;

    fn try_from(record: CandidateRecord) -> Result<Self, Self::Error> {
        let user_login = record
            .user_login
            .ok_or(ModelError::MissingField { field: "userLogin" })?;
        let profile_url = record
            .profile_url
            .ok_or(ModelError::MissingField { field: "profileUrl" })?;

        Ok(Candidate {
            user_id: record.user_id.unwrap_or_default(),
            user_login,
            full_name: record.full_name,
            avatar_url: record.avatar_url,
            user_location: record.user_location,
            contact_email: record.contact_email,
            profile_url,
            company_name: record.company_name,
            biography: record.biography,
        })
    }
}

/// Serde adapter: `None` <-> `""`, and `null` or blank input reads as `None`.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.is_empty()))
    }
}

/// Deserializers for untrusted remote records.
mod lenient {
    use super::UserId;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Non-empty strings only; anything else is `None`.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    /// Unsigned numbers, or strings holding one.
    pub fn user_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<UserId>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_serialize_as_empty_strings() {
        let candidate = Candidate::new(7, "octocat", "https://github.com/octocat");
        let value = serde_json::to_value(&candidate).unwrap();

        assert_eq!(value["userLogin"], "octocat");
        assert_eq!(value["fullName"], "");
        assert_eq!(value["companyName"], "");
        assert_eq!(value["userId"], 7);
    }

    #[test]
    fn test_empty_and_null_fields_read_as_none() {
        let candidate: Candidate = serde_json::from_value(json!({
            "userId": 1,
            "userLogin": "octocat",
            "fullName": "",
            "userLocation": null,
            "profileUrl": "https://github.com/octocat"
        }))
        .unwrap();

        assert_eq!(candidate.full_name, None);
        assert_eq!(candidate.user_location, None);
        assert_eq!(candidate.contact_email, None);
    }

    #[test]
    fn test_record_validity() {
        let mut record = CandidateRecord {
            user_login: Some("octocat".to_string()),
            ..Default::default()
        };
        assert!(!record.is_valid());

        record.profile_url = Some("https://github.com/octocat".to_string());
        assert!(record.is_valid());
    }

    #[test]
    fn test_mistyped_optional_fields_read_as_unset() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "userId": "7",
            "userLogin": "octocat",
            "fullName": ["Octo", "Cat"],
            "companyName": 42,
            "biography": { "text": "hi" },
            "profileUrl": "https://github.com/octocat"
        }))
        .unwrap();

        assert!(record.is_valid());
        assert_eq!(record.user_id, Some(7));
        assert_eq!(record.full_name, None);
        assert_eq!(record.company_name, None);
        assert_eq!(record.biography, None);
    }

    #[test]
    fn test_non_string_login_is_invalid() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "userLogin": 12,
            "profileUrl": "https://github.com/ghost"
        }))
        .unwrap();

        assert!(!record.is_valid());
    }

    #[test]
    fn test_try_from_reports_missing_field() {
        let record = CandidateRecord {
            profile_url: Some("https://github.com/ghost".to_string()),
            ..Default::default()
        };

        let err = Candidate::try_from(record).unwrap_err();
        assert!(matches!(err, ModelError::MissingField { field: "userLogin" }));
    }
}
