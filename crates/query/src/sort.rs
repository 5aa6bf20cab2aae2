//! Sort keys and field comparison for saved candidates.

use model::Candidate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A Candidate field the saved list can be ordered by.
///
/// Parsed from and displayed as the camelCase field name used in the
/// persisted snapshot (`fullName`, `userLogin`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    UserId,
    UserLogin,
    FullName,
    AvatarUrl,
    UserLocation,
    ContactEmail,
    ProfileUrl,
    CompanyName,
    Biography,
}

/// A field value extracted for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u64),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown sort field: {0}")]
pub struct UnknownSortKey(pub String);

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::UserId,
        SortKey::UserLogin,
        SortKey::FullName,
        SortKey::AvatarUrl,
        SortKey::UserLocation,
        SortKey::ContactEmail,
        SortKey::ProfileUrl,
        SortKey::CompanyName,
        SortKey::Biography,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            SortKey::UserId => "userId",
            SortKey::UserLogin => "userLogin",
            SortKey::FullName => "fullName",
            SortKey::AvatarUrl => "avatarUrl",
            SortKey::UserLocation => "userLocation",
            SortKey::ContactEmail => "contactEmail",
            SortKey::ProfileUrl => "profileUrl",
            SortKey::CompanyName => "companyName",
            SortKey::Biography => "biography",
        }
    }

    /// Extract this field from `candidate`; `None` when the field is unset.
    pub fn value(self, candidate: &Candidate) -> Option<FieldValue<'_>> {
        match self {
            SortKey::UserId => Some(FieldValue::Number(candidate.user_id)),
            SortKey::UserLogin => Some(FieldValue::Text(&candidate.user_login)),
            SortKey::FullName => text(&candidate.full_name),
            SortKey::AvatarUrl => text(&candidate.avatar_url),
            SortKey::UserLocation => text(&candidate.user_location),
            SortKey::ContactEmail => text(&candidate.contact_email),
            SortKey::ProfileUrl => Some(FieldValue::Text(&candidate.profile_url)),
            SortKey::CompanyName => text(&candidate.company_name),
            SortKey::Biography => text(&candidate.biography),
        }
    }

    /// Compare two candidates on this field.
    ///
    /// Absent values and mismatched value kinds compare as `Equal`, so a
    /// stable sort leaves such pairs in their original order.
    pub fn compare(self, a: &Candidate, b: &Candidate) -> Ordering {
        match (self.value(a), self.value(b)) {
            (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => locale_compare(x, y),
            (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.cmp(&y),
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.field_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Human-oriented string ordering.
///
/// Compares in three passes: base letters with accents and case folded away,
/// then accents (unaccented first), then case (lowercase first). So
/// "alice" < "Alice" < "bob", and "Émile" sorts among the other e's.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find(|(x, y)| x != y)
                .map(|(x, y)| case_rank(x).cmp(&case_rank(y)))
                .unwrap_or(Ordering::Equal)
        })
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn text(field: &Option<String>) -> Option<FieldValue<'_>> {
    field.as_deref().map(FieldValue::Text)
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}
