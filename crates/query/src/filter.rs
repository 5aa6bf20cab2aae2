//! Free-text search over saved candidates.

use model::Candidate;

/// Case-insensitive substring match over the searchable fields.
///
/// ## Algorithm
/// A candidate matches when the lowercased needle occurs in any of
/// `fullName`, `userLogin`, `userLocation`, `contactEmail` or `companyName`.
/// Unset fields never match. An empty needle matches everything.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(search_text: &str) -> Self {
        Self {
            needle: search_text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        if self.is_empty() {
            return true;
        }

        [
            candidate.full_name.as_deref(),
            Some(candidate.user_login.as_str()),
            candidate.user_location.as_deref(),
            candidate.contact_email.as_deref(),
            candidate.company_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Keep only the matching candidates, preserving order.
    pub fn apply(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        if self.is_empty() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate))
            .collect()
    }
}
