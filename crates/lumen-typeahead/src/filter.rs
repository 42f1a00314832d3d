//! Candidate filtering for suggestion queries.
//!
//! This module provides [`Candidate`], the row type presented by a
//! suggestions content view, and the predicate filter that narrows a
//! candidate list as the user types. Filtering is a pure, stable transform:
//! candidates keep their original relative order and no ranking is applied.
//!
//! # Example
//!
//! ```
//! use lumen_typeahead::filter::{filter_candidates, Candidate};
//!
//! let candidates = vec![
//!     Candidate::new("iPhone 4", "iOS", 2010),
//!     Candidate::new("iPhone 5", "iOS", 2012),
//! ];
//!
//! // Name substring match keeps both, in order
//! let matches = filter_candidates(&candidates, "iPhone");
//! assert_eq!(matches.len(), 2);
//!
//! // Year prefix match keeps only the second
//! let matches = filter_candidates(&candidates, "2012");
//! assert_eq!(matches[0].name, "iPhone 5");
//! ```

/// Controls how query matching handles letter case.
///
/// Matching is case-sensitive by default: suggestion queries come straight
/// from the field text and are compared byte-for-byte, with no locale rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g. "iphone" won't match "iPhone").
    #[default]
    CaseSensitive,
    /// Case-insensitive matching (e.g. "iphone" will match "iPhone").
    CaseInsensitive,
}

/// A suggestion candidate.
///
/// Carries the primary display name, a secondary text (for phones, the name
/// of the latest supported OS), and a numeric field (release year). All
/// three participate in query matching, see [`Candidate::matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Primary display name.
    pub name: String,
    /// Secondary descriptive text.
    pub detail: String,
    /// Numeric field, matched by decimal prefix.
    pub year: u32,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(name: impl Into<String>, detail: impl Into<String>, year: u32) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            year,
        }
    }

    /// Check whether this candidate matches a non-empty query.
    ///
    /// A candidate matches when its name contains the query as a substring,
    /// or its detail text contains the query, or the decimal rendering of
    /// its numeric field starts with the query.
    pub fn matches(&self, query: &str, case_sensitivity: CaseSensitivity) -> bool {
        match case_sensitivity {
            CaseSensitivity::CaseSensitive => {
                self.name.contains(query)
                    || self.detail.contains(query)
                    || self.year.to_string().starts_with(query)
            }
            CaseSensitivity::CaseInsensitive => {
                let query = query.to_lowercase();
                self.name.to_lowercase().contains(&query)
                    || self.detail.to_lowercase().contains(&query)
                    || self.year.to_string().starts_with(&query)
            }
        }
    }
}

/// Filter candidates by a query, preserving their relative order.
///
/// An empty query returns the full candidate list unchanged. Matching is
/// case-sensitive; use [`filter_candidates_with`] to control sensitivity.
pub fn filter_candidates(candidates: &[Candidate], query: &str) -> Vec<Candidate> {
    filter_candidates_with(candidates, query, CaseSensitivity::CaseSensitive)
}

/// Filter candidates by a query with explicit case sensitivity.
pub fn filter_candidates_with(
    candidates: &[Candidate],
    query: &str,
    case_sensitivity: CaseSensitivity,
) -> Vec<Candidate> {
    if query.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|candidate| candidate.matches(query, case_sensitivity))
        .cloned()
        .collect()
}

/// Trait for providing suggestion candidates.
///
/// Implement this trait to provide custom candidate sources. The model is
/// responsible for filtering and returning the candidates relevant to the
/// query, preserving whatever order it considers canonical.
pub trait CandidateModel {
    /// Get candidates matching the given query.
    fn candidates(&self, query: &str, case_sensitivity: CaseSensitivity) -> Vec<Candidate>;

    /// Get the total number of items in the model (before filtering).
    ///
    /// Returns `None` if the count is unknown or expensive to compute.
    fn count(&self) -> Option<usize> {
        None
    }
}

/// A candidate model backed by a static list.
///
/// This is the common model for suggestion scenarios where the candidate
/// catalog is known ahead of time.
#[derive(Debug, Clone, Default)]
pub struct CandidateListModel {
    items: Vec<Candidate>,
}

impl CandidateListModel {
    /// Create a new list model with the given items.
    pub fn new(items: Vec<Candidate>) -> Self {
        Self { items }
    }

    /// Create an empty list model.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Get a reference to the items.
    pub fn items(&self) -> &[Candidate] {
        &self.items
    }

    /// Set the items.
    pub fn set_items(&mut self, items: Vec<Candidate>) {
        self.items = items;
    }

    /// Add an item to the list.
    pub fn add_item(&mut self, item: Candidate) {
        self.items.push(item);
    }

    /// Remove an item from the list by name.
    pub fn remove_item(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl CandidateModel for CandidateListModel {
    fn candidates(&self, query: &str, case_sensitivity: CaseSensitivity) -> Vec<Candidate> {
        filter_candidates_with(&self.items, query, case_sensitivity)
    }

    fn count(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

impl From<Vec<Candidate>> for CandidateListModel {
    fn from(items: Vec<Candidate>) -> Self {
        Self::new(items)
    }
}
