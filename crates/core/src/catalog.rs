//! Client-side catalog filtering.
//!
//! Filtering is a pure subset operation over an in-memory course list. Each
//! criterion is an explicit `Option`; `None` (or a blank search term) passes
//! every course through unchanged.

use crate::model::{Course, Difficulty};

/// Filter criteria for the course catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    /// Case-insensitive substring match against title or description.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Exact difficulty match.
    pub difficulty: Option<Difficulty>,
}

impl CatalogFilter {
    /// A filter with no active criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the course satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                course.title.to_lowercase().contains(&term)
                    || course.description.to_lowercase().contains(&term)
            }
        };

        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| course.category == category);

        let matches_difficulty = self
            .difficulty
            .as_ref()
            .is_none_or(|difficulty| course.difficulty == *difficulty);

        matches_search && matches_category && matches_difficulty
    }

    /// Returns the matching courses, preserving the input order.
    #[must_use]
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|course| self.matches(course)).collect()
    }
}
