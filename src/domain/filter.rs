//! List filtering over the fetched posting list
//!
//! The engine holds the unfiltered source list plus the two filter inputs
//! (free-text search, category selector) and derives the visible list by
//! full recomputation whenever any of the three changes. There is no
//! debouncing and no incremental patching; the derived list can never be
//! stale relative to its inputs. Fine for the tens-to-low-hundreds of
//! postings this screen works with.

use crate::domain::{InternshipPosting, CATEGORY_ALL};

/// Derives the filtered posting list shown in the browse view.
#[derive(Debug, Clone)]
pub struct ListFilterEngine {
    postings: Vec<InternshipPosting>,
    search: String,
    category: String,
    /// Indices into `postings`, in source order
    filtered: Vec<usize>,
}

impl Default for ListFilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ListFilterEngine {
    pub fn new() -> Self {
        Self {
            postings: Vec::new(),
            search: String::new(),
            category: CATEGORY_ALL.to_string(),
            filtered: Vec::new(),
        }
    }

    /// Replace the source list, keeping the current filter criteria
    pub fn set_source(&mut self, postings: Vec<InternshipPosting>) {
        self.postings = postings;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.recompute();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
        self.recompute();
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.recompute();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.recompute();
    }

    /// Set the category selector: either [`CATEGORY_ALL`] or a category
    /// value, matched exactly against `posting.category`.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.recompute();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn source(&self) -> &[InternshipPosting] {
        &self.postings
    }

    /// Size of the full unfiltered source list (feeds the browse badge)
    pub fn source_len(&self) -> usize {
        self.postings.len()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Indices of the filtered postings, in source order
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered(&self) -> Vec<&InternshipPosting> {
        self.filtered
            .iter()
            .filter_map(|idx| self.postings.get(*idx))
            .collect()
    }

    /// Posting at a position in the *filtered* list
    pub fn filtered_get(&self, pos: usize) -> Option<&InternshipPosting> {
        self.filtered
            .get(pos)
            .and_then(|idx| self.postings.get(*idx))
    }

    /// Rebuild the filtered list from scratch. Stable: source order is
    /// preserved, nothing is re-sorted.
    fn recompute(&mut self) {
        self.filtered = self
            .postings
            .iter()
            .enumerate()
            .filter(|(_, posting)| self.matches(posting))
            .map(|(idx, _)| idx)
            .collect();
    }

    fn matches(&self, posting: &InternshipPosting) -> bool {
        self.matches_search(posting) && self.matches_category(posting)
    }

    /// Case-insensitive substring containment over title, company, and
    /// location. Empty fields simply fail their sub-condition.
    fn matches_search(&self, posting: &InternshipPosting) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        contains_ci(&posting.title, &needle)
            || contains_ci(&posting.company, &needle)
            || contains_ci(&posting.location, &needle)
    }

    /// Exact, case-sensitive category match behind the "all" sentinel
    fn matches_category(&self, posting: &InternshipPosting) -> bool {
        self.category == CATEGORY_ALL || posting.category == self.category
    }
}

fn contains_ci(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
