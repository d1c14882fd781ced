pub mod filter;
pub mod render;
pub mod summary;

pub use summary::{Stats, Summary};

use crate::models::{FilterState, Property};

/// Derived view of the working collection for one filter state
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    pub properties: Vec<&'a Property>,
    pub summary: Summary,
}

impl<'a> ListingView<'a> {
    /// Recompute from scratch. Called whenever the collection or either filter field changes.
    pub fn compute(properties: &'a [Property], state: &FilterState) -> Self {
        let filtered = filter::apply(properties, state);
        let summary = Summary::new(filtered.len(), properties.len());
        Self {
            properties: filtered,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}
