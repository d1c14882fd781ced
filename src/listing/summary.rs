use crate::models::Property;
use std::fmt;

/// "Showing X of Y" count for one filter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub shown: usize,
    pub total: usize,
}

impl Summary {
    pub fn new(shown: usize, total: usize) -> Self {
        debug_assert!(shown <= total, "filtered view larger than its input");
        Self { shown, total }
    }

    /// Empty-state indicator
    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {}", self.shown, self.total)
    }
}

/// Availability counters over the whole working collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
}

impl Stats {
    pub fn from_properties(properties: &[Property]) -> Self {
        let available = properties.iter().filter(|p| p.is_available).count();
        Self {
            total: properties.len(),
            available,
            unavailable: properties.len() - available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::filter::apply;
    use crate::listing::test_support::property;
    use crate::models::{FilterState, StatusFilter};

    #[test]
    fn summary_reads_showing_x_of_y() {
        assert_eq!(Summary::new(1, 2).to_string(), "Showing 1 of 2");
    }

    #[test]
    fn zero_shown_is_empty_state() {
        assert!(Summary::new(0, 5).is_empty());
        assert!(!Summary::new(3, 5).is_empty());
    }

    #[test]
    fn shown_never_exceeds_total() {
        let records = vec![
            property(1, "Sea View", "Goa", true),
            property(2, "City Flat", "Mumbai", false),
            property(3, "Hill Cabin", "Manali", true),
        ];
        for status in StatusFilter::ALL {
            for term in ["", "a", "zzz", "VIEW"] {
                let shown = apply(&records, &FilterState::new(status, term)).len();
                let summary = Summary::new(shown, records.len());
                assert!(summary.shown <= summary.total);
                assert_eq!(summary.is_empty(), shown == 0);
            }
        }
    }

    #[test]
    fn stats_split_by_availability() {
        let records = vec![
            property(1, "Sea View", "Goa", true),
            property(2, "City Flat", "Mumbai", false),
            property(3, "Hill Cabin", "Manali", true),
        ];
        assert_eq!(
            Stats::from_properties(&records),
            Stats {
                total: 3,
                available: 2,
                unavailable: 1
            }
        );
        assert_eq!(Stats::from_properties(&[]), Stats::default());
    }
}
