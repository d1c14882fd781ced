use crate::models::{FilterState, Property, StatusFilter};

/// Keep records whose availability matches the selector. `All` keeps everything.
pub fn status_stage<'a, I>(records: I, status: StatusFilter) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    match status.required_availability() {
        None => records.into_iter().collect(),
        Some(wanted) => records
            .into_iter()
            .filter(|p| p.is_available == wanted)
            .collect(),
    }
}

/// Case-insensitive substring match against title or location.
///
/// An empty term passes everything. The term is not trimmed, so a whitespace-only
/// term still has to appear literally.
pub fn search_stage<'a, I>(records: I, term: &str) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    if term.is_empty() {
        return records.into_iter().collect();
    }

    let term = term.to_lowercase();
    records
        .into_iter()
        .filter(|p| matches_term(p, &term))
        .collect()
}

fn matches_term(property: &Property, lowered_term: &str) -> bool {
    property.title.to_lowercase().contains(lowered_term)
        || property.location.to_lowercase().contains(lowered_term)
}

/// Run both stages, status first. Output keeps input order.
pub fn apply<'a>(records: &'a [Property], state: &FilterState) -> Vec<&'a Property> {
    let by_status = status_stage(records, state.status);
    search_stage(by_status, &state.search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::test_support::property;
    use pretty_assertions::assert_eq;

    fn ids(records: &[&Property]) -> Vec<i64> {
        records.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Property> {
        vec![
            property(1, "Lakeview Cottage", "Nainital", true),
            property(2, "Lakeside Villa", "Udaipur", false),
            property(3, "Sea View", "Goa", true),
            property(4, "City Flat", "Mumbai", false),
            property(5, "Pool House", "Lake Town, Kolkata", true),
        ]
    }

    #[test]
    fn status_stage_keeps_matching_flags_in_order() {
        let records = sample();

        for status in StatusFilter::ALL {
            let out = status_stage(&records, status);
            match status.required_availability() {
                None => assert_eq!(ids(&out), vec![1, 2, 3, 4, 5]),
                Some(flag) => {
                    assert!(out.iter().all(|p| p.is_available == flag));
                    let expected: Vec<i64> = records
                        .iter()
                        .filter(|p| p.is_available == flag)
                        .map(|p| p.id)
                        .collect();
                    assert_eq!(ids(&out), expected);
                }
            }
        }
    }

    #[test]
    fn empty_search_is_a_no_op() {
        let records = sample();
        assert_eq!(ids(&search_stage(&records, "")), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_matches_title_or_location() {
        let records = sample();
        // "lake" hits two titles and one location
        assert_eq!(ids(&search_stage(&records, "lake")), vec![1, 2, 5]);
        assert_eq!(ids(&search_stage(&records, "mumbai")), vec![4]);
    }

    #[test]
    fn search_is_case_insensitive_on_both_sides() {
        let records = sample();
        let upper = search_stage(&records, "POOL");
        let lower = search_stage(&records, "pool");
        assert_eq!(ids(&upper), vec![5]);
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let records = vec![property(1, "ÉCOLE Apartments", "Pondichéry", true)];
        assert_eq!(ids(&search_stage(&records, "école")), vec![1]);
        assert_eq!(ids(&search_stage(&records, "PONDICHÉRY")), vec![1]);
    }

    #[test]
    fn search_ignores_amenities() {
        let mut records = vec![property(1, "Garden Flat", "Pune", true)];
        records[0].amenities = Some("Pool, Gym".to_string());
        assert!(search_stage(&records, "pool").is_empty());
    }

    #[test]
    fn whitespace_term_is_not_trimmed() {
        let records = vec![
            property(1, "Studio", "Delhi", true),
            property(2, "Sea View", "Goa", true),
        ];
        assert_eq!(ids(&search_stage(&records, " ")), vec![2]);
        assert!(search_stage(&records, "  ").is_empty());
    }

    #[test]
    fn search_is_idempotent() {
        let records = sample();
        for term in ["lake", "VIEW", " ", "", "zzz"] {
            let once = search_stage(&records, term);
            let twice = search_stage(once.iter().copied(), term);
            assert_eq!(ids(&once), ids(&twice), "term {:?}", term);
        }
    }

    #[test]
    fn stages_compose_conjunctively() {
        let records = vec![
            property(1, "Lakeview", "Nainital", true),
            property(2, "Lakeside", "Udaipur", false),
        ];
        let state = FilterState::new(StatusFilter::Available, "lake");
        assert_eq!(ids(&apply(&records, &state)), vec![1]);
    }

    #[test]
    fn apply_is_deterministic() {
        let records = sample();
        let state = FilterState::new(StatusFilter::All, "a");
        assert_eq!(apply(&records, &state), apply(&records, &state));
    }

    #[test]
    fn unavailable_without_search() {
        let records = vec![
            property(1, "Sea View", "Goa", true),
            property(2, "City Flat", "Mumbai", false),
        ];
        let state = FilterState::new(StatusFilter::Unavailable, "");
        assert_eq!(ids(&apply(&records, &state)), vec![2]);
    }
}
