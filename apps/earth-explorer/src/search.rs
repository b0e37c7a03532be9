use crate::catalog::{Catalog, SatelliteKind, SatelliteRecord};

/// A record found by a search, with the collection it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteMatch<'a> {
    pub record: &'a SatelliteRecord,
    pub kind: SatelliteKind,
}

impl<'a> SatelliteMatch<'a> {
    fn of(record: &'a SatelliteRecord) -> Self {
        Self { record, kind: record.kind() }
    }
}

/// Case-insensitive name equality, comets before manmade.
/// Unnamed records never match.
pub fn find_exact<'a>(query: &str, catalog: &'a Catalog) -> Option<SatelliteMatch<'a>> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .find(|r| r.name().is_some_and(|name| name.to_lowercase() == query))
        .map(SatelliteMatch::of)
}

/// Case-insensitive substring match for autocomplete.
///
/// An empty query yields nothing. Comet matches come before manmade matches,
/// each in source order.
pub fn find_suggestions<'a>(query: &str, catalog: &'a Catalog) -> Vec<SatelliteMatch<'a>> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|r| r.name().is_some_and(|name| name.to_lowercase().contains(&query)))
        .map(SatelliteMatch::of)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::named;

    fn sample() -> Catalog {
        Catalog::with_records(
            vec![named(SatelliteKind::Comet, "Halley")],
            vec![named(SatelliteKind::Manmade, "Hubble Telescope")],
        )
    }

    fn names(matches: &[SatelliteMatch<'_>]) -> Vec<String> {
        matches.iter().filter_map(|m| m.record.name()).collect()
    }

    #[test]
    fn halley_and_hubble() {
        let catalog = sample();

        let hub = find_suggestions("hub", &catalog);
        assert_eq!(names(&hub), vec!["Hubble Telescope"]);
        assert_eq!(hub[0].kind, SatelliteKind::Manmade);

        let halley = find_exact("Halley", &catalog).unwrap();
        assert_eq!(halley.kind, SatelliteKind::Comet);
        assert_eq!(halley.record.name().as_deref(), Some("Halley"));

        assert!(find_exact("Voyager", &catalog).is_none());
    }

    #[test]
    fn exact_match_ignores_case() {
        let catalog = sample();
        let m = find_exact("hubble telescope", &catalog).unwrap();
        assert_eq!(m.record.name().as_deref(), Some("Hubble Telescope"));
        assert!(find_exact("hubble", &catalog).is_none());
    }

    #[test]
    fn comet_wins_name_collision() {
        let catalog = Catalog::with_records(
            vec![named(SatelliteKind::Comet, "Rosetta")],
            vec![named(SatelliteKind::Manmade, "ROSETTA")],
        );
        assert_eq!(find_exact("rosetta", &catalog).unwrap().kind, SatelliteKind::Comet);
    }

    #[test]
    fn empty_query_suggests_nothing() {
        assert!(find_suggestions("", &sample()).is_empty());
    }

    #[test]
    fn suggestions_keep_collection_then_source_order() {
        let catalog = Catalog::with_records(
            vec![
                named(SatelliteKind::Comet, "Tempel 1"),
                named(SatelliteKind::Comet, "Encke"),
                named(SatelliteKind::Comet, "Tempel-Tuttle"),
            ],
            vec![
                named(SatelliteKind::Manmade, "Telstar"),
                named(SatelliteKind::Manmade, "Deep Impact"),
            ],
        );
        let found = find_suggestions("TE", &catalog);
        assert_eq!(names(&found), vec!["Tempel 1", "Tempel-Tuttle", "Telstar"]);
        assert!(found.iter().all(|m| m.record.name().unwrap().to_lowercase().contains("te")));
    }

    #[test]
    fn unnamed_records_are_skipped() {
        let catalog = Catalog::with_records(
            vec![named(SatelliteKind::Comet, ""), named(SatelliteKind::Comet, "Borrelly")],
            vec![],
        );
        assert_eq!(names(&find_suggestions("r", &catalog)), vec!["Borrelly"]);
        assert!(find_exact("", &catalog).is_none());
    }

    #[test]
    fn repeated_queries_agree() {
        let catalog = sample();
        assert_eq!(find_suggestions("h", &catalog), find_suggestions("h", &catalog));
        assert_eq!(find_exact("Halley", &catalog), find_exact("Halley", &catalog));
    }

    #[test]
    fn missing_manmade_half_is_not_an_error() {
        let mut catalog = Catalog::new();
        catalog.install(SatelliteKind::Comet, vec![named(SatelliteKind::Comet, "Halley")]);

        assert!(find_exact("Halley", &catalog).is_some());
        assert_eq!(names(&find_suggestions("hal", &catalog)), vec!["Halley"]);
        assert!(find_exact("Hubble Telescope", &catalog).is_none());
        assert!(find_suggestions("hub", &catalog).is_empty());
    }
}
