use serde::Serialize;

use crate::catalog::{Catalog, SatelliteKind};
use crate::info::{ImageSources, InfoPanel};
use crate::search::{find_exact, find_suggestions};

pub const NOT_FOUND_MESSAGE: &str = "No satellite found with that name.";

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub kind: SatelliteKind,
}

/// Result of submitting a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { kind: SatelliteKind, panel: InfoPanel },
    NotFound { message: &'static str },
}

/// Visible state of the search UI: autocomplete list, info panel, and
/// whether the search box has moved to the top of the page.
#[derive(Debug, Default)]
pub struct SearchBox {
    pub autocomplete_visible: bool,
    pub suggestions: Vec<Suggestion>,
    pub info_visible: bool,
    pub pinned_top: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute suggestions for the current input text.
    pub fn on_input(&mut self, query: &str, catalog: &Catalog) -> &[Suggestion] {
        log::debug!(
            "input {:?}: {} comet / {} manmade loaded",
            query,
            catalog.comet_count(),
            catalog.manmade_count()
        );
        self.suggestions = if catalog.is_empty() {
            Vec::new()
        } else {
            find_suggestions(query, catalog)
                .into_iter()
                .filter_map(|m| Some(Suggestion { name: m.record.name()?, kind: m.kind }))
                .collect()
        };
        self.autocomplete_visible = !self.suggestions.is_empty();
        &self.suggestions
    }

    /// Look up the trimmed query and show or hide the info panel.
    pub fn on_submit(&mut self, raw_query: &str, catalog: &Catalog, images: &ImageSources) -> SearchOutcome {
        let query = raw_query.trim();
        log::debug!("search {:?}", query);
        match find_exact(query, catalog) {
            Some(found) => {
                self.pinned_top = true;
                self.info_visible = true;
                SearchOutcome::Found {
                    kind: found.kind,
                    panel: InfoPanel::for_record(found.record, images),
                }
            }
            None => {
                self.info_visible = false;
                SearchOutcome::NotFound { message: NOT_FOUND_MESSAGE }
            }
        }
    }

    /// A suggestion was chosen: close the list and search for it.
    pub fn on_pick(&mut self, name: &str, catalog: &Catalog, images: &ImageSources) -> SearchOutcome {
        self.autocomplete_visible = false;
        self.on_submit(name, catalog, images)
    }

    /// A click landed outside both the input and the list.
    pub fn on_outside_click(&mut self) {
        self.autocomplete_visible = false;
    }
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

    #[test]
    fn typing_shows_and_hides_list() {
        let catalog = sample();
        let mut sb = SearchBox::new();

        let found = sb.on_input("hub", &catalog).to_vec();
        assert_eq!(found, vec![Suggestion { name: "Hubble Telescope".into(), kind: SatelliteKind::Manmade }]);
        assert!(sb.autocomplete_visible);

        sb.on_input("", &catalog);
        assert!(!sb.autocomplete_visible);
        assert!(sb.suggestions.is_empty());

        sb.on_input("zzz", &catalog);
        assert!(!sb.autocomplete_visible);
    }

    #[test]
    fn nothing_suggested_before_load() {
        let mut sb = SearchBox::new();
        assert!(sb.on_input("h", &Catalog::new()).is_empty());
        assert!(!sb.autocomplete_visible);
    }

    #[test]
    fn submit_found_pins_box() {
        let catalog = sample();
        let mut sb = SearchBox::new();
        match sb.on_submit("  halley ", &catalog, &ImageSources::default()) {
            SearchOutcome::Found { kind, panel } => {
                assert_eq!(kind, SatelliteKind::Comet);
                assert_eq!(panel.fields[0].value, "Halley");
            }
            other => panic!("expected a match, got {:?}", other),
        }
        assert!(sb.info_visible);
        assert!(sb.pinned_top);
    }

    #[test]
    fn submit_miss_hides_panel() {
        let catalog = sample();
        let mut sb = SearchBox::new();
        sb.on_submit("Halley", &catalog, &ImageSources::default());
        let outcome = sb.on_submit("Voyager", &catalog, &ImageSources::default());
        assert_eq!(outcome, SearchOutcome::NotFound { message: NOT_FOUND_MESSAGE });
        assert!(!sb.info_visible);
        assert!(sb.pinned_top);
    }

    #[test]
    fn pick_closes_list_and_searches() {
        let catalog = sample();
        let mut sb = SearchBox::new();
        sb.on_input("hub", &catalog);
        let outcome = sb.on_pick("Hubble Telescope", &catalog, &ImageSources::default());
        assert!(matches!(outcome, SearchOutcome::Found { kind: SatelliteKind::Manmade, .. }));
        assert!(!sb.autocomplete_visible);
    }

    #[test]
    fn outside_click_dismisses() {
        let catalog = sample();
        let mut sb = SearchBox::new();
        sb.on_input("h", &catalog);
        assert!(sb.autocomplete_visible);
        sb.on_outside_click();
        assert!(!sb.autocomplete_visible);
    }

    #[test]
    fn outcome_json_is_tagged() {
        let json = serde_json::to_string(&SearchOutcome::NotFound { message: NOT_FOUND_MESSAGE }).unwrap();
        assert_eq!(json, r#"{"status":"not_found","message":"No satellite found with that name."}"#);
    }
}
