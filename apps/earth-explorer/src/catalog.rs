//! Satellite records and the two-part catalog they live in.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A single spreadsheet cell after parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl CellValue {
    /// Empty text renders as missing.
    fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.trim().is_empty())
    }
}

/// One data row: header name → cell. Empty cells are absent.
pub type Row = BTreeMap<String, CellValue>;

/// Which data file a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SatelliteKind {
    Comet,
    Manmade,
}

impl SatelliteKind {
    pub fn label(self) -> &'static str {
        match self {
            SatelliteKind::Comet => "comet",
            SatelliteKind::Manmade => "manmade",
        }
    }
}

/// Column holding the record's identifying name.
pub const NAME_COLUMN: &str = "Satellite Name";

fn take(row: &mut Row, column: &str) -> Option<CellValue> {
    row.remove(column).filter(|v| !v.is_blank())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CometRecord {
    pub name: Option<CellValue>,
    pub discovered: Option<CellValue>,
    pub diameter: Option<CellValue>,
    pub mass: Option<CellValue>,
    pub close_approach: Option<CellValue>,
    pub impact_risk: Option<CellValue>,
    pub mission: Option<CellValue>,
    pub facts: Option<CellValue>,
    pub composition: Option<CellValue>,
}

impl CometRecord {
    pub fn from_row(mut row: Row) -> Self {
        Self {
            name: take(&mut row, NAME_COLUMN),
            discovered: take(&mut row, "Discovered"),
            diameter: take(&mut row, "Diameter"),
            mass: take(&mut row, "Mass"),
            close_approach: take(&mut row, "Close Approach"),
            impact_risk: take(&mut row, "Impact Risk"),
            mission: take(&mut row, "Mission"),
            facts: take(&mut row, "Facts"),
            composition: take(&mut row, "Composition"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ManmadeRecord {
    pub name: Option<CellValue>,
    pub launched: Option<CellValue>,
    pub diameter: Option<CellValue>,
    pub mass: Option<CellValue>,
    pub activity: Option<CellValue>,
    pub crew: Option<CellValue>,
    pub facts: Option<CellValue>,
    pub launch_purpose: Option<CellValue>,
}

impl ManmadeRecord {
    pub fn from_row(mut row: Row) -> Self {
        Self {
            name: take(&mut row, NAME_COLUMN),
            launched: take(&mut row, "Launched"),
            diameter: take(&mut row, "Diameter"),
            mass: take(&mut row, "Mass"),
            activity: take(&mut row, "Activity"),
            crew: take(&mut row, "Crew"),
            facts: take(&mut row, "Facts"),
            launch_purpose: take(&mut row, "Why was it launched?"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SatelliteRecord {
    Comet(CometRecord),
    Manmade(ManmadeRecord),
}

impl SatelliteRecord {
    pub fn from_row(kind: SatelliteKind, row: Row) -> Self {
        match kind {
            SatelliteKind::Comet => SatelliteRecord::Comet(CometRecord::from_row(row)),
            SatelliteKind::Manmade => SatelliteRecord::Manmade(ManmadeRecord::from_row(row)),
        }
    }

    pub fn kind(&self) -> SatelliteKind {
        match self {
            SatelliteRecord::Comet(_) => SatelliteKind::Comet,
            SatelliteRecord::Manmade(_) => SatelliteKind::Manmade,
        }
    }

    /// The display name, or `None` when the name cell is missing or blank.
    pub fn name(&self) -> Option<String> {
        let cell = match self {
            SatelliteRecord::Comet(r) => r.name.as_ref(),
            SatelliteRecord::Manmade(r) => r.name.as_ref(),
        }?;
        let name = cell.to_string();
        if name.trim().is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Both record collections, in source row order.
///
/// Each half is filled once by its own load and stays empty if that load
/// fails.
#[derive(Debug, Default)]
pub struct Catalog {
    comets: Vec<SatelliteRecord>,
    manmade: Vec<SatelliteRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(comets: Vec<SatelliteRecord>, manmade: Vec<SatelliteRecord>) -> Self {
        Self { comets, manmade }
    }

    /// Store one half. A half that is already filled is kept.
    pub fn install(&mut self, kind: SatelliteKind, records: Vec<SatelliteRecord>) -> bool {
        let slot = match kind {
            SatelliteKind::Comet => &mut self.comets,
            SatelliteKind::Manmade => &mut self.manmade,
        };
        if !slot.is_empty() {
            log::warn!("{} data already loaded, ignoring reload", kind.label());
            return false;
        }
        *slot = records;
        true
    }

    pub fn comets(&self) -> &[SatelliteRecord] {
        &self.comets
    }

    pub fn manmade(&self) -> &[SatelliteRecord] {
        &self.manmade
    }

    /// Comet records first, then manmade, each in source order.
    pub fn iter(&self) -> impl Iterator<Item = &SatelliteRecord> {
        self.comets.iter().chain(self.manmade.iter())
    }

    pub fn comet_count(&self) -> usize {
        self.comets.len()
    }

    pub fn manmade_count(&self) -> usize {
        self.manmade.len()
    }

    pub fn len(&self) -> usize {
        self.comets.len() + self.manmade.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
pub(crate) fn named(kind: SatelliteKind, name: &str) -> SatelliteRecord {
    let mut row = Row::new();
    row.insert(NAME_COLUMN.to_string(), CellValue::Text(name.to_string()));
    SatelliteRecord::from_row(kind, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(CellValue::Number(1990.0).to_string(), "1990");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Text("11 km".into()).to_string(), "11 km");
    }

    #[test]
    fn manmade_row_maps_columns() {
        let mut row = Row::new();
        row.insert("Satellite Name".into(), CellValue::Text("Hubble Telescope".into()));
        row.insert("Launched".into(), CellValue::Number(1990.0));
        row.insert("Why was it launched?".into(), CellValue::Text("Astronomy".into()));
        row.insert("Unrelated".into(), CellValue::Text("x".into()));

        let record = SatelliteRecord::from_row(SatelliteKind::Manmade, row);
        assert_eq!(record.kind(), SatelliteKind::Manmade);
        assert_eq!(record.name().as_deref(), Some("Hubble Telescope"));
        match record {
            SatelliteRecord::Manmade(m) => {
                assert_eq!(m.launched, Some(CellValue::Number(1990.0)));
                assert_eq!(m.launch_purpose, Some(CellValue::Text("Astronomy".into())));
                assert_eq!(m.crew, None);
            }
            other => panic!("expected manmade record, got {:?}", other),
        }
    }

    #[test]
    fn blank_name_is_none() {
        let record = named(SatelliteKind::Comet, "   ");
        assert_eq!(record.name(), None);
        let record = SatelliteRecord::from_row(SatelliteKind::Comet, Row::new());
        assert_eq!(record.name(), None);
    }

    #[test]
    fn numeric_name_is_stringified() {
        let mut row = Row::new();
        row.insert(NAME_COLUMN.into(), CellValue::Number(433.0));
        let record = SatelliteRecord::from_row(SatelliteKind::Comet, row);
        assert_eq!(record.name().as_deref(), Some("433"));
    }

    #[test]
    fn install_fills_each_half_once() {
        let mut catalog = Catalog::new();
        assert!(catalog.install(SatelliteKind::Manmade, vec![named(SatelliteKind::Manmade, "ISS")]));
        assert!(!catalog.install(SatelliteKind::Manmade, vec![named(SatelliteKind::Manmade, "Mir")]));
        assert_eq!(catalog.manmade_count(), 1);
        assert_eq!(catalog.comet_count(), 0);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn iteration_puts_comets_first() {
        let catalog = Catalog::with_records(
            vec![named(SatelliteKind::Comet, "Halley")],
            vec![named(SatelliteKind::Manmade, "Hubble Telescope")],
        );
        let kinds: Vec<SatelliteKind> = catalog.iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, vec![SatelliteKind::Comet, SatelliteKind::Manmade]);
    }
}
