//! Dataset loading: fetch a spreadsheet, parse its first sheet into records.
//!
//! The two datasets load as independent tasks. A failure in one is logged
//! and leaves only that half of the catalog empty.

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx, XlsxError};
use orbit_web::{fetch_bytes, FetchError};
use thiserror::Error;

use crate::catalog::{CellValue, Row, SatelliteKind, SatelliteRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("unreadable workbook: {0}")]
    Workbook(#[from] XlsxError),
    #[error("workbook has no sheets")]
    NoSheet,
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(CellValue::Text(s.clone()))
            }
        }
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
    }
}

/// Map a sheet to header→cell rows.
///
/// The first row with any content is the header. Columns without a header
/// are dropped, as are rows with no remaining cells.
pub fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let mut rows = range.rows().skip_while(|r| r.iter().all(|c| cell_value(c).is_none()));

    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let header: Vec<Option<String>> = header
        .iter()
        .map(|c| cell_value(c).map(|v| v.to_string().trim().to_string()))
        .collect();

    rows.filter_map(|cells| {
        let row: Row = header
            .iter()
            .zip(cells)
            .filter_map(|(name, cell)| Some((name.clone()?, cell_value(cell)?)))
            .collect();
        if row.is_empty() {
            None
        } else {
            Some(row)
        }
    })
    .collect()
}

/// Parse an .xlsx blob. Only the first sheet is read.
pub fn parse_workbook(bytes: Vec<u8>, kind: SatelliteKind) -> Result<Vec<SatelliteRecord>, LoadError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(LoadError::NoSheet)??;
    Ok(rows_from_range(&range)
        .into_iter()
        .map(|row| SatelliteRecord::from_row(kind, row))
        .collect())
}

/// Fetch and parse one dataset.
pub async fn load_dataset(url: &str, kind: SatelliteKind) -> Result<Vec<SatelliteRecord>, LoadError> {
    let bytes = fetch_bytes(url).await?;
    parse_workbook(bytes, kind)
}

/// Log the result of one load and hand successful records to `install`.
/// Returns whether anything was installed.
pub fn settle(
    kind: SatelliteKind,
    result: Result<Vec<SatelliteRecord>, LoadError>,
    install: impl FnOnce(SatelliteKind, Vec<SatelliteRecord>),
) -> bool {
    match result {
        Ok(records) => {
            let preview: Vec<String> = records.iter().take(5).filter_map(|r| r.name()).collect();
            log::info!("{} satellite data loaded: {:?}", kind.label(), preview);
            log::info!("Total {} satellites loaded: {}", kind.label(), records.len());
            install(kind, records);
            true
        }
        Err(err) => {
            log::error!("Error loading {} satellite data: {}", kind.label(), err);
            false
        }
    }
}

/// Start one independent load per source. Fire and forget: nothing waits
/// on these, and there is no retry.
pub fn load_catalog<F>(sources: Vec<(SatelliteKind, String)>, install: F)
where
    F: Fn(SatelliteKind, Vec<SatelliteRecord>) + Clone + 'static,
{
    for (kind, url) in sources {
        let install = install.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = load_dataset(&url, kind).await;
            settle(kind, result, install);
        });
    }
}
