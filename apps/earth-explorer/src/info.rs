use serde::Serialize;

use crate::catalog::{CellValue, SatelliteRecord};

/// Shown for any field the record does not carry.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

/// Where the host finds the record's picture. The host swaps in
/// `fallback` if `src` fails to load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub fallback: String,
    pub alt: String,
}

/// Image directory and fallback file name.
#[derive(Debug, Clone)]
pub struct ImageSources {
    pub dir: String,
    pub fallback: String,
}

impl Default for ImageSources {
    fn default() -> Self {
        Self {
            dir: "./images".to_string(),
            fallback: "default-satellite.jpg".to_string(),
        }
    }
}

impl ImageSources {
    fn path(&self, file: &str) -> String {
        format!("{}/{}", self.dir.trim_end_matches('/'), file)
    }
}

/// Everything the host needs to fill the info panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoPanel {
    pub heading: &'static str,
    pub fields: Vec<InfoField>,
    pub image: ImageRef,
}

fn field(label: &'static str, value: &Option<CellValue>) -> InfoField {
    InfoField {
        label,
        value: value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

/// Each whitespace run becomes `_`, then `.jpg` is appended.
pub fn image_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out.push_str(".jpg");
    out
}

impl InfoPanel {
    pub fn for_record(record: &SatelliteRecord, images: &ImageSources) -> Self {
        let (heading, fields) = match record {
            SatelliteRecord::Comet(c) => (
                "Comet Satellite Data",
                vec![
                    field("Name", &c.name),
                    field("Discovered", &c.discovered),
                    field("Diameter", &c.diameter),
                    field("Mass", &c.mass),
                    field("Close Approach", &c.close_approach),
                    field("Impact Risk", &c.impact_risk),
                    field("Mission", &c.mission),
                    field("Facts", &c.facts),
                    field("Composition", &c.composition),
                ],
            ),
            SatelliteRecord::Manmade(m) => (
                "Manmade Satellite Data",
                vec![
                    field("Satellite Name", &m.name),
                    field("Launched", &m.launched),
                    field("Diameter", &m.diameter),
                    field("Mass", &m.mass),
                    field("Activity", &m.activity),
                    field("Crew", &m.crew),
                    field("Facts", &m.facts),
                    field("Why was it launched?", &m.launch_purpose),
                ],
            ),
        };

        let name = record.name().unwrap_or_default();
        let image = ImageRef {
            src: images.path(&image_file_name(&name)),
            fallback: images.path(&images.fallback),
            alt: name,
        };
        log::debug!("Attempting to load image: {}", image.src);

        Self { heading, fields, image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{named, Row, SatelliteKind, NAME_COLUMN};

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(image_file_name("Hubble Telescope"), "Hubble_Telescope.jpg");
        assert_eq!(image_file_name("Comet  67P\tC-G"), "Comet_67P_C-G.jpg");
        assert_eq!(image_file_name("ISS"), "ISS.jpg");
    }

    #[test]
    fn comet_panel_uses_placeholders() {
        let mut row = Row::new();
        row.insert(NAME_COLUMN.into(), CellValue::Text("Halley".into()));
        row.insert("Discovered".into(), CellValue::Number(1758.0));
        let record = SatelliteRecord::from_row(SatelliteKind::Comet, row);

        let panel = InfoPanel::for_record(&record, &ImageSources::default());
        assert_eq!(panel.heading, "Comet Satellite Data");
        assert_eq!(panel.fields.len(), 9);
        assert_eq!(panel.fields[0], InfoField { label: "Name", value: "Halley".into() });
        assert_eq!(panel.fields[1].value, "1758");
        assert!(panel.fields[2..].iter().all(|f| f.value == PLACEHOLDER));
        assert_eq!(panel.image.src, "./images/Halley.jpg");
        assert_eq!(panel.image.fallback, "./images/default-satellite.jpg");
    }

    #[test]
    fn manmade_panel_labels() {
        let record = named(SatelliteKind::Manmade, "Hubble Telescope");
        let images = ImageSources { dir: "pics/".into(), fallback: "none.jpg".into() };
        let panel = InfoPanel::for_record(&record, &images);
        assert_eq!(panel.heading, "Manmade Satellite Data");
        let labels: Vec<&str> = panel.fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Satellite Name", "Launched", "Diameter", "Mass", "Activity", "Crew", "Facts", "Why was it launched?"]
        );
        assert_eq!(panel.image.src, "pics/Hubble_Telescope.jpg");
        assert_eq!(panel.image.fallback, "pics/none.jpg");
        assert_eq!(panel.image.alt, "Hubble Telescope");
    }
}
