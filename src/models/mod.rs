//! Vessel records, their column definitions and the row sources.

pub mod trend;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fmt::capitalize_words;
use crate::table::{CellValue, ColumnDef, RowId, TableRow};

/// Error types that can occur while loading vessel data.
#[derive(Debug, Clone)]
pub enum DataError {
    /// Data file could not be read.
    Io(String),
    /// Data file is not a JSON array of vessels.
    Parse(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(msg) => write!(f, "I/O error: {}", msg),
            DataError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}

/// Pool participant that operates a vessel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub participant_name: Option<String>,
}

/// One vessel row. Every descriptive field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: u64,
    #[serde(default)]
    pub vessel_name: Option<String>,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    pub participant: Participant,
    #[serde(default)]
    pub speed_percentage: Option<f64>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub earnings: Option<f64>,
}

impl TableRow for Vessel {
    fn id(&self) -> RowId {
        self.id
    }
}

fn opt_f64(value: Option<f64>, wrap: fn(f64) -> CellValue) -> CellValue {
    value.map_or(CellValue::Missing, wrap)
}

/// Column set of the vessel table, in display order.
pub fn vessel_columns() -> Vec<ColumnDef<Vessel>> {
    vec![
        ColumnDef::new("vessels", "Vessels", |v: &Vessel| match v.vessel_name.as_deref() {
            Some(name) if !name.is_empty() => CellValue::Text(capitalize_words(Some(name))),
            _ => CellValue::Missing,
        })
        .width(24),
        ColumnDef::new("segment", "Segment", |v: &Vessel| CellValue::text(v.segment.clone())),
        ColumnDef::new("pool", "Pool", |v: &Vessel| CellValue::text(v.pool.clone())),
        ColumnDef::new("participant", "Participants", |v: &Vessel| {
            CellValue::text(v.participant.participant_name.clone())
        }),
        ColumnDef::new("speed Percentage", "Speed Percentage", |v: &Vessel| {
            opt_f64(v.speed_percentage, CellValue::Percent)
        })
        .width(18),
        ColumnDef::new("age", "Vessel Age (Yrs)", |v: &Vessel| {
            v.age.map_or(CellValue::Missing, |a| CellValue::Integer(i64::from(a)))
        }),
        ColumnDef::new("earnings", "Earnings", |v: &Vessel| opt_f64(v.earnings, CellValue::Money)),
    ]
}

/// Reads a JSON array of vessels. Duplicate ids are rejected since
/// selection is keyed by id.
pub fn load_vessels(path: &Path) -> Result<Vec<Vessel>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|e| DataError::Io(format!("{}: {}", path.display(), e)))?;
    let vessels: Vec<Vessel> =
        serde_json::from_str(&text).map_err(|e| DataError::Parse(format!("{}: {}", path.display(), e)))?;

    let mut seen = HashSet::new();
    for v in &vessels {
        if !seen.insert(v.id) {
            return Err(DataError::Parse(format!("{}: duplicate vessel id {}", path.display(), v.id)));
        }
    }

    debug!(path = %path.display(), count = vessels.len(), "loaded vessels");
    Ok(vessels)
}

/// Where the dashboard reads its rows from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VesselSource {
    /// Built-in [`mock_fleet`].
    Mock,
    /// JSON array of vessels, read again on every reload.
    File(PathBuf),
}

impl VesselSource {
    pub fn load(&self) -> Result<Vec<Vessel>, DataError> {
        match self {
            Self::Mock => Ok(mock_fleet()),
            Self::File(path) => load_vessels(path),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn vessel(
    id: u64,
    name: Option<&str>,
    segment: Option<&str>,
    pool: Option<&str>,
    participant: Option<&str>,
    speed: Option<f64>,
    age: Option<u32>,
    earnings: Option<f64>,
) -> Vessel {
    Vessel {
        id,
        vessel_name: name.map(str::to_string),
        segment: segment.map(str::to_string),
        pool: pool.map(str::to_string),
        participant: Participant {
            participant_name: participant.map(str::to_string),
        },
        speed_percentage: speed,
        age,
        earnings,
    }
}

/// Built-in fleet used when no data file is given.
pub fn mock_fleet() -> Vec<Vessel> {
    vec![
        vessel(1, Some("HAFNIA LEO"), Some("LR2"), Some("LR2-A-Pool"), Some("Hafnia"), Some(92.5), Some(7), Some(55303.0)),
        vessel(2, Some("nord star"), Some("LR2"), Some("LR2-A-Pool"), Some("Norden"), Some(85.0), Some(11), Some(45303.0)),
        vessel(3, Some("Ocean Crest"), Some("MR"), Some("MR-Pool"), Some("Scorpio"), Some(78.0), Some(4), Some(14043.0)),
        vessel(4, Some("BW Lynx"), Some("LR1"), Some("LR1-Pool"), Some("BW Tankers"), Some(88.5), Some(9), Some(24043.0)),
        vessel(5, Some("Torm Helene"), Some("MR"), Some("MR-Pool"), Some("Torm"), Some(81.0), Some(13), Some(10052.0)),
        vessel(6, Some("Stena Polaris"), Some("LR2"), None, Some("Stena Bulk"), Some(90.0), Some(6), Some(30052.0)),
        vessel(7, Some("Maersk Cayenne"), Some("LR1"), Some("LR1-Pool"), None, Some(76.5), Some(15), Some(40541.0)),
        vessel(8, None, Some("MR"), Some("MR-Pool"), Some("Ardmore"), Some(83.0), Some(8), Some(10541.0)),
        vessel(9, Some("Hafnia Lotte"), Some("LR2"), Some("LR2-A-Pool"), Some("Hafnia"), None, Some(5), Some(15624.0)),
        vessel(10, Some("Nordic Aurora"), Some("LR2"), Some("LR2-A-Pool"), Some("Norden"), Some(95.0), None, Some(86565.0)),
        vessel(11, Some("Alpine Minute"), Some("MR"), Some("MR-Pool"), Some("Scorpio"), Some(79.5), Some(10), None),
        vessel(12, Some("Pacific Jewel"), None, Some("LR1-Pool"), Some("BW Tankers"), Some(87.0), Some(3), Some(55624.0)),
        vessel(13, Some("Atlantic Breeze"), Some("LR1"), Some("LR1-Pool"), Some("Torm"), Some(84.0), Some(12), Some(26565.0)),
        vessel(14, Some("STI Gramercy"), Some("MR"), Some("MR-Pool"), Some("Scorpio"), Some(91.0), Some(6), Some(-1500.5)),
        vessel(15, Some("Hafnia Lise"), Some("LR2"), Some("LR2-A-Pool"), Some("Hafnia"), Some(86.5), Some(9), Some(1234567.0)),
        vessel(16, Some("Norient Saturn"), Some("LR2"), Some("LR2-B-Pool"), Some("Norden"), Some(82.0), Some(14), Some(38210.0)),
        vessel(17, Some("Seaways Hatteras"), Some("MR"), None, None, Some(77.0), Some(16), Some(12890.75)),
        vessel(18, Some("Celsius Riga"), Some("LR1"), Some("LR1-Pool"), Some("Celsius"), Some(93.5), Some(2), Some(47300.0)),
        vessel(19, Some("Ardmore Seavaliant"), Some("MR"), Some("MR-Pool"), Some("Ardmore"), Some(80.0), Some(11), Some(21456.0)),
        vessel(20, Some("Stena Paris"), Some("LR2"), Some("LR2-B-Pool"), Some("Stena Bulk"), Some(89.0), Some(7), Some(62750.0)),
        vessel(21, Some("Torm Kristina"), Some("LR2"), Some("LR2-B-Pool"), Some("Torm"), Some(85.5), Some(10), Some(33120.0)),
        vessel(22, Some("Hafnia Andromeda"), Some("MR"), Some("MR-Pool"), Some("Hafnia"), Some(94.0), Some(1), Some(71230.0)),
        vessel(23, Some("BW Puma"), Some("LR1"), Some("LR1-Pool"), Some("BW Tankers"), None, Some(17), Some(9800.0)),
        vessel(24, Some("Nord Gainer"), Some("MR"), Some("MR-Pool"), Some("Norden"), Some(83.5), Some(5), Some(0.0)),
        vessel(25, Some("Scorpio Mercury"), Some("LR2"), Some("LR2-A-Pool"), Some("Scorpio"), Some(88.0), Some(8), Some(52480.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_fleet_has_unique_ids() {
        let fleet = mock_fleet();
        assert_eq!(fleet.len(), 25);
        let ids: HashSet<u64> = fleet.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn columns_render_placeholders() {
        let columns = vessel_columns();
        let fleet = mock_fleet();
        let no_name = fleet.iter().find(|v| v.id == 8).unwrap();
        let no_earnings = fleet.iter().find(|v| v.id == 11).unwrap();

        assert_eq!(columns[0].render(no_name), "--");
        assert_eq!(columns[6].render(no_earnings), "--");
        assert_eq!(columns[0].render(&fleet[0]), "Hafnia Leo");
        assert_eq!(columns[4].render(&fleet[0]), "92.5%");
        assert_eq!(columns[6].render(&fleet[1]), "$45,303.00");
    }

    #[test]
    fn column_ids_are_unique() {
        let columns = vessel_columns();
        let ids: HashSet<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), columns.len());
        assert_eq!(columns[0].width, Some(24));
    }

    #[test]
    fn load_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "vesselName": "Hafnia Leo", "participant": {"participantName": "Hafnia"}, "earnings": 100.5},
                {"id": 2, "speedPercentage": 80}
            ]"#,
        )
        .unwrap();

        let vessels = load_vessels(&path).unwrap();
        assert_eq!(vessels.len(), 2);
        assert_eq!(vessels[0].participant.participant_name.as_deref(), Some("Hafnia"));
        assert_eq!(vessels[1].vessel_name, None);
        assert_eq!(vessels[1].speed_percentage, Some(80.0));
    }

    #[test]
    fn load_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_vessels(&dir.path().join("missing.json")), Err(DataError::Io(_))));

        let dup = dir.path().join("dup.json");
        std::fs::write(&dup, r#"[{"id": 1}, {"id": 1}]"#).unwrap();
        let err = load_vessels(&dup).unwrap_err();
        assert!(err.to_string().contains("duplicate vessel id 1"));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"id": 1}"#).unwrap();
        assert!(matches!(load_vessels(&bad), Err(DataError::Parse(_))));
    }

    #[test]
    fn source_reloads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.json");
        std::fs::write(&path, r#"[{"id": 1}]"#).unwrap();

        let source = VesselSource::File(path.clone());
        assert_eq!(source.load().unwrap().len(), 1);
        std::fs::write(&path, r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(source.load().unwrap().len(), 2);

        assert_eq!(VesselSource::Mock.load().unwrap().len(), 25);
    }
}
