//! Initial network descriptions.
//!
//! Two shapes are accepted, both as a top-level list:
//!
//! * device records, as produced by the state display
//!   (`component_id`, `component_name`, `row`, `column`, `points`, `connected_to`, `src`);
//! * path records, `{ from, to, path: "x,y → x,y" }`, one link per record.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::catalog::{self, DeviceTemplate};
use crate::device::{DEFAULT_LEVEL, DeviceId, PlacedDevice};
use crate::error::LoadError;
use crate::grid::GridPoint;
use crate::network::Network;

/// Separator between the two ends of a path.
const ARROW: &str = "→";

/// A device id as written in a description: text, or a bare number from
/// counter-based editors. Both become the same string id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl From<RecordId> for DeviceId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(s) => DeviceId::from(s),
            RecordId::Number(n) => DeviceId::from(n.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Missing or empty ids are replaced with a fresh one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<RecordId>,
    pub component_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub row: i64,
    pub column: i64,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub connected_to: Vec<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    pub from: String,
    pub to: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialConfig {
    Components(Vec<DeviceRecord>),
    Paths(Vec<PathRecord>),
}

/// Parse `"x,y → x,y"` into its two end points.
///
/// Returns `None` if the text is malformed or a point is off the grid.
pub fn parse_path(text: &str) -> Option<(GridPoint, GridPoint)> {
    let (from, to) = text.split_once(ARROW)?;
    Some((parse_point(from)?, parse_point(to)?))
}

/// Parse `x,y` into a grid point.
fn parse_point(s: &str) -> Option<GridPoint> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return None;
    }
    let x: i64 = parts[0].trim().parse().ok()?;
    let y: i64 = parts[1].trim().parse().ok()?;
    GridPoint::new(x, y)
}

impl InitialConfig {
    /// Parse a JSON list. Only a document that is not a list is an error;
    /// individual records that do not fit are skipped with a warning.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let values: Vec<Value> = serde_json::from_str(text)?;
        Ok(Self::from_values(values))
    }

    /// Parse a YAML list, with the same per-record leniency as [`InitialConfig::from_json`].
    pub fn from_yaml(text: &str) -> Result<Self, LoadError> {
        let values: Vec<Value> = serde_yaml::from_str(text)?;
        Ok(Self::from_values(values))
    }

    /// Sort raw records into one of the two shapes. A list is read as path
    /// records when any entry carries a `path` key.
    fn from_values(values: Vec<Value>) -> Self {
        let is_paths = values.iter().any(|v| v.get("path").is_some());
        if is_paths {
            Self::Paths(convert_each(values, "path"))
        } else {
            Self::Components(convert_each(values, "device"))
        }
    }

    /// Read a description from disk. `.json` files are parsed as JSON, anything else as YAML.
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            _ => Self::from_yaml(&text),
        }
    }

    /// Populate `network` from this description.
    ///
    /// Bad records are skipped with a warning; links to unknown devices are dropped
    /// and every remaining link is made symmetric.
    pub fn apply(self, network: &mut Network) {
        match self {
            Self::Components(records) => {
                for record in records {
                    apply_record(network, record);
                }
            }
            Self::Paths(records) => {
                for record in records {
                    apply_path(network, record);
                }
            }
        }
        network.prune_links();
    }
}

/// Convert every value into `T`, dropping the ones that do not fit.
fn convert_each<T: DeserializeOwned>(values: Vec<Value>, kind: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, kind, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}

fn apply_record(network: &mut Network, record: DeviceRecord) {
    let Some(position) = GridPoint::new(record.row, record.column) else {
        warn!(
            name = %record.component_name,
            row = record.row,
            column = record.column,
            "skipping device outside the grid"
        );
        return;
    };

    let id = match record.component_id {
        Some(RecordId::Text(id)) if !id.trim().is_empty() => DeviceId::from(id),
        Some(RecordId::Number(n)) => DeviceId::from(n.to_string()),
        _ => DeviceId::generate(),
    };

    let device = PlacedDevice {
        id,
        name: record.component_name,
        level: record.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        position,
        points: record.points,
        icon: record.src.unwrap_or_default(),
        connected_to: record.connected_to.into_iter().map(DeviceId::from).collect(),
    };

    if let Err(e) = network.insert(device) {
        warn!(error = %e, "skipping device record");
    }
}

fn apply_path(network: &mut Network, record: PathRecord) {
    let Some((from, to)) = parse_path(&record.path) else {
        warn!(path = %record.path, "skipping malformed path");
        return;
    };

    let (Some(a), Some(b)) = (
        ensure_device(network, &record.from, from),
        ensure_device(network, &record.to, to),
    ) else {
        return;
    };
    if a == b {
        return;
    }
    network.link_unchecked(&a, &b);
}

/// Id of the device named `name` at `point`, placing one if the point is empty.
fn ensure_device(network: &mut Network, name: &str, point: GridPoint) -> Option<DeviceId> {
    if let Some(existing) = network.device_at(point) {
        if existing.name != name {
            warn!(
                at = %point,
                expected = name,
                found = %existing.name,
                "path end point is occupied by another device"
            );
            return None;
        }
        return Some(existing.id.clone());
    }

    let template = catalog::find(name).unwrap_or_else(|| DeviceTemplate::new(name, "", 0));
    network.place(&template, point).ok().map(|d| d.id.clone())
}
