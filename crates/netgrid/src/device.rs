use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::DeviceTemplate;
use crate::grid::GridPoint;

/// Stable identity of a placed device.
///
/// Fresh ids are random UUIDs. Ids read from an initial configuration are kept
/// verbatim, whatever their shape.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Level tag given to devices dropped from the palette.
pub const DEFAULT_LEVEL: &str = "1";

/// A template instance sitting on a grid point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedDevice {
    pub id: DeviceId,
    pub name: String,
    pub level: String,
    pub position: GridPoint,
    pub points: u32,
    pub icon: String,
    /// Ids of linked devices. Kept symmetric by [`crate::Network`].
    pub connected_to: BTreeSet<DeviceId>,
}

impl PlacedDevice {
    /// A fresh, unconnected instance of `template` at `position`.
    pub fn from_template(template: &DeviceTemplate, position: GridPoint) -> Self {
        Self {
            id: DeviceId::generate(),
            name: template.name.clone(),
            level: DEFAULT_LEVEL.to_string(),
            position,
            points: template.points,
            icon: template.icon.clone(),
            connected_to: BTreeSet::new(),
        }
    }

    pub fn is_connected_to(&self, id: &DeviceId) -> bool {
        self.connected_to.contains(id)
    }
}
