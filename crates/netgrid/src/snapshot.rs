//! Read-only JSON projection of the network for display and debugging.

use serde::{Deserialize, Serialize};

use crate::device::{DeviceId, PlacedDevice};
use crate::network::Network;

/// One device as shown in the state display.
///
/// `row` is the grid x coordinate and `column` the grid y coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub component_id: DeviceId,
    pub component_name: String,
    pub level: String,
    pub row: u8,
    pub column: u8,
    pub points: u32,
    pub connected_to: Vec<DeviceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl ComponentRecord {
    /// Projection used for the live list: no icon reference.
    pub fn summary(device: &PlacedDevice) -> Self {
        Self {
            src: None,
            ..Self::full(device)
        }
    }

    /// Full copy, as kept in the saved slot.
    pub fn full(device: &PlacedDevice) -> Self {
        Self {
            component_id: device.id.clone(),
            component_name: device.name.clone(),
            level: device.level.clone(),
            row: device.position.x(),
            column: device.position.y(),
            points: device.points,
            connected_to: device.connected_to.iter().cloned().collect(),
            src: Some(device.icon.clone()),
        }
    }
}

/// The current device list next to the last saved checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkState {
    pub current_components: Vec<ComponentRecord>,
    pub saved_components: Vec<ComponentRecord>,
}

impl NetworkState {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Sum of point values over the current devices.
    pub fn total_points(&self) -> u32 {
        self.current_components.iter().map(|c| c.points).sum()
    }
}

impl Network {
    pub fn state(&self) -> NetworkState {
        NetworkState {
            current_components: self.devices().iter().map(ComponentRecord::summary).collect(),
            saved_components: self.saved().iter().map(ComponentRecord::full).collect(),
        }
    }
}
