use serde::{Deserialize, Serialize};

/// A reusable device definition shown in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTemplate {
    pub name: String,
    /// Icon path as referenced by the front end.
    pub icon: String,
    pub points: u32,
}

impl DeviceTemplate {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            points,
        }
    }
}

/// Name used by the rules to waive the distance limit.
pub const ROUTER: &str = "Router";

/// Name of the restricted storage category.
pub const COIN_STORAGE: &str = "Coin Storage";

pub const DATABASE: &str = "Database";
pub const FIREWALL: &str = "Firewall";
pub const WWW_ENDPOINT: &str = "WWW Endpoint";
pub const SERVER: &str = "Server";

/// Name of the device spawned as a quiz reward.
pub const NEW_ENDPOINT: &str = "New Endpoint";

const ENDPOINT_ICON: &str = "./node.png";

/// The fixed palette, in display order.
pub fn catalog() -> [DeviceTemplate; 4] {
    [
        DeviceTemplate::new(DATABASE, "./databasee.png", 20),
        DeviceTemplate::new(FIREWALL, "./firewall.png", 10),
        DeviceTemplate::new(WWW_ENDPOINT, ENDPOINT_ICON, 0),
        DeviceTemplate::new(SERVER, "./server.png", 15),
    ]
}

/// Look up a catalog entry by name (case-insensitive).
pub fn find(name: &str) -> Option<DeviceTemplate> {
    catalog()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Template for the device handed out when a quiz is fully answered.
pub fn reward_endpoint() -> DeviceTemplate {
    DeviceTemplate::new(NEW_ENDPOINT, ENDPOINT_ICON, 0)
}
