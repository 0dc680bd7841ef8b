use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{COIN_STORAGE, DATABASE, ROUTER};
use crate::device::PlacedDevice;

/// Why a connection attempt was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    SelfConnection,
    IncompatibleTypes,
    TooFar,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SelfConnection => "a device cannot connect to itself",
            Self::IncompatibleTypes => "device types cannot be connected",
            Self::TooFar => "devices are too far apart",
        };
        f.write_str(s)
    }
}

/// A device type that may only link to a fixed set of other types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRestriction {
    pub name: String,
    /// Types allowed on the other end. Linking two devices of `name` is always allowed.
    pub allowed: Vec<String>,
}

/// Predicates deciding whether two placed devices may be linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRules {
    /// Largest Manhattan distance a link may span.
    pub max_distance: u32,
    /// Types that ignore `max_distance` when on either end of a link.
    pub distance_exempt: Vec<String>,
    pub restrictions: Vec<TypeRestriction>,
}

impl Default for ConnectionRules {
    fn default() -> Self {
        Self {
            max_distance: 6,
            distance_exempt: vec![ROUTER.to_string()],
            restrictions: vec![TypeRestriction {
                name: COIN_STORAGE.to_string(),
                allowed: vec![COIN_STORAGE.to_string(), DATABASE.to_string()],
            }],
        }
    }
}

impl ConnectionRules {
    /// Rules with no type restrictions and no distance limit.
    pub fn permissive() -> Self {
        Self {
            max_distance: u32::MAX,
            distance_exempt: Vec::new(),
            restrictions: Vec::new(),
        }
    }

    /// Check a pair of distinct devices. Type restrictions are checked before distance.
    pub fn check(&self, a: &PlacedDevice, b: &PlacedDevice) -> Result<(), RejectReason> {
        if a.id == b.id {
            return Err(RejectReason::SelfConnection);
        }

        for restriction in &self.restrictions {
            let a_in = a.name == restriction.name;
            let b_in = b.name == restriction.name;
            if a_in != b_in {
                let other = if a_in { &b.name } else { &a.name };
                if !restriction.allowed.iter().any(|n| n == other) {
                    return Err(RejectReason::IncompatibleTypes);
                }
            }
        }

        if a.position.manhattan(b.position) > self.max_distance && !self.is_exempt(a, b) {
            return Err(RejectReason::TooFar);
        }

        Ok(())
    }

    fn is_exempt(&self, a: &PlacedDevice, b: &PlacedDevice) -> bool {
        self.distance_exempt
            .iter()
            .any(|n| *n == a.name || *n == b.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DeviceTemplate;
    use crate::grid::GridPoint;

    fn dev(name: &str, x: i64, y: i64) -> PlacedDevice {
        PlacedDevice::from_template(
            &DeviceTemplate::new(name, "", 0),
            GridPoint::new(x, y).unwrap(),
        )
    }

    #[test]
    fn distance_six_is_allowed() {
        let rules = ConnectionRules::default();
        assert_eq!(rules.check(&dev("Database", 5, 5), &dev("Server", 5, 11)), Ok(()));
    }

    #[test]
    fn distance_seven_is_too_far() {
        let rules = ConnectionRules::default();
        assert_eq!(
            rules.check(&dev("Database", 5, 5), &dev("Server", 5, 12)),
            Err(RejectReason::TooFar)
        );
    }

    #[test]
    fn router_waives_distance_on_either_end() {
        let rules = ConnectionRules::default();
        assert_eq!(rules.check(&dev("Router", 0, 0), &dev("Server", 50, 50)), Ok(()));
        assert_eq!(rules.check(&dev("Server", 0, 0), &dev("Router", 50, 50)), Ok(()));
    }

    #[test]
    fn coin_storage_only_links_to_allowed_types() {
        let rules = ConnectionRules::default();
        let coin = dev("Coin Storage", 5, 5);
        assert_eq!(rules.check(&coin, &dev("Database", 5, 6)), Ok(()));
        assert_eq!(rules.check(&coin, &dev("Coin Storage", 5, 6)), Ok(()));
        assert_eq!(
            rules.check(&coin, &dev("Server", 5, 6)),
            Err(RejectReason::IncompatibleTypes)
        );
        assert_eq!(
            rules.check(&dev("Firewall", 5, 6), &coin),
            Err(RejectReason::IncompatibleTypes)
        );
    }

    #[test]
    fn coin_storage_restriction_beats_router_exemption() {
        let rules = ConnectionRules::default();
        assert_eq!(
            rules.check(&dev("Coin Storage", 0, 0), &dev("Router", 40, 40)),
            Err(RejectReason::IncompatibleTypes)
        );
    }

    #[test]
    fn same_device_is_rejected() {
        let rules = ConnectionRules::default();
        let d = dev("Server", 1, 1);
        assert_eq!(rules.check(&d, &d), Err(RejectReason::SelfConnection));
    }

    #[test]
    fn permissive_accepts_far_pairs() {
        let rules = ConnectionRules::permissive();
        assert_eq!(
            rules.check(&dev("Coin Storage", 0, 0), &dev("Server", 50, 50)),
            Ok(())
        );
    }
}
