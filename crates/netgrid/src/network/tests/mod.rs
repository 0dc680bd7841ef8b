mod drag;
mod placement;
mod removal;

use super::{ConnectOutcome, Network};
use crate::catalog::{self, DeviceTemplate};
use crate::device::{DeviceId, PlacedDevice};
use crate::grid::GridPoint;

/// Helper to create a GridPoint.
fn pt(x: i64, y: i64) -> GridPoint {
    GridPoint::new(x, y).unwrap()
}

/// Helper to look up a catalog template, or build one for names outside the catalog.
fn template(name: &str) -> DeviceTemplate {
    catalog::find(name).unwrap_or_else(|| DeviceTemplate::new(name, "", 0))
}

/// Place `name` at `(x, y)` and return its id.
fn place(net: &mut Network, name: &str, x: i64, y: i64) -> DeviceId {
    net.place(&template(name), pt(x, y)).unwrap().id.clone()
}

fn get<'a>(net: &'a Network, id: &DeviceId) -> &'a PlacedDevice {
    net.device(id).unwrap()
}

/// Assert that every link points at a live device and has a matching back-link.
fn assert_consistent(net: &Network) {
    for device in net.devices() {
        for other in &device.connected_to {
            let peer = net
                .device(other)
                .unwrap_or_else(|| panic!("{} links to missing device {}", device.id, other));
            assert!(
                peer.is_connected_to(&device.id),
                "link {} -> {} has no back-link",
                device.id,
                other
            );
        }
    }
}

fn assert_rejected(outcome: ConnectOutcome, reason: crate::rules::RejectReason) {
    assert!(!outcome.accepted(), "expected rejection, got {outcome:?}");
    assert_eq!(outcome.reason(), Some(reason));
}
