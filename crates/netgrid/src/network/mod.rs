pub mod session;

#[cfg(test)]
mod tests;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::catalog::DeviceTemplate;
use crate::device::{DeviceId, PlacedDevice};
use crate::error::EditError;
use crate::grid::{self, Geometry, GridPoint};
use crate::rules::{ConnectionRules, RejectReason};

/// Result of a connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A new link was added.
    Linked,
    /// The two devices were already linked. Nothing changed.
    AlreadyLinked,
    /// A rule turned the link down. Nothing changed.
    Rejected(RejectReason),
    /// One of the endpoints does not exist. Nothing changed.
    Ignored,
}

impl ConnectOutcome {
    pub fn accepted(self) -> bool {
        matches!(self, Self::Linked | Self::AlreadyLinked)
    }

    pub fn reason(self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// The editable network: placed devices, their links, and the saved checkpoint.
///
/// Devices are kept in placement order. Every mutation finishes with the
/// adjacency sets symmetric and free of unknown ids.
#[derive(Debug, Clone, Default)]
pub struct Network {
    devices: Vec<PlacedDevice>,
    saved: Vec<PlacedDevice>,
    rules: ConnectionRules,
    geometry: Geometry,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, rules: ConnectionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn rules(&self) -> &ConnectionRules {
        &self.rules
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn devices(&self) -> &[PlacedDevice] {
        &self.devices
    }

    /// Devices as they were at the last [`Network::save`].
    pub fn saved(&self) -> &[PlacedDevice] {
        &self.saved
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn device(&self, id: &DeviceId) -> Option<&PlacedDevice> {
        self.devices.iter().find(|d| d.id == *id)
    }

    pub fn device_at(&self, point: GridPoint) -> Option<&PlacedDevice> {
        self.devices.iter().find(|d| d.position == point)
    }

    pub fn is_occupied(&self, point: GridPoint) -> bool {
        self.device_at(point).is_some()
    }

    /// Grid points with no device on them, in canonical order.
    pub fn free_points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        grid::points()
            .iter()
            .copied()
            .filter(|&p| !self.is_occupied(p))
    }

    /// Drop a new instance of `template` onto `point`.
    ///
    /// Fails with [`EditError::Occupied`] if another device already sits there.
    pub fn place(
        &mut self,
        template: &DeviceTemplate,
        point: GridPoint,
    ) -> Result<&PlacedDevice, EditError> {
        let device = PlacedDevice::from_template(template, point);
        self.insert(device)
    }

    /// Place `template` on a random free grid point.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        template: &DeviceTemplate,
        rng: &mut R,
    ) -> Result<&PlacedDevice, EditError> {
        let free: Vec<GridPoint> = self.free_points().collect();
        let point = *free.choose(rng).ok_or(EditError::GridFull)?;
        self.place(template, point)
    }

    /// Add a fully built device. Its links are taken as-is, so callers must
    /// only reference devices that exist (see [`Network::prune_links`]).
    pub(crate) fn insert(&mut self, device: PlacedDevice) -> Result<&PlacedDevice, EditError> {
        if let Some(occupant) = self.device_at(device.position) {
            return Err(EditError::Occupied {
                point: device.position,
                occupant: occupant.id.clone(),
            });
        }
        if self.device(&device.id).is_some() {
            return Err(EditError::DuplicateId(device.id));
        }

        debug!(id = %device.id, name = %device.name, at = %device.position, "placed device");
        self.devices.push(device);
        let last = self.devices.len() - 1;
        Ok(&self.devices[last])
    }

    /// Remove the device at `point` and every link to it.
    ///
    /// Returns `false` if the point is empty.
    pub fn remove(&mut self, point: GridPoint) -> bool {
        let Some(idx) = self.devices.iter().position(|d| d.position == point) else {
            return false;
        };
        let removed = self.devices.remove(idx);
        for device in &mut self.devices {
            device.connected_to.remove(&removed.id);
        }
        debug!(id = %removed.id, at = %point, "removed device");
        true
    }

    /// Link two devices by id, subject to the connection rules.
    pub fn connect(&mut self, a: &DeviceId, b: &DeviceId) -> ConnectOutcome {
        let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
            debug!(%a, %b, "connect ignored: unknown device");
            return ConnectOutcome::Ignored;
        };

        // An existing link stays a no-op even if it no longer passes the rules.
        if ia != ib && self.devices[ia].is_connected_to(b) {
            return ConnectOutcome::AlreadyLinked;
        }

        if let Err(reason) = self.rules.check(&self.devices[ia], &self.devices[ib]) {
            debug!(%a, %b, %reason, "connection rejected");
            return ConnectOutcome::Rejected(reason);
        }

        self.devices[ia].connected_to.insert(b.clone());
        self.devices[ib].connected_to.insert(a.clone());
        debug!(%a, %b, "connected");
        ConnectOutcome::Linked
    }

    /// Link whatever devices sit on `start` and `end`.
    pub fn connect_points(&mut self, start: GridPoint, end: GridPoint) -> ConnectOutcome {
        let ids = (
            self.device_at(start).map(|d| d.id.clone()),
            self.device_at(end).map(|d| d.id.clone()),
        );
        match ids {
            (Some(a), Some(b)) => self.connect(&a, &b),
            _ => ConnectOutcome::Ignored,
        }
    }

    /// Remove the link between two devices. Returns `false` if there was none.
    pub fn disconnect(&mut self, a: &DeviceId, b: &DeviceId) -> bool {
        let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };
        let removed = self.devices[ia].connected_to.remove(b);
        self.devices[ib].connected_to.remove(a);
        removed
    }

    /// Copy the current devices into the saved slot.
    pub fn save(&mut self) {
        self.saved = self.devices.clone();
        info!(devices = self.saved.len(), "saved network");
    }

    /// Link two existing devices without consulting the rules.
    pub(crate) fn link_unchecked(&mut self, a: &DeviceId, b: &DeviceId) {
        if let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) {
            self.devices[ia].connected_to.insert(b.clone());
            self.devices[ib].connected_to.insert(a.clone());
        }
    }

    /// Drop links to unknown ids and make every remaining link symmetric.
    pub(crate) fn prune_links(&mut self) {
        let known: std::collections::HashSet<DeviceId> =
            self.devices.iter().map(|d| d.id.clone()).collect();

        let mut pairs = Vec::new();
        for device in &mut self.devices {
            device.connected_to.retain(|id| known.contains(id) && *id != device.id);
            for other in &device.connected_to {
                pairs.push((other.clone(), device.id.clone()));
            }
        }
        for (target, peer) in pairs {
            if let Some(idx) = self.index_of(&target) {
                self.devices[idx].connected_to.insert(peer);
            }
        }
    }

    fn index_of(&self, id: &DeviceId) -> Option<usize> {
        self.devices.iter().position(|d| d.id == *id)
    }
}
