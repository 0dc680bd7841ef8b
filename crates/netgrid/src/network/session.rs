use tracing::trace;

use super::{ConnectOutcome, Network};
use crate::grid::{self, GridPoint};

/// An in-progress connection gesture: pointer pressed on `start`, not yet released.
///
/// The session holds the network mutably, so only one can exist at a time.
/// Dropping it without calling [`ConnectionDrag::finish`] cancels the gesture.
pub struct ConnectionDrag<'a> {
    network: &'a mut Network,
    start: GridPoint,
    pointer: Option<(f64, f64)>,
    finished: bool,
}

impl Network {
    /// Start dragging a connection out of `start`.
    pub fn begin_connection(&mut self, start: GridPoint) -> ConnectionDrag<'_> {
        trace!(%start, "connection drag started");
        ConnectionDrag {
            network: self,
            start,
            pointer: None,
            finished: false,
        }
    }
}

impl ConnectionDrag<'_> {
    pub fn start(&self) -> GridPoint {
        self.start
    }

    /// Last pointer position seen, for drawing the preview line.
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// The preview line from the start point's center to the pointer.
    pub fn preview(&self) -> Option<((f64, f64), (f64, f64))> {
        let from = self.start.center(self.network.geometry());
        self.pointer.map(|to| (from, to))
    }

    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        self.pointer = Some((px, py));
    }

    /// Release the pointer at `(px, py)` and try to link the two devices.
    ///
    /// Returns `None` when the release point is not on a grid point.
    pub fn finish(mut self, px: f64, py: f64) -> Option<ConnectOutcome> {
        self.finished = true;
        let end = grid::resolve_pointer(px, py, self.network.geometry());
        trace!(start = %self.start, ?end, "connection drag released");
        Some(self.network.connect_points(self.start, end?))
    }
}

impl Drop for ConnectionDrag<'_> {
    fn drop(&mut self) {
        if !self.finished {
            trace!(start = %self.start, "connection drag cancelled");
        }
    }
}
