//! Grid-based network diagram editing.
//!
//! Devices from a fixed catalog are placed on a 51×51 grid of snap points,
//! linked subject to [`rules::ConnectionRules`], removed with their links, and
//! projected to JSON through [`snapshot::NetworkState`].

pub mod catalog;
pub mod config;
pub mod device;
pub mod error;
pub mod grid;
pub mod loader;
pub mod network;
pub mod quiz;
pub mod rules;
pub mod script;
pub mod snapshot;

pub use catalog::DeviceTemplate;
pub use device::{DeviceId, PlacedDevice};
pub use error::{EditError, LoadError};
pub use grid::{Geometry, GridPoint};
pub use network::session::ConnectionDrag;
pub use network::{ConnectOutcome, Network};
pub use rules::{ConnectionRules, RejectReason};
pub use snapshot::NetworkState;
