use thiserror::Error;

use crate::device::DeviceId;
use crate::grid::GridPoint;

/// Errors from mutating a [`crate::Network`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("grid point {point} is already occupied by device {occupant}")]
    Occupied { point: GridPoint, occupant: DeviceId },

    #[error("device id {0} is already in use")]
    DuplicateId(DeviceId),

    #[error("no free grid point left")]
    GridFull,
}

/// Errors from reading an initial network description.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
