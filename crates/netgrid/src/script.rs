//! Scripted editing sessions: a list of user actions replayed against a network.
//!
//! ```yaml
//! - op: place
//!   device: Database
//!   at: [5, 5]
//! - op: connect
//!   from: [5, 5]
//!   to: [5, 11]
//! - op: drag
//!   from: [5, 5]
//!   release: [250.0, 560.0]
//! - op: remove
//!   at: [5, 5]
//! - op: save
//! - op: quiz
//!   answers: [1, 0, 2]
//! ```

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, DeviceTemplate};
use crate::device::DeviceId;
use crate::grid::GridPoint;
use crate::network::{ConnectOutcome, Network};
use crate::quiz::{Quiz, QuizResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Drop a device on a grid point. Names outside the catalog get an empty icon and no points.
    Place { device: String, at: GridPoint },
    /// Double-click a grid point.
    Remove { at: GridPoint },
    /// Link the devices on two grid points.
    Connect { from: GridPoint, to: GridPoint },
    /// Press on a grid point and release the pointer at a pixel position.
    Drag { from: GridPoint, release: (f64, f64) },
    Save,
    Quiz { answers: Vec<usize> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Placed(DeviceId),
    NotPlaced(String),
    Removed(bool),
    Connected(ConnectOutcome),
    Dragged(Option<ConnectOutcome>),
    Saved,
    Quizzed(QuizResult),
}

impl StepOutcome {
    /// Whether the step changed nothing because it was refused.
    pub fn is_failure(&self) -> bool {
        match self {
            Self::NotPlaced(_) | Self::Removed(false) | Self::Dragged(None) => true,
            Self::Connected(o) | Self::Dragged(Some(o)) => !o.accepted(),
            _ => false,
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed(id) => write!(f, "placed {id}"),
            Self::NotPlaced(reason) => write!(f, "not placed: {reason}"),
            Self::Removed(true) => write!(f, "removed"),
            Self::Removed(false) => write!(f, "nothing to remove"),
            Self::Connected(o) | Self::Dragged(Some(o)) => fmt_connect(f, *o),
            Self::Dragged(None) => write!(f, "released off the grid"),
            Self::Saved => write!(f, "saved"),
            Self::Quizzed(r) => {
                write!(f, "score {}", r.score)?;
                if let Some(id) = &r.reward {
                    write!(f, ", rewarded {id}")?;
                }
                Ok(())
            }
        }
    }
}

fn fmt_connect(f: &mut fmt::Formatter<'_>, outcome: ConnectOutcome) -> fmt::Result {
    match outcome {
        ConnectOutcome::Linked => write!(f, "connected"),
        ConnectOutcome::AlreadyLinked => write!(f, "already connected"),
        ConnectOutcome::Rejected(reason) => write!(f, "rejected: {reason}"),
        ConnectOutcome::Ignored => write!(f, "ignored: no device at one end"),
    }
}

pub fn parse(text: &str) -> Result<Vec<Step>, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

/// Replay `steps` in order and report what each one did.
pub fn run<R: Rng + ?Sized>(
    steps: &[Step],
    network: &mut Network,
    quiz: &Quiz,
    rng: &mut R,
) -> Vec<StepOutcome> {
    steps
        .iter()
        .map(|step| apply(step, network, quiz, rng))
        .collect()
}

fn apply<R: Rng + ?Sized>(
    step: &Step,
    network: &mut Network,
    quiz: &Quiz,
    rng: &mut R,
) -> StepOutcome {
    match step {
        Step::Place { device, at } => {
            let template =
                catalog::find(device).unwrap_or_else(|| DeviceTemplate::new(device.as_str(), "", 0));
            match network.place(&template, *at) {
                Ok(d) => StepOutcome::Placed(d.id.clone()),
                Err(e) => StepOutcome::NotPlaced(e.to_string()),
            }
        }
        Step::Remove { at } => StepOutcome::Removed(network.remove(*at)),
        Step::Connect { from, to } => StepOutcome::Connected(network.connect_points(*from, *to)),
        Step::Drag {
            from,
            release: (px, py),
        } => StepOutcome::Dragged(network.begin_connection(*from).finish(*px, *py)),
        Step::Save => {
            network.save();
            StepOutcome::Saved
        }
        Step::Quiz { answers } => StepOutcome::Quizzed(quiz.submit(answers, network, rng)),
    }
}
