use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Highest coordinate on either axis. The grid spans `0..=GRID_MAX` (51 points, 50 squares).
pub const GRID_MAX: u8 = 50;

/// Number of snap points along one axis.
pub const GRID_SIDE: usize = GRID_MAX as usize + 1;

/// Total number of snap points on the grid.
pub const GRID_POINTS: usize = GRID_SIDE * GRID_SIDE;

static POINTS: LazyLock<Vec<GridPoint>> = LazyLock::new(|| {
    (0..=GRID_MAX)
        .flat_map(|x| (0..=GRID_MAX).map(move |y| GridPoint { x, y }))
        .collect()
});

/// A snap point on the editing grid.
///
/// Both axes are always in `0..=GRID_MAX`. The only ways to obtain a point are
/// [`GridPoint::new`], which checks the bounds, and [`points`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct GridPoint {
    x: u8,
    y: u8,
}

impl GridPoint {
    /// Create a point, or `None` if either coordinate is off the grid.
    pub fn new(x: i64, y: i64) -> Option<Self> {
        let max = i64::from(GRID_MAX);
        if (0..=max).contains(&x) && (0..=max).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Manhattan distance to another point.
    pub fn manhattan(self, other: GridPoint) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }

    /// Pixel position of this point's rendered center.
    pub fn center(self, geometry: &Geometry) -> (f64, f64) {
        (
            f64::from(self.x) * geometry.cell_size,
            f64::from(self.y) * geometry.cell_size,
        )
    }
}

impl fmt::Debug for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl TryFrom<(u8, u8)> for GridPoint {
    type Error = String;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        GridPoint::new(i64::from(x), i64::from(y))
            .ok_or_else(|| format!("({x}, {y}) is outside the {GRID_SIDE}x{GRID_SIDE} grid"))
    }
}

impl From<GridPoint> for (u8, u8) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

/// All grid points in canonical order: every `y` for `x = 0`, then every `y` for `x = 1`, and so on.
///
/// Built once per process on first use.
pub fn points() -> &'static [GridPoint] {
    &POINTS
}

/// Pixel geometry used to map pointer positions onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Distance in pixels between neighbouring snap points.
    pub cell_size: f64,
    /// A pointer must be strictly closer than this to a point's center to hit it.
    pub snap_threshold: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            snap_threshold: 10.0,
        }
    }
}

/// Resolve a pointer position to the grid point under it.
///
/// Scans the grid in canonical order and keeps the last point within the snap
/// threshold. With the default geometry two points can never both be in range,
/// so this is the same as picking the nearest one.
pub fn resolve_pointer(px: f64, py: f64, geometry: &Geometry) -> Option<GridPoint> {
    let mut hit = None;
    for &point in points() {
        let (cx, cy) = point.center(geometry);
        let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
        if distance < geometry.snap_threshold {
            hit = Some(point);
        }
    }
    hit
}
