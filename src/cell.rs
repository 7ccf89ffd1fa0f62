// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! This module defines the `CellIndex` struct, which identifies a cell of the
//! climate grid.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// The integer `(x, y)` position of a cell in the climate grid.
///
/// Cells are ordered by `y` first and `x` second.  This order is used to
/// break ties whenever more than one cell could take a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    pub x: i64,
    pub y: i64,
}

impl CellIndex {
    pub fn new(x: i64, y: i64) -> Self {
        CellIndex { x, y }
    }
}

impl Ord for CellIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for CellIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for CellIndex {
    fn from((x, y): (i64, i64)) -> Self {
        CellIndex { x, y }
    }
}
