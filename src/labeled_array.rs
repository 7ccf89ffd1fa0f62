// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! A dense, labelled `bus × y × x` array of availability values, in the
//! shape expected by the model assembly stage.

use serde::{Deserialize, Serialize};

use crate::CellIndex;

/// Availability values of every bus over the full grid.
///
/// Cells outside a bus's zone are `None`, which serializes as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledArray {
    /// Bus names, the first dimension.
    pub bus: Vec<String>,
    /// Cell `y` indices, the second dimension.
    pub y: Vec<i64>,
    /// Cell `x` indices, the third dimension.
    pub x: Vec<i64>,
    /// Planar `y` coordinate of the cell centres of each row.
    pub y_coord: Vec<f64>,
    /// Planar `x` coordinate of the cell centres of each column.
    pub x_coord: Vec<f64>,
    /// `values[bus][y][x]`.
    pub values: Vec<Vec<Vec<Option<f64>>>>,
}

impl LabeledArray {
    /// Returns the lengths of the `bus`, `y` and `x` dimensions.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.bus.len(), self.y.len(), self.x.len())
    }

    /// Returns the value for `bus` at `cell`, if it is defined.
    ///
    /// Returns `None` as well if `values` doesn't have the shape of the labels.
    pub fn get(&self, bus: &str, cell: CellIndex) -> Option<f64> {
        let b = self.bus.iter().position(|name| name == bus)?;
        let y = self.y.binary_search(&cell.y).ok()?;
        let x = self.x.binary_search(&cell.x).ok()?;
        self.values.get(b)?.get(y)?.get(x).copied().flatten()
    }
}
