// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `aggregator` module.
//!
//! - the `TestFeature`, `TestCell` and `TestZone` types, which implement the
//!   `Feature`, `GridCell` and `Zone` traits respectively.
//! - helpers for building unit-square grids and rectangular geometries.

use geo::{polygon, MultiPolygon, Polygon};

use crate::{CellIndex, Feature, GridCell, Zone};

/// Returns the axis-aligned rectangle with the given corners.
pub(crate) fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    polygon![
        (x: x0, y: y0),
        (x: x1, y: y0),
        (x: x1, y: y1),
        (x: x0, y: y1),
    ]
}

/// Returns the axis-aligned rectangle with the given corners, as a
/// multi-polygon.
pub(crate) fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![rectangle(x0, y0, x1, y1)])
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestFeature(u64, Polygon<f64>, f64);

impl TestFeature {
    pub(crate) fn new(id: u64, geometry: Polygon<f64>, weight: f64) -> Self {
        TestFeature(id, geometry, weight)
    }

    /// A small square footprint centred on `(x, y)`.
    pub(crate) fn at(id: u64, x: f64, y: f64, weight: f64) -> Self {
        TestFeature(id, rectangle(x - 0.05, y - 0.05, x + 0.05, y + 0.05), weight)
    }
}

impl Feature for TestFeature {
    fn feature_id(&self) -> u64 {
        self.0
    }

    fn geometry(&self) -> &Polygon<f64> {
        &self.1
    }

    fn weight(&self) -> f64 {
        self.2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestCell(CellIndex, Polygon<f64>);

impl TestCell {
    pub(crate) fn new(x: i64, y: i64, geometry: Polygon<f64>) -> Self {
        TestCell(CellIndex::new(x, y), geometry)
    }
}

impl GridCell for TestCell {
    fn index(&self) -> CellIndex {
        self.0
    }

    fn geometry(&self) -> &Polygon<f64> {
        &self.1
    }
}

/// Returns a `nx` by `ny` grid of unit squares, with cell `(x, y)` covering
/// `[x, x + 1] × [y, y + 1]`.
pub(crate) fn unit_grid(nx: i64, ny: i64) -> Vec<TestCell> {
    let mut cells = vec![];
    for x in 0..nx {
        for y in 0..ny {
            let (fx, fy) = (x as f64, y as f64);
            cells.push(TestCell::new(x, y, rectangle(fx, fy, fx + 1.0, fy + 1.0)));
        }
    }
    cells
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestZone(String, MultiPolygon<f64>, Vec<String>);

impl TestZone {
    pub(crate) fn new(name: &str, geometry: MultiPolygon<f64>) -> Self {
        TestZone(name.to_string(), geometry, vec![name.to_string()])
    }

    pub(crate) fn with_buses(name: &str, geometry: MultiPolygon<f64>, buses: &[&str]) -> Self {
        TestZone(
            name.to_string(),
            geometry,
            buses.iter().map(|b| b.to_string()).collect(),
        )
    }
}

impl Zone for TestZone {
    fn name(&self) -> &str {
        &self.0
    }

    fn geometry(&self) -> &MultiPolygon<f64> {
        &self.1
    }

    fn bus_names(&self) -> Vec<String> {
        self.2.clone()
    }
}
