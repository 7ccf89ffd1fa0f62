// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! The aggregator that spreads zone-level potential over the cells of a
//! climate grid, in proportion to the feature weight in each cell.

mod assignment;
mod creation;
mod export;
mod membership;
mod normalization;
mod retrieval;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

use std::collections::BTreeMap;

use geo::{Coord, Rect};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};

use crate::{AggregatorConfig, Availability, CellIndex, Error, Feature, GridCell, Warning, Zone};

/// A grid cell, with the values derived from its geometry.
pub(crate) struct CellEntry<C> {
    pub(crate) cell: C,
    pub(crate) index: CellIndex,
    pub(crate) bounds: Rect<f64>,
    pub(crate) centre: Coord<f64>,
}

/// The bounding box of a grid cell, with the cell's position in the sorted
/// cell list.
pub(crate) type CellNode = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// A zone, with the values derived from its geometry.
pub(crate) struct ZoneEntry<Z> {
    pub(crate) zone: Z,
    pub(crate) bus_names: Vec<String>,
    pub(crate) bounds: Option<Rect<f64>>,
}

/// Distributes the weight of features over the cells of a climate grid and
/// normalizes it within each zone.
///
/// The grid and the zones are fixed at creation, and the cell-to-zone
/// membership is computed once.  Any number of feature sets can then be
/// aggregated with [`aggregate`][AvailabilityAggregator::aggregate].
pub struct AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Cells sorted by index.
    cells: Vec<CellEntry<C>>,
    grid_bounds: Rect<f64>,
    /// Bounding boxes of `cells`, for finding candidate cells.
    cell_tree: RTree<CellNode>,
    zones: Vec<ZoneEntry<Z>>,
    /// Member cells of each zone, in the order of `zones`.  Zones that failed
    /// the projection check have an error instead.
    membership: Vec<Result<Vec<CellIndex>, Error>>,
    /// Position in `zones` of the zone each member cell belongs to.
    cell_zones: BTreeMap<CellIndex, usize>,
    /// Warnings raised while computing the membership.
    warnings: Vec<Warning>,
    config: AggregatorConfig,
}

/// Computes the availability matrices of `zones` in one go.
///
/// This is a shorthand for creating an [`AvailabilityAggregator`] and calling
/// [`aggregate`][AvailabilityAggregator::aggregate] on it once.
pub fn compute_zone_availability<F, C, Z>(
    features: impl IntoIterator<Item = F>,
    cells: impl IntoIterator<Item = C>,
    zones: impl IntoIterator<Item = Z>,
    config: AggregatorConfig,
) -> Result<Availability, Error>
where
    F: Feature + Sync,
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    AvailabilityAggregator::try_new(cells, zones, config)?.aggregate(features)
}

/// Aggregation.
impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Aggregates `features` into one availability matrix per zone.
    ///
    /// Returns an error if there are no features, if a feature has a negative
    /// or non-finite weight, or if the features are in a different coordinate
    /// system than the grid.  Failures of single zones don't fail the
    /// aggregation, and are reported in the returned [`Availability`].
    pub fn aggregate<F: Feature + Sync>(
        &self,
        features: impl IntoIterator<Item = F>,
    ) -> Result<Availability, Error> {
        let features = features.into_iter().collect::<Vec<_>>();
        if features.is_empty() {
            return Err(Error::invalid_input("No features given."));
        }

        let (weights, assignment_warnings) = self.cell_weights(&features)?;
        let outcomes = self.normalize_zones(&weights);

        let mut warnings = self.warnings.clone();
        for warning in assignment_warnings {
            warning.log();
            warnings.push(warning);
        }

        let mut zones = BTreeMap::new();
        let mut buses = BTreeMap::new();
        for (entry, outcome) in self.zones.iter().zip(outcomes) {
            let name = entry.zone.name();
            if let Some(warning) = outcome.warning {
                warning.log();
                warnings.push(warning);
            }
            if let Err(err) = &outcome.result {
                tracing::warn!("Zone {} failed: {}", name, err);
            }
            for bus in &entry.bus_names {
                buses.insert(bus.clone(), name.to_string());
            }
            zones.insert(name.to_string(), outcome.result);
        }

        Ok(Availability {
            zones,
            buses,
            warnings,
        })
    }
}

/// Returns the smallest rectangle covering both rectangles.
pub(crate) fn union_rects(a: &Rect<f64>, b: &Rect<f64>) -> Rect<f64> {
    Rect::new(
        (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
        (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
    )
}

/// Returns true if the two rectangles share at least one point.
pub(crate) fn rects_overlap(a: &Rect<f64>, b: &Rect<f64>) -> bool {
    a.min().x <= b.max().x
        && b.min().x <= a.max().x
        && a.min().y <= b.max().y
        && b.min().y <= a.max().y
}

/// Returns true if `inner` is inside `outer`, boundaries included.
pub(crate) fn rect_contains(outer: &Rect<f64>, inner: &Rect<f64>) -> bool {
    outer.min().x <= inner.min().x
        && outer.min().y <= inner.min().y
        && inner.max().x <= outer.max().x
        && inner.max().y <= outer.max().y
}

/// Converts a rectangle into an R-tree envelope.
pub(crate) fn envelope(rect: &Rect<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y])
}

/// Formats a rectangle for error messages.
pub(crate) fn fmt_rect(rect: &Rect<f64>) -> String {
    format!(
        "[({}, {}), ({}, {})]",
        rect.min().x,
        rect.min().y,
        rect.max().x,
        rect.max().y
    )
}
