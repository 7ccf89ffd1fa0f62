// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Assigning features to grid cells and summing their weights per cell.

use std::collections::BTreeMap;

use geo::{Area, BoundingRect, Coord, CoordsIter, InteriorPoint, Intersects, Rect, Within};
use rayon::prelude::*;

use crate::{CellIndex, Error, Feature, FeatureAssignment, GridCell, Warning, Zone};

use super::{envelope, rect_contains, union_rects, AvailabilityAggregator};

/// The summed feature weight of each cell.  Cells without features are
/// absent.
pub(super) type CellWeights = BTreeMap<CellIndex, f64>;

/// Checks for geometries that can't be used in a containment test.
pub(crate) trait GeometryChecks: Feature {
    /// Returns the reason the feature's geometry is unusable, if it is.
    fn degeneracy(&self) -> Option<&'static str> {
        let geometry = self.geometry();
        if !geometry
            .coords_iter()
            .all(|c| c.x.is_finite() && c.y.is_finite())
        {
            return Some("non-finite coordinates");
        }
        if geometry.exterior().0.len() < 4 {
            return Some("fewer than three vertices");
        }
        if geometry.unsigned_area() <= 0.0 {
            return Some("zero area");
        }
        None
    }
}

/// Implement the `GeometryChecks` trait for all types that implement the
/// `Feature` trait.
impl<T: Feature> GeometryChecks for T {}

/// Where a single feature ended up.
enum Assignment {
    Cell(CellIndex),
    Skipped(Warning),
}

impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Assigns every feature to a cell and sums the weights per cell.
    ///
    /// Weights are summed in the order of `features`, so the result doesn't
    /// depend on whether the assignment ran in parallel.
    pub(super) fn cell_weights<F: Feature + Sync>(
        &self,
        features: &[F],
    ) -> Result<(CellWeights, Vec<Warning>), Error> {
        let weights = features
            .iter()
            .map(|feature| {
                let weight = feature.weight();
                if weight.is_finite() && weight >= 0.0 {
                    Ok(weight)
                } else {
                    Err(Error::invalid_input(format!(
                        "Feature {} has an invalid weight: {}",
                        feature.feature_id(),
                        weight
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let feature_bounds = features
            .iter()
            .filter(|f| f.degeneracy().is_none())
            .filter_map(|f| f.geometry().bounding_rect())
            .reduce(|acc, b| union_rects(&acc, &b));
        self.validate_feature_projection(feature_bounds)?;

        let assignments = if self.config.parallel {
            features
                .par_iter()
                .map(|f| self.assign_feature(f))
                .collect::<Vec<_>>()
        } else {
            features
                .iter()
                .map(|f| self.assign_feature(f))
                .collect::<Vec<_>>()
        };

        let mut cell_weights = CellWeights::new();
        let mut warnings = vec![];
        for (assignment, weight) in assignments.into_iter().zip(weights) {
            match assignment {
                Assignment::Cell(index) => *cell_weights.entry(index).or_insert(0.0) += weight,
                Assignment::Skipped(warning) => warnings.push(warning),
            }
        }

        tracing::debug!(
            "Assigned {} of {} features to {} grid cells.",
            features.len() - warnings.len(),
            features.len(),
            cell_weights.len()
        );

        Ok((cell_weights, warnings))
    }

    fn assign_feature<F: Feature>(&self, feature: &F) -> Assignment {
        let feature_id = feature.feature_id();
        if let Some(reason) = feature.degeneracy() {
            return Assignment::Skipped(Warning::DegenerateGeometry {
                feature_id,
                reason: reason.to_string(),
            });
        }

        let found = match self.config.assignment {
            FeatureAssignment::RepresentativePoint => {
                let Some(point) = feature.geometry().interior_point() else {
                    return Assignment::Skipped(Warning::DegenerateGeometry {
                        feature_id,
                        reason: "no interior point".to_string(),
                    });
                };
                self.cell_at(point.0)
            }
            FeatureAssignment::WholeFeature => match feature.geometry().bounding_rect() {
                Some(bounds) => self.cell_around(feature, &bounds),
                None => None,
            },
        };

        match found {
            Some(index) => Assignment::Cell(index),
            None => Assignment::Skipped(Warning::FeatureOutsideGrid { feature_id }),
        }
    }

    /// Returns the lowest-indexed cell that contains `point`, boundaries
    /// included.
    fn cell_at(&self, point: Coord<f64>) -> Option<CellIndex> {
        let mut candidates = self
            .cell_tree
            .locate_all_at_point(&[point.x, point.y])
            .map(|node| node.data)
            .collect::<Vec<_>>();
        candidates.sort_unstable();
        candidates
            .into_iter()
            .map(|pos| &self.cells[pos])
            .find(|cell| cell.cell.geometry().intersects(&point))
            .map(|cell| cell.index)
    }

    /// Returns the lowest-indexed cell that the whole feature lies within.
    fn cell_around<F: Feature>(&self, feature: &F, bounds: &Rect<f64>) -> Option<CellIndex> {
        let mut candidates = self
            .cell_tree
            .locate_in_envelope_intersecting(&envelope(bounds))
            .map(|node| node.data)
            .filter(|&pos| rect_contains(&self.cells[pos].bounds, bounds))
            .collect::<Vec<_>>();
        candidates.sort_unstable();
        candidates
            .into_iter()
            .map(|pos| &self.cells[pos])
            .find(|cell| feature.geometry().is_within(cell.cell.geometry()))
            .map(|cell| cell.index)
    }
}
