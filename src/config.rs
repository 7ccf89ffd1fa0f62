// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! This module contains the configuration options for the
//! `AvailabilityAggregator`.

/// What to do with a zone whose member cells carry no feature weight.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub enum ZeroWeightPolicy {
    /// Leave every cell of the zone undefined.
    #[default]
    Undefined,
    /// Spread the zone evenly over its member cells.
    Uniform,
}

/// How a feature is matched to a grid cell.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub enum FeatureAssignment {
    /// The feature goes to the cell containing its interior point.  Points on
    /// a shared cell boundary go to the cell with the lowest `(y, x)` index.
    #[default]
    RepresentativePoint,
    /// The feature goes to the cell it lies entirely within.  Features that
    /// straddle cells are not assigned.
    WholeFeature,
}

/// Configuration options for the `AvailabilityAggregator`.
#[derive(Clone, Default, Debug)]
pub struct AggregatorConfig {
    /// Handling of zones whose member cells carry no feature weight.  A
    /// `ZeroTotalWeight` warning is raised with either policy.
    pub zero_weight_policy: ZeroWeightPolicy,

    /// How features are matched to grid cells.
    pub assignment: FeatureAssignment,

    /// Whether to skip the coordinate-range check that compares the bounds of
    /// the features and zones against the bounds of the grid.
    pub skip_projection_check: bool,

    /// Whether to run feature assignment, membership and normalization on the
    /// rayon thread pool.  The results are identical to a sequential run.
    pub parallel: bool,
}
