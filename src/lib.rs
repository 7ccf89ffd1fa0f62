// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

/*!
# RSA Availability Aggregator

This is a library for spreading the renewable potential of a zone (for
example a supply region of a national grid model) over the cells of a climate
grid, in proportion to how much eligible area (rooftops, land) falls into each
cell.

The result is one *availability matrix* per zone: for every grid cell that
lies within the zone, the fraction of the zone's eligible area found in that
cell.  Capacity-expansion models use these matrices to turn per-cell weather
data into zone-level generation profiles and to place a zone's installable
capacity on the grid.

## The `Feature`, `GridCell` and `Zone` traits

The main struct is [`AvailabilityAggregator`], instances of which can be
created by passing an iterator of grid cells and an iterator of zones to the
[`try_new`][AvailabilityAggregator::try_new] method.  Features are then
aggregated with [`aggregate`][AvailabilityAggregator::aggregate].  For a
single run, [`compute_zone_availability`] does both.

The library doesn't know the types that the caller loads its geometries into,
and instead uses traits to interact with them.  The feature, cell and zone
types must implement the [`Feature`], [`GridCell`] and [`Zone`] traits,
respectively.  Check out the documentation for these traits for sample
implementations.

All geometries must be in the same planar coordinate system.  Geographic
geometries can be brought into an equal-area system with the helpers in the
[`projection`] module.

## Aggregation

1. Every feature is assigned to one grid cell, and the feature weights are
   summed per cell.  See [`FeatureAssignment`] for how cells are picked.
2. A cell belongs to a zone if it lies entirely within it.  Cells that
   straddle a zone boundary belong to no zone.
3. Within each zone, the cell weights are divided by the zone total.  Zones
   without any weight are handled according to [`ZeroWeightPolicy`].
4. A zone can feed several buses, which all share the zone's matrix.

Values within a zone with weight always sum to one.  Cells outside a zone are
undefined rather than zero.

## Errors and warnings

Inputs that make the whole run meaningless, like empty inputs or features in
a different coordinate system than the grid, return an [`Error`].  A zone that
is off the grid fails on its own, without affecting the other zones.  All
other conditions are collected as [`Warning`]s in the returned
[`Availability`].
*/

mod aggregator;
pub use aggregator::{compute_zone_availability, iterators, AvailabilityAggregator};

mod availability;
pub use availability::{Availability, AvailabilityMatrix, ZoneAvailability};

mod cell;
pub use cell::CellIndex;

mod config;
pub use config::{AggregatorConfig, FeatureAssignment, ZeroWeightPolicy};

mod error;
pub use error::{Error, ErrorKind};

mod labeled_array;
pub use labeled_array::LabeledArray;

pub mod projection;

mod spatial_traits;
pub use spatial_traits::{Feature, GridCell, Zone};

mod warning;
pub use warning::Warning;
