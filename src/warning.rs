// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! This module defines the `Warning` enum, which represents the non-fatal
//! conditions found during an aggregation.

use crate::CellIndex;
use std::fmt::Display;

/// A non-fatal condition found while aggregating availability.
///
/// Warnings are collected in the [`Availability`][crate::Availability]
/// returned by an aggregation, so that callers can decide whether a partial
/// result is acceptable.
#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
    /// No grid cell lies within the zone, so its matrix is empty.
    NoMemberCells { zone: String },
    /// The zone has member cells, but no feature weight falls in any of them.
    ZeroTotalWeight { zone: String },
    /// The feature's geometry can't be used in a containment test and was
    /// skipped.
    DegenerateGeometry { feature_id: u64, reason: String },
    /// No grid cell could take the feature.
    FeatureOutsideGrid { feature_id: u64 },
    /// The cell lies within more than one zone and was assigned to none of
    /// them.
    AmbiguousMembership { cell: CellIndex, zones: Vec<String> },
}

impl Warning {
    /// Returns the name of the zone the warning is about, if it is about a
    /// single zone.  See [`zones`][Warning::zones] for all zones a warning
    /// names.
    pub fn zone(&self) -> Option<&str> {
        match self {
            Warning::NoMemberCells { zone } | Warning::ZeroTotalWeight { zone } => {
                Some(zone.as_str())
            }
            _ => None,
        }
    }

    /// Returns the names of all zones the warning is about.
    pub fn zones(&self) -> Vec<&str> {
        match self {
            Warning::NoMemberCells { zone } | Warning::ZeroTotalWeight { zone } => {
                vec![zone.as_str()]
            }
            Warning::AmbiguousMembership { zones, .. } => {
                zones.iter().map(|zone| zone.as_str()).collect()
            }
            Warning::DegenerateGeometry { .. } | Warning::FeatureOutsideGrid { .. } => vec![],
        }
    }

    /// Emits the warning through `tracing`.
    pub(crate) fn log(&self) {
        tracing::warn!("{}", self);
    }
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NoMemberCells { zone } => {
                write!(f, "NoMemberCells: zone {zone} contains no grid cells.")
            }
            Warning::ZeroTotalWeight { zone } => {
                write!(f, "ZeroTotalWeight: zone {zone} has no feature weight.")
            }
            Warning::DegenerateGeometry { feature_id, reason } => {
                write!(f, "DegenerateGeometry: feature {feature_id} skipped: {reason}")
            }
            Warning::FeatureOutsideGrid { feature_id } => {
                write!(
                    f,
                    "FeatureOutsideGrid: feature {feature_id} is not within any grid cell."
                )
            }
            Warning::AmbiguousMembership { cell, zones } => {
                write!(
                    f,
                    "AmbiguousMembership: cell {cell} lies within zones [{}].",
                    zones.join(", ")
                )
            }
        }
    }
}
