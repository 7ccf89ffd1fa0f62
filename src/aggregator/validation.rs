// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Coordinate-range checks that catch inputs given in different coordinate
//! systems.
//!
//! The inputs carry no CRS metadata, so the check compares bounds: anything
//! that doesn't even overlap the grid can't be in the grid's coordinate
//! system.

use geo::Rect;

use crate::{Error, GridCell, Zone};

use super::{fmt_rect, rects_overlap, AvailabilityAggregator, ZoneEntry};

impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Checks that the zone's bounds overlap the grid.
    pub(super) fn validate_zone_projection(&self, entry: &ZoneEntry<Z>) -> Result<(), Error> {
        if self.config.skip_projection_check {
            return Ok(());
        }
        match entry.bounds {
            Some(bounds) if !rects_overlap(&bounds, &self.grid_bounds) => {
                Err(Error::projection_mismatch(format!(
                    "Zone {} spans {}, which doesn't overlap the grid bounds {}.",
                    entry.zone.name(),
                    fmt_rect(&bounds),
                    fmt_rect(&self.grid_bounds)
                )))
            }
            _ => Ok(()),
        }
    }

    /// Checks that the combined bounds of the features overlap the grid.
    pub(super) fn validate_feature_projection(
        &self,
        feature_bounds: Option<Rect<f64>>,
    ) -> Result<(), Error> {
        if self.config.skip_projection_check {
            return Ok(());
        }
        match feature_bounds {
            Some(bounds) if !rects_overlap(&bounds, &self.grid_bounds) => {
                Err(Error::projection_mismatch(format!(
                    "Features span {}, which doesn't overlap the grid bounds {}.",
                    fmt_rect(&bounds),
                    fmt_rect(&self.grid_bounds)
                )))
            }
            _ => Ok(()),
        }
    }
}
