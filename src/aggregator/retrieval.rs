// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Methods for retrieving cells, zones and membership from an
//! [`AvailabilityAggregator`].

use geo::Rect;

use crate::iterators::{Cells, Zones};
use crate::{AggregatorConfig, AvailabilityAggregator, CellIndex, Error, GridCell, Warning, Zone};

/// Cell, zone and membership retrieval.
impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Returns an iterator over the grid cells, in cell order.
    pub fn cells(&self) -> Cells<'_, C> {
        Cells {
            iter: self.cells.iter(),
        }
    }

    /// Returns the cell with the given index, if it exists.
    pub fn cell(&self, index: CellIndex) -> Option<&C> {
        self.cells
            .binary_search_by_key(&index, |e| e.index)
            .ok()
            .map(|pos| &self.cells[pos].cell)
    }

    /// Returns an iterator over the zones, in the order they were given.
    pub fn zones(&self) -> Zones<'_, Z> {
        Zones {
            iter: self.zones.iter(),
        }
    }

    /// Returns the bounding rectangle of the grid.
    pub fn grid_bounds(&self) -> Rect<f64> {
        self.grid_bounds
    }

    /// Returns the member cells of `zone`, in cell order.
    ///
    /// Returns an error if there is no such zone, or if the zone failed the
    /// projection check.
    pub fn member_cells(&self, zone: &str) -> Result<&[CellIndex], Error> {
        let pos = self
            .zones
            .iter()
            .position(|e| e.zone.name() == zone)
            .ok_or_else(|| Error::invalid_input(format!("Zone {zone} not found.")))?;
        self.membership[pos]
            .as_ref()
            .map(|cells| cells.as_slice())
            .map_err(|e| e.clone())
    }

    /// Returns the name of the zone that `cell` belongs to, if any.
    pub fn zone_of(&self, cell: CellIndex) -> Option<&str> {
        self.cell_zones
            .get(&cell)
            .map(|&pos| self.zones[pos].zone.name())
    }

    /// Returns the warnings raised while computing the membership.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns the configuration of the aggregator.
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }
}
