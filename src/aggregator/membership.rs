// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Computing which grid cells belong to which zone.
//!
//! A cell belongs to a zone only if it lies entirely within the zone.  Cells
//! that straddle a zone boundary belong to no zone, and so do cells that lie
//! within more than one zone.

use geo::Within;
use rayon::prelude::*;

use crate::{CellIndex, Error, GridCell, Warning, Zone};

use super::{envelope, AvailabilityAggregator, ZoneEntry};

impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Fills `membership`, `cell_zones` and the membership warnings.
    pub(super) fn compute_membership(&mut self) {
        let mut membership = self
            .zones
            .iter()
            .map(|entry| self.validate_zone_projection(entry).map(|()| vec![]))
            .collect::<Vec<_>>();

        let within = if self.config.parallel {
            self.zones
                .par_iter()
                .zip(membership.par_iter())
                .map(|(entry, status)| self.cells_within(entry, status))
                .collect::<Vec<_>>()
        } else {
            self.zones
                .iter()
                .zip(&membership)
                .map(|(entry, status)| self.cells_within(entry, status))
                .collect::<Vec<_>>()
        };

        // Zones containing each cell, in zone order.
        let mut containing: Vec<Vec<usize>> = vec![vec![]; self.cells.len()];
        for (zone_pos, cells) in within.into_iter().enumerate() {
            for pos in cells {
                containing[pos].push(zone_pos);
            }
        }

        let mut warnings = vec![];
        for (cell, zones) in self.cells.iter().zip(containing) {
            match zones.as_slice() {
                [] => {}
                [pos] => {
                    if let Ok(members) = &mut membership[*pos] {
                        members.push(cell.index);
                    }
                    self.cell_zones.insert(cell.index, *pos);
                }
                _ => warnings.push(Warning::AmbiguousMembership {
                    cell: cell.index,
                    zones: zones
                        .iter()
                        .map(|&pos| self.zones[pos].zone.name().to_string())
                        .collect(),
                }),
            }
        }

        for (entry, members) in self.zones.iter().zip(&membership) {
            if matches!(members, Ok(cells) if cells.is_empty()) {
                warnings.push(Warning::NoMemberCells {
                    zone: entry.zone.name().to_string(),
                });
            }
        }

        for warning in &warnings {
            warning.log();
        }
        self.membership = membership;
        self.warnings = warnings;
    }

    /// Returns the positions of the cells that lie within the zone, or none
    /// if the zone failed the projection check.
    fn cells_within(
        &self,
        entry: &ZoneEntry<Z>,
        status: &Result<Vec<CellIndex>, Error>,
    ) -> Vec<usize> {
        let Some(bounds) = entry.bounds.filter(|_| status.is_ok()) else {
            return vec![];
        };
        self.cell_tree
            .locate_in_envelope(&envelope(&bounds))
            .map(|node| node.data)
            .filter(|&pos| self.cells[pos].cell.geometry().is_within(entry.zone.geometry()))
            .collect()
    }
}
