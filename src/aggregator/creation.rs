// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Methods for creating [`AvailabilityAggregator`] instances from given grid
//! cells and zones.

use std::collections::{BTreeMap, BTreeSet};

use geo::{Area, BoundingRect, Centroid, CoordsIter, Rect};
use rstar::primitives::Rectangle;
use rstar::RTree;

use crate::{AggregatorConfig, Error, GridCell, Zone};

use super::{envelope, union_rects, AvailabilityAggregator, CellEntry, CellNode, ZoneEntry};

/// `AvailabilityAggregator` instantiation.
impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Creates a new [`AvailabilityAggregator`] from the given grid cells and
    /// zones, and computes which cells belong to which zone.
    ///
    /// Returns an error if there are no cells or no zones, if cell indices,
    /// zone names or bus names are duplicated, or if a cell has an unusable
    /// geometry.
    pub fn try_new<CellIterator: IntoIterator<Item = C>, ZoneIterator: IntoIterator<Item = Z>>(
        cells: CellIterator,
        zones: ZoneIterator,
        config: AggregatorConfig,
    ) -> Result<Self, Error> {
        let (cells, grid_bounds) = Self::create_grid(cells)?;
        let zones = Self::create_zones(zones)?;
        let cell_tree = RTree::bulk_load(
            cells
                .iter()
                .enumerate()
                .map(|(pos, entry)| {
                    CellNode::new(Rectangle::from_aabb(envelope(&entry.bounds)), pos)
                })
                .collect(),
        );

        tracing::debug!(
            "Creating availability aggregator with {} grid cells and {} zones.",
            cells.len(),
            zones.len()
        );

        let mut aggregator = Self {
            cells,
            grid_bounds,
            cell_tree,
            zones,
            membership: vec![],
            cell_zones: BTreeMap::new(),
            warnings: vec![],
            config,
        };
        aggregator.compute_membership();

        Ok(aggregator)
    }

    fn create_grid(
        cells: impl IntoIterator<Item = C>,
    ) -> Result<(Vec<CellEntry<C>>, Rect<f64>), Error> {
        let mut entries = vec![];
        let mut seen = BTreeSet::new();

        for cell in cells {
            let index = cell.index();
            if !seen.insert(index) {
                return Err(Error::invalid_input(format!(
                    "Duplicate grid cell index found: {index}"
                )));
            }

            let geometry = cell.geometry();
            let degenerate = || {
                Error::invalid_input(format!("Grid cell {index} has a degenerate geometry."))
            };
            if !geometry
                .coords_iter()
                .all(|c| c.x.is_finite() && c.y.is_finite())
            {
                return Err(degenerate());
            }
            let (Some(bounds), Some(centre)) = (geometry.bounding_rect(), geometry.centroid())
            else {
                return Err(Error::invalid_input(format!(
                    "Grid cell {index} has an empty geometry."
                )));
            };
            if geometry.unsigned_area() <= 0.0 {
                return Err(degenerate());
            }

            entries.push(CellEntry {
                cell,
                index,
                bounds,
                centre: centre.0,
            });
        }

        let grid_bounds = entries
            .iter()
            .map(|e| e.bounds)
            .reduce(|acc, b| union_rects(&acc, &b))
            .ok_or_else(|| Error::invalid_input("No grid cells given."))?;

        entries.sort_by_key(|e| e.index);

        Ok((entries, grid_bounds))
    }

    fn create_zones(zones: impl IntoIterator<Item = Z>) -> Result<Vec<ZoneEntry<Z>>, Error> {
        let mut entries: Vec<ZoneEntry<Z>> = vec![];
        let mut bus_owners: BTreeMap<String, String> = BTreeMap::new();

        for zone in zones {
            let name = zone.name().to_string();
            if entries.iter().any(|e| e.zone.name() == name) {
                return Err(Error::invalid_input(format!(
                    "Duplicate zone name found: {name}"
                )));
            }

            let bus_names = zone.bus_names();
            if bus_names.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Zone {name} has no bus names."
                )));
            }
            for bus in &bus_names {
                if let Some(owner) = bus_owners.insert(bus.clone(), name.clone()) {
                    return Err(Error::invalid_input(format!(
                        "Bus {bus} is used by zones {owner} and {name}."
                    )));
                }
            }

            let bounds = zone.geometry().bounding_rect();
            entries.push(ZoneEntry {
                zone,
                bus_names,
                bounds,
            });
        }

        if entries.is_empty() {
            return Err(Error::invalid_input("No zones given."));
        }

        Ok(entries)
    }
}
