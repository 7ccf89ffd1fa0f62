// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! The results of an aggregation: one availability matrix per zone,
//! addressable through each of the zone's buses.

use std::collections::BTreeMap;

use crate::{CellIndex, Error, Warning};

/// The fraction of a zone's feature weight that falls in each of its cells.
///
/// Only member cells of the zone are defined.  Cells outside the zone return
/// `None`, which is different from a member cell without any features, which
/// returns `Some(0.0)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvailabilityMatrix {
    values: BTreeMap<CellIndex, f64>,
}

impl AvailabilityMatrix {
    pub(crate) fn new(values: BTreeMap<CellIndex, f64>) -> Self {
        AvailabilityMatrix { values }
    }

    /// Returns the value for `cell`, if it is defined.
    pub fn get(&self, cell: CellIndex) -> Option<f64> {
        self.values.get(&cell).copied()
    }

    /// Returns true if the value for `cell` is defined.
    pub fn is_defined(&self, cell: CellIndex) -> bool {
        self.values.contains_key(&cell)
    }

    /// Returns an iterator over the defined cells and their values, in cell
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, f64)> + '_ {
        self.values.iter().map(|(cell, value)| (*cell, *value))
    }

    /// Returns the number of defined cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no cell is defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the sum of the defined values.  This is `1.0` for a zone with
    /// feature weight and `0.0` for an empty matrix.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Spreads `total` over the defined cells, in proportion to their values.
    pub fn distribute(&self, total: f64) -> BTreeMap<CellIndex, f64> {
        self.values
            .iter()
            .map(|(cell, value)| (*cell, value * total))
            .collect()
    }
}

/// The result of aggregating a single zone.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneAvailability {
    pub(crate) name: String,
    pub(crate) bus_names: Vec<String>,
    pub(crate) member_cells: Vec<CellIndex>,
    pub(crate) total_weight: f64,
    pub(crate) matrix: AvailabilityMatrix,
}

impl ZoneAvailability {
    /// Returns the name of the zone.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the names of the buses that share this zone's matrix.
    pub fn bus_names(&self) -> &[String] {
        &self.bus_names
    }

    /// Returns the member cells of the zone, in cell order.
    pub fn member_cells(&self) -> &[CellIndex] {
        &self.member_cells
    }

    /// Returns the summed weight of the features in the zone's member cells.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns the availability matrix of the zone.
    pub fn matrix(&self) -> &AvailabilityMatrix {
        &self.matrix
    }

    /// Returns the installable capacity of the zone, given the capacity per
    /// unit of feature weight (for example MW per square metre of roof).
    pub fn capacity_potential(&self, capacity_per_unit_weight: f64) -> f64 {
        self.total_weight * capacity_per_unit_weight
    }
}

/// The result of an aggregation.
///
/// Zones that failed keep their error, so that the other zones can still be
/// used.  Warnings from all stages are kept in the order they were raised.
#[derive(Clone, Debug, PartialEq)]
pub struct Availability {
    pub(crate) zones: BTreeMap<String, Result<ZoneAvailability, Error>>,
    /// Zone name of each bus.
    pub(crate) buses: BTreeMap<String, String>,
    pub(crate) warnings: Vec<Warning>,
}

impl Availability {
    /// Returns the availability matrix used by `bus`.
    ///
    /// Returns `None` if there is no such bus, or if its zone failed.
    pub fn matrix(&self, bus: &str) -> Option<&AvailabilityMatrix> {
        self.zone_of_bus(bus).and_then(|zone| self.zone_matrix(zone))
    }

    /// Returns the availability matrix of `zone`.
    pub fn zone_matrix(&self, zone: &str) -> Option<&AvailabilityMatrix> {
        self.zone(zone).map(|z| &z.matrix)
    }

    /// Returns the result for `zone`, if it succeeded.
    pub fn zone(&self, zone: &str) -> Option<&ZoneAvailability> {
        self.zones.get(zone).and_then(|r| r.as_ref().ok())
    }

    /// Returns the name of the zone that feeds `bus`.
    pub fn zone_of_bus(&self, bus: &str) -> Option<&str> {
        self.buses.get(bus).map(|zone| zone.as_str())
    }

    /// Returns an iterator over the zones that succeeded, by name.
    pub fn zones(&self) -> impl Iterator<Item = &ZoneAvailability> {
        self.zones.values().filter_map(|r| r.as_ref().ok())
    }

    /// Returns an iterator over all bus names, including those of failed
    /// zones.
    pub fn buses(&self) -> impl Iterator<Item = &str> {
        self.buses.keys().map(|bus| bus.as_str())
    }

    /// Returns the buses whose zone has feature weight, and so can be given
    /// a capacity potential.
    pub fn buses_with_potential(&self) -> impl Iterator<Item = &str> {
        self.buses
            .iter()
            .filter(|(_, zone)| self.zone(zone).is_some_and(|z| z.total_weight > 0.0))
            .map(|(bus, _)| bus.as_str())
    }

    /// Returns the error of `zone`, if it failed.
    pub fn failure(&self, zone: &str) -> Option<&Error> {
        self.zones.get(zone).and_then(|r| r.as_ref().err())
    }

    /// Returns an iterator over the failed zones and their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.zones
            .iter()
            .filter_map(|(zone, r)| r.as_ref().err().map(|e| (zone.as_str(), e)))
    }

    /// Returns the warnings raised while computing the membership and the
    /// aggregation.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns the capacity potential of each cell for `bus`, given the
    /// capacity per unit of feature weight.
    pub fn cell_potentials(
        &self,
        bus: &str,
        capacity_per_unit_weight: f64,
    ) -> Option<BTreeMap<CellIndex, f64>> {
        let zone = self.zone(self.zone_of_bus(bus)?)?;
        Some(
            zone.matrix
                .distribute(zone.capacity_potential(capacity_per_unit_weight)),
        )
    }

    /// Returns a copy of the matrix of every bus whose zone succeeded, by bus
    /// name.
    pub fn into_bus_matrices(self) -> BTreeMap<String, AvailabilityMatrix> {
        self.buses
            .iter()
            .filter_map(|(bus, zone)| {
                self.zones
                    .get(zone)
                    .and_then(|r| r.as_ref().ok())
                    .map(|z| (bus.clone(), z.matrix.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: i64, y: i64) -> CellIndex {
        CellIndex::new(x, y)
    }

    fn availability() -> Availability {
        let north = ZoneAvailability {
            name: "north".to_string(),
            bus_names: vec!["north-a".to_string(), "north-b".to_string()],
            member_cells: vec![cell(0, 0), cell(1, 0), cell(2, 0)],
            total_weight: 200.0,
            matrix: AvailabilityMatrix::new(BTreeMap::from([
                (cell(0, 0), 0.25),
                (cell(1, 0), 0.75),
                (cell(2, 0), 0.0),
            ])),
        };
        let south = ZoneAvailability {
            name: "south".to_string(),
            bus_names: vec!["south".to_string()],
            member_cells: vec![cell(0, 1)],
            total_weight: 0.0,
            matrix: AvailabilityMatrix::default(),
        };
        Availability {
            zones: BTreeMap::from([
                ("north".to_string(), Ok(north)),
                ("south".to_string(), Ok(south)),
                (
                    "west".to_string(),
                    Err(Error::projection_mismatch("Zone west is off the grid.")),
                ),
            ]),
            buses: BTreeMap::from([
                ("north-a".to_string(), "north".to_string()),
                ("north-b".to_string(), "north".to_string()),
                ("south".to_string(), "south".to_string()),
                ("west".to_string(), "west".to_string()),
            ]),
            warnings: vec![],
        }
    }

    #[test]
    fn test_buses_share_zone_matrix() {
        let availability = availability();
        let a = availability.matrix("north-a").unwrap();
        let b = availability.matrix("north-b").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(availability.zone_of_bus("north-b"), Some("north"));
        assert!(availability.matrix("west").is_none());
        assert!(availability.matrix("east").is_none());
        assert_eq!(
            availability.buses().collect::<Vec<_>>(),
            vec!["north-a", "north-b", "south", "west"]
        );
        assert_eq!(
            availability
                .zones()
                .map(|z| z.name())
                .collect::<Vec<_>>(),
            vec!["north", "south"]
        );
    }

    #[test]
    fn test_defined_and_undefined_cells() {
        let availability = availability();
        let north = availability.zone_matrix("north").unwrap();
        assert_eq!(north.get(cell(2, 0)), Some(0.0));
        assert!(north.is_defined(cell(2, 0)));
        assert_eq!(north.get(cell(0, 1)), None);
        assert!(!north.is_defined(cell(0, 1)));
        assert_eq!(north.total(), 1.0);
        assert_eq!(north.len(), 3);

        let south = availability.zone_matrix("south").unwrap();
        assert!(south.is_empty());
        assert_eq!(south.total(), 0.0);
    }

    #[test]
    fn test_capacity_potential() {
        let availability = availability();
        // 0.5 MW per unit of weight over a weight of 200.
        assert_eq!(
            availability.zone("north").unwrap().capacity_potential(0.5),
            100.0
        );
        assert_eq!(
            availability.cell_potentials("north-b", 0.5).unwrap(),
            BTreeMap::from([(cell(0, 0), 25.0), (cell(1, 0), 75.0), (cell(2, 0), 0.0)])
        );
        assert_eq!(
            availability.cell_potentials("south", 0.5).unwrap(),
            BTreeMap::new()
        );
        assert!(availability.cell_potentials("west", 0.5).is_none());
        assert_eq!(
            availability.buses_with_potential().collect::<Vec<_>>(),
            vec!["north-a", "north-b"]
        );
    }

    #[test]
    fn test_failures() {
        let availability = availability();
        assert_eq!(
            availability.failure("west"),
            Some(&Error::projection_mismatch("Zone west is off the grid."))
        );
        assert_eq!(availability.failure("north"), None);
        assert_eq!(
            availability
                .failures()
                .map(|(zone, _)| zone)
                .collect::<Vec<_>>(),
            vec!["west"]
        );

        let matrices = availability.into_bus_matrices();
        assert_eq!(
            matrices.keys().collect::<Vec<_>>(),
            vec!["north-a", "north-b", "south"]
        );
        assert_eq!(matrices["north-a"], matrices["north-b"]);
    }
}
