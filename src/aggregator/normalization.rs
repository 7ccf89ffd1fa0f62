// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Normalizing the cell weights within each zone.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    AvailabilityMatrix, CellIndex, Error, GridCell, Warning, ZeroWeightPolicy, Zone,
    ZoneAvailability,
};

use super::{assignment::CellWeights, AvailabilityAggregator, ZoneEntry};

/// The outcome of normalizing a single zone.
pub(super) struct ZoneOutcome {
    pub(super) result: Result<ZoneAvailability, Error>,
    pub(super) warning: Option<Warning>,
}

impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Normalizes the weights of every zone, in the order of `zones`.
    ///
    /// Zones only read the shared `weights`, so they are independent of each
    /// other.
    pub(super) fn normalize_zones(&self, weights: &CellWeights) -> Vec<ZoneOutcome> {
        if self.config.parallel {
            self.zones
                .par_iter()
                .zip(self.membership.par_iter())
                .map(|(entry, members)| self.normalize_zone(entry, members, weights))
                .collect()
        } else {
            self.zones
                .iter()
                .zip(&self.membership)
                .map(|(entry, members)| self.normalize_zone(entry, members, weights))
                .collect()
        }
    }

    fn normalize_zone(
        &self,
        entry: &ZoneEntry<Z>,
        members: &Result<Vec<CellIndex>, Error>,
        weights: &CellWeights,
    ) -> ZoneOutcome {
        let members = match members {
            Ok(members) => members,
            Err(err) => {
                return ZoneOutcome {
                    result: Err(err.clone()),
                    warning: None,
                }
            }
        };
        let name = entry.zone.name();

        let cell_weights = members
            .iter()
            .map(|cell| (*cell, weights.get(cell).copied().unwrap_or(0.0)))
            .collect::<Vec<_>>();
        let total_weight: f64 = cell_weights.iter().map(|(_, w)| w).sum();

        if !total_weight.is_finite() {
            return ZoneOutcome {
                result: Err(Error::invalid_input(format!(
                    "Total feature weight of zone {name} is not finite."
                ))),
                warning: None,
            };
        }

        let mut warning = None;
        let values: BTreeMap<CellIndex, f64> = if total_weight > 0.0 {
            cell_weights
                .into_iter()
                .map(|(cell, weight)| (cell, weight / total_weight))
                .collect()
        } else if members.is_empty() {
            // Already reported as `NoMemberCells` when the membership was
            // computed.
            BTreeMap::new()
        } else {
            warning = Some(Warning::ZeroTotalWeight {
                zone: name.to_string(),
            });
            match self.config.zero_weight_policy {
                ZeroWeightPolicy::Undefined => BTreeMap::new(),
                ZeroWeightPolicy::Uniform => {
                    let share = 1.0 / members.len() as f64;
                    members.iter().map(|cell| (*cell, share)).collect()
                }
            }
        };

        ZoneOutcome {
            result: Ok(ZoneAvailability {
                name: name.to_string(),
                bus_names: entry.bus_names.clone(),
                member_cells: members.clone(),
                total_weight,
                matrix: AvailabilityMatrix::new(values),
            }),
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aggregator::test_utils::{square, unit_grid, TestFeature, TestZone};
    use crate::{
        compute_zone_availability, AggregatorConfig, CellIndex, Warning, ZeroWeightPolicy,
    };

    #[test]
    fn test_member_cells_without_features_are_zero() {
        let zones = vec![TestZone::new("Z", square(0.0, 0.0, 3.0, 1.0))];
        let availability = compute_zone_availability(
            vec![
                TestFeature::at(1, 0.5, 0.5, 1.0),
                TestFeature::at(2, 2.5, 0.5, 3.0),
            ],
            unit_grid(3, 1),
            zones,
            AggregatorConfig::default(),
        )
        .unwrap();

        let zone = availability.zone("Z").unwrap();
        assert_eq!(zone.total_weight(), 4.0);
        assert_eq!(zone.member_cells().len(), 3);
        let matrix = zone.matrix();
        assert_eq!(matrix.get(CellIndex::new(0, 0)), Some(0.25));
        assert_eq!(matrix.get(CellIndex::new(1, 0)), Some(0.0));
        assert_eq!(matrix.get(CellIndex::new(2, 0)), Some(0.75));
    }

    #[test]
    fn test_zero_weight_policies() {
        let zones = || {
            vec![
                TestZone::new("full", square(0.0, 0.0, 1.0, 3.0)),
                TestZone::new("bare", square(1.0, 0.0, 2.0, 3.0)),
            ]
        };
        let features = || {
            vec![
                TestFeature::at(1, 0.5, 1.5, 0.0),
                TestFeature::at(2, 0.5, 2.5, 2.0),
            ]
        };

        for (policy, expected) in [
            (ZeroWeightPolicy::Undefined, vec![]),
            (
                ZeroWeightPolicy::Uniform,
                vec![
                    (CellIndex::new(1, 0), 1.0 / 3.0),
                    (CellIndex::new(1, 1), 1.0 / 3.0),
                    (CellIndex::new(1, 2), 1.0 / 3.0),
                ],
            ),
        ] {
            let availability = compute_zone_availability(
                features(),
                unit_grid(2, 3),
                zones(),
                AggregatorConfig {
                    zero_weight_policy: policy,
                    ..Default::default()
                },
            )
            .unwrap();

            let bare = availability.zone_matrix("bare").unwrap();
            assert_eq!(bare.iter().collect::<Vec<_>>(), expected);
            assert!(bare.iter().all(|(_, v)| v.is_finite()));
            assert_eq!(
                availability.warnings(),
                &[Warning::ZeroTotalWeight {
                    zone: "bare".to_string()
                }]
            );

            let full = availability.zone_matrix("full").unwrap();
            assert_eq!(full.get(CellIndex::new(0, 1)), Some(0.0));
            assert_eq!(full.get(CellIndex::new(0, 2)), Some(1.0));
            assert_eq!(
                availability.buses_with_potential().collect::<Vec<_>>(),
                vec!["full"]
            );
        }
    }

    #[test]
    fn test_shared_matrix_for_buses() {
        let zones = vec![TestZone::with_buses(
            "JOHANNESBURG",
            square(0.0, 0.0, 2.0, 1.0),
            &["JOHANNESBURG", "WEST RAND"],
        )];
        let availability = compute_zone_availability(
            vec![TestFeature::at(1, 1.5, 0.5, 2.0)],
            unit_grid(2, 1),
            zones,
            AggregatorConfig::default(),
        )
        .unwrap();

        let a = availability.matrix("JOHANNESBURG").unwrap();
        let b = availability.matrix("WEST RAND").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.get(CellIndex::new(1, 0)), Some(1.0));
        assert_eq!(availability.zone_of_bus("WEST RAND"), Some("JOHANNESBURG"));
    }
}
