// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Exporting an [`Availability`] over the full grid.

use std::collections::BTreeMap;

use crate::{Availability, AvailabilityAggregator, CellIndex, GridCell, LabeledArray, Zone};

impl<C, Z> AvailabilityAggregator<C, Z>
where
    C: GridCell + Sync,
    Z: Zone + Sync,
{
    /// Lays out the matrices of `availability` as a dense `bus × y × x`
    /// array over this aggregator's grid.
    ///
    /// Buses of failed zones are left out.  The coordinate of a row or column
    /// is the centre of its lowest-indexed cell.
    pub fn to_labeled_array(&self, availability: &Availability) -> LabeledArray {
        let mut xs = BTreeMap::new();
        let mut ys = BTreeMap::new();
        for entry in &self.cells {
            xs.entry(entry.index.x).or_insert(entry.centre.x);
            ys.entry(entry.index.y).or_insert(entry.centre.y);
        }

        let mut bus = vec![];
        let mut values = vec![];
        for name in availability.buses() {
            let Some(matrix) = availability.matrix(name) else {
                continue;
            };
            bus.push(name.to_string());
            values.push(
                ys.keys()
                    .map(|&y| {
                        xs.keys()
                            .map(|&x| matrix.get(CellIndex::new(x, y)))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>(),
            );
        }

        LabeledArray {
            bus,
            y: ys.keys().copied().collect(),
            x: xs.keys().copied().collect(),
            y_coord: ys.values().copied().collect(),
            x_coord: xs.values().copied().collect(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aggregator::test_utils::{square, unit_grid, TestFeature, TestZone};
    use crate::{AggregatorConfig, AvailabilityAggregator, CellIndex, LabeledArray};

    #[test]
    fn test_labeled_array() {
        let zones = vec![
            TestZone::with_buses("Z1", square(0.0, 0.0, 1.0, 2.0), &["B1", "B2"]),
            TestZone::new("Z2", square(1.0, 0.0, 2.0, 1.0)),
            TestZone::new("Z3", square(50.0, 50.0, 51.0, 51.0)),
        ];
        let aggregator =
            AvailabilityAggregator::try_new(unit_grid(2, 2), zones, AggregatorConfig::default())
                .unwrap();
        let availability = aggregator
            .aggregate(vec![
                TestFeature::at(1, 0.5, 0.5, 10.0),
                TestFeature::at(2, 0.5, 1.5, 30.0),
            ])
            .unwrap();

        let array = aggregator.to_labeled_array(&availability);
        assert_eq!(array.shape(), (3, 2, 2));
        assert_eq!(array.bus, vec!["B1", "B2", "Z2"]);
        assert_eq!(array.x, vec![0, 1]);
        assert_eq!(array.y, vec![0, 1]);
        assert_eq!(array.x_coord, vec![0.5, 1.5]);
        assert_eq!(array.y_coord, vec![0.5, 1.5]);
        assert_eq!(
            array.values[0],
            vec![vec![Some(0.25), None], vec![Some(0.75), None]]
        );
        assert_eq!(array.values[0], array.values[1]);
        assert_eq!(array.values[2], vec![vec![None, None], vec![None, None]]);
        assert_eq!(array.get("B2", CellIndex::new(0, 1)), Some(0.75));
        assert_eq!(array.get("B2", CellIndex::new(1, 1)), None);
        assert_eq!(array.get("Z3", CellIndex::new(0, 0)), None);

        let json = serde_json::to_value(&array).unwrap();
        assert!(json["values"][0][0][1].is_null());
        assert_eq!(json["values"][0][1][0], 0.75);
        let parsed: LabeledArray = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, array);
    }
}
