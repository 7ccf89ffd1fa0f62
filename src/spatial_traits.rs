// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! This module contains the traits that need to be implemented by the types
//! that represent a feature, a grid cell and a zone.

use geo::{Area, MultiPolygon, Polygon};

use crate::CellIndex;

/**
This trait needs to be implemented by the type that represents a feature, for
example a building footprint or a patch of eligible land.

Read more about why this is necessary [here][crate#the-feature-gridcell-and-zone-traits].

The geometry must already be in the planar coordinate system of the grid.  The
default weight is the planar area of the geometry, which is only meaningful if
that coordinate system is equal-area.

<details>
<summary>Example implementation for footprints loaded from a GeoJSON layer:</summary>

```ignore
struct Footprint {
    id: u64,
    outline: geo::Polygon<f64>,
}

impl rsa_availability_aggregator::Feature for Footprint {
    fn feature_id(&self) -> u64 {
        self.id
    }

    fn geometry(&self) -> &geo::Polygon<f64> {
        &self.outline
    }
}
```

</details>
*/
pub trait Feature {
    /// Returns the id of the feature.  It is only used in diagnostics.
    fn feature_id(&self) -> u64;
    /// Returns the planar geometry of the feature.
    fn geometry(&self) -> &Polygon<f64>;
    /// Returns the weight of the feature.  Must be finite and non-negative.
    fn weight(&self) -> f64 {
        self.geometry().unsigned_area()
    }
}

/**
This trait needs to be implemented by the type that represents a cell of the
climate grid.

Read more about why this is necessary [here][crate#the-feature-gridcell-and-zone-traits].

<details>
<summary>Example implementation for cells of a regular cutout:</summary>

```ignore
struct CutoutCell {
    x: i64,
    y: i64,
    bounds: geo::Polygon<f64>,
}

impl rsa_availability_aggregator::GridCell for CutoutCell {
    fn index(&self) -> rsa_availability_aggregator::CellIndex {
        rsa_availability_aggregator::CellIndex::new(self.x, self.y)
    }

    fn geometry(&self) -> &geo::Polygon<f64> {
        &self.bounds
    }
}
```

</details>
*/
pub trait GridCell {
    /// Returns the index of the cell in the grid.
    fn index(&self) -> CellIndex;
    /// Returns the planar geometry of the cell.
    fn geometry(&self) -> &Polygon<f64>;
}

/**
This trait needs to be implemented by the type that represents a zone, for
example a supply region.

Read more about why this is necessary [here][crate#the-feature-gridcell-and-zone-traits].

A zone can feed several downstream buses, which all share the zone's
availability matrix.  By default a zone feeds a single bus with the zone's own
name.

<details>
<summary>Example implementation for supply regions:</summary>

```ignore
struct SupplyRegion {
    name: String,
    shape: geo::MultiPolygon<f64>,
}

impl rsa_availability_aggregator::Zone for SupplyRegion {
    fn name(&self) -> &str {
        &self.name
    }

    fn geometry(&self) -> &geo::MultiPolygon<f64> {
        &self.shape
    }
}
```

</details>
*/
pub trait Zone {
    /// Returns the unique name of the zone.
    fn name(&self) -> &str;
    /// Returns the planar geometry of the zone.
    fn geometry(&self) -> &MultiPolygon<f64>;
    /// Returns the names of the buses that use the zone's availability.
    fn bus_names(&self) -> Vec<String> {
        vec![self.name().to_string()]
    }
}
