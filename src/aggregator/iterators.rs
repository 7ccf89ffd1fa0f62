// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Iterators over cells and zones in an `AvailabilityAggregator`.

use crate::{GridCell, Zone};

use super::{CellEntry, ZoneEntry};

/// An iterator over the cells in an `AvailabilityAggregator`.
pub struct Cells<'a, C>
where
    C: GridCell,
{
    pub(crate) iter: std::slice::Iter<'a, CellEntry<C>>,
}

impl<'a, C> Iterator for Cells<'a, C>
where
    C: GridCell,
{
    type Item = &'a C;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| &e.cell)
    }
}

/// An iterator over the zones in an `AvailabilityAggregator`.
pub struct Zones<'a, Z>
where
    Z: Zone,
{
    pub(crate) iter: std::slice::Iter<'a, ZoneEntry<Z>>,
}

impl<'a, Z> Iterator for Zones<'a, Z>
where
    Z: Zone,
{
    type Item = &'a Z;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| &e.zone)
    }
}
