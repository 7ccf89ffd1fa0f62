// License: MIT
// Copyright © 2026 The rsa-availability-aggregator contributors

//! Reprojection of geographic geometries into an equal-area planar coordinate
//! system, so that polygon areas can be used as feature weights.

use geo::{Area, Coord, MapCoords, MultiPolygon, Polygon};

use crate::{Error, Feature};

/// Radius of the sphere with the same surface area as the WGS84 ellipsoid, in
/// metres.
pub const AUTHALIC_RADIUS: f64 = 6_371_007.181;

/// A map from one coordinate system into another.
pub trait Projection {
    /// Projects a single coordinate.  Returns `None` if the coordinate is
    /// outside the domain of the projection.
    fn project(&self, coord: Coord<f64>) -> Option<Coord<f64>>;
}

/// The Lambert cylindrical equal-area projection on the authalic sphere.
///
/// Input coordinates are longitude (`x`) and latitude (`y`) in degrees, output
/// coordinates are metres.  The default has a standard parallel of 30°, as
/// used by EASE-Grid 2.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylindricalEqualArea {
    /// Longitude of the projection origin, in degrees.
    pub central_meridian: f64,
    /// Latitude of true scale, in degrees.
    pub standard_parallel: f64,
}

impl Default for CylindricalEqualArea {
    fn default() -> Self {
        CylindricalEqualArea {
            central_meridian: 0.0,
            standard_parallel: 30.0,
        }
    }
}

impl Projection for CylindricalEqualArea {
    fn project(&self, coord: Coord<f64>) -> Option<Coord<f64>> {
        let (lon, lat) = (coord.x, coord.y);
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat)
        {
            return None;
        }
        let cos_ts = self.standard_parallel.to_radians().cos();
        Some(Coord {
            x: AUTHALIC_RADIUS * (lon - self.central_meridian).to_radians() * cos_ts,
            y: AUTHALIC_RADIUS * lat.to_radians().sin() / cos_ts,
        })
    }
}

/// Projects every coordinate of a polygon.
pub fn project_polygon<P: Projection>(
    polygon: &Polygon<f64>,
    projection: &P,
) -> Result<Polygon<f64>, Error> {
    polygon.try_map_coords(|c| project_coord(c, projection))
}

/// Projects every coordinate of a multi-polygon.
pub fn project_multi_polygon<P: Projection>(
    polygons: &MultiPolygon<f64>,
    projection: &P,
) -> Result<MultiPolygon<f64>, Error> {
    polygons.try_map_coords(|c| project_coord(c, projection))
}

fn project_coord<P: Projection>(coord: Coord<f64>, projection: &P) -> Result<Coord<f64>, Error> {
    projection.project(coord).ok_or_else(|| {
        Error::invalid_input(format!(
            "Coordinate ({}, {}) is outside the domain of the projection.",
            coord.x, coord.y
        ))
    })
}

/// Returns the unsigned planar area of a polygon, in squared units of its
/// coordinate system.
pub fn polygon_area(polygon: &Polygon<f64>) -> f64 {
    polygon.unsigned_area()
}

/// A [`Feature`] built from a geographic polygon, whose weight is its area in
/// the target projection.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedFeature {
    feature_id: u64,
    geometry: Polygon<f64>,
    area: f64,
}

impl ProjectedFeature {
    /// Projects `polygon` and measures its area.
    ///
    /// Returns an error if any coordinate is outside the domain of the
    /// projection.
    pub fn try_new<P: Projection>(
        feature_id: u64,
        polygon: &Polygon<f64>,
        projection: &P,
    ) -> Result<Self, Error> {
        let geometry = project_polygon(polygon, projection).map_err(|e| {
            Error::invalid_input(format!("Feature {feature_id}: {}", e.description()))
        })?;
        let area = polygon_area(&geometry);
        Ok(ProjectedFeature {
            feature_id,
            geometry,
            area,
        })
    }

    /// Returns the projected area of the feature.
    pub fn area(&self) -> f64 {
        self.area
    }
}

impl Feature for ProjectedFeature {
    fn feature_id(&self) -> u64 {
        self.feature_id
    }

    fn geometry(&self) -> &Polygon<f64> {
        &self.geometry
    }

    fn weight(&self) -> f64 {
        self.area
    }
}
