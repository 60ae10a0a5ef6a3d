/*
This file is part of the Building Aggregration Tool
Copyright (C) 2022 Novel-T

The Building Aggregration Tool is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
//! Spherical (web) mercator forward transform.
//!
//! Conformal, so ring orientation survives the projection, but not equal area:
//! scale grows with 1 / cos(latitude).  Fine for lot sized polygons.

use std::f64::consts::FRAC_PI_4;

use crate::vector::{GeoPoint, ProjectedPoint, Ring};

/// Reference radius in meters (WGS84 semi major axis, as used by EPSG:3857)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

pub fn project(point: &GeoPoint) -> ProjectedPoint {
    let lat = point.latitude.to_radians();

    ProjectedPoint {
        x: EARTH_RADIUS_M * point.longitude.to_radians(),
        y: EARTH_RADIUS_M * (FRAC_PI_4 + lat / 2.0).tan().ln(),
    }
}

pub fn project_ring(ring: &Ring) -> Vec<ProjectedPoint> {
    ring.open_points().iter().map(project).collect()
}
