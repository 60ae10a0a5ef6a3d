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
use std::cmp::Ordering;

use geo::algorithm::contains::Contains;
use geo::{LineString, MultiPolygon, Point, Polygon as GeoPolygon};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::vector::ring::{classify_polygon, ClassifiedRing, RingRole};

/// A longitude / latitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        GeoPoint { longitude, latitude }
    }

    pub fn is_in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }
}

/// Planar coordinates in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// One boundary of a polygon.  The closing point may or may not be repeated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<GeoPoint>,
}

impl Ring {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Ring { points }
    }

    pub fn from_lon_lat(coords: &[(f64, f64)]) -> Self {
        Ring {
            points: coords.iter().map(|&(lon, lat)| GeoPoint::new(lon, lat)).collect(),
        }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// The points without an explicit closing point
    pub fn open_points(&self) -> &[GeoPoint] {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 && first == last => {
                &self.points[..self.points.len() - 1]
            }
            _ => &self.points,
        }
    }

    /// At least 3 vertices once the closing point is dropped
    pub fn is_well_formed(&self) -> bool {
        self.open_points().len() >= 3
    }

    pub fn reversed(&self) -> Ring {
        let mut points = self.points.clone();
        points.reverse();
        Ring { points }
    }
}

/// Rings of a single polygon; holes are told apart by orientation, not position
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Polygon { rings }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// One `geo` polygon per outer ring, holes go to the smallest outer ring
    /// containing one of their vertices (the largest outer ring if none does).
    ///
    /// Malformed rings are dropped.
    pub fn to_geo(&self) -> MultiPolygon<f64> {
        let (outers, holes): (Vec<ClassifiedRing>, Vec<ClassifiedRing>) = classify_polygon(self)
            .into_iter()
            .partition(|r| r.role == RingRole::Outer);

        let exteriors: Vec<GeoPolygon<f64>> = outers
            .iter()
            .map(|r| GeoPolygon::new(ring_to_line_string(&self.rings[r.ring_index]), vec![]))
            .collect();
        let mut interiors: Vec<Vec<LineString<f64>>> = vec![Vec::new(); outers.len()];

        for hole in holes.iter() {
            let ring = &self.rings[hole.ring_index];

            let containing = (0..outers.len())
                .filter(|&outer_idx| {
                    ring.open_points()
                        .iter()
                        .any(|p| exteriors[outer_idx].contains(&Point::new(p.longitude, p.latitude)))
                })
                .min_by(|&a, &b| outers[a].area_m2.partial_cmp(&outers[b].area_m2).unwrap_or(Ordering::Equal));

            let largest = || {
                (0..outers.len())
                    .max_by(|&a, &b| outers[a].area_m2.partial_cmp(&outers[b].area_m2).unwrap_or(Ordering::Equal))
            };

            match containing.or_else(largest) {
                Some(outer_idx) => interiors[outer_idx].push(ring_to_line_string(ring)),
                None => debug!("Hole #{} has no outer ring, dropped", hole.ring_index),
            }
        }

        MultiPolygon(
            exteriors
                .into_iter()
                .zip(interiors)
                .map(|(exterior, holes)| {
                    let (exterior_ring, _) = exterior.into_inner();
                    GeoPolygon::new(exterior_ring, holes)
                })
                .collect(),
        )
    }
}

fn ring_to_line_string(ring: &Ring) -> LineString<f64> {
    ring.points
        .iter()
        .map(|p| (p.longitude, p.latitude))
        .collect::<Vec<_>>()
        .into()
}

impl From<&LineString<f64>> for Ring {
    fn from(ls: &LineString<f64>) -> Self {
        Ring {
            points: ls.0.iter().map(|c| GeoPoint::new(c.x, c.y)).collect(),
        }
    }
}

impl From<&GeoPolygon<f64>> for Polygon {
    fn from(p: &GeoPolygon<f64>) -> Self {
        let mut rings = Vec::with_capacity(1 + p.interiors().len());
        rings.push(Ring::from(p.exterior()));
        rings.extend(p.interiors().iter().map(Ring::from));
        Polygon { rings }
    }
}

pub fn polygons_from_multi_polygon(mp: &MultiPolygon<f64>) -> Vec<Polygon> {
    mp.0.iter().map(Polygon::from).collect()
}
