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

use itertools::Itertools;
use log::debug;

use crate::vector::projection::project_ring;
use crate::vector::{Polygon, ProjectedPoint, Ring};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    /// Zero or non finite signed area
    Degenerate,
}

impl Orientation {
    pub fn from_signed_area(signed_area: f64) -> Orientation {
        if !signed_area.is_finite() || signed_area == 0.0 {
            Orientation::Degenerate
        } else if signed_area > 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Degenerate => Orientation::Degenerate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    Outer,
    Hole,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedRing {
    /// Position of the ring in its polygon
    pub ring_index: usize,
    pub role: RingRole,
    pub orientation: Orientation,
    /// Unsigned, in projected square meters
    pub area_m2: f64,
}

impl ClassifiedRing {
    pub fn signed_area_m2(&self) -> f64 {
        match self.role {
            RingRole::Outer => self.area_m2,
            RingRole::Hole => -self.area_m2,
        }
    }
}

/// Shoelace on the raw longitude / latitude values, sum of (x2 - x1)(y1 + y2) / 2.
///
/// Positive for clockwise rings (x east, y north), negative for counter clockwise.
/// Only the sign is meaningful.
pub fn signed_planar_area(ring: &Ring) -> f64 {
    let points = ring.open_points();
    if points.len() < 3 {
        return 0.0;
    }

    points
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(p1, p2)| (p2.longitude - p1.longitude) * (p1.latitude + p2.latitude))
        .sum::<f64>()
        / 2.0
}

/// Unsigned shoelace area of the projected ring in square meters
pub fn projected_area(points: &[ProjectedPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    //Relative to the first vertex, mercator coordinates are in the millions
    let origin = points[0];

    let twice_area: f64 = points
        .iter()
        .map(|p| (p.x - origin.x, p.y - origin.y))
        .circular_tuple_windows::<(_, _)>()
        .map(|((x1, y1), (x2, y2))| x1 * y2 - x2 * y1)
        .sum();

    twice_area.abs() / 2.0
}

/// Tags every well formed ring of the polygon as outer or hole.
///
/// The ring enclosing the most (largest absolute signed area) sets the winding
/// convention of the polygon: rings winding the same way are outer boundaries,
/// rings winding the other way are holes.  Ring order plays no part, so
/// clockwise-outer (ESRI) data is classified purely by sign, and counter
/// clockwise outer rings (GeoJSON) are not mistaken for holes.
///
/// Rings with less than 3 vertices are left out.
pub fn classify_polygon(polygon: &Polygon) -> Vec<ClassifiedRing> {
    let oriented = polygon
        .rings()
        .iter()
        .enumerate()
        .filter(|(ring_idx, ring)| {
            if !ring.is_well_formed() {
                debug!("Skipping ring #{} with {} points", ring_idx, ring.points().len());
                return false;
            }
            true
        })
        .map(|(ring_idx, ring)| (ring_idx, ring, signed_planar_area(ring)))
        .collect_vec();

    let outer_orientation = oriented
        .iter()
        .map(|(_, _, signed_area)| *signed_area)
        .filter(|signed_area| Orientation::from_signed_area(*signed_area) != Orientation::Degenerate)
        .max_by(|a, b| a.abs().partial_cmp(&b.abs()).unwrap_or(Ordering::Equal))
        .map(Orientation::from_signed_area)
        .unwrap_or(Orientation::Clockwise);

    oriented
        .into_iter()
        .map(|(ring_index, ring, signed_area)| {
            let orientation = Orientation::from_signed_area(signed_area);
            let role = if orientation == outer_orientation.opposite() {
                RingRole::Hole
            } else {
                RingRole::Outer
            };

            ClassifiedRing {
                ring_index,
                role,
                orientation,
                area_m2: projected_area(&project_ring(ring)),
            }
        })
        .collect()
}
