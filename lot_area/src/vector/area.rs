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
use std::fmt;

use log::warn;
use serde::Serialize;

use crate::units::AreaUnit;
use crate::vector::ring::classify_polygon;
use crate::vector::Polygon;

/// A measured area, rounded to a whole unit, or nothing usable
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AreaResult {
    Available(f64),
    Unavailable,
}

impl AreaResult {
    /// Rounds to a whole unit; zero, negative or non finite totals are unavailable.
    ///
    /// Rounding comes first so that a hole cancelling its outer ring up to
    /// floating point noise is not reported as a zero area.
    pub fn from_total(total: f64) -> AreaResult {
        let rounded = total.round();
        if !rounded.is_finite() || rounded <= 0.0 {
            return AreaResult::Unavailable;
        }
        AreaResult::Available(rounded)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            AreaResult::Available(v) => Some(*v),
            AreaResult::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.value().is_some()
    }

    pub fn unwrap_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl fmt::Display for AreaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaResult::Available(v) => write!(f, "{}", v),
            AreaResult::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Net projected area of a polygon in square meters, holes subtracted
pub fn net_area_m2(polygon: &Polygon) -> f64 {
    classify_polygon(polygon)
        .iter()
        .map(|r| r.signed_area_m2())
        .sum()
}

pub fn compute_area_in(polygon: &Polygon, unit: AreaUnit) -> AreaResult {
    let total_m2 = net_area_m2(polygon);

    let result = AreaResult::from_total(unit.from_square_meters(total_m2));
    if !result.is_available() && !polygon.is_empty() {
        warn!("Polygon with {} rings has no usable area ({} m2)", polygon.rings().len(), total_m2);
    }
    result
}

/// Area in square feet
pub fn compute_area(polygon: &Polygon) -> AreaResult {
    compute_area_in(polygon, AreaUnit::SquareFeet)
}

/// Adds up the available results, unavailable only if none are available
pub fn sum_results<I>(results: I) -> AreaResult
    where I: IntoIterator<Item = AreaResult>
{
    let mut total = 0.0;
    let mut any_available = false;

    for result in results {
        if let AreaResult::Available(area) = result {
            total += area;
            any_available = true;
        }
    }

    if any_available {
        AreaResult::Available(total)
    } else {
        AreaResult::Unavailable
    }
}

/// Sum over several polygons, unavailable ones count as zero
pub fn compute_total_area_in(polygons: &[Polygon], unit: AreaUnit) -> AreaResult {
    sum_results(polygons.iter().map(|p| compute_area_in(p, unit)))
}

pub fn compute_total_area(polygons: &[Polygon]) -> AreaResult {
    compute_total_area_in(polygons, AreaUnit::SquareFeet)
}
