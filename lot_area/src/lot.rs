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
//! Parcel and building footprint areas of one lot

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::dto::ParsedFeature;
use crate::units::AreaUnit;
use crate::vector::{compute_total_area_in, AreaResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LotMeasurement {
    pub unit: AreaUnit,
    pub parcel: AreaResult,
    /// Sum over every footprint returned for the lot
    pub buildings: AreaResult,
    pub building_count: usize,
}

impl LotMeasurement {
    /// Share of the parcel covered by buildings
    pub fn coverage(&self) -> Option<f64> {
        match (self.parcel, self.buildings) {
            (AreaResult::Available(parcel), AreaResult::Available(buildings)) => Some(buildings / parcel),
            _ => None,
        }
    }
}

/// Only the first parcel feature is measured, a point lies in one parcel.
///
/// The parcel and the building computations are independent and run in parallel.
pub fn measure_lot(parcels: &[ParsedFeature], buildings: &[ParsedFeature], unit: AreaUnit) -> LotMeasurement {
    if parcels.len() > 1 {
        debug!("{} parcels returned, measuring the first one", parcels.len());
    }

    let (parcel, building_area) = rayon::join(
        || {
            parcels
                .first()
                .map_or(AreaResult::Unavailable, |p| p.area_in(unit))
        },
        || {
            let polygons = buildings
                .iter()
                .flat_map(|b| b.polygons.iter().cloned())
                .collect_vec();
            compute_total_area_in(&polygons, unit)
        },
    );

    LotMeasurement {
        unit,
        parcel,
        buildings: building_area,
        building_count: buildings.len(),
    }
}
