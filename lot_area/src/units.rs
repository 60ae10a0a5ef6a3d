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
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LotAreaError;

pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.76391041671;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    SquareFeet,
    SquareMeters,
}

impl Default for AreaUnit {
    fn default() -> Self {
        AreaUnit::SquareFeet
    }
}

impl AreaUnit {
    pub fn from_square_meters(self, area_m2: f64) -> f64 {
        match self {
            AreaUnit::SquareFeet => area_m2 * SQUARE_FEET_PER_SQUARE_METER,
            AreaUnit::SquareMeters => area_m2,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "sqft",
            AreaUnit::SquareMeters => "sqm",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaUnit::SquareFeet => write!(f, "square_feet"),
            AreaUnit::SquareMeters => write!(f, "square_meters"),
        }
    }
}

impl FromStr for AreaUnit {
    type Err = LotAreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square_feet" | "sqft" | "ft2" => Ok(AreaUnit::SquareFeet),
            "square_meters" | "sqm" | "m2" => Ok(AreaUnit::SquareMeters),
            _ => Err(LotAreaError::UnknownUnit(s.to_string())),
        }
    }
}
