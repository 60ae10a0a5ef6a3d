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
//! Feature responses of GIS query endpoints (ESRI JSON and GeoJSON)

mod esri;
mod geojson;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{LotAreaError, Result};
use crate::units::AreaUnit;
use crate::vector::{compute_total_area_in, AreaResult, GeoPoint, Polygon, Ring};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFormat {
    Esri,
    #[serde(rename = "geojson")]
    GeoJson,
    /// GeoJSON if the document says so, ESRI otherwise
    Auto,
}

impl Default for FeatureFormat {
    fn default() -> Self {
        FeatureFormat::Esri
    }
}

impl fmt::Display for FeatureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureFormat::Esri => write!(f, "esri"),
            FeatureFormat::GeoJson => write!(f, "geojson"),
            FeatureFormat::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for FeatureFormat {
    type Err = LotAreaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "esri" => Ok(FeatureFormat::Esri),
            "geojson" => Ok(FeatureFormat::GeoJson),
            "auto" => Ok(FeatureFormat::Auto),
            _ => Err(LotAreaError::UnknownFormat(s.to_string())),
        }
    }
}

/// A parcel or building footprint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedFeature {
    /// OBJECTID / FID attribute or GeoJSON id
    pub id: Option<String>,
    pub polygons: Vec<Polygon>,
}

impl ParsedFeature {
    pub fn area_in(&self, unit: AreaUnit) -> AreaResult {
        compute_total_area_in(&self.polygons, unit)
    }
}

pub fn parse_features(json: &str, format: FeatureFormat) -> Result<Vec<ParsedFeature>> {
    let value: Value = serde_json::from_str(json)?;

    if let Some(error) = value.get("error") {
        return Err(LotAreaError::ProviderError {
            code: error.get("code").and_then(Value::as_i64),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message")
                .to_string(),
        });
    }

    let format = match format {
        FeatureFormat::Auto => detect_format(&value),
        f => f,
    };

    debug!("Parsing features as {}", format);

    match format {
        FeatureFormat::GeoJson => geojson::parse_geojson(value),
        _ => esri::parse_esri(value),
    }
}

pub fn read_features(path: &Path, format: FeatureFormat) -> Result<Vec<ParsedFeature>> {
    let json = fs::read_to_string(path).map_err(|source| LotAreaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_features(&json, format)
}

fn detect_format(value: &Value) -> FeatureFormat {
    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") | Some("Feature") => FeatureFormat::GeoJson,
        _ => FeatureFormat::Esri,
    }
}

/// One position as sent by the provider, z and m may be null
pub(crate) type Ordinates = Vec<Option<f64>>;

/// [lon, lat, ...] arrays to rings, extra ordinates (z, m) are dropped
fn polygon_from_coords(feature_index: usize, rings: &[Vec<Ordinates>]) -> Result<Polygon> {
    let mut polygon_rings = Vec::with_capacity(rings.len());

    for ring in rings {
        let mut points = Vec::with_capacity(ring.len());
        for coord in ring {
            let point = match coord.as_slice() {
                [Some(lon), Some(lat), ..] => GeoPoint::new(*lon, *lat),
                _ => {
                    return Err(LotAreaError::InvalidCoordinate {
                        feature_index,
                        detail: format!("{:?}", coord),
                    })
                }
            };
            if !point.is_in_range() {
                warn!("Feature #{} has a point out of lon/lat range: {:?}", feature_index, point);
            }
            points.push(point);
        }
        polygon_rings.push(Ring::new(points));
    }

    Ok(Polygon::new(polygon_rings))
}

fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
