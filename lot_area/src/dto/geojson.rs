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
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::dto::{id_to_string, polygon_from_coords, Ordinates, ParsedFeature};
use crate::errors::{LotAreaError, Result};

#[derive(Deserialize)]
struct GeoJsonFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    geometry: Option<GeoJsonGeometry>,
}

#[derive(Deserialize)]
struct GeoJsonGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// A FeatureCollection or a single Feature
pub(crate) fn parse_geojson(value: Value) -> Result<Vec<ParsedFeature>> {
    let is_single_feature = value.get("type").and_then(Value::as_str) == Some("Feature");

    let features: Vec<GeoJsonFeature> = if is_single_feature {
        vec![serde_json::from_value(value)?]
    } else {
        match value.get("features") {
            Some(features) if features.is_array() => serde_json::from_value(features.clone())?,
            _ => return Err(LotAreaError::NotAFeatureSet),
        }
    };

    let mut parsed = Vec::with_capacity(features.len());

    for (feature_index, feature) in features.into_iter().enumerate() {
        let geometry = match feature.geometry {
            Some(g) => g,
            None => {
                debug!("Feature #{} has no geometry, skipping", feature_index);
                continue;
            }
        };

        let polygons = match geometry.kind.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<Ordinates>> = serde_json::from_value(geometry.coordinates)?;
                vec![polygon_from_coords(feature_index, &rings)?]
            }
            "MultiPolygon" => {
                let members: Vec<Vec<Vec<Ordinates>>> = serde_json::from_value(geometry.coordinates)?;
                members
                    .iter()
                    .map(|rings| polygon_from_coords(feature_index, rings))
                    .collect::<Result<Vec<_>>>()?
            }
            other => {
                debug!("Feature #{} is a {}, skipping", feature_index, other);
                continue;
            }
        };

        parsed.push(ParsedFeature {
            id: feature.id.as_ref().and_then(id_to_string),
            polygons,
        });
    }

    Ok(parsed)
}
