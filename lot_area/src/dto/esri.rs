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
use serde_json::{Map, Value};

use crate::dto::{id_to_string, polygon_from_coords, Ordinates, ParsedFeature};
use crate::errors::{LotAreaError, Result};

#[derive(Deserialize)]
struct EsriFeatureSet {
    features: Vec<EsriFeature>,
}

#[derive(Deserialize)]
struct EsriFeature {
    #[serde(default)]
    attributes: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<EsriGeometry>,
}

/// Only polygons have rings
#[derive(Deserialize)]
struct EsriGeometry {
    #[serde(default)]
    rings: Option<Vec<Vec<Ordinates>>>,
}

impl EsriFeature {
    fn object_id(&self) -> Option<String> {
        let attributes = self.attributes.as_ref()?;
        attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("objectid") || k.eq_ignore_ascii_case("fid"))
            .and_then(|(_, v)| id_to_string(v))
    }
}

/// Every ring of a feature goes into one polygon, orientation tells holes apart
pub(crate) fn parse_esri(value: Value) -> Result<Vec<ParsedFeature>> {
    if !value.get("features").map_or(false, Value::is_array) {
        return Err(LotAreaError::NotAFeatureSet);
    }

    let feature_set: EsriFeatureSet = serde_json::from_value(value)?;

    let mut parsed = Vec::with_capacity(feature_set.features.len());

    for (feature_index, feature) in feature_set.features.iter().enumerate() {
        let rings = match feature.geometry.as_ref().and_then(|g| g.rings.as_ref()) {
            Some(rings) => rings,
            None => {
                debug!("Feature #{} has no polygon geometry, skipping", feature_index);
                continue;
            }
        };

        parsed.push(ParsedFeature {
            id: feature.object_id(),
            polygons: vec![polygon_from_coords(feature_index, rings)?],
        });
    }

    Ok(parsed)
}
