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
use std::path::PathBuf;

use anyhow::Result;
use geo::algorithm::chamberlain_duquette_area::ChamberlainDuquetteArea;
use structopt::StructOpt;

use lot_area::config::AreaConfig;
use lot_area::dto::read_features;
use lot_area::vector::net_area_m2;

use crate::area_args::AreaArgs;

/// Mercator areas are too large by about sec(latitude)^2, this shows by how much
#[derive(StructOpt)]
pub struct CompareAreaArgs {
    #[structopt(long, parse(from_os_str))]
    pub(crate) in_json: PathBuf,

    #[structopt(flatten)]
    pub(crate) area: AreaArgs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaComparison {
    pub feature_index: usize,
    pub polygon_index: usize,
    pub mercator_m2: f64,
    pub spherical_m2: f64,
}

impl AreaComparison {
    pub fn ratio(&self) -> f64 {
        self.mercator_m2 / self.spherical_m2
    }
}

pub fn compare_area(args: &CompareAreaArgs, config: &AreaConfig) -> Result<Vec<AreaComparison>> {
    let features = read_features(&args.in_json, args.area.format(config))?;

    let mut comparisons = Vec::new();

    for (feature_index, feature) in features.iter().enumerate() {
        for (polygon_index, polygon) in feature.polygons.iter().enumerate() {
            let geo_parts = polygon.to_geo();
            if geo_parts.0.is_empty() {
                continue;
            }

            comparisons.push(AreaComparison {
                feature_index,
                polygon_index,
                mercator_m2: net_area_m2(polygon),
                spherical_m2: geo_parts
                    .0
                    .iter()
                    .map(|part| part.chamberlain_duquette_unsigned_area())
                    .sum(),
            });
        }
    }

    println!("{}", "*".repeat(80));
    for c in comparisons.iter() {
        println!("Feature {} polygon {}\nMercator: {:.2} m2 Spherical: {:.2} m2 Ratio: {:.4}",
                 c.feature_index, c.polygon_index,
                 c.mercator_m2, c.spherical_m2, c.ratio());
    }

    Ok(comparisons)
}
