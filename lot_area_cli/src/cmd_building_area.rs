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
use itertools::Itertools;
use log::info;
use structopt::StructOpt;

use lot_area::config::AreaConfig;
use lot_area::dto::read_features;
use lot_area::vector::{compute_total_area_in, AreaResult};

use crate::area_args::AreaArgs;

#[derive(StructOpt)]
pub struct BuildingAreaArgs {
    #[structopt(long, parse(from_os_str), help="Building footprint query response")]
    pub(crate) in_json: PathBuf,

    #[structopt(flatten)]
    pub(crate) area: AreaArgs,
}

/// Total footprint area, several buildings can stand on one lot
pub fn building_area(args: &BuildingAreaArgs, config: &AreaConfig) -> Result<AreaResult> {
    let unit = args.area.unit(config);
    let buildings = read_features(&args.in_json, args.area.format(config))?;

    info!("Read {} building features from {:?}", buildings.len(), &args.in_json);

    let polygons = buildings
        .into_iter()
        .flat_map(|b| b.polygons)
        .collect_vec();

    let area = compute_total_area_in(&polygons, unit);

    println!("{} {} in {} polygons", area, unit.abbreviation(), polygons.len());

    Ok(area)
}
