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
use structopt::StructOpt;

use lot_area::config::AreaConfig;
use lot_area::dto::read_features;
use lot_area::lot::{measure_lot, LotMeasurement};

use crate::area_args::AreaArgs;

#[derive(StructOpt)]
pub struct MeasureLotArgs {
    #[structopt(long, parse(from_os_str), help="Parcel query response")]
    pub(crate) parcel_json: PathBuf,

    #[structopt(long, parse(from_os_str), help="Building footprint query response")]
    pub(crate) building_json: PathBuf,

    #[structopt(flatten)]
    pub(crate) area: AreaArgs,
}

pub fn run_measure_lot(args: &MeasureLotArgs, config: &AreaConfig) -> Result<LotMeasurement> {
    let format = args.area.format(config);

    let (parcels, buildings) = rayon::join(
        || read_features(&args.parcel_json, format),
        || read_features(&args.building_json, format),
    );

    let lot = measure_lot(&parcels?, &buildings?, args.area.unit(config));

    let unit = lot.unit.abbreviation();
    println!("Parcel area: {} {}", lot.parcel, unit);
    println!("Building area: {} {} ({} buildings)", lot.buildings, unit, lot.building_count);
    match lot.coverage() {
        Some(c) => println!("Coverage: {:.1}%", 100.0 * c),
        None => println!("Coverage: unavailable"),
    }

    Ok(lot)
}
