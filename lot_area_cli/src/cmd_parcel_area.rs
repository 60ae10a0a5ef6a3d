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
use log::{debug, info};
use structopt::StructOpt;

use lot_area::config::AreaConfig;
use lot_area::dto::read_features;
use lot_area::vector::AreaResult;

use crate::area_args::AreaArgs;

#[derive(StructOpt)]
pub struct ParcelAreaArgs {
    #[structopt(long, parse(from_os_str), help="Parcel query response")]
    pub(crate) in_json: PathBuf,

    #[structopt(flatten)]
    pub(crate) area: AreaArgs,
}

pub fn parcel_area(args: &ParcelAreaArgs, config: &AreaConfig) -> Result<AreaResult> {
    let unit = args.area.unit(config);
    let parcels = read_features(&args.in_json, args.area.format(config))?;

    info!("Read {} parcel features from {:?}", parcels.len(), &args.in_json);

    let area = match parcels.first() {
        Some(parcel) => {
            debug!("Measuring parcel {:?}", parcel.id);
            parcel.area_in(unit)
        }
        None => AreaResult::Unavailable,
    };

    println!("{} {}", area, unit.abbreviation());

    Ok(area)
}
