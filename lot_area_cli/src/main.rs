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
mod area_args;
mod cmd_batch_area;
mod cmd_building_area;
mod cmd_compare_area;
mod cmd_measure_lot;
mod cmd_parcel_area;

#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, LevelFilter};
use simple_logger::SimpleLogger;
use structopt::StructOpt;

use lot_area::config::AreaConfig;

use crate::cmd_batch_area::{batch_area, BatchAreaArgs};
use crate::cmd_building_area::{building_area, BuildingAreaArgs};
use crate::cmd_compare_area::{compare_area, CompareAreaArgs};
use crate::cmd_measure_lot::{run_measure_lot, MeasureLotArgs};
use crate::cmd_parcel_area::{parcel_area, ParcelAreaArgs};

#[derive(StructOpt)]
struct Cli {

    #[structopt(long, default_value = "Warn")]
    log_level: LevelFilter,

    #[structopt(long, parse(from_os_str), help="Toml file with unit and feature_format")]
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    cmd: Command
}

#[derive(StructOpt)]
enum Command {
    #[structopt(help="Area of the first parcel in a parcel query response")]
    ParcelArea(ParcelAreaArgs),

    #[structopt(help="Total area of all building footprints in a query response")]
    BuildingArea(BuildingAreaArgs),

    #[structopt(help="Parcel area, building area and coverage of a lot")]
    MeasureLot(MeasureLotArgs),

    #[structopt(help="Writes a csv with the area of every feature of every response in a directory")]
    BatchArea(BatchAreaArgs),

    #[structopt(help="Compares mercator areas against spherical (Chamberlain Duquette) areas")]
    CompareArea(CompareAreaArgs),
}

fn run() -> Result<()> {

    let args = Cli::from_args();

    SimpleLogger::new().with_level(args.log_level).init()?;

    let config = match &args.config {
        Some(path) => AreaConfig::from_file(path)?,
        None => AreaConfig::default(),
    };

    debug!("Using {:?}", config);

    match &args.cmd {
        Command::ParcelArea(r) => {
            parcel_area(r, &config)?;
        }
        Command::BuildingArea(r) => {
            building_area(r, &config)?;
        }
        Command::MeasureLot(r) => {
            run_measure_lot(r, &config)?;
        }
        Command::BatchArea(r) => {
            batch_area(r, &config)?;
        }
        Command::CompareArea(r) => {
            compare_area(r, &config)?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
