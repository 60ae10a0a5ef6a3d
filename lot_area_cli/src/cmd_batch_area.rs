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
use std::fs::{self, remove_file};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use itertools::Itertools;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use structopt::StructOpt;

use lot_area::config::AreaConfig;
use lot_area::dto::{read_features, FeatureFormat, ParsedFeature};
use lot_area::units::AreaUnit;

use crate::area_args::AreaArgs;

#[derive(StructOpt)]
pub struct BatchAreaArgs {
    #[structopt(long, parse(from_os_str), help="Query responses (.json) will be read from this directory")]
    pub(crate) in_dir: PathBuf,

    #[structopt(long, parse(from_os_str), help="One row per feature")]
    pub(crate) out_csv: PathBuf,

    #[structopt(long)]
    pub(crate) clean: bool,

    #[structopt(flatten)]
    pub(crate) area: AreaArgs,
}

#[derive(Serialize)]
struct AreaRow<'a> {
    file: &'a str,
    feature_index: usize,
    feature_id: Option<&'a str>,
    //empty when unavailable
    area: Option<f64>,
    unit: &'static str,
}

fn json_files(in_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(in_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |e| e == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn write_rows(out_csv: &Path, files: &[(String, Vec<ParsedFeature>)], unit: AreaUnit) -> Result<usize> {
    let mut writer = csv::Writer::from_path(out_csv)?;
    let mut num_rows = 0;

    for (file, features) in files {
        for (feature_index, feature) in features.iter().enumerate() {
            writer.serialize(AreaRow {
                file,
                feature_index,
                feature_id: feature.id.as_deref(),
                area: feature.area_in(unit).value(),
                unit: unit.abbreviation(),
            })?;
            num_rows += 1;
        }
    }

    writer.flush()?;
    Ok(num_rows)
}

/// Measures every feature of every response in a directory.  Files that do not parse are skipped.
pub fn batch_area(args: &BatchAreaArgs, config: &AreaConfig) -> Result<usize> {
    if args.clean && args.out_csv.exists() {
        remove_file(&args.out_csv)?;
    }

    if args.out_csv.exists() {
        println!("{:?} already exists and --clean not passed, doing nothing", &args.out_csv);
        return Ok(0);
    }

    let now = Instant::now();
    let format: FeatureFormat = args.area.format(config);
    let files = json_files(&args.in_dir)?;

    info!("Reading {} files from {:?}", files.len(), &args.in_dir);

    let parsed = files
        .par_iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_default();
            (file_name, read_features(path, format))
        })
        .collect::<Vec<_>>();

    let parsed = parsed
        .into_iter()
        .filter_map(|(file_name, features)| match features {
            Ok(features) => Some((file_name, features)),
            Err(e) => {
                warn!("Skipping {}: {}", file_name, e);
                None
            }
        })
        .collect_vec();

    let num_rows = write_rows(&args.out_csv, &parsed, args.area.unit(config))?;

    info!("Wrote {} rows to {:?} in {:?}", num_rows, &args.out_csv, now.elapsed());

    Ok(num_rows)
}
