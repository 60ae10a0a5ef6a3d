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
use std::fs::{create_dir_all, write};
use std::path::PathBuf;

pub const PARCEL_JSON: &str = r#"{
    "geometryType": "esriGeometryPolygon",
    "features": [
        {
            "attributes": {"OBJECTID": 101},
            "geometry": {"rings": [[[0.001, 0.001], [0.001, 0.002], [0.002, 0.002], [0.002, 0.001], [0.001, 0.001]]]}
        }
    ]
}"#;

pub const BUILDINGS_JSON: &str = r#"{
    "features": [
        {
            "attributes": {"OBJECTID": 1},
            "geometry": {"rings": [[[0.0012, 0.0012], [0.0012, 0.0014], [0.0014, 0.0014], [0.0014, 0.0012], [0.0012, 0.0012]]]}
        },
        {
            "attributes": {"OBJECTID": 2},
            "geometry": {"rings": [[[0.0016, 0.0016], [0.0016, 0.0017], [0.0017, 0.0017], [0.0017, 0.0016]]]}
        },
        {
            "attributes": {"OBJECTID": 3},
            "geometry": {"rings": [[[0.0018, 0.0018], [0.0019, 0.0019]]]}
        }
    ]
}"#;

/// A path in a per test directory under the system temp dir
pub fn get_temp_filename(test_name: &str, file_name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("lot_area_tests_{}", std::process::id()));
    dir.push(test_name);
    create_dir_all(&dir).unwrap();
    dir.push(file_name);
    dir
}

pub fn write_temp_file(test_name: &str, file_name: &str, contents: &str) -> PathBuf {
    let path = get_temp_filename(test_name, file_name);
    write(&path, contents).unwrap();
    path
}
