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
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::dto::FeatureFormat;
use crate::errors::{LotAreaError, Result};
use crate::units::AreaUnit;

/// Settings read from a toml file, every key is optional
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AreaConfig {
    pub unit: AreaUnit,
    pub feature_format: FeatureFormat,
}

impl AreaConfig {
    pub fn from_toml_str(s: &str) -> Result<AreaConfig> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<AreaConfig> {
        let contents = fs::read_to_string(path).map_err(|source| LotAreaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        AreaConfig::from_toml_str(&contents)
    }
}
