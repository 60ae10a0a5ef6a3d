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
use structopt::StructOpt;

use lot_area::config::AreaConfig;
use lot_area::dto::FeatureFormat;
use lot_area::units::AreaUnit;

/// Overrides for the config file
#[derive(StructOpt, Default)]
pub struct AreaArgs {
    #[structopt(long, help="square_feet (sqft) or square_meters (sqm)")]
    pub(crate) unit: Option<AreaUnit>,

    #[structopt(long, help="esri, geojson or auto")]
    pub(crate) format: Option<FeatureFormat>,
}

impl AreaArgs {
    pub fn unit(&self, config: &AreaConfig) -> AreaUnit {
        self.unit.unwrap_or(config.unit)
    }

    pub fn format(&self, config: &AreaConfig) -> FeatureFormat {
        self.format.unwrap_or(config.feature_format)
    }
}
