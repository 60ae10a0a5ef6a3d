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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LotAreaError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Feature service returned an error (code {code:?}): {message}")]
    ProviderError {
        code: Option<i64>,
        message: String,
    },
    #[error("Feature #{feature_index}: invalid coordinate {detail}")]
    InvalidCoordinate {
        feature_index: usize,
        detail: String,
    },
    #[error("Document is not a feature set")]
    NotAFeatureSet,
    #[error("Unknown area unit '{0}'")]
    UnknownUnit(String),
    #[error("Unknown feature format '{0}'")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, LotAreaError>;
