// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all rficat-related errors. This should be the *only* error
//! enum that is publicly visible.

use thiserror::Error;

use super::plot::PlotError;
use crate::{catalog::CatalogError, time::DateParseError};

#[derive(Error, Debug)]
pub enum RfiCatError {
    /// An error around user-supplied dates.
    #[error("{0}")]
    Date(String),

    /// An error around reading the catalogue.
    #[error("{0}")]
    Catalog(String),

    /// An error around rendering or writing a plot.
    #[error("{0}")]
    Plot(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<DateParseError> for RfiCatError {
    fn from(e: DateParseError) -> Self {
        Self::Date(e.to_string())
    }
}

impl From<CatalogError> for RfiCatError {
    fn from(e: CatalogError) -> Self {
        let s = e.to_string();
        match e {
            CatalogError::DoesNotExist(_) | CatalogError::Csv(_) => Self::Catalog(s),
            CatalogError::IO(_) => Self::Generic(s),
        }
    }
}

impl From<PlotError> for RfiCatError {
    fn from(e: PlotError) -> Self {
        let s = e.to_string();
        match e {
            #[cfg(not(feature = "plotting"))]
            PlotError::NoPlottingFeature => Self::Plot(s),
            #[cfg(feature = "plotting")]
            PlotError::Draw(_) => Self::Plot(s),
            PlotError::IO(_) => Self::Generic(s),
        }
    }
}

impl From<csv::Error> for RfiCatError {
    fn from(e: csv::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for RfiCatError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
