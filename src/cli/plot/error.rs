// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum PlotError {
    #[cfg(not(feature = "plotting"))]
    #[error("rficat was not compiled with the \"plotting\" feature.\nYou need to compile rficat from source with this feature to plot RFI data.")]
    NoPlottingFeature,

    #[cfg(feature = "plotting")]
    #[error("Error from the plotters library: {0}")]
    Draw(Box<dyn std::error::Error>),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
