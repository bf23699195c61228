// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Command-line utilities for querying a catalogue of radio-frequency-
interference (RFI) measurements: summary tables, CSV exports and
frequency/intensity plots keyed by observation date (Modified Julian Date).
 */

pub mod catalog;
pub mod cli;
pub(crate) mod constants;
pub mod epoch;
pub mod summary;
pub mod time;

pub use cli::{RfiCat, RfiCatError};

use crossbeam_utils::atomic::AtomicCell;

lazy_static::lazy_static! {
    /// Are progress bars enabled? The CLI entry point decides once, before
    /// anything that may draw a bar runs.
    pub static ref PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
}
