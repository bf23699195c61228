// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The RFI measurement catalogue: the observation record, a composable query
//! over it, and the storage seam behind which a backend runs that query.

mod csv;

pub use self::csv::CsvCatalog;

use std::ops::Bound;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vec1::Vec1;

/// One row of the master RFI catalogue. Rows are immutable and persisted
/// externally; this tool only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// The Modified Julian Date of the scan, including the day fraction.
    pub mjd: f64,

    /// The receiver (frontend) name.
    pub frontend: String,

    /// The backend name.
    pub backend: String,

    /// The project identifier.
    pub projid: String,

    /// The measured frequency \[MHz\].
    pub frequency_mhz: f64,

    /// The measured intensity \[Jy\].
    pub intensity_jy: f64,
}

/// Which end of the MJD axis comes first in query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MjdOrder {
    #[default]
    Ascending,
    Descending,
}

/// A window on the MJD axis. [`Bound`] is used so that the inclusive
/// user-facing date ranges and the strict `mjd < target` nearest-epoch probe
/// compose through the same type.
#[derive(Debug, Clone, Copy)]
pub struct MjdWindow {
    pub start: Bound<f64>,
    pub end: Bound<f64>,
}

impl MjdWindow {
    /// An inclusive window over `[start_mjd, end_mjd]`.
    pub fn between(start_mjd: f64, end_mjd: f64) -> MjdWindow {
        MjdWindow {
            start: Bound::Included(start_mjd),
            end: Bound::Included(end_mjd),
        }
    }

    /// A window matching exactly one epoch.
    pub fn at(mjd: f64) -> MjdWindow {
        MjdWindow::between(mjd, mjd)
    }

    /// An inclusive window where either end may be open.
    pub fn from_optional(start_mjd: Option<f64>, end_mjd: Option<f64>) -> MjdWindow {
        MjdWindow {
            start: start_mjd.map_or(Bound::Unbounded, Bound::Included),
            end: end_mjd.map_or(Bound::Unbounded, Bound::Included),
        }
    }

    pub fn contains(&self, mjd: f64) -> bool {
        let above_start = match self.start {
            Bound::Included(s) => mjd >= s,
            Bound::Excluded(s) => mjd > s,
            Bound::Unbounded => true,
        };
        let below_end = match self.end {
            Bound::Included(e) => mjd <= e,
            Bound::Excluded(e) => mjd < e,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }
}

/// A composed predicate over the catalogue, plus result ordering and an
/// optional row limit. Built once per invocation and handed to a [`Catalog`]
/// backend; nothing here assumes any particular storage engine.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub(crate) mjd: Option<MjdWindow>,
    pub(crate) receivers: Option<Vec1<String>>,
    pub(crate) freq_mhz: Option<(f64, f64)>,
    pub(crate) order: MjdOrder,
    pub(crate) limit: Option<usize>,
}

impl CatalogQuery {
    pub fn new() -> CatalogQuery {
        CatalogQuery::default()
    }

    /// Restrict matches to this window on the MJD axis.
    pub fn mjd_window(mut self, window: MjdWindow) -> CatalogQuery {
        self.mjd = Some(window);
        self
    }

    /// Restrict matches to `mjd >= target`.
    pub fn mjd_at_least(self, target: f64) -> CatalogQuery {
        self.mjd_window(MjdWindow {
            start: Bound::Included(target),
            end: Bound::Unbounded,
        })
    }

    /// Restrict matches to `mjd < target`.
    pub fn mjd_below(self, target: f64) -> CatalogQuery {
        self.mjd_window(MjdWindow {
            start: Bound::Unbounded,
            end: Bound::Excluded(target),
        })
    }

    /// Restrict matches to these receiver (frontend) names.
    pub fn receivers(mut self, receivers: Vec1<String>) -> CatalogQuery {
        self.receivers = Some(receivers);
        self
    }

    /// Restrict matches to the inclusive frequency window
    /// `[centre − width/2, centre + width/2]` \[MHz\].
    pub fn freq_window_mhz(mut self, centre: f64, width: f64) -> CatalogQuery {
        self.freq_mhz = Some((centre - width / 2.0, centre + width / 2.0));
        self
    }

    /// Order results along the MJD axis.
    pub fn order(mut self, order: MjdOrder) -> CatalogQuery {
        self.order = order;
        self
    }

    /// Return at most this many rows.
    pub fn limit(mut self, limit: usize) -> CatalogQuery {
        self.limit = Some(limit);
        self
    }

    /// Does this observation satisfy every filter in the query?
    pub fn matches(&self, obs: &Observation) -> bool {
        if let Some(window) = &self.mjd {
            if !window.contains(obs.mjd) {
                return false;
            }
        }
        if let Some(receivers) = &self.receivers {
            if !receivers.iter().any(|r| *r == obs.frontend) {
                return false;
            }
        }
        if let Some((low, high)) = self.freq_mhz {
            if obs.frequency_mhz < low || obs.frequency_mhz > high {
                return false;
            }
        }
        true
    }
}

/// The storage seam: anything that can run a [`CatalogQuery`] and return the
/// matching rows, ordered and limited as the query asks.
pub trait Catalog {
    fn select(&self, query: &CatalogQuery) -> Result<Vec<Observation>, CatalogError>;
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalogue file '{0}' doesn't exist")]
    DoesNotExist(PathBuf),

    #[error("Couldn't read the catalogue: {0}")]
    Csv(#[from] ::csv::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
