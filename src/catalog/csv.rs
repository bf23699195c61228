// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A CSV-file-backed catalogue. The expected header is
//! `mjd,frontend,backend,projid,frequency_mhz,intensity_jy`; this is the one
//! concrete [`Catalog`] backend, sitting behind the same seam a SQL engine
//! would.

use std::path::Path;

use log::debug;

use super::{Catalog, CatalogError, CatalogQuery, MjdOrder, Observation};

pub struct CsvCatalog {
    rows: Vec<Observation>,
}

impl CsvCatalog {
    /// Read a whole catalogue file into memory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<CsvCatalog, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::DoesNotExist(path.to_path_buf()));
        }
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<Observation>, _>>()?;
        debug!("Read {} catalogue rows from '{}'", rows.len(), path.display());
        Ok(CsvCatalog { rows })
    }

    /// A catalogue from rows already in memory.
    pub fn from_rows(rows: Vec<Observation>) -> CsvCatalog {
        CsvCatalog { rows }
    }
}

impl Catalog for CsvCatalog {
    fn select(&self, query: &CatalogQuery) -> Result<Vec<Observation>, CatalogError> {
        let mut hits: Vec<Observation> = self
            .rows
            .iter()
            .filter(|obs| query.matches(obs))
            .cloned()
            .collect();
        match query.order {
            MjdOrder::Ascending => hits.sort_by(|a, b| a.mjd.total_cmp(&b.mjd)),
            MjdOrder::Descending => hits.sort_by(|a, b| b.mjd.total_cmp(&a.mjd)),
        }
        if let Some(limit) = query.limit {
            hits.truncate(limit);
        }
        Ok(hits)
    }
}
