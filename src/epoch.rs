// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Nearest-epoch resolution against the sparse set of observation MJDs in
//! the catalogue.

use log::debug;

use crate::catalog::{Catalog, CatalogError, CatalogQuery, MjdOrder};

/// Find the catalogue MJD nearest to `target_mjd` by comparing only the
/// closest epoch at or above the target against the closest epoch below it:
/// one top-1 query on each side, no full scan. When both candidates are
/// equidistant, the earlier epoch wins. Returns `None` if the catalogue is
/// empty.
pub fn nearest_mjd<C: Catalog>(catalog: &C, target_mjd: f64) -> Result<Option<f64>, CatalogError> {
    let at_or_above = catalog
        .select(
            &CatalogQuery::new()
                .mjd_at_least(target_mjd)
                .order(MjdOrder::Ascending)
                .limit(1),
        )?
        .first()
        .map(|obs| obs.mjd);
    let below = catalog
        .select(
            &CatalogQuery::new()
                .mjd_below(target_mjd)
                .order(MjdOrder::Descending)
                .limit(1),
        )?
        .first()
        .map(|obs| obs.mjd);

    let nearest = match (below, at_or_above) {
        // <= rather than <, so that ties go to the earlier epoch.
        (Some(b), Some(a)) => {
            if (b - target_mjd).abs() <= (a - target_mjd).abs() {
                Some(b)
            } else {
                Some(a)
            }
        }
        (Some(b), None) => Some(b),
        (None, Some(a)) => Some(a),
        (None, None) => None,
    };
    debug!("Nearest epoch to MJD {target_mjd}: {nearest:?}");
    Ok(nearest)
}

/// The most recent MJD present in the catalogue, if any.
pub fn latest_mjd<C: Catalog>(catalog: &C) -> Result<Option<f64>, CatalogError> {
    Ok(catalog
        .select(&CatalogQuery::new().order(MjdOrder::Descending).limit(1))?
        .first()
        .map(|obs| obs.mjd))
}
