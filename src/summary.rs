// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Read-time aggregation over filtered catalogue rows. Nothing here is
//! persisted.

use chrono::NaiveDateTime;
use itertools::Itertools;

use crate::{catalog::Observation, time::mjd_to_datetime};

/// One line of the summary output: the per-(datetime, MJD, receiver) minima.
/// The datetime is derived from the MJD, so the group key is effectively
/// (MJD, receiver).
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub datetime: NaiveDateTime,
    pub mjd: f64,
    pub frontend: String,
    pub backend: String,
    pub projid: String,
    pub min_frequency_mhz: f64,
    pub min_intensity_jy: f64,
}

/// Group observations by (datetime, MJD, receiver) and take each group's
/// minimum frequency and intensity. Rows come back ordered by MJD, then
/// receiver name.
pub fn summarise(observations: &[Observation]) -> Vec<SummaryRow> {
    let mut sorted: Vec<&Observation> = observations.iter().collect();
    sorted.sort_by(|a, b| {
        a.mjd
            .total_cmp(&b.mjd)
            .then_with(|| a.frontend.cmp(&b.frontend))
    });

    let groups = sorted
        .into_iter()
        .group_by(|obs| (obs.mjd.to_bits(), obs.frontend.clone()));
    groups
        .into_iter()
        .map(|(_, group)| {
            let group: Vec<&Observation> = group.collect();
            let first = group[0];
            SummaryRow {
                datetime: mjd_to_datetime(first.mjd),
                mjd: first.mjd,
                frontend: first.frontend.clone(),
                backend: first.backend.clone(),
                projid: first.projid.clone(),
                min_frequency_mhz: group
                    .iter()
                    .map(|obs| obs.frequency_mhz)
                    .fold(f64::INFINITY, f64::min),
                min_intensity_jy: group
                    .iter()
                    .map(|obs| obs.intensity_jy)
                    .fold(f64::INFINITY, f64::min),
            }
        })
        .collect()
}
