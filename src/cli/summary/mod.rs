// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to summarise the catalogue's contents over an optional date range.

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use itertools::Itertools;
use log::info;
use vec1::Vec1;

use super::RfiCatError;
use crate::{
    catalog::{Catalog, CatalogQuery, CsvCatalog, MjdWindow},
    summary::{summarise, SummaryRow},
    time::{datetime_to_mjd, parse_date},
    PROGRESS_BARS,
};

#[derive(Parser, Debug, Default)]
pub(crate) struct SummaryArgs {
    /// Path to the catalogue CSV file.
    #[clap(short, long, parse(from_os_str))]
    catalog: PathBuf,

    /// Only include observations taken on or after this date.
    #[clap(long)]
    start: Option<String>,

    /// Only include observations taken on or before this date.
    #[clap(long)]
    end: Option<String>,

    /// Only include observations taken with these receivers (frontend
    /// names).
    #[clap(short, long, multiple_values(true))]
    receivers: Vec<String>,
}

impl SummaryArgs {
    pub(super) fn run(self) -> Result<(), RfiCatError> {
        let catalog = CsvCatalog::open(&self.catalog)?;

        let mut query = CatalogQuery::new();
        let mut filter_info = vec![];
        let start_dt = self.start.as_deref().map(parse_date).transpose()?;
        let end_dt = self.end.as_deref().map(parse_date).transpose()?;
        if start_dt.is_some() || end_dt.is_some() {
            query = query.mjd_window(MjdWindow::from_optional(
                start_dt.map(datetime_to_mjd),
                end_dt.map(datetime_to_mjd),
            ));
            if let Some(start_dt) = start_dt {
                filter_info.push(format!(" on or after {start_dt}"));
            }
            if let Some(end_dt) = end_dt {
                filter_info.push(format!(" on or before {end_dt}"));
            }
        }
        if let Ok(receivers) = Vec1::try_from_vec(self.receivers) {
            filter_info.push(format!(" from receivers {}", receivers.as_slice().join(", ")));
            query = query.receivers(receivers);
        }

        let rows = catalog.select(&query)?;
        if rows.is_empty() {
            info!("No results found");
            return Ok(());
        }

        let num_epochs = rows.iter().map(|obs| obs.mjd.to_bits()).unique().count();
        info!(
            "Found {} observation epoch(s){}",
            num_epochs,
            filter_info.join(" and")
        );

        // One tick per distinct epoch.
        let progress = ProgressBar::with_draw_target(
            Some(num_epochs as u64),
            if PROGRESS_BARS.load() {
                ProgressDrawTarget::stdout()
            } else {
                ProgressDrawTarget::hidden()
            },
        )
        .with_style(
            ProgressStyle::with_template("{msg}: [{wide_bar:.blue}] {pos:3}/{len:3}")
                .expect("progress bar template is valid")
                .progress_chars("=> "),
        )
        .with_message("Summarising");

        let mut sorted = rows;
        sorted.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
        let mut summary_rows: Vec<SummaryRow> = vec![];
        for (_, epoch_rows) in &sorted.iter().group_by(|obs| obs.mjd.to_bits()) {
            let epoch_rows: Vec<_> = epoch_rows.cloned().collect();
            summary_rows.extend(summarise(&epoch_rows));
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "{:<20} {:>12} {:<10} {:<10} {:<16} {:>15} {:>18}",
            "Date observed",
            "MJD",
            "Receiver",
            "Backend",
            "Project",
            "Min freq (MHz)",
            "Min intensity (Jy)"
        );
        for row in &summary_rows {
            info!(
                "{:<20} {:>12.5} {:<10} {:<10} {:<16} {:>15.3} {:>18.4}",
                row.datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
                row.mjd,
                row.frontend,
                row.backend,
                row.projid,
                row.min_frequency_mhz,
                row.min_intensity_jy
            );
        }

        Ok(())
    }
}
