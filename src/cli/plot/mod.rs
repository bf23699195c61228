// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to plot the RFI data for a single epoch or a date range, and export
//! the same rows as CSV.

mod error;

pub(crate) use error::PlotError;

use std::path::PathBuf;

use clap::Parser;

use super::RfiCatError;
use crate::constants::DEFAULT_FREQ_WINDOW_MHZ;

#[derive(Parser, Debug, Default)]
pub(crate) struct PlotArgs {
    /// The date on which the RFI data was taken; any reasonably common format
    /// should work. The dataset nearest to this date is used. If neither this
    /// nor --start/--end is given, the most recent dataset is used.
    #[clap(name = "DATE", conflicts_with_all = &["start", "end"])]
    date: Option<String>,

    /// Path to the catalogue CSV file.
    #[clap(short, long, parse(from_os_str))]
    catalog: PathBuf,

    /// The start date of an explicit range (inclusive).
    #[clap(long)]
    start: Option<String>,

    /// The end date of an explicit range (inclusive).
    #[clap(long)]
    end: Option<String>,

    /// Only plot data taken with these receivers (frontend names).
    #[clap(short, long, multiple_values(true))]
    receivers: Vec<String>,

    /// The midpoint of a frequency window to restrict the data to [MHz].
    #[clap(short, long)]
    freq_mhz: Option<f64>,

    /// The width of the frequency window around --freq-mhz [MHz].
    #[clap(long, default_value_t = DEFAULT_FREQ_WINDOW_MHZ)]
    buffer_mhz: f64,

    /// The directory in which to save output files. Default: the current
    /// directory.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Open the plot after writing it.
    #[clap(long)]
    show: bool,
}

impl PlotArgs {
    #[cfg(not(feature = "plotting"))]
    pub(super) fn run(self) -> Result<(), RfiCatError> {
        // Plotting is an optional feature. This is because it doesn't look
        // possible to statically compile the C dependencies needed for
        // plotting. If the "plotting" feature isn't available, warn the user
        // that they'll need to compile rficat from source.
        Err(RfiCatError::from(PlotError::NoPlottingFeature))
    }

    #[cfg(feature = "plotting")]
    pub(super) fn run(self) -> Result<(), RfiCatError> {
        plotting::plot_rfi(self)?;
        Ok(())
    }
}

#[cfg(feature = "plotting")]
mod plotting {
    use std::path::Path;

    use log::{debug, info};
    use plotters::prelude::*;
    use vec1::Vec1;

    use super::*;
    use crate::{
        catalog::{Catalog, CatalogQuery, CsvCatalog, MjdWindow, Observation},
        epoch::{latest_mjd, nearest_mjd},
        time::{datetime_to_mjd, mjd_to_datetime, parse_date},
    };

    /// The pixel dimensions of the plots.
    const X_PIXELS: u32 = 1600;
    const Y_PIXELS: u32 = 900;

    pub(super) fn plot_rfi(args: PlotArgs) -> Result<(), RfiCatError> {
        let PlotArgs {
            date,
            catalog,
            start,
            end,
            receivers,
            freq_mhz,
            buffer_mhz,
            output,
            show,
        } = args;

        let catalog = CsvCatalog::open(catalog)?;

        // Work out which slice of the MJD axis is wanted. clap guarantees
        // that DATE and --start/--end weren't both given.
        let (window, tag, title) = match (date, start, end) {
            (Some(date_str), _, _) => {
                let dt = parse_date(&date_str)?;
                let date_mjd = datetime_to_mjd(dt);
                let mjd = match nearest_mjd(&catalog, date_mjd)? {
                    Some(mjd) => mjd,
                    None => {
                        info!("No results found");
                        return Ok(());
                    }
                };
                let nearest_dt = mjd_to_datetime(mjd);
                info!("Using nearest MJD value {mjd} ({nearest_dt}) to given date {date_mjd} ({dt})");
                (
                    MjdWindow::at(mjd),
                    nearest_dt.format("%Y-%m-%d_%H-%M-%S").to_string(),
                    nearest_dt.to_string(),
                )
            }

            (None, None, None) => {
                let mjd = match latest_mjd(&catalog)? {
                    Some(mjd) => mjd,
                    None => {
                        info!("No results found");
                        return Ok(());
                    }
                };
                let dt = mjd_to_datetime(mjd);
                info!("Using latest MJD value {mjd} ({dt})");
                (
                    MjdWindow::at(mjd),
                    dt.format("%Y-%m-%d_%H-%M-%S").to_string(),
                    dt.to_string(),
                )
            }

            (None, start, end) => {
                let start_dt = start.as_deref().map(parse_date).transpose()?;
                let end_dt = end.as_deref().map(parse_date).transpose()?;
                let window = MjdWindow::from_optional(
                    start_dt.map(datetime_to_mjd),
                    end_dt.map(datetime_to_mjd),
                );
                let (tag, title) = match (start_dt, end_dt) {
                    (Some(s), Some(e)) => (
                        format!("{}_to_{}", s.format("%Y-%m-%d"), e.format("%Y-%m-%d")),
                        format!("{} to {}", s.format("%Y-%m-%d"), e.format("%Y-%m-%d")),
                    ),
                    (Some(s), None) => (
                        format!("from_{}", s.format("%Y-%m-%d")),
                        format!("from {}", s.format("%Y-%m-%d")),
                    ),
                    (None, Some(e)) => (
                        format!("until_{}", e.format("%Y-%m-%d")),
                        format!("until {}", e.format("%Y-%m-%d")),
                    ),
                    (None, None) => unreachable!("handled by the (None, None, None) arm"),
                };
                (window, tag, title)
            }
        };

        // Compose the rest of the filter.
        let mut query = CatalogQuery::new().mjd_window(window);
        let receiver_tag = (!receivers.is_empty()).then(|| receivers.join("_"));
        if let Ok(receivers) = Vec1::try_from_vec(receivers) {
            query = query.receivers(receivers);
        }
        if let Some(centre) = freq_mhz {
            query = query.freq_window_mhz(centre, buffer_mhz);
        }

        info!("Querying...");
        let mut data = catalog.select(&query)?;
        if data.is_empty() {
            info!("No results found");
            return Ok(());
        }
        debug!("{} rows matched", data.len());

        // The receiver selection goes into the filenames too.
        let tag = match receiver_tag {
            Some(receiver_tag) => format!("{tag}-{receiver_tag}"),
            None => tag,
        };

        let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
        if !output_dir.exists() {
            std::fs::create_dir_all(&output_dir)?;
        }

        let csv_path = output_dir.join(format!("rfi_data-{tag}.csv"));
        write_csv(&csv_path, &data)?;
        info!("Wrote {}", csv_path.display());

        // Line plots want monotonic x values.
        data.sort_by(|a, b| a.frequency_mhz.total_cmp(&b.frequency_mhz));

        let plot_path = output_dir.join(format!("rfi_data_plot-{tag}.png"));
        draw_plot(&plot_path, &title, &data)?;
        info!("Saved plot to {}", plot_path.display());

        if show {
            debug!("Opening {}", plot_path.display());
            open::that(&plot_path)?;
        }

        Ok(())
    }

    fn write_csv(path: &Path, data: &[Observation]) -> Result<(), RfiCatError> {
        let mut writer = csv::Writer::from_path(path)?;
        for obs in data {
            writer.serialize(obs)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Draw a frequency-vs-intensity line plot to `path`. `data` must be
    /// sorted by frequency and non-empty.
    fn draw_plot(path: &Path, title: &str, data: &[Observation]) -> Result<(), PlotError> {
        let root_area = BitMapBackend::new(path, (X_PIXELS, Y_PIXELS)).into_drawing_area();
        root_area
            .fill(&WHITE)
            .map_err(|e| PlotError::Draw(Box::new(e)))?;
        let root_area = root_area
            .titled("RFI Data Plot", ("sans-serif", 50).into_font())
            .map_err(|e| PlotError::Draw(Box::new(e)))?;

        let min_freq = data.first().expect("data is non-empty").frequency_mhz;
        let max_freq = data.last().expect("data is non-empty").frequency_mhz;
        let (min_int, max_int) = data
            .iter()
            .map(|obs| obs.intensity_jy)
            .filter(|i| !i.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), i| {
                (lo.min(i), hi.max(i))
            });
        let (min_int, max_int) = if min_int.is_finite() {
            (min_int, max_int)
        } else {
            // Every intensity was NaN; any range will do for an empty series.
            (0.0, 1.0)
        };
        // Keep the axes sane when there's a single point or a flat line.
        let (min_freq, max_freq) = pad_range(min_freq, max_freq);
        let (min_int, max_int) = pad_range(min_int, max_int);

        let mut cc = ChartBuilder::on(&root_area)
            .caption(title, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(min_freq..max_freq, min_int..max_int)
            .map_err(|e| PlotError::Draw(Box::new(e)))?;

        cc.configure_mesh()
            .x_desc("Frequency (MHz)")
            .y_desc("Intensity (Jy)")
            .draw()
            .map_err(|e| PlotError::Draw(Box::new(e)))?;

        cc.draw_series(LineSeries::new(
            data.iter()
                .filter(|obs| !obs.intensity_jy.is_nan())
                .map(|obs| (obs.frequency_mhz, obs.intensity_jy)),
            &BLUE,
        ))
        .map_err(|e| PlotError::Draw(Box::new(e)))?;

        root_area
            .present()
            .map_err(|e| PlotError::Draw(Box::new(e)))?;
        Ok(())
    }

    fn pad_range(lo: f64, hi: f64) -> (f64, f64) {
        if (hi - lo).abs() < f64::EPSILON {
            (lo - 0.5, hi + 0.5)
        } else {
            (lo, hi)
        }
    }
}
