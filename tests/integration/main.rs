// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::str::from_utf8;

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;
use tempfile::TempDir;

fn rficat() -> Command {
    Command::cargo_bin("rficat").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// Write a small catalogue: two epochs, two receivers on the first epoch.
fn write_catalogue(dir: &Path) -> PathBuf {
    let path = dir.join("catalogue.csv");
    let contents = indoc! {"
        mjd,frontend,backend,projid,frequency_mhz,intensity_jy
        58000.1,Rcvr1_2,VEGAS,TRFI_090417_S1,1400.0,0.25
        58000.1,Rcvr1_2,VEGAS,TRFI_090417_S1,1420.0,0.5
        58000.1,Rcvr2_3,VEGAS,TRFI_090417_S1,2100.0,0.75
        58001.0,Rcvr8_10,VEGAS,TRFI_100417_S1,9500.0,1.5
        58001.0,Rcvr8_10,VEGAS,TRFI_100417_S1,9600.0,1.25
    "};
    fs::write(&path, contents).expect("couldn't write catalogue fixture");
    path
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn plot_defaults_to_the_latest_epoch() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());
    let out_dir = tmp.path().join("out");

    let cmd = rficat()
        .arg("plot")
        .arg("--catalog")
        .arg(&catalogue)
        .arg("--output")
        .arg(&out_dir)
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Using latest MJD value 58001"),
        "stdout was: {stdout}"
    );

    let names = files_in(&out_dir);
    assert_eq!(names.len(), 2, "expected a CSV and a PNG, got {names:?}");
    assert!(names.iter().any(|n| n.starts_with("rfi_data-") && n.ends_with(".csv")));
    assert!(names.iter().any(|n| n.starts_with("rfi_data_plot-") && n.ends_with(".png")));

    // The CSV holds exactly the latest epoch's rows (header + 2).
    let csv_name = names.iter().find(|n| n.ends_with(".csv")).unwrap();
    let csv = fs::read_to_string(out_dir.join(csv_name)).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().skip(1).all(|line| line.starts_with("58001.0,Rcvr8_10")));
}

#[test]
fn plot_resolves_the_nearest_epoch() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());
    let out_dir = tmp.path().join("out");

    // 2017-09-04 00:00:00 UTC is MJD 58000.0; the nearest epoch is 58000.1.
    let cmd = rficat()
        .arg("plot")
        .arg("2017-09-04")
        .arg("--catalog")
        .arg(&catalogue)
        .arg("--output")
        .arg(&out_dir)
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Using nearest MJD value 58000.1"),
        "stdout was: {stdout}"
    );

    let csv_name = files_in(&out_dir)
        .into_iter()
        .find(|n| n.ends_with(".csv"))
        .unwrap();
    let csv = fs::read_to_string(out_dir.join(csv_name)).unwrap();
    // Header + the three rows at MJD 58000.1.
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn plot_receiver_filter_reaches_the_filenames() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());
    let out_dir = tmp.path().join("out");

    rficat()
        .arg("plot")
        .arg("2017-09-04")
        .arg("--catalog")
        .arg(&catalogue)
        .arg("--output")
        .arg(&out_dir)
        .arg("--receivers")
        .arg("Rcvr1_2")
        .ok()
        .expect("plot should succeed");

    let names = files_in(&out_dir);
    assert!(
        names.iter().all(|n| n.contains("Rcvr1_2")),
        "filenames were: {names:?}"
    );
    let csv_name = names.iter().find(|n| n.ends_with(".csv")).unwrap();
    let csv = fs::read_to_string(out_dir.join(csv_name)).unwrap();
    // Header + the two Rcvr1_2 rows; the Rcvr2_3 row is filtered out.
    assert_eq!(csv.lines().count(), 3);
    assert!(!csv.contains("Rcvr2_3"));
}

#[test]
fn plot_with_no_results_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());
    let out_dir = tmp.path().join("out");

    // A frequency window nowhere near any catalogue row.
    let cmd = rficat()
        .arg("plot")
        .arg("--catalog")
        .arg(&catalogue)
        .arg("--output")
        .arg(&out_dir)
        .arg("--freq-mhz")
        .arg("100000")
        .arg("--buffer-mhz")
        .arg("10")
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("No results found"), "stdout was: {stdout}");
    // The command exits successfully but writes no files.
    assert!(!out_dir.exists() || files_in(&out_dir).is_empty());
}

#[test]
fn plot_date_conflicts_with_range() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());

    rficat()
        .arg("plot")
        .arg("2017-09-04")
        .arg("--start")
        .arg("2017-09-01")
        .arg("--catalog")
        .arg(&catalogue)
        .assert()
        .failure();
}

#[test]
fn plot_rejects_garbage_dates() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());

    let cmd = rficat()
        .arg("plot")
        .arg("not-a-date")
        .arg("--catalog")
        .arg(&catalogue)
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("Couldn't parse 'not-a-date' as a date"),
        "stderr was: {stderr}"
    );
}

#[test]
fn summary_prints_per_receiver_minima() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());

    let cmd = rficat()
        .arg("summary")
        .arg("--catalog")
        .arg(&catalogue)
        .arg("--no-progress-bars")
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Found 2 observation epoch(s)"),
        "stdout was: {stdout}"
    );
    // One line per (epoch, receiver) group.
    assert!(stdout.contains("Rcvr1_2"));
    assert!(stdout.contains("Rcvr2_3"));
    assert!(stdout.contains("Rcvr8_10"));
    // The Rcvr1_2 group's minimum frequency is 1400, not 1420.
    assert!(stdout.contains("1400.000"));
    assert!(!stdout.contains("1420.000"));
}

#[test]
fn summary_date_range_drops_earlier_epochs() {
    let tmp = TempDir::new().unwrap();
    let catalogue = write_catalogue(tmp.path());

    // 2017-09-04 12:00 UTC is MJD 58000.5, between the two catalogue epochs.
    let cmd = rficat()
        .arg("summary")
        .arg("--catalog")
        .arg(&catalogue)
        .arg("--start")
        .arg("2017-09-04 12:00:00")
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Found 1 observation epoch(s)"),
        "stdout was: {stdout}"
    );
    assert!(stdout.contains("Rcvr8_10"));
    assert!(!stdout.contains("Rcvr1_2"));
}

#[test]
fn missing_catalogue_is_a_user_visible_error() {
    let cmd = rficat()
        .arg("summary")
        .arg("--catalog")
        .arg("/definitely/not/here.csv")
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("doesn't exist"), "stderr was: {stderr}");
}
