#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Batch conversion of the DWR well completion report export into
//! per-county lookup documents.
//!
//! Reads `wellcompletionreports_full.csv` from the workspace root and writes
//! `counties.json`, `index.json`, and one `<region>.json` partition file per
//! county to `well-lookup/data/`. One-shot job with fixed paths; there is
//! nothing to configure.

use clap::Parser;
use well_map_cli_utils::IndicatifProgress;

#[derive(Parser)]
#[command(name = "well_map_generate", about = "Well lookup document generation tool")]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = well_map_cli_utils::init_logger();
    Cli::parse();

    let csv_path = well_map_generate::default_input_path();
    let out_dir = well_map_generate::output_dir();

    let progress = IndicatifProgress::records_bar(&multi, "Reading well completion reports...");
    let report = well_map_generate::run(&csv_path, &out_dir, &progress)?;

    progress.finish(format!(
        "Done! {} wells across {} regions -> {} files",
        report.totals.accepted, report.regions, report.files_written
    ));

    Ok(())
}
