//! CLI command printing the dashboard summary

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::{DashboardSummary, NumberLocale};
use crate::error::CarteiraResult;

use super::chart::load_dataset;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Dataset file (JSON). Uses the built-in demo data when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Handle the summary command
pub fn handle_summary_command<W: Write>(
    args: &SummaryArgs,
    settings: &Settings,
    out: &mut W,
) -> CarteiraResult<()> {
    let data = load_dataset(args.input.as_deref())?;
    let summary =
        DashboardSummary::from_data(&data).with_locale(NumberLocale::from_tag(&settings.locale));

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(out, "{}", summary.format_terminal())?;
    }
    Ok(())
}
