//! CLI command printing chart configurations

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, ValueEnum};

use crate::charts::{
    build_category_chart, build_monthly_chart, build_pie_chart, build_trend_chart,
    ChartConfiguration,
};
use crate::error::{CarteiraError, CarteiraResult};
use crate::models::DashboardData;

/// Which configuration to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSelector {
    Category,
    Monthly,
    Trend,
    Pie,
}

impl FromStr for ChartSelector {
    type Err = CarteiraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" | "categories" | "doughnut" => Ok(Self::Category),
            "monthly" | "bar" => Ok(Self::Monthly),
            "trend" | "line" => Ok(Self::Trend),
            "pie" => Ok(Self::Pie),
            _ => Err(CarteiraError::chart_not_found(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Chart to build: category, monthly, trend or pie
    pub chart: ChartSelector,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Dataset file (JSON). Uses the built-in demo data when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Build the configuration with the legend hidden
    #[arg(long)]
    pub hide_legend: bool,
}

/// Load a dataset file, or the demo data when no path is given
pub fn load_dataset(input: Option<&Path>) -> CarteiraResult<DashboardData> {
    match input {
        Some(path) => DashboardData::load(path),
        None => Ok(DashboardData::mock()),
    }
}

/// Build the selected configuration from `data`
pub fn build_chart(selector: ChartSelector, data: &DashboardData) -> ChartConfiguration {
    match selector {
        ChartSelector::Category => build_category_chart(&data.categories),
        ChartSelector::Pie => build_pie_chart(&data.categories),
        ChartSelector::Monthly => build_monthly_chart(&data.months),
        ChartSelector::Trend => build_trend_chart(&data.trend.labels, &data.trend.datasets),
    }
}

/// Handle the chart command
pub fn handle_chart_command<W: Write>(args: &ChartArgs, out: &mut W) -> CarteiraResult<()> {
    let data = load_dataset(args.input.as_deref())?;
    let config = build_chart(args.chart, &data).with_legend_display(!args.hide_legend);
    tracing::debug!(chart = %config.kind, points = config.point_count(), "chart built");

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&config)?;
            write!(out, "{}", yaml)?;
        }
    }
    Ok(())
}
