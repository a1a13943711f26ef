//! Chart-based commands: chart, luck, stars and the annual table.

use serde::Serialize;

use fourpillars_core::{analyze_chart, hundred_year_table, special_stars, Chart, ChartAnalysis, Config};

use super::birth::BirthArgs;
use super::print_json;

#[derive(Serialize)]
struct ChartOutput {
    chart: Chart,
    display: String,
    analysis: ChartAnalysis,
}

pub fn run_chart(args: BirthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_, chart) = args.chart()?;
    print_json(&ChartOutput {
        display: chart.to_string(),
        analysis: analyze_chart(&chart),
        chart,
    })
}

pub fn run_luck(args: BirthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (_, _, luck) = args.chart_with_luck(&config)?;
    print_json(&luck)
}

pub fn run_stars(args: BirthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_, chart) = args.chart()?;
    print_json(&special_stars(&chart))
}

pub fn run_table(args: BirthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (birth, chart, luck) = args.chart_with_luck(&config)?;
    print_json(&hundred_year_table(birth.year, chart.day_master(), &luck))
}
