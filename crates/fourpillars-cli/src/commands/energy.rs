//! Energy-dip commands.

use chrono::Local;
use clap::Subcommand;

use fourpillars_core::energy::profile;
use fourpillars_core::{current_status, status_at, Stem};

use super::print_json;

#[derive(Subcommand)]
pub enum EnergyAction {
    /// Show the energy-dip profile of a day stem
    Profile {
        /// Day stem (symbol or name, e.g. 己 or ji)
        #[arg(long)]
        stem: String,
        /// Print the interpretation text instead of JSON
        #[arg(long)]
        explain: bool,
    },
    /// Evaluate the energy level at a month and hour (defaults to now)
    Status {
        /// Day stem (symbol or name)
        #[arg(long)]
        stem: String,
        /// Calendar month (1-12)
        #[arg(long, requires = "hour")]
        month: Option<u32>,
        /// Hour of day (0-23)
        #[arg(long, requires = "month")]
        hour: Option<u32>,
    },
}

pub fn run(action: EnergyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EnergyAction::Profile { stem, explain } => {
            let stem: Stem = stem.parse()?;
            let p = profile(stem)?;
            if explain {
                println!("{}", p.explain());
                Ok(())
            } else {
                print_json(p)
            }
        }
        EnergyAction::Status { stem, month, hour } => {
            let stem: Stem = stem.parse()?;
            let status = match (month, hour) {
                (Some(month), Some(hour)) => current_status(stem, month, hour)?,
                _ => status_at(stem, Local::now().naive_local())?,
            };
            print_json(&status)
        }
    }
}
