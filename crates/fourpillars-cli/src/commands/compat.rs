use clap::Args;
use fourpillars_core::{chart, judge_charts, BirthData, Gender};

use super::birth::{parse_date, BirthArgs};
use super::print_json;

#[derive(Args, Debug)]
pub struct CompatArgs {
    #[command(flatten)]
    pub birth: BirthArgs,
    /// Partner's birth date (YYYY-MM-DD)
    #[arg(long)]
    pub partner_date: String,
    /// Partner's birth hour (0-23)
    #[arg(long, default_value_t = 12)]
    pub partner_hour: u32,
    /// Partner's gender (male|female)
    #[arg(long, default_value = "female")]
    pub partner_gender: String,
}

pub fn run(args: CompatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_, first) = args.birth.chart()?;

    let (year, month, day) = parse_date(&args.partner_date)?;
    let gender: Gender = args.partner_gender.parse()?;
    let partner = BirthData::new(year, month, day, args.partner_hour, gender)?;
    let second = chart(&partner)?;

    print_json(&judge_charts(&first, &second))
}
