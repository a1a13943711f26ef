//! Birth input shared by every chart-based command.

use clap::Args;
use fourpillars_core::{chart, BirthData, Chart, Config, Gender, LuckCycle};

#[derive(Args, Debug, Clone)]
pub struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Birth hour (0-23)
    #[arg(long, default_value_t = 12)]
    pub hour: u32,
    /// Gender (male|female)
    #[arg(long, default_value = "male")]
    pub gender: String,
}

/// Split `YYYY-MM-DD` into numbers; calendar validity is checked by the core.
pub fn parse_date(date: &str) -> Result<(i32, u32, u32), Box<dyn std::error::Error>> {
    let parts: Vec<&str> = date.trim().split('-').collect();
    match parts.as_slice() {
        [y, m, d] => Ok((y.parse()?, m.parse()?, d.parse()?)),
        _ => Err(format!("Invalid date: '{date}'. Use YYYY-MM-DD").into()),
    }
}

impl BirthArgs {
    pub fn birth_data(&self) -> Result<BirthData, Box<dyn std::error::Error>> {
        let (year, month, day) = parse_date(&self.date)?;
        let gender: Gender = self.gender.parse()?;
        Ok(BirthData::new(year, month, day, self.hour, gender)?)
    }

    pub fn chart(&self) -> Result<(BirthData, Chart), Box<dyn std::error::Error>> {
        let birth = self.birth_data()?;
        let c = chart(&birth)?;
        tracing::debug!(chart = %c, gender = %birth.gender, "Derived chart");
        Ok((birth, c))
    }

    /// Chart plus its luck cycle, using the configured starting age.
    pub fn chart_with_luck(
        &self,
        config: &Config,
    ) -> Result<(BirthData, Chart, LuckCycle), Box<dyn std::error::Error>> {
        let (birth, c) = self.chart()?;
        let luck = LuckCycle::generate_with_start_age(&c, birth.gender, config.luck.start_age);
        Ok((birth, c, luck))
    }
}
