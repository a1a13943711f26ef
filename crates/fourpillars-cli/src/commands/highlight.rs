use clap::Args;
use fourpillars_core::Config;

use super::birth::BirthArgs;
use super::print_json;

#[derive(Args, Debug)]
pub struct HighlightArgs {
    #[command(flatten)]
    pub birth: BirthArgs,
    /// Print the interpretation text instead of JSON
    #[arg(long)]
    pub explain: bool,
}

pub fn run(args: HighlightArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (_, chart, luck) = args.birth.chart_with_luck(&config)?;
    let period = config.highlight_calculator().calculate(&chart, &luck);
    if args.explain {
        println!("{}", period.explain());
        Ok(())
    } else {
        print_json(&period)
    }
}
