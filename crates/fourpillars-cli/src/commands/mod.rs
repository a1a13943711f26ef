pub mod birth;
pub mod chart;
pub mod compat;
pub mod config;
pub mod energy;
pub mod highlight;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
