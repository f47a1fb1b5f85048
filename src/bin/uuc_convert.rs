//! One-shot conversion from the command line
//! Usage: uuc-convert <category> <value> <from> <to>
//!        uuc-convert bmi <weight_kg> <height_m>

use tracing_subscriber::EnvFilter;

use uuc::config::Config;
use uuc::conversion::{CurrencyRateTable, UnitCategory};
use uuc::tools::convert;

const USAGE: &str = "Usage: uuc-convert <category> <value> <from> <to>\n       uuc-convert bmi <weight_kg> <height_m>";

fn parse_number(s: &str) -> Result<f64, Box<dyn std::error::Error>> {
    s.parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", s).into())
}

fn run(args: &[String]) -> Result<String, Box<dyn std::error::Error>> {
    match args {
        [category, weight, height] if UnitCategory::from_str(category) == Some(UnitCategory::Bmi) => {
            let report = convert::calculate_bmi(parse_number(weight)?, parse_number(height)?)?;
            let mut line = format!(
                "BMI {}: {} - {}",
                report.bmi_display, report.class_display, report.advice
            );
            if report.in_boundary_gap {
                line.push_str(" (between the Normal and Overweight bounds)");
            }
            Ok(line)
        }
        [category, value, from, to] => {
            let rates = CurrencyRateTable::new(Config::from_env().currency_coverage);
            let response =
                convert::convert_units(&rates, category, parse_number(value)?, from, to)?;
            Ok(response.formatted)
        }
        _ => Err(USAGE.into()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_unit_conversion() {
        let line = run(&args(&["length", "1", "Meters", "Feet"])).unwrap();
        assert_eq!(line, "1 Meters = 3.2808 Feet");
    }

    #[test]
    fn test_run_bmi() {
        let line = run(&args(&["bmi", "70", "1.75"])).unwrap();
        assert!(line.starts_with("BMI 22.86: Normal"));
    }

    #[test]
    fn test_run_errors() {
        assert!(run(&args(&["length", "abc", "Meters", "Feet"])).is_err());
        assert!(run(&args(&["length", "1", "Meters"])).is_err());
        assert!(run(&args(&[])).is_err());
    }
}
