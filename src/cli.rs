//! Command-line parsing for the `microbench` binary.

use crate::error::{BenchError, Result};
use crate::utils::runner::RunOptions;
use crate::utils::timer::PinStrategy;
use std::str::FromStr;

/// What the binary should do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Run,
    List,
    Help,
    Verify,
}

/// Parsed command line
#[derive(Clone, Debug)]
pub struct CliOptions {
    pub action: Action,
    pub run: RunOptions,
    pub csv_path: Option<String>,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            action: Action::Run,
            run: RunOptions::default(),
            csv_path: None,
            verbosity: 0,
        }
    }
}

/// Fetch the value following `option`
fn value_for<I: Iterator<Item = String>>(args: &mut I, option: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| BenchError::MissingValue(option.to_string()))
}

fn parse_number<T: FromStr>(option: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BenchError::invalid_value(option, value))
}

fn parse_sizes(value: &str) -> Result<Vec<usize>> {
    let sizes = value
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_number::<usize>("--sizes", s))
        .collect::<Result<Vec<_>>>()?;
    if sizes.is_empty() || sizes.contains(&0) {
        return Err(BenchError::invalid_value("--sizes", value));
    }
    Ok(sizes)
}

impl CliOptions {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" | "-l" => options.action = Action::List,
                "--help" | "-h" => options.action = Action::Help,
                "--verify" => options.action = Action::Verify,
                "-v" => options.verbosity = options.verbosity.saturating_add(1),
                "-vv" => options.verbosity = options.verbosity.saturating_add(2),
                "--sizes" => options.run.sizes = parse_sizes(&value_for(&mut args, &arg)?)?,
                "--iter" | "-r" => {
                    let value = value_for(&mut args, &arg)?;
                    let runs: usize = parse_number(&arg, &value)?;
                    if runs == 0 {
                        return Err(BenchError::invalid_value(&arg, &value));
                    }
                    options.run.timing.runs_per_variant = runs;
                }
                "--warmup" => {
                    options.run.timing.warmup_iterations =
                        parse_number(&arg, &value_for(&mut args, &arg)?)?;
                }
                "--repetitions" => {
                    let value = value_for(&mut args, &arg)?;
                    let reps: usize = parse_number(&arg, &value)?;
                    if reps == 0 {
                        return Err(BenchError::invalid_value(&arg, &value));
                    }
                    options.run.repetitions = reps;
                }
                "--seed" => {
                    options.run.seed = Some(parse_number(&arg, &value_for(&mut args, &arg)?)?);
                }
                "--pin" => {
                    let value = value_for(&mut args, &arg)?;
                    options.run.timing.pin_strategy = match value.as_str() {
                        "global" => PinStrategy::Global,
                        "per-exec" => PinStrategy::PerExecution,
                        _ => return Err(BenchError::invalid_value(&arg, &value)),
                    };
                }
                "--filter" | "-f" => options.run.filter = value_for(&mut args, &arg)?,
                "--csv" => options.csv_path = Some(value_for(&mut args, &arg)?),
                positional if !positional.starts_with('-') => {
                    options.run.filter = positional.to_string();
                }
                unknown => return Err(BenchError::UnknownOption(unknown.to_string())),
            }
        }

        Ok(options)
    }

    /// Log level implied by `-v` flags
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions> {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&[]).expect("empty args");
        assert_eq!(opts.action, Action::Run);
        assert_eq!(opts.run.sizes, vec![64, 256, 1024, 4096, 16384]);
        assert_eq!(opts.run.timing.runs_per_variant, 30);
        assert_eq!(opts.run.timing.warmup_iterations, 10);
        assert_eq!(opts.run.repetitions, 1);
        assert_eq!(opts.run.filter, "");
        assert_eq!(opts.run.seed, None);
        assert_eq!(opts.csv_path, None);
        assert_eq!(opts.log_level(), "warn");
    }

    #[test]
    fn test_full_command_line() {
        let opts = parse(&[
            "--sizes", "16, 64,256", "-r", "5", "--warmup", "2", "--repetitions", "3",
            "--seed", "42", "--pin", "global", "-f", "pow/random", "--csv", "out.csv", "-vv",
        ])
        .expect("valid args");
        assert_eq!(opts.run.sizes, vec![16, 64, 256]);
        assert_eq!(opts.run.timing.runs_per_variant, 5);
        assert_eq!(opts.run.timing.warmup_iterations, 2);
        assert_eq!(opts.run.repetitions, 3);
        assert_eq!(opts.run.seed, Some(42));
        assert_eq!(opts.run.timing.pin_strategy, PinStrategy::Global);
        assert_eq!(opts.run.filter, "pow/random");
        assert_eq!(opts.csv_path.as_deref(), Some("out.csv"));
        assert_eq!(opts.log_level(), "debug");
    }

    #[test]
    fn test_positional_is_filter() {
        let opts = parse(&["fibonacci"]).expect("positional");
        assert_eq!(opts.run.filter, "fibonacci");
    }

    #[test]
    fn test_actions() {
        assert_eq!(parse(&["--list"]).expect("list").action, Action::List);
        assert_eq!(parse(&["-h"]).expect("help").action, Action::Help);
        assert_eq!(parse(&["--verify"]).expect("verify").action, Action::Verify);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--bogus"]), Err(BenchError::UnknownOption(o)) if o == "--bogus"));
        assert!(matches!(parse(&["--iter"]), Err(BenchError::MissingValue(o)) if o == "--iter"));
        assert!(matches!(parse(&["--iter", "many"]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["--sizes", ","]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["--sizes", "8,x"]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["--repetitions", "0"]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["--iter", "0"]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["-r", "0"]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["--sizes", "0,64"]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["--sizes", "0"]), Err(BenchError::InvalidValue { .. })));
        assert!(matches!(parse(&["--pin", "sometimes"]), Err(BenchError::InvalidValue { .. })));
    }
}
