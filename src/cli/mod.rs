//! Command-line interface for the worked-example sweeps.
//!
//! With no flags the binary runs every sweep, prints one line per observation and exits 0 whatever the
//! outcome. `--strict` turns failures into a non-zero exit code.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! [`execute`] writes to any `io::Write` and returns `CliResult<ExitCode>` instead of calling `process::exit`.
//! Only the top-level [`run`] function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::io::{self, Write};
use std::process;

use clap::Parser;

use crate::config::{DEFAULT_LEN, HarnessConfig, KernelSelection, ReportFormat};
use crate::harness::{HarnessError, SweepStats};
use crate::report::{ConsoleReporter, JsonReporter, Reporter, Summary};
use crate::suite;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<HarnessError> for CliError {
    fn from(err: HarnessError) -> Self {
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl From<slfet_core::ConfigError> for CliError {
    fn from(err: slfet_core::ConfigError) -> Self {
        HarnessError::from(err).into()
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::failure(format!("Error writing report: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Stateless function equivalence testing: sweep two implementations over every input pattern combination
#[derive(Parser, Debug)]
#[command(name = "slfet")]
#[command(version = VERSION)]
#[command(about = "Sweep scalar and SIMD kernels over every input pattern combination", long_about = None)]
pub struct Cli {
    /// Element count of every buffer
    #[arg(long, value_name = "N", default_value_t = DEFAULT_LEN)]
    pub len: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Print only failing observations
    #[arg(long)]
    pub failures_only: bool,

    /// Exit non-zero when any observation failed
    #[arg(long)]
    pub strict: bool,

    /// Kernels to sweep
    #[arg(long, value_enum, default_value_t = KernelSelection::All)]
    pub kernel: KernelSelection,

    /// Print the standard pattern names and exit
    #[arg(long)]
    pub list_patterns: bool,
}

impl Cli {
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig::new()
            .with_len(self.len)
            .with_format(self.format)
            .with_failures_only(self.failures_only)
            .with_strict(self.strict)
            .with_kernels(self.kernel)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();
    let stdout = io::stdout();

    match execute(&cli, &mut stdout.lock()) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed command line, writing the report to `out`.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> CliResult<ExitCode> {
    if cli.list_patterns {
        for name in suite::pattern_names()? {
            writeln!(out, "{name}")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.config();
    tracing::debug!(?config, "running worked example");

    let summary = match config.format {
        ReportFormat::Text => {
            let mut reporter = ConsoleReporter::new(&mut *out).with_failures_only(config.failures_only);
            sweep(&mut reporter, &config)?;
            reporter.write_summary()?
        }
        ReportFormat::Json => {
            let mut reporter = JsonReporter::new(&mut *out).with_failures_only(config.failures_only);
            sweep(&mut reporter, &config)?;
            reporter.write_summary()?
        }
    };
    out.flush()?;

    Ok(exit_code_for(&summary, config.strict))
}

fn sweep<R: Reporter>(reporter: &mut R, config: &HarnessConfig) -> CliResult<SweepStats> {
    let stats = suite::run_worked_example(reporter, config)?;
    tracing::info!(variants = stats.variants, assertions = stats.assertions, "worked example finished");
    Ok(stats)
}

fn exit_code_for(summary: &Summary, strict: bool) -> ExitCode {
    if strict {
        ExitCode(summary.exit_code())
    } else {
        ExitCode::SUCCESS
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> (ExitCode, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let code = execute(&cli, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_defaults_match_reference_run() {
        let cli = Cli::try_parse_from(["slfet"]).unwrap();
        assert_eq!(cli.config(), HarnessConfig::new());
        assert!(!cli.list_patterns);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from([
            "slfet",
            "--len",
            "9",
            "--format",
            "json",
            "--failures-only",
            "--strict",
            "--kernel",
            "add",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.len, 9);
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.failures_only && config.strict);
        assert_eq!(config.kernels, KernelSelection::Add);
    }

    #[test]
    fn test_cli_rejects_unknown_kernel() {
        assert!(Cli::try_parse_from(["slfet", "--kernel", "mul"]).is_err());
    }

    #[test]
    fn test_list_patterns() {
        let (code, out) = run_to_string(&["slfet", "--list-patterns"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "min\nmax\nmid\ninc\ndec\nrand1\nrand2\n");
    }

    #[test]
    fn test_default_run_prints_every_observation() {
        let (code, out) = run_to_string(&["slfet", "--kernel", "sum", "--len", "9"]);
        assert_eq!(code, ExitCode::SUCCESS);
        let lines: Vec<&str> = out.lines().collect();
        // 7 fixed-length variants + 7 patterns x lengths [0, 1, 7, 8, 9] + summary
        assert_eq!(lines.len(), 7 + 7 * 5 + 1);
        assert_eq!(lines[0], "min - return: 1");
        assert_eq!(*lines.last().unwrap(), "====== 42 passed, 0 failed ======");
    }

    #[test]
    fn test_failures_only_suppresses_passing_lines() {
        let (_, out) = run_to_string(&["slfet", "--kernel", "add", "--len", "8", "--failures-only"]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("======"));
    }

    #[test]
    fn test_exit_code_for_strict() {
        let failed = Summary { total: 2, passed: 1, failed: 1 };
        assert_eq!(exit_code_for(&failed, false), ExitCode::SUCCESS);
        assert_eq!(exit_code_for(&failed, true), ExitCode::FAILURE);
        assert_eq!(exit_code_for(&failed, true).0, failed.exit_code());
        assert_eq!(exit_code_for(&Summary::default(), true), ExitCode::SUCCESS);
    }

    #[test]
    fn test_harness_error_becomes_failure() {
        let err: CliError = slfet_core::ConfigError::EmptyPatternSet.into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(!err.message.is_empty());
    }
}
