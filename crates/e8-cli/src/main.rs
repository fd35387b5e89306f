//! # e8 CLI entry point
//!
//! Parses command-line arguments, resolves the engine configuration and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use e8_cli::config::{resolve_config, FlagOverrides};
use e8_cli::derive::run_derive;
use e8_cli::series::{run_invariance, run_series, InvarianceArgs, Series, TauArgs, ThetaArgs};
use e8_cli::verify::{run_verify, VerifyArgs};
use e8_cli::zeta::{run_multiplicity, run_zeta, MultiplicityArgs, ZetaArgs};

/// E8 lattice numerics.
///
/// Evaluates the E8 theta series, Dedekind eta and the modular
/// discriminant at arbitrary precision, checks modular invariance, computes
/// the spectral zeta function and derived constants, and verifies
/// predictions against experimental data.
#[derive(Parser, Debug)]
#[command(name = "e8", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Significant decimal digits.
    #[arg(long, global = true)]
    precision: Option<u32>,

    /// Highest index kept in the theta and eta series.
    #[arg(long, global = true)]
    terms: Option<u32>,

    /// Number of shells in the direct zeta sum.
    #[arg(long, global = true)]
    bound: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Theta series of the E8 lattice.
    Theta(ThetaArgs),

    /// Dedekind eta function.
    Eta(TauArgs),

    /// Modular discriminant, eta to the 24th power.
    Discriminant(TauArgs),

    /// Compare theta(-1/tau) with tau^4 theta(tau).
    Invariance(InvarianceArgs),

    /// Number of lattice vectors of a squared norm.
    Multiplicity(MultiplicityArgs),

    /// Spectral zeta function.
    Zeta(ZetaArgs),

    /// Derived constants and their provenance.
    Derive,

    /// Compare predictions with experiment and check representation data.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let flags = FlagOverrides {
        precision: cli.precision,
        terms: cli.terms,
        bound: cli.bound,
    };
    let config = resolve_config(cli.config.as_deref(), flags)?;
    tracing::debug!(
        precision = config.precision_digits,
        terms = config.series_terms,
        bound = config.zeta_bound,
        "e8 CLI starting"
    );

    match &cli.command {
        Commands::Theta(args) => run_series(Series::Theta, &args.tau, args.truncate, &config),
        Commands::Eta(tau) => run_series(Series::Eta, tau, None, &config),
        Commands::Discriminant(tau) => run_series(Series::Discriminant, tau, None, &config),
        Commands::Invariance(args) => run_invariance(args, &config),
        Commands::Multiplicity(args) => run_multiplicity(args, &config),
        Commands::Zeta(args) => run_zeta(args, &config),
        Commands::Derive => run_derive(&config),
        Commands::Verify(args) => run_verify(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_theta() {
        let cli = Cli::try_parse_from(["e8", "theta", "--im", "1"]).unwrap();
        if let Commands::Theta(args) = cli.command {
            assert_eq!(args.tau.re, 0.0);
            assert_eq!(args.tau.im, 1.0);
            assert!(args.truncate.is_none());
        } else {
            panic!("expected theta");
        }
    }

    #[test]
    fn cli_parse_negative_real_part() {
        let cli = Cli::try_parse_from(["e8", "eta", "--re", "-0.5", "--im", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Eta(TauArgs { re, .. }) if re == -0.5));
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "e8", "zeta", "--re", "-1", "--precision", "80", "--bound", "64", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.precision, Some(80));
        assert_eq!(cli.bound, Some(64));
        assert_eq!(cli.verbose, 2);
        if let Commands::Zeta(args) = cli.command {
            assert_eq!(args.re, -1.0);
            assert!(!args.direct);
        }
    }

    #[test]
    fn cli_parse_config_path() {
        let cli = Cli::try_parse_from(["e8", "--config", "e8.yaml", "derive"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("e8.yaml")));
        assert!(matches!(cli.command, Commands::Derive));
    }

    #[test]
    fn cli_parse_negative_norm() {
        let cli = Cli::try_parse_from(["e8", "multiplicity", "-4"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Multiplicity(MultiplicityArgs { norm: -4 })
        ));
    }

    #[test]
    fn cli_parse_invariance_canonical_conflicts_with_point() {
        assert!(Cli::try_parse_from(["e8", "invariance", "--canonical", "--im", "1"]).is_err());
        let cli = Cli::try_parse_from(["e8", "invariance", "--canonical", "--tolerance", "theory"])
            .unwrap();
        if let Commands::Invariance(args) = cli.command {
            assert!(args.canonical);
            assert_eq!(args.tolerance.as_deref(), Some("theory"));
        }
    }

    #[test]
    fn cli_parse_verify_defaults() {
        let cli = Cli::try_parse_from(["e8", "verify"]).unwrap();
        if let Commands::Verify(args) = cli.command {
            assert_eq!(args.data_dir, PathBuf::from("data"));
            assert!(!args.json);
        }
    }

    #[test]
    fn cli_rejects_missing_im() {
        assert!(Cli::try_parse_from(["e8", "theta"]).is_err());
    }
}
