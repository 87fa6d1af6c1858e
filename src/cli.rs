//! CLI interface for Lookout.
//!
//! Each subcommand is non-interactive: arguments in, structured output out.
//! Counts and degrees go to stdout; human-readable commentary goes to stderr.
//!
//! Every command operates on a horizon — a JSON file given with
//! `--horizon`, or the built-in drill horizon when omitted.

mod format;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::fixture;
use crate::model::{Heading, Horizon};
use crate::watch;

use format::{format_heading, format_window};

/// Lookout — keep watch on the horizon.
#[derive(Debug, Parser)]
#[command(name = "lookout", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Horizon file: a JSON array of 360 arrays of light-mark codes.
    /// When omitted, the built-in drill horizon is used.
    #[arg(long, global = true)]
    horizon: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: a night watch
  1. lookout count --center 0 --angle 30
     → how many vessels lie within 15° either side of north
  2. lookout count --center 0 --angle 30 --heading towards
     → only the ones coming at you
  3. lookout scan --angle 30
     → the busiest direction on the horizon
  4. lookout report --json
     → every vessel on the horizon, tallied by heading

Use --horizon sightings.json to watch your own recorded horizon."#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count vessels within an angular window.
    ///
    /// The window spans `angle` degrees centered on `center`, inclusive
    /// on both ends, wrapping through north. Prints the count.
    Count {
        /// Window center in degrees. Any integer; normalized modulo 360.
        #[arg(long)]
        center: i32,

        /// Window width in degrees. 360 or more covers the whole horizon.
        #[arg(long)]
        angle: i32,

        /// Count only vessels with this heading.
        #[arg(long, value_enum)]
        heading: Option<HeadingArg>,
    },

    /// Find the window center with the most vessels.
    ///
    /// Scans every center from 0° to 359°; ties go to the smallest
    /// center. Prints the winning center.
    Scan {
        /// Window width in degrees.
        #[arg(long)]
        angle: i32,
    },

    /// Tally every vessel on the horizon by heading.
    Report {
        /// Emit the tally as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in drill and verify the expected counts.
    ///
    /// Ignores `--horizon`: the drill always runs against the fixed
    /// drill horizon its expectations were written for.
    Check,
}

/// CLI-facing heading filter, mapped to the domain `Heading`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadingArg {
    /// Red and green together: coming at the observer.
    Towards,
    /// A lone white stern light.
    Away,
    /// A lone red port light.
    Left,
    /// A lone green starboard light.
    Right,
    /// Lights that don't resolve to a heading.
    Unknown,
}

impl HeadingArg {
    fn to_domain(self) -> Heading {
        match self {
            Self::Towards => Heading::Towards,
            Self::Away => Heading::Away,
            Self::Left => Heading::Left,
            Self::Right => Heading::Right,
            Self::Unknown => Heading::Unknown,
        }
    }
}

/// Per-heading vessel totals for `lookout report`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadingTally {
    towards: usize,
    away: usize,
    left: usize,
    right: usize,
    unknown: usize,
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Count {
            center,
            angle,
            heading,
        } => {
            let horizon = load_horizon(cli.horizon.as_deref())?;
            cmd_count(&horizon, center, angle, heading)
        }
        Command::Scan { angle } => {
            let horizon = load_horizon(cli.horizon.as_deref())?;
            cmd_scan(&horizon, angle)
        }
        Command::Report { json } => {
            let horizon = load_horizon(cli.horizon.as_deref())?;
            cmd_report(&horizon, json)
        }
        Command::Check => cmd_check(),
    }
}

/// Load the horizon from a file, or fall back to the drill horizon.
fn load_horizon(path: Option<&Path>) -> Result<Horizon, String> {
    let Some(path) = path else {
        return Ok(fixture::drill_horizon());
    };

    let contents =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    serde_json::from_str(&contents).map_err(|e| format!("invalid horizon at {}: {e}", path.display()))
}

fn cmd_count(
    horizon: &Horizon,
    center: i32,
    angle: i32,
    heading: Option<HeadingArg>,
) -> Result<(), String> {
    let count = match heading.map(HeadingArg::to_domain) {
        Some(wanted) => watch::count_vessels(horizon, center, angle, |h| h == wanted),
        None => watch::count_vessels(horizon, center, angle, |_| true),
    };

    let filter = match heading.map(HeadingArg::to_domain) {
        Some(wanted) => format!(" heading {}", format_heading(wanted)),
        None => String::new(),
    };
    eprintln!(
        "{count} vessel(s){filter} within {}",
        format_window(center, angle)
    );
    println!("{count}");
    Ok(())
}

fn cmd_scan(horizon: &Horizon, angle: i32) -> Result<(), String> {
    let best = watch::most_vessels(horizon, angle);
    let count = watch::count_vessels(horizon, best, angle, |_| true);

    eprintln!(
        "Busiest window: {} with {count} vessel(s)",
        format_window(best, angle)
    );
    println!("{best}");
    Ok(())
}

fn cmd_report(horizon: &Horizon, json: bool) -> Result<(), String> {
    let count = |wanted: Heading| watch::count_vessels(horizon, 0, 360, |h| h == wanted);
    let tally = HeadingTally {
        towards: count(Heading::Towards),
        away: count(Heading::Away),
        left: count(Heading::Left),
        right: count(Heading::Right),
        unknown: count(Heading::Unknown),
    };

    if json {
        let out = serde_json::to_string_pretty(&tally)
            .map_err(|e| format!("failed to serialize tally: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    for (heading, total) in [
        (Heading::Towards, tally.towards),
        (Heading::Away, tally.away),
        (Heading::Left, tally.left),
        (Heading::Right, tally.right),
        (Heading::Unknown, tally.unknown),
    ] {
        println!("{:<8} {total}", format_heading(heading));
    }
    Ok(())
}

/// The self-check drill: fixed windows over the drill horizon with
/// known answers.
fn cmd_check() -> Result<(), String> {
    let horizon = fixture::drill_horizon();

    let count_checks: &[(&str, i32, i32, Option<Heading>, usize)] = &[
        ("any heading", 0, 30, None, 7),
        ("unknown only", 0, 30, Some(Heading::Unknown), 1),
        ("away only", 0, 30, Some(Heading::Away), 2),
        ("any heading", 15, 60, None, 12),
        ("any heading", 350, 80, None, 11),
    ];

    let mut failures = 0;
    for &(label, center, angle, heading, expected) in count_checks {
        let got = match heading {
            Some(wanted) => watch::count_vessels(&horizon, center, angle, |h| h == wanted),
            None => watch::count_vessels(&horizon, center, angle, |_| true),
        };
        report_check(
            &format!("count {} ({label})", format_window(center, angle)),
            got == expected,
            &format!("{got}"),
            &format!("{expected}"),
            &mut failures,
        );
    }

    let busiest = watch::most_vessels(&horizon, 30);
    report_check(
        "scan angle 30",
        busiest == 11,
        &format!("{busiest}"),
        "11",
        &mut failures,
    );

    if failures == 0 {
        eprintln!("All drill checks passed.");
        Ok(())
    } else {
        Err(format!("{failures} drill check(s) failed"))
    }
}

fn report_check(label: &str, passed: bool, got: &str, expected: &str, failures: &mut u32) {
    if passed {
        println!("ok    {label}: {got}");
    } else {
        println!("FAIL  {label}: got {got}, expected {expected}");
        *failures += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    use crate::model::DEGREES;

    #[test]
    fn loads_horizon_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("horizon.json");

        let mut slots = vec![Vec::<String>::new(); DEGREES];
        slots[90] = vec!["r".to_string(), "g".to_string()];
        fs::write(&path, serde_json::to_string(&slots).unwrap()).unwrap();

        let horizon = load_horizon(Some(&path)).unwrap();
        assert_eq!(watch::count_vessels(&horizon, 90, 0, |_| true), 1);
        assert_eq!(
            watch::count_vessels(&horizon, 90, 0, |h| h == Heading::Towards),
            1
        );
    }

    #[test]
    fn rejects_horizon_file_with_wrong_length() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.json");
        fs::write(&path, serde_json::to_string(&vec![Vec::<String>::new(); 12]).unwrap()).unwrap();

        let err = load_horizon(Some(&path)).unwrap_err();
        assert!(err.contains("invalid horizon"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_horizon(Some(Path::new("/nonexistent/horizon.json"))).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn no_file_falls_back_to_the_drill() {
        let horizon = load_horizon(None).unwrap();
        assert_eq!(watch::count_vessels(&horizon, 0, 30, |_| true), 7);
    }
}
