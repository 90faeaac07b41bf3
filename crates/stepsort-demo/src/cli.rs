#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo host.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `STEPSORT_DEMO_*` prefix.

use std::env;
use std::process;

use stepsort_core::Algorithm;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
stepsort demo — watch a sorting algorithm narrate itself

USAGE:
    stepsort-demo [OPTIONS]

OPTIONS:
    --algorithm=NAME   Algorithm: bubble, selection, insertion, quick
                       (default: bubble)
    --size=N           Dataset size (default: 20, clamped by the engine)
    --speed-ms=N       Pacing delay between steps in milliseconds
                       (default: 80; 0 runs unpaced)
    --seed=N           Seed the dataset generator for a reproducible run
    --help, -h         Show this help message
    --version, -V      Show version

ENVIRONMENT VARIABLES:
    STEPSORT_DEMO_ALGORITHM   Override --algorithm
    STEPSORT_DEMO_SIZE        Override --size
    STEPSORT_DEMO_SPEED_MS    Override --speed-ms
    STEPSORT_DEMO_SEED        Override --seed
    STEPSORT_DEBUG_TRACE      Set to 1 for engine debug output on stderr";

/// Parsed command-line options.
pub struct Opts {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Requested dataset size.
    pub size: usize,
    /// Pacing delay in milliseconds.
    pub speed_ms: u64,
    /// Dataset seed, if fixed.
    pub seed: Option<u64>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            size: 20,
            speed_ms: 80,
            seed: None,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("STEPSORT_DEMO_ALGORITHM")
            && let Ok(algorithm) = val.parse()
        {
            opts.algorithm = algorithm;
        }
        if let Ok(val) = env::var("STEPSORT_DEMO_SIZE")
            && let Ok(n) = val.parse()
        {
            opts.size = n;
        }
        if let Ok(val) = env::var("STEPSORT_DEMO_SPEED_MS")
            && let Ok(n) = val.parse()
        {
            opts.speed_ms = n;
        }
        if let Ok(val) = env::var("STEPSORT_DEMO_SEED")
            && let Ok(n) = val.parse()
        {
            opts.seed = Some(n);
        }

        // Parse command-line args (override env vars)
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("stepsort-demo {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Some(val) = other.strip_prefix("--algorithm=") {
                        match val.parse() {
                            Ok(algorithm) => opts.algorithm = algorithm,
                            Err(e) => {
                                eprintln!("Invalid --algorithm value: {e}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--size=") {
                        match val.parse() {
                            Ok(n) => opts.size = n,
                            Err(_) => {
                                eprintln!("Invalid --size value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--speed-ms=") {
                        match val.parse() {
                            Ok(n) => opts.speed_ms = n,
                            Err(_) => {
                                eprintln!("Invalid --speed-ms value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        match val.parse() {
                            Ok(n) => opts.seed = Some(n),
                            Err(_) => {
                                eprintln!("Invalid --seed value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}
