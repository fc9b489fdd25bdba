//! Command-line arguments and the simulation settings derived from them.

use std::ops::Range;
use std::str::FromStr;

use barber_core::ShopSpec;
use clap::Parser;
use tokio::time::Duration;

const DEFAULT_DURATION_SECS: u64 = 5;
const DEFAULT_CUSTOMERS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "barber-cli")]
#[command(version)]
#[command(about = "Sleeping barber simulation")]
pub struct Args {
    /// How long to keep the shop open after the last arrival, in seconds (default 5)
    #[arg(allow_hyphen_values = true)]
    pub duration: Option<String>,

    /// Number of barbers (default 2)
    #[arg(allow_hyphen_values = true)]
    pub barbers: Option<String>,

    /// Number of waiting-room chairs (default 3)
    #[arg(allow_hyphen_values = true)]
    pub chairs: Option<String>,

    /// Number of customers sent to the shop
    #[arg(long, default_value_t = DEFAULT_CUSTOMERS)]
    pub customers: u64,

    /// Print events as JSON lines on stdout
    #[arg(long)]
    pub json: bool,
}

/// Everything the driver needs to run one simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub spec: ShopSpec,
    pub hold_open: Duration,
    pub customers: u64,
    /// Pause between two arrivals, in milliseconds.
    pub arrival_gap_ms: Range<u64>,
    pub json: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spec: ShopSpec::default(),
            hold_open: Duration::from_secs(DEFAULT_DURATION_SECS),
            customers: DEFAULT_CUSTOMERS,
            arrival_gap_ms: 20..200,
            json: false,
        }
    }
}

// 数値にならない引数は黙ってデフォルトに戻す
fn or_default<T: FromStr>(arg: Option<&str>, default: T) -> T {
    arg.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

impl From<Args> for SimulationConfig {
    fn from(args: Args) -> Self {
        let defaults = SimulationConfig::default();
        Self {
            spec: ShopSpec::new(
                or_default(args.barbers.as_deref(), defaults.spec.barbers),
                or_default(args.chairs.as_deref(), defaults.spec.chairs),
            ),
            hold_open: Duration::from_secs(or_default(
                args.duration.as_deref(),
                DEFAULT_DURATION_SECS,
            )),
            customers: args.customers,
            json: args.json,
            ..defaults
        }
    }
}
