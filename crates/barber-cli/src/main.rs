mod config;

use std::error::Error;
use std::ops::Range;
use std::sync::Arc;

use clap::Parser;
use rand::Rng;
use tokio::time::{Duration, sleep};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use barber_core::impls::{JsonLinesSink, TracingSink};
use barber_core::ports::{Clock, EventSink, SystemClock, UniformServiceTime};
use barber_core::{Admission, Client, Shop};

use crate::config::{Args, SimulationConfig};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time();

    // JSON モードでは stdout をイベント専用にする
    if json {
        builder.with_writer(std::io::stderr).init();
    } else {
        builder.init();
    }
}

#[derive(Debug, Default)]
struct Tally {
    admitted: u64,
    turned_away: u64,
}

/// 客を 1 人ずつ、ランダムな間隔で入店させる
async fn send_customers(
    admission: &Admission,
    customers: u64,
    gap_ms: Range<u64>,
    stop: &CancellationToken,
) -> Tally {
    let mut tally = Tally::default();
    for id in 1..=customers {
        if admission.try_admit(Client::new(id)).is_admitted() {
            tally.admitted += 1;
        } else {
            tally.turned_away += 1;
        }

        let gap = rand::thread_rng().gen_range(gap_ms.clone());
        tokio::select! {
            _ = stop.cancelled() => break,
            _ = sleep(Duration::from_millis(gap)) => {}
        }
    }
    tally
}

fn stop_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl-C, closing the shop");
            trigger.cancel();
        }
    });
    token
}

async fn run(config: SimulationConfig) -> Result<(), Box<dyn Error>> {
    let stop = stop_on_ctrl_c();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let sink: Arc<dyn EventSink> = if config.json {
        Arc::new(JsonLinesSink::stdout())
    } else {
        Arc::new(TracingSink::new(clock.clone()))
    };

    let mut shop = Shop::builder(config.spec)
        .clock(clock)
        .sink(sink)
        .cancel_on(stop.clone())
        .build()?;

    tracing::info!(
        "Simulation starting with: {} Barbers, {} Chairs.",
        config.spec.barbers,
        config.spec.chairs
    );
    let shave = UniformServiceTime::default();
    tracing::info!(
        "Note: Each barber has a random shave duration ({}-{}ms).",
        shave.range_ms().start,
        shave.range_ms().end
    );

    shop.open()?;

    let tally = send_customers(
        &shop.admission(),
        config.customers,
        config.arrival_gap_ms.clone(),
        &stop,
    )
    .await;

    // 残りの客を捌く時間を与える
    tokio::select! {
        _ = stop.cancelled() => {}
        _ = sleep(config.hold_open) => {}
    }

    let status = shop.status();
    shop.close().await;

    tracing::info!(
        admitted = tally.admitted,
        turned_away = tally.turned_away,
        still_waiting = status.occupancy.occupied,
        "simulation finished"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = SimulationConfig::from(Args::parse());
    init_tracing(config.json);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "simulation failed");
        return Err(e);
    }
    Ok(())
}
