//! Non-interactive front end: ranks carriers for one order and prints JSON.

use anyhow::Context;
use carrier_select::application::services::CarrierRankingEngine;
use carrier_select::application::services::ranking_strategy::CheapestFirstStrategy;
use carrier_select::config::AppConfig;
use carrier_select::domain::value_objects::OrderId;
use carrier_select::infrastructure::persistence::postgres::{
    self, PostgresCarrierRepository, PostgresOrderRepository, PostgresTierRepository,
};
use carrier_select::telemetry;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "carrier-select")]
#[command(about = "Rank carrier services for an order by shipping price")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cheapest quote, or null if no carrier can ship the order.
    Best {
        /// Order ID.
        order_id: i64,
    },
    /// Print quotes ranked cheapest first.
    Rank {
        /// Order ID.
        order_id: i64,
        /// Maximum number of quotes; defaults to `ranking.default_limit`.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the order summary, every quote and the best/worst spread.
    Compare {
        /// Order ID.
        order_id: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(3);
        }
    };
    telemetry::init_tracing(&config.logging);

    match run(cli.command, &config).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "command failed");
            eprintln!("{e:#}");
            let not_found = e
                .downcast_ref::<carrier_select::application::ApplicationError>()
                .is_some_and(|app| app.is_not_found());
            if not_found { ExitCode::from(2) } else { ExitCode::FAILURE }
        }
    }
}

async fn run(command: Command, config: &AppConfig) -> anyhow::Result<String> {
    let pool = postgres::connect(&config.database.url, config.database.max_connections)
        .await
        .context("connecting to the database")?;

    let engine = CarrierRankingEngine::new(
        Arc::new(PostgresCarrierRepository::new(pool.clone())),
        Arc::new(PostgresTierRepository::new(pool.clone())),
        Arc::new(PostgresOrderRepository::new(pool)),
        Arc::new(CheapestFirstStrategy::new()),
        config.ranking,
    );

    let json = match command {
        Command::Best { order_id } => {
            let best = engine.best_quote(OrderId::new(order_id)).await?;
            serde_json::to_string_pretty(&best)?
        }
        Command::Rank { order_id, limit } => {
            let limit = limit.unwrap_or(engine.config().default_limit);
            let ranked = engine.rank(OrderId::new(order_id), limit).await?;
            serde_json::to_string_pretty(&ranked)?
        }
        Command::Compare { order_id } => {
            let comparison = engine.compare(OrderId::new(order_id)).await?;
            serde_json::to_string_pretty(&comparison)?
        }
    };
    Ok(json)
}
