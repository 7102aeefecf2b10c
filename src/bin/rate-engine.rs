//! rate-engine CLI - quick conversions and chart summaries from the terminal
//!
//! ## Example Usage
//!
//! ```bash
//! # Convert an amount using the built-in reference table
//! rate-engine convert 10 USD INR
//!
//! # Summarize a synthetic historical series
//! rate-engine chart USD INR --window 1M
//!
//! # List supported currencies
//! rate-engine currencies
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rate_engine::currency::Currency;
use rate_engine::providers::{SeriesProvider, SyntheticProvider};
use rate_engine::rates::ChartWindow;
use rate_engine::reference::reference_table;

/// rate-engine: currency conversion and rate series engine
#[derive(Parser)]
#[command(name = "rate-engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Currency conversion and historical rate series engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies (reference rates)
    Convert {
        /// Amount to convert
        amount: f64,

        /// Source currency code
        from: String,

        /// Target currency code
        to: String,
    },

    /// Summarize a synthetic historical series for a pair
    Chart {
        /// Base currency code
        from: String,

        /// Quote currency code
        to: String,

        /// Chart window (1D, 1M, 3M, 6M, 1Y, 5Y)
        #[arg(short, long, default_value = "1M")]
        window: String,
    },

    /// List supported currencies
    Currencies,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { amount, from, to } => {
            let from = Currency::from_code(&from).context("invalid source currency")?;
            let to = Currency::from_code(&to).context("invalid target currency")?;

            let table = reference_table();
            let converted = table.convert(amount, from, to);

            println!(
                "{}{:.2} = {}{:.2}  ({} -> {}, reference rates)",
                from.symbol(),
                amount,
                to.symbol(),
                converted,
                from,
                to
            );
        }

        Commands::Chart { from, to, window } => {
            let from = Currency::from_code(&from).context("invalid base currency")?;
            let to = Currency::from_code(&to).context("invalid quote currency")?;
            let window = ChartWindow::from_str(&window).context("invalid chart window")?;

            let pair = rate_engine::currency::CurrencyPair::new(from, to);
            let provider = SyntheticProvider::new();
            let series = provider.series(pair, window, Utc::now())?;

            println!("{} over {} — SYNTHETIC DATA, not live rates", pair, window);
            println!("  points:     {}", series.len());
            println!("  average:    {:.4}", series.average());
            println!("  min / max:  {:.4} / {:.4}", series.min_rate(), series.max_rate());
            println!("  change:     {:+.2}%", series.change_percent());
        }

        Commands::Currencies => {
            for currency in Currency::all() {
                println!(
                    "{} {}  {:<4} {}",
                    currency.flag(),
                    currency.as_str(),
                    currency.symbol(),
                    currency.name()
                );
            }
        }
    }

    Ok(())
}
