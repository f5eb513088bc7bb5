//! Playground Entry Point
//!
//! Walks through the `setters` library one demo at a time: free functions,
//! piping, composition, lifting over collections, pair setters and property
//! setters. Every demo logs the values it computes and checks them.
//!
//! Usage:
//!   playground                         # run every demo
//!   playground --demo pipe --demo styling
//!   playground --list
//!
//! Log verbosity follows `RUST_LOG` (default `info,playground=debug`).

mod demos;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::demos::Demo;

#[derive(Parser)]
#[command(name = "playground")]
#[command(about = "Walkthrough of pipes, composition and setters")]
struct Cli {
    /// Demo to run; repeat to run several. Runs all demos when omitted.
    #[arg(long = "demo", value_enum)]
    demos: Vec<Demo>,

    /// Print the available demos and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,playground=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.list {
        for demo in Demo::ALL {
            println!("{:<18} {}", demo.name(), demo.summary());
        }
        return Ok(());
    }

    let selected = if cli.demos.is_empty() {
        Demo::ALL.to_vec()
    } else {
        cli.demos
    };

    for demo in selected {
        let _span = tracing::info_span!("demo", name = demo.name()).entered();
        tracing::info!("{}", demo.summary());
        demo.run()?;
        tracing::info!("ok");
    }

    Ok(())
}
