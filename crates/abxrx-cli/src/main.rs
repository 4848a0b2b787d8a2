//! AbxRxPro CLI - antibiotic resistance profiling.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "abxrx=debug" } else { "abxrx=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = commands::Context {
        settings: cli.settings,
        store: cli.store,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Analyze {
            inputs,
            colours,
            save,
            export,
            open,
            hide_frequencies,
            dump_genotypes,
            dump_frequencies,
        } => commands::analyze::run(
            &ctx,
            inputs,
            commands::analyze::Options {
                colours,
                save,
                export,
                open,
                hide_frequencies,
                dump_genotypes,
                dump_frequencies,
            },
        ),

        Commands::Correlate { inputs, json } => commands::correlate::run(&ctx, inputs, json),

        Commands::Profiles { json } => commands::profiles::run(&ctx, json),

        Commands::Show { name, export, open } => commands::show::run(&ctx, &name, export, open),

        Commands::Delete { name, yes } => commands::delete::run(&ctx, &name, yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
