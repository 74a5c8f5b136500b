use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mansyntax::error::Result;
use mansyntax::fresh::NoFreshEntities;
use mansyntax::server;
use mansyntax::settings::Settings;

/// Parse Manchester syntax frames against a configured ontology.
#[derive(Parser)]
#[command(name = "mansyntax", version)]
struct Args {
    /// Settings file; `mansyntax.toml` in the working directory when omitted.
    #[arg(long, short)]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Command {
    /// Serve `POST /v1/parse` (the default).
    #[default]
    Serve,
    /// Parse frame text read from stdin and print the axioms.
    Parse,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "mansyntax failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let settings = Settings::load(args.config.as_deref())?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let parser = Arc::new(settings.build_parser());

    match args.command.unwrap_or_default() {
        Command::Serve => {
            let listener = tokio::net::TcpListener::bind(&settings.server.bind).await?;
            info!(bind = %settings.server.bind, "listening");
            axum::serve(listener, server::router(parser)).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Parse => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            match parser.parse(&text, &NoFreshEntities) {
                Ok(axioms) => {
                    for row in server::rows(axioms) {
                        println!("{} {}", row.ontology, row.axiom);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    println!("{}", serde_json::to_string_pretty(&parser.describe_error(&e))?);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
