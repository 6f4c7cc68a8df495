use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yamdb_loadcsv::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the result for scripts.
    // LOG_FORMAT=json selects JSON lines, anything else the text format.
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yamdb_loadcsv=info,yamdb_db=info".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let cli = Cli::parse();

    match yamdb_loadcsv::runner::run(&cli).await {
        Ok(summaries) => {
            if cli.json {
                match serde_json::to_string_pretty(&summaries) {
                    Ok(body) => println!("{body}"),
                    Err(err) => {
                        eprintln!("Error: failed to encode summary: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for summary in &summaries {
                    println!("{}", summary.success_message());
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
