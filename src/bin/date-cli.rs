use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use helper_service::conversion::DateConversionService;
use helper_service::http::{CONVERT_PATH, HEALTH_PATH};

#[derive(Parser)]
#[command(name = "date-cli")]
#[command(about = "Client for the German date helper service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a date through the running service
    Convert {
        /// Date in any supported format, e.g. 2026-02-09
        value: String,
    },
    /// Check service liveness
    Health,
    /// Convert a date in-process, without a server
    Local {
        /// Date in any supported format, e.g. 09.02.2026
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Convert { value } => {
            let res = client
                .post(format!("{}{}", cli.url, CONVERT_PATH))
                .json(&json!({ "dateValue": value }))
                .send()
                .await?;
            print_response(res).await
        }
        Commands::Health => {
            let res = client.get(format!("{}{}", cli.url, HEALTH_PATH)).send().await?;
            print_response(res).await
        }
        Commands::Local { value } => match DateConversionService::new().parse(&value) {
            Ok(parsed) => {
                println!("{} ({})", parsed.to_german(), parsed.strategy);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    let pretty = serde_json::to_string_pretty(&json)?;

    if status.is_success() {
        println!("{pretty}");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Error: service returned status {status}");
        eprintln!("{pretty}");
        Ok(ExitCode::FAILURE)
    }
}
