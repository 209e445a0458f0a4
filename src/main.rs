//! bff-gateway server binary

use bff_gateway::server::builder::{DEFAULT_CONFIG_PATH, run_server_with};
use bff_gateway::utils::logging::{LogFormat, init_logging};
use clap::Parser;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "BFF gateway authorization layer")]
struct Args {
    /// YAML configuration file; `BFF_*` environment variables are used when it is unusable
    #[arg(short, long, env = "BFF_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    init_logging(LogFormat::from_env());

    match run_server_with(&args.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
