mod config;
mod dispatch;
mod protocol;

use std::io::Read;

use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RequestConfig;
use crate::protocol::{Input, Output};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries the single JSON result line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tgdispatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run().await;

    if !output.error.is_empty() {
        error!("{}", output.error);
    }

    match serde_json::to_string(&output) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            error!("failed to encode output: {e}");
            println!(r#"{{"result":null,"error":"failed to encode output"}}"#);
        }
    }
    // Exit code stays 0 on every path; callers read the error field
}

async fn run() -> Output {
    let mut raw = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut raw) {
        return Output::failure(format!("failed to read input: {e}"));
    }

    let input: Input = match serde_json::from_str(&raw) {
        Ok(input) => input,
        Err(e) => return Output::failure(format!("failed to decode input: {e}")),
    };

    let cfg = RequestConfig::from_input(&input);
    debug!(action = %cfg.action, "parsed request");

    match dispatch::run(&cfg).await {
        Ok(result) => Output::success(result),
        Err(e) => Output::failure(format!("{e:#}")),
    }
}
