use anyhow::Context;
use clap::Parser;
use restful_client::core::ConfigProvider;
use restful_client::utils::{logger, validation::Validate};
use restful_client::{CliConfig, ClientError, LocalStorage, Outcome, RequestDispatcher, RestfulClient};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置，任何網路請求之前
    if let Err(e) = config.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let client = RestfulClient::new(RequestDispatcher::new(), LocalStorage::current_dir());
    let request = config.request();

    let mut stdout = std::io::stdout().lock();
    let result = client.run(&request, config.output(), &mut stdout).await;
    stdout.flush().context("failed to flush stdout")?;
    drop(stdout);

    match result {
        Ok(Outcome::Saved { path, format }) => {
            tracing::debug!("Wrote {:?} output to {}", format, path.display());
        }
        Ok(Outcome::Printed(_)) => {}
        Err(ClientError::RemoteFailure { status, .. }) => {
            // 回應內容已輸出到 stdout
            tracing::debug!("Exiting after HTTP {}", status);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
