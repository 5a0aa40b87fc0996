use anyhow::Context;
use clap::Parser;
use pairing_board::domain::ports::ConfigProvider;
use pairing_board::utils::{logger, validation::Validate};
use pairing_board::{CliConfig, LocalStorage, ReplaySession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pairing-board CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 合併 TOML 與命令列設定
    let config = cli
        .resolve()
        .with_context(|| format!("failed to load configuration {:?}", cli.config))?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let input = LocalStorage::new(".".to_string());
    let output = LocalStorage::new(config.output_path().to_string());
    let output_path = config.output_path().to_string();
    let session = ReplaySession::new(input, output, config);

    match session.run().await {
        Ok(outcome) => {
            tracing::info!(
                "✅ Applied {} project actions and {} settings actions",
                outcome.project_actions,
                outcome.settings_actions
            );
            println!("✅ Replay completed successfully!");
            for file in &outcome.written {
                println!("📁 {}/{}", output_path, file);
            }
        }
        Err(e) => {
            tracing::error!("❌ Replay failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
