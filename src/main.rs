use clap::Parser;
use iss_watch::core::report;
use iss_watch::utils::error::ErrorSeverity;
use iss_watch::utils::{logger, validation::Validate};
use iss_watch::{CliConfig, HttpGeoResolver, HttpIpFetcher, HttpPassPredictor, TrackerEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting iss-watch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立三個查詢階段與引擎
    let ip_fetcher = HttpIpFetcher::new(&config);
    let geo_resolver = HttpGeoResolver::new(&config);
    let pass_predictor = HttpPassPredictor::new(&config);
    let engine = TrackerEngine::new(ip_fetcher, geo_resolver, pass_predictor);

    match engine.next_passes().await {
        Ok(passes) => {
            tracing::info!("✅ Flyover lookup completed, {} upcoming passes", passes.len());
            report::print_pass_times(&passes);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Flyover lookup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
