use clap::Parser;
use fitness_tracker::utils::logger;
use fitness_tracker::{CliConfig, Tracker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fitness-tracker");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並合併訓練資料
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load workout packages: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let tracker = Tracker::new(settings.format);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No summaries will be printed");
        let report = tracker.dry_run(&settings.packages);
        println!(
            "{} packages: {} valid, {} would be skipped",
            report.processed(),
            report.summaries.len(),
            report.skipped.len()
        );
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match tracker.run(&settings.packages, &mut out) {
        Ok(report) => {
            tracing::info!(
                "✅ Processed {} packages ({} skipped)",
                report.processed(),
                report.skipped.len()
            );
        }
        Err(e) => {
            tracing::error!("❌ Tracker failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
