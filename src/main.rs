use clap::Parser;
use teer_sr::core::display;
use teer_sr::utils::error::ErrorSeverity;
use teer_sr::utils::{logger, validation::Validate};
use teer_sr::{CliConfig, HttpResultsFeed, LocalStorage, PredictionPipeline, ReportEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init(config.verbose, config.json_logs);

    tracing::info!("Starting teer-sr");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let feed = HttpResultsFeed::new(config.feed_settings());
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = PredictionPipeline::new(feed, storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            let now = chrono::Local::now();

            println!("SR H/E Prediction");
            println!("{}", display::schedule_banner_at(&now));
            println!();
            println!("{}", display::render_results_table(&report.predictions));
            println!();
            println!("S/R 4 Guti Number");
            println!("{}", display::GUTI_BANNER);
            println!("{}", display::render_guti_card(report.guti.as_ref()));

            if let Some(path) = report.output_path {
                println!();
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "Prediction run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
