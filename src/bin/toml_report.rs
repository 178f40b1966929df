use clap::Parser;
use teer_sr::core::display;
use teer_sr::domain::ports::ConfigProvider;
use teer_sr::utils::{logger, validation::Validate};
use teer_sr::{HttpResultsFeed, LocalStorage, PredictionPipeline, ReportEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Prediction report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "teer-sr.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Skip writing the archive regardless of the config
    #[arg(long)]
    no_export: bool,

    /// Show the resolved configuration without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init(args.verbose || config.verbose_logging(), config.json_logging());
    tracing::info!("Loaded configuration from: {}", args.config);

    if args.no_export {
        config.load.enabled = Some(false);
        tracing::info!("Export disabled from the command line");
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("DRY RUN MODE - nothing will be fetched or written");
        return Ok(());
    }

    let feed = HttpResultsFeed::new(config.feed_settings());
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = ReportEngine::new(PredictionPipeline::new(feed, storage, config));

    match engine.run().await {
        Ok(report) => {
            println!("{}", display::render_results_table(&report.predictions));
            println!();
            println!("{}", display::render_guti_card(report.guti.as_ref()));
            if let Some(path) = report.output_path {
                println!("📁 Output saved to: {}", path);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Prediction run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("Report: {}", config.report.name);
    if let Some(description) = &config.report.description {
        tracing::info!("   {}", description);
    }
    tracing::info!("   Source: {}", config.api_endpoint());
    tracing::info!("   Max records: {}", config.max_records());
    tracing::info!(
        "   Fallback file: {}",
        config.fallback_file().unwrap_or("(none)")
    );
    if config.export_enabled() {
        tracing::info!(
            "   Export: {}/{} ({})",
            config.output_path(),
            config.archive_name(),
            config.output_formats().join(", ")
        );
    } else {
        tracing::info!("   Export: disabled");
    }
}
