use aikya_matrix::utils::{logger, validation::Validate};
use aikya_matrix::{CliConfig, MatrixApp, MatrixData, Selection};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting aikya-matrix");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let data = match config.load_data() {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("❌ Failed to load datasets: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!(
        "Datasets ready: {} sectors, {} tiers",
        data.sectors().len(),
        data.tiers().len()
    );

    let selection = match Selection::new(&data, &config.sector, &config.tier) {
        Ok(selection) => selection,
        Err(e) => {
            tracing::error!("❌ Initial selection rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Valid sectors: {}", join_keys(&data, true));
            eprintln!("💡 Valid tiers: {}", join_keys(&data, false));
            std::process::exit(e.exit_code());
        }
    };

    let result = if config.plain {
        aikya_matrix::render_plain(&data, &selection).map(|text| print!("{}", text))
    } else {
        MatrixApp::new(data, selection).run()
    };

    if let Err(e) = result {
        tracing::error!("❌ Matrix view failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Done");
}

fn join_keys(data: &MatrixData, sectors: bool) -> String {
    if sectors {
        data.sectors().keys().collect::<Vec<_>>().join(", ")
    } else {
        data.tiers().keys().collect::<Vec<_>>().join(", ")
    }
}
