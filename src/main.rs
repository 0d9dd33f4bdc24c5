use area_calc::core::SampleProvider;
use area_calc::utils::{logger, validation::Validate};
use area_calc::{Calculator, CliConfig, OutputFormat};
use clap::Parser;
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    match config.output_format() {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting area-calc");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let calculator = Calculator::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = calculator.run(&mut out) {
        let _ = out.flush();
        tracing::error!(
            "Area calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
