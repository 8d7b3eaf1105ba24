use geoscan_cli::cli::Cli;
use geoscan_cli::error::ExitCode;
use geoscan_cli::orchestrators::{ScanOptions, ScanOrchestrator};
use geoscan_cli::terminal;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse_normalized();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("geoscan_core", log::LevelFilter::Debug)
            .filter_module("geoscan_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if !terminal::stderr_supports_color() {
        colored::control::set_override(false);
    }

    log::debug!("CSV output: {}", cli.csv.display());

    let orchestrator = ScanOrchestrator::new(ScanOptions::new(cli.csv));
    match orchestrator.run() {
        Ok(_) => ExitCode::Success.into(),
        Err(e) => {
            eprint!("{}", e.format_for_user(cli.debug));
            e.exit_code().into()
        }
    }
}
