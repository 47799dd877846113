use clap::Parser;
use credwiz::constants;
use credwiz::error::WizardError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = credwiz::cli::Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<WizardError>()
                .map(WizardError::exit_code)
                .unwrap_or(constants::EXIT_GENERAL);
            if code == constants::EXIT_ABORTED {
                eprintln!("Aborted");
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::from(code)
        }
    }
}
