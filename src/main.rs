use clap::Parser;
use tradebot_wizard::app;
use tradebot_wizard::config::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = app::run(&cli, &mut std::io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "tradebot_wizard=info".into()),
        )
        .init();
}
