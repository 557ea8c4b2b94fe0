use anyhow::Context;
use clap::Parser;
use landing::cli::Cli;
use landing::config::Config;
use landing::logging::init_tracing;
use landing::shutdown::ShutdownCoordinator;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        let toml = Config::default()
            .to_toml()
            .context("failed to serialize default config")?;
        print!("{}", toml);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_path = init_tracing(&config.logging, cli.log_file.as_deref())
        .context("failed to open log file")?;
    tracing::info!(log = %log_path.display(), "landing starting");

    let coordinator = ShutdownCoordinator::new();
    coordinator
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    landing::ui::runtime::run(config, coordinator.handle()).context("terminal UI failed")?;
    Ok(())
}
