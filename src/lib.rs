use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mp3grab_core::core::orchestrator::DownloadOrchestrator;

pub mod cli;
pub mod commands;
pub mod core;
pub mod storage;
pub mod ui;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start the async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(start(cli)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn start(cli: cli::Cli) -> anyhow::Result<ExitCode> {
    let mut settings = storage::config::load_settings();
    cli.apply(&mut settings);

    if cli.save_settings {
        let path = storage::config::save_settings(&settings)?;
        tracing::info!("Settings saved to {}", path.display());
    }

    tracing::info!(
        "Saving {} files to {}",
        settings.download.audio_format,
        settings.download.output_dir.display()
    );

    let backend = Arc::new(commands::downloads::CommandBackend::new(settings));
    let orchestrator = DownloadOrchestrator::new(backend, crate::core::events::TerminalEmitter::new());

    if cli.urls.is_empty() {
        ui::interactive(&orchestrator).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let failed = ui::batch(&orchestrator, &cli.urls).await;
    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!("{} of {} downloads did not complete", failed, cli.urls.len());
        Ok(ExitCode::FAILURE)
    }
}
