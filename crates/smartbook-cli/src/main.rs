mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SMARTBOOK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "smartbook", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::load(cli.data_dir);

    match cli.command {
        Commands::Paginate(args) => handlers::paginate::handle(&ctx, args).await?,
        Commands::Read(args) => handlers::read::handle(&ctx, args).await?,
        Commands::Progress(progress_cmd) => handlers::progress::handle(&ctx, progress_cmd.action)?,
        Commands::Settings(settings_cmd) => handlers::settings::handle(&ctx, settings_cmd.action)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
