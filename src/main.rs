//! docweave command-line entry point.

use clap::Parser;
use docweave::cli::commands::{build, index, init, report, tree};
use docweave::cli::{Cli, Commands};
use docweave::io::{ExitCode, ResultCode};
use docweave::{Settings, logging};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            return report(
                cli.command.output_format(),
                ResultCode::ConfigError,
                &format!("Configuration error: {e}"),
            )
            .into();
        }
    };

    logging::init_with_config(&settings.logging);

    // Init writes the config, so a missing one is expected there
    let uses_workspace_config = !matches!(cli.command, Commands::Init { .. }) && cli.config.is_none();
    if let Some(warning) = uses_workspace_config
        .then(Settings::check_init)
        .and_then(Result::err)
    {
        tracing::info!("[config] {warning}, using defaults");
    }

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.hierarchy.parallel_threads)
        .build_global()
    {
        tracing::warn!("[cli] could not size worker pool: {e}");
    }

    let code = match &cli.command {
        Commands::Init { force } => match std::env::current_dir() {
            Ok(root) => init::run_init(&root, *force),
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {e}");
                ExitCode::GeneralError
            }
        },
        Commands::Config => init::run_config(&settings),
        Commands::Index { model, .. } => index::run(
            model.as_deref(),
            cli.command.index_mode_override(),
            cli.command.output_format(),
            &settings,
        ),
        Commands::Tree { model, kind, .. } => tree::run(
            model.as_deref(),
            *kind,
            cli.command.output_format(),
            &settings,
        ),
        Commands::Build { model, .. } => {
            build::run(model.as_deref(), cli.command.output_format(), &settings)
        }
    };

    code.into()
}
