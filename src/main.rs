use anyhow::Context;
use clap::Parser;
use project_seed::core::composer::SkipUpdate;
use project_seed::domain::ports::DependencyUpdater;
use project_seed::utils::error::ErrorSeverity;
use project_seed::utils::{logger, validation::Validate};
use project_seed::{
    CliConfig, ComposerUpdater, InstallOutcome, Installer, SeedConfig, SeedError, StdoutConsole,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting project-seed");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let project_root = cli
        .project_root
        .canonicalize()
        .with_context(|| format!("project root {} not found", cli.project_root.display()))?;

    let mut config = match SeedConfig::load(&project_root, cli.apps_file.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    if let Some(program) = &cli.composer {
        config.layout.composer_program = program.clone();
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(e);
    }
    tracing::info!(
        "Resolved {} app(s) under {}",
        config.apps.len(),
        project_root.display()
    );

    if cli.no_update {
        install(&cli, &project_root, &config, SkipUpdate)
    } else {
        install(
            &cli,
            &project_root,
            &config,
            ComposerUpdater::new(config.layout.composer_program.clone()),
        )
    }
}

fn install<U: DependencyUpdater>(
    cli: &CliConfig,
    project_root: &Path,
    config: &SeedConfig,
    updater: U,
) -> anyhow::Result<()> {
    let mut installer = Installer::new(project_root, updater, StdoutConsole);
    if cli.keep_bootstrap {
        installer = installer.keep_bootstrap();
    }

    if cli.dry_run {
        tracing::info!("DRY RUN - nothing will be written");
        for step in installer.plan(config) {
            println!("{}", step);
        }
        return Ok(());
    }

    match installer.run(config) {
        Ok(InstallOutcome::Installed { apps, files_copied }) => {
            tracing::info!("Installed {} app(s), {} file(s) written", apps, files_copied);
            Ok(())
        }
        // the guard already explained itself on the console
        Ok(InstallOutcome::Aborted { .. }) => Ok(()),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: SeedError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
