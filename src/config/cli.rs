use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "project-seed")]
#[command(about = "Scaffold CodeIgniter application folders after composer create-project")]
pub struct CliConfig {
    /// Project root containing composer.json and vendor/
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// TOML file listing the apps instead of composer.json
    #[arg(long)]
    pub apps_file: Option<PathBuf>,

    /// Override the dependency manager executable
    #[arg(long)]
    pub composer: Option<String>,

    /// Skip running `composer update`
    #[arg(long)]
    pub no_update: bool,

    /// Leave the seed's own files in place
    #[arg(long)]
    pub keep_bootstrap: bool,

    /// Show what would be done without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}
