//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::app::api::InstallOutcome;
use crate::app::settings::InstallerSettings;
use crate::domain::AppError;

const LOG_ENV: &str = "DGRAPH_HELPER_LOG";

#[derive(Parser)]
#[command(name = "dgraph-helper")]
#[command(version)]
#[command(
    about = "Configure, install, and start Dgraph as a systemd service",
    long_about = None
)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the configuration wizard and install Dgraph (default)
    #[clap(visible_alias = "i")]
    Install(InstallArgs),
    /// Check that this host can be installed on
    #[clap(visible_alias = "p")]
    Preflight {
        /// Directory holding systemd unit files
        #[arg(long, value_name = "DIR")]
        service_dir: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct InstallArgs {
    /// Directory holding systemd unit files
    #[arg(long, value_name = "DIR")]
    service_dir: Option<PathBuf>,
    /// Install directory offered by the wizard
    #[arg(long, value_name = "DIR")]
    install_dir: Option<PathBuf>,
    /// URL of the Dgraph install script
    #[arg(long, value_name = "URL")]
    install_script_url: Option<String>,
    /// Print config.yaml and the unit file instead of installing
    #[arg(long)]
    dry_run: bool,
}

impl InstallArgs {
    fn into_settings(self) -> InstallerSettings {
        let mut settings = InstallerSettings { dry_run: self.dry_run, ..Default::default() };
        if let Some(dir) = self.service_dir {
            settings.service_dir = dir;
        }
        if let Some(dir) = self.install_dir {
            settings.default_install_dir = dir;
        }
        if let Some(url) = self.install_script_url {
            settings.install_script_url = url;
        }
        settings
    }
}

pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Install(args)) => run_install(args),
        None => run_install(InstallArgs::default()),
        Some(Commands::Preflight { service_dir }) => run_preflight(service_dir),
    };

    if let Err(e) = result {
        debug!(kind = ?e.kind(), "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_install(args: InstallArgs) -> Result<(), AppError> {
    let settings = args.into_settings();
    match crate::install(&settings)? {
        InstallOutcome::Installed(config) => {
            println!("✅ Dgraph installed with configuration {}", config.config_path().display());
        }
        InstallOutcome::Declined => println!("Installation aborted; nothing was changed."),
        InstallOutcome::DryRun(artifacts) => {
            println!("# {}", artifacts.config_path.display());
            print!("{}", artifacts.config_yaml);
            println!();
            println!("# {}", artifacts.unit_path.display());
            print!("{}", artifacts.unit);
        }
    }
    Ok(())
}

fn run_preflight(service_dir: Option<PathBuf>) -> Result<(), AppError> {
    let mut settings = InstallerSettings::default();
    if let Some(dir) = service_dir {
        settings.service_dir = dir;
    }
    crate::preflight(&settings)?;
    println!("✅ Host is ready: {} is writable", settings.service_dir.display());
    Ok(())
}
