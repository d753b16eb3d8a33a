//! Callqueue CLI - enable editable member status on call queues

mod logging;
mod output;
mod settings;

use anyhow::{Context, Result};
use callqueue_core::application::{CorrectionMode, QueueCorrector};
use callqueue_core::domain::Session;
use callqueue_core::port::{Authenticator, QueueApi, SystemTimeProvider, TimeProvider};
use callqueue_infra_http::{PlatformAuthenticator, PlatformClient};
use clap::{Parser, Subcommand};
use logging::LogFormat;
use settings::{Settings, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "callqueue")]
#[command(about = "Enable editable member status on every call queue", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML); CALLQUEUE_* environment variables override it
    #[arg(long, env = "CALLQUEUE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log output format
    #[arg(long, env = "CALLQUEUE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Enable editableMemberStatus on every queue where it is disabled
    Correct {
        /// Report what would change without sending updates
        #[arg(long)]
        dry_run: bool,
    },

    /// List call queues visible to the account
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_format);
    info!("callqueue v{} starting...", VERSION);

    let config_path = PathBuf::from(shellexpand::tilde(&cli.config).into_owned());
    let settings =
        Settings::load(Some(config_path.as_path())).context("Failed to load settings")?;
    info!(server_url = %settings.server_url, username = %settings.username, "Settings loaded");

    // DI wiring
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let platform = settings.platform_config();
    let authenticator = PlatformAuthenticator::new(&platform, time_provider.clone())
        .context("Failed to create authenticator")?;
    let api: Arc<dyn QueueApi> = Arc::new(
        PlatformClient::new(&platform, time_provider).context("Failed to create API client")?,
    );

    let session = authenticator
        .login(&settings.credentials())
        .await
        .context("Login failed")?;

    let result = match cli.command {
        Commands::Correct { dry_run } => {
            let mode = if dry_run {
                CorrectionMode::DryRun
            } else {
                CorrectionMode::Apply
            };
            run_correct(api, &session, mode).await
        }
        Commands::List => run_list(api.as_ref(), &session).await,
    };

    if let Err(e) = authenticator.logout(&session).await {
        warn!(error = %e, "Logout failed (token left to expire)");
    }

    result
}

async fn run_correct(
    api: Arc<dyn QueueApi>,
    session: &Session,
    mode: CorrectionMode,
) -> Result<()> {
    let corrector = QueueCorrector::new(api, mode);
    let report = corrector.correct_all(session).await;

    print!("{}", output::render_report(&report, corrector.mode()));

    if report.has_failures() {
        anyhow::bail!("{} call queue operation(s) failed", report.failure_count());
    }
    Ok(())
}

async fn run_list(api: &dyn QueueApi, session: &Session) -> Result<()> {
    let queues = api
        .list_queues(session)
        .await
        .context("Failed to list call queues")?;

    print!("{}", output::render_queues(&queues));
    Ok(())
}
