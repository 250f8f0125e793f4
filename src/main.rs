use anyhow::Result;
use backup_relay::config::{self, BackupKind};
use backup_relay::managers::{self, relay::BackupRelay};
use backup_relay::{strategies, utils};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "backup-relay")]
#[command(about = "Relay database backups from ECS to S3 through a shared EFS mount", long_about = None)]
#[command(version)]
struct Cli {
    /// Optional TOML configuration file (environment variables override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backup kind to relay (overrides BACKUP_KIND)
    #[arg(short, long, value_enum, ignore_case = true)]
    kind: Option<BackupKind>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve scheduled invocations from the Lambda runtime (default)
    Lambda,

    /// Run a single invocation and exit
    Run,

    /// Show the backup status derived from the sentinel file
    Status,

    /// Validate configuration
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = config::load_config(cli.config.as_deref())?;
    let relay_config = config::resolve_relay(&file.relay, cli.kind)?;

    let logging_config = managers::logging::LoggingConfig::from_settings(&file.logging);
    let _log_guard = managers::logging::init_logging(&logging_config)?;

    debug!("Resolved configuration: {:?}", relay_config);

    match cli.command.unwrap_or(Commands::Lambda) {
        Commands::Lambda => {
            let relay = build_relay(relay_config).await;
            info!("Serving {} backup relay", relay.config().kind);
            managers::lambda::serve(relay)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }

        Commands::Run => {
            let relay = build_relay(relay_config).await;
            info!("Relay invocation started");
            let outcome = relay.invoke(chrono::Utc::now()).await?;
            info!(?outcome, "Relay invocation finished");
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Status => {
            let sentinel = relay_config.sentinel_path();
            let status = utils::probe_status(&sentinel, SystemTime::now(), utils::STALE_AFTER)?;
            println!("Backup kind: {}", relay_config.kind);
            println!("Sentinel: {}", sentinel.display());
            println!("Status: {}", status);
        }

        Commands::Validate => {
            let strategy = strategies::strategy_for(relay_config.kind);
            println!("✓ Configuration is valid");
            println!();
            println!("Backup kind: {}", relay_config.kind);
            println!("Cluster: {}", relay_config.cluster_name);
            println!("Service: {}", relay_config.service_name);
            println!("Container: {}", relay_config.container_name);
            println!("Bucket: {}", relay_config.s3_bucket);
            println!("Shared mount: {} (local {})", relay_config.efs_path, relay_config.local_path.display());
            println!("Dump file: {}", strategy.dump_file_name());
            println!("Start command: {}", strategy.start_command(&relay_config)?);
        }
    }

    Ok(())
}

/// Build a relay with AWS clients from the default provider chain
async fn build_relay(relay_config: config::RelayConfig) -> BackupRelay {
    let sdk_config = aws_config::load_from_env().await;
    BackupRelay::new(
        relay_config,
        Box::new(utils::RealEcsOps::from_conf(&sdk_config)),
        Box::new(utils::RealS3Ops::from_conf(&sdk_config)),
    )
}
