use mimalloc::MiMalloc;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = match kb_labs_setup::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        host = %cfg.database.host,
        port = cfg.database.port,
        user = %cfg.database.user,
        database = %cfg.database.name,
        verify_columns = cfg.verify_columns
    );

    match kb_labs_setup::initialize(&cfg, |event| println!("{event}")).await {
        Ok(report) => {
            info!(
                database = %report.database,
                tables = report.tables.len(),
                created = report.created_count(),
                "schema provisioned"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(table = ?e.table(), "schema provisioning failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
