//! demerit server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), seeds the demo
//! accounts unless configuration says otherwise, and serves the JSON API
//! over HTTP.

use anyhow::Context as _;
use clap::Parser;
use demerit_api::{AppState, ServerConfig};
use demerit_auth::{Directory, RegisterStaff, RegisterStudent};
use demerit_core::session::SessionStore;
use demerit_store_mem::MemoryStore;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Demerit record server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("DEMERIT"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Build the identity directory.
  let directory = Directory::new();
  if server_cfg.seed_demo_accounts {
    seed_demo_accounts(&directory)?;
  }

  // One session store and one record store for the process, threaded through
  // the router state explicitly.
  let state = AppState::new(SessionStore::new(), MemoryStore::new(), directory);

  let app = demerit_api::router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Register the built-in demo accounts.
fn seed_demo_accounts(directory: &Directory) -> anyhow::Result<()> {
  directory
    .register_student(RegisterStudent {
      student_id: "12345678".into(),
      name:       "Demo Student".into(),
      email:      "demo.student@example.edu".into(),
      password:   "student123".into(),
      department: "CSE".into(),
      year:       2,
      semester:   3,
    })
    .context("failed to seed demo student")?;

  directory
    .register_staff(RegisterStaff {
      staff_id:   "STAFF123".into(),
      name:       "Demo Staff".into(),
      email:      "demo.staff@example.edu".into(),
      password:   "staff123".into(),
      department: "CSE".into(),
    })
    .context("failed to seed demo staff")?;

  tracing::info!("seeded demo accounts");
  Ok(())
}
