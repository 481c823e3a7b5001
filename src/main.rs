use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use proctop::app::App;
use proctop::config::{self, load_config, load_config_from_path};
use proctop::system::procfs::ProcfsSource;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "proctop",
    about = "Read-only procfs monitor with a refreshing process table"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh delay in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Sort key: memory, pid, name
    #[arg(long)]
    sort: Option<String>,

    /// Number of process rows to display
    #[arg(long)]
    limit: Option<usize>,

    /// Alternate process root, e.g. a container's procfs mount
    #[arg(long, default_value = "/proc")]
    proc_root: PathBuf,

    /// Render a single frame to stdout and exit
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    let app = App::new(&config, ProcfsSource::new(cli.proc_root.clone()));

    if cli.once {
        print!("{}", app.frame()?);
        return Ok(());
    }

    app.run().await
}

/// Diagnostics go to stderr so the table on stdout stays clean; default
/// level is warn unless RUST_LOG overrides it.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if let Some(limit) = cli.limit {
        config.table.display_rows = limit;
    }

    config
}
