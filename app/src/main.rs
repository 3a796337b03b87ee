use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use common::{
    config::Settings,
    pairing::{LayerMismatch, Pairing},
};
use eyre::Result;
use tracing::error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

mod compare;

const MODULES: &[&str] = &["common", "layer_comparison", "duration_summary"];

#[derive(Parser)]
#[command(about = "Compare per-layer durations of two benchmark implementations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Config file, `compare.yaml` is read when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Folder holding the metrics json files
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,
    /// Folder the charts are written to
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
    /// Label of the reference implementation
    #[arg(long, global = true)]
    baseline: Option<String>,
    /// Label of the implementation compared against the baseline
    #[arg(long, global = true)]
    comparison: Option<String>,
    #[arg(long, global = true)]
    pairing: Option<PairingArg>,
    /// Plot the common layers when layer counts differ instead of failing
    #[arg(long, global = true)]
    truncate_layers: bool,
    /// Open every chart with the configured viewer, as the interactive
    /// display after each plot did originally
    #[arg(long, global = true)]
    show: bool,
    #[arg(short, long, global = true)]
    log: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot every baseline/comparison pair (default)
    Plot,
    /// List discovered results
    Ls,
}

#[derive(Clone, Copy, ValueEnum)]
enum PairingArg {
    /// Match runs on n and k
    Keyed,
    /// Match runs by position after sorting on n
    Index,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.results_dir {
            settings.results_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(label) = &self.baseline {
            settings.baseline = label.clone();
        }
        if let Some(label) = &self.comparison {
            settings.comparison = label.clone();
        }
        if let Some(pairing) = self.pairing {
            settings.pairing = match pairing {
                PairingArg::Keyed => Pairing::Keyed,
                PairingArg::Index => Pairing::Index,
            };
        }
        if self.truncate_layers {
            settings.layer_mismatch = LayerMismatch::Truncate;
        }
        if self.show {
            settings.show = true;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("bench_compare={log_level}"));

    if !args.log.is_empty() {
        for log in &args.log {
            env_filter = env_filter.add_directive(log.parse()?);
        }
    }

    for module in MODULES {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    compare::init_plots();

    if let Err(err) = execute(args).await {
        error!("{err:#}");
        return Err(err);
    }

    Ok(())
}

async fn execute(args: Cli) -> Result<()> {
    let config = compare::load_config(args.config.as_deref()).await?;
    let mut settings = config.settings.clone();
    args.apply(&mut settings);

    match args.command.unwrap_or(Commands::Plot) {
        Commands::Plot => {
            let plots = compare::available_plots(&config);
            for path in compare::run(&settings, &plots).await? {
                println!("{}", path.display());
            }
        }
        Commands::Ls => {
            for line in compare::list(&settings).await? {
                println!("{line}");
            }
        }
    }
    Ok(())
}
