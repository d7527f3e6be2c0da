use anyhow::Result;
use clap::Parser;
use irisd_trainer::TrainerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "irisd-trainer")]
#[command(about = "Train the iris classifier and write the model artifact", long_about = None)]
struct Cli {
    /// Directory the model artifact is written to
    #[arg(short, long, env = "MODEL_DIR", default_value = "models")]
    model_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = TrainerConfig {
        model_dir: cli.model_dir,
        ..Default::default()
    };

    println!("Training model...");
    let report = irisd_trainer::run(&config)?;

    println!("Model accuracy: {:.4}", report.accuracy);
    println!("Model saved to {}", report.model_path.display());

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("irisd_trainer=debug,irisd_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("irisd_trainer=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
