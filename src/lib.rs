pub mod catalog;
pub mod commands;
pub mod config;
pub mod eligibility;
pub mod errors;
pub mod load;
pub mod models;
pub mod ordering;
pub mod planner;
pub mod presentation;

#[cfg(test)]
mod test_utils;

pub use catalog::RuleCatalog;
pub use errors::PlanError;
pub use models::{LongRunKind, LongRunRule, PlanInput, PlanResult, QualityRule, Weekday};
pub use planner::plan_week;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::PlannerConfig;

#[derive(Parser)]
#[command(name = "week-planner")]
#[command(about = "Place quality sessions around the Sunday long run")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Plan a week and print the result as JSON.
  Plan {
    /// Plan request file (JSON PlanInput)
    #[arg(long, conflicts_with_all = ["long_run", "distance", "sessions"])]
    input: Option<PathBuf>,
    /// Long run type: easy, progressive, hilly, big, mp
    #[arg(long = "long", required_unless_present = "input")]
    long_run: Option<LongRunKind>,
    /// Long run distance in miles
    #[arg(long, required_unless_present = "input")]
    distance: Option<f64>,
    /// Quality session key, repeat in order of preference
    #[arg(long = "session")]
    sessions: Vec<String>,
  },

  /// Show which days a long run leaves open.
  Viable {
    #[arg(long = "long")]
    long_run: LongRunKind,
    #[arg(long)]
    distance: f64,
  },

  /// List long run types and quality sessions.
  Sessions,
}

fn init_tracing(config: &PlannerConfig) {
  // stdout carries JSON output, logs go to stderr
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

pub fn run() -> anyhow::Result<()> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let config = PlannerConfig::from_env()?;
  init_tracing(&config);

  let cli = Cli::parse();
  let catalog = config.catalog().context("Failed to load rule catalog")?;
  debug!(sessions = catalog.sessions.len(), "Rule catalog ready");

  let output = match cli.command {
    Commands::Plan {
      input,
      long_run,
      distance,
      sessions,
    } => {
      let request = match (input, long_run, distance) {
        (Some(path), _, _) => commands::plan::read_plan_input(&path)?,
        (None, Some(long_run_type), Some(long_distance_mi)) => PlanInput {
          long_run_type,
          long_distance_mi,
          quality_selections: sessions,
        },
        _ => bail!("either --input or both --long and --distance are required"),
      };
      commands::to_output(&commands::plan::plan(&request, &catalog)?)?
    }
    Commands::Viable { long_run, distance } => {
      commands::to_output(&commands::plan::viable(long_run, distance, &catalog)?)?
    }
    Commands::Sessions => commands::to_output(&commands::catalog::list(&catalog))?,
  };

  println!("{}", output);
  Ok(())
}
