mod app_config;

use nnprep::{subcommands, utils, Source};

use app_config::AppConfig;
use clap::{Args, Parser, Subcommand};
use std::{error::Error, path::PathBuf};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
  /// YAML file with defaults for any of the flags below
  #[arg(short, long, value_name = "PATH", global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Args)]
struct NetworkArgs {
  /// Stem of the output files
  #[arg(long)]
  name: Option<String>,
  #[arg(short, long, value_name = "DIR")]
  out_dir: Option<String>,
  #[arg(long, value_name = "INT")]
  hidden: Option<usize>,
  #[arg(long, value_name = "INT")]
  outputs: Option<usize>,
  #[arg(long, value_name = "INT")]
  seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
  /// Fetch a dataset and write <name>.train, <name>.test and <name>.init
  Generate {
    /// URL or path of the comma-separated data
    #[arg(short, long, value_name = "URL|PATH")]
    source: Option<String>,
    #[arg(long, value_name = "FLOAT")]
    train_fraction: Option<f64>,
    #[arg(long, value_name = "CHAR")]
    delimiter: Option<char>,
    /// Expected feature columns; inferred from the first row when omitted
    #[arg(long, value_name = "INT")]
    features: Option<usize>,
    #[command(flatten)]
    network: NetworkArgs,
  },
  /// Write only <name>.init for a network with the given input width
  Init {
    #[arg(long, value_name = "INT")]
    features: usize,
    #[command(flatten)]
    network: NetworkArgs,
  },
}

impl NetworkArgs {
  fn into_config(self) -> AppConfig {
    AppConfig {
      name: self.name,
      out_dir: self.out_dir,
      hidden_nodes: self.hidden,
      output_nodes: self.outputs,
      seed: self.seed,
      ..AppConfig::default()
    }
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  utils::init_logging()?;
  let args = Cli::parse();

  let file_config = match &args.config {
    Some(path) => AppConfig::from_file(path)?,
    None => AppConfig::default(),
  };

  match args.command {
    Command::Generate {
      source,
      train_fraction,
      delimiter,
      features,
      network,
    } => {
      let cli_config = AppConfig {
        source,
        train_fraction,
        delimiter,
        feature_count: features,
        ..network.into_config()
      };
      let config = file_config.merge(cli_config);
      let app = subcommands::Generate::new(
        Source::from(config.source()),
        config.build_config(),
        config.out_dir(),
        config.seed,
      );
      app.run().await?;
    }
    Command::Init { features, network } => {
      let config = file_config.merge(network.into_config());
      let app = subcommands::Init::new(features, config.build_config(), config.out_dir(), config.seed);
      let path = app.run()?;
      tracing::info!(path = %path.display(), "wrote initial weights");
    }
  }
  Ok(())
}
